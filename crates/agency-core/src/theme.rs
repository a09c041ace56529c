//! Fixed page palette.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// `rgba(...)` string for canvas fill styles.
    pub fn to_css_rgba(self, alpha: f32) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.0,
            self.1,
            self.2,
            alpha.clamp(0.0, 1.0)
        )
    }

    pub fn to_unit_f32(self) -> [f32; 3] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        ]
    }
}

pub const INK: Rgb = Rgb(0x0a, 0x0a, 0x0a);
pub const CREAM: Rgb = Rgb(0xf4, 0xf1, 0xea);
pub const LIME: Rgb = Rgb(0xc6, 0xff, 0x3d);
pub const RED: Rgb = Rgb(0xff, 0x3b, 0x30);
