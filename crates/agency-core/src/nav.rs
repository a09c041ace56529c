//! In-page section anchors.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Matrix,
    Arch,
    Proof,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Matrix, Section::Arch, Section::Proof];

    /// Element id of the section on the page.
    pub fn id(self) -> &'static str {
        match self {
            Section::Matrix => "matrix",
            Section::Arch => "arch",
            Section::Proof => "proof",
        }
    }

    pub fn fragment(self) -> String {
        format!("#{}", self.id())
    }

    /// Parse an `href` such as `#arch` or `/#proof`. Only bare in-page
    /// fragments (optionally after a leading `/`) are accepted.
    pub fn from_href(href: &str) -> Option<Section> {
        let frag = href.trim().strip_prefix('/').unwrap_or(href.trim());
        let id = frag.strip_prefix('#')?;
        Section::ALL
            .into_iter()
            .find(|s| s.id().eq_ignore_ascii_case(id))
    }
}
