// Motion and interaction tuning shared by the web frontend.

// Cursor overlay
pub const LINK_CURSOR_SCALE: f32 = 1.5; // crosshair scale while over a link
pub const LINK_CURSOR_ROTATION_DEG: f32 = 45.0; // crosshair rotation while over a link
pub const TEXT_HOVER_MIN_CHARS: usize = 10; // text must be strictly longer than this

// Scroll spring
pub const SCROLL_SPRING_STIFFNESS: f32 = 60.0;
pub const SCROLL_SPRING_DAMPING: f32 = 20.0;
pub const SCROLL_SPRING_MASS: f32 = 1.0;
pub const SPRING_REST_DELTA: f32 = 0.001; // |target - x| under which the spring may settle
pub const SPRING_REST_SPEED: f32 = 0.01; // |v| under which the spring may settle
pub const SPRING_MAX_SUBSTEP_SEC: f32 = 1.0 / 240.0; // integration step cap
pub const SPRING_MAX_STEP_SEC: f32 = 1.0; // longest span a single step integrates

// Hero remaps (input progress range -> output range)
pub const HERO_SCALE_INPUT: [f32; 2] = [0.0, 0.2];
pub const HERO_SCALE_OUTPUT: [f32; 2] = [1.0, 1.2];
pub const HERO_OPACITY_INPUT: [f32; 2] = [0.0, 0.15];
pub const HERO_OPACITY_OUTPUT: [f32; 2] = [1.0, 0.0];

// Particle field
pub const PARTICLE_COUNT: usize = 2000;
pub const PARTICLE_HALF_EXTENT: f32 = 5.0; // points fill a cube of side 2 * half extent
pub const PARTICLE_SEED: u64 = 7;
pub const PARTICLE_SPIN_X_RAD_PER_SEC: f32 = -0.1;
pub const PARTICLE_SPIN_Y_RAD_PER_SEC: f32 = -1.0 / 15.0;

// Frame stepping
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // longer gaps (hidden tab) are clamped
