// DOM hooks and canvas tuning for the web frontend.

// Element ids the page markup provides
pub const CURSOR_ID: &str = "cursor"; // crosshair overlay
pub const CURSOR_LABEL_ID: &str = "cursor-label"; // text shown next to the crosshair over links
pub const HERO_ORB_ID: &str = "hero-orb"; // scroll-scaled hero decoration
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";

// Class toggled on the overlay while hovering a link
pub const CURSOR_LINK_CLASS: &str = "is-link";
pub const CURSOR_TEXT_CLASS: &str = "is-text";

// Particle projection
pub const PARTICLE_CAMERA_Z: f32 = 12.0; // camera distance from the cloud centre
pub const PARTICLE_FOVY_DEG: f32 = 60.0;
pub const PARTICLE_SIZE_PX: f64 = 1.5; // square side at full nearness, in CSS px
pub const PARTICLE_ALPHA_MIN: f32 = 0.15; // alpha of the farthest points
pub const PARTICLE_ALPHA_MAX: f32 = 0.9; // alpha of the nearest points

// Media query for users who asked the OS to reduce motion
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
