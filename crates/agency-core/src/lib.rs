pub mod constants;
pub mod lifecycle;
pub mod nav;
pub mod particles;
pub mod pointer;
pub mod reactive;
pub mod scroll;
pub mod spring;
pub mod theme;

pub use lifecycle::*;
pub use nav::*;
pub use particles::*;
pub use pointer::*;
pub use reactive::*;
pub use scroll::*;
pub use spring::*;
