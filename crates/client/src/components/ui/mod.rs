//! UI primitives (Button, Alert, skeleton, scroll area).

pub mod alert;
pub mod button;
pub mod scroll_area;
pub mod skeleton;

pub use alert::*;
pub use button::*;
pub use scroll_area::*;
pub use skeleton::*;
