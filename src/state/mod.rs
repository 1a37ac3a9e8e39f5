//! Interaction and playback state for the popup window.

pub mod playback;
pub mod surface;

pub use playback::Playback;
pub use surface::{Cursor, DisplaySurface, Point, Pointer, Size, SurfaceHost};
