pub mod cursor;
pub mod drag;
pub mod item;
pub mod parallax;
pub mod reveal;
pub mod spring;

pub use cursor::CursorState;
pub use drag::{Bounds, DragStep, Rect, Release};
pub use item::{ItemState, Placement};
pub use reveal::Reveal;
