//! Trellis core primitives
//!
//! Foundation types shared by every trellis crate: 2D geometry, the retained
//! compositor layer model, and the listener registry used for change
//! notification. No rendering or layout policy lives here.

pub mod geometry;
pub mod layer;
pub mod observer;

pub use geometry::{Affine2D, Point, Rect, Size, Vec2};
pub use layer::{
    ClipBehavior, ClipRectHandle, ClipRectLayer, Color, Layer, PaintCommand, PictureLayer,
};
pub use observer::{ListenerId, ListenerList};
