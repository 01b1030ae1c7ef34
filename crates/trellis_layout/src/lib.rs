//! Trellis layout engine
//!
//! Constraint-based render boxes and the single-child scrollable viewport.
//! A parent hands [`BoxConstraints`] down during layout; each box sizes
//! itself within them and reports back. Paint output is recorded into the
//! retained layer model from `trellis_core`, and scroll state flows through
//! the [`ViewportOffset`] protocol so the viewport never owns its position.
//!
//! The typical entry point is the [`ScrollView`] widget, which resolves the
//! ambient build context into a configured [`RenderViewport`].

pub mod axis;
pub mod constraints;
pub mod padding;
pub mod paint;
pub mod render_box;
pub mod viewport;
pub mod viewport_offset;
pub mod widgets;

pub use axis::{axis_direction_for, Axis, AxisDirection, TextDirection};
pub use constraints::BoxConstraints;
pub use padding::{EdgeInsets, RenderPadding};
pub use paint::PaintContext;
pub use render_box::{HitTestEntry, HitTestResult, RenderBox, RenderColoredBox, RenderFlags};
pub use viewport::{RenderViewport, RevealTarget, RevealedOffset, Viewport};
pub use viewport_offset::{
    ScrollController, ScrollPosition, SharedViewportOffset, ViewportOffset,
};
pub use widgets::{
    BuildContext, DragStartBehavior, FocusHandle, KeyboardDismissBehavior,
    PrimaryScrollController, ScrollPhysicsHint, ScrollView, ScrollViewError,
};

/// Convenience re-exports for downstream crates
pub mod prelude {
    pub use crate::axis::{axis_direction_for, Axis, AxisDirection, TextDirection};
    pub use crate::constraints::BoxConstraints;
    pub use crate::padding::{EdgeInsets, RenderPadding};
    pub use crate::paint::PaintContext;
    pub use crate::render_box::{HitTestResult, RenderBox, RenderColoredBox, RenderFlags};
    pub use crate::viewport::{RenderViewport, RevealTarget, RevealedOffset, Viewport};
    pub use crate::viewport_offset::{
        ScrollController, ScrollPosition, SharedViewportOffset, ViewportOffset,
    };
    pub use crate::widgets::{
        BuildContext, DragStartBehavior, FocusHandle, KeyboardDismissBehavior,
        PrimaryScrollController, ScrollPhysicsHint, ScrollView, ScrollViewError,
    };
    pub use trellis_core::{
        Affine2D, ClipBehavior, Color, Point, Rect, Size, Vec2,
    };
}
