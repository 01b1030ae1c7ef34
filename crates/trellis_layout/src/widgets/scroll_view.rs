//! Scroll view widget
//!
//! Builder-style configuration for a single-child scrollable region. The
//! widget validates its options against an explicit [`BuildContext`], wires
//! up the effective scroll controller, and instantiates (or updates in
//! place) a [`RenderViewport`]. All scroll geometry lives in the render
//! node; this layer is configuration glue.
//!
//! # Example
//!
//! ```rust,ignore
//! use trellis_layout::prelude::*;
//!
//! let cx = BuildContext::new(TextDirection::Ltr);
//! let (viewport, child_cx) = ScrollView::new()
//!     .scroll_direction(Axis::Vertical)
//!     .padding(EdgeInsets::all(16.0))
//!     .build(&cx, Some(content))?;
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use thiserror::Error;
use trellis_core::ClipBehavior;

use crate::axis::{axis_direction_for, Axis, AxisDirection, TextDirection};
use crate::padding::{EdgeInsets, RenderPadding};
use crate::render_box::RenderBox;
use crate::viewport::RenderViewport;
use crate::viewport_offset::{ScrollController, ScrollPosition, SharedViewportOffset};

// ============================================================================
// Errors
// ============================================================================

/// Construction-time misuse of the scroll view options
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScrollViewError {
    /// `primary = true` means "inherit the ambient controller"; supplying an
    /// explicit controller at the same time is contradictory.
    #[error("an explicit controller cannot be combined with primary = true")]
    ControllerConflict,
}

// ============================================================================
// Behavior Options
// ============================================================================

/// When drag gestures are considered started (forwarded to the gesture layer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragStartBehavior {
    /// At the initial pointer-down position
    Down,
    /// Where the drag gesture was first detected
    #[default]
    Start,
}

/// How the scroll view dismisses an on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardDismissBehavior {
    /// Only dismissed explicitly by the application
    #[default]
    Manual,
    /// Release focus on the first drag-triggered scroll update
    OnDrag,
}

/// Scroll physics requested for a freshly created position
///
/// Physics simulation itself is supplied by the gesture layer; the only
/// property resolved here is whether bring-into-view requests may scroll the
/// position implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollPhysicsHint {
    #[default]
    Default,
    /// Content cannot be scrolled by the user; implicit scrolling is also
    /// forbidden
    NeverScrollable,
}

impl ScrollPhysicsHint {
    pub fn allow_implicit_scrolling(&self) -> bool {
        !matches!(self, ScrollPhysicsHint::NeverScrollable)
    }
}

// ============================================================================
// Build Environment
// ============================================================================

/// Keyboard focus handle shared with the focus system
///
/// The scroll view only ever releases focus; acquiring it is the focus
/// system's business.
#[derive(Clone, Debug, Default)]
pub struct FocusHandle {
    focused: Arc<AtomicBool>,
}

impl FocusHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) {
        self.focused.store(true, Ordering::Release);
    }

    pub fn unfocus(&self) {
        self.focused.store(false, Ordering::Release);
    }

    pub fn has_focus(&self) -> bool {
        self.focused.load(Ordering::Acquire)
    }
}

/// An ambient controller published to descendants
///
/// Declares which axis it drives; scroll views on another axis ignore it.
#[derive(Clone, Debug)]
pub struct PrimaryScrollController {
    controller: ScrollController,
    axis: Axis,
}

impl PrimaryScrollController {
    pub fn new(controller: ScrollController, axis: Axis) -> Self {
        Self { controller, axis }
    }

    pub fn controller(&self) -> &ScrollController {
        &self.controller
    }

    /// Whether a scroll view on `axis` should inherit this controller
    pub fn accepts(&self, axis: Axis) -> bool {
        self.axis == axis
    }
}

/// Ambient environment a widget builds against
///
/// Explicit value, never global state: the reading direction, the optional
/// primary scroll controller published by an ancestor, and the keyboard
/// focus handle.
#[derive(Clone, Debug)]
pub struct BuildContext {
    text_direction: TextDirection,
    primary_controller: Option<PrimaryScrollController>,
    focus: FocusHandle,
}

impl BuildContext {
    pub fn new(text_direction: TextDirection) -> Self {
        Self {
            text_direction,
            primary_controller: None,
            focus: FocusHandle::new(),
        }
    }

    pub fn with_primary_controller(mut self, controller: PrimaryScrollController) -> Self {
        self.primary_controller = Some(controller);
        self
    }

    pub fn with_focus(mut self, focus: FocusHandle) -> Self {
        self.focus = focus;
        self
    }

    pub fn text_direction(&self) -> TextDirection {
        self.text_direction
    }

    pub fn primary_controller(&self) -> Option<&PrimaryScrollController> {
        self.primary_controller.as_ref()
    }

    pub fn focus(&self) -> &FocusHandle {
        &self.focus
    }

    /// The context descendants build against, with no primary controller
    fn without_primary_controller(&self) -> Self {
        Self {
            text_direction: self.text_direction,
            primary_controller: None,
            focus: self.focus.clone(),
        }
    }
}

// ============================================================================
// Scroll View
// ============================================================================

/// Declarative configuration for a single-child scrollable region
#[derive(Debug, Default)]
pub struct ScrollView {
    scroll_direction: Axis,
    reverse: bool,
    padding: Option<EdgeInsets>,
    primary: Option<bool>,
    physics: Option<ScrollPhysicsHint>,
    controller: Option<ScrollController>,
    drag_start_behavior: DragStartBehavior,
    clip_behavior: ClipBehavior,
    restoration_id: Option<String>,
    keyboard_dismiss_behavior: KeyboardDismissBehavior,
}

impl ScrollView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scroll axis (default: vertical)
    pub fn scroll_direction(mut self, axis: Axis) -> Self {
        self.scroll_direction = axis;
        self
    }

    /// Anchor content at the trailing edge instead of the leading one
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Inset the content by the given padding
    pub fn padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Inherit the ambient primary controller
    ///
    /// Mutually exclusive with [`ScrollView::controller`]. When unset, the
    /// ambient controller is still inherited if it accepts this axis.
    pub fn primary(mut self, primary: bool) -> Self {
        self.primary = Some(primary);
        self
    }

    pub fn physics(mut self, physics: ScrollPhysicsHint) -> Self {
        self.physics = Some(physics);
        self
    }

    /// Drive the scroll position from an explicit controller
    pub fn controller(mut self, controller: ScrollController) -> Self {
        self.controller = Some(controller);
        self
    }

    pub fn drag_start_behavior(mut self, behavior: DragStartBehavior) -> Self {
        self.drag_start_behavior = behavior;
        self
    }

    pub fn clip_behavior(mut self, clip_behavior: ClipBehavior) -> Self {
        self.clip_behavior = clip_behavior;
        self
    }

    /// State restoration key forwarded to the restoration scope
    pub fn restoration_id(mut self, id: impl Into<String>) -> Self {
        self.restoration_id = Some(id.into());
        self
    }

    pub fn keyboard_dismiss_behavior(mut self, behavior: KeyboardDismissBehavior) -> Self {
        self.keyboard_dismiss_behavior = behavior;
        self
    }

    pub fn drag_start(&self) -> DragStartBehavior {
        self.drag_start_behavior
    }

    pub fn restoration_key(&self) -> Option<&str> {
        self.restoration_id.as_deref()
    }

    /// The concrete direction this view scrolls, given the ambient locale
    pub fn axis_direction(&self, cx: &BuildContext) -> AxisDirection {
        axis_direction_for(self.scroll_direction, self.reverse, cx.text_direction())
    }

    /// Resolve which offset object the viewport will use
    ///
    /// Order: explicit controller, then the ambient primary controller (when
    /// `primary` asks for it or is unset and the controller accepts this
    /// axis), then a private position owned by the viewport itself. The
    /// bool reports whether the ambient controller was consumed.
    fn resolve_offset(
        &self,
        cx: &BuildContext,
    ) -> Result<(Option<SharedViewportOffset>, bool), ScrollViewError> {
        if let Some(controller) = &self.controller {
            if self.primary == Some(true) {
                return Err(ScrollViewError::ControllerConflict);
            }
            return Ok((Some(controller.position()), false));
        }

        if self.primary != Some(false) {
            if let Some(ambient) = cx.primary_controller() {
                if self.primary == Some(true) || ambient.accepts(self.scroll_direction) {
                    tracing::debug!("scroll view inherits the ambient primary controller");
                    return Ok((Some(ambient.controller().position()), true));
                }
            }
        }

        Ok((None, false))
    }

    /// A fresh private position honoring the physics hint
    fn private_position(&self) -> SharedViewportOffset {
        let allow_implicit = self
            .physics
            .map_or(true, |p| p.allow_implicit_scrolling());
        Arc::new(Mutex::new(ScrollPosition::with_implicit_scrolling(
            0.0,
            allow_implicit,
        ))) as SharedViewportOffset
    }

    fn wrap_in_padding(&self, child: Option<Box<dyn RenderBox>>) -> Option<Box<dyn RenderBox>> {
        match self.padding {
            Some(padding) => Some(Box::new(RenderPadding::new(padding, child))),
            None => child,
        }
    }

    /// Realize the configuration into a viewport render node
    ///
    /// Returns the node together with the context descendants build against
    /// (which drops the primary controller when this view consumed it).
    pub fn build(
        &self,
        cx: &BuildContext,
        child: Option<Box<dyn RenderBox>>,
    ) -> Result<(RenderViewport, BuildContext), ScrollViewError> {
        let (resolved, inherited) = self.resolve_offset(cx)?;
        let offset = resolved.unwrap_or_else(|| self.private_position());
        let axis_direction = self.axis_direction(cx);
        tracing::debug!(
            "scroll view build: direction={:?} clip={:?} inherited_controller={}",
            axis_direction,
            self.clip_behavior,
            inherited
        );

        let viewport = RenderViewport::new(
            axis_direction,
            offset,
            self.clip_behavior,
            self.wrap_in_padding(child),
        );
        let child_context = if inherited {
            cx.without_primary_controller()
        } else {
            cx.clone()
        };
        Ok((viewport, child_context))
    }

    /// Push updated configuration into an existing viewport node
    ///
    /// The node is mutated in place; its setters record the minimal dirty
    /// flags. A viewport driving its own private position keeps it, so
    /// rebuilds do not reset the scroll offset. Returns the descendant
    /// context, as `build` does.
    pub fn update(
        &self,
        cx: &BuildContext,
        viewport: &mut RenderViewport,
    ) -> Result<BuildContext, ScrollViewError> {
        let (resolved, inherited) = self.resolve_offset(cx)?;
        viewport.set_axis_direction(self.axis_direction(cx));
        if let Some(offset) = resolved {
            viewport.set_offset(offset);
        }
        viewport.set_clip_behavior(self.clip_behavior);
        Ok(if inherited {
            cx.without_primary_controller()
        } else {
            cx.clone()
        })
    }

    /// Scroll-update notification hook
    ///
    /// With `KeyboardDismissBehavior::OnDrag`, the first drag-triggered
    /// update releases keyboard focus. Programmatic scrolls never do.
    pub fn on_scroll_update(&self, cx: &BuildContext, drag_triggered: bool) {
        if self.keyboard_dismiss_behavior == KeyboardDismissBehavior::OnDrag
            && drag_triggered
            && cx.focus().has_focus()
        {
            tracing::debug!("dismissing keyboard on drag scroll");
            cx.focus().unfocus();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controller_and_primary_conflict() {
        let cx = BuildContext::new(TextDirection::Ltr);
        let view = ScrollView::new()
            .controller(ScrollController::new())
            .primary(true);
        assert!(matches!(
            view.build(&cx, None),
            Err(ScrollViewError::ControllerConflict)
        ));
    }

    #[test]
    fn explicit_controller_without_primary_is_fine() {
        let cx = BuildContext::new(TextDirection::Ltr);
        let controller = ScrollController::with_initial_offset(0.0);
        let view = ScrollView::new().controller(controller.clone());
        let (viewport, _) = view.build(&cx, None).unwrap();
        assert!(Arc::ptr_eq(
            &(controller.position()),
            viewport.offset()
        ));
    }

    #[test]
    fn horizontal_rtl_resolves_to_left() {
        let cx = BuildContext::new(TextDirection::Rtl);
        let view = ScrollView::new().scroll_direction(Axis::Horizontal);
        assert_eq!(view.axis_direction(&cx), AxisDirection::Left);

        let reversed = ScrollView::new()
            .scroll_direction(Axis::Horizontal)
            .reverse(true);
        assert_eq!(reversed.axis_direction(&cx), AxisDirection::Right);
    }

    #[test]
    fn inherits_ambient_controller_and_unpublishes_it() {
        let primary = ScrollController::new();
        let cx = BuildContext::new(TextDirection::Ltr).with_primary_controller(
            PrimaryScrollController::new(primary.clone(), Axis::Vertical),
        );

        let view = ScrollView::new();
        let (viewport, child_cx) = view.build(&cx, None).unwrap();
        assert!(Arc::ptr_eq(&primary.position(), viewport.offset()));
        assert!(child_cx.primary_controller().is_none());
    }

    #[test]
    fn ambient_controller_on_the_wrong_axis_is_ignored() {
        let primary = ScrollController::new();
        let cx = BuildContext::new(TextDirection::Ltr).with_primary_controller(
            PrimaryScrollController::new(primary.clone(), Axis::Horizontal),
        );

        let view = ScrollView::new(); // vertical
        let (viewport, child_cx) = view.build(&cx, None).unwrap();
        assert!(!Arc::ptr_eq(&primary.position(), viewport.offset()));
        assert!(child_cx.primary_controller().is_some());
    }

    #[test]
    fn primary_false_never_inherits() {
        let primary = ScrollController::new();
        let cx = BuildContext::new(TextDirection::Ltr).with_primary_controller(
            PrimaryScrollController::new(primary.clone(), Axis::Vertical),
        );

        let view = ScrollView::new().primary(false);
        let (viewport, _) = view.build(&cx, None).unwrap();
        assert!(!Arc::ptr_eq(&primary.position(), viewport.offset()));
    }

    #[test]
    fn never_scrollable_physics_forbids_implicit_scrolling() {
        let cx = BuildContext::new(TextDirection::Ltr);
        let view = ScrollView::new().physics(ScrollPhysicsHint::NeverScrollable);
        let (viewport, _) = view.build(&cx, None).unwrap();
        assert!(!viewport.offset().lock().unwrap().allow_implicit_scrolling());
    }

    #[test]
    fn on_drag_dismissal_unfocuses_once() {
        let focus = FocusHandle::new();
        focus.focus();
        let cx = BuildContext::new(TextDirection::Ltr).with_focus(focus.clone());
        let view = ScrollView::new().keyboard_dismiss_behavior(KeyboardDismissBehavior::OnDrag);

        // Programmatic scroll: focus survives.
        view.on_scroll_update(&cx, false);
        assert!(focus.has_focus());

        view.on_scroll_update(&cx, true);
        assert!(!focus.has_focus());
    }

    #[test]
    fn manual_dismissal_keeps_focus_during_drags() {
        let focus = FocusHandle::new();
        focus.focus();
        let cx = BuildContext::new(TextDirection::Ltr).with_focus(focus.clone());
        let view = ScrollView::new();
        view.on_scroll_update(&cx, true);
        assert!(focus.has_focus());
    }
}
