//! Single-child scrollable viewport
//!
//! `RenderViewport` is a render box that is smaller than its child along one
//! axis and translates the child at paint time by the current scroll offset.
//! The offset itself lives outside the node (see
//! [`crate::viewport_offset::ViewportOffset`]); the viewport reports layout
//! dimensions to it and repaints when it notifies.
//!
//! Coordinate convention: the scroll position `p` grows in the scroll
//! direction, with 0 at the content origin for `Down`/`Right` and at the
//! trailing edge for `Up`/`Left`. The paint translation therefore flips sign
//! and anchor per direction.

use std::sync::Arc;

use trellis_core::{Affine2D, ClipBehavior, ClipRectHandle, ListenerId, Point, Rect, Size, Vec2};

use crate::axis::{Axis, AxisDirection};
use crate::constraints::BoxConstraints;
use crate::paint::PaintContext;
use crate::render_box::{HitTestResult, RenderBox, RenderFlags};
use crate::viewport_offset::SharedViewportOffset;

// ============================================================================
// Reveal Targeting
// ============================================================================

/// A descendant to scroll into view
///
/// The transform maps the target's local space into the viewport child's
/// space; it is supplied by the caller's render-tree walk. Targets that
/// cannot be measured as a box carry only their paint bounds.
#[derive(Clone, Copy, Debug)]
pub enum RevealTarget {
    Box { bounds: Rect, transform: Affine2D },
    Unsized { bounds: Rect },
}

impl RevealTarget {
    pub fn bounds(&self) -> Rect {
        match self {
            RevealTarget::Box { bounds, .. } => *bounds,
            RevealTarget::Unsized { bounds } => *bounds,
        }
    }
}

/// A scroll offset paired with where the target rect lands at that offset
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealedOffset {
    pub offset: f32,
    pub rect: Rect,
}

/// Capability consumed by bring-into-view escalation
///
/// Ancestor logic that reveals descendants holds this trait, never the
/// concrete node, so sibling viewport variants slot in unchanged.
pub trait Viewport {
    /// The scroll offset that places `target` at `alignment` along the
    /// scroll axis (0 = leading edge, 1 = trailing, 0.5 = centered)
    ///
    /// Pure computation: the offset object is read, never written.
    fn offset_to_reveal(
        &self,
        target: &RevealTarget,
        alignment: f32,
        rect: Option<Rect>,
    ) -> RevealedOffset;
}

// ============================================================================
// Viewport Render Node
// ============================================================================

/// Render box that scrolls a single child along one axis
pub struct RenderViewport {
    axis_direction: AxisDirection,
    offset: SharedViewportOffset,
    clip_behavior: ClipBehavior,
    child: Option<Box<dyn RenderBox>>,
    size: Size,
    /// Retained clip layer, kept alive across frames so the compositor sees
    /// a stable identity; None whenever clipping is unnecessary
    clip_layer: Option<ClipRectHandle>,
    flags: Arc<RenderFlags>,
    offset_subscription: Option<ListenerId>,
}

impl RenderViewport {
    pub fn new(
        axis_direction: AxisDirection,
        offset: SharedViewportOffset,
        clip_behavior: ClipBehavior,
        child: Option<Box<dyn RenderBox>>,
    ) -> Self {
        let mut node = Self {
            axis_direction,
            offset,
            clip_behavior,
            child,
            size: Size::ZERO,
            clip_layer: None,
            flags: Arc::new(RenderFlags::new()),
            offset_subscription: None,
        };
        node.subscribe_to_offset();
        node
    }

    // ------------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------------

    pub fn axis_direction(&self) -> AxisDirection {
        self.axis_direction
    }

    pub fn set_axis_direction(&mut self, value: AxisDirection) {
        if self.axis_direction == value {
            return;
        }
        self.axis_direction = value;
        self.flags.mark_needs_layout();
    }

    pub fn axis(&self) -> Axis {
        self.axis_direction.axis()
    }

    pub fn offset(&self) -> &SharedViewportOffset {
        &self.offset
    }

    /// Swap the offset object, re-pairing the change subscription
    pub fn set_offset(&mut self, value: SharedViewportOffset) {
        if Arc::ptr_eq(&self.offset, &value) {
            return;
        }
        self.unsubscribe_from_offset();
        self.offset = value;
        self.subscribe_to_offset();
        self.flags.mark_needs_layout();
    }

    pub fn clip_behavior(&self) -> ClipBehavior {
        self.clip_behavior
    }

    /// Clip policy change: repaint and re-describe semantics, no re-layout
    pub fn set_clip_behavior(&mut self, value: ClipBehavior) {
        if self.clip_behavior == value {
            return;
        }
        self.clip_behavior = value;
        self.flags.mark_needs_paint();
        self.flags.mark_needs_semantics();
    }

    pub fn child(&self) -> Option<&dyn RenderBox> {
        self.child.as_deref()
    }

    pub fn set_child(&mut self, child: Option<Box<dyn RenderBox>>) {
        self.child = child;
        self.flags.mark_needs_layout();
    }

    /// Dirty flags read by the frame scheduler
    pub fn flags(&self) -> &Arc<RenderFlags> {
        &self.flags
    }

    /// Size computed by the last layout
    pub fn viewport_size(&self) -> Size {
        self.size
    }

    // ------------------------------------------------------------------------
    // Subscription plumbing
    // ------------------------------------------------------------------------

    fn subscribe_to_offset(&mut self) {
        debug_assert!(self.offset_subscription.is_none());
        // Scrolling moves the child at paint time only; layout geometry is
        // unaffected, so the callback marks paint and semantics dirty.
        let flags = Arc::clone(&self.flags);
        let id = self.offset.lock().unwrap().subscribe(Box::new(move || {
            flags.mark_needs_paint();
            flags.mark_needs_semantics();
        }));
        self.offset_subscription = Some(id);
    }

    fn unsubscribe_from_offset(&mut self) {
        if let Some(id) = self.offset_subscription.take() {
            if let Ok(mut offset) = self.offset.lock() {
                offset.unsubscribe(id);
            }
        }
    }

    // ------------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------------

    /// Constraints handed to the child: cross axis untouched, scroll axis
    /// free to grow without bound
    fn inner_constraints(&self, constraints: BoxConstraints) -> BoxConstraints {
        match self.axis() {
            Axis::Horizontal => BoxConstraints::new(
                0.0,
                f32::INFINITY,
                constraints.min_height,
                constraints.max_height,
            ),
            Axis::Vertical => BoxConstraints::new(
                constraints.min_width,
                constraints.max_width,
                0.0,
                f32::INFINITY,
            ),
        }
    }

    fn viewport_extent(&self) -> f32 {
        match self.axis() {
            Axis::Horizontal => self.size.width,
            Axis::Vertical => self.size.height,
        }
    }

    fn child_extent(&self) -> f32 {
        match (&self.child, self.axis()) {
            (None, _) => 0.0,
            (Some(child), Axis::Horizontal) => child.size().width,
            (Some(child), Axis::Vertical) => child.size().height,
        }
    }

    /// The largest reachable scroll position, derived from geometry
    pub fn max_scroll_extent(&self) -> f32 {
        (self.child_extent() - self.viewport_extent()).max(0.0)
    }

    /// Translation applied to the child when the offset reads `position`
    fn paint_offset_for(&self, position: f32, child_size: Size) -> Vec2 {
        match self.axis_direction {
            AxisDirection::Up => Vec2::new(0.0, position - child_size.height + self.size.height),
            AxisDirection::Down => Vec2::new(0.0, -position),
            AxisDirection::Left => Vec2::new(position - child_size.width + self.size.width, 0.0),
            AxisDirection::Right => Vec2::new(-position, 0.0),
        }
    }

    fn current_paint_offset(&self) -> Vec2 {
        let Some(child) = &self.child else {
            return Vec2::ZERO;
        };
        let position = self.offset.lock().unwrap().pixels();
        self.paint_offset_for(position, child.size())
    }

    /// Whether the translated child escapes the viewport rectangle
    fn should_clip_at(&self, paint_offset: Vec2, child_size: Size) -> bool {
        paint_offset.x < 0.0
            || paint_offset.y < 0.0
            || paint_offset.x + child_size.width > self.size.width
            || paint_offset.y + child_size.height > self.size.height
    }

    // ------------------------------------------------------------------------
    // Bring into view
    // ------------------------------------------------------------------------

    /// Scroll the minimum amount that makes `target` visible
    ///
    /// Only acts when the offset object permits implicit scrolling; otherwise
    /// the rect is returned unchanged so the caller escalates to an ancestor
    /// viewport. When the target is already fully visible nothing moves.
    /// Returns the target rect in viewport coordinates after any jump.
    pub fn show_in_viewport(&mut self, target: &RevealTarget, rect: Option<Rect>) -> Rect {
        let allowed = self.offset.lock().unwrap().allow_implicit_scrolling();
        if !allowed {
            return rect.unwrap_or_else(|| target.bounds());
        }

        let leading_edge = self.offset_to_reveal(target, 0.0, rect);
        let trailing_edge = self.offset_to_reveal(target, 1.0, rect);
        let current = self.offset.lock().unwrap().pixels();

        // The two edge reveals bracket every offset at which the target is
        // fully visible; clamp the current offset into that bracket.
        let inverted = leading_edge.offset < trailing_edge.offset;
        let (smaller, larger) = if inverted {
            (&leading_edge, &trailing_edge)
        } else {
            (&trailing_edge, &leading_edge)
        };
        let chosen = if current > larger.offset {
            Some(larger)
        } else if current < smaller.offset {
            Some(smaller)
        } else {
            None
        };

        match chosen {
            Some(revealed) => {
                tracing::trace!(
                    "show_in_viewport jump {:.1} -> {:.1}",
                    current,
                    revealed.offset
                );
                self.offset.lock().unwrap().jump_to(revealed.offset);
                revealed.rect
            }
            None => rect.unwrap_or_else(|| target.bounds()),
        }
    }

    // ------------------------------------------------------------------------
    // Semantics / compositing queries
    // ------------------------------------------------------------------------

    /// Bounds for accessibility enumeration
    ///
    /// The viewport rect grown by the scrolled-past amount on the leading
    /// side and the remaining scrollable amount on the trailing side, so
    /// off-screen-but-reachable semantics nodes stay enumerable.
    pub fn describe_semantics_clip(&self) -> Rect {
        let pixels = self.offset.lock().unwrap().pixels();
        let remaining = self.max_scroll_extent() - pixels;
        let b = self.size.to_rect();
        match self.axis_direction {
            AxisDirection::Up => {
                Rect::from_ltrb(b.left(), b.top() - remaining, b.right(), b.bottom() + pixels)
            }
            AxisDirection::Down => {
                Rect::from_ltrb(b.left(), b.top() - pixels, b.right(), b.bottom() + remaining)
            }
            AxisDirection::Left => {
                Rect::from_ltrb(b.left() - remaining, b.top(), b.right() + pixels, b.bottom())
            }
            AxisDirection::Right => {
                Rect::from_ltrb(b.left() - pixels, b.top(), b.right() + remaining, b.bottom())
            }
        }
    }

    /// The rect painting will be clipped to, if any
    pub fn describe_approximate_paint_clip(&self) -> Option<Rect> {
        if self.child.is_none() || !self.clip_behavior.clips() {
            return None;
        }
        let child_size = self.child.as_ref().map_or(Size::ZERO, |c| c.size());
        if self.should_clip_at(self.current_paint_offset(), child_size) {
            Some(self.size.to_rect())
        } else {
            None
        }
    }
}

impl Viewport for RenderViewport {
    fn offset_to_reveal(
        &self,
        target: &RevealTarget,
        alignment: f32,
        rect: Option<Rect>,
    ) -> RevealedOffset {
        debug_assert!((0.0..=1.0).contains(&alignment));
        let current = self.offset.lock().unwrap().pixels();

        let (child_size, bounds, transform) = match (&self.child, target) {
            (Some(child), RevealTarget::Box { bounds, transform }) => {
                (child.size(), *bounds, *transform)
            }
            // Unmeasurable target: deliberately a no-op, not a computed
            // value. The caller gets the current offset and its rect back
            // untouched.
            _ => {
                return RevealedOffset {
                    offset: current,
                    rect: rect.unwrap_or_else(|| target.bounds()),
                };
            }
        };

        let rect = rect.unwrap_or(bounds);
        let rect_in_child = transform.transform_rect(rect);

        // Leading offset measures from the content's scroll origin, which is
        // the far edge for reversed directions.
        let (leading, target_extent, viewport_extent) = match self.axis_direction {
            AxisDirection::Up => (
                child_size.height - rect_in_child.bottom(),
                rect_in_child.height(),
                self.size.height,
            ),
            AxisDirection::Down => {
                (rect_in_child.top(), rect_in_child.height(), self.size.height)
            }
            AxisDirection::Left => (
                child_size.width - rect_in_child.right(),
                rect_in_child.width(),
                self.size.width,
            ),
            AxisDirection::Right => {
                (rect_in_child.left(), rect_in_child.width(), self.size.width)
            }
        };

        let offset = leading - (viewport_extent - target_extent) * alignment;
        let revealed_rect = rect_in_child.translate(self.paint_offset_for(offset, child_size));
        RevealedOffset {
            offset,
            rect: revealed_rect,
        }
    }
}

impl RenderBox for RenderViewport {
    fn layout(&mut self, constraints: BoxConstraints) -> Size {
        let inner = self.inner_constraints(constraints);
        self.size = match &mut self.child {
            None => constraints.smallest(),
            Some(child) => constraints.constrain(child.layout(inner)),
        };

        let viewport_extent = self.viewport_extent();
        let max_extent = self.max_scroll_extent();
        {
            let mut offset = self.offset.lock().unwrap();
            offset.apply_viewport_dimension(viewport_extent);
            offset.apply_content_dimensions(0.0, max_extent);
        }
        tracing::trace!(
            "viewport layout size={:?} extent={:.1} scrollable=[0, {:.1}]",
            self.size,
            viewport_extent,
            max_extent
        );
        self.size
    }

    fn dry_layout(&self, constraints: BoxConstraints) -> Size {
        match &self.child {
            None => constraints.smallest(),
            Some(child) => constraints.constrain(child.dry_layout(self.inner_constraints(constraints))),
        }
    }

    fn size(&self) -> Size {
        self.size
    }

    fn paint(&mut self, ctx: &mut PaintContext, origin: Vec2) {
        let Some(child_size) = self.child.as_ref().map(|c| c.size()) else {
            self.clip_layer = None;
            return;
        };

        let position = self.offset.lock().unwrap().pixels();
        let paint_offset = self.paint_offset_for(position, child_size);
        let clipped = self.clip_behavior.clips() && self.should_clip_at(paint_offset, child_size);
        let clip_rect = Rect::from_origin_size(Point::ZERO + origin, self.size);
        let clip_behavior = self.clip_behavior;

        // Taken up front: either returned by push_clip_rect with the same
        // identity, or dropped because this frame does not clip.
        let reuse = self.clip_layer.take();
        let mut retained = None;
        if let Some(child) = self.child.as_mut() {
            if clipped {
                retained = Some(ctx.push_clip_rect(reuse, clip_rect, clip_behavior, |inner| {
                    child.paint(inner, origin + paint_offset);
                }));
            } else {
                child.paint(ctx, origin + paint_offset);
            }
        }
        self.clip_layer = retained;
        tracing::trace!("viewport paint offset={:?} clipped={}", paint_offset, clipped);
    }

    fn hit_test(&self, result: &mut HitTestResult, position: Point) -> bool {
        if !self.size.to_rect().contains(position) {
            return false;
        }
        let Some(child) = &self.child else {
            return false;
        };
        let paint_offset = {
            let pixels = self.offset.lock().unwrap().pixels();
            self.paint_offset_for(pixels, child.size())
        };
        result.add_with_paint_offset(paint_offset, position, |result, transformed| {
            child.hit_test(result, transformed)
        })
    }

    fn min_intrinsic_width(&self, height: f32) -> f32 {
        self.child.as_ref().map_or(0.0, |c| c.min_intrinsic_width(height))
    }

    fn max_intrinsic_width(&self, height: f32) -> f32 {
        self.child.as_ref().map_or(0.0, |c| c.max_intrinsic_width(height))
    }

    fn min_intrinsic_height(&self, width: f32) -> f32 {
        self.child.as_ref().map_or(0.0, |c| c.min_intrinsic_height(width))
    }

    fn max_intrinsic_height(&self, width: f32) -> f32 {
        self.child.as_ref().map_or(0.0, |c| c.max_intrinsic_height(width))
    }

    /// Never delegated: scrolled content must not shift an ancestor's
    /// baseline-aligned layout.
    fn distance_to_baseline(&self) -> Option<f32> {
        None
    }

    fn attach(&mut self) {
        if self.offset_subscription.is_none() {
            self.subscribe_to_offset();
        }
        if let Some(child) = &mut self.child {
            child.attach();
        }
    }

    fn detach(&mut self) {
        self.unsubscribe_from_offset();
        self.clip_layer = None;
        if let Some(child) = &mut self.child {
            child.detach();
        }
    }
}

impl Drop for RenderViewport {
    fn drop(&mut self) {
        self.unsubscribe_from_offset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_box::RenderColoredBox;
    use crate::viewport_offset::ScrollPosition;
    use std::sync::Mutex;
    use trellis_core::Color;

    fn viewport_with_child(
        direction: AxisDirection,
        position: f32,
        child_size: Size,
    ) -> RenderViewport {
        let offset: SharedViewportOffset = Arc::new(Mutex::new(ScrollPosition::new(position)));
        let child = Box::new(RenderColoredBox::new(Color::BLACK, child_size));
        let mut node = RenderViewport::new(direction, offset, ClipBehavior::HardEdge, Some(child));
        node.layout(BoxConstraints::loose(Size::new(100.0, 100.0)));
        node
    }

    #[test]
    fn paint_offset_down() {
        let node = viewport_with_child(AxisDirection::Down, 50.0, Size::new(100.0, 300.0));
        assert_eq!(node.current_paint_offset(), Vec2::new(0.0, -50.0));
    }

    #[test]
    fn paint_offset_up() {
        let node = viewport_with_child(AxisDirection::Up, 0.0, Size::new(100.0, 300.0));
        // 0 - 300 + 100: content anchored at the bottom edge.
        assert_eq!(node.current_paint_offset(), Vec2::new(0.0, -200.0));
    }

    #[test]
    fn paint_offset_right() {
        let node = viewport_with_child(AxisDirection::Right, 30.0, Size::new(300.0, 100.0));
        assert_eq!(node.current_paint_offset(), Vec2::new(-30.0, 0.0));
    }

    #[test]
    fn paint_offset_left() {
        let node = viewport_with_child(AxisDirection::Left, 30.0, Size::new(300.0, 100.0));
        assert_eq!(node.current_paint_offset(), Vec2::new(-170.0, 0.0));
    }

    #[test]
    fn clip_needed_iff_child_escapes_viewport() {
        let overflowing = viewport_with_child(AxisDirection::Down, 50.0, Size::new(100.0, 300.0));
        assert!(overflowing.should_clip_at(
            overflowing.current_paint_offset(),
            Size::new(100.0, 300.0)
        ));

        let fitting = viewport_with_child(AxisDirection::Down, 0.0, Size::new(100.0, 80.0));
        assert!(!fitting.should_clip_at(fitting.current_paint_offset(), Size::new(100.0, 80.0)));
    }

    #[test]
    fn layout_reports_content_range_to_the_offset() {
        let node = viewport_with_child(AxisDirection::Down, 0.0, Size::new(100.0, 300.0));
        assert_eq!(node.max_scroll_extent(), 200.0);

        let fitting = viewport_with_child(AxisDirection::Down, 0.0, Size::new(100.0, 80.0));
        assert_eq!(fitting.max_scroll_extent(), 0.0);
    }

    #[test]
    fn childless_viewport_takes_smallest_size() {
        let offset: SharedViewportOffset = Arc::new(Mutex::new(ScrollPosition::new(0.0)));
        let mut node = RenderViewport::new(
            AxisDirection::Down,
            offset,
            ClipBehavior::HardEdge,
            None,
        );
        let size = node.layout(BoxConstraints::new(10.0, 100.0, 20.0, 100.0));
        assert_eq!(size, Size::new(10.0, 20.0));
        assert_eq!(node.max_scroll_extent(), 0.0);
    }

    #[test]
    fn semantics_clip_down_and_up_mirror() {
        let down = viewport_with_child(AxisDirection::Down, 50.0, Size::new(100.0, 300.0));
        // pixels = 50, remaining = 150.
        assert_eq!(
            down.describe_semantics_clip(),
            Rect::from_ltrb(0.0, -50.0, 100.0, 250.0)
        );

        let up = viewport_with_child(AxisDirection::Up, 50.0, Size::new(100.0, 300.0));
        assert_eq!(
            up.describe_semantics_clip(),
            Rect::from_ltrb(0.0, -150.0, 100.0, 150.0)
        );
    }

    #[test]
    fn semantics_clip_left_and_right_mirror() {
        let right = viewport_with_child(AxisDirection::Right, 40.0, Size::new(300.0, 100.0));
        assert_eq!(
            right.describe_semantics_clip(),
            Rect::from_ltrb(-40.0, 0.0, 260.0, 100.0)
        );

        let left = viewport_with_child(AxisDirection::Left, 40.0, Size::new(300.0, 100.0));
        assert_eq!(
            left.describe_semantics_clip(),
            Rect::from_ltrb(-160.0, 0.0, 140.0, 100.0)
        );
    }

    #[test]
    fn reveal_is_idempotent_for_a_centered_target() {
        // Viewport 100 tall, child 300, scrolled to 100. The visible band is
        // y in [100, 200]; a 20-tall target centered at 150 stays put under
        // alignment 0.5.
        let node = viewport_with_child(AxisDirection::Down, 100.0, Size::new(100.0, 300.0));
        let target = RevealTarget::Box {
            bounds: Rect::new(0.0, 140.0, 100.0, 20.0),
            transform: Affine2D::IDENTITY,
        };
        let revealed = node.offset_to_reveal(&target, 0.5, None);
        assert_eq!(revealed.offset, 100.0);
        assert_eq!(revealed.rect, Rect::new(0.0, 40.0, 100.0, 20.0));
    }

    #[test]
    fn reveal_mirrors_for_reversed_directions() {
        // Up-direction: leading measures from the bottom of the content.
        let node = viewport_with_child(AxisDirection::Up, 0.0, Size::new(100.0, 300.0));
        let target = RevealTarget::Box {
            bounds: Rect::new(0.0, 0.0, 100.0, 20.0),
            transform: Affine2D::IDENTITY,
        };
        // Rect at the content top: leading = 300 - 20 = 280.
        let revealed = node.offset_to_reveal(&target, 0.0, None);
        assert_eq!(revealed.offset, 280.0);
    }

    #[test]
    fn reveal_and_show_mirror_for_left_direction() {
        // Left-direction: leading measures from the right edge of the content.
        let mut node = viewport_with_child(AxisDirection::Left, 0.0, Size::new(300.0, 100.0));
        let target = RevealTarget::Box {
            bounds: Rect::new(0.0, 0.0, 20.0, 100.0),
            transform: Affine2D::IDENTITY,
        };

        // Rect at the content's left edge: leading = 300 - 20 = 280, and the
        // rect re-projects to x = 80 at that offset.
        let revealed = node.offset_to_reveal(&target, 0.0, None);
        assert_eq!(revealed.offset, 280.0);
        assert_eq!(revealed.rect, Rect::new(80.0, 0.0, 20.0, 100.0));

        // Bring-into-view clamps to the trailing reveal: 280 - (100 - 20).
        let rect = node.show_in_viewport(&target, None);
        assert_eq!(node.offset().lock().unwrap().pixels(), 200.0);
        assert_eq!(rect, Rect::new(0.0, 0.0, 20.0, 100.0));
    }

    #[test]
    fn reveal_applies_the_supplied_transform() {
        let node = viewport_with_child(AxisDirection::Down, 0.0, Size::new(100.0, 300.0));
        let target = RevealTarget::Box {
            bounds: Rect::new(0.0, 0.0, 10.0, 10.0),
            transform: Affine2D::translation(0.0, 120.0),
        };
        let revealed = node.offset_to_reveal(&target, 0.0, None);
        assert_eq!(revealed.offset, 120.0);
        assert_eq!(revealed.rect, Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn reveal_falls_back_to_current_offset_for_unsized_targets() {
        let node = viewport_with_child(AxisDirection::Down, 60.0, Size::new(100.0, 300.0));
        let target = RevealTarget::Unsized {
            bounds: Rect::new(5.0, 5.0, 10.0, 10.0),
        };
        let revealed = node.offset_to_reveal(&target, 0.0, None);
        assert_eq!(revealed.offset, 60.0);
        assert_eq!(revealed.rect, Rect::new(5.0, 5.0, 10.0, 10.0));
    }

    #[test]
    fn intrinsics_delegate_to_the_child_and_baseline_does_not() {
        let node = viewport_with_child(AxisDirection::Down, 0.0, Size::new(100.0, 300.0));
        assert_eq!(node.min_intrinsic_width(50.0), 100.0);
        assert_eq!(node.max_intrinsic_height(50.0), 300.0);
        assert_eq!(node.distance_to_baseline(), None);
    }

    #[test]
    fn setting_the_same_offset_object_is_a_noop() {
        let offset: SharedViewportOffset = Arc::new(Mutex::new(ScrollPosition::new(0.0)));
        let mut node = RenderViewport::new(
            AxisDirection::Down,
            Arc::clone(&offset),
            ClipBehavior::HardEdge,
            None,
        );
        node.flags().take_needs_layout();
        node.set_offset(offset);
        assert!(!node.flags().needs_layout());
    }

    #[test]
    fn offset_notification_marks_paint_not_layout() {
        let node = viewport_with_child(AxisDirection::Down, 0.0, Size::new(100.0, 300.0));
        node.flags().take_needs_layout();
        node.flags().take_needs_paint();
        node.flags().take_needs_semantics();

        node.offset().lock().unwrap().jump_to(25.0);
        assert!(node.flags().needs_paint());
        assert!(node.flags().needs_semantics());
        assert!(!node.flags().needs_layout());
    }
}
