//! Render boxes
//!
//! The `RenderBox` trait is the layout protocol every render node speaks:
//! layout against box constraints, paint into a retained context, answer hit
//! tests and intrinsic size queries. Nodes record invalidation in
//! [`RenderFlags`], which the external frame scheduler reads and clears
//! before the next layout/paint pass.

use std::sync::atomic::{AtomicBool, Ordering};

use smallvec::SmallVec;
use trellis_core::{Color, Point, Rect, Size, Vec2};

use crate::constraints::BoxConstraints;
use crate::paint::PaintContext;

// ============================================================================
// Dirty Flags
// ============================================================================

/// Per-node invalidation flags read by the frame scheduler
///
/// Setters on render nodes mark the minimal recomputation needed; nothing is
/// recomputed eagerly. Marking layout dirty implies a repaint.
#[derive(Debug, Default)]
pub struct RenderFlags {
    needs_layout: AtomicBool,
    needs_paint: AtomicBool,
    needs_semantics: AtomicBool,
}

impl RenderFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_needs_layout(&self) {
        self.needs_layout.store(true, Ordering::Release);
        self.needs_paint.store(true, Ordering::Release);
    }

    pub fn mark_needs_paint(&self) {
        self.needs_paint.store(true, Ordering::Release);
    }

    pub fn mark_needs_semantics(&self) {
        self.needs_semantics.store(true, Ordering::Release);
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout.load(Ordering::Acquire)
    }

    pub fn needs_paint(&self) -> bool {
        self.needs_paint.load(Ordering::Acquire)
    }

    pub fn needs_semantics(&self) -> bool {
        self.needs_semantics.load(Ordering::Acquire)
    }

    /// Read and clear the layout flag
    pub fn take_needs_layout(&self) -> bool {
        self.needs_layout.swap(false, Ordering::AcqRel)
    }

    /// Read and clear the paint flag
    pub fn take_needs_paint(&self) -> bool {
        self.needs_paint.swap(false, Ordering::AcqRel)
    }

    /// Read and clear the semantics flag
    pub fn take_needs_semantics(&self) -> bool {
        self.needs_semantics.swap(false, Ordering::AcqRel)
    }
}

// ============================================================================
// Hit Testing
// ============================================================================

/// One node hit during a hit test, with the position in its local space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitTestEntry {
    pub position: Point,
}

/// Accumulates the nodes hit along a hit-test walk, front to back
#[derive(Debug, Default)]
pub struct HitTestResult {
    entries: SmallVec<[HitTestEntry; 8]>,
}

impl HitTestResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: HitTestEntry) {
        self.entries.push(entry);
    }

    /// Hit test a child painted at `offset`
    ///
    /// Translates the position into the child's coordinate space before
    /// delegating; the child sees local coordinates only.
    pub fn add_with_paint_offset(
        &mut self,
        offset: Vec2,
        position: Point,
        hit_test: impl FnOnce(&mut HitTestResult, Point) -> bool,
    ) -> bool {
        hit_test(self, position - offset)
    }

    pub fn entries(&self) -> &[HitTestEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

// ============================================================================
// RenderBox Trait
// ============================================================================

/// The layout/paint protocol for a box in the render tree
///
/// `layout` must leave `size` equal to the returned value; `dry_layout` must
/// answer identically to `layout` for the same constraints without any side
/// effect. Positions handed to `hit_test` are in the node's local space;
/// `origin` handed to `paint` is the node's top-left in the enclosing layer
/// space.
pub trait RenderBox {
    fn layout(&mut self, constraints: BoxConstraints) -> Size;

    /// Side-effect-free sizing query; must match `layout` exactly
    fn dry_layout(&self, constraints: BoxConstraints) -> Size;

    /// Size computed by the last `layout`
    fn size(&self) -> Size;

    fn paint(&mut self, ctx: &mut PaintContext, origin: Vec2);

    fn hit_test(&self, result: &mut HitTestResult, position: Point) -> bool;

    fn min_intrinsic_width(&self, _height: f32) -> f32 {
        0.0
    }

    fn max_intrinsic_width(&self, _height: f32) -> f32 {
        0.0
    }

    fn min_intrinsic_height(&self, _width: f32) -> f32 {
        0.0
    }

    fn max_intrinsic_height(&self, _width: f32) -> f32 {
        0.0
    }

    /// Distance from the top of the box to its alphabetic baseline, if any
    fn distance_to_baseline(&self) -> Option<f32> {
        None
    }

    /// Called when the node enters the active render tree
    fn attach(&mut self) {}

    /// Called when the node leaves the active render tree; must release any
    /// retained compositor resources and external subscriptions
    fn detach(&mut self) {}
}

// ============================================================================
// Colored Box
// ============================================================================

/// Leaf box that fills itself with a solid color
///
/// Prefers a fixed size and yields to whatever the constraints allow.
#[derive(Debug)]
pub struct RenderColoredBox {
    color: Color,
    preferred_size: Size,
    size: Size,
}

impl RenderColoredBox {
    pub fn new(color: Color, preferred_size: Size) -> Self {
        Self {
            color,
            preferred_size,
            size: Size::ZERO,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl RenderBox for RenderColoredBox {
    fn layout(&mut self, constraints: BoxConstraints) -> Size {
        self.size = constraints.constrain(self.preferred_size);
        self.size
    }

    fn dry_layout(&self, constraints: BoxConstraints) -> Size {
        constraints.constrain(self.preferred_size)
    }

    fn size(&self) -> Size {
        self.size
    }

    fn paint(&mut self, ctx: &mut PaintContext, origin: Vec2) {
        if self.size.is_empty() {
            return;
        }
        ctx.fill_rect(
            Rect::from_origin_size(Point::ZERO + origin, self.size),
            self.color,
        );
    }

    fn hit_test(&self, result: &mut HitTestResult, position: Point) -> bool {
        if self.size.to_rect().contains(position) {
            result.add(HitTestEntry { position });
            true
        } else {
            false
        }
    }

    fn min_intrinsic_width(&self, _height: f32) -> f32 {
        self.preferred_size.width
    }

    fn max_intrinsic_width(&self, _height: f32) -> f32 {
        self.preferred_size.width
    }

    fn min_intrinsic_height(&self, _width: f32) -> f32 {
        self.preferred_size.height
    }

    fn max_intrinsic_height(&self, _width: f32) -> f32 {
        self.preferred_size.height
    }
}
