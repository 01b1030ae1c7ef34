//! Edge insets and the padding render box

use trellis_core::{Point, Size, Vec2};

use crate::constraints::BoxConstraints;
use crate::paint::PaintContext;
use crate::render_box::{HitTestResult, RenderBox};

// ============================================================================
// Edge Insets
// ============================================================================

/// Per-side spacing in logical pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// The same inset on every side
    pub const fn all(value: f32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            left: horizontal,
            top: vertical,
            right: horizontal,
            bottom: vertical,
        }
    }

    pub const fn only(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Sum of the left and right insets
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of the top and bottom insets
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Offset of the child's top-left corner
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    /// Grow a size by these insets
    pub fn inflate(&self, size: Size) -> Size {
        Size::new(size.width + self.horizontal(), size.height + self.vertical())
    }
}

// ============================================================================
// Padding Render Box
// ============================================================================

/// Insets a single child
///
/// The child lays out against constraints deflated by the insets; the node
/// sizes itself to the child plus insets, constrained by the parent.
pub struct RenderPadding {
    padding: EdgeInsets,
    child: Option<Box<dyn RenderBox>>,
    size: Size,
}

impl RenderPadding {
    pub fn new(padding: EdgeInsets, child: Option<Box<dyn RenderBox>>) -> Self {
        Self {
            padding,
            child,
            size: Size::ZERO,
        }
    }

    pub fn padding(&self) -> EdgeInsets {
        self.padding
    }

    pub fn set_padding(&mut self, padding: EdgeInsets) {
        self.padding = padding;
    }

    pub fn child(&self) -> Option<&dyn RenderBox> {
        self.child.as_deref()
    }
}

impl RenderBox for RenderPadding {
    fn layout(&mut self, constraints: BoxConstraints) -> Size {
        self.size = match &mut self.child {
            None => constraints.constrain(self.padding.inflate(Size::ZERO)),
            Some(child) => {
                let child_size = child.layout(constraints.deflate(self.padding));
                constraints.constrain(self.padding.inflate(child_size))
            }
        };
        self.size
    }

    fn dry_layout(&self, constraints: BoxConstraints) -> Size {
        match &self.child {
            None => constraints.constrain(self.padding.inflate(Size::ZERO)),
            Some(child) => {
                let child_size = child.dry_layout(constraints.deflate(self.padding));
                constraints.constrain(self.padding.inflate(child_size))
            }
        }
    }

    fn size(&self) -> Size {
        self.size
    }

    fn paint(&mut self, ctx: &mut PaintContext, origin: Vec2) {
        let offset = self.padding.top_left();
        if let Some(child) = &mut self.child {
            child.paint(ctx, origin + offset);
        }
    }

    fn hit_test(&self, result: &mut HitTestResult, position: Point) -> bool {
        if !self.size.to_rect().contains(position) {
            return false;
        }
        match &self.child {
            None => false,
            Some(child) => result.add_with_paint_offset(
                self.padding.top_left(),
                position,
                |result, transformed| child.hit_test(result, transformed),
            ),
        }
    }

    fn min_intrinsic_width(&self, height: f32) -> f32 {
        let inner_height = (height - self.padding.vertical()).max(0.0);
        self.child
            .as_ref()
            .map_or(0.0, |c| c.min_intrinsic_width(inner_height))
            + self.padding.horizontal()
    }

    fn max_intrinsic_width(&self, height: f32) -> f32 {
        let inner_height = (height - self.padding.vertical()).max(0.0);
        self.child
            .as_ref()
            .map_or(0.0, |c| c.max_intrinsic_width(inner_height))
            + self.padding.horizontal()
    }

    fn min_intrinsic_height(&self, width: f32) -> f32 {
        let inner_width = (width - self.padding.horizontal()).max(0.0);
        self.child
            .as_ref()
            .map_or(0.0, |c| c.min_intrinsic_height(inner_width))
            + self.padding.vertical()
    }

    fn max_intrinsic_height(&self, width: f32) -> f32 {
        let inner_width = (width - self.padding.horizontal()).max(0.0);
        self.child
            .as_ref()
            .map_or(0.0, |c| c.max_intrinsic_height(inner_width))
            + self.padding.vertical()
    }

    fn attach(&mut self) {
        if let Some(child) = &mut self.child {
            child.attach();
        }
    }

    fn detach(&mut self) {
        if let Some(child) = &mut self.child {
            child.detach();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_box::RenderColoredBox;
    use trellis_core::Color;

    fn padded_box(padding: EdgeInsets, child_size: Size) -> RenderPadding {
        RenderPadding::new(
            padding,
            Some(Box::new(RenderColoredBox::new(Color::BLACK, child_size))),
        )
    }

    #[test]
    fn layout_adds_insets_around_the_child() {
        let mut node = padded_box(EdgeInsets::all(10.0), Size::new(30.0, 20.0));
        let constraints = BoxConstraints::loose(Size::new(100.0, 100.0));
        let size = node.layout(constraints);
        assert_eq!(size, Size::new(50.0, 40.0));
        assert_eq!(node.dry_layout(constraints), size);
    }

    #[test]
    fn child_constraints_are_deflated() {
        // Child wants 100x100 but only 80x80 is left after the insets.
        let mut node = padded_box(EdgeInsets::all(10.0), Size::new(100.0, 100.0));
        let size = node.layout(BoxConstraints::loose(Size::new(100.0, 100.0)));
        assert_eq!(size, Size::new(100.0, 100.0));
    }

    #[test]
    fn hit_test_skips_the_inset_band() {
        let mut node = padded_box(EdgeInsets::all(10.0), Size::new(30.0, 30.0));
        node.layout(BoxConstraints::loose(Size::new(100.0, 100.0)));

        let mut result = HitTestResult::new();
        assert!(!node.hit_test(&mut result, Point::new(5.0, 5.0)));
        assert!(node.hit_test(&mut result, Point::new(25.0, 25.0)));
        assert_eq!(result.entries()[0].position, Point::new(15.0, 15.0));
    }

    #[test]
    fn intrinsics_include_the_insets() {
        let node = padded_box(EdgeInsets::symmetric(5.0, 8.0), Size::new(30.0, 20.0));
        assert_eq!(node.min_intrinsic_width(100.0), 40.0);
        assert_eq!(node.max_intrinsic_height(100.0), 36.0);
    }

    #[test]
    fn childless_padding_is_just_the_insets() {
        let mut node = RenderPadding::new(EdgeInsets::all(10.0), None);
        let size = node.layout(BoxConstraints::loose(Size::new(100.0, 100.0)));
        assert_eq!(size, Size::new(20.0, 20.0));
    }
}
