//! Box constraints
//!
//! An immutable min/max range per axis, passed down the render tree during
//! layout. A render box must size itself within the constraints it receives;
//! parents size themselves around the result.

use trellis_core::Size;

use crate::padding::EdgeInsets;

/// Min/max bounds for width and height
///
/// Infinite maxima are legal and mean "unbounded on that axis"; infinite
/// minima are not.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxConstraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl BoxConstraints {
    pub fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        debug_assert!(!min_width.is_nan() && !max_width.is_nan());
        debug_assert!(!min_height.is_nan() && !max_height.is_nan());
        debug_assert!(min_width >= 0.0 && min_height >= 0.0);
        debug_assert!(min_width <= max_width && min_height <= max_height);
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Constraints that can only be satisfied by exactly `size`
    pub fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Constraints with zero minima and `size` as the maxima
    pub fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    pub fn constrain_width(&self, width: f32) -> f32 {
        width.clamp(self.min_width, self.max_width)
    }

    pub fn constrain_height(&self, height: f32) -> f32 {
        height.clamp(self.min_height, self.max_height)
    }

    /// Clamp a size into these constraints
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            self.constrain_width(size.width),
            self.constrain_height(size.height),
        )
    }

    /// The smallest size satisfying the constraints
    pub fn smallest(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }

    /// The largest size satisfying the constraints (may be infinite)
    pub fn biggest(&self) -> Size {
        Size::new(self.max_width, self.max_height)
    }

    /// Shrink the constraints by the given insets, never below zero
    pub fn deflate(&self, insets: EdgeInsets) -> Self {
        let dw = insets.horizontal();
        let dh = insets.vertical();
        let min_width = (self.min_width - dw).max(0.0);
        let min_height = (self.min_height - dh).max(0.0);
        Self::new(
            min_width,
            (self.max_width - dw).max(min_width),
            min_height,
            (self.max_height - dh).max(min_height),
        )
    }

    pub fn has_bounded_width(&self) -> bool {
        self.max_width.is_finite()
    }

    pub fn has_bounded_height(&self) -> bool {
        self.max_height.is_finite()
    }

    pub fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }
}

impl Default for BoxConstraints {
    fn default() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constrain_clamps_both_axes() {
        let c = BoxConstraints::new(10.0, 100.0, 20.0, 50.0);
        assert_eq!(c.constrain(Size::new(5.0, 200.0)), Size::new(10.0, 50.0));
        assert_eq!(c.constrain(Size::new(60.0, 30.0)), Size::new(60.0, 30.0));
    }

    #[test]
    fn tight_and_loose() {
        let size = Size::new(40.0, 30.0);
        let tight = BoxConstraints::tight(size);
        assert!(tight.is_tight());
        assert_eq!(tight.smallest(), size);
        assert_eq!(tight.biggest(), size);

        let loose = BoxConstraints::loose(size);
        assert_eq!(loose.smallest(), Size::ZERO);
        assert_eq!(loose.biggest(), size);
    }

    #[test]
    fn deflate_never_goes_negative() {
        let c = BoxConstraints::new(0.0, 10.0, 0.0, 10.0);
        let d = c.deflate(EdgeInsets::all(20.0));
        assert_eq!(d.max_width, 0.0);
        assert_eq!(d.max_height, 0.0);
    }

    #[test]
    fn deflate_keeps_infinite_axis_infinite() {
        let c = BoxConstraints::new(0.0, f32::INFINITY, 0.0, 100.0);
        let d = c.deflate(EdgeInsets::all(8.0));
        assert!(!d.has_bounded_width());
        assert_eq!(d.max_height, 84.0);
    }
}
