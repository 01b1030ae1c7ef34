//! Scroll axes and directions

/// The two layout axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    Horizontal,
    #[default]
    Vertical,
}

/// A signed direction along one axis
///
/// Determines which axis content scrolls along and which edge the content is
/// anchored to. `Down` and `Right` anchor content at the origin; `Up` and
/// `Left` anchor it at the trailing edge, so their paint translation is
/// mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisDirection {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl AxisDirection {
    /// The axis this direction travels along
    pub fn axis(self) -> Axis {
        match self {
            AxisDirection::Up | AxisDirection::Down => Axis::Vertical,
            AxisDirection::Left | AxisDirection::Right => Axis::Horizontal,
        }
    }

    /// The opposite direction on the same axis
    pub fn flip(self) -> AxisDirection {
        match self {
            AxisDirection::Up => AxisDirection::Down,
            AxisDirection::Down => AxisDirection::Up,
            AxisDirection::Left => AxisDirection::Right,
            AxisDirection::Right => AxisDirection::Left,
        }
    }
}

/// Reading direction of the ambient locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Resolve the concrete direction for a scroll axis
///
/// Horizontal scrolling follows the reading direction; `reverse` flips the
/// result on either axis.
pub fn axis_direction_for(axis: Axis, reverse: bool, text_direction: TextDirection) -> AxisDirection {
    let forward = match axis {
        Axis::Vertical => AxisDirection::Down,
        Axis::Horizontal => match text_direction {
            TextDirection::Ltr => AxisDirection::Right,
            TextDirection::Rtl => AxisDirection::Left,
        },
    };
    if reverse {
        forward.flip()
    } else {
        forward
    }
}
