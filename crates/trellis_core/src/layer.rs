//! Compositor layer model
//!
//! Paint output is retained as a tree of layers handed to the compositor.
//! Render nodes that clip keep their [`ClipRectHandle`] alive across frames
//! so the compositor can recognize an unchanged clip by identity and reuse
//! whatever GPU resources back it.

use std::sync::{Arc, Mutex};

use crate::geometry::Rect;

// ─────────────────────────────────────────────────────────────────────────────
// Color
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color, components in 0.0..=1.0
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Paint Commands
// ─────────────────────────────────────────────────────────────────────────────

/// A single retained drawing command
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    /// Fill a rectangle with a solid color
    FillRect { rect: Rect, color: Color },
}

// ─────────────────────────────────────────────────────────────────────────────
// Layers
// ─────────────────────────────────────────────────────────────────────────────

/// How content that overflows a clip boundary is handled
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClipBehavior {
    /// No clipping at all
    None,
    /// Clip to the exact pixel boundary, no smoothing
    #[default]
    HardEdge,
    /// Clip with anti-aliased edges
    AntiAlias,
    /// Anti-aliased clip drawn into an offscreen buffer
    AntiAliasWithSaveLayer,
}

impl ClipBehavior {
    /// Whether this behavior produces a clip layer at all
    pub fn clips(&self) -> bool {
        !matches!(self, ClipBehavior::None)
    }
}

/// Flat list of drawing commands, the leaf of the layer tree
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PictureLayer {
    pub commands: Vec<PaintCommand>,
}

impl PictureLayer {
    pub fn new(commands: Vec<PaintCommand>) -> Self {
        Self { commands }
    }
}

/// A rectangular clip applied to a subtree of layers
#[derive(Debug, Default)]
pub struct ClipRectLayer {
    /// Clip rectangle in the layer's own coordinate space
    pub clip: Rect,
    pub behavior: ClipBehavior,
    pub children: Vec<Layer>,
}

impl ClipRectLayer {
    pub fn new(clip: Rect, behavior: ClipBehavior) -> Self {
        Self {
            clip,
            behavior,
            children: Vec::new(),
        }
    }
}

/// Shared handle to a clip layer
///
/// Identity of the `Arc` is meaningful: producing the same handle on two
/// consecutive frames tells the compositor the clip node itself survived.
pub type ClipRectHandle = Arc<Mutex<ClipRectLayer>>;

/// A node in the retained layer tree
#[derive(Debug)]
pub enum Layer {
    /// Leaf layer holding drawing commands
    Picture(PictureLayer),
    /// Clipped subtree, shared so the owner can retain it across frames
    Clip(ClipRectHandle),
}

impl Layer {
    /// Collect every paint command in this subtree, ignoring clips
    ///
    /// Test helper more than production API; traversal order is
    /// document order.
    pub fn collect_commands(&self, out: &mut Vec<PaintCommand>) {
        match self {
            Layer::Picture(picture) => out.extend(picture.commands.iter().cloned()),
            Layer::Clip(handle) => {
                if let Ok(clip) = handle.lock() {
                    for child in &clip.children {
                        child.collect_commands(out);
                    }
                }
            }
        }
    }
}
