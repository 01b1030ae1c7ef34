//! Paint recording
//!
//! Render nodes paint into a [`PaintContext`], which retains the output as a
//! layer list for the compositor. Drawing commands accumulate into a pending
//! picture; pushing a clip flushes the picture and nests a fresh context for
//! the clipped subtree.

use std::sync::{Arc, Mutex};

use trellis_core::{
    ClipBehavior, ClipRectHandle, ClipRectLayer, Color, Layer, PaintCommand, PictureLayer, Rect,
};

/// Recording context handed to `RenderBox::paint`
#[derive(Debug, Default)]
pub struct PaintContext {
    layers: Vec<Layer>,
    pending: Vec<PaintCommand>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a solid rectangle fill
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.pending.push(PaintCommand::FillRect { rect, color });
    }

    /// Move pending commands into a picture layer
    fn flush_picture(&mut self) {
        if !self.pending.is_empty() {
            let commands = std::mem::take(&mut self.pending);
            self.layers.push(Layer::Picture(PictureLayer::new(commands)));
        }
    }

    /// Paint a subtree under a rectangular clip
    ///
    /// `reuse` carries the clip-layer handle retained from the previous
    /// frame; when present, the retained layer is updated in place and the
    /// identical handle is returned, letting the compositor recognize the
    /// clip as unchanged. When absent a fresh handle is allocated. The
    /// caller owns the returned handle and drops it when clipping stops.
    pub fn push_clip_rect(
        &mut self,
        reuse: Option<ClipRectHandle>,
        clip: Rect,
        behavior: ClipBehavior,
        paint: impl FnOnce(&mut PaintContext),
    ) -> ClipRectHandle {
        debug_assert!(behavior.clips());

        let mut inner = PaintContext::new();
        paint(&mut inner);
        let children = inner.into_layers();

        let handle = match reuse {
            Some(handle) => {
                {
                    let mut layer = handle.lock().unwrap();
                    layer.clip = clip;
                    layer.behavior = behavior;
                    layer.children = children;
                }
                handle
            }
            None => {
                let mut layer = ClipRectLayer::new(clip, behavior);
                layer.children = children;
                Arc::new(Mutex::new(layer))
            }
        };

        self.flush_picture();
        self.layers.push(Layer::Clip(Arc::clone(&handle)));
        handle
    }

    /// Finish recording and take the layer list
    pub fn into_layers(mut self) -> Vec<Layer> {
        self.flush_picture();
        self.layers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_flush_into_a_picture_layer() {
        let mut ctx = PaintContext::new();
        ctx.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        ctx.fill_rect(Rect::new(1.0, 0.0, 1.0, 1.0), Color::WHITE);
        let layers = ctx.into_layers();
        assert_eq!(layers.len(), 1);
        match &layers[0] {
            Layer::Picture(picture) => assert_eq!(picture.commands.len(), 2),
            other => panic!("expected picture layer, got {other:?}"),
        }
    }

    #[test]
    fn push_clip_rect_reuses_the_given_handle() {
        let mut ctx = PaintContext::new();
        let first = ctx.push_clip_rect(
            None,
            Rect::new(0.0, 0.0, 10.0, 10.0),
            ClipBehavior::HardEdge,
            |inner| inner.fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0), Color::BLACK),
        );

        let second = ctx.push_clip_rect(
            Some(Arc::clone(&first)),
            Rect::new(0.0, 0.0, 20.0, 20.0),
            ClipBehavior::AntiAlias,
            |_| {},
        );

        assert!(Arc::ptr_eq(&first, &second));
        let layer = second.lock().unwrap();
        assert_eq!(layer.clip, Rect::new(0.0, 0.0, 20.0, 20.0));
        assert_eq!(layer.behavior, ClipBehavior::AntiAlias);
        assert!(layer.children.is_empty());
    }

    #[test]
    fn clip_flushes_preceding_commands_first() {
        let mut ctx = PaintContext::new();
        ctx.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        ctx.push_clip_rect(
            None,
            Rect::new(0.0, 0.0, 10.0, 10.0),
            ClipBehavior::HardEdge,
            |_| {},
        );
        let layers = ctx.into_layers();
        assert_eq!(layers.len(), 2);
        assert!(matches!(layers[0], Layer::Picture(_)));
        assert!(matches!(layers[1], Layer::Clip(_)));
    }
}
