//! Scroll offset protocol
//!
//! The viewport does not own its scroll position. It reads a shared
//! [`ViewportOffset`], reports dimensions back to it after every layout, and
//! subscribes to its change notifications. The offset object owns the
//! clamping policy: callers may hand the viewport anything that speaks this
//! protocol (a plain [`ScrollPosition`], a physics-driven position, a test
//! double).

use std::sync::{Arc, Mutex};

use trellis_core::{ListenerId, ListenerList};

/// A mutable scroll scalar with change notification
///
/// `pixels` grows in the scroll direction: 0 is the content origin for
/// forward directions and the trailing edge for reversed ones. The offset
/// enforces `min <= pixels <= max` itself, clamping and notifying when
/// dimension updates push the current value out of range.
pub trait ViewportOffset {
    /// Current scroll position in logical pixels
    fn pixels(&self) -> f32;

    /// Record the viewport's extent along the scroll axis
    ///
    /// Returns true when the stored dimension changed.
    fn apply_viewport_dimension(&mut self, extent: f32) -> bool;

    /// Record the scrollable range
    ///
    /// Clamps the current position into `[min, max]`, notifying listeners
    /// if it moved. Returns false when clamping occurred.
    fn apply_content_dimensions(&mut self, min: f32, max: f32) -> bool;

    /// Whether bring-into-view requests may scroll this offset directly
    fn allow_implicit_scrolling(&self) -> bool;

    /// Move to an absolute position without animation
    ///
    /// Clamped into the known range; notifies listeners when the value
    /// actually changes.
    fn jump_to(&mut self, pixels: f32);

    fn subscribe(&mut self, listener: Box<dyn FnMut() + Send>) -> ListenerId;

    fn unsubscribe(&mut self, id: ListenerId) -> bool;
}

/// Shared handle to a viewport offset
pub type SharedViewportOffset = Arc<Mutex<dyn ViewportOffset + Send>>;

// ============================================================================
// Scroll Position
// ============================================================================

/// Plain clamping scroll position
///
/// The default `ViewportOffset` implementation: no physics, no animation,
/// just a value kept inside the reported content range.
pub struct ScrollPosition {
    pixels: f32,
    min_scroll_extent: f32,
    max_scroll_extent: f32,
    viewport_dimension: f32,
    allow_implicit_scrolling: bool,
    listeners: ListenerList,
}

impl ScrollPosition {
    pub fn new(initial_pixels: f32) -> Self {
        Self::with_implicit_scrolling(initial_pixels, true)
    }

    pub fn with_implicit_scrolling(initial_pixels: f32, allow_implicit_scrolling: bool) -> Self {
        Self {
            pixels: initial_pixels,
            min_scroll_extent: 0.0,
            max_scroll_extent: 0.0,
            viewport_dimension: 0.0,
            allow_implicit_scrolling,
            listeners: ListenerList::new(),
        }
    }

    pub fn min_scroll_extent(&self) -> f32 {
        self.min_scroll_extent
    }

    pub fn max_scroll_extent(&self) -> f32 {
        self.max_scroll_extent
    }

    pub fn viewport_dimension(&self) -> f32 {
        self.viewport_dimension
    }

    fn set_pixels(&mut self, value: f32) {
        if value != self.pixels {
            tracing::trace!("scroll position {:.1} -> {:.1}", self.pixels, value);
            self.pixels = value;
            self.listeners.notify_all();
        }
    }
}

impl std::fmt::Debug for ScrollPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollPosition")
            .field("pixels", &self.pixels)
            .field("min_scroll_extent", &self.min_scroll_extent)
            .field("max_scroll_extent", &self.max_scroll_extent)
            .field("viewport_dimension", &self.viewport_dimension)
            .finish()
    }
}

impl ViewportOffset for ScrollPosition {
    fn pixels(&self) -> f32 {
        self.pixels
    }

    fn apply_viewport_dimension(&mut self, extent: f32) -> bool {
        if self.viewport_dimension == extent {
            return false;
        }
        self.viewport_dimension = extent;
        true
    }

    fn apply_content_dimensions(&mut self, min: f32, max: f32) -> bool {
        debug_assert!(min <= max);
        self.min_scroll_extent = min;
        self.max_scroll_extent = max;
        let clamped = self.pixels.clamp(min, max);
        if clamped != self.pixels {
            self.set_pixels(clamped);
            return false;
        }
        true
    }

    fn allow_implicit_scrolling(&self) -> bool {
        self.allow_implicit_scrolling
    }

    fn jump_to(&mut self, pixels: f32) {
        let clamped = pixels.clamp(self.min_scroll_extent, self.max_scroll_extent);
        self.set_pixels(clamped);
    }

    fn subscribe(&mut self, listener: Box<dyn FnMut() + Send>) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }
}

// ============================================================================
// Scroll Controller
// ============================================================================

/// Clonable owner handle around a shared [`ScrollPosition`]
///
/// The widget layer hands [`ScrollController::position`] to viewports;
/// application code keeps the controller for programmatic scrolling.
#[derive(Clone)]
pub struct ScrollController {
    position: Arc<Mutex<ScrollPosition>>,
}

impl Default for ScrollController {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollController {
    pub fn new() -> Self {
        Self::with_initial_offset(0.0)
    }

    pub fn with_initial_offset(initial_pixels: f32) -> Self {
        Self {
            position: Arc::new(Mutex::new(ScrollPosition::new(initial_pixels))),
        }
    }

    /// Current scroll offset in pixels
    pub fn offset(&self) -> f32 {
        self.position.lock().unwrap().pixels()
    }

    /// Jump to an absolute offset (clamped by the position)
    pub fn jump_to(&self, pixels: f32) {
        self.position.lock().unwrap().jump_to(pixels);
    }

    /// The shared offset handle viewports subscribe to
    pub fn position(&self) -> SharedViewportOffset {
        Arc::clone(&self.position) as SharedViewportOffset
    }

    /// Whether `other` drives the same underlying position
    pub fn same_position(&self, other: &ScrollController) -> bool {
        Arc::ptr_eq(&self.position, &other.position)
    }
}

impl std::fmt::Debug for ScrollController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollController")
            .field("offset", &self.offset())
            .finish()
    }
}
