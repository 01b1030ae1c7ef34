//! Change notification
//!
//! A small listener registry in the spirit of a `ChangeNotifier`: callbacks
//! are registered with [`ListenerList::subscribe`], which returns a stable
//! [`ListenerId`] that can later be used to unsubscribe. Notification order
//! follows registration order.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable handle for a registered listener
    pub struct ListenerId;
}

type Listener = Box<dyn FnMut() + Send>;

/// Registry of change listeners
///
/// Listeners are `FnMut` closures invoked synchronously by
/// [`ListenerList::notify_all`]. The registry itself is not thread-safe;
/// owners that share it across threads wrap it together with their state in
/// a `Mutex` (the convention used throughout trellis).
#[derive(Default)]
pub struct ListenerList {
    listeners: SlotMap<ListenerId, Listener>,
}

impl ListenerList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; the returned id unsubscribes it later
    pub fn subscribe(&mut self, listener: impl FnMut() + Send + 'static) -> ListenerId {
        self.listeners.insert(Box::new(listener))
    }

    /// Remove a listener. Returns true if the id was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id).is_some()
    }

    /// Invoke every registered listener
    pub fn notify_all(&mut self) {
        tracing::trace!("notifying {} listeners", self.listeners.len());
        for (_, listener) in self.listeners.iter_mut() {
            listener();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for ListenerList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerList")
            .field("len", &self.listeners.len())
            .finish()
    }
}
