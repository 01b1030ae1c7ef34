//! Configuration widgets
//!
//! Declarative builders that resolve ambient context and instantiate render
//! nodes; no geometry lives here.

mod scroll_view;

pub use scroll_view::{
    BuildContext, DragStartBehavior, FocusHandle, KeyboardDismissBehavior,
    PrimaryScrollController, ScrollPhysicsHint, ScrollView, ScrollViewError,
};
