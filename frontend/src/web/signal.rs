use gameshelf::StateHandle;
use leptos::prelude::*;

/// `RwSignal` behind the core's `StateHandle`, so client operations write
/// straight into reactive state.
pub struct SignalState<T: Send + Sync + 'static>(pub RwSignal<T>);

impl<T: Send + Sync + 'static> Clone for SignalState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for SignalState<T> {}

impl<T: Send + Sync + 'static> StateHandle<T> for SignalState<T> {
    fn update(&self, f: impl FnOnce(&mut T)) {
        self.0.update(f);
    }

    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.0.with_untracked(f)
    }
}
