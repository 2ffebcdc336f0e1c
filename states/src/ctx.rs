use std::any::TypeId;
use std::collections::HashMap;

use log::debug;

use crate::State;

/// Explicit component-local state passed around as a context object.
///
/// Each state type is registered once via [`add_state`](Self::add_state) and
/// looked up by its `TypeId`. All access goes through `&self`/`&mut self`, so
/// readers can never observe a half-applied update.
#[derive(Default)]
pub struct StateCtx {
    storage: HashMap<TypeId, Box<dyn State>>,
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a state value, replacing any previous value of the same type.
    pub fn add_state<T: State>(&mut self, state: T) {
        let replaced = self.storage.insert(TypeId::of::<T>(), Box::new(state));
        if replaced.is_some() {
            debug!(
                "StateCtx: replaced existing state {}",
                std::any::type_name::<T>()
            );
        }
    }

    pub fn has_state<T: State>(&self) -> bool {
        self.storage.contains_key(&TypeId::of::<T>())
    }

    /// Immutable access to a registered state.
    ///
    /// # Panics
    /// Panics if `T` was never registered; registration happens once during
    /// app setup, so a miss is a wiring bug.
    pub fn state<T: State>(&self) -> &T {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| panic!("state not registered: {}", std::any::type_name::<T>()))
    }

    /// Mutable access to a registered state.
    ///
    /// # Panics
    /// Panics if `T` was never registered.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.storage
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("state not registered: {}", std::any::type_name::<T>()))
    }

    /// Applies a closure to a registered state in place.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    pub fn clear(&mut self) {
        self.storage.clear();
    }
}
