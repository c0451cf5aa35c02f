use crate::callbacks::{Callbacks, HookId, Priority};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

type ActionFn<C> = dyn Fn(&C) + Send + Sync;

/// A notification seam. Every callback is invoked with the same context.
pub struct Action<C: ?Sized = ()> {
    name: &'static str,
    callbacks: Callbacks<ActionFn<C>>,
}

impl<C: ?Sized> Action<C> {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self { name, callbacks: Callbacks::new() }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Registers a callback at [`Priority::DEFAULT`].
    pub fn add<F>(&self, callback: F) -> HookId
    where
        F: Fn(&C) + Send + Sync + 'static,
    {
        self.add_with_priority(Priority::DEFAULT, callback)
    }

    pub fn add_with_priority<F>(&self, priority: Priority, callback: F) -> HookId
    where
        F: Fn(&C) + Send + Sync + 'static,
    {
        self.callbacks.insert(priority, Arc::new(callback))
    }

    pub fn remove(&self, id: HookId) -> bool {
        self.callbacks.remove(id)
    }

    /// Invokes every callback registered at the time of the call.
    pub fn fire(&self, context: &C) {
        let callbacks = self.callbacks.snapshot();
        trace!(hook = self.name, callbacks = callbacks.len(), "Firing action");
        for callback in &callbacks {
            callback(context);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.callbacks.clear();
    }
}

impl<C: ?Sized> Clone for Action<C> {
    fn clone(&self) -> Self {
        Self { name: self.name, callbacks: self.callbacks.clone() }
    }
}

impl<C: ?Sized> fmt::Debug for Action<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").field("name", &self.name).field("callbacks", &self.len()).finish()
    }
}
