use crate::callbacks::{Callbacks, HookId, Priority};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

type FilterFn<V, C> = dyn Fn(V, &C) -> V + Send + Sync;
type ShortCircuitFn<V, C> = dyn Fn(&C) -> Option<V> + Send + Sync;

/// A value-transforming seam. Every callback receives the previous callback's output.
pub struct Filter<V, C: ?Sized = ()> {
    name: &'static str,
    callbacks: Callbacks<FilterFn<V, C>>,
}

impl<V, C: ?Sized> Filter<V, C> {
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
        F: Fn(V, &C) -> V + Send + Sync + 'static,
    {
        self.add_with_priority(Priority::DEFAULT, callback)
    }

    pub fn add_with_priority<F>(&self, priority: Priority, callback: F) -> HookId
    where
        F: Fn(V, &C) -> V + Send + Sync + 'static,
    {
        self.callbacks.insert(priority, Arc::new(callback))
    }

    /// Returns `true` if the callback was still registered.
    pub fn remove(&self, id: HookId) -> bool {
        self.callbacks.remove(id)
    }

    /// Chains `value` through every registered callback.
    pub fn apply(&self, value: V, context: &C) -> V {
        let callbacks = self.callbacks.snapshot();
        if callbacks.is_empty() {
            return value;
        }
        trace!(hook = self.name, callbacks = callbacks.len(), "Applying filter");
        callbacks.iter().fold(value, |acc, callback| callback(acc, context))
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

/// A seam where the first callback returning `Some` replaces the default computation.
pub struct ShortCircuit<V, C: ?Sized = ()> {
    name: &'static str,
    callbacks: Callbacks<ShortCircuitFn<V, C>>,
}

impl<V, C: ?Sized> ShortCircuit<V, C> {
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
        F: Fn(&C) -> Option<V> + Send + Sync + 'static,
    {
        self.add_with_priority(Priority::DEFAULT, callback)
    }

    pub fn add_with_priority<F>(&self, priority: Priority, callback: F) -> HookId
    where
        F: Fn(&C) -> Option<V> + Send + Sync + 'static,
    {
        self.callbacks.insert(priority, Arc::new(callback))
    }

    pub fn remove(&self, id: HookId) -> bool {
        self.callbacks.remove(id)
    }

    /// Returns the first `Some` produced, in priority order. Later callbacks are not invoked.
    pub fn resolve(&self, context: &C) -> Option<V> {
        let value = self.callbacks.snapshot().iter().find_map(|callback| callback(context));
        if value.is_some() {
            trace!(hook = self.name, "Short-circuited");
        }
        value
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

impl<V, C: ?Sized> Clone for Filter<V, C> {
    fn clone(&self) -> Self {
        Self { name: self.name, callbacks: self.callbacks.clone() }
    }
}

impl<V, C: ?Sized> Clone for ShortCircuit<V, C> {
    fn clone(&self) -> Self {
        Self { name: self.name, callbacks: self.callbacks.clone() }
    }
}

impl<V, C: ?Sized> fmt::Debug for Filter<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("name", &self.name).field("callbacks", &self.len()).finish()
    }
}

impl<V, C: ?Sized> fmt::Debug for ShortCircuit<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortCircuit")
            .field("name", &self.name)
            .field("callbacks", &self.len())
            .finish()
    }
}
