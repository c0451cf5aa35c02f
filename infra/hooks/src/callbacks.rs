use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Execution order of a callback within one seam. Lower runs first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(pub i32);

impl Priority {
    pub const EARLY: Self = Self(0);
    pub const DEFAULT: Self = Self(10);
    pub const LATE: Self = Self(100);
}

impl Default for Priority {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i32> for Priority {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// Handle returned on registration, used to remove the callback again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HookId(u64);

impl HookId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

struct Slot<F: ?Sized> {
    id: HookId,
    priority: Priority,
    callback: Arc<F>,
}

/// Priority-sorted callback list shared by every clone of a seam.
pub(crate) struct Callbacks<F: ?Sized> {
    slots: Arc<RwLock<Vec<Slot<F>>>>,
}

impl<F: ?Sized> Callbacks<F> {
    pub(crate) fn new() -> Self {
        Self { slots: Arc::new(RwLock::new(Vec::new())) }
    }

    pub(crate) fn insert(&self, priority: Priority, callback: Arc<F>) -> HookId {
        let id = HookId::next();
        let mut slots = self.slots.write();
        let at = slots.partition_point(|slot| slot.priority <= priority);
        slots.insert(at, Slot { id, priority, callback });
        id
    }

    pub(crate) fn remove(&self, id: HookId) -> bool {
        let mut slots = self.slots.write();
        let before = slots.len();
        slots.retain(|slot| slot.id != id);
        slots.len() != before
    }

    /// Clones the callback handles so the lock is released before dispatch.
    pub(crate) fn snapshot(&self) -> Vec<Arc<F>> {
        self.slots.read().iter().map(|slot| Arc::clone(&slot.callback)).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.read().len()
    }

    pub(crate) fn clear(&self) {
        self.slots.write().clear();
    }
}

impl<F: ?Sized> Clone for Callbacks<F> {
    fn clone(&self) -> Self {
        Self { slots: Arc::clone(&self.slots) }
    }
}
