//! Allocation tracking with explicitly owned counters.
//!
//! The metrics live wherever the caller puts them and are handed by
//! reference to each tracked allocation. Nothing here is process-global.

use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct AllocationMetrics {
    total_allocated: AtomicUsize,
    total_freed: AtomicUsize,
    allocations: AtomicUsize,
    frees: AtomicUsize,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AllocationSnapshot {
    pub total_allocated: usize,
    pub total_freed: usize,
    pub allocations: usize,
    pub frees: usize,
}

impl AllocationSnapshot {
    pub fn current_usage(&self) -> usize {
        self.total_allocated.saturating_sub(self.total_freed)
    }

    pub fn live_allocations(&self) -> usize {
        self.allocations.saturating_sub(self.frees)
    }
}

impl fmt::Display for AllocationSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Memory usage: {} bytes ({} live allocations)",
            self.current_usage(),
            self.live_allocations()
        )
    }
}

impl AllocationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_alloc(&self, bytes: usize) {
        self.total_allocated.fetch_add(bytes, Ordering::Relaxed);
        self.allocations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_free(&self, bytes: usize) {
        self.total_freed.fetch_add(bytes, Ordering::Relaxed);
        self.frees.fetch_add(1, Ordering::Relaxed);
    }

    pub fn current_usage(&self) -> usize {
        self.snapshot().current_usage()
    }

    pub fn snapshot(&self) -> AllocationSnapshot {
        AllocationSnapshot {
            total_allocated: self.total_allocated.load(Ordering::Relaxed),
            total_freed: self.total_freed.load(Ordering::Relaxed),
            allocations: self.allocations.load(Ordering::Relaxed),
            frees: self.frees.load(Ordering::Relaxed),
        }
    }

    /// Moves `value` to the heap and records the allocation. The matching
    /// free is recorded when the returned handle drops.
    pub fn track<T>(&self, value: T) -> Tracked<'_, T> {
        let bytes = mem::size_of::<T>();
        // Box does not allocate for zero-sized types.
        if bytes > 0 {
            self.record_alloc(bytes);
        }
        Tracked {
            value: Box::new(value),
            metrics: self,
        }
    }
}

pub struct Tracked<'m, T> {
    value: Box<T>,
    metrics: &'m AllocationMetrics,
}

impl<T> Deref for Tracked<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for Tracked<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T> Drop for Tracked<'_, T> {
    fn drop(&mut self) {
        let bytes = mem::size_of::<T>();
        if bytes > 0 {
            self.metrics.record_free(bytes);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}
