//! Time-bounded single-slot cache for loaded data files.

use crate::errors::AppResult;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct TtlCache<T> {
    ttl: Duration,
    slot: Mutex<Option<(Instant, Arc<T>)>>,
}

impl<T> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Return the cached value, or run `load` when the slot is empty or
    /// older than the TTL. The lock is held while loading, so concurrent
    /// callers wait for one load instead of racing.
    ///
    /// A failed load leaves the previous value (if any) untouched.
    pub fn get_or_load<F>(&self, load: F) -> AppResult<Arc<T>>
    where
        F: FnOnce() -> AppResult<T>,
    {
        let mut slot = self.slot.lock();

        if let Some((stored_at, value)) = slot.as_ref()
            && stored_at.elapsed() <= self.ttl
        {
            return Ok(Arc::clone(value));
        }

        let value = Arc::new(load()?);
        *slot = Some((Instant::now(), Arc::clone(&value)));
        Ok(value)
    }

    pub fn invalidate(&self) {
        self.slot.lock().take();
    }
}
