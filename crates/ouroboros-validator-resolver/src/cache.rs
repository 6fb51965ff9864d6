//! Per-type conjunction cache
//!
//! Entries are built lazily and never evicted. Each data type owns a
//! [`OnceCell`]: the first caller builds while concurrent callers for the
//! same type block on the cell and receive the published conjunction.
//! A failed build leaves the cell empty so a later call tries again.

use crate::error::ResolverResult;
use dashmap::DashMap;
use once_cell::sync::OnceCell;
use ouroboros_validators::ValidatorConjunction;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

type Slot = Arc<OnceCell<Arc<ValidatorConjunction>>>;

/// Memoized base conjunctions keyed by data type
#[derive(Debug, Default)]
pub struct ConjunctionCache {
    entries: DashMap<String, Slot>,
    builds: AtomicUsize,
}

impl ConjunctionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached conjunction for `data_type`, building it at most once
    pub fn get_or_try_build<F>(
        &self,
        data_type: &str,
        build: F,
    ) -> ResolverResult<Arc<ValidatorConjunction>>
    where
        F: FnOnce() -> ResolverResult<ValidatorConjunction>,
    {
        let slot = self.slot(data_type);
        if let Some(conjunction) = slot.get() {
            debug!(data_type = %data_type, "Validator conjunction cache hit");
            return Ok(Arc::clone(conjunction));
        }

        // The map shard lock is released here; only this type's cell blocks.
        slot.get_or_try_init(|| {
            self.builds.fetch_add(1, Ordering::SeqCst);
            debug!(data_type = %data_type, "Validator conjunction cache miss");
            build().map(Arc::new)
        })
        .map(Arc::clone)
    }

    /// Cached conjunction, if one has been built
    pub fn get(&self, data_type: &str) -> Option<Arc<ValidatorConjunction>> {
        self.entries
            .get(data_type)
            .and_then(|slot| slot.get().map(Arc::clone))
    }

    /// Number of built entries
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.value().get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of builds started, successful or not
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }

    fn slot(&self, data_type: &str) -> Slot {
        if let Some(slot) = self.entries.get(data_type) {
            return Arc::clone(slot.value());
        }
        Arc::clone(self.entries.entry(data_type.to_string()).or_default().value())
    }
}
