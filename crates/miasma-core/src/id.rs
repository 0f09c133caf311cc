//! Strongly-typed source handles.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`SourceId`] allocation.
static SOURCE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Handle identifying a registered influence source.
///
/// Allocated from a monotonic atomic counter via [`SourceId::next`] when a
/// source is registered. IDs are never reused within a process, so a stale
/// handle held after `unregister` can never alias a newer source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceId(u64);

impl SourceId {
    /// Allocate a fresh, unique handle.
    ///
    /// Each call returns an ID that has never been returned before within
    /// this process. Thread-safe.
    pub fn next() -> Self {
        Self(SOURCE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let a = SourceId::next();
        let b = SourceId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }
}
