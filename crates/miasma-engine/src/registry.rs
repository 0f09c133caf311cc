//! The registry of influence sources consulted each tick.

use indexmap::IndexMap;
use miasma_core::{InfluenceSource, SourceId};

/// Insertion-ordered registry of influence sources.
///
/// The registry owns its entries as `Box<dyn InfluenceSource>`; callers
/// that need to keep driving a source after registration register an
/// `Arc` of it (see [`InfluenceSource`]). Iteration order is the
/// registration order, which makes the injection phase deterministic —
/// though callers must not rely on the order when multiple sources share
/// a cell.
///
/// Unlike the original weakly-held list, deregistration is explicit:
/// [`unregister`](Self::unregister) with the handle returned at
/// registration. Dropping the last external `Arc` clone does not remove
/// the entry.
#[derive(Default)]
pub struct SourceRegistry {
    sources: IndexMap<SourceId, Box<dyn InfluenceSource>>,
}

impl SourceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            sources: IndexMap::new(),
        }
    }

    /// Register a source; returns the handle used to unregister it.
    pub fn register(&mut self, source: Box<dyn InfluenceSource>) -> SourceId {
        let id = SourceId::next();
        self.sources.insert(id, source);
        id
    }

    /// Remove a source by handle. Returns `false` if the handle is not
    /// (or no longer) registered.
    ///
    /// Removal preserves the registration order of the remaining entries.
    pub fn unregister(&mut self, id: SourceId) -> bool {
        self.sources.shift_remove(&id).is_some()
    }

    /// Number of registered sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Iterate over `(handle, source)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (SourceId, &dyn InfluenceSource)> {
        self.sources.iter().map(|(id, s)| (*id, s.as_ref()))
    }
}
