//! Per-artifact memoization of index lookups.

use std::cell::RefCell;
use std::collections::HashMap;

use bindoc_index::NodeId;

/// Outcome of a completed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookup {
    Found(NodeId),
    Absent,
}

/// Index lookups keyed by artifact name.
///
/// A missing key means "not yet queried"; [`Lookup::Absent`] records a query
/// that found nothing and is never repeated.
#[derive(Debug, Default)]
pub(crate) struct NodeCache {
    entries: RefCell<HashMap<String, Lookup>>,
}

impl NodeCache {
    /// Cached lookup for `key`, running `query` on first use.
    pub(crate) fn get_or_query(
        &self,
        key: &str,
        query: impl FnOnce() -> Option<NodeId>,
    ) -> Option<NodeId> {
        if let Some(lookup) = self.entries.borrow().get(key) {
            return match *lookup {
                Lookup::Found(node) => Some(node),
                Lookup::Absent => None,
            };
        }

        let result = query();
        let lookup = result.map_or(Lookup::Absent, Lookup::Found);
        self.entries.borrow_mut().insert(key.to_owned(), lookup);
        result
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use bindoc_index::{DocIndex, Path};

    use super::*;

    #[test]
    fn test_absent_is_not_requeried() {
        let cache = NodeCache::default();
        let calls = Cell::new(0);

        for _ in 0..3 {
            let result = cache.get_or_query("Ns::Missing", || {
                calls.set(calls.get() + 1);
                None
            });
            assert!(result.is_none());
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_found_is_reused() {
        let index = DocIndex::parse("<index><class name='a'/></index>").unwrap();
        let cache = NodeCache::default();
        let calls = Cell::new(0);

        let query = || {
            calls.set(calls.get() + 1);
            index.find(&Path::descendant("class"))
        };
        let first = cache.get_or_query("A", query);
        let second = cache.get_or_query("A", || {
            calls.set(calls.get() + 1);
            None
        });

        assert!(first.is_some());
        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);
    }
}
