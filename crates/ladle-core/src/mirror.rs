//! Local mirror of a remote collection.
//!
//! A [`CollectionMirror`] holds the last successful fetch of a named remote
//! collection. It is replaced wholesale, never patched in place: every
//! mutating workflow re-fetches the full collection and swaps it in, so the
//! mirror never diverges from server state for longer than one round trip.

/// Records that can be looked up by their user-facing display name.
pub trait Named {
    /// The display name users type into delete/update forms.
    fn record_name(&self) -> &str;
}

/// An ordered, in-memory copy of a remote collection.
///
/// Each page controller owns exactly one mirror per collection and passes it
/// by reference to the resolver and the renderer. `replace_all` is the only
/// mutator.
#[derive(Debug, Default)]
pub struct CollectionMirror<T> {
    records: Vec<T>,
}

impl<T> CollectionMirror<T> {
    /// Creates an empty mirror.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Swaps the held sequence for a fresh server snapshot.
    ///
    /// Prior contents are discarded; there is no incremental insert or
    /// remove.
    pub fn replace_all(&mut self, records: Vec<T>) {
        self.records = records;
    }

    /// Read-only view of the current snapshot, in server order.
    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Named> CollectionMirror<T> {
    /// Resolves a user-typed display name to a record.
    ///
    /// The comparison is exact (case-sensitive, no trimming — trimming is
    /// the caller's responsibility) and the first match in sequence order
    /// wins. When two records share a name, only the first is reachable
    /// through this lookup.
    pub fn find_by_name(&self, name: &str) -> Option<&T> {
        self.records
            .iter()
            .find(|record| record.record_name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        id: i64,
        name: String,
    }

    impl Named for Row {
        fn record_name(&self) -> &str {
            &self.name
        }
    }

    fn row(id: i64, name: &str) -> Row {
        Row {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_replace_all_swaps_wholesale() {
        let mut mirror = CollectionMirror::new();
        mirror.replace_all(vec![row(1, "Salt"), row(2, "Pepper")]);
        assert_eq!(mirror.len(), 2);

        mirror.replace_all(vec![row(3, "Flour")]);
        assert_eq!(mirror.len(), 1);
        assert_eq!(mirror.all()[0].id, 3);
    }

    #[test]
    fn test_find_by_name_is_exact() {
        let mut mirror = CollectionMirror::new();
        mirror.replace_all(vec![row(1, "Salt")]);

        assert!(mirror.find_by_name("Salt").is_some());
        assert!(mirror.find_by_name("salt").is_none());
        assert!(mirror.find_by_name(" Salt").is_none());
    }

    #[test]
    fn test_find_by_name_first_match_wins() {
        let mut mirror = CollectionMirror::new();
        mirror.replace_all(vec![row(1, "Salt"), row(2, "Salt")]);

        assert_eq!(mirror.find_by_name("Salt").unwrap().id, 1);
    }

    #[test]
    fn test_find_by_name_is_idempotent() {
        let mut mirror = CollectionMirror::new();
        mirror.replace_all(vec![row(1, "Salt"), row(2, "Pepper")]);

        let first = mirror.find_by_name("Pepper").map(|r| r.id);
        let second = mirror.find_by_name("Pepper").map(|r| r.id);
        assert_eq!(first, second);

        assert!(mirror.find_by_name("Sugar").is_none());
        assert!(mirror.find_by_name("Sugar").is_none());
    }
}
