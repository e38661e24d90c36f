//! Checked-state tracking for the document tree.
//!
//! [`SelectionStore`] is the single source of truth for "is this item
//! checked" and "is anything checked". It is deliberately total: any string
//! id and any boolean are valid inputs, and no operation can fail. The store
//! is advisory UI state, not correctness-critical data.
//!
//! One store is created per session and injected through the app context;
//! there is no module-level instance.

use std::collections::BTreeMap;

use super::channel::ExportChannel;
use crate::models::DocId;

/// Per-item checked state plus a running count of checked items.
///
/// Committing snapshots the currently-checked ids into the owned
/// [`ExportChannel`]; consumers observe the snapshot through the channel and
/// never see live map state.
#[derive(Default)]
pub struct SelectionStore {
    /// BTreeMap keeps commit order deterministic (lexicographic by id).
    checked: BTreeMap<DocId, bool>,
    checked_count: usize,
    exports: ExportChannel,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current checked state for `id`. Ids never seen read as unchecked.
    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.get(id).copied().unwrap_or(false)
    }

    /// Record a new checked state for `id`.
    ///
    /// The count moves only on a genuine transition, so redundant calls are
    /// idempotent and `checked_count` always equals the number of
    /// `true` entries in the map.
    pub fn set_checked(&mut self, id: &str, checked: bool) {
        let previous = self.checked.insert(id.to_string(), checked).unwrap_or(false);
        match (previous, checked) {
            (false, true) => self.checked_count += 1,
            (true, false) => self.checked_count -= 1,
            _ => {}
        }
    }

    /// Whether nothing is checked. Gates the export UI.
    pub fn is_empty(&self) -> bool {
        self.checked_count == 0
    }

    /// Number of currently checked items.
    pub fn checked_count(&self) -> usize {
        self.checked_count
    }

    /// Snapshot the checked ids into the export channel, replacing any
    /// previously committed list.
    pub fn commit(&self) {
        let list: Vec<DocId> = self
            .checked
            .iter()
            .filter(|(_, checked)| **checked)
            .map(|(id, _)| id.clone())
            .collect();
        self.exports.publish(list);
    }

    /// Read/subscribe handle for the committed export list.
    pub fn exports(&self) -> &ExportChannel {
        &self.exports
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_ids_read_as_unchecked() {
        let store = SelectionStore::new();
        assert!(!store.is_checked("never-set"));
        assert!(store.is_empty());
    }

    #[test]
    fn count_tracks_distinct_checked_items() {
        let mut store = SelectionStore::new();
        for id in ["a", "b", "c"] {
            store.set_checked(id, true);
        }
        assert!(!store.is_empty());
        assert_eq!(store.checked_count(), 3);
    }

    #[test]
    fn unchecking_restores_the_prior_count() {
        let mut store = SelectionStore::new();
        store.set_checked("a", true);
        store.set_checked("b", true);
        store.set_checked("b", false);
        assert!(!store.is_checked("b"));
        assert_eq!(store.checked_count(), 1);
    }

    #[test]
    fn redundant_set_is_idempotent() {
        // Chosen behavior: the count moves only on a genuine transition,
        // so repeated calls with the same value do not drift it.
        let mut store = SelectionStore::new();
        store.set_checked("a", true);
        store.set_checked("a", true);
        assert_eq!(store.checked_count(), 1);

        store.set_checked("a", false);
        store.set_checked("a", false);
        assert_eq!(store.checked_count(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn unchecking_an_unseen_id_is_harmless() {
        let mut store = SelectionStore::new();
        store.set_checked("ghost", false);
        assert_eq!(store.checked_count(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn count_equals_true_entries_under_mixed_updates() {
        let mut store = SelectionStore::new();
        let ops = [
            ("a", true),
            ("b", true),
            ("a", true),
            ("c", false),
            ("b", false),
            ("d", true),
            ("b", true),
            ("a", false),
        ];
        for (id, value) in ops {
            store.set_checked(id, value);
            let true_entries = ["a", "b", "c", "d"]
                .iter()
                .filter(|id| store.is_checked(id))
                .count();
            assert_eq!(store.checked_count(), true_entries);
        }
    }

    #[test]
    fn commit_publishes_only_checked_ids_in_id_order() {
        let mut store = SelectionStore::new();
        store.set_checked("c", true);
        store.set_checked("a", true);
        store.set_checked("b", false);

        store.commit();
        assert_eq!(store.exports().current(), vec!["a", "c"]);
    }

    #[test]
    fn commit_with_nothing_set_publishes_an_empty_list() {
        let store = SelectionStore::new();
        store.commit();
        assert!(store.exports().current().is_empty());
    }

    #[test]
    fn commit_replaces_the_previous_snapshot_wholesale() {
        let mut store = SelectionStore::new();
        store.set_checked("a", true);
        store.set_checked("b", true);
        store.set_checked("a", false);

        assert!(!store.is_empty());
        store.commit();
        assert_eq!(store.exports().current(), vec!["b"]);

        store.set_checked("b", false);
        store.commit();
        assert!(store.exports().current().is_empty());
    }

    #[test]
    fn snapshot_is_point_in_time_not_live() {
        let mut store = SelectionStore::new();
        store.set_checked("a", true);
        store.commit();

        store.set_checked("z", true);
        assert_eq!(store.exports().current(), vec!["a"]);
    }
}
