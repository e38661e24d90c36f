//! Cascading tri-state selection over the document tree.
//!
//! Folder checkboxes behave like a file picker: checking a folder checks its
//! whole subtree, and a folder's own displayed state derives from its direct
//! children (all / none / mixed). The flat [`SelectionStore`] stays the only
//! source of truth; folder statuses are computed on demand rather than
//! cached, so the two views cannot drift apart.

use super::selection::SelectionStore;
use super::tree::DocumentTree;
use crate::models::{SelectionInfo, SelectionStatus};

/// Apply a checkbox change to `id` and every node below it.
pub fn set_subtree(tree: &DocumentTree, store: &mut SelectionStore, id: &str, checked: bool) {
    store.set_checked(id, checked);
    for child in tree.child_ids(id).to_vec() {
        set_subtree(tree, store, &child, checked);
    }
}

/// Tri-state status of a node.
///
/// Documents map their checked bool directly. Folders derive from direct
/// children: all selected is `Selected`, none selected or indeterminate is
/// `NotSelected` (so an empty folder is never selected), anything else is
/// `Indeterminate`.
pub fn status_of(tree: &DocumentTree, store: &SelectionStore, id: &str) -> SelectionStatus {
    if !tree.is_folder(id) {
        return if store.is_checked(id) {
            SelectionStatus::Selected
        } else {
            SelectionStatus::NotSelected
        };
    }

    let children = tree.child_ids(id);
    let mut selected = 0;
    let mut indeterminate = 0;
    for child in children {
        match status_of(tree, store, child) {
            SelectionStatus::Selected => selected += 1,
            SelectionStatus::Indeterminate => indeterminate += 1,
            SelectionStatus::NotSelected => {}
        }
    }

    if selected == 0 && indeterminate == 0 {
        SelectionStatus::NotSelected
    } else if selected == children.len() {
        SelectionStatus::Selected
    } else {
        SelectionStatus::Indeterminate
    }
}

/// Statuses of the direct children of `folder_id`, in listing order.
pub fn folder_selection(
    tree: &DocumentTree,
    store: &SelectionStore,
    folder_id: &str,
) -> Vec<SelectionInfo> {
    tree.child_ids(folder_id)
        .iter()
        .map(|id| SelectionInfo {
            id: id.clone(),
            status: status_of(tree, store, id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocInfo;

    /// Work/
    ///   archive/
    ///     old-notes
    ///   agenda
    /// scratchpad
    /// empty/
    fn sample_tree() -> DocumentTree {
        DocumentTree::new(vec![
            DocInfo::folder("work", "", "Work"),
            DocInfo::folder("archive", "work", "Archive"),
            DocInfo::document("old-notes", "archive", "Old notes"),
            DocInfo::document("agenda", "work", "Agenda"),
            DocInfo::document("scratchpad", "", "Scratchpad"),
            DocInfo::folder("empty", "", "Empty"),
        ])
    }

    #[test]
    fn checking_a_folder_checks_its_whole_subtree() {
        let tree = sample_tree();
        let mut store = SelectionStore::new();

        set_subtree(&tree, &mut store, "work", true);

        for id in ["work", "archive", "old-notes", "agenda"] {
            assert!(store.is_checked(id), "{id} should be checked");
        }
        assert!(!store.is_checked("scratchpad"));
        assert_eq!(status_of(&tree, &store, "work"), SelectionStatus::Selected);
    }

    #[test]
    fn partially_checked_folders_are_indeterminate_up_the_chain() {
        let tree = sample_tree();
        let mut store = SelectionStore::new();

        store.set_checked("old-notes", true);

        assert_eq!(
            status_of(&tree, &store, "archive"),
            SelectionStatus::Selected
        );
        // agenda is unchecked, so Work is mixed.
        assert_eq!(
            status_of(&tree, &store, "work"),
            SelectionStatus::Indeterminate
        );
    }

    #[test]
    fn unchecking_part_of_a_checked_folder_downgrades_it() {
        let tree = sample_tree();
        let mut store = SelectionStore::new();

        set_subtree(&tree, &mut store, "work", true);
        set_subtree(&tree, &mut store, "archive", false);

        assert_eq!(
            status_of(&tree, &store, "archive"),
            SelectionStatus::NotSelected
        );
        assert_eq!(
            status_of(&tree, &store, "work"),
            SelectionStatus::Indeterminate
        );
    }

    #[test]
    fn an_empty_folder_is_never_selected() {
        let tree = sample_tree();
        let mut store = SelectionStore::new();

        store.set_checked("empty", true);
        assert_eq!(
            status_of(&tree, &store, "empty"),
            SelectionStatus::NotSelected
        );
    }

    #[test]
    fn folder_selection_reports_children_in_listing_order() {
        let tree = sample_tree();
        let mut store = SelectionStore::new();
        set_subtree(&tree, &mut store, "archive", true);

        let infos = folder_selection(&tree, &store, "work");
        let pairs: Vec<_> = infos
            .iter()
            .map(|info| (info.id.as_str(), info.status))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("archive", SelectionStatus::Selected),
                ("agenda", SelectionStatus::NotSelected),
            ]
        );
    }
}
