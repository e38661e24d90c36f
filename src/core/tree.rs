//! Index over the flat document listing reported by the tablet.

use std::collections::HashMap;

use crate::models::{DocId, DocInfo, ROOT_PARENT_ID};

/// Lookup structure for the synced document tree.
///
/// The device reports a flat list; this indexes it by id and by parent so
/// the browser can list one folder at a time. Children are ordered folders
/// first, then case-insensitively by name, so listings are stable across
/// refreshes.
#[derive(Clone, Default)]
pub struct DocumentTree {
    docs: HashMap<DocId, DocInfo>,
    children: HashMap<DocId, Vec<DocId>>,
}

impl DocumentTree {
    /// An index with no documents (the state before the first sync).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(items: Vec<DocInfo>) -> Self {
        let mut docs = HashMap::with_capacity(items.len());
        let mut children: HashMap<DocId, Vec<DocId>> = HashMap::new();

        for item in items {
            children
                .entry(item.parent_id.clone())
                .or_default()
                .push(item.id.clone());
            docs.insert(item.id.clone(), item);
        }

        for ids in children.values_mut() {
            ids.sort_by(|a, b| {
                let a = &docs[a];
                let b = &docs[b];
                b.is_folder
                    .cmp(&a.is_folder)
                    .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            });
        }

        Self { docs, children }
    }

    pub fn get(&self, id: &str) -> Option<&DocInfo> {
        self.docs.get(id)
    }

    pub fn is_folder(&self, id: &str) -> bool {
        self.docs.get(id).is_some_and(|doc| doc.is_folder)
    }

    /// Ids of the direct children of `parent_id`, in listing order.
    ///
    /// The root listing uses [`ROOT_PARENT_ID`]; unknown parents (and the
    /// trash, unless asked for explicitly) simply list as empty.
    pub fn child_ids(&self, parent_id: &str) -> &[DocId] {
        self.children.get(parent_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Direct children of `parent_id`, cloned for rendering.
    pub fn children(&self, parent_id: &str) -> Vec<DocInfo> {
        self.child_ids(parent_id)
            .iter()
            .filter_map(|id| self.docs.get(id))
            .cloned()
            .collect()
    }

    /// Parent folder id of `id`, or the root id when unknown.
    pub fn parent_of(&self, id: &str) -> DocId {
        self.docs
            .get(id)
            .map(|doc| doc.parent_id.clone())
            .unwrap_or_else(|| ROOT_PARENT_ID.to_string())
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> DocumentTree {
        DocumentTree::new(vec![
            DocInfo::document("n1", "f1", "zebra sketch"),
            DocInfo::folder("f1", "", "Work"),
            DocInfo::document("n2", "f1", "Agenda"),
            DocInfo::folder("f2", "f1", "archive"),
            DocInfo::document("n3", "", "Scratchpad"),
            DocInfo::document("t1", "trash", "Deleted"),
        ])
    }

    #[test]
    fn lists_root_without_trash_items() {
        let tree = sample_tree();
        let names: Vec<_> = tree.children("").iter().map(|d| d.name.clone()).collect();
        assert_eq!(names, vec!["Work", "Scratchpad"]);
    }

    #[test]
    fn folders_sort_before_documents_then_by_name() {
        let tree = sample_tree();
        let names: Vec<_> = tree.children("f1").iter().map(|d| d.name.clone()).collect();
        assert_eq!(names, vec!["archive", "Agenda", "zebra sketch"]);
    }

    #[test]
    fn lookup_and_parent_navigation() {
        let tree = sample_tree();
        assert!(tree.is_folder("f1"));
        assert!(!tree.is_folder("n1"));
        assert!(!tree.is_folder("missing"));
        assert_eq!(tree.parent_of("f2"), "f1");
        assert_eq!(tree.parent_of("f1"), ROOT_PARENT_ID);
        assert_eq!(tree.parent_of("missing"), ROOT_PARENT_ID);
    }

    #[test]
    fn unknown_parents_list_as_empty() {
        let tree = sample_tree();
        assert!(tree.children("missing").is_empty());
        assert!(DocumentTree::empty().children("").is_empty());
        assert_eq!(tree.len(), 6);
    }
}
