//! The nested domain tree.

use std::collections::BTreeMap;

use serde::Serialize;

/// Hierarchical domain structure, keyed from the rightmost label inward.
///
/// The first level holds bare top-level labels (`com`); every deeper level
/// is keyed by the full dotted suffix from that label down (`example.com`,
/// then `b.example.com`), so sibling domains sharing a parent suffix merge
/// at the shared key while every key below the top reads as a complete
/// domain.
///
/// The map is a `BTreeMap`, so iteration and serialization order are
/// deterministic for a given content. `#[serde(transparent)]` makes the
/// tree serialize as the plain nested key→mapping object the report
/// renderer consumes; an empty map marks a true leaf.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DomainTree {
    children: BTreeMap<String, DomainTree>,
}

impl DomainTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one validated domain.
    ///
    /// Walks the labels right to left, creating the key for each level when
    /// missing and descending into it. Lookup-or-create is the only
    /// mutation, so inserting the same domain any number of times leaves
    /// the tree structurally identical to inserting it once.
    pub fn insert(&mut self, domain: &str) {
        let labels: Vec<&str> = domain.split('.').collect();
        let tld_index = labels.len() - 1;

        let mut node = self;
        for i in (0..labels.len()).rev() {
            let key = if i == tld_index {
                labels[i].to_string()
            } else {
                labels[i..].join(".")
            };
            node = node.children.entry(key).or_default();
        }
    }

    /// True when no subdomains are known beneath this label.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Child subtree for `key`, if present.
    pub fn child(&self, key: &str) -> Option<&DomainTree> {
        self.children.get(key)
    }

    /// Keys of the direct children, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }
}
