use im::OrdMap;
use std::fmt::Debug;

use crate::common::Value;
use crate::document::Document;

/// The documents of one collection, keyed by document id.
///
/// A slot normally holds a [Value::Map] with the document's fields. A delete
/// leaves [Value::Null] in the slot, so a collection can tell a deleted id
/// apart from one that was never written. Ids iterate in ascending order.
#[derive(Clone, Eq, PartialEq, Default, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Collection {
    documents: OrdMap<String, Value>,
}

impl Collection {
    pub fn new() -> Self {
        Collection {
            documents: OrdMap::new(),
        }
    }

    /// Number of slots, tombstones included.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// The raw slot for `id`: a document, a tombstone, or whatever an earlier write left.
    pub fn get(&self, id: &str) -> Option<&Value> {
        self.documents.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.documents.contains_key(id)
    }

    /// Ids of every slot in ascending order, tombstones included.
    pub fn ids(&self) -> Vec<String> {
        self.documents.keys().cloned().collect()
    }

    /// Live documents in ascending id order. Tombstones and stray
    /// non-map values are skipped.
    pub fn documents(&self) -> impl Iterator<Item = (&String, &Document)> {
        self.documents
            .iter()
            .filter_map(|(id, value)| value.as_document().map(|doc| (id, doc)))
    }

    pub(crate) fn insert(&mut self, id: &str, value: Value) {
        self.documents.insert(id.to_string(), value);
    }

    pub(crate) fn remove(&mut self, id: &str) -> Option<Value> {
        self.documents.remove(id)
    }
}

impl Debug for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.documents.iter()).finish()
    }
}
