use std::sync::Arc;

use crate::common::{atomic, Atomic, ReadExecutor, Value, WriteExecutor};
use crate::document::{Collection, Document};
use crate::errors::FirestoreResult;
use crate::firestore_config::FirestoreConfig;
use crate::store::{join_path, validate_segments};

/// The in-memory tree behind a mock database.
///
/// The root is a [Document] whose fields hold the top-level collections.
/// Below it, path segments alternate between collection slots and document
/// fields: a path of odd length addresses a collection, a path of even length
/// a document. A document can host subcollections as [Value::Collection]
/// fields next to its data.
///
/// Every operation takes the tree lock for its own duration only. Clones
/// share the same tree, so references and queries derived from one database
/// all observe each other's writes.
///
/// Reads never fail on shape: a missing segment, or an intermediate value of
/// the wrong kind, simply reads as missing.
#[derive(Clone)]
pub struct DocumentStore {
    inner: Arc<DocumentStoreInner>,
}

impl DocumentStore {
    pub fn new(config: FirestoreConfig) -> Self {
        DocumentStore {
            inner: Arc::new(DocumentStoreInner {
                root: atomic(Document::new()),
                config,
            }),
        }
    }

    pub fn config(&self) -> &FirestoreConfig {
        &self.inner.config
    }

    /// Returns a copy of the value at `path`, or `None` if any segment is missing.
    pub fn get(&self, path: &[String]) -> FirestoreResult<Option<Value>> {
        self.validate(path)?;
        Ok(self
            .inner
            .root
            .read_with(|root| lookup(root, path).cloned()))
    }

    /// Stores `value` at `path`, creating missing collections and documents on
    /// the way. Whatever lived at `path` before, subcollections included, is replaced.
    pub fn set(&self, path: &[String], value: Value) -> FirestoreResult<()> {
        self.validate(path)?;
        log::debug!("Setting value at {}", self.display(path));
        self.inner.root.write_with(|root| write(root, path, value));
        Ok(())
    }

    /// Leaves a tombstone at `path`. The key stays, but readers see no document.
    pub fn delete(&self, path: &[String]) -> FirestoreResult<()> {
        self.validate(path)?;
        log::debug!("Deleting value at {}", self.display(path));
        self.inner
            .root
            .write_with(|root| write(root, path, Value::Null));
        Ok(())
    }

    /// Stores `value` at `path` only if `condition` accepts the current slot.
    /// The check and the write happen under one lock.
    ///
    /// Returns whether the value was written.
    pub fn set_if<F>(&self, path: &[String], value: Value, condition: F) -> FirestoreResult<bool>
    where
        F: FnOnce(Option<&Value>) -> bool,
    {
        self.validate(path)?;
        let written = self.inner.root.write_with(|root| {
            if condition(lookup(root, path)) {
                write(root, path, value);
                true
            } else {
                false
            }
        });

        if written {
            log::debug!("Conditionally set value at {}", self.display(path));
        }
        Ok(written)
    }

    /// Shallow-merges `data` into the document at `path`.
    ///
    /// The merge only happens when the slot holds a document with at least one
    /// field. Otherwise `data` replaces the slot when `upsert` is true, and
    /// nothing is written when it is false.
    ///
    /// Returns whether anything was written.
    pub fn merge(&self, path: &[String], data: &Document, upsert: bool) -> FirestoreResult<bool> {
        self.validate(path)?;
        let written = self.inner.root.write_with(|root| {
            let merged = match lookup(root, path) {
                Some(Value::Map(current)) if !current.is_empty() => {
                    let mut current = current.clone();
                    current.merge(data);
                    Some(current)
                }
                _ => None,
            };

            match merged {
                Some(document) => {
                    write(root, path, Value::Map(document));
                    true
                }
                None if upsert => {
                    write(root, path, Value::Map(data.clone()));
                    true
                }
                None => false,
            }
        });

        log::debug!(
            "Merge into {} (upsert: {}) written: {}",
            self.display(path),
            upsert,
            written
        );
        Ok(written)
    }

    /// Ids of every slot in the collection at `path`, tombstones included,
    /// in ascending order. Empty when there is no collection there.
    pub fn document_ids(&self, path: &[String]) -> FirestoreResult<Vec<String>> {
        self.validate(path)?;
        Ok(self.inner.root.read_with(|root| match lookup(root, path) {
            Some(Value::Collection(collection)) => collection.ids(),
            _ => Vec::new(),
        }))
    }

    /// Copy of the collection at `path`, if there is one.
    pub fn collection(&self, path: &[String]) -> FirestoreResult<Option<Collection>> {
        self.validate(path)?;
        Ok(self.inner.root.read_with(|root| match lookup(root, path) {
            Some(Value::Collection(collection)) => Some(collection.clone()),
            _ => None,
        }))
    }

    /// Names of the subcollections of the document at `path`. An empty path
    /// lists the top-level collections.
    pub fn collection_ids(&self, path: &[String]) -> FirestoreResult<Vec<String>> {
        if path.is_empty() {
            return Ok(self.inner.root.read_with(|root| root.collection_names()));
        }

        self.validate(path)?;
        Ok(self.inner.root.read_with(|root| match lookup(root, path) {
            Some(Value::Map(document)) => document.collection_names(),
            _ => Vec::new(),
        }))
    }

    /// Drops every collection.
    pub fn clear(&self) {
        log::debug!("Clearing document store");
        self.inner.root.write_with(|root| *root = Document::new());
    }

    fn validate(&self, path: &[String]) -> FirestoreResult<()> {
        validate_segments(path, &self.inner.config.path_separator())
    }

    fn display(&self, path: &[String]) -> String {
        join_path(path, &self.inner.config.path_separator())
    }
}

struct DocumentStoreInner {
    root: Atomic<Document>,
    config: FirestoreConfig,
}

/// Walks `path` from the root. The value at every odd-length prefix must be a
/// collection and the value at every even-length prefix a document.
fn lookup<'a>(root: &'a Document, path: &[String]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    let mut current = root.get(first)?;
    for (depth, segment) in rest.iter().enumerate() {
        // current addresses path[..=depth]
        current = match (depth % 2 == 0, current) {
            (true, Value::Collection(collection)) => collection.get(segment)?,
            (false, Value::Map(document)) => document.get(segment)?,
            _ => return None,
        };
    }
    Some(current)
}

fn write(root: &mut Document, path: &[String], value: Value) {
    write_field(root, path, value)
}

fn write_field(document: &mut Document, path: &[String], value: Value) {
    let Some((key, rest)) = path.split_first() else {
        return;
    };

    if rest.is_empty() {
        document.insert(key, value);
        return;
    }

    let mut collection = match document.remove(key) {
        Some(Value::Collection(collection)) => collection,
        Some(other) => {
            log::warn!(
                "Field {} holds {} instead of a collection, replacing it",
                key,
                other
            );
            Collection::new()
        }
        None => Collection::new(),
    };
    write_slot(&mut collection, rest, value);
    document.insert(key, Value::Collection(collection));
}

fn write_slot(collection: &mut Collection, path: &[String], value: Value) {
    let Some((id, rest)) = path.split_first() else {
        return;
    };

    if rest.is_empty() {
        collection.insert(id, value);
        return;
    }

    let mut document = match collection.remove(id) {
        Some(Value::Map(document)) => document,
        Some(Value::Null) => {
            log::debug!("Recreating deleted document {} as an empty document", id);
            Document::new()
        }
        Some(other) => {
            log::warn!(
                "Document {} holds {} instead of a map, replacing it",
                id,
                other
            );
            Document::new()
        }
        None => Document::new(),
    };
    write_field(&mut document, rest, value);
    collection.insert(id, Value::Map(document));
}
