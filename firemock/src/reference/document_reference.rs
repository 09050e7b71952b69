use std::fmt::{Debug, Display};

use crate::common::{Timestamp, Value};
use crate::document::Document;
use crate::errors::{ErrorKind, FirestoreError, FirestoreResult};
use crate::reference::{CollectionReference, DocumentSnapshot};
use crate::store::{join_path, validate_segments, DocumentStore};

/// A handle on the document at an even-length path.
///
/// Like [CollectionReference], a document reference is only a path bound to
/// a store. Reads go through [DocumentReference::get], which returns a
/// detached [DocumentSnapshot]; writes replace, merge into, or delete the
/// stored document.
#[derive(Clone)]
pub struct DocumentReference {
    store: DocumentStore,
    path: Vec<String>,
}

impl DocumentReference {
    pub(crate) fn new(store: DocumentStore, path: Vec<String>) -> FirestoreResult<Self> {
        let separator = store.config().path_separator();
        validate_segments(&path, &separator)?;
        if path.len() % 2 != 0 {
            let joined = join_path(&path, &separator);
            log::error!("Path {} does not address a document", joined);
            return Err(FirestoreError::new(
                &format!("Path {} does not address a document", joined),
                ErrorKind::InvalidPath,
            ));
        }
        Ok(DocumentReference { store, path })
    }

    pub(crate) fn from_segments(store: DocumentStore, path: Vec<String>) -> Self {
        DocumentReference { store, path }
    }

    pub fn id(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    pub fn path(&self) -> String {
        join_path(&self.path, &self.store.config().path_separator())
    }

    pub fn segments(&self) -> &[String] {
        &self.path
    }

    /// The collection containing this document.
    pub fn parent(&self) -> CollectionReference {
        let parent = self.path[..self.path.len() - 1].to_vec();
        CollectionReference::from_segments(self.store.clone(), parent)
    }

    /// Reference to the subcollection `name` of this document. Nothing is written.
    pub fn collection(&self, name: &str) -> FirestoreResult<CollectionReference> {
        let mut path = self.path.clone();
        path.push(name.to_string());
        CollectionReference::new(self.store.clone(), path)
    }

    /// The subcollections currently hosted by this document.
    pub fn collections(&self) -> FirestoreResult<Vec<CollectionReference>> {
        let names = self.store.collection_ids(&self.path)?;
        Ok(names
            .into_iter()
            .map(|name| {
                let mut path = self.path.clone();
                path.push(name);
                CollectionReference::from_segments(self.store.clone(), path)
            })
            .collect())
    }

    /// Reads the document. The snapshot does not exist when nothing, or a
    /// tombstone, is stored here. Subcollections never appear in its data.
    pub fn get(&self) -> FirestoreResult<DocumentSnapshot> {
        let data = match self.store.get(&self.path)? {
            Some(Value::Map(document)) => Some(document.without_collections()),
            _ => None,
        };
        Ok(DocumentSnapshot::new(self.clone(), data, Timestamp::now()))
    }

    /// Replaces the document with `data`, dropping its subcollections.
    pub fn set(&self, data: Document) -> FirestoreResult<()> {
        self.store.set(&self.path, Value::Map(data))
    }

    /// With `merge` set, shallow-merges `data` into the existing document,
    /// creating it when there is nothing to merge into. Otherwise same as
    /// [DocumentReference::set].
    pub fn set_with_merge(&self, data: Document, merge: bool) -> FirestoreResult<()> {
        if merge {
            self.store.merge(&self.path, &data, true)?;
            Ok(())
        } else {
            self.set(data)
        }
    }

    /// Shallow-merges `data` into the existing document.
    ///
    /// # Errors
    ///
    /// Fails with [ErrorKind::NotFound] when there is no document with at
    /// least one field to update. Nothing is written in that case.
    pub fn update(&self, data: Document) -> FirestoreResult<()> {
        if !self.store.merge(&self.path, &data, false)? {
            log::error!("No document to update: {}", self.path());
            return Err(FirestoreError::new(
                &format!("No document to update: {}", self.path()),
                ErrorKind::NotFound,
            ));
        }
        Ok(())
    }

    /// Deletes the document. Deleting a missing document is not an error.
    pub fn delete(&self) -> FirestoreResult<()> {
        self.store.delete(&self.path)
    }

    pub(crate) fn store(&self) -> &DocumentStore {
        &self.store
    }
}

impl PartialEq for DocumentReference {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for DocumentReference {}

impl Debug for DocumentReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DocumentReference({})", self.path())
    }
}

impl Display for DocumentReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
