use std::fmt::{Debug, Display};

use crate::common::{generate_auto_id, SortOrder, Timestamp, Value, ID_FIELD};
use crate::document::Document;
use crate::errors::{ErrorKind, FirestoreError, FirestoreResult};
use crate::filter::FieldFilter;
use crate::query::{Cursor, Query};
use crate::reference::{DocumentReference, DocumentStream};
use crate::store::{join_path, validate_segments, DocumentStore};

/// A handle on the collection at an odd-length path.
///
/// The reference owns no data. It pairs a path with the store it resolves
/// against, so it stays valid whether or not the collection exists yet.
/// A collection comes into being when its first document is written.
///
/// # Examples
///
/// ```rust,ignore
/// let db = MockFirestore::new();
/// let users = db.collection("users")?;
///
/// let (_, alice) = users.add(doc!{ "id": "alice", "age": 30 })?;
/// assert_eq!(alice.id(), "alice");
///
/// let adults = users.where_field("age", ">=", 18)?.get()?;
/// assert_eq!(adults.len(), 1);
/// ```
#[derive(Clone)]
pub struct CollectionReference {
    store: DocumentStore,
    path: Vec<String>,
}

impl CollectionReference {
    pub(crate) fn new(store: DocumentStore, path: Vec<String>) -> FirestoreResult<Self> {
        let separator = store.config().path_separator();
        validate_segments(&path, &separator)?;
        if path.len() % 2 == 0 {
            let joined = join_path(&path, &separator);
            log::error!("Path {} does not address a collection", joined);
            return Err(FirestoreError::new(
                &format!("Path {} does not address a collection", joined),
                ErrorKind::InvalidPath,
            ));
        }
        Ok(CollectionReference { store, path })
    }

    /// Builds a reference from segments already known to be valid.
    pub(crate) fn from_segments(store: DocumentStore, path: Vec<String>) -> Self {
        CollectionReference { store, path }
    }

    /// The last segment of the path.
    pub fn id(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    pub fn path(&self) -> String {
        join_path(&self.path, &self.store.config().path_separator())
    }

    pub fn segments(&self) -> &[String] {
        &self.path
    }

    /// The document hosting this collection, or `None` for a top-level collection.
    pub fn parent(&self) -> Option<DocumentReference> {
        if self.path.len() < 3 {
            return None;
        }
        let parent = self.path[..self.path.len() - 1].to_vec();
        Some(DocumentReference::from_segments(self.store.clone(), parent))
    }

    /// Reference to the document `id` in this collection.
    ///
    /// If the collection has no slot for `id` yet, an empty document is
    /// stored there first, so the returned document exists. A deleted
    /// document is left deleted.
    pub fn document(&self, id: &str) -> FirestoreResult<DocumentReference> {
        let reference = self.child(id)?;
        let created = self.store.set_if(
            reference.segments(),
            Value::Map(Document::new()),
            |current| current.is_none(),
        )?;

        if created {
            log::debug!("Created empty document {}", reference.path());
        }
        Ok(reference)
    }

    /// Like [CollectionReference::document] with a freshly generated id.
    pub fn auto_document(&self) -> FirestoreResult<DocumentReference> {
        let id = generate_auto_id(self.store.config().auto_id_length());
        self.document(&id)
    }

    /// Writes `data` as a new document.
    ///
    /// The id is taken from the `id` field of `data` when it holds a string or
    /// an integer, and generated otherwise. Fails with
    /// [ErrorKind::AlreadyExists] if a document with that id exists.
    pub fn add(&self, data: Document) -> FirestoreResult<(Timestamp, DocumentReference)> {
        let id = match data.get(ID_FIELD) {
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            Some(Value::Integer(id)) => id.to_string(),
            _ => generate_auto_id(self.store.config().auto_id_length()),
        };
        self.add_with_id(data, &id)
    }

    /// Writes `data` as a new document with the given id.
    ///
    /// A deleted document under the same id does not count as existing.
    pub fn add_with_id(
        &self,
        data: Document,
        id: &str,
    ) -> FirestoreResult<(Timestamp, DocumentReference)> {
        let reference = self.child(id)?;
        let written = self.store.set_if(
            reference.segments(),
            Value::Map(data),
            |current| !matches!(current, Some(Value::Map(_))),
        )?;

        if !written {
            log::error!("Document already exists: {}", reference.path());
            return Err(FirestoreError::new(
                &format!("Document already exists: {}", reference.path()),
                ErrorKind::AlreadyExists,
            ));
        }
        Ok((Timestamp::now(), reference))
    }

    /// References to every id in the collection right now, deleted ones
    /// included, in ascending id order.
    pub fn list_documents(&self) -> FirestoreResult<Vec<DocumentReference>> {
        let ids = self.store.document_ids(&self.path)?;
        Ok(ids
            .iter()
            .map(|id| self.child_unchecked(id))
            .collect())
    }

    /// Streams the existing documents of this collection in ascending id order.
    ///
    /// The ids are captured now, but each document is read when the stream
    /// reaches it. Documents deleted in between are skipped.
    pub fn stream(&self) -> FirestoreResult<DocumentStream> {
        let ids = self.store.document_ids(&self.path)?;
        Ok(DocumentStream::new(self.clone(), ids))
    }

    /// An unconstrained query over this collection.
    pub fn query(&self) -> Query {
        Query::new(self.clone())
    }

    pub fn where_field<T: Into<Value>>(&self, field: &str, op: &str, value: T) -> FirestoreResult<Query> {
        self.query().where_field(field, op, value)
    }

    pub fn where_filter(&self, filter: FieldFilter) -> FirestoreResult<Query> {
        self.query().where_filter(filter)
    }

    pub fn order_by(&self, field: &str, direction: SortOrder) -> Query {
        self.query().order_by(field, direction)
    }

    pub fn limit(&self, limit: usize) -> Query {
        self.query().limit(limit)
    }

    pub fn offset(&self, offset: usize) -> Query {
        self.query().offset(offset)
    }

    pub fn start_at<C: Into<Cursor>>(&self, cursor: C) -> Query {
        self.query().start_at(cursor)
    }

    pub fn start_after<C: Into<Cursor>>(&self, cursor: C) -> Query {
        self.query().start_after(cursor)
    }

    pub fn end_at<C: Into<Cursor>>(&self, cursor: C) -> Query {
        self.query().end_at(cursor)
    }

    pub fn end_before<C: Into<Cursor>>(&self, cursor: C) -> Query {
        self.query().end_before(cursor)
    }

    pub(crate) fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Reference to `id` without touching the store.
    pub(crate) fn child(&self, id: &str) -> FirestoreResult<DocumentReference> {
        let mut path = self.path.clone();
        path.push(id.to_string());
        DocumentReference::new(self.store.clone(), path)
    }

    /// Reference to an id read back from the store, which is valid by construction.
    pub(crate) fn child_unchecked(&self, id: &str) -> DocumentReference {
        let mut path = self.path.clone();
        path.push(id.to_string());
        DocumentReference::from_segments(self.store.clone(), path)
    }
}

impl PartialEq for CollectionReference {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for CollectionReference {}

impl Debug for CollectionReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CollectionReference({})", self.path())
    }
}

impl Display for CollectionReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
