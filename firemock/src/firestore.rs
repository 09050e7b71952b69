use std::sync::Arc;

use crate::batch::WriteBatch;
use crate::errors::{ErrorKind, FirestoreError, FirestoreResult};
use crate::firestore_builder::FirestoreBuilder;
use crate::firestore_config::FirestoreConfig;
use crate::reference::{CollectionReference, DocumentReference};
use crate::store::{parse_path, DocumentStore};

/// An in-memory document database.
///
/// All state lives in a single shared tree. `MockFirestore` is a cheap handle
/// to it: clones, and every reference or query obtained from any clone,
/// read and write the same data.
///
/// # Examples
///
/// ```rust,ignore
/// use firemock::{doc, MockFirestore};
///
/// let db = MockFirestore::new();
/// let cities = db.collection("cities")?;
/// cities.document("LA")?.set(doc!{ "name": "Los Angeles", "state": "CA" })?;
///
/// let snapshot = db.document("cities/LA")?.get()?;
/// assert!(snapshot.exists());
/// ```
#[derive(Clone)]
pub struct MockFirestore {
    inner: Arc<MockFirestoreInner>,
}

impl Default for MockFirestore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFirestore {
    /// Creates a database with the default configuration.
    pub fn new() -> Self {
        let config = FirestoreConfig::new();
        config.initialize();
        MockFirestore::with_config(config)
    }

    pub fn builder() -> FirestoreBuilder {
        FirestoreBuilder::new()
    }

    pub(crate) fn with_config(config: FirestoreConfig) -> Self {
        MockFirestore {
            inner: Arc::new(MockFirestoreInner {
                store: DocumentStore::new(config.clone()),
                config,
            }),
        }
    }

    pub fn config(&self) -> FirestoreConfig {
        self.inner.config.clone()
    }

    /// Reference to the collection at `path`, e.g. `"users"` or
    /// `"users/alice/orders"`.
    ///
    /// # Errors
    ///
    /// [ErrorKind::InvalidPath] when the path is empty, has an empty segment,
    /// or has an even number of segments.
    pub fn collection(&self, path: &str) -> FirestoreResult<CollectionReference> {
        let segments = self.parse(path)?;
        CollectionReference::new(self.inner.store.clone(), segments)
    }

    /// Reference to the document at `path`, e.g. `"users/alice"`. Nothing is written.
    pub fn document(&self, path: &str) -> FirestoreResult<DocumentReference> {
        let segments = self.parse(path)?;
        DocumentReference::new(self.inner.store.clone(), segments)
    }

    /// The top-level collections, in ascending name order.
    pub fn collections(&self) -> FirestoreResult<Vec<CollectionReference>> {
        let names = self.inner.store.collection_ids(&[])?;
        Ok(names
            .into_iter()
            .map(|name| CollectionReference::from_segments(self.inner.store.clone(), vec![name]))
            .collect())
    }

    pub fn batch(&self) -> WriteBatch {
        WriteBatch::new()
    }

    /// Commits `batch`. Same as [WriteBatch::commit].
    pub fn batch_commit(batch: &mut WriteBatch) -> FirestoreResult<()> {
        batch.commit()
    }

    /// Drops all data. Existing references stay usable and see an empty database.
    pub fn reset(&self) {
        log::info!("Resetting mock database");
        self.inner.store.clear();
    }

    fn parse(&self, path: &str) -> FirestoreResult<Vec<String>> {
        parse_path(path, &self.inner.config.path_separator()).map_err(|err| {
            FirestoreError::new_with_cause(
                &format!("Invalid path '{}'", path),
                ErrorKind::InvalidPath,
                err,
            )
        })
    }
}

struct MockFirestoreInner {
    store: DocumentStore,
    config: FirestoreConfig,
}
