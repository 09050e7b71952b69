use crate::document::Document;
use crate::errors::FirestoreResult;
use crate::reference::DocumentReference;

/// A write recorded by a [WriteBatch].
#[derive(Debug, Clone)]
pub enum WriteOperation {
    Set {
        document: DocumentReference,
        data: Document,
        merge: bool,
    },
    Update {
        document: DocumentReference,
        data: Document,
    },
    Delete {
        document: DocumentReference,
    },
}

impl WriteOperation {
    fn apply(self) -> FirestoreResult<()> {
        match self {
            WriteOperation::Set {
                document,
                data,
                merge,
            } => document.set_with_merge(data, merge),
            WriteOperation::Update { document, data } => document.update(data),
            WriteOperation::Delete { document } => document.delete(),
        }
    }
}

/// Buffers writes and applies them in order on [WriteBatch::commit].
///
/// Nothing touches the store until commit. Commit is not atomic: the first
/// failing write stops the commit, writes before it stay applied and the
/// ones after it are dropped. The buffer is empty after every commit.
///
/// ```rust,ignore
/// let mut batch = db.batch();
/// batch
///     .set(&alice, doc!{ "age": 31 })
///     .update(&bob, doc!{ "active": false })
///     .delete(&carol);
/// batch.commit()?;
/// ```
#[derive(Debug, Default)]
pub struct WriteBatch {
    operations: Vec<WriteOperation>,
}

impl WriteBatch {
    pub fn new() -> Self {
        WriteBatch::default()
    }

    /// Queues a full replace of `document`.
    pub fn set(&mut self, document: &DocumentReference, data: Document) -> &mut Self {
        self.set_with_merge(document, data, false)
    }

    /// Queues a set; with `merge` the data is shallow-merged into an existing document.
    pub fn set_with_merge(
        &mut self,
        document: &DocumentReference,
        data: Document,
        merge: bool,
    ) -> &mut Self {
        self.operations.push(WriteOperation::Set {
            document: document.clone(),
            data,
            merge,
        });
        self
    }

    /// Queues an update. The document must exist when the update is applied.
    pub fn update(&mut self, document: &DocumentReference, data: Document) -> &mut Self {
        self.operations.push(WriteOperation::Update {
            document: document.clone(),
            data,
        });
        self
    }

    pub fn delete(&mut self, document: &DocumentReference) -> &mut Self {
        self.operations.push(WriteOperation::Delete {
            document: document.clone(),
        });
        self
    }

    /// Number of queued writes.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn operations(&self) -> &[WriteOperation] {
        &self.operations
    }

    /// Applies the queued writes in the order they were added.
    pub fn commit(&mut self) -> FirestoreResult<()> {
        let operations = std::mem::take(&mut self.operations);
        let total = operations.len();
        log::debug!("Committing batch of {} writes", total);

        for (index, operation) in operations.into_iter().enumerate() {
            if let Err(err) = operation.apply() {
                log::error!(
                    "Batch commit aborted at write {} of {}: {}",
                    index + 1,
                    total,
                    err
                );
                return Err(err);
            }
        }
        Ok(())
    }
}
