use crate::common::{FieldPath, Timestamp, Value};
use crate::document::Document;
use crate::errors::FirestoreResult;
use crate::reference::DocumentReference;

/// An immutable copy of a document taken at `read_time`.
///
/// Later writes to the store are not reflected here. A snapshot of a missing
/// or deleted document still carries its reference but no data.
#[derive(Clone, Debug)]
pub struct DocumentSnapshot {
    reference: DocumentReference,
    data: Option<Document>,
    read_time: Timestamp,
}

impl DocumentSnapshot {
    pub(crate) fn new(
        reference: DocumentReference,
        data: Option<Document>,
        read_time: Timestamp,
    ) -> Self {
        DocumentSnapshot {
            reference,
            data,
            read_time,
        }
    }

    pub fn exists(&self) -> bool {
        self.data.is_some()
    }

    pub fn id(&self) -> &str {
        self.reference.id()
    }

    pub fn reference(&self) -> &DocumentReference {
        &self.reference
    }

    pub fn read_time(&self) -> Timestamp {
        self.read_time
    }

    /// Borrowed view of the data, `None` when the document does not exist.
    pub fn data(&self) -> Option<&Document> {
        self.data.as_ref()
    }

    /// Owned copy of the data, `None` when the document does not exist.
    pub fn to_dict(&self) -> Option<Document> {
        self.data.clone()
    }

    /// Reads a possibly nested field, with segments split on the configured
    /// field separator. Fails only when `field_path` is malformed.
    pub fn get(&self, field_path: &str) -> FirestoreResult<Option<Value>> {
        let separator = self.reference.store().config().field_separator();
        let path = FieldPath::parse(field_path, &separator)?;
        Ok(self.get_path(&path).cloned())
    }

    /// Reads the value at `path` in the data.
    pub(crate) fn get_path(&self, path: &FieldPath) -> Option<&Value> {
        self.data.as_ref()?.get_path(path)
    }
}
