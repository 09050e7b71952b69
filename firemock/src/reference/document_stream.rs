use crate::errors::FirestoreResult;
use crate::reference::{CollectionReference, DocumentSnapshot};

/// Lazy iterator over the documents of a collection.
///
/// Ids are captured when the stream is created. Each document is read only
/// when the iterator reaches it, so a document deleted meanwhile is skipped
/// and an update made meanwhile is visible.
pub struct DocumentStream {
    collection: CollectionReference,
    ids: std::vec::IntoIter<String>,
}

impl DocumentStream {
    pub(crate) fn new(collection: CollectionReference, ids: Vec<String>) -> Self {
        DocumentStream {
            collection,
            ids: ids.into_iter(),
        }
    }
}

impl Iterator for DocumentStream {
    type Item = FirestoreResult<DocumentSnapshot>;

    fn next(&mut self) -> Option<Self::Item> {
        for id in self.ids.by_ref() {
            let reference = self.collection.child_unchecked(&id);
            match reference.get() {
                Ok(snapshot) if snapshot.exists() => return Some(Ok(snapshot)),
                Ok(_) => continue,
                Err(err) => return Some(Err(err)),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.ids.len()))
    }
}
