use std::cmp::Ordering;

use crate::common::{FieldPath, SortOrder};
use crate::query::sort_key;
use crate::reference::DocumentSnapshot;

/// Result of running a [crate::query::Query].
///
/// The documents are computed when the query runs, so the stream is stable
/// while it is consumed. Run the query again to observe later writes.
pub struct QueryStream {
    documents: std::vec::IntoIter<DocumentSnapshot>,
}

impl QueryStream {
    pub(crate) fn new(documents: Vec<DocumentSnapshot>) -> Self {
        QueryStream {
            documents: documents.into_iter(),
        }
    }
}

impl Iterator for QueryStream {
    type Item = DocumentSnapshot;

    fn next(&mut self) -> Option<Self::Item> {
        self.documents.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.documents.size_hint()
    }
}

impl ExactSizeIterator for QueryStream {}

/// Stable multi-key sort. Documents equal on every key keep ascending id order.
///
/// Every document is expected to carry all sort keys; one that does not
/// sorts before those that do.
pub(crate) fn sort_snapshots(snapshots: &mut [DocumentSnapshot], orders: &[(FieldPath, SortOrder)]) {
    snapshots.sort_by(|a, b| {
        for (path, direction) in orders {
            let ordering = direction.apply(sort_key(a, path).cmp(&sort_key(b, path)));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        a.id().cmp(b.id())
    });
}
