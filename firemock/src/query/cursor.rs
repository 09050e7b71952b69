use std::cmp::Ordering;

use crate::common::{FieldPath, SortOrder, Value, DOCUMENT_ID};
use crate::document::Document;
use crate::reference::DocumentSnapshot;

/// A position in a query's sort order, used by `start_at` and friends.
///
/// Either literal field values, keyed by field name, or a snapshot whose
/// sort-key values are read back from its data.
#[derive(Debug, Clone)]
pub enum Cursor {
    Values(Document),
    Snapshot(DocumentSnapshot),
}

impl From<Document> for Cursor {
    fn from(values: Document) -> Self {
        Cursor::Values(values)
    }
}

impl From<DocumentSnapshot> for Cursor {
    fn from(snapshot: DocumentSnapshot) -> Self {
        Cursor::Snapshot(snapshot)
    }
}

impl From<&DocumentSnapshot> for Cursor {
    fn from(snapshot: &DocumentSnapshot) -> Self {
        Cursor::Snapshot(snapshot.clone())
    }
}

/// A cursor together with its inclusiveness.
#[derive(Debug, Clone)]
pub(crate) struct Bound {
    cursor: Cursor,
    inclusive: bool,
}

impl Bound {
    pub(crate) fn new(cursor: Cursor, inclusive: bool) -> Self {
        Bound { cursor, inclusive }
    }

    pub(crate) fn is_inclusive(&self) -> bool {
        self.inclusive
    }

    /// Pins the cursor to concrete sort keys and values.
    ///
    /// With explicit orders the cursor supplies values for those fields.
    /// Without them a snapshot, or a mapping naming `__name__`, positions by
    /// document id, and any other mapping positions by its own fields in
    /// ascending key order. Values are taken as a prefix up to the first key
    /// the cursor has no value for.
    pub(crate) fn resolve(&self, orders: &[(FieldPath, SortOrder)]) -> ResolvedBound {
        let keys: Vec<(FieldPath, SortOrder)> = if !orders.is_empty() {
            orders.to_vec()
        } else {
            match &self.cursor {
                Cursor::Snapshot(_) => vec![(FieldPath::document_id(), SortOrder::Ascending)],
                Cursor::Values(values) if values.contains_key(DOCUMENT_ID) => {
                    vec![(FieldPath::document_id(), SortOrder::Ascending)]
                }
                Cursor::Values(values) => values
                    .keys()
                    .map(|key| (FieldPath::single(key), SortOrder::Ascending))
                    .collect(),
            }
        };

        let mut resolved = Vec::with_capacity(keys.len());
        for (path, direction) in keys {
            let value = match &self.cursor {
                Cursor::Snapshot(snapshot) => sort_key(snapshot, &path),
                Cursor::Values(values) if path.is_document_id() => values.get(DOCUMENT_ID).cloned(),
                Cursor::Values(values) => values.get_path(&path).cloned(),
            };

            match value {
                Some(value) => resolved.push((path, direction, value)),
                None => break,
            }
        }

        ResolvedBound {
            keys: resolved,
            inclusive: self.inclusive,
        }
    }
}

/// A bound reduced to `(field, direction, value)` triples.
pub(crate) struct ResolvedBound {
    keys: Vec<(FieldPath, SortOrder, Value)>,
    inclusive: bool,
}

impl ResolvedBound {
    /// Position of `snapshot` relative to the cursor in sort order, or `None`
    /// when the snapshot lacks one of the compared fields.
    pub(crate) fn compare(&self, snapshot: &DocumentSnapshot) -> Option<Ordering> {
        for (path, direction, cursor_value) in &self.keys {
            let value = sort_key(snapshot, path)?;
            let ordering = direction.apply(value.cmp(cursor_value));
            if ordering != Ordering::Equal {
                return Some(ordering);
            }
        }
        Some(Ordering::Equal)
    }

    /// Whether `snapshot` lies at or after a start cursor.
    pub(crate) fn admits_start(&self, snapshot: &DocumentSnapshot) -> bool {
        if self.keys.is_empty() {
            return true;
        }
        match self.compare(snapshot) {
            Some(Ordering::Greater) => true,
            Some(Ordering::Equal) => self.inclusive,
            _ => false,
        }
    }

    /// Whether `snapshot` lies at or before an end cursor.
    pub(crate) fn admits_end(&self, snapshot: &DocumentSnapshot) -> bool {
        if self.keys.is_empty() {
            return true;
        }
        match self.compare(snapshot) {
            Some(Ordering::Less) => true,
            Some(Ordering::Equal) => self.inclusive,
            _ => false,
        }
    }
}

/// Reads the sort key `path` of a snapshot. `__name__` is the document id.
pub(crate) fn sort_key(snapshot: &DocumentSnapshot, path: &FieldPath) -> Option<Value> {
    if path.is_document_id() {
        return Some(Value::String(snapshot.id().to_string()));
    }
    snapshot.get_path(path).cloned()
}
