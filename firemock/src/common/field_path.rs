use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt::Display;

use crate::common::DOCUMENT_ID;
use crate::errors::{ErrorKind, FirestoreError, FirestoreResult};

type Segments = SmallVec<[String; 4]>;

/// A dotted path into the fields of a document, e.g. `address.city`.
///
/// Each segment names a key of a nested map. The special path `__name__`
/// addresses the document id rather than a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Segments,
}

impl FieldPath {
    /// Splits `path` on `separator`. Empty paths and empty segments are rejected.
    pub fn parse(path: &str, separator: &str) -> FirestoreResult<FieldPath> {
        if path.is_empty() {
            log::error!("Field path cannot be empty");
            return Err(FirestoreError::new(
                "Field path cannot be empty",
                ErrorKind::InvalidArgument,
            ));
        }

        let segments: Segments = path.split(separator).map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            log::error!("Field path {} contains an empty segment", path);
            return Err(FirestoreError::new(
                &format!("Field path {} contains an empty segment", path),
                ErrorKind::InvalidArgument,
            ));
        }
        Ok(FieldPath { segments })
    }

    /// A path of exactly one segment, taken literally.
    pub fn single(name: &str) -> FieldPath {
        let mut segments = Segments::new();
        segments.push(name.to_string());
        FieldPath { segments }
    }

    pub fn document_id() -> FieldPath {
        FieldPath::single(DOCUMENT_ID)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_document_id(&self) -> bool {
        self.segments.len() == 1 && self.segments[0] == DOCUMENT_ID
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.iter().join("."))
    }
}
