use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

use crate::errors::{ErrorKind, FirestoreError};

/// Direction of an `order_by` clause.
///
/// Parses from the wire names `"ASCENDING"` / `"DESCENDING"` (case-insensitive)
/// as well as the short forms `"asc"` / `"desc"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Applies this direction to an ascending comparison result.
    #[inline]
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = FirestoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ASCENDING" | "ASC" => Ok(SortOrder::Ascending),
            "DESCENDING" | "DESC" => Ok(SortOrder::Descending),
            _ => {
                log::error!("Unknown sort direction {}", s);
                Err(FirestoreError::new(
                    &format!("Unknown sort direction: {}", s),
                    ErrorKind::InvalidArgument,
                ))
            }
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "ASCENDING"),
            SortOrder::Descending => write!(f, "DESCENDING"),
        }
    }
}
