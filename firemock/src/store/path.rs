use itertools::Itertools;

use crate::errors::{ErrorKind, FirestoreError, FirestoreResult};

/// Splits a slash-separated path into segments.
///
/// Leading and trailing separators are ignored, so `"/users/u1/"` and
/// `"users/u1"` are the same path. Empty paths and empty inner segments
/// fail with [ErrorKind::InvalidPath].
pub(crate) fn parse_path(path: &str, separator: &str) -> FirestoreResult<Vec<String>> {
    let trimmed = path.trim_matches(|c: char| separator.contains(c));
    if trimmed.is_empty() {
        log::error!("Path cannot be empty");
        return Err(FirestoreError::new(
            "Path cannot be empty",
            ErrorKind::InvalidPath,
        ));
    }

    let segments: Vec<String> = trimmed.split(separator).map(str::to_string).collect();
    validate_segments(&segments, separator)?;
    Ok(segments)
}

/// Checks that a path is non-empty and that no segment is empty or
/// contains the separator.
pub(crate) fn validate_segments(segments: &[String], separator: &str) -> FirestoreResult<()> {
    if segments.is_empty() {
        log::error!("Path cannot be empty");
        return Err(FirestoreError::new(
            "Path cannot be empty",
            ErrorKind::InvalidPath,
        ));
    }

    for segment in segments {
        if segment.is_empty() || segment.contains(separator) {
            let joined = join_path(segments, separator);
            log::error!("Path {} contains an invalid segment '{}'", joined, segment);
            return Err(FirestoreError::new(
                &format!("Path {} contains an invalid segment '{}'", joined, segment),
                ErrorKind::InvalidPath,
            ));
        }
    }
    Ok(())
}

pub(crate) fn join_path(segments: &[String], separator: &str) -> String {
    segments.iter().join(separator)
}
