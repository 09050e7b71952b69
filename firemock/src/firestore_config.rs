//! Configuration management for a mock database instance.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::common::{
    atomic, Atomic, ReadExecutor, WriteExecutor, AUTO_ID_LENGTH, FIELD_SEPARATOR, PATH_SEPARATOR,
};
use crate::errors::{ErrorKind, FirestoreError, FirestoreResult};

/// Settings of one [crate::firestore::MockFirestore] instance.
///
/// Clones share the same settings through an `Arc`. Settings can only be
/// changed before the owning database is built; afterwards every setter
/// fails with [ErrorKind::ValidationError].
///
/// | Setting | Default |
/// |---------|---------|
/// | path separator | `/` |
/// | field separator | `.` |
/// | auto id length | `20` |
#[derive(Clone)]
pub struct FirestoreConfig {
    inner: Arc<FirestoreConfigInner>,
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FirestoreConfig {
    pub fn new() -> Self {
        FirestoreConfig {
            inner: Arc::new(FirestoreConfigInner::new()),
        }
    }

    /// Separator between segments of collection and document paths.
    pub fn path_separator(&self) -> String {
        self.inner.path_separator()
    }

    pub fn set_path_separator(&self, separator: &str) -> FirestoreResult<()> {
        self.inner.set_path_separator(separator)
    }

    /// Separator between segments of nested field paths in filters and orders.
    pub fn field_separator(&self) -> String {
        self.inner.field_separator()
    }

    pub fn set_field_separator(&self, separator: &str) -> FirestoreResult<()> {
        self.inner.set_field_separator(separator)
    }

    /// Length of generated document ids.
    pub fn auto_id_length(&self) -> usize {
        self.inner.auto_id_length()
    }

    pub fn set_auto_id_length(&self, length: usize) -> FirestoreResult<()> {
        self.inner.set_auto_id_length(length)
    }

    pub fn is_configured(&self) -> bool {
        self.inner.configured.load(Ordering::Relaxed)
    }

    /// Freezes the settings.
    pub(crate) fn initialize(&self) {
        self.inner.configured.store(true, Ordering::Relaxed);
    }
}

struct FirestoreConfigInner {
    configured: AtomicBool,
    path_separator: Atomic<String>,
    field_separator: Atomic<String>,
    auto_id_length: AtomicUsize,
}

impl FirestoreConfigInner {
    fn new() -> Self {
        FirestoreConfigInner {
            configured: AtomicBool::new(false),
            path_separator: atomic(PATH_SEPARATOR.to_string()),
            field_separator: atomic(FIELD_SEPARATOR.to_string()),
            auto_id_length: AtomicUsize::new(AUTO_ID_LENGTH),
        }
    }

    fn ensure_not_configured(&self, setting: &str) -> FirestoreResult<()> {
        if self.configured.load(Ordering::Relaxed) {
            log::error!("{} cannot be changed after initialization", setting);
            return Err(FirestoreError::new(
                &format!("{} cannot be changed after initialization", setting),
                ErrorKind::ValidationError,
            ));
        }
        Ok(())
    }

    fn validate_separator(setting: &str, separator: &str, other: &str) -> FirestoreResult<()> {
        if separator.is_empty() {
            log::error!("{} cannot be empty", setting);
            return Err(FirestoreError::new(
                &format!("{} cannot be empty", setting),
                ErrorKind::ValidationError,
            ));
        }

        if separator == other {
            log::error!("{} '{}' clashes with the other separator", setting, separator);
            return Err(FirestoreError::new(
                &format!("{} '{}' clashes with the other separator", setting, separator),
                ErrorKind::ValidationError,
            ));
        }
        Ok(())
    }

    fn path_separator(&self) -> String {
        self.path_separator.read_with(|it| it.clone())
    }

    fn set_path_separator(&self, separator: &str) -> FirestoreResult<()> {
        self.ensure_not_configured("Path separator")?;
        Self::validate_separator("Path separator", separator, &self.field_separator())?;
        self.path_separator
            .write_with(|it| *it = separator.to_string());
        Ok(())
    }

    fn field_separator(&self) -> String {
        self.field_separator.read_with(|it| it.clone())
    }

    fn set_field_separator(&self, separator: &str) -> FirestoreResult<()> {
        self.ensure_not_configured("Field separator")?;
        Self::validate_separator("Field separator", separator, &self.path_separator())?;
        self.field_separator
            .write_with(|it| *it = separator.to_string());
        Ok(())
    }

    fn auto_id_length(&self) -> usize {
        self.auto_id_length.load(Ordering::Relaxed)
    }

    fn set_auto_id_length(&self, length: usize) -> FirestoreResult<()> {
        self.ensure_not_configured("Auto id length")?;
        if length == 0 {
            log::error!("Auto id length must be positive");
            return Err(FirestoreError::new(
                "Auto id length must be positive",
                ErrorKind::ValidationError,
            ));
        }
        self.auto_id_length.store(length, Ordering::Relaxed);
        Ok(())
    }
}
