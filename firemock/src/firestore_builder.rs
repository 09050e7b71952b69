use crate::errors::{FirestoreError, FirestoreResult};
use crate::firestore::MockFirestore;
use crate::firestore_config::FirestoreConfig;

/// Fluent setup for a [MockFirestore].
///
/// The first invalid setting is remembered and returned by
/// [FirestoreBuilder::build]; later settings are ignored once one has failed.
///
/// ```rust,ignore
/// let db = MockFirestore::builder()
///     .path_separator("|")
///     .auto_id_length(8)
///     .build()?;
/// ```
#[derive(Default)]
pub struct FirestoreBuilder {
    error: Option<FirestoreError>,
    config: FirestoreConfig,
}

impl FirestoreBuilder {
    pub fn new() -> Self {
        FirestoreBuilder {
            error: None,
            config: FirestoreConfig::new(),
        }
    }

    pub fn path_separator(mut self, separator: &str) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.config.set_path_separator(separator) {
                self.error = Some(e);
            }
        }
        self
    }

    pub fn field_separator(mut self, separator: &str) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.config.set_field_separator(separator) {
                self.error = Some(e);
            }
        }
        self
    }

    pub fn auto_id_length(mut self, length: usize) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.config.set_auto_id_length(length) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Freezes the configuration and creates the database.
    pub fn build(self) -> FirestoreResult<MockFirestore> {
        if let Some(error) = self.error {
            return Err(error);
        }
        self.config.initialize();
        log::debug!(
            "Building mock database with path separator '{}', field separator '{}'",
            self.config.path_separator(),
            self.config.field_separator()
        );
        Ok(MockFirestore::with_config(self.config))
    }
}
