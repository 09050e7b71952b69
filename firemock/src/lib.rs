//! # firemock - in-memory document database for tests
//!
//! firemock emulates a hierarchical document database inside the test
//! process. Collections hold documents, documents hold fields and may host
//! further collections, and everything is addressed by slash-separated
//! paths. There is no network and no persistence: a [MockFirestore] is a
//! shared in-memory tree that lives as long as its handles.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use firemock::{doc, MockFirestore, SortOrder};
//! use firemock::filter::field;
//!
//! let db = MockFirestore::new();
//! let users = db.collection("users")?;
//!
//! users.add(doc!{ "id": "alice", "age": 30 })?;
//! users.add(doc!{ "id": "bob", "age": 17 })?;
//!
//! let adults = users
//!     .where_filter(field("age").gte(18))?
//!     .order_by("age", SortOrder::Descending)
//!     .get()?;
//! assert_eq!(adults[0].id(), "alice");
//!
//! let mut batch = db.batch();
//! batch.delete(&db.document("users/bob")?);
//! batch.commit()?;
//! ```
//!
//! ## Module Organization
//!
//! - [`batch`] - Buffered writes applied on commit
//! - [`common`] - Values, field paths, timestamps and shared utilities
//! - [`document`] - Documents and collections as stored in the tree
//! - [`errors`] - Error types and result definitions
//! - [`filter`] - Field predicates and the fluent filter API
//! - [`firestore`] - The database handle
//! - [`firestore_builder`] - Database builder
//! - [`firestore_config`] - Database configuration
//! - [`query`] - Queries, cursors and query execution
//! - [`reference`] - Collection and document references, snapshots
//! - [`store`] - The path-addressed document tree

pub mod batch;
pub mod common;
pub mod document;
pub mod errors;
pub mod filter;
pub mod firestore;
pub mod firestore_builder;
pub mod firestore_config;
pub mod query;
pub mod reference;
pub mod store;

pub use batch::{WriteBatch, WriteOperation};
pub use common::{FieldPath, SortOrder, Timestamp, Value};
pub use document::{Collection, Document};
pub use errors::{ErrorKind, FirestoreError, FirestoreResult};
pub use firestore::MockFirestore;
pub use firestore_builder::FirestoreBuilder;
pub use firestore_config::FirestoreConfig;
pub use query::{Cursor, Query, QueryStream};
pub use reference::{CollectionReference, DocumentReference, DocumentSnapshot, DocumentStream};
