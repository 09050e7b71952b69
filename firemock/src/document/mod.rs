//! Document data: the field mapping of a document and the id-keyed
//! mapping of a collection.

mod collection;
mod document;

pub use collection::*;
pub use document::*;
