mod collection_reference;
mod document_reference;
mod document_snapshot;
mod document_stream;

pub use collection_reference::*;
pub use document_reference::*;
pub use document_snapshot::*;
pub use document_stream::*;
