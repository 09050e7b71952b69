mod cursor;
mod query;
mod query_stream;

pub use cursor::Cursor;
pub(crate) use cursor::*;
pub use query::*;
pub use query_stream::*;
