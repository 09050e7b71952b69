/// Default separator between the segments of a document or collection path.
pub const PATH_SEPARATOR: &str = "/";

/// Default separator between the segments of a dotted field path.
pub const FIELD_SEPARATOR: &str = ".";

/// Field path that addresses the document id instead of a data field.
pub const DOCUMENT_ID: &str = "__name__";

/// Field that `add` reads the document id from when none is given.
pub const ID_FIELD: &str = "id";
