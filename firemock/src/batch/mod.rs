mod write_batch;

pub use write_batch::*;
