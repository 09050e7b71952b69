//! Common types shared by every module: values, timestamps, sort orders,
//! field paths and the shared-state helpers.

mod constants;
mod field_path;
mod sort_order;
mod timestamp;
mod util;
mod value;

pub use constants::*;
pub use field_path::*;
pub use sort_order::*;
pub use timestamp::*;
pub use util::*;
pub use value::*;
