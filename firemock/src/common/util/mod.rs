mod id_generator;
mod type_utils;

pub use id_generator::*;
pub use type_utils::*;
