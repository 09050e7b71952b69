//! Field predicates for queries.
//!
//! Filters are built either from an operator string through
//! [FieldFilter::parse], or with the fluent API:
//!
//! ```rust,ignore
//! use firemock::filter::field;
//!
//! let query = users
//!     .where_filter(field("age").gte(18))?
//!     .where_filter(field("tags").array_contains("admin"))?;
//! ```
//!
//! # Supported Operators
//!
//! - **Equality**: `==`, `!=`
//! - **Range**: `<`, `<=`, `>`, `>=` (same type class only)
//! - **Membership**: `in`, `not_in`
//! - **Arrays**: `array_contains`, `array_contains_any`
mod field_filter;
mod fluent;
mod operator;

pub use field_filter::*;
pub use fluent::*;
pub use operator::*;
