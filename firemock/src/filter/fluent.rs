use crate::common::Value;
use crate::filter::{FieldFilter, Operator};

/// Starts a filter on `field_name`.
///
/// ```rust,ignore
/// let adults = users.where_filter(field("age").gte(18))?.get()?;
/// ```
pub fn field(field_name: &str) -> FluentFilter {
    FluentFilter {
        field_name: field_name.to_string(),
    }
}

/// Builder returned by [field]. Each method consumes it and produces a [FieldFilter].
pub struct FluentFilter {
    field_name: String,
}

impl FluentFilter {
    #[inline]
    pub fn eq<T: Into<Value>>(self, value: T) -> FieldFilter {
        self.build(Operator::Equal, value.into())
    }

    #[inline]
    pub fn ne<T: Into<Value>>(self, value: T) -> FieldFilter {
        self.build(Operator::NotEqual, value.into())
    }

    #[inline]
    pub fn gt<T: Into<Value>>(self, value: T) -> FieldFilter {
        self.build(Operator::GreaterThan, value.into())
    }

    #[inline]
    pub fn gte<T: Into<Value>>(self, value: T) -> FieldFilter {
        self.build(Operator::GreaterThanOrEqual, value.into())
    }

    #[inline]
    pub fn lt<T: Into<Value>>(self, value: T) -> FieldFilter {
        self.build(Operator::LessThan, value.into())
    }

    #[inline]
    pub fn lte<T: Into<Value>>(self, value: T) -> FieldFilter {
        self.build(Operator::LessThanOrEqual, value.into())
    }

    /// Matches when the field equals one of `values`.
    #[inline]
    pub fn in_array<T: Into<Value>>(self, values: Vec<T>) -> FieldFilter {
        self.build(Operator::In, Value::from_vec(values))
    }

    /// Matches when the field equals none of `values`.
    #[inline]
    pub fn not_in_array<T: Into<Value>>(self, values: Vec<T>) -> FieldFilter {
        self.build(Operator::NotIn, Value::from_vec(values))
    }

    /// Matches when the field is an array containing `value`.
    #[inline]
    pub fn array_contains<T: Into<Value>>(self, value: T) -> FieldFilter {
        self.build(Operator::ArrayContains, value.into())
    }

    /// Matches when the field is an array containing any of `values`.
    #[inline]
    pub fn array_contains_any<T: Into<Value>>(self, values: Vec<T>) -> FieldFilter {
        self.build(Operator::ArrayContainsAny, Value::from_vec(values))
    }

    fn build(self, op: Operator, value: Value) -> FieldFilter {
        FieldFilter::new(&self.field_name, op, value)
    }
}
