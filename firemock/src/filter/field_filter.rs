use std::fmt::Display;

use crate::common::Value;
use crate::errors::{ErrorKind, FirestoreError, FirestoreResult};
use crate::filter::Operator;

/// A single `(field path, operator, operand)` predicate.
///
/// The field path is kept as written and split on the database's field
/// separator when the filter is added to a query, so the same filter works
/// with any configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter {
    field: String,
    op: Operator,
    value: Value,
}

impl FieldFilter {
    pub fn new(field: &str, op: Operator, value: Value) -> Self {
        FieldFilter {
            field: field.to_string(),
            op,
            value,
        }
    }

    /// Builds a filter from an operator string such as `">="` or
    /// `"array_contains"`, validating the result.
    pub fn parse<T: Into<Value>>(field: &str, op: &str, value: T) -> FirestoreResult<Self> {
        let op = op.parse::<Operator>()?;
        let filter = FieldFilter::new(field, op, value.into());
        filter.validate()?;
        Ok(filter)
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn op(&self) -> Operator {
        self.op
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Checks that the field path is not empty and that membership operators
    /// get an array of candidates.
    pub fn validate(&self) -> FirestoreResult<()> {
        if self.field.is_empty() {
            log::error!("Filter field path cannot be empty");
            return Err(FirestoreError::new(
                "Filter field path cannot be empty",
                ErrorKind::InvalidArgument,
            ));
        }

        if self.op.requires_array_operand() && !self.value.is_array() {
            log::error!("Operator {} requires an array operand in {}", self.op, self);
            return Err(FirestoreError::new(
                &format!("Operator {} requires an array operand in {}", self.op, self),
                ErrorKind::FilterError,
            ));
        }
        Ok(())
    }

    /// Evaluates the filter against a resolved field value. A missing field
    /// never matches.
    pub fn matches(&self, field_value: Option<&Value>) -> bool {
        field_value.is_some_and(|value| self.op.matches(value, &self.value))
    }
}

impl Display for FieldFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.field, self.op, self.value)
    }
}
