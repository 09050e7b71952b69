use std::fmt::Display;
use std::str::FromStr;

use crate::common::Value;
use crate::errors::{ErrorKind, FirestoreError};

/// Comparison applied by a [crate::filter::FieldFilter].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    /// The field equals one of the operand's elements.
    In,
    /// The field equals none of the operand's elements.
    NotIn,
    /// The field is an array with an element equal to the operand.
    ArrayContains,
    /// The field is an array sharing at least one element with the operand.
    ArrayContainsAny,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::In => "in",
            Operator::NotIn => "not_in",
            Operator::ArrayContains => "array_contains",
            Operator::ArrayContainsAny => "array_contains_any",
        }
    }

    /// Whether the operand must be an array of candidates.
    pub fn requires_array_operand(&self) -> bool {
        matches!(
            self,
            Operator::In | Operator::NotIn | Operator::ArrayContainsAny
        )
    }

    /// Evaluates `field <op> operand` for a field that is present.
    ///
    /// Range comparisons only hold between values of the same type class,
    /// so `"a" > 1` is false rather than true by type rank.
    pub fn matches(&self, field: &Value, operand: &Value) -> bool {
        match self {
            Operator::Equal => field == operand,
            Operator::NotEqual => field != operand,
            Operator::LessThan => field.is_comparable_with(operand) && field < operand,
            Operator::LessThanOrEqual => field.is_comparable_with(operand) && field <= operand,
            Operator::GreaterThan => field.is_comparable_with(operand) && field > operand,
            Operator::GreaterThanOrEqual => field.is_comparable_with(operand) && field >= operand,
            Operator::In => operand
                .as_array()
                .is_some_and(|candidates| candidates.contains(field)),
            Operator::NotIn => operand
                .as_array()
                .is_some_and(|candidates| !candidates.contains(field)),
            Operator::ArrayContains => field
                .as_array()
                .is_some_and(|elements| elements.contains(operand)),
            Operator::ArrayContainsAny => match (field.as_array(), operand.as_array()) {
                (Some(elements), Some(candidates)) => {
                    elements.iter().any(|element| candidates.contains(element))
                }
                _ => false,
            },
        }
    }
}

impl FromStr for Operator {
    type Err = FirestoreError;

    /// Parses an operator string. Underscored and hyphenated spellings of the
    /// word operators are both accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "==" => Ok(Operator::Equal),
            "!=" => Ok(Operator::NotEqual),
            "<" => Ok(Operator::LessThan),
            "<=" => Ok(Operator::LessThanOrEqual),
            ">" => Ok(Operator::GreaterThan),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            "in" => Ok(Operator::In),
            "not_in" | "not-in" => Ok(Operator::NotIn),
            "array_contains" | "array-contains" => Ok(Operator::ArrayContains),
            "array_contains_any" | "array-contains-any" => Ok(Operator::ArrayContainsAny),
            _ => {
                log::error!("Unknown filter operator '{}'", s);
                Err(FirestoreError::new(
                    &format!("Unknown filter operator '{}'", s),
                    ErrorKind::InvalidArgument,
                ))
            }
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
