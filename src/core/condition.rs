//! Filter conditions and the operator set they support.
//!
//! A [`Condition`] is the value side of one `field: condition` entry in a
//! search input's filter map. It is either a bare JSON value (an implicit
//! equality test) or an explicit `{op, value}` clause.
//!
//! # Shape discrimination
//!
//! Deserialization is structural: a JSON object carrying both an `op` key
//! (naming a supported operator) and a `value` key becomes a
//! [`Condition::Clause`]; anything else — scalars, arrays, and objects
//! missing either key — falls through to [`Condition::Value`] and is later
//! translated as an equality comparison against that value as a whole. The
//! fallback applies even when it produces an equality test against an
//! object, which is intentional.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Comparison and membership operators accepted in an explicit filter clause.
///
/// The wire strings follow the conventional document-database operator
/// spelling (`"=="`, `">="`, `"array-contains"`, ...). Operator semantics are
/// not interpreted here; each backend maps them onto its own query syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOp {
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Gte,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Lte,
    #[serde(rename = "array-contains")]
    ArrayContains,
    #[serde(rename = "array-contains-any")]
    ArrayContainsAny,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "not-in")]
    NotIn,
}

impl FilterOp {
    /// The wire spelling of the operator.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::ArrayContains => "array-contains",
            Self::ArrayContainsAny => "array-contains-any",
            Self::In => "in",
            Self::NotIn => "not-in",
        }
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One filter condition for a single field.
///
/// Membership operators (`in`, `not-in`, `array-contains-any`) expect an
/// array `value`; that shape is only reachable through the explicit clause
/// form. A bare array condition is an equality test against the array as a
/// whole, not a membership expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Condition {
    /// Explicit `{op, value}` clause.
    Clause { op: FilterOp, value: Value },

    /// Bare value, translated as an implicit equality test.
    Value(Value),
}

impl Condition {
    /// Create an explicit clause condition.
    pub fn clause(op: FilterOp, value: impl Into<Value>) -> Self {
        Self::Clause {
            op,
            value: value.into(),
        }
    }

    /// Create a bare-value (implicit equality) condition.
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    /// Whether this condition is the bare JSON `null`.
    ///
    /// A null condition is the "no value" sentinel: it contributes no
    /// constraint. `false`, `0`, `""` and empty arrays are real values and
    /// do produce constraints.
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }
}

impl From<Value> for Condition {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}
