//! Search inputs: filters, ordering and paging.
//!
//! A [`SearchInput`] is the declarative description consumed by
//! [`build_query_constraints`](crate::core::constraints::build_query_constraints).
//! It is wire-friendly: the whole structure deserializes from a JSON body or
//! query parameter, and the filter map keeps its key insertion order so the
//! produced constraints come out in a predictable sequence.
//!
//! # Example
//!
//! ```json
//! {
//!     "filter": { "status": "active", "amount": { "op": ">", "value": 100 } },
//!     "order": { "field": "created_at", "direction": "desc" },
//!     "paging": { "limit": 20 }
//! }
//! ```

use crate::core::condition::Condition;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// The reserved filter key denoting the document's identity.
///
/// A filter entry under this key targets the backend's identity-field marker
/// instead of a literal field named `"id"`. This constant is the only place
/// the magic string lives.
pub const ID_FIELD: &str = "id";

/// Filter section: field name to condition, in insertion order.
///
/// Keys are unique; iteration order determines constraint order.
pub type Filter = IndexMap<String, Condition>;

/// Sort direction for an ordering directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// At most one ordering directive: a field name plus a direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: String,
    pub direction: Direction,
}

/// At most one limiting directive: a positive bound on result count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    pub limit: u32,
}

/// A declarative search description over documents of type `T`.
///
/// `T` is a phantom tag tying the input to a logical document type; it never
/// constrains the field names at runtime and carries no serde bounds. Use
/// [`SearchInput<Value>`] (the default) when no document type applies.
///
/// Constructed either by deserializing a JSON payload or through the builder
/// methods:
///
/// ```rust,ignore
/// let input = SearchInput::<User>::new()
///     .with_filter("name", json!("John"))
///     .with_filter("age", Condition::clause(FilterOp::Gt, json!(18)))
///     .with_order("name", Direction::Asc)
///     .with_limit(5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "", default)]
pub struct SearchInput<T = Value> {
    /// Filter conditions, keyed by field name.
    pub filter: Filter,

    /// Optional ordering directive, applied after all filters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderBy>,

    /// Optional result-count bound, applied last.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,

    #[serde(skip)]
    marker: PhantomData<fn() -> T>,
}

impl<T> Default for SearchInput<T> {
    fn default() -> Self {
        Self {
            filter: Filter::new(),
            order: None,
            paging: None,
            marker: PhantomData,
        }
    }
}

impl<T> SearchInput<T> {
    /// Create an empty search input (no filters, no order, no paging).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter condition for a field, replacing any previous condition
    /// on the same field.
    pub fn with_filter(
        mut self,
        field: impl Into<String>,
        condition: impl Into<Condition>,
    ) -> Self {
        self.filter.insert(field.into(), condition.into());
        self
    }

    /// Set the ordering directive.
    pub fn with_order(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order = Some(OrderBy {
            field: field.into(),
            direction,
        });
        self
    }

    /// Set the result-count bound.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.paging = Some(Paging { limit });
        self
    }
}
