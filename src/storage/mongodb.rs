//! MongoDB constraint construction using the official MongoDB driver.
//!
//! Provides [`MongoConstraints`], a [`ConstraintFactory`] producing BSON
//! clause documents, plus [`MongoQuery`] for assembling a constraint list
//! into the shape `Collection::find` takes.
//!
//! # Feature flag
//!
//! This module is gated behind the `mongodb_backend` feature flag (enabled
//! by default):
//! ```toml
//! [dependencies]
//! docquery = { version = "0.1", features = ["mongodb_backend"] }
//! ```
//!
//! # Identity mapping
//!
//! The identity-field marker renders as MongoDB's `_id` key. A filter on the
//! reserved `id` key therefore becomes `{ "_id": ... }`, never a literal
//! field named `id`.
//!
//! # Operator mapping
//!
//! | Operator                  | Clause                     |
//! |---------------------------|----------------------------|
//! | `==`, `array-contains`    | `{ field: value }`         |
//! | `!=`                      | `{ field: { $ne: v } }`    |
//! | `>` `>=` `<` `<=`         | `$gt` `$gte` `$lt` `$lte`  |
//! | `in`, `array-contains-any`| `{ field: { $in: [..] } }` |
//! | `not-in`                  | `{ field: { $nin: [..] } }`|
//!
//! Equality against an array field matches array elements natively in
//! MongoDB, which is why `array-contains` shares the direct-match form.
//! Operator/value mismatches (a scalar under `in`, say) are not rejected
//! here; the server reports them at execution time.

use crate::core::condition::FilterOp;
use crate::core::constraints::ConstraintFactory;
use crate::core::search::Direction;
use mongodb::bson::{self, Document, doc};
use mongodb::{Collection, Database};
use serde_json::Value;
use thiserror::Error;

/// MongoDB's document-identity key.
const DOCUMENT_ID_KEY: &str = "_id";

/// Errors raised while constructing BSON clause documents.
#[derive(Debug, Error)]
pub enum ConstraintError {
    /// The filter value has no BSON representation.
    #[error("failed to convert filter value to BSON: {0}")]
    Bson(#[from] bson::ser::Error),
}

// ---------------------------------------------------------------------------
// Constraint values
// ---------------------------------------------------------------------------

/// Target of a MongoDB filter clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MongoField {
    /// A literal field name, used as-is.
    Named(String),

    /// The document-identity marker, rendered as `_id`.
    DocumentId,
}

impl MongoField {
    fn into_key(self) -> String {
        match self {
            Self::Named(name) => name,
            Self::DocumentId => DOCUMENT_ID_KEY.to_string(),
        }
    }
}

/// One MongoDB query constraint: a filter clause, a sort document, or a
/// result limit.
#[derive(Debug, Clone, PartialEq)]
pub enum MongoConstraint {
    Where(Document),
    Sort(Document),
    Limit(i64),
}

// ---------------------------------------------------------------------------
// MongoConstraints
// ---------------------------------------------------------------------------

/// Constraint factory backed by BSON documents.
///
/// Stateless; a single shared instance serves any number of builds.
#[derive(Debug, Clone, Copy, Default)]
pub struct MongoConstraints;

impl ConstraintFactory for MongoConstraints {
    type Field = MongoField;
    type Constraint = MongoConstraint;
    type Error = ConstraintError;

    fn field(&self, name: &str) -> MongoField {
        MongoField::Named(name.to_string())
    }

    fn document_id(&self) -> MongoField {
        MongoField::DocumentId
    }

    fn where_clause(
        &self,
        field: MongoField,
        op: FilterOp,
        value: &Value,
    ) -> Result<MongoConstraint, ConstraintError> {
        let key = field.into_key();
        let value = bson::to_bson(value)?;

        let clause = match op {
            FilterOp::Eq | FilterOp::ArrayContains => doc! { key: value },
            FilterOp::Ne => doc! { key: { "$ne": value } },
            FilterOp::Gt => doc! { key: { "$gt": value } },
            FilterOp::Gte => doc! { key: { "$gte": value } },
            FilterOp::Lt => doc! { key: { "$lt": value } },
            FilterOp::Lte => doc! { key: { "$lte": value } },
            FilterOp::In | FilterOp::ArrayContainsAny => doc! { key: { "$in": value } },
            FilterOp::NotIn => doc! { key: { "$nin": value } },
        };

        Ok(MongoConstraint::Where(clause))
    }

    fn order_by(
        &self,
        field: &str,
        direction: Direction,
    ) -> Result<MongoConstraint, ConstraintError> {
        let order: i32 = match direction {
            Direction::Asc => 1,
            Direction::Desc => -1,
        };

        Ok(MongoConstraint::Sort(doc! { field: order }))
    }

    fn limit(&self, limit: u32) -> Result<MongoConstraint, ConstraintError> {
        Ok(MongoConstraint::Limit(i64::from(limit)))
    }
}

// ---------------------------------------------------------------------------
// MongoQuery
// ---------------------------------------------------------------------------

/// A constraint list assembled into the arguments `Collection::find` takes.
///
/// # Example
///
/// ```rust,ignore
/// let constraints = build_query_constraints(&input, &MongoConstraints)?;
/// let query = MongoQuery::from_constraints(constraints);
///
/// let cursor = collection::<User>(&db, "users")
///     .find(query.filter)
///     .sort(query.sort.unwrap_or_default())
///     .limit(query.limit.unwrap_or(0))
///     .await?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MongoQuery {
    /// Combined filter document; empty when there are no filter clauses.
    pub filter: Document,

    /// Sort document, if an ordering constraint was present.
    pub sort: Option<Document>,

    /// Result limit, if a limit constraint was present.
    pub limit: Option<i64>,
}

impl MongoQuery {
    /// Assemble a constraint list into a query.
    ///
    /// Multiple filter clauses are combined under `$and` so repeated field
    /// names cannot collide inside one document. A single clause is used
    /// directly. No execution happens here.
    pub fn from_constraints(constraints: Vec<MongoConstraint>) -> Self {
        let mut clauses = Vec::new();
        let mut sort = None;
        let mut limit = None;

        for constraint in constraints {
            match constraint {
                MongoConstraint::Where(doc) => clauses.push(doc),
                MongoConstraint::Sort(doc) => sort = Some(doc),
                MongoConstraint::Limit(n) => limit = Some(n),
            }
        }

        let filter = if clauses.len() == 1 {
            clauses.into_iter().next().unwrap_or_default()
        } else if clauses.is_empty() {
            Document::new()
        } else {
            doc! { "$and": clauses }
        };

        Self {
            filter,
            sort,
            limit,
        }
    }
}

// ---------------------------------------------------------------------------
// Collection accessor
// ---------------------------------------------------------------------------

/// Get a typed collection reference from a database handle.
///
/// Pure delegation over `Database::collection`; kept so callers of this
/// crate do not reach for the driver directly for the common case.
pub fn collection<T: Send + Sync>(database: &Database, name: &str) -> Collection<T> {
    database.collection(name)
}
