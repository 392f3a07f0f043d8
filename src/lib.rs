//! # docquery
//!
//! A small helper for translating declarative search inputs into document-database
//! query constraints in Rust.
//!
//! ## Features
//!
//! - **Declarative Search Inputs**: Describe filters, ordering and paging as data
//! - **Constraint Translation**: One pure function maps an input to an ordered
//!   list of opaque constraint values
//! - **Pluggable Backends**: Constraint construction goes through the
//!   `ConstraintFactory` trait; the crate ships a MongoDB binding
//! - **Identity-Field Substitution**: The reserved `id` key is rewritten to the
//!   backend's document-identity marker (`_id` for MongoDB)
//! - **Wire-Friendly**: Inputs deserialize from JSON with insertion-ordered
//!   filter maps
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use docquery::prelude::*;
//!
//! let input: SearchInput<User> = serde_json::from_str(
//!     r#"{
//!         "filter": { "name": "John", "age": { "op": ">", "value": 18 } },
//!         "order": { "field": "name", "direction": "asc" },
//!         "paging": { "limit": 5 }
//!     }"#,
//! )?;
//!
//! let constraints = build_query_constraints(&input, &MongoConstraints)?;
//! let query = MongoQuery::from_constraints(constraints);
//!
//! let users = collection::<User>(&db, "users")
//!     .find(query.filter)
//!     .sort(query.sort.unwrap_or_default())
//!     .limit(query.limit.unwrap_or(0))
//!     .await?;
//! ```
//!
//! The crate never executes queries: it only constructs constraint values and
//! hands them back. Operator semantics, validation and query execution belong
//! to the database client.

pub mod core;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    pub use crate::core::{
        condition::{Condition, FilterOp},
        constraints::{ConstraintFactory, build_query_constraints},
        search::{Direction, Filter, ID_FIELD, OrderBy, Paging, SearchInput},
    };

    #[cfg(feature = "mongodb_backend")]
    pub use crate::storage::mongodb::{
        ConstraintError, MongoConstraint, MongoConstraints, MongoField, MongoQuery, collection,
    };
}
