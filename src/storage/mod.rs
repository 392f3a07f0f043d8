//! Backend bindings for constraint construction

#[cfg(feature = "mongodb_backend")]
pub mod mongodb;

#[cfg(feature = "mongodb_backend")]
pub use mongodb::{ConstraintError, MongoConstraint, MongoConstraints, MongoField, MongoQuery};
