//! Core module containing the search-input model and the constraint builder

pub mod condition;
pub mod constraints;
pub mod search;

pub use condition::{Condition, FilterOp};
pub use constraints::{ConstraintFactory, build_query_constraints};
pub use search::{Direction, Filter, ID_FIELD, OrderBy, Paging, SearchInput};
