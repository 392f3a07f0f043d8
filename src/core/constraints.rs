//! Translation from a search input to an ordered list of query constraints.
//!
//! [`build_query_constraints`] is a pure function: it walks the input once
//! and asks a [`ConstraintFactory`] to construct one opaque constraint value
//! per filter entry, plus one for the ordering directive and one for the
//! result limit. Constraints are never inspected or reordered here; the
//! output sequence is filters (in filter-map order), then order, then limit.

use crate::core::condition::{Condition, FilterOp};
use crate::core::search::{Direction, ID_FIELD, SearchInput};
use serde_json::Value;

/// Constraint-construction primitives supplied by a query library.
///
/// Implementations construct the backend's native clause values; the builder
/// treats them as opaque. Construction may fail (a value the backend cannot
/// represent, for instance); such errors belong to the factory and are
/// propagated unchanged by the builder.
pub trait ConstraintFactory {
    /// Target of a filter clause: a literal field or the identity marker.
    type Field;

    /// Opaque constraint value handed back to the caller.
    type Constraint;

    /// Construction-time error.
    type Error;

    /// Target a literal field name.
    fn field(&self, name: &str) -> Self::Field;

    /// Target the document-identity field, distinct from any literal name.
    fn document_id(&self) -> Self::Field;

    /// Construct an equality-or-comparison constraint.
    fn where_clause(
        &self,
        field: Self::Field,
        op: FilterOp,
        value: &Value,
    ) -> Result<Self::Constraint, Self::Error>;

    /// Construct an ordering constraint.
    fn order_by(
        &self,
        field: &str,
        direction: Direction,
    ) -> Result<Self::Constraint, Self::Error>;

    /// Construct a result-count-limit constraint.
    fn limit(&self, limit: u32) -> Result<Self::Constraint, Self::Error>;
}

/// Build the ordered constraint list for a search input.
///
/// Output order: one constraint per non-null filter entry in filter-map
/// order, then the ordering constraint if present, then the limit constraint
/// if present. Null filter conditions contribute nothing, for every field
/// including [`ID_FIELD`]. The reserved `"id"` key targets
/// [`ConstraintFactory::document_id`]; every other key is passed through as a
/// literal field name.
///
/// Stateless and side-effect free: the same input always yields a
/// structurally equal constraint list.
pub fn build_query_constraints<T, F: ConstraintFactory>(
    input: &SearchInput<T>,
    factory: &F,
) -> Result<Vec<F::Constraint>, F::Error> {
    let mut constraints = Vec::new();

    for (field, condition) in &input.filter {
        if condition.is_null() {
            tracing::debug!(field = %field, "skipping null filter condition");
            continue;
        }

        tracing::debug!(field = %field, condition = ?condition, "building filter constraint");

        let target = if field == ID_FIELD {
            factory.document_id()
        } else {
            factory.field(field)
        };

        let constraint = match condition {
            Condition::Clause { op, value } => factory.where_clause(target, *op, value)?,
            Condition::Value(value) => factory.where_clause(target, FilterOp::Eq, value)?,
        };

        constraints.push(constraint);
    }

    if let Some(order) = &input.order {
        constraints.push(factory.order_by(&order.field, order.direction)?);
    }

    if let Some(paging) = &input.paging {
        constraints.push(factory.limit(paging.limit)?);
    }

    Ok(constraints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::condition::Condition;
    use serde_json::json;
    use std::convert::Infallible;

    /// Fake factory recording what it was asked to construct.
    #[derive(Debug, Clone, PartialEq)]
    enum Recorded {
        Where {
            field: Target,
            op: FilterOp,
            value: Value,
        },
        OrderBy {
            field: String,
            direction: Direction,
        },
        Limit(u32),
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Target {
        Named(String),
        DocumentId,
    }

    struct Recording;

    impl ConstraintFactory for Recording {
        type Field = Target;
        type Constraint = Recorded;
        type Error = Infallible;

        fn field(&self, name: &str) -> Target {
            Target::Named(name.to_string())
        }

        fn document_id(&self) -> Target {
            Target::DocumentId
        }

        fn where_clause(
            &self,
            field: Target,
            op: FilterOp,
            value: &Value,
        ) -> Result<Recorded, Infallible> {
            Ok(Recorded::Where {
                field,
                op,
                value: value.clone(),
            })
        }

        fn order_by(&self, field: &str, direction: Direction) -> Result<Recorded, Infallible> {
            Ok(Recorded::OrderBy {
                field: field.to_string(),
                direction,
            })
        }

        fn limit(&self, limit: u32) -> Result<Recorded, Infallible> {
            Ok(Recorded::Limit(limit))
        }
    }

    fn build(input: &SearchInput) -> Vec<Recorded> {
        build_query_constraints(input, &Recording).unwrap()
    }

    fn named_where(field: &str, op: FilterOp, value: Value) -> Recorded {
        Recorded::Where {
            field: Target::Named(field.to_string()),
            op,
            value,
        }
    }

    // === empty input ===

    #[test]
    fn test_empty_input_yields_empty_sequence() {
        assert!(build(&SearchInput::new()).is_empty());
    }

    // === filters ===

    #[test]
    fn test_bare_value_becomes_equality_constraint() {
        let input = SearchInput::new().with_filter("name", json!("John"));
        assert_eq!(
            build(&input),
            [named_where("name", FilterOp::Eq, json!("John"))]
        );
    }

    #[test]
    fn test_explicit_clause_keeps_operator_and_value() {
        let input = SearchInput::new().with_filter("age", Condition::clause(FilterOp::Gt, json!(18)));
        assert_eq!(build(&input), [named_where("age", FilterOp::Gt, json!(18))]);
    }

    #[test]
    fn test_false_is_not_skipped() {
        let input = SearchInput::new().with_filter("active", json!(false));
        assert_eq!(
            build(&input),
            [named_where("active", FilterOp::Eq, json!(false))]
        );
    }

    #[test]
    fn test_null_condition_contributes_nothing() {
        let input = SearchInput::new()
            .with_filter("name", json!(null))
            .with_filter("age", json!(null));
        assert!(build(&input).is_empty());
    }

    #[test]
    fn test_bare_array_is_equality_against_the_array() {
        let input = SearchInput::new().with_filter("tags", json!(["a", "b"]));
        assert_eq!(
            build(&input),
            [named_where("tags", FilterOp::Eq, json!(["a", "b"]))]
        );
    }

    #[test]
    fn test_object_without_clause_keys_is_equality_against_the_object() {
        let input = SearchInput::new().with_filter("meta", json!({ "nested": true }));
        assert_eq!(
            build(&input),
            [named_where("meta", FilterOp::Eq, json!({ "nested": true }))]
        );
    }

    #[test]
    fn test_multiple_filters_keep_map_order() {
        let input = SearchInput::new()
            .with_filter("name", json!("John"))
            .with_filter("age", Condition::clause(FilterOp::Gt, json!(18)))
            .with_filter("active", json!(true));

        assert_eq!(
            build(&input),
            [
                named_where("name", FilterOp::Eq, json!("John")),
                named_where("age", FilterOp::Gt, json!(18)),
                named_where("active", FilterOp::Eq, json!(true)),
            ]
        );
    }

    // === identity field ===

    #[test]
    fn test_id_targets_the_identity_marker() {
        let input = SearchInput::new().with_filter("id", json!("test-id"));
        assert_eq!(
            build(&input),
            [Recorded::Where {
                field: Target::DocumentId,
                op: FilterOp::Eq,
                value: json!("test-id"),
            }]
        );
    }

    #[test]
    fn test_id_clause_with_membership_operator() {
        let input = SearchInput::new()
            .with_filter("id", Condition::clause(FilterOp::In, json!(["id1", "id2"])));
        assert_eq!(
            build(&input),
            [Recorded::Where {
                field: Target::DocumentId,
                op: FilterOp::In,
                value: json!(["id1", "id2"]),
            }]
        );
    }

    #[test]
    fn test_null_id_is_skipped_like_any_other_field() {
        let input = SearchInput::new().with_filter("id", json!(null));
        assert!(build(&input).is_empty());
    }

    // === order and paging ===

    #[test]
    fn test_order_alone_yields_one_ordering_constraint() {
        let input = SearchInput::new().with_order("name", Direction::Desc);
        assert_eq!(
            build(&input),
            [Recorded::OrderBy {
                field: "name".to_string(),
                direction: Direction::Desc,
            }]
        );
    }

    #[test]
    fn test_paging_alone_yields_one_limit_constraint() {
        let input = SearchInput::new().with_limit(10);
        assert_eq!(build(&input), [Recorded::Limit(10)]);
    }

    #[test]
    fn test_combined_input_orders_filters_then_order_then_limit() {
        let input = SearchInput::new()
            .with_filter("name", json!("John"))
            .with_filter("age", Condition::clause(FilterOp::Gt, json!(18)))
            .with_order("name", Direction::Asc)
            .with_limit(5);

        assert_eq!(
            build(&input),
            [
                named_where("name", FilterOp::Eq, json!("John")),
                named_where("age", FilterOp::Gt, json!(18)),
                Recorded::OrderBy {
                    field: "name".to_string(),
                    direction: Direction::Asc,
                },
                Recorded::Limit(5),
            ]
        );
    }

    // === statelessness ===

    #[test]
    fn test_rebuilding_the_same_input_is_structurally_equal() {
        let input = SearchInput::new()
            .with_filter("name", json!("John"))
            .with_order("name", Direction::Asc)
            .with_limit(5);

        assert_eq!(build(&input), build(&input));
    }
}
