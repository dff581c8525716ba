//! Range and fixed-point constraints.

use aspect_model::{Constraint, ConstraintKind};
use tracing::debug;

use crate::descriptor::{ValidatorDescriptor, ValidatorExpression};
use crate::predicates::OwnerShape;

/// Accepts fixed-point constraints.
pub fn applies_fixed_point(constraint: &Constraint) -> bool {
    matches!(constraint.kind, ConstraintKind::FixedPoint { .. })
}

/// Always yields one precision validator.
pub fn build_fixed_point(constraint: &Constraint, shape: OwnerShape) -> Option<ValidatorDescriptor> {
    let ConstraintKind::FixedPoint { integer, scale } = constraint.kind else {
        return None;
    };
    Some(ValidatorDescriptor::new(
        &constraint.name,
        ValidatorExpression::FixedPoint {
            integer_digits: integer,
            scale,
        },
        shape.wraps(),
    ))
}

/// Accepts range constraints.
pub fn applies_range(constraint: &Constraint) -> bool {
    matches!(constraint.kind, ConstraintKind::Range { .. })
}

/// Yields a range validator unless both bounds are absent.
pub fn build_range(constraint: &Constraint, shape: OwnerShape) -> Option<ValidatorDescriptor> {
    let ConstraintKind::Range {
        min,
        max,
        lower_bound,
        upper_bound,
    } = constraint.kind
    else {
        return None;
    };
    if min.is_none() && max.is_none() {
        debug!(constraint = %constraint.name, "range constraint without bounds dropped");
        return None;
    }
    Some(ValidatorDescriptor::new(
        &constraint.name,
        ValidatorExpression::Range {
            min,
            lower_bound,
            max,
            upper_bound,
        },
        shape.wraps(),
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use aspect_model::BoundDefinition;

    const SCALAR: OwnerShape = OwnerShape {
        list_like: false,
        complex_like: false,
    };

    #[test]
    fn range_carries_bound_kinds() {
        let constraint = Constraint::new(
            "Speed",
            ConstraintKind::Range {
                min: Some(0.0),
                max: Some(300.0),
                lower_bound: BoundDefinition::GreaterThan,
                upper_bound: BoundDefinition::LessThan,
            },
        );
        let v = build_range(&constraint, SCALAR).unwrap();
        assert!(v.applies_directly_to_group);
        assert_eq!(
            v.expression.to_string(),
            "FormValidators.rangeValidator(0, 'GREATER_THAN', 300, 'LESS_THAN')"
        );
    }

    #[test]
    fn range_with_one_bound_is_kept() {
        let v = build_range(&Constraint::range("R", None, Some(10.0)), SCALAR).unwrap();
        assert!(matches!(
            v.expression,
            ValidatorExpression::Range {
                min: None,
                max: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn range_without_bounds_is_skipped() {
        assert!(build_range(&Constraint::range("R", None, None), SCALAR).is_none());
    }

    #[test]
    fn fixed_point_is_never_skipped() {
        let v = build_fixed_point(&Constraint::fixed_point("Money", 0, 0), SCALAR).unwrap();
        assert_eq!(
            v.expression,
            ValidatorExpression::FixedPoint {
                integer_digits: 0,
                scale: 0
            }
        );
    }
}
