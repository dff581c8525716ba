//! Length constraints.
//!
//! On a list-like owner the length bounds the number of elements and is
//! always applied to the whole field, even when the elements are complex.
//! Otherwise it bounds the text length, per child for complex-like owners.

use aspect_model::{Constraint, ConstraintKind};
use tracing::debug;

use crate::descriptor::{ValidatorDescriptor, ValidatorExpression};
use crate::predicates::OwnerShape;

/// Accepts length constraints.
pub fn applies(constraint: &Constraint) -> bool {
    matches!(constraint.kind, ConstraintKind::Length { .. })
}

/// Builds the length or list-length validator.
pub fn build(constraint: &Constraint, shape: OwnerShape) -> Option<ValidatorDescriptor> {
    let ConstraintKind::Length { min, max } = constraint.kind else {
        return None;
    };
    if min.is_none() && max.is_none() {
        debug!(constraint = %constraint.name, "length constraint without bounds dropped");
        return None;
    }
    if shape.list_like {
        return Some(ValidatorDescriptor::new(
            &constraint.name,
            ValidatorExpression::ListLength { min, max },
            false,
        ));
    }
    Some(ValidatorDescriptor::new(
        &constraint.name,
        ValidatorExpression::Length { min, max },
        shape.complex_like,
    ))
}
