//! Constraint → validator descriptor resolution.
//!
//! Constraint strategies are an ordered table of `(predicate, builder)`
//! pairs; the first predicate that accepts a constraint selects its builder.
//! A builder may legitimately produce no descriptor (a constraint carrying no
//! information, or a kind without a UI validator); the default strategy at
//! the end of the table always matches and always produces nothing.

pub mod length;
pub mod numeric;
pub mod text;

use aspect_model::{Characteristic, Constraint};
use tracing::debug;

use crate::descriptor::ValidatorDescriptor;
use crate::predicates::OwnerShape;

/// One entry of the constraint strategy table.
pub struct ConstraintStrategy {
    /// Strategy name, for logging.
    pub name: &'static str,
    /// Shallow test on the constraint variant.
    pub applies: fn(&Constraint) -> bool,
    /// Builds the validator, if the constraint yields one.
    pub build: fn(&Constraint, OwnerShape) -> Option<ValidatorDescriptor>,
}

/// Constraint strategies in precedence order.
pub static CONSTRAINT_STRATEGIES: [ConstraintStrategy; 5] = [
    ConstraintStrategy {
        name: "length",
        applies: length::applies,
        build: length::build,
    },
    ConstraintStrategy {
        name: "fixedPoint",
        applies: numeric::applies_fixed_point,
        build: numeric::build_fixed_point,
    },
    ConstraintStrategy {
        name: "range",
        applies: numeric::applies_range,
        build: numeric::build_range,
    },
    ConstraintStrategy {
        name: "regularExpression",
        applies: text::applies_pattern,
        build: text::build_pattern,
    },
    ConstraintStrategy {
        name: "encoding",
        applies: text::applies_encoding,
        build: text::build_encoding,
    },
];

/// Fallback for constraint kinds without a UI validator.
pub static DEFAULT_CONSTRAINT_STRATEGY: ConstraintStrategy = ConstraintStrategy {
    name: "default",
    applies: always,
    build: nothing,
};

fn always(_: &Constraint) -> bool {
    true
}

fn nothing(constraint: &Constraint, _: OwnerShape) -> Option<ValidatorDescriptor> {
    debug!(constraint = %constraint.name, kind = ?constraint.kind, "no UI validator for constraint kind");
    None
}

/// Returns the first strategy accepting `constraint`.
pub fn select_strategy(constraint: &Constraint) -> &'static ConstraintStrategy {
    CONSTRAINT_STRATEGIES
        .iter()
        .find(|s| (s.applies)(constraint))
        .unwrap_or(&DEFAULT_CONSTRAINT_STRATEGY)
}

/// Resolves a Trait's constraints into a flat validator list.
///
/// `owner` is the characteristic the constraints restrict; its shape is
/// classified once and decides, per constraint, whether the validator is
/// wrapped in the children combinator.
pub fn resolve_validators<'a, I>(constraints: I, owner: &Characteristic) -> Vec<ValidatorDescriptor>
where
    I: IntoIterator<Item = &'a Constraint>,
{
    let shape = OwnerShape::of(owner);
    constraints
        .into_iter()
        .filter_map(|constraint| {
            let strategy = select_strategy(constraint);
            (strategy.build)(constraint, shape)
        })
        .collect()
}
