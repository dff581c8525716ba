//! Aspect Model field and validator resolution.
//!
//! Turns the characteristics of a SAMM Aspect Model into a tree of
//! [`FieldDescriptor`]s, one per property, each carrying the UI field kind,
//! example value, unit, enumerated values, list flag, children and the
//! [`ValidatorDescriptor`]s derived from the property's constraints.
//!
//! Both resolvers are ordered first-match strategy tables: see
//! [`fields::FIELD_STRATEGIES`] and [`validators::CONSTRAINT_STRATEGIES`].
//!
//! ```
//! use aspect_codegen::{resolve_aspect, FieldKind};
//! use aspect_model::{Aspect, Characteristic, Constraint, Property};
//! use aspect_model::model::iris::XSD_INTEGER;
//!
//! let age = Characteristic::constrained(
//!     "AgeTrait",
//!     Characteristic::scalar("Age", XSD_INTEGER),
//!     vec![Constraint::range("AgeRange", Some(0.0), Some(150.0))],
//! );
//! let aspect = Aspect::new("Person", vec![Property::new("age", age)]);
//!
//! let fields = resolve_aspect(&aspect);
//! assert_eq!(fields[0].kind, FieldKind::Numeric);
//! assert_eq!(
//!     fields[0].validators[1].expression.to_string(),
//!     "FormValidators.rangeValidator(0, 'AT_LEAST', 150, 'AT_MOST')"
//! );
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod descriptor;
pub mod fields;
pub mod mapping;
pub mod predicates;
pub mod validators;

use std::collections::BTreeMap;

use aspect_model::{Aspect, Entity, Property};
use serde::Serialize;
use tracing::debug;

pub use descriptor::{
    FieldDescriptor, FieldKind, TextEncoding, ValidatorDescriptor, ValidatorExpression,
};
pub use fields::resolve_field;
pub use predicates::{is_complex_like, is_list_like, OwnerShape};
pub use validators::resolve_validators;

/// Resolves every top-level property of `aspect`, in declaration order.
#[must_use]
pub fn resolve_aspect(aspect: &Aspect) -> Vec<FieldDescriptor> {
    let fields = resolve_properties(&aspect.properties);
    debug!(aspect = %aspect.name, fields = fields.len(), "aspect resolved");
    fields
}

/// Resolves every property of `entity`, in declaration order.
#[must_use]
pub fn resolve_entity(entity: &Entity) -> Vec<FieldDescriptor> {
    let fields = resolve_properties(&entity.properties);
    debug!(entity = %entity.name, fields = fields.len(), "entity resolved");
    fields
}

fn resolve_properties(properties: &[Property]) -> Vec<FieldDescriptor> {
    properties
        .iter()
        .map(|p| resolve_field(p, &p.characteristic, None))
        .collect()
}

/// Summary of a resolved descriptor forest.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionReport {
    /// Number of fields, nested ones included.
    pub field_count: usize,
    /// Number of fields per kind.
    pub kinds: BTreeMap<FieldKind, usize>,
    /// Number of list fields.
    pub list_field_count: usize,
    /// Number of validators.
    pub validator_count: usize,
    /// Number of validators wrapped in the children combinator.
    pub wrapped_validator_count: usize,
}

impl ResolutionReport {
    /// Counts every field of every tree in `fields`.
    #[must_use]
    pub fn from_fields(fields: &[FieldDescriptor]) -> Self {
        let mut report = Self::default();
        for field in fields.iter().flat_map(FieldDescriptor::iter) {
            report.field_count += 1;
            *report.kinds.entry(field.kind).or_default() += 1;
            if field.is_list_field {
                report.list_field_count += 1;
            }
            report.validator_count += field.validators.len();
            report.wrapped_validator_count += field
                .validators
                .iter()
                .filter(|v| !v.applies_directly_to_group)
                .count();
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aspect_model::model::iris::*;
    use aspect_model::{Characteristic, Constraint};

    #[test]
    fn report_counts_nested_fields() {
        let position = Entity::new(
            "Position",
            vec![
                Property::new("lat", Characteristic::scalar("Lat", XSD_DOUBLE)),
                Property::new("lon", Characteristic::scalar("Lon", XSD_DOUBLE)).optional(),
            ],
        );
        let tags = Characteristic::list(
            "Tags",
            Characteristic::constrained(
                "Tag",
                Characteristic::scalar("Text", XSD_STRING),
                vec![Constraint::regular_expression("Word", r"\w+")],
            ),
        );
        let aspect = Aspect::new(
            "Movement",
            vec![
                Property::new("position", Characteristic::entity("P", position.clone())),
                Property::new("tags", tags).optional(),
            ],
        );

        let fields = resolve_aspect(&aspect);
        let report = ResolutionReport::from_fields(&fields);

        assert_eq!(report.field_count, 4);
        assert_eq!(report.kinds.get(&FieldKind::Complex), Some(&1));
        assert_eq!(report.kinds.get(&FieldKind::Numeric), Some(&2));
        assert_eq!(report.kinds.get(&FieldKind::ShortText), Some(&1));
        assert_eq!(report.list_field_count, 1);
        // required on position and lat, plus the wrapped tag pattern
        assert_eq!(report.validator_count, 3);
        assert_eq!(report.wrapped_validator_count, 1);

        let entity_fields = resolve_entity(&position);
        assert_eq!(entity_fields, fields[0].children);
    }

    #[test]
    fn empty_aspect_resolves_to_nothing() {
        let fields = resolve_aspect(&Aspect::new("Empty", Vec::new()));
        assert!(fields.is_empty());
        assert_eq!(ResolutionReport::from_fields(&fields), ResolutionReport::default());
    }
}
