//! Characteristic → field descriptor resolution.
//!
//! Field strategies are an ordered table of `(predicate, builder)` pairs.
//! Dispatch walks the table top to bottom and the first predicate accepting
//! the characteristic selects the builder, so table order encodes precedence
//! between overlapping kinds (a Trait-wrapped entity is complex before its
//! wrapped scalar is considered). The default strategy always matches.
//!
//! Collections are not a dispatch case. Every builder that can see a
//! collection first asks [`FieldRequest::element_field`]: a collection with an
//! element characteristic re-dispatches on the element and the result is the
//! list field. Collections of entities and element-less scalar collections are
//! built by the strategy their data type selects, flagged as list fields.

pub mod complex;
pub mod enumeration;
pub mod scalar;

use aspect_model::{Characteristic, CharacteristicKind, Property};
use tracing::trace;

use crate::descriptor::{FieldDescriptor, FieldKind, ValidatorDescriptor};
use crate::validators::resolve_validators;

/// One entry of the field strategy table.
pub struct FieldStrategy {
    /// Kind of the fields this strategy builds.
    pub kind: FieldKind,
    /// Shallow, non-recursive test on the characteristic.
    pub applies: fn(&Characteristic) -> bool,
    /// Builds the field, recursing through [`dispatch`] where needed.
    pub build: fn(&FieldRequest<'_>) -> FieldDescriptor,
}

/// Field strategies in precedence order.
pub static FIELD_STRATEGIES: [FieldStrategy; 9] = [
    FieldStrategy {
        kind: FieldKind::Complex,
        applies: complex::applies_complex,
        build: complex::build_complex,
    },
    FieldStrategy {
        kind: FieldKind::Either,
        applies: complex::applies_either,
        build: complex::build_either,
    },
    FieldStrategy {
        kind: FieldKind::Enumeration,
        applies: enumeration::applies,
        build: enumeration::build,
    },
    FieldStrategy {
        kind: FieldKind::Boolean,
        applies: scalar::applies_boolean,
        build: scalar::build_boolean,
    },
    FieldStrategy {
        kind: FieldKind::LongText,
        applies: scalar::applies_long_text,
        build: scalar::build_long_text,
    },
    FieldStrategy {
        kind: FieldKind::Numeric,
        applies: scalar::applies_numeric,
        build: scalar::build_numeric,
    },
    FieldStrategy {
        kind: FieldKind::Date,
        applies: scalar::applies_date,
        build: scalar::build_date,
    },
    FieldStrategy {
        kind: FieldKind::DateTime,
        applies: scalar::applies_date_time,
        build: scalar::build_date_time,
    },
    FieldStrategy {
        kind: FieldKind::ShortText,
        applies: scalar::applies_short_text,
        build: scalar::build_short_text,
    },
];

/// Terminal fallback: accepts every characteristic.
pub static DEFAULT_FIELD_STRATEGY: FieldStrategy = FieldStrategy {
    kind: FieldKind::Default,
    applies: scalar::applies_default,
    build: scalar::build_default,
};

/// Returns the first strategy accepting `characteristic`.
pub fn select_strategy(characteristic: &Characteristic) -> &'static FieldStrategy {
    FIELD_STRATEGIES
        .iter()
        .find(|s| (s.applies)(characteristic))
        .unwrap_or(&DEFAULT_FIELD_STRATEGY)
}

/// Resolves the field for `child` owned by `parent`.
///
/// The field is named `name_override` when given, else after `parent`.
/// Resolution is total: every characteristic yields a descriptor.
pub fn resolve_field(
    parent: &Property,
    child: &Characteristic,
    name_override: Option<&str>,
) -> FieldDescriptor {
    let name = name_override.unwrap_or(&parent.name);
    dispatch(&FieldRequest::new(parent, child, name))
}

/// Selects the strategy for the request's characteristic and builds.
pub fn dispatch(request: &FieldRequest<'_>) -> FieldDescriptor {
    let strategy = select_strategy(request.characteristic);
    trace!(
        field = request.name,
        characteristic = %request.characteristic.name,
        strategy = %strategy.kind,
        "field strategy selected"
    );
    (strategy.build)(request)
}

/// Validators every strategy adds first: "required" for mandatory
/// properties. Never wrapped.
pub fn base_validators(parent: &Property) -> Vec<ValidatorDescriptor> {
    if parent.optional {
        Vec::new()
    } else {
        vec![ValidatorDescriptor::required()]
    }
}

/// Inputs of one strategy build.
pub struct FieldRequest<'a> {
    parent: &'a Property,
    characteristic: &'a Characteristic,
    name: &'a str,
    /// Collection whose element is being resolved.
    list_owner: Option<&'a Characteristic>,
    /// Validators of enclosing collection Traits.
    inherited: Vec<ValidatorDescriptor>,
}

impl<'a> FieldRequest<'a> {
    /// A request with no enclosing collection.
    pub fn new(parent: &'a Property, characteristic: &'a Characteristic, name: &'a str) -> Self {
        Self {
            parent,
            characteristic,
            name,
            list_owner: None,
            inherited: Vec::new(),
        }
    }

    /// The property owning the field.
    pub fn parent(&self) -> &'a Property {
        self.parent
    }

    /// The characteristic being resolved, possibly a Trait.
    pub fn characteristic(&self) -> &'a Characteristic {
        self.characteristic
    }

    /// The field name.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The characteristic the request's constraints restrict. Constraints on
    /// a collection element restrict the enclosing collection's elements, so
    /// the collection is the owner there.
    fn owner(&self) -> &'a Characteristic {
        self.list_owner
            .unwrap_or_else(|| self.characteristic.base())
    }

    fn own_validators(&self) -> Vec<ValidatorDescriptor> {
        resolve_validators(self.characteristic.constraints(), self.owner())
    }

    /// Base validators, then validators of enclosing collection Traits,
    /// then this characteristic's own constraint validators.
    pub fn validators(&self) -> Vec<ValidatorDescriptor> {
        let mut validators = base_validators(self.parent);
        validators.extend(self.inherited.iter().cloned());
        validators.extend(self.own_validators());
        validators
    }

    /// True when the field holds a collection.
    pub fn is_list(&self) -> bool {
        self.list_owner.is_some() || self.characteristic.is_collection()
    }

    /// For a collection with an element characteristic, resolves the element
    /// under the same parent and name as a list field. `None` otherwise.
    pub fn element_field(&self) -> Option<FieldDescriptor> {
        let collection = self.characteristic.base();
        let CharacteristicKind::Collection {
            element: Some(element),
            ..
        } = &collection.kind
        else {
            return None;
        };
        let mut inherited = self.inherited.clone();
        inherited.extend(self.own_validators());
        let request = FieldRequest {
            parent: self.parent,
            characteristic: element.as_ref(),
            name: self.name,
            list_owner: Some(collection),
            inherited,
        };
        Some(dispatch(&request))
    }

    /// The attributes every field carries; strategies fill in the rest.
    pub fn descriptor(&self, kind: FieldKind) -> FieldDescriptor {
        FieldDescriptor {
            kind,
            name: self.name.to_string(),
            validators: self.validators(),
            example_value: self.parent.example_value.clone(),
            unit_name: None,
            enum_values: Vec::new(),
            is_list_field: self.is_list(),
            children: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aspect_model::model::iris::*;
    use aspect_model::{CollectionKind, Constraint, DataType, Entity};

    fn kind_of(characteristic: &Characteristic) -> FieldKind {
        select_strategy(characteristic).kind
    }

    #[test]
    fn scalar_types_select_their_family() {
        let cases = [
            (XSD_BOOLEAN, FieldKind::Boolean),
            (RDF_LANG_STRING, FieldKind::LongText),
            (XSD_INTEGER, FieldKind::Numeric),
            (XSD_DOUBLE, FieldKind::Numeric),
            (XSD_DATE, FieldKind::Date),
            ("xsd:gYearMonth", FieldKind::Date),
            (XSD_DATETIME, FieldKind::DateTime),
            (XSD_TIME, FieldKind::DateTime),
            (XSD_STRING, FieldKind::ShortText),
            (SAMM_CURIE, FieldKind::ShortText),
            ("xsd:negativeInteger", FieldKind::Default),
            ("xsd:QName", FieldKind::Default),
        ];
        for (type_iri, expected) in cases {
            assert_eq!(kind_of(&Characteristic::scalar("C", type_iri)), expected, "{type_iri}");
        }
    }

    #[test]
    fn characteristic_without_data_type_is_default() {
        let bare = Characteristic::new("Bare", CharacteristicKind::Scalar { unit: None });
        assert_eq!(kind_of(&bare), FieldKind::Default);
    }

    #[test]
    fn trait_wrapped_entity_is_complex() {
        let traited = Characteristic::constrained(
            "Wrapped",
            Characteristic::scalar("Text", XSD_STRING),
            vec![Constraint::length("L", Some(1), None)],
        )
        .with_data_type(DataType::Entity(Entity::new("Point", Vec::new())));
        assert_eq!(kind_of(&traited), FieldKind::Complex);
    }

    #[test]
    fn complex_takes_precedence_over_either_and_enumeration() {
        let entity = DataType::Entity(Entity::new("E", Vec::new()));
        let either = Characteristic::either(
            "U",
            Characteristic::scalar("L", XSD_STRING),
            Characteristic::scalar("R", XSD_STRING),
        );
        assert_eq!(kind_of(&either), FieldKind::Either);
        assert_eq!(kind_of(&either.with_data_type(entity.clone())), FieldKind::Complex);

        let enumeration = Characteristic::enumeration("E", XSD_BOOLEAN, &["true"]);
        assert_eq!(kind_of(&enumeration), FieldKind::Enumeration);
        assert_eq!(kind_of(&enumeration.with_data_type(entity)), FieldKind::Complex);
    }

    #[test]
    fn collections_dispatch_on_their_data_type() {
        let numbers = Characteristic::collection_of(
            "Numbers",
            CollectionKind::Set,
            DataType::Scalar(XSD_INTEGER.to_string()),
        );
        assert_eq!(kind_of(&numbers), FieldKind::Numeric);
    }

    #[test]
    fn optional_parent_has_no_base_validators() {
        let characteristic = Characteristic::scalar("Age", XSD_INTEGER);
        assert_eq!(base_validators(&Property::new("age", characteristic.clone())).len(), 1);
        assert!(base_validators(&Property::new("age", characteristic).optional()).is_empty());
    }

    #[test]
    fn name_override_replaces_property_name() {
        let property = Property::new("age", Characteristic::scalar("Age", XSD_INTEGER));
        let field = resolve_field(&property, &property.characteristic, Some("years"));
        assert_eq!(field.name, "years");
        assert_eq!(resolve_field(&property, &property.characteristic, None).name, "age");
    }
}
