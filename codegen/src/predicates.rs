//! Owner classification shared by all constraint strategies.
//!
//! A constraint's owner is the characteristic its Trait wraps. The two
//! predicates decide whether a validator built for that constraint runs once
//! on the whole field or once per list element / nested child.

use aspect_model::{Characteristic, CharacteristicKind};

/// True iff the owner's unwrapped base is a collection of any kind.
pub fn is_list_like(owner: &Characteristic) -> bool {
    owner.is_collection()
}

/// True iff the owner is an Either, a structured value, or has a complex
/// data type.
pub fn is_complex_like(owner: &Characteristic) -> bool {
    matches!(
        owner.base().kind,
        CharacteristicKind::Either { .. } | CharacteristicKind::StructuredValue { .. }
    ) || owner.is_complex()
}

/// Both classifications of one owner, computed once per constraint list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerShape {
    /// See [`is_list_like`].
    pub list_like: bool,
    /// See [`is_complex_like`].
    pub complex_like: bool,
}

impl OwnerShape {
    /// Classifies `owner`.
    pub fn of(owner: &Characteristic) -> Self {
        Self {
            list_like: is_list_like(owner),
            complex_like: is_complex_like(owner),
        }
    }

    /// True when per-element validators must be wrapped in the children
    /// combinator.
    pub fn wraps(self) -> bool {
        self.list_like || self.complex_like
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aspect_model::model::iris::*;
    use aspect_model::{CollectionKind, DataType, Entity};

    #[test]
    fn scalar_is_neither() {
        let shape = OwnerShape::of(&Characteristic::scalar("Age", XSD_INTEGER));
        assert!(!shape.list_like);
        assert!(!shape.complex_like);
        assert!(!shape.wraps());
    }

    #[test]
    fn every_collection_kind_is_list_like() {
        for kind in [
            CollectionKind::Collection,
            CollectionKind::List,
            CollectionKind::Set,
            CollectionKind::SortedSet,
            CollectionKind::TimeSeries,
        ] {
            let owner =
                Characteristic::collection_of("C", kind, DataType::Scalar(XSD_STRING.to_string()));
            assert!(is_list_like(&owner), "{kind:?}");
            assert!(!is_complex_like(&owner), "{kind:?}");
        }
    }

    #[test]
    fn entity_collection_is_both() {
        let owner = Characteristic::collection_of(
            "Trips",
            CollectionKind::List,
            DataType::Entity(Entity::new("Trip", Vec::new())),
        );
        let shape = OwnerShape::of(&owner);
        assert!(shape.list_like && shape.complex_like);
    }

    #[test]
    fn either_and_structured_value_are_complex_like() {
        let either = Characteristic::either(
            "Result",
            Characteristic::scalar("Ok", XSD_STRING),
            Characteristic::scalar("Err", XSD_INTEGER),
        );
        assert!(is_complex_like(&either));

        let structured = Characteristic::new(
            "Date",
            CharacteristicKind::StructuredValue {
                deconstruction_rule: r"(\d{4})-(\d{2})".to_string(),
                elements: vec!["year".to_string(), "month".to_string()],
            },
        );
        assert!(is_complex_like(&structured));
        assert!(!is_list_like(&structured));
    }
}
