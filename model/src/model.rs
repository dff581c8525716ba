//! Core Aspect Model types.
//!
//! These types represent a SAMM Aspect Model as an owned Rust tree: an
//! [`Aspect`] owns its [`Property`] list, every property owns its
//! [`Characteristic`], and complex data types own their [`Entity`] (and so
//! their nested properties). Because the tree is owned, a cyclic model cannot
//! be represented.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The root of an Aspect Model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aspect {
    /// Aspect name (e.g., `"Movement"`).
    pub name: String,
    /// Top-level properties in declaration order.
    #[serde(default)]
    pub properties: Vec<Property>,
}

impl Aspect {
    /// Creates an aspect with the given top-level properties.
    #[must_use]
    pub fn new(name: impl Into<String>, properties: Vec<Property>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    /// Looks up a top-level property by name. Returns `None` if not found.
    #[must_use]
    pub fn find_property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Returns every entity reachable from the aspect, depth-first in
    /// declaration order. An entity used by several properties is listed once
    /// per use.
    #[must_use]
    pub fn entities(&self) -> Vec<&Entity> {
        let mut out = Vec::new();
        for property in &self.properties {
            collect_entities(&property.characteristic, &mut out);
        }
        out
    }

    /// Looks up an entity by name anywhere in the model. Returns `None` if
    /// not found.
    #[must_use]
    pub fn find_entity(&self, name: &str) -> Option<&Entity> {
        self.entities().into_iter().find(|e| e.name == name)
    }
}

fn collect_entities<'a>(characteristic: &'a Characteristic, out: &mut Vec<&'a Entity>) {
    if let Some(DataType::Entity(entity)) = &characteristic.data_type {
        out.push(entity);
        for property in &entity.properties {
            collect_entities(&property.characteristic, out);
        }
    }
    match &characteristic.kind {
        CharacteristicKind::Collection {
            element: Some(element),
            ..
        } => collect_entities(element, out),
        CharacteristicKind::Either { left, right } => {
            collect_entities(left, out);
            collect_entities(right, out);
        }
        CharacteristicKind::Trait { base, .. } => collect_entities(base, out),
        _ => {}
    }
}

/// A named feature of an Aspect or Entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Property name, unique within its owning Entity or Aspect.
    pub name: String,
    /// Example value as written in the model, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_value: Option<String>,
    /// Whether the property may be absent from a payload.
    #[serde(default, alias = "isOptional")]
    pub optional: bool,
    /// Semantics of the property's value.
    pub characteristic: Characteristic,
}

impl Property {
    /// Creates a mandatory property with no example value.
    #[must_use]
    pub fn new(name: impl Into<String>, characteristic: Characteristic) -> Self {
        Self {
            name: name.into(),
            example_value: None,
            optional: false,
            characteristic,
        }
    }

    /// Marks the property optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Sets the example value.
    #[must_use]
    pub fn with_example(mut self, value: impl Into<String>) -> Self {
        self.example_value = Some(value.into());
        self
    }
}

/// A complex data type: an ordered list of properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Entity name (e.g., `"SpatialPosition"`).
    pub name: String,
    /// Properties in declaration order.
    #[serde(default)]
    pub properties: Vec<Property>,
}

impl Entity {
    /// Creates an entity with the given properties.
    #[must_use]
    pub fn new(name: impl Into<String>, properties: Vec<Property>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }
}

/// The data type of a characteristic: a scalar type IRI or a complex entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataType {
    /// A scalar type, identified by IRI (`xsd:string`, a full XSD IRI, ...).
    Scalar(String),
    /// A complex type.
    Entity(Entity),
}

impl DataType {
    /// Returns true iff this data type is an [`Entity`].
    #[must_use]
    pub fn is_complex(&self) -> bool {
        matches!(self, DataType::Entity(_))
    }

    /// Returns the entity for complex data types.
    #[must_use]
    pub fn entity(&self) -> Option<&Entity> {
        match self {
            DataType::Entity(entity) => Some(entity),
            DataType::Scalar(_) => None,
        }
    }

    /// Returns the short type name of a scalar data type (e.g., `"integer"`).
    #[must_use]
    pub fn short_name(&self) -> Option<&str> {
        match self {
            DataType::Scalar(iri) => Some(local_name(iri)),
            DataType::Entity(_) => None,
        }
    }
}

/// Kind of a collection characteristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CollectionKind {
    /// Unordered, duplicates allowed.
    #[default]
    Collection,
    /// Ordered, duplicates allowed.
    List,
    /// Unordered, no duplicates.
    Set,
    /// Ordered, no duplicates.
    SortedSet,
    /// Ordered list of timestamped values.
    TimeSeries,
}

/// Shape of a characteristic node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum CharacteristicKind {
    /// A plain characteristic described entirely by its data type. `unit`
    /// carries the unit of quantifiable characteristics.
    Scalar {
        /// Unit of measurement, if any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
    },
    /// A closed set of permitted values.
    Enumeration {
        /// Permitted values in declaration order.
        values: Vec<EnumValue>,
    },
    /// A collection, either of scalar elements described by their own
    /// characteristic or of the collection's (complex) data type.
    Collection {
        /// Collection kind.
        #[serde(default)]
        collection: CollectionKind,
        /// Characteristic of the elements, if declared.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        element: Option<Box<Characteristic>>,
    },
    /// A tagged union of two alternatives.
    Either {
        /// Left alternative.
        left: Box<Characteristic>,
        /// Right alternative.
        right: Box<Characteristic>,
    },
    /// A scalar value assembled from several parts.
    StructuredValue {
        /// Regular expression deconstructing the value.
        deconstruction_rule: String,
        /// Names of the parts.
        #[serde(default)]
        elements: Vec<String>,
    },
    /// A characteristic decorated with constraints.
    Trait {
        /// The constrained characteristic.
        base: Box<Characteristic>,
        /// Constraints in declaration order.
        #[serde(default)]
        constraints: Vec<Constraint>,
    },
}

/// Semantic description of a property's value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Characteristic {
    /// Characteristic name (e.g., `"Speed"`).
    pub name: String,
    /// Declared data type, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<DataType>,
    /// Variant and its payload.
    #[serde(flatten)]
    pub kind: CharacteristicKind,
}

impl Characteristic {
    /// Creates a characteristic with no data type.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: CharacteristicKind) -> Self {
        Self {
            name: name.into(),
            data_type: None,
            kind,
        }
    }

    /// Creates a plain scalar characteristic of the given type IRI.
    #[must_use]
    pub fn scalar(name: impl Into<String>, type_iri: impl Into<String>) -> Self {
        Self::new(name, CharacteristicKind::Scalar { unit: None })
            .with_data_type(DataType::Scalar(type_iri.into()))
    }

    /// Creates a quantifiable scalar characteristic carrying a unit.
    #[must_use]
    pub fn quantity(
        name: impl Into<String>,
        type_iri: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            CharacteristicKind::Scalar {
                unit: Some(unit.into()),
            },
        )
        .with_data_type(DataType::Scalar(type_iri.into()))
    }

    /// Creates a scalar characteristic whose data type is the given entity.
    #[must_use]
    pub fn entity(name: impl Into<String>, entity: Entity) -> Self {
        Self::new(name, CharacteristicKind::Scalar { unit: None })
            .with_data_type(DataType::Entity(entity))
    }

    /// Creates an enumeration of literal values.
    #[must_use]
    pub fn enumeration(name: impl Into<String>, type_iri: impl Into<String>, values: &[&str]) -> Self {
        let values = values
            .iter()
            .map(|v| EnumValue::Literal(serde_json::Value::String((*v).to_owned())))
            .collect();
        Self::new(name, CharacteristicKind::Enumeration { values })
            .with_data_type(DataType::Scalar(type_iri.into()))
    }

    /// Creates a list whose elements are described by `element`. The list
    /// inherits the element's data type.
    #[must_use]
    pub fn list(name: impl Into<String>, element: Characteristic) -> Self {
        let data_type = element.effective_data_type().cloned();
        Self {
            name: name.into(),
            data_type,
            kind: CharacteristicKind::Collection {
                collection: CollectionKind::List,
                element: Some(Box::new(element)),
            },
        }
    }

    /// Creates an element-less collection of the given data type.
    #[must_use]
    pub fn collection_of(name: impl Into<String>, collection: CollectionKind, data_type: DataType) -> Self {
        Self::new(
            name,
            CharacteristicKind::Collection {
                collection,
                element: None,
            },
        )
        .with_data_type(data_type)
    }

    /// Creates a tagged union of two alternatives.
    #[must_use]
    pub fn either(name: impl Into<String>, left: Characteristic, right: Characteristic) -> Self {
        Self::new(
            name,
            CharacteristicKind::Either {
                left: Box::new(left),
                right: Box::new(right),
            },
        )
    }

    /// Wraps `base` in a Trait carrying `constraints`.
    #[must_use]
    pub fn constrained(name: impl Into<String>, base: Characteristic, constraints: Vec<Constraint>) -> Self {
        Self::new(
            name,
            CharacteristicKind::Trait {
                base: Box::new(base),
                constraints,
            },
        )
    }

    /// Sets the data type.
    #[must_use]
    pub fn with_data_type(mut self, data_type: DataType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    /// Unwraps nested Traits down to the innermost constrained characteristic.
    #[must_use]
    pub fn base(&self) -> &Characteristic {
        let mut current = self;
        while let CharacteristicKind::Trait { base, .. } = &current.kind {
            current = base;
        }
        current
    }

    /// Returns the nearest declared data type, walking from this node down
    /// through wrapped Trait bases.
    #[must_use]
    pub fn effective_data_type(&self) -> Option<&DataType> {
        let mut current = self;
        loop {
            if let Some(data_type) = &current.data_type {
                return Some(data_type);
            }
            match &current.kind {
                CharacteristicKind::Trait { base, .. } => current = base,
                _ => return None,
            }
        }
    }

    /// Returns the constraints of every Trait level, outermost first.
    #[must_use]
    pub fn constraints(&self) -> Vec<&Constraint> {
        let mut out = Vec::new();
        let mut current = self;
        while let CharacteristicKind::Trait { base, constraints } = &current.kind {
            out.extend(constraints.iter());
            current = base;
        }
        out
    }

    /// Returns the short name of the effective scalar data type.
    #[must_use]
    pub fn short_type_name(&self) -> Option<&str> {
        self.effective_data_type().and_then(DataType::short_name)
    }

    /// Returns true if the effective data type is complex.
    #[must_use]
    pub fn is_complex(&self) -> bool {
        self.effective_data_type().is_some_and(DataType::is_complex)
    }

    /// Returns true if the unwrapped base is a collection.
    #[must_use]
    pub fn is_collection(&self) -> bool {
        matches!(self.base().kind, CharacteristicKind::Collection { .. })
    }
}

/// One permitted value of an enumeration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    /// A structured entity instance.
    Instance(EntityInstance),
    /// A plain literal.
    Literal(serde_json::Value),
}

/// An instance of an entity used as an enumeration value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityInstance {
    /// Instance name.
    pub name: String,
    /// Property values by property name.
    #[serde(default)]
    pub values: BTreeMap<String, serde_json::Value>,
}

/// Inclusion semantics of a range bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoundDefinition {
    /// Unbounded.
    Open,
    /// Lower bound, inclusive.
    AtLeast,
    /// Lower bound, exclusive.
    GreaterThan,
    /// Upper bound, inclusive.
    AtMost,
    /// Upper bound, exclusive.
    LessThan,
}

impl BoundDefinition {
    /// Returns the SAMM name of the bound definition.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BoundDefinition::Open => "OPEN",
            BoundDefinition::AtLeast => "AT_LEAST",
            BoundDefinition::GreaterThan => "GREATER_THAN",
            BoundDefinition::AtMost => "AT_MOST",
            BoundDefinition::LessThan => "LESS_THAN",
        }
    }

    fn lower_default() -> Self {
        BoundDefinition::AtLeast
    }

    fn upper_default() -> Self {
        BoundDefinition::AtMost
    }
}

/// Restriction payload of a constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ConstraintKind {
    /// Length of a text or collection.
    Length {
        /// Minimum length.
        #[serde(default)]
        min: Option<u64>,
        /// Maximum length.
        #[serde(default)]
        max: Option<u64>,
    },
    /// Numeric range.
    Range {
        /// Lower bound value.
        #[serde(default)]
        min: Option<f64>,
        /// Upper bound value.
        #[serde(default)]
        max: Option<f64>,
        /// Lower bound semantics.
        #[serde(default = "BoundDefinition::lower_default")]
        lower_bound: BoundDefinition,
        /// Upper bound semantics.
        #[serde(default = "BoundDefinition::upper_default")]
        upper_bound: BoundDefinition,
    },
    /// Fixed-point precision.
    FixedPoint {
        /// Number of integer digits.
        integer: u32,
        /// Number of fractional digits.
        scale: u32,
    },
    /// Text encoding, as an encoding IRI.
    Encoding {
        /// Encoding IRI (e.g., `samm:UTF-8` with a `#` fragment).
        value: String,
    },
    /// Regular expression the value must match.
    RegularExpression {
        /// Pattern.
        value: String,
    },
    /// Language of a text value.
    Language {
        /// ISO 639 language code.
        #[serde(default)]
        language_code: String,
    },
    /// Locale of a text value.
    Locale {
        /// BCP 47 locale code.
        #[serde(default)]
        locale_code: String,
    },
    /// Any other constraint type.
    #[serde(other)]
    Unrecognized,
}

/// A named restriction attached to a Trait.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraint {
    /// Semantic name of the constraint (used for message keying).
    pub name: String,
    /// Variant and its payload.
    #[serde(flatten)]
    pub kind: ConstraintKind,
}

impl Constraint {
    /// Creates a constraint.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ConstraintKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Creates a length constraint.
    #[must_use]
    pub fn length(name: impl Into<String>, min: Option<u64>, max: Option<u64>) -> Self {
        Self::new(name, ConstraintKind::Length { min, max })
    }

    /// Creates an inclusive range constraint.
    #[must_use]
    pub fn range(name: impl Into<String>, min: Option<f64>, max: Option<f64>) -> Self {
        Self::new(
            name,
            ConstraintKind::Range {
                min,
                max,
                lower_bound: BoundDefinition::AtLeast,
                upper_bound: BoundDefinition::AtMost,
            },
        )
    }

    /// Creates a fixed-point constraint.
    #[must_use]
    pub fn fixed_point(name: impl Into<String>, integer: u32, scale: u32) -> Self {
        Self::new(name, ConstraintKind::FixedPoint { integer, scale })
    }

    /// Creates an encoding constraint from an encoding IRI.
    #[must_use]
    pub fn encoding(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(
            name,
            ConstraintKind::Encoding {
                value: value.into(),
            },
        )
    }

    /// Creates a regular expression constraint.
    #[must_use]
    pub fn regular_expression(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::new(
            name,
            ConstraintKind::RegularExpression {
                value: pattern.into(),
            },
        )
    }
}

/// Extracts the local name from an IRI or prefixed name: the part after `#`,
/// else after the last `/`, else after the last `:`.
#[must_use]
pub fn local_name(iri: &str) -> &str {
    if let Some((_, fragment)) = iri.rsplit_once('#') {
        return fragment;
    }
    let after_slash = iri.rsplit('/').next().unwrap_or(iri);
    after_slash.rsplit(':').next().unwrap_or(after_slash)
}

/// Standard IRI constants.
pub mod iris {
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// SAMM meta model namespace.
    pub const SAMM: &str = "urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#";

    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:boolean`.
    pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    /// `xsd:integer`.
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// `xsd:int`.
    pub const XSD_INT: &str = "http://www.w3.org/2001/XMLSchema#int";
    /// `xsd:decimal`.
    pub const XSD_DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    /// `xsd:double`.
    pub const XSD_DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    /// `xsd:float`.
    pub const XSD_FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
    /// `xsd:date`.
    pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
    /// `xsd:dateTime`.
    pub const XSD_DATETIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
    /// `xsd:time`.
    pub const XSD_TIME: &str = "http://www.w3.org/2001/XMLSchema#time";
    /// `xsd:anyURI`.
    pub const XSD_ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
    /// `rdf:langString`.
    pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
    /// `samm:curie`.
    pub const SAMM_CURIE: &str = "urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#curie";
    /// `samm:UTF-8`.
    pub const SAMM_UTF_8: &str = "urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#UTF-8";
}

#[cfg(test)]
mod tests {
    use super::iris::*;
    use super::*;

    #[test]
    fn local_name_extraction() {
        assert_eq!(local_name(XSD_INTEGER), "integer");
        assert_eq!(local_name("xsd:integer"), "integer");
        assert_eq!(local_name("integer"), "integer");
        assert_eq!(local_name(SAMM_CURIE), "curie");
        assert_eq!(local_name("https://example.org/types/Speed"), "Speed");
    }

    #[test]
    fn nested_traits_unwrap_to_base() {
        let scalar = Characteristic::scalar("Age", XSD_INTEGER);
        let inner = Characteristic::constrained(
            "Inner",
            scalar.clone(),
            vec![Constraint::range("AgeRange", Some(0.0), None)],
        );
        let outer = Characteristic::constrained(
            "Outer",
            inner,
            vec![Constraint::regular_expression("Digits", "[0-9]+")],
        );

        assert_eq!(outer.base(), &scalar);
        assert_eq!(outer.short_type_name(), Some("integer"));
        let names: Vec<&str> = outer.constraints().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Digits", "AgeRange"]);
    }

    #[test]
    fn trait_data_type_wins_over_base() {
        let traited = Characteristic::constrained(
            "Wrapped",
            Characteristic::scalar("Text", XSD_STRING),
            Vec::new(),
        )
        .with_data_type(DataType::Entity(Entity::new("Point", Vec::new())));
        assert!(traited.is_complex());
        assert_eq!(traited.short_type_name(), None);
    }

    #[test]
    fn list_inherits_element_data_type() {
        let list = Characteristic::list("Tags", Characteristic::scalar("Tag", XSD_STRING));
        assert!(list.is_collection());
        assert_eq!(list.short_type_name(), Some("string"));
    }

    #[test]
    fn entities_are_found_depth_first() {
        let inner = Entity::new(
            "Coordinate",
            vec![Property::new("x", Characteristic::scalar("X", XSD_DOUBLE))],
        );
        let outer = Entity::new(
            "Position",
            vec![Property::new("coordinate", Characteristic::entity("C", inner))],
        );
        let aspect = Aspect::new(
            "Movement",
            vec![Property::new("position", Characteristic::entity("P", outer))],
        );

        let names: Vec<&str> = aspect.entities().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Position", "Coordinate"]);
        assert!(aspect.find_entity("Coordinate").is_some());
        assert!(aspect.find_entity("Missing").is_none());
    }
}
