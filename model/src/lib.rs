//! Aspect Model types consumed by the field and validator resolvers.
//!
//! The `aspect-model` crate provides a read-only, owned representation of a
//! SAMM Aspect Model: properties, characteristics (scalar, enumeration,
//! collection, either, structured value, trait), entities and constraints.
//! Models are built programmatically or loaded from their JSON rendering.
//!
//! # Entry Point
//!
//! ```
//! use aspect_model::{Aspect, Characteristic, Property};
//! use aspect_model::model::iris::XSD_INTEGER;
//!
//! let aspect = Aspect::new(
//!     "Person",
//!     vec![Property::new("age", Characteristic::scalar("Age", XSD_INTEGER))],
//! );
//! assert_eq!(aspect.properties[0].characteristic.short_type_name(), Some("integer"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod loader;
pub mod model;

pub use error::{ModelError, Result};
pub use model::{
    local_name, Aspect, BoundDefinition, Characteristic, CharacteristicKind, CollectionKind,
    Constraint, ConstraintKind, DataType, EntityInstance, EnumValue, Entity, Property,
};
