//! JSON loading and structural checks.
//!
//! The loader accepts the JSON rendering of an Aspect Model (as produced by
//! the model's own `Serialize` impls) and checks the invariants the resolvers
//! rely on: every name is non-empty and property names are unique within
//! their owning Aspect or Entity.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{ModelError, Result};
use crate::model::{Aspect, Characteristic, CharacteristicKind, DataType, Property};

impl Aspect {
    /// Parses and checks an Aspect Model from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Json`] if the document does not parse, or a
    /// structural error if a name is empty or repeated.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let aspect: Aspect = serde_json::from_str(json)?;
        aspect.check()?;
        Ok(aspect)
    }

    /// Reads, parses and checks an Aspect Model JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Aspect::from_json_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Checks the structural invariants of the whole tree.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, depth-first in declaration order.
    pub fn check(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(ModelError::EmptyName {
                owner: "aspect".to_string(),
            });
        }
        check_properties(&self.name, &self.properties)
    }
}

fn check_properties(owner: &str, properties: &[Property]) -> Result<()> {
    let mut seen = HashSet::new();
    for property in properties {
        if property.name.is_empty() {
            return Err(ModelError::EmptyName {
                owner: owner.to_string(),
            });
        }
        if !seen.insert(property.name.as_str()) {
            return Err(ModelError::DuplicateProperty {
                owner: owner.to_string(),
                name: property.name.clone(),
            });
        }
        check_characteristic(&property.name, &property.characteristic)?;
    }
    Ok(())
}

fn check_characteristic(owner: &str, characteristic: &Characteristic) -> Result<()> {
    if characteristic.name.is_empty() {
        return Err(ModelError::EmptyName {
            owner: owner.to_string(),
        });
    }
    if let Some(DataType::Entity(entity)) = &characteristic.data_type {
        check_properties(&entity.name, &entity.properties)?;
    }
    match &characteristic.kind {
        CharacteristicKind::Collection {
            element: Some(element),
            ..
        } => check_characteristic(&characteristic.name, element),
        CharacteristicKind::Either { left, right } => {
            check_characteristic(&characteristic.name, left)?;
            check_characteristic(&characteristic.name, right)
        }
        CharacteristicKind::Trait { base, .. } => check_characteristic(&characteristic.name, base),
        _ => Ok(()),
    }
}
