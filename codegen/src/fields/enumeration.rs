//! Enumeration fields.

use aspect_model::{Characteristic, CharacteristicKind};

use super::FieldRequest;
use crate::descriptor::{FieldDescriptor, FieldKind};

/// Accepts enumerations.
pub fn applies(characteristic: &Characteristic) -> bool {
    matches!(characteristic.base().kind, CharacteristicKind::Enumeration { .. })
}

/// Carries the permitted values, in declaration order.
pub fn build(request: &FieldRequest<'_>) -> FieldDescriptor {
    let enum_values = match &request.characteristic().base().kind {
        CharacteristicKind::Enumeration { values } => values.clone(),
        _ => Vec::new(),
    };
    FieldDescriptor {
        enum_values,
        ..request.descriptor(FieldKind::Enumeration)
    }
}
