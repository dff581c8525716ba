//! Complex and either fields: the two strategies that recurse.

use aspect_model::{Characteristic, CharacteristicKind, DataType};

use super::{dispatch, resolve_field, FieldRequest};
use crate::descriptor::{FieldDescriptor, FieldKind};

/// Accepts characteristics whose effective data type is an entity.
pub fn applies_complex(characteristic: &Characteristic) -> bool {
    characteristic.is_complex()
}

/// One child per entity property, each resolved from its own property. An
/// entity without properties yields no children.
pub fn build_complex(request: &FieldRequest<'_>) -> FieldDescriptor {
    if let Some(field) = request.element_field() {
        return field;
    }
    let children = request
        .characteristic()
        .effective_data_type()
        .and_then(DataType::entity)
        .map(|entity| {
            entity
                .properties
                .iter()
                .map(|property| resolve_field(property, &property.characteristic, None))
                .collect()
        })
        .unwrap_or_default();
    FieldDescriptor {
        children,
        ..request.descriptor(FieldKind::Complex)
    }
}

/// Accepts tagged unions.
pub fn applies_either(characteristic: &Characteristic) -> bool {
    matches!(characteristic.base().kind, CharacteristicKind::Either { .. })
}

/// Exactly two children, left then right, each resolved under the same
/// parent property and named after its own branch characteristic.
pub fn build_either(request: &FieldRequest<'_>) -> FieldDescriptor {
    let children = match &request.characteristic().base().kind {
        CharacteristicKind::Either { left, right } => [left, right]
            .into_iter()
            .map(|branch| dispatch(&FieldRequest::new(request.parent(), branch, &branch.name)))
            .collect(),
        _ => Vec::new(),
    };
    FieldDescriptor {
        children,
        ..request.descriptor(FieldKind::Either)
    }
}
