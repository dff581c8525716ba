//! Scalar fields: boolean, text, numeric, date and date-time, plus the
//! fallback used for every unrecognized type.
//!
//! Each predicate inspects only the short name of the effective data type.
//! The builders share one body; a collection with an element characteristic
//! resolves to its element's field.

use aspect_model::{Characteristic, CharacteristicKind};

use super::FieldRequest;
use crate::descriptor::{FieldDescriptor, FieldKind};
use crate::mapping;

fn short_name_is(characteristic: &Characteristic, family: fn(&str) -> bool) -> bool {
    characteristic.short_type_name().is_some_and(family)
}

fn unit_of(characteristic: &Characteristic) -> Option<String> {
    match &characteristic.base().kind {
        CharacteristicKind::Scalar { unit } => unit.clone(),
        _ => None,
    }
}

fn build_scalar(request: &FieldRequest<'_>, kind: FieldKind) -> FieldDescriptor {
    if let Some(field) = request.element_field() {
        return field;
    }
    FieldDescriptor {
        unit_name: unit_of(request.characteristic()),
        ..request.descriptor(kind)
    }
}

/// Accepts `boolean`.
pub fn applies_boolean(characteristic: &Characteristic) -> bool {
    short_name_is(characteristic, mapping::is_boolean)
}

/// Builds a boolean field.
pub fn build_boolean(request: &FieldRequest<'_>) -> FieldDescriptor {
    build_scalar(request, FieldKind::Boolean)
}

/// Accepts `langString`.
pub fn applies_long_text(characteristic: &Characteristic) -> bool {
    short_name_is(characteristic, mapping::is_long_text)
}

/// Builds a multi-locale text field.
pub fn build_long_text(request: &FieldRequest<'_>) -> FieldDescriptor {
    build_scalar(request, FieldKind::LongText)
}

/// Accepts the numeric family.
pub fn applies_numeric(characteristic: &Characteristic) -> bool {
    short_name_is(characteristic, mapping::is_numeric)
}

/// Builds a numeric field.
pub fn build_numeric(request: &FieldRequest<'_>) -> FieldDescriptor {
    build_scalar(request, FieldKind::Numeric)
}

/// Accepts the date family.
pub fn applies_date(characteristic: &Characteristic) -> bool {
    short_name_is(characteristic, mapping::is_date)
}

/// Builds a date field.
pub fn build_date(request: &FieldRequest<'_>) -> FieldDescriptor {
    build_scalar(request, FieldKind::Date)
}

/// Accepts the date-time family.
pub fn applies_date_time(characteristic: &Characteristic) -> bool {
    short_name_is(characteristic, mapping::is_date_time)
}

/// Builds a date-time field.
pub fn build_date_time(request: &FieldRequest<'_>) -> FieldDescriptor {
    build_scalar(request, FieldKind::DateTime)
}

/// Accepts the short text family.
pub fn applies_short_text(characteristic: &Characteristic) -> bool {
    short_name_is(characteristic, mapping::is_short_text)
}

/// Builds a short text field.
pub fn build_short_text(request: &FieldRequest<'_>) -> FieldDescriptor {
    build_scalar(request, FieldKind::ShortText)
}

/// Accepts everything.
pub fn applies_default(_: &Characteristic) -> bool {
    true
}

/// Builds a fallback field.
pub fn build_default(request: &FieldRequest<'_>) -> FieldDescriptor {
    build_scalar(request, FieldKind::Default)
}
