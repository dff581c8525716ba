//! Regular expression and encoding constraints.

use aspect_model::{Constraint, ConstraintKind};
use tracing::debug;

use crate::descriptor::{TextEncoding, ValidatorDescriptor, ValidatorExpression};
use crate::predicates::OwnerShape;

/// Accepts regular expression constraints.
pub fn applies_pattern(constraint: &Constraint) -> bool {
    matches!(constraint.kind, ConstraintKind::RegularExpression { .. })
}

/// Yields a pattern validator unless the pattern is empty.
pub fn build_pattern(constraint: &Constraint, shape: OwnerShape) -> Option<ValidatorDescriptor> {
    let ConstraintKind::RegularExpression { value } = &constraint.kind else {
        return None;
    };
    if value.is_empty() {
        debug!(constraint = %constraint.name, "empty regular expression dropped");
        return None;
    }
    Some(ValidatorDescriptor::new(
        &constraint.name,
        ValidatorExpression::Pattern {
            pattern: value.clone(),
        },
        shape.wraps(),
    ))
}

/// Accepts encoding constraints.
pub fn applies_encoding(constraint: &Constraint) -> bool {
    matches!(constraint.kind, ConstraintKind::Encoding { .. })
}

/// Yields an encoding validator when the IRI fragment names a recognized
/// encoding.
pub fn build_encoding(constraint: &Constraint, shape: OwnerShape) -> Option<ValidatorDescriptor> {
    let ConstraintKind::Encoding { value } = &constraint.kind else {
        return None;
    };
    let Some(encoding) = encoding_fragment(value).and_then(TextEncoding::from_name) else {
        debug!(constraint = %constraint.name, encoding = %value, "unrecognized encoding dropped");
        return None;
    };
    Some(ValidatorDescriptor::new(
        &constraint.name,
        ValidatorExpression::Encoding { encoding },
        shape.wraps(),
    ))
}

/// The part of an encoding IRI after `#`.
fn encoding_fragment(iri: &str) -> Option<&str> {
    iri.rsplit_once('#').map(|(_, fragment)| fragment)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use aspect_model::model::iris::SAMM;

    const SCALAR: OwnerShape = OwnerShape {
        list_like: false,
        complex_like: false,
    };
    const LIST: OwnerShape = OwnerShape {
        list_like: true,
        complex_like: false,
    };

    #[test]
    fn every_recognized_encoding_yields_one_validator() {
        for encoding in TextEncoding::ALL {
            let iri = format!("{SAMM}{}", encoding.as_str());
            let v = build_encoding(&Constraint::encoding("Enc", iri), SCALAR).unwrap();
            assert_eq!(v.expression, ValidatorExpression::Encoding { encoding });
            assert!(v.applies_directly_to_group);

            let iri = format!("{SAMM}{}", encoding.as_str());
            let wrapped = build_encoding(&Constraint::encoding("Enc", iri), LIST).unwrap();
            assert!(!wrapped.applies_directly_to_group);
        }
    }

    #[test]
    fn unknown_or_misspelled_encodings_are_dropped() {
        for name in ["UTF-32", "utf-8", "UTF8", "ISO8859-1", ""] {
            let iri = format!("{SAMM}{name}");
            assert!(build_encoding(&Constraint::encoding("Enc", iri), SCALAR).is_none());
        }
    }

    #[test]
    fn encoding_without_fragment_is_dropped() {
        assert!(build_encoding(&Constraint::encoding("Enc", "UTF-8"), SCALAR).is_none());
    }

    #[test]
    fn empty_pattern_is_skipped() {
        assert!(build_pattern(&Constraint::regular_expression("P", ""), SCALAR).is_none());
    }

    #[test]
    fn pattern_wraps_on_list_owner() {
        let v = build_pattern(&Constraint::regular_expression("P", "^[a-z]+$"), LIST).unwrap();
        assert!(!v.applies_directly_to_group);
        assert_eq!(
            v.atomic(),
            &ValidatorExpression::Pattern {
                pattern: "^[a-z]+$".to_string()
            }
        );
    }
}
