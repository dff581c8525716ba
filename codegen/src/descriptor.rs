//! Output types: field descriptor trees and validator descriptors.
//!
//! Descriptors are plain data handed to the template layer. A
//! [`FieldDescriptor`] is built once per resolution call and never changed
//! afterwards; its [`ValidatorDescriptor`]s carry a typed
//! [`ValidatorExpression`] whose `Display` form is the validator reference
//! templates emit.

use std::fmt;

use aspect_model::{BoundDefinition, EnumValue};
use serde::Serialize;

/// UI field kind, one per field strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    /// A group of child fields, one per entity property.
    Complex,
    /// A tagged union: exactly two child fields.
    Either,
    /// A selection among enumerated values.
    Enumeration,
    /// A checkbox or toggle.
    Boolean,
    /// A multi-locale text area.
    LongText,
    /// A numeric input.
    Numeric,
    /// A date picker.
    Date,
    /// A date-time, time or duration picker.
    DateTime,
    /// A single-line text input.
    ShortText,
    /// Fallback text input for unrecognized types.
    Default,
}

impl FieldKind {
    /// Returns the kind name used in templates.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Complex => "complex",
            FieldKind::Either => "either",
            FieldKind::Enumeration => "enumeration",
            FieldKind::Boolean => "boolean",
            FieldKind::LongText => "longText",
            FieldKind::Numeric => "numeric",
            FieldKind::Date => "date",
            FieldKind::DateTime => "dateTime",
            FieldKind::ShortText => "shortText",
            FieldKind::Default => "default",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One resolved UI field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Kind of the strategy that produced this field.
    pub kind: FieldKind,
    /// Field name: the owning property's name, or an override.
    pub name: String,
    /// Validators in application order; "required" first when present.
    pub validators: Vec<ValidatorDescriptor>,
    /// Example value of the owning property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_value: Option<String>,
    /// Unit of quantifiable values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
    /// Permitted values of enumeration fields.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<EnumValue>,
    /// True when the field holds a collection.
    pub is_list_field: bool,
    /// Child fields of complex and either fields.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FieldDescriptor>,
}

impl FieldDescriptor {
    /// Walks the tree depth-first, this field first.
    #[must_use]
    pub fn iter(&self) -> Fields<'_> {
        Fields { stack: vec![self] }
    }

    /// Looks up a direct child by name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&FieldDescriptor> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Returns true if a direct "required" validator is attached.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.validators
            .iter()
            .any(|v| v.expression == ValidatorExpression::Required)
    }
}

/// Depth-first iterator over a descriptor tree.
pub struct Fields<'a> {
    stack: Vec<&'a FieldDescriptor>,
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a FieldDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        let field = self.stack.pop()?;
        self.stack.extend(field.children.iter().rev());
        Some(field)
    }
}

/// One validation rule and how it attaches to its field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorDescriptor {
    /// Semantic name of the originating constraint, or `"required"`.
    pub constraint_name: String,
    /// The validator reference.
    pub expression: ValidatorExpression,
    /// False when the expression is wrapped in [`ValidatorExpression::ApplyToChildren`].
    pub applies_directly_to_group: bool,
}

/// Name of the base "required" validator.
pub const REQUIRED: &str = "required";

impl ValidatorDescriptor {
    /// The "required" validator added for mandatory properties.
    #[must_use]
    pub fn required() -> Self {
        Self {
            constraint_name: REQUIRED.to_string(),
            expression: ValidatorExpression::Required,
            applies_directly_to_group: true,
        }
    }

    /// Builds a descriptor, wrapping `expression` in the children
    /// combinator when `wrap` is set.
    #[must_use]
    pub fn new(constraint_name: impl Into<String>, expression: ValidatorExpression, wrap: bool) -> Self {
        let expression = if wrap {
            ValidatorExpression::ApplyToChildren {
                inner: Box::new(expression),
            }
        } else {
            expression
        };
        Self {
            constraint_name: constraint_name.into(),
            expression,
            applies_directly_to_group: !wrap,
        }
    }

    /// Returns the expression under any children combinator.
    #[must_use]
    pub fn atomic(&self) -> &ValidatorExpression {
        match &self.expression {
            ValidatorExpression::ApplyToChildren { inner } => inner,
            other => other,
        }
    }
}

/// Closed set of text encodings with a UI validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextEncoding {
    /// `US-ASCII`.
    #[serde(rename = "US-ASCII")]
    UsAscii,
    /// `ISO-8859-1`.
    #[serde(rename = "ISO-8859-1")]
    Iso8859_1,
    /// `UTF-8`.
    #[serde(rename = "UTF-8")]
    Utf8,
    /// `UTF-16`.
    #[serde(rename = "UTF-16")]
    Utf16,
    /// `UTF-16BE`.
    #[serde(rename = "UTF-16BE")]
    Utf16Be,
    /// `UTF-16LE`.
    #[serde(rename = "UTF-16LE")]
    Utf16Le,
}

impl TextEncoding {
    /// All recognized encodings.
    pub const ALL: [TextEncoding; 6] = [
        TextEncoding::UsAscii,
        TextEncoding::Iso8859_1,
        TextEncoding::Utf8,
        TextEncoding::Utf16,
        TextEncoding::Utf16Be,
        TextEncoding::Utf16Le,
    ];

    /// Exact, case- and dash-sensitive match of an encoding name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == name)
    }

    /// Returns the encoding name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TextEncoding::UsAscii => "US-ASCII",
            TextEncoding::Iso8859_1 => "ISO-8859-1",
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Utf16 => "UTF-16",
            TextEncoding::Utf16Be => "UTF-16BE",
            TextEncoding::Utf16Le => "UTF-16LE",
        }
    }
}

/// A composable validator reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "validator", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ValidatorExpression {
    /// The value must be present.
    Required,
    /// Text (or element) length bounds.
    Length {
        /// Minimum length.
        min: Option<u64>,
        /// Maximum length.
        max: Option<u64>,
    },
    /// Number-of-elements bounds of a list field.
    ListLength {
        /// Minimum element count.
        min: Option<u64>,
        /// Maximum element count.
        max: Option<u64>,
    },
    /// Numeric range.
    Range {
        /// Lower bound.
        min: Option<f64>,
        /// Lower bound semantics.
        lower_bound: BoundDefinition,
        /// Upper bound.
        max: Option<f64>,
        /// Upper bound semantics.
        upper_bound: BoundDefinition,
    },
    /// Fixed-point precision.
    FixedPoint {
        /// Integer digits.
        integer_digits: u32,
        /// Fractional digits.
        scale: u32,
    },
    /// Text encoding.
    Encoding {
        /// Required encoding.
        encoding: TextEncoding,
    },
    /// Regular expression match.
    Pattern {
        /// Pattern.
        pattern: String,
    },
    /// Applies `inner` to every element of a list or every child of a group.
    ApplyToChildren {
        /// The per-element rule.
        inner: Box<ValidatorExpression>,
    },
}

struct OptArg<T>(Option<T>);

impl<T: fmt::Display> fmt::Display for OptArg<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(v) => fmt::Display::fmt(v, f),
            None => f.write_str("undefined"),
        }
    }
}

/// Escapes `s` for a single-quoted template string literal.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
}

impl fmt::Display for ValidatorExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("Validators.required"),
            Self::Length { min, max } => write!(
                f,
                "FormValidators.lengthValidator({}, {})",
                OptArg(*min),
                OptArg(*max)
            ),
            Self::ListLength { min, max } => write!(
                f,
                "FormValidators.listLengthValidator({}, {})",
                OptArg(*min),
                OptArg(*max)
            ),
            Self::Range {
                min,
                lower_bound,
                max,
                upper_bound,
            } => write!(
                f,
                "FormValidators.rangeValidator({}, '{}', {}, '{}')",
                OptArg(*min),
                lower_bound.as_str(),
                OptArg(*max),
                upper_bound.as_str()
            ),
            Self::FixedPoint {
                integer_digits,
                scale,
            } => write!(f, "FormValidators.fixedPointValidator({integer_digits}, {scale})"),
            Self::Encoding { encoding } => {
                write!(f, "FormValidators.encodingValidator('{}')", encoding.as_str())
            }
            Self::Pattern { pattern } => write!(
                f,
                "FormValidators.regularExpressionValidator('{}')",
                quote(pattern)
            ),
            Self::ApplyToChildren { inner } => {
                write!(f, "FormValidators.applyToChildren({inner})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str) -> FieldDescriptor {
        FieldDescriptor {
            kind: FieldKind::ShortText,
            name: name.to_string(),
            validators: Vec::new(),
            example_value: None,
            unit_name: None,
            enum_values: Vec::new(),
            is_list_field: false,
            children: Vec::new(),
        }
    }

    #[test]
    fn iter_is_preorder() {
        let tree = FieldDescriptor {
            kind: FieldKind::Complex,
            children: vec![
                FieldDescriptor {
                    kind: FieldKind::Complex,
                    children: vec![leaf("b1"), leaf("b2")],
                    ..leaf("b")
                },
                leaf("c"),
            ],
            ..leaf("a")
        };
        let names: Vec<&str> = tree.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "b1", "b2", "c"]);
    }

    #[test]
    fn wrapped_reference_rendering() {
        let range = ValidatorDescriptor::new(
            "AgeRange",
            ValidatorExpression::Range {
                min: Some(0.0),
                lower_bound: BoundDefinition::AtLeast,
                max: Some(150.0),
                upper_bound: BoundDefinition::AtMost,
            },
            true,
        );
        assert!(!range.applies_directly_to_group);
        assert_eq!(
            range.expression.to_string(),
            "FormValidators.applyToChildren(FormValidators.rangeValidator(0, 'AT_LEAST', 150, 'AT_MOST'))"
        );
        assert!(matches!(range.atomic(), ValidatorExpression::Range { .. }));
    }

    #[test]
    fn absent_bounds_render_undefined() {
        let length = ValidatorExpression::ListLength {
            min: None,
            max: Some(5),
        };
        assert_eq!(
            length.to_string(),
            "FormValidators.listLengthValidator(undefined, 5)"
        );
    }

    #[test]
    fn pattern_quotes_are_escaped() {
        let pattern = ValidatorExpression::Pattern {
            pattern: r"it's\d".to_string(),
        };
        assert_eq!(
            pattern.to_string(),
            r"FormValidators.regularExpressionValidator('it\'s\\d')"
        );
    }

    #[test]
    fn pattern_line_breaks_are_escaped() {
        let pattern = ValidatorExpression::Pattern {
            pattern: "^a\r\nb$".to_string(),
        };
        let rendered = pattern.to_string();
        assert_eq!(
            rendered,
            r"FormValidators.regularExpressionValidator('^a\r\nb$')"
        );
        assert!(!rendered.contains('\n'));
        assert!(!rendered.contains('\r'));
    }

    #[test]
    fn encoding_names_are_exact() {
        assert_eq!(TextEncoding::from_name("UTF-8"), Some(TextEncoding::Utf8));
        assert_eq!(TextEncoding::from_name("utf-8"), None);
        assert_eq!(TextEncoding::from_name("UTF8"), None);
        assert_eq!(TextEncoding::from_name("UTF-32"), None);
    }
}
