//! Short type name → field family tables.
//!
//! Deterministic mappings from scalar data type short names (the local name
//! of an XSD, RDF or SAMM type IRI) to the field family the scalar field
//! strategies dispatch on.

/// `xsd:boolean`.
pub const BOOLEAN: &str = "boolean";

/// `rdf:langString`, the multi-locale text type.
pub const LANG_STRING: &str = "langString";

/// Integer, decimal and floating point types: signed and unsigned bounded
/// integers, the unbounded integer types and the two IEEE floats.
pub const NUMERIC_TYPES: [&str; 14] = [
    "byte",
    "short",
    "int",
    "long",
    "unsignedByte",
    "unsignedShort",
    "unsignedInt",
    "unsignedLong",
    "integer",
    "positiveInteger",
    "nonNegativeInteger",
    "decimal",
    "float",
    "double",
];

/// Calendar date types.
pub const DATE_TYPES: [&str; 5] = ["date", "gDay", "gMonth", "gMonthDay", "gYearMonth"];

/// Date-time, time and duration types.
pub const DATE_TIME_TYPES: [&str; 6] = [
    "dateTime",
    "dateTimeStamp",
    "duration",
    "dayTimeDuration",
    "yearMonthDuration",
    "time",
];

/// Single-line text types.
pub const SHORT_TEXT_TYPES: [&str; 5] = ["string", "anyURI", "hexBinary", "curie", "base64Binary"];

/// Returns true for `boolean`.
pub fn is_boolean(short_name: &str) -> bool {
    short_name == BOOLEAN
}

/// Returns true for `langString`.
pub fn is_long_text(short_name: &str) -> bool {
    short_name == LANG_STRING
}

/// Returns true for the numeric family.
pub fn is_numeric(short_name: &str) -> bool {
    NUMERIC_TYPES.contains(&short_name)
}

/// Returns true for the date family.
pub fn is_date(short_name: &str) -> bool {
    DATE_TYPES.contains(&short_name)
}

/// Returns true for the date-time family.
pub fn is_date_time(short_name: &str) -> bool {
    DATE_TIME_TYPES.contains(&short_name)
}

/// Returns true for the short text family.
pub fn is_short_text(short_name: &str) -> bool {
    SHORT_TEXT_TYPES.contains(&short_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_are_disjoint() {
        let families: [&[&str]; 6] = [
            &[BOOLEAN],
            &[LANG_STRING],
            &NUMERIC_TYPES,
            &DATE_TYPES,
            &DATE_TIME_TYPES,
            &SHORT_TEXT_TYPES,
        ];
        let mut seen = std::collections::HashSet::new();
        for family in families {
            for name in family {
                assert!(seen.insert(*name), "{name} appears in two families");
            }
        }
        assert_eq!(seen.len(), 32);
    }

    #[test]
    fn lookups_are_case_sensitive() {
        assert!(is_numeric("unsignedLong"));
        assert!(!is_numeric("UnsignedLong"));
        assert!(is_date("gYearMonth"));
        assert!(is_date_time("time"));
        assert!(!is_short_text("String"));
        assert!(!is_numeric("negativeInteger"));
    }
}
