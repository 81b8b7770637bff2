//! Wire schema transform.
//!
//! Request and response bodies use lowerCamelCase keys; Rust fields and
//! database columns use snake_case. Every wire type lists its fields in an
//! explicit [`WireField`] table. Decoding accepts either spelling for each
//! listed field and strips surrounding whitespace from string values before
//! the typed deserialization runs. Encoding is plain serde with
//! `rename_all = "camelCase"`; [`fields_are_camel_case`] lets each type
//! assert at compile time that its table agrees with that rename.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::CoreError;

/// One row of a field-name mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireField {
    /// snake_case name used in Rust and in the store.
    pub internal: &'static str,
    /// lowerCamelCase name used on the wire.
    pub wire: &'static str,
}

impl WireField {
    pub const fn new(internal: &'static str, wire: &'static str) -> Self {
        Self { internal, wire }
    }
}

/// A type exchanged over HTTP with camelCase keys.
pub trait WireSchema {
    /// Every field of the type, in declaration order.
    const FIELDS: &'static [WireField];
}

/// Decode a JSON request body into `T`.
///
/// Fails with [`CoreError::Validation`] when the body is not an object, a
/// required field is missing, or a value has the wrong type.
pub fn decode<T>(body: Value) -> Result<T, CoreError>
where
    T: WireSchema + DeserializeOwned,
{
    let object = normalize(body, T::FIELDS)?;
    serde_json::from_value(Value::Object(object))
        .map_err(|e| CoreError::Validation(format!("Invalid request body: {e}")))
}

/// Rewrite a JSON object so every listed field uses its wire name and every
/// top-level string is trimmed.
///
/// When both the internal and the wire spelling are present the wire one
/// wins and the internal key is dropped. Keys not in the table pass through
/// untouched.
pub fn normalize(body: Value, fields: &[WireField]) -> Result<Map<String, Value>, CoreError> {
    let mut object = match body {
        Value::Object(object) => object,
        other => {
            return Err(CoreError::Validation(format!(
                "Invalid request body: expected a JSON object, found {}",
                json_kind(&other)
            )));
        }
    };

    for field in fields {
        if field.internal == field.wire {
            continue;
        }
        if let Some(value) = object.remove(field.internal) {
            object.entry(field.wire).or_insert(value);
        }
    }

    for value in object.values_mut() {
        if let Value::String(s) = value {
            let trimmed = s.trim();
            if trimmed.len() != s.len() {
                *s = trimmed.to_string();
            }
        }
    }

    Ok(object)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// `true` when `wire` is the lowerCamelCase spelling of snake_case `internal`.
pub const fn is_camel_case_of(internal: &str, wire: &str) -> bool {
    let a = internal.as_bytes();
    let b = wire.as_bytes();
    let mut i = 0;
    let mut j = 0;

    while i < a.len() {
        let expected = if a[i] == b'_' {
            i += 1;
            if i >= a.len() {
                return false;
            }
            a[i].to_ascii_uppercase()
        } else {
            a[i]
        };
        if j >= b.len() || b[j] != expected {
            return false;
        }
        i += 1;
        j += 1;
    }

    j == b.len()
}

/// `true` when every entry of the table follows the camelCase convention.
///
/// Intended for `const` assertions next to each table:
///
/// ```
/// use exampulumi_core::schema::{fields_are_camel_case, WireField};
///
/// const FIELDS: &[WireField] = &[WireField::new("is_active", "isActive")];
/// const _: () = assert!(fields_are_camel_case(FIELDS));
/// ```
pub const fn fields_are_camel_case(fields: &[WireField]) -> bool {
    let mut i = 0;
    while i < fields.len() {
        if !is_camel_case_of(fields[i].internal, fields[i].wire) {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        title: String,
        is_active: bool,
    }

    impl WireSchema for Sample {
        const FIELDS: &'static [WireField] = &[
            WireField::new("title", "title"),
            WireField::new("is_active", "isActive"),
        ];
    }

    #[test]
    fn accepts_camel_case_keys() {
        let s: Sample = decode(json!({"title": "a", "isActive": false})).unwrap();
        assert_eq!(s.title, "a");
        assert!(!s.is_active);
    }

    #[test]
    fn accepts_snake_case_keys() {
        let s: Sample = decode(json!({"title": "a", "is_active": true})).unwrap();
        assert!(s.is_active);
    }

    #[test]
    fn camel_case_wins_when_both_present() {
        let s: Sample =
            decode(json!({"title": "a", "is_active": true, "isActive": false})).unwrap();
        assert!(!s.is_active);
    }

    #[test]
    fn trims_string_values() {
        let s: Sample = decode(json!({"title": "  padded \n", "isActive": true})).unwrap();
        assert_eq!(s.title, "padded");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let s: Sample = decode(json!({"title": "a", "isActive": true, "extra": 1})).unwrap();
        assert_eq!(s.title, "a");
    }

    #[test]
    fn missing_field_is_validation_error() {
        let err = decode::<Sample>(json!({"isActive": true})).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("missing field `title`"));
    }

    #[test]
    fn non_object_is_validation_error() {
        let err = decode::<Sample>(json!(["title"])).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("found an array"));
    }

    #[test]
    fn camel_case_check() {
        assert!(is_camel_case_of("title", "title"));
        assert!(is_camel_case_of("is_active", "isActive"));
        assert!(is_camel_case_of("created_at_utc", "createdAtUtc"));
        assert!(!is_camel_case_of("is_active", "is_active"));
        assert!(!is_camel_case_of("is_active", "isactive"));
        assert!(!is_camel_case_of("is_active", "isActiveX"));
        assert!(!is_camel_case_of("trailing_", "trailing"));
        assert!(fields_are_camel_case(Sample::FIELDS));
    }
}
