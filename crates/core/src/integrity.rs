//! Parsing of store integrity-violation messages.
//!
//! PostgreSQL reports a unique violation as a primary message plus a
//! `DETAIL` line, e.g.
//!
//! ```text
//! duplicate key value violates unique constraint "item_title_key"
//! DETAIL:  Key (title)=(t1) already exists.
//! ```
//!
//! The column and offending value are recovered from that text so the
//! client can be told which field must change.

use serde::Serialize;

/// Detail returned when a violation cannot be attributed to a field.
pub const UNKNOWN_INTEGRITY_ERROR: &str = "Unknown IntegrityError";

/// Column and value extracted from a unique-violation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateKey {
    pub field: String,
    pub value: String,
}

impl DuplicateKey {
    /// User-facing explanation of the collision.
    pub fn detail(&self) -> String {
        format!(
            "The {field} '{value}' already exists. Please create a unique {field}",
            field = self.field,
            value = self.value,
        )
    }
}

/// Detail text for a constraint violation, falling back to
/// [`UNKNOWN_INTEGRITY_ERROR`] when the key could not be parsed.
pub fn constraint_detail(key: Option<&DuplicateKey>) -> String {
    key.map_or_else(|| UNKNOWN_INTEGRITY_ERROR.to_string(), DuplicateKey::detail)
}

/// Extract the column and value from a unique-violation message.
///
/// Returns `None` unless the message mentions `duplicate key` and both the
/// `Key (<field>)=(<value>) ` delimiters are present with non-empty contents.
///
/// ```
/// use exampulumi_core::integrity::parse_duplicate_key;
///
/// let msg = "duplicate key value violates unique constraint \"item_title_key\"\n\
///            DETAIL:  Key (title)=(t1) already exists.";
/// let key = parse_duplicate_key(msg).unwrap();
/// assert_eq!(key.field, "title");
/// assert_eq!(key.value, "t1");
/// ```
pub fn parse_duplicate_key(message: &str) -> Option<DuplicateKey> {
    if !message.contains("duplicate key") {
        return None;
    }

    let (_, after_key) = message.split_once("Key (")?;
    let (field, _) = after_key.split_once(")=")?;

    let (_, after_value) = message.split_once(")=(")?;
    let (value, _) = after_value.split_once(") ")?;

    if field.is_empty() || value.is_empty() {
        return None;
    }

    Some(DuplicateKey {
        field: field.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLE_VIOLATION: &str = "duplicate key value violates unique constraint \
        \"item_title_key\"\nDETAIL:  Key (title)=(t1) already exists.";

    #[test]
    fn parses_field_and_value() {
        let key = parse_duplicate_key(TITLE_VIOLATION).unwrap();
        assert_eq!(
            key,
            DuplicateKey {
                field: "title".into(),
                value: "t1".into(),
            }
        );
    }

    #[test]
    fn keeps_spaces_inside_value() {
        let msg = "duplicate key value violates unique constraint \"item_title_key\"\n\
                   DETAIL:  Key (title)=(my first item) already exists.";
        let key = parse_duplicate_key(msg).unwrap();
        assert_eq!(key.value, "my first item");
    }

    #[test]
    fn ignores_non_duplicate_messages() {
        let msg = "null value in column \"title\" of relation \"item\" violates not-null constraint";
        assert!(parse_duplicate_key(msg).is_none());
    }

    #[test]
    fn missing_detail_line_is_unparsable() {
        let msg = "duplicate key value violates unique constraint \"item_title_key\"";
        assert!(parse_duplicate_key(msg).is_none());
    }

    #[test]
    fn empty_value_is_unparsable() {
        let msg = "duplicate key value violates unique constraint \"item_title_key\"\n\
                   DETAIL:  Key (title)=() already exists.";
        assert!(parse_duplicate_key(msg).is_none());
    }

    #[test]
    fn detail_message() {
        let key = parse_duplicate_key(TITLE_VIOLATION).unwrap();
        assert_eq!(
            key.detail(),
            "The title 't1' already exists. Please create a unique title"
        );
    }

    #[test]
    fn unknown_detail_without_key() {
        assert_eq!(constraint_detail(None), "Unknown IntegrityError");
    }
}
