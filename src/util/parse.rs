use uuid::Uuid;

use crate::{error::validation::ValidationError, model::legacy_id::LegacyId};

/// Classification of a raw identifier received from a client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawIdentifier {
    /// A canonical identifier supplied directly; no scan needed.
    Canonical(Uuid),
    /// An integer in the legacy range; must be resolved by scanning.
    Legacy(LegacyId),
    /// Neither form. Can never match a record.
    Unrecognized,
}

/// Classifies a raw identifier string.
///
/// Surrounding whitespace is ignored. The canonical form is tried first so that a
/// forward-compatible client never pays for a scan.
///
/// # Arguments
/// - `raw` - Identifier as received from the request path or a filter
///
/// # Returns
/// - `RawIdentifier::Canonical` - `raw` parses as a UUID in any accepted textual form
/// - `RawIdentifier::Legacy` - `raw` is an integer in `0..2147483647`
/// - `RawIdentifier::Unrecognized` - anything else
pub fn parse_identifier(raw: &str) -> RawIdentifier {
    let trimmed = raw.trim();

    if let Ok(id) = Uuid::parse_str(trimmed) {
        return RawIdentifier::Canonical(id);
    }

    match trimmed.parse::<LegacyId>() {
        Ok(id) => RawIdentifier::Legacy(id),
        Err(_) => RawIdentifier::Unrecognized,
    }
}

/// Parses an integer out of an advanced-search field value.
///
/// Legacy clients send numeric filters either as JSON numbers or as numeric strings.
///
/// # Returns
/// - `Ok(i64)` - The parsed value
/// - `Err(ValidationError::InvalidFieldValue)` - The value is not an integer
pub fn parse_integer_field(field: &str, value: &serde_json::Value) -> Result<i64, ValidationError> {
    let parsed = match value {
        serde_json::Value::Number(number) => number.as_i64(),
        serde_json::Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| ValidationError::InvalidFieldValue {
        field: field.to_string(),
        value: match value {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        },
    })
}
