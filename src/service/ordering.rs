//! Translation of legacy ordering names into internal sort keys.

use crate::{
    error::validation::ValidationError,
    model::ordering::{OrderKey, OrderingMap, OrderingPolicy, SortDir},
};

/// Translates requested ordering entries into sort keys.
///
/// Each entry may contain several comma-separated names. A leading `-` sorts
/// descending and a leading `+` ascending. Names are matched case-insensitively and
/// blank names are skipped.
///
/// # Arguments
/// - `requested` - Ordering entries in request order
/// - `map` - External to internal column map of the resource
/// - `policy` - Treatment of names missing from `map`
/// - `default` - Order used when no valid name remains
///
/// # Returns
/// - `Ok(Vec<OrderKey>)` - Sort keys in request order, or `default` when none are valid
/// - `Err(ValidationError::UnknownOrderingFields)` - Under `OrderingPolicy::Reject`, naming
///   every unknown field
pub fn translate<C: Copy>(
    requested: &[String],
    map: &OrderingMap<C>,
    policy: OrderingPolicy,
    default: &[OrderKey<C>],
) -> Result<Vec<OrderKey<C>>, ValidationError> {
    let mut keys = Vec::new();
    let mut unknown = Vec::new();

    for token in requested
        .iter()
        .flat_map(|entry| entry.split(','))
        .map(str::trim)
        .filter(|token| !token.is_empty())
    {
        let (dir, name) = split_direction(token);

        match map.get(name) {
            Some(column) => keys.push(OrderKey { column: *column, dir }),
            None => unknown.push(name.to_string()),
        }
    }

    if !unknown.is_empty() {
        match policy {
            OrderingPolicy::Reject => return Err(ValidationError::UnknownOrderingFields(unknown)),
            OrderingPolicy::DropSilently => {
                tracing::warn!(fields = ?unknown, "dropping unknown ordering fields");
            }
        }
    }

    if keys.is_empty() {
        return Ok(default.to_vec());
    }

    Ok(keys)
}

fn split_direction(token: &str) -> (SortDir, &str) {
    if let Some(name) = token.strip_prefix('-') {
        (SortDir::Desc, name.trim())
    } else if let Some(name) = token.strip_prefix('+') {
        (SortDir::Asc, name.trim())
    } else {
        (SortDir::Asc, token)
    }
}
