//! Parse `KEY=VALUE` overrides into a flat map.
//!
//! `"database.url=pg://"` becomes the entry `database.url = pg://`. The key is
//! already dotted, so no nesting is built; the view does that lazily.

use std::collections::BTreeMap;

use crate::error::FlatSourceError;

/// Split `KEY=VALUE` at the first `=`. The value may be empty or contain `=`.
pub fn parse_override(raw: &str) -> Result<(String, String), FlatSourceError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(FlatSourceError::InvalidOverride(raw.to_string())),
    }
}

/// Collect overrides into a flat map. If multiple entries target the same key,
/// the last one wins.
pub fn overrides_to_flat_map<I, K, V>(entries: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Parse and collect raw `KEY=VALUE` strings, failing on the first malformed one.
pub fn parse_overrides<'r>(
    raw: impl IntoIterator<Item = &'r str>,
) -> Result<BTreeMap<String, String>, FlatSourceError> {
    let entries = raw
        .into_iter()
        .map(parse_override)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(overrides_to_flat_map(entries))
}
