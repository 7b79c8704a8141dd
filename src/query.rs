//! Decode URL query strings into a flat map (feature `url`).

use std::collections::BTreeMap;

use percent_encoding::percent_decode_str;

/// Decode `a.b=1&c=x%20y` into `{a.b: 1, c: "x y"}`.
///
/// `+` decodes to a space. A pair without `=` maps to the empty string and
/// empty pairs are skipped. Later pairs win over earlier ones.
pub fn query_to_flat_map(query: &str) -> BTreeMap<String, String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect()
}

fn decode(component: &str) -> String {
    let spaced = component.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
