use std::collections::BTreeMap;

/// Build a flat map from environment variables matching `{PREFIX}__*`.
///
/// Double underscore `__` separates nesting levels and becomes `.`.
/// Single `_` within a segment is literal (part of the key).
/// Segments are lowercased; values are kept verbatim and coerced lazily by
/// the view.
///
/// Takes an iterator so tests can pass synthetic data instead of `std::env::vars()`.
pub fn env_to_flat_map(
    prefix: &str,
    vars: impl IntoIterator<Item = (String, String)>,
) -> BTreeMap<String, String> {
    let needle = format!("{prefix}__");
    let mut map = BTreeMap::new();

    for (key, value) in vars {
        let Some(rest) = key.strip_prefix(&needle) else {
            continue;
        };
        if rest.is_empty() {
            continue;
        }

        let dotted = rest
            .split("__")
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(".");
        map.insert(dotted, value);
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatSource;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn simple_key() {
        let map = env_to_flat_map("MYAPP", vars(&[("MYAPP__HOST", "0.0.0.0")]));
        assert_eq!(map["host"], "0.0.0.0");
    }

    #[test]
    fn nested_key() {
        let map = env_to_flat_map("MYAPP", vars(&[("MYAPP__DATABASE__URL", "postgres://db")]));
        assert_eq!(map["database.url"], "postgres://db");
    }

    #[test]
    fn single_underscore_preserved() {
        let map = env_to_flat_map("MYAPP", vars(&[("MYAPP__POOL_SIZE", "10")]));
        assert_eq!(map["pool_size"], "10");
    }

    #[test]
    fn list_index_segments() {
        let map = env_to_flat_map(
            "APP",
            vars(&[("APP__HOSTS__0", "a"), ("APP__HOSTS__1", "b")]),
        );
        let src = FlatSource::new(&map).type_tag("env");
        let hosts = src.get("hosts").unwrap().to_list();
        assert_eq!(hosts.len(), 2);
        assert_eq!(hosts[1].to_text().unwrap(), "b");
    }

    #[test]
    fn values_kept_verbatim() {
        let map = env_to_flat_map("MYAPP", vars(&[("MYAPP__DEBUG", "FALSE")]));
        assert_eq!(map["debug"], "FALSE");
        let debug = FlatSource::new(&map).get("debug").unwrap();
        assert!(!debug.to_bool().unwrap());
    }

    #[test]
    fn no_matching_prefix_ignored() {
        let map = env_to_flat_map("MYAPP", vars(&[("OTHER__HOST", "x")]));
        assert!(map.is_empty());
    }

    #[test]
    fn bare_prefix_ignored() {
        let map = env_to_flat_map("MYAPP", vars(&[("MYAPP", "x"), ("MYAPP__", "y")]));
        assert!(map.is_empty());
    }

    #[test]
    fn prefix_with_single_underscore_not_matched() {
        let map = env_to_flat_map("MYAPP", vars(&[("MYAPP_HOST", "x")]));
        assert!(map.is_empty());
    }

    #[test]
    fn multiple_vars_combined() {
        let map = env_to_flat_map(
            "APP",
            vars(&[
                ("APP__HOST", "0.0.0.0"),
                ("APP__PORT", "3000"),
                ("APP__DATABASE__URL", "pg://"),
                ("APP__DATABASE__POOL_SIZE", "20"),
            ]),
        );
        let src = FlatSource::new(&map);
        assert_eq!(src.get("port").unwrap().to_i32().unwrap(), 3000);
        let db = src.get("database").unwrap().to_map();
        let keys: Vec<&str> = db.keys().map(String::as_str).collect();
        assert_eq!(keys, ["pool_size", "url"]);
    }
}
