//! Clap adapter for flatsource.
//!
//! Compiled only when the `clap` Cargo feature is enabled (on by default).
//! [`OverrideArgs`] gives an app a repeatable `-D key=value` flag whose
//! values form a flat map, ready to wrap in a
//! [`FlatSource`](crate::FlatSource):
//!
//! ```ignore
//! #[derive(Parser)]
//! struct Cli {
//!     #[command(flatten)]
//!     overrides: OverrideArgs,
//! }
//!
//! let map = Cli::parse().overrides.into_flat_map();
//! let source = FlatSource::new(&map).type_tag("cli");
//! ```

use std::collections::BTreeMap;

use clap::Args;

use crate::overrides::{overrides_to_flat_map, parse_override};

#[derive(Debug, Clone, Default, Args)]
pub struct OverrideArgs {
    /// Set a configuration value by dotted key (e.g. `-D database.url=pg://`).
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE", value_parser = parse_define)]
    pub defines: Vec<(String, String)>,
}

impl OverrideArgs {
    /// Collect the parsed defines. Later flags win for a repeated key.
    pub fn into_flat_map(self) -> BTreeMap<String, String> {
        overrides_to_flat_map(self.defines)
    }
}

fn parse_define(raw: &str) -> Result<(String, String), String> {
    parse_override(raw).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatSource;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        overrides: OverrideArgs,
    }

    fn parse(args: &[&str]) -> OverrideArgs {
        TestCli::try_parse_from(args).unwrap().overrides
    }

    #[test]
    fn no_defines_is_empty() {
        assert!(parse(&["test"]).into_flat_map().is_empty());
    }

    #[test]
    fn short_and_long_flags() {
        let map = parse(&["test", "-D", "port=80", "--define", "database.url=pg://"])
            .into_flat_map();
        assert_eq!(map["port"], "80");
        assert_eq!(map["database.url"], "pg://");
    }

    #[test]
    fn repeated_key_last_wins() {
        let map = parse(&["test", "-D", "port=80", "-D", "port=81"]).into_flat_map();
        let port = FlatSource::new(&map).get("port").unwrap();
        assert_eq!(port.to_i32().unwrap(), 81);
    }

    #[test]
    fn malformed_define_rejected() {
        let result = TestCli::try_parse_from(["test", "-D", "oops"]);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("KEY=VALUE"), "unexpected error: {err}");
    }
}
