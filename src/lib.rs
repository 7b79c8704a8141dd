//! Navigable hierarchical views over flat, dotted-key configuration maps.
//!
//! Environment variables, query strings and `-D key=value` flags all arrive
//! as a flat map of strings. Flatsource lets you walk such a map as if it were
//! a tree, without building the tree:
//!
//! ```
//! use std::collections::HashMap;
//! use flatsource::FlatSource;
//!
//! let map: HashMap<String, String> = [
//!     ("server.host", "localhost"),
//!     ("server.ports.0", "80"),
//!     ("server.ports.1", "443"),
//! ]
//! .into_iter()
//! .map(|(k, v)| (k.to_string(), v.to_string()))
//! .collect();
//!
//! let root = FlatSource::new(&map);
//! let server = root.get("server").unwrap();
//! assert_eq!(server.get("host").unwrap().to_text().unwrap(), "localhost");
//! let ports: Vec<i32> = server
//!     .get("ports")
//!     .unwrap()
//!     .to_list()
//!     .iter()
//!     .map(|p| p.to_i32().unwrap())
//!     .collect();
//! assert_eq!(ports, [80, 443]);
//! ```
//!
//! # Views
//!
//! A [`FlatSource`] is a borrowed map plus a dotted prefix plus a small
//! [`SourceInfo`] record. It never copies or mutates the map, and it caches
//! nothing: every question is answered by scanning the map's keys again.
//! Configuration maps are small, so this keeps views trivially cheap to
//! create and safe to share across threads.
//!
//! - **Containment**: [`contains`](FlatSource::contains) is true for an exact
//!   key or a dot-bounded prefix of a key. `a` is not contained in `{ab: 1}`.
//! - **Navigation**: [`get_or_null`](FlatSource::get_or_null) extends the
//!   prefix, or returns `None`. Probing never fails.
//! - **Lists**: [`to_list`](FlatSource::to_list) reads children `0, 1, 2, ...`
//!   and stops at the first missing index.
//! - **Maps**: [`to_map`](FlatSource::to_map) groups keys by their next
//!   segment. Children are ordered by key.
//! - **Scalars**: [`to_text`](FlatSource::to_text),
//!   [`to_bool`](FlatSource::to_bool), [`to_i32`](FlatSource::to_i32),
//!   [`to_i64`](FlatSource::to_i64) and [`to_f64`](FlatSource::to_f64) read
//!   the value stored at exactly the view's prefix.
//!
//! # Flattening
//!
//! [`to_flat_map`] goes the other way: it writes a [`ConfigValue`] tree as
//! dotted keys (`a.b.0.c`). Reading any leaf back through a view over the
//! result gives the leaf's text form. TOML documents and any `Serialize`
//! value flatten through [`flatten_toml`] and [`flatten_serialize`].
//!
//! # Getting a flat map
//!
//! | Input | Function |
//! |-------|----------|
//! | `MYAPP__DATABASE__URL=pg://` | [`env_to_flat_map`] |
//! | `database.url=pg://` | [`parse_override`], [`parse_overrides`] |
//! | `-D database.url=pg://` | `OverrideArgs` (feature `clap`) |
//! | `?database.url=pg%3A%2F%2F` | `query_to_flat_map` (feature `url`) |
//!
//! Any `HashMap<String, String>` or `BTreeMap<String, String>` works too; see
//! [`FlatMap`].
//!
//! # Error handling
//!
//! Only scalar reads fail. [`FlatSourceError::Lookup`] means the prefix is not
//! an exact key (it may still be a parent of other keys).
//! [`FlatSourceError::Format`] means the value did not parse; numeric failures
//! carry the parse error as their `source()`. With the `rich-errors` feature
//! every variant is also a `miette::Diagnostic`.

pub mod error;
pub mod types;

#[cfg(feature = "clap")]
mod cli;
mod env;
mod flatmap;
mod flatten;
mod info;
mod overrides;
mod path;
#[cfg(feature = "url")]
mod query;
mod source;
mod value;

#[cfg(feature = "clap")]
pub use cli::OverrideArgs;
pub use env::env_to_flat_map;
pub use error::{FlatSourceError, NumberParseError};
pub use flatmap::FlatMap;
pub use flatten::{flatten_serialize, flatten_toml, to_flat_map};
pub use info::{DEFAULT_TYPE_TAG, SourceInfo};
pub use overrides::{overrides_to_flat_map, parse_override, parse_overrides};
pub use path::{Path, join_key};
#[cfg(feature = "url")]
pub use query::query_to_flat_map;
pub use source::FlatSource;
pub use types::{Origin, ScalarType};
pub use value::{ConfigValue, Scalar};
