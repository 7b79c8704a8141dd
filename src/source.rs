//! The navigable view over a flat map.
//!
//! A [`FlatSource`] is `(map, prefix, info)`. Everything it answers is
//! recomputed from the map's keys on each call: containment, child
//! resolution, list and map enumeration, and scalar coercion. Nothing is
//! cached, so two views with the same map and prefix always agree.
//!
//! # Containment
//!
//! A path is contained when its full key (`prefix.path`) is either an exact
//! key, or a strict prefix of some key followed by `.` and at least one more
//! character. `"a"` is therefore not contained in `{"ab": "1"}` nor in
//! `{"a.": "1"}`.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{FlatSourceError, NumberParseError};
use crate::flatmap::FlatMap;
use crate::info::SourceInfo;
use crate::path::{Path, join_key};
use crate::types::{Origin, ScalarType};

/// A view of the subtree of a flat map rooted at a dotted prefix.
#[derive(Clone)]
pub struct FlatSource<'a> {
    map: &'a (dyn FlatMap + Sync),
    prefix: String,
    info: SourceInfo,
}

impl<'a> FlatSource<'a> {
    /// A root view over `map` with the empty prefix and default info.
    pub fn new(map: &'a (dyn FlatMap + Sync)) -> Self {
        Self {
            map,
            prefix: String::new(),
            info: SourceInfo::default(),
        }
    }

    /// Root the view at `prefix` instead of the whole map.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Replace the type tag (default `"flat"`).
    pub fn type_tag(mut self, tag: impl Into<String>) -> Self {
        self.info = self.info.with_type_tag(tag);
        self
    }

    /// Attach a context entry, carried into every child view.
    pub fn context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.info = self.info.with_context(key, value);
        self
    }

    pub fn current_prefix(&self) -> &str {
        &self.prefix
    }

    pub fn info(&self) -> &SourceInfo {
        &self.info
    }

    /// The most recent enumeration step that produced this view, if any.
    pub fn origin(&self) -> Option<&Origin> {
        self.info.origins().last()
    }

    // --- Path resolution ---

    /// Whether `path` denotes an existing node below (or at) this view.
    pub fn contains(&self, path: &Path) -> bool {
        if path.is_empty() {
            return true;
        }
        let full_key = join_key(&self.prefix, &path.name());
        let found = self.map.keys().any(|key| covers(key, &full_key));
        trace!(key = %full_key, found, "containment probe");
        found
    }

    /// [`contains`](Self::contains) for a dotted key.
    pub fn contains_key(&self, dotted: &str) -> bool {
        self.contains(&Path::parse(dotted))
    }

    /// The view at `path`, or `None` when it is not contained.
    ///
    /// The empty path borrows `self`; any other path yields a new view.
    pub fn get_or_null(&self, path: &Path) -> Option<Cow<'_, FlatSource<'a>>> {
        if path.is_empty() {
            return Some(Cow::Borrowed(self));
        }
        self.child(path).map(Cow::Owned)
    }

    /// [`get_or_null`](Self::get_or_null) for a dotted key, always owned.
    pub fn get(&self, dotted: &str) -> Option<FlatSource<'a>> {
        self.get_or_null(&Path::parse(dotted)).map(Cow::into_owned)
    }

    fn child(&self, path: &Path) -> Option<FlatSource<'a>> {
        if path.is_empty() || !self.contains(path) {
            return None;
        }
        Some(self.at(join_key(&self.prefix, &path.name()), self.info.clone()))
    }

    fn at(&self, prefix: String, info: SourceInfo) -> FlatSource<'a> {
        FlatSource {
            map: self.map,
            prefix,
            info,
        }
    }

    // --- Scalars ---

    /// The raw string stored at exactly this view's prefix.
    pub fn value(&self) -> Result<&'a str, FlatSourceError> {
        self.map.value(&self.prefix).ok_or_else(|| {
            debug!(key = %self.prefix, kind = self.info.type_tag(), "no exact value");
            FlatSourceError::Lookup {
                key: self.prefix.clone(),
                kind: self.info.type_tag().to_string(),
                origin: self.origin().cloned(),
            }
        })
    }

    pub fn is_text(&self) -> bool {
        self.map.value(&self.prefix).is_some()
    }

    pub fn to_text(&self) -> Result<String, FlatSourceError> {
        self.value().map(str::to_string)
    }

    /// `true`/`false`, compared case-insensitively.
    pub fn to_bool(&self) -> Result<bool, FlatSourceError> {
        let value = self.value()?;
        if value.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if value.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            debug!(key = %self.prefix, value, "not a boolean");
            Err(FlatSourceError::Format {
                value: value.to_string(),
                target: ScalarType::Boolean,
                source: None,
            })
        }
    }

    pub fn to_i32(&self) -> Result<i32, FlatSourceError> {
        self.parse_number(ScalarType::Int)
    }

    pub fn to_i64(&self) -> Result<i64, FlatSourceError> {
        self.parse_number(ScalarType::Long)
    }

    pub fn to_f64(&self) -> Result<f64, FlatSourceError> {
        self.parse_number(ScalarType::Double)
    }

    fn parse_number<T>(&self, target: ScalarType) -> Result<T, FlatSourceError>
    where
        T: FromStr,
        T::Err: Into<NumberParseError>,
    {
        let value = self.value()?;
        value.parse::<T>().map_err(|e| {
            debug!(key = %self.prefix, value, %target, "numeric parse failed");
            FlatSourceError::Format {
                value: value.to_string(),
                target,
                source: Some(e.into()),
            }
        })
    }

    // --- Lists ---

    /// Children `0, 1, 2, ...` up to (not including) the first missing index.
    pub fn to_list(&self) -> Vec<FlatSource<'a>> {
        let mut items = Vec::new();
        for index in 0usize.. {
            let Some(item) = self.child(&Path::from(index)) else {
                break;
            };
            let info = item.info.with_origin(Origin::ListElement {
                parent: self.prefix.clone(),
                index,
            });
            items.push(FlatSource { info, ..item });
        }
        trace!(prefix = %self.prefix, len = items.len(), "enumerated list");
        items
    }

    pub fn is_list(&self) -> bool {
        self.contains(&Path::from(0usize))
    }

    // --- Maps ---

    /// Immediate children keyed by their first segment, in key order.
    pub fn to_map(&self) -> BTreeMap<String, FlatSource<'a>> {
        let entries: BTreeMap<String, FlatSource<'a>> = self
            .child_keys()
            .into_iter()
            .map(|key| {
                let info = self.info.with_origin(Origin::MapEntry {
                    parent: self.prefix.clone(),
                    key: key.to_string(),
                });
                let child = self.at(join_key(&self.prefix, key), info);
                (key.to_string(), child)
            })
            .collect();
        trace!(prefix = %self.prefix, len = entries.len(), "enumerated map");
        entries
    }

    pub fn is_map(&self) -> bool {
        self.map
            .keys()
            .any(|key| immediate_child(key, &self.prefix).is_some())
    }

    fn child_keys(&self) -> BTreeSet<&'a str> {
        self.map
            .keys()
            .filter_map(|key| immediate_child(key, &self.prefix))
            .collect()
    }

    // --- Listing ---

    /// Every `(relative key, value)` pair under this view, ordered by key.
    ///
    /// An exact value at the prefix itself is listed under `""`.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = self
            .map
            .keys()
            .filter_map(|key| {
                let relative = relative_key(key, &self.prefix)?;
                let value = self.map.value(key)?;
                Some((relative.to_string(), value.to_string()))
            })
            .collect();
        entries.sort();
        entries
    }
}

/// `key` equals `full_key`, or extends it past a `.` with at least one more char.
fn covers(key: &str, full_key: &str) -> bool {
    match key.strip_prefix(full_key) {
        Some("") => true,
        Some(rest) => rest.strip_prefix('.').is_some_and(|tail| !tail.is_empty()),
        None => false,
    }
}

/// The part of `key` below `prefix`; `""` when `key` is the prefix itself.
fn relative_key<'k>(key: &'k str, prefix: &str) -> Option<&'k str> {
    if prefix.is_empty() {
        return Some(key);
    }
    match key.strip_prefix(prefix)? {
        "" => Some(""),
        rest => rest.strip_prefix('.'),
    }
}

/// The first segment of `key` below `prefix`, skipping empty ones.
fn immediate_child<'k>(key: &'k str, prefix: &str) -> Option<&'k str> {
    let rest = relative_key(key, prefix)?;
    let child = rest.split('.').next()?;
    (!child.is_empty()).then_some(child)
}

impl fmt::Debug for FlatSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatSource")
            .field("prefix", &self.prefix)
            .field("info", &self.info)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for FlatSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let at = if self.prefix.is_empty() {
            "<root>"
        } else {
            &self.prefix
        };
        write!(f, "{} source at '{at}'", self.info.type_tag())
    }
}
