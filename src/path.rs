//! Relative paths and dotted key joining.

use std::fmt;

/// An ordered sequence of segments locating a node relative to a view.
///
/// The empty path denotes the view itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// The empty path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Split a dotted key into segments. `""` parses to the empty path.
    pub fn parse(dotted: &str) -> Self {
        if dotted.is_empty() {
            return Self::root();
        }
        dotted.split('.').collect()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Dot-joined segments.
    pub fn name(&self) -> String {
        self.segments.join(".")
    }

    /// A new path with `segment` appended.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl From<&str> for Path {
    fn from(dotted: &str) -> Self {
        Path::parse(dotted)
    }
}

impl From<usize> for Path {
    fn from(index: usize) -> Self {
        Path {
            segments: vec![index.to_string()],
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Path {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Join `name` under `prefix`; the empty prefix is the root.
pub fn join_key(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_dots() {
        let path = Path::parse("a.b.0.c");
        assert_eq!(path.segments(), ["a", "b", "0", "c"]);
        assert_eq!(path.name(), "a.b.0.c");
    }

    #[test]
    fn empty_string_is_root() {
        assert!(Path::parse("").is_empty());
        assert_eq!(Path::root().name(), "");
    }

    #[test]
    fn index_path_has_one_segment() {
        assert_eq!(Path::from(3usize).segments(), ["3"]);
    }

    #[test]
    fn child_appends_segment() {
        let path = Path::from("server").child("port");
        assert_eq!(path.to_string(), "server.port");
    }

    #[test]
    fn collects_from_segments() {
        let path: Path = ["a", "b"].into_iter().collect();
        assert_eq!(path.name(), "a.b");
    }

    #[test]
    fn join_key_at_root_and_below() {
        assert_eq!(join_key("", "host"), "host");
        assert_eq!(join_key("database", "url"), "database.url");
    }
}
