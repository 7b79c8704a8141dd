use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read-only access to a flat, dotted-key string map.
///
/// Views borrow an implementation of this trait and never mutate it.
pub trait FlatMap {
    /// The value stored at exactly `key`.
    fn value(&self, key: &str) -> Option<&str>;

    /// Every key in the map, in the map's own iteration order.
    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_>;
}

impl<S: BuildHasher> FlatMap for HashMap<String, String, S> {
    fn value(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(HashMap::keys(self).map(String::as_str))
    }
}

impl FlatMap for BTreeMap<String, String> {
    fn value(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(BTreeMap::keys(self).map(String::as_str))
    }
}
