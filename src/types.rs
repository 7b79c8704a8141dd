use std::fmt;

/// Target type of a scalar coercion, reported in format errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    Boolean,
    Int,
    Long,
    Double,
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarType::Boolean => "boolean",
            ScalarType::Int => "int",
            ScalarType::Long => "long",
            ScalarType::Double => "double",
        };
        f.write_str(name)
    }
}

/// How a view was reached from its parent during enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Element `index` of the list at `parent`.
    ListElement { parent: String, index: usize },
    /// Entry `key` of the map at `parent`.
    MapEntry { parent: String, key: String },
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::ListElement { parent, index } => {
                write!(f, "element {index} of list '{parent}'")
            }
            Origin::MapEntry { parent, key } => write!(f, "entry '{key}' of map '{parent}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_type_names() {
        assert_eq!(ScalarType::Boolean.to_string(), "boolean");
        assert_eq!(ScalarType::Long.to_string(), "long");
    }

    #[test]
    fn origin_formats() {
        let list = Origin::ListElement {
            parent: "hosts".into(),
            index: 2,
        };
        assert_eq!(list.to_string(), "element 2 of list 'hosts'");
        let entry = Origin::MapEntry {
            parent: "db".into(),
            key: "url".into(),
        };
        assert_eq!(entry.to_string(), "entry 'url' of map 'db'");
    }
}
