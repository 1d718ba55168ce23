//! Attribute annotations for delimited constructs
//!
//! Attributes are the `{#id .class %option key=value}` annotation that may
//! follow the name of a construct. When the annotation is present, all four
//! slots exist (possibly empty); when it is absent the node carries no
//! `Attributes` value at all.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Parsed attribute annotation.
///
/// `classes` and `options` keep source order and allow duplicates. A repeated
/// `#id` keeps the last occurrence; a repeated key in `key_values` is
/// overwritten by the later occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub options: Vec<String>,
    pub key_values: BTreeMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the annotation carried no entries at all (`{}` in source).
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.classes.is_empty()
            && self.options.is_empty()
            && self.key_values.is_empty()
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(id) = &self.id {
            parts.push(format!("#{id}"));
        }
        parts.extend(self.classes.iter().map(|c| format!(".{c}")));
        parts.extend(self.options.iter().map(|o| format!("%{o}")));
        parts.extend(self.key_values.iter().map(|(k, v)| format!("{k}={v}")));
        write!(f, "{{{}}}", parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_attributes() {
        let attrs = Attributes::new();
        assert!(attrs.is_empty());
        assert_eq!(attrs.to_string(), "{}");
    }

    #[test]
    fn test_display_ordering() {
        let mut attrs = Attributes::new();
        attrs.id = Some("id".to_string());
        attrs.classes.push("a".to_string());
        attrs.classes.push("b".to_string());
        attrs.options.push("opt".to_string());
        attrs.key_values.insert("key".to_string(), "val".to_string());
        assert_eq!(attrs.to_string(), "{#id .a .b %opt key=val}");
    }

    #[test]
    fn test_duplicate_classes_allowed() {
        let mut attrs = Attributes::new();
        attrs.classes.push("x".to_string());
        attrs.classes.push("x".to_string());
        assert_eq!(attrs.classes, vec!["x", "x"]);
    }
}
