//! Code elements
//!
//! Code content is opaque raw text, never re-parsed. Both forms may carry a
//! name and an attribute annotation.

use super::super::attributes::Attributes;
use super::super::range::Location;
use serde::{Deserialize, Serialize};

/// Fenced code block: three or more backticks, matched length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
    pub content: String,
    pub location: Location,
}

impl CodeBlock {
    pub fn new(
        name: Option<String>,
        attributes: Option<Attributes>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name,
            attributes,
            content: content.into(),
            location: Location::default(),
        }
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }
}

/// Inline code: single backticks within one line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeInline {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
    pub content: String,
    pub location: Location,
}

impl CodeInline {
    pub fn new(
        name: Option<String>,
        attributes: Option<Attributes>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name,
            attributes,
            content: content.into(),
            location: Location::default(),
        }
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }
}
