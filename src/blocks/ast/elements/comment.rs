//! Comment elements
//!
//! Comment content is opaque raw text, never re-parsed. Comments carry an
//! optional name but no attribute annotation.

use super::super::range::Location;
use serde::{Deserialize, Serialize};

/// Multi-line comment: `/* ... */`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub content: String,
    pub location: Location,
}

impl CommentBlock {
    pub fn new(name: Option<String>, content: impl Into<String>) -> Self {
        Self {
            name,
            content: content.into(),
            location: Location::default(),
        }
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }
}

/// Single-line comment: `// ...` up to the end of the line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentInline {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub content: String,
    pub location: Location,
}

impl CommentInline {
    pub fn new(name: Option<String>, content: impl Into<String>) -> Self {
        Self {
            name,
            content: content.into(),
            location: Location::default(),
        }
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }
}
