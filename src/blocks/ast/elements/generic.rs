//! Generic container elements
//!
//! The only construct kind whose content is recursively parsed. The block
//! form records the repeat count of its opening delimiter; the closing
//! delimiter must repeat the colon exactly as many times, which is what makes
//! nesting by longer delimiters unambiguous.

use super::super::attributes::Attributes;
use super::super::range::Location;
use super::node::Node;
use serde::{Deserialize, Serialize};

/// Generic block container: `:::`-style fences with matched repeat count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
    /// Repeat count of the opening delimiter (3 or more).
    pub delimiter_length: usize,
    pub content: Vec<Node>,
    pub location: Location,
}

impl GenericBlock {
    pub fn new(
        name: Option<String>,
        attributes: Option<Attributes>,
        delimiter_length: usize,
        content: Vec<Node>,
    ) -> Self {
        Self {
            name,
            attributes,
            delimiter_length,
            content,
            location: Location::default(),
        }
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }
}

/// Generic inline container: single colons within one line.
///
/// Content may hold text and inline elements only; blocks may not nest
/// inside inline containers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericInline {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
    pub content: Vec<Node>,
    pub location: Location,
}

impl GenericInline {
    pub fn new(name: Option<String>, attributes: Option<Attributes>, content: Vec<Node>) -> Self {
        Self {
            name,
            attributes,
            content,
            location: Location::default(),
        }
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }
}
