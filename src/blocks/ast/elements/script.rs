//! Script elements
//!
//! Script content is an un-evaluated source string. Evaluation belongs to an
//! external collaborator that runs strictly after parsing and attaches its
//! result without mutating the expression recorded here.

use super::super::attributes::Attributes;
use super::super::range::Location;
use serde::{Deserialize, Serialize};

/// Script block: three or more exclamation marks, matched length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
    pub content: String,
    pub location: Location,
}

impl ScriptBlock {
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

/// Inline script expression: `!expression!` within one line.
///
/// Carries neither name nor attributes; the whole interior is the expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptInline {
    pub expression: String,
    pub location: Location,
}

impl ScriptInline {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            location: Location::default(),
        }
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }
}
