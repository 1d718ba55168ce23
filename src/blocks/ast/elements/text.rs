//! Literal text element

use super::super::range::Location;
use serde::{Deserialize, Serialize};

/// A run of literal text.
///
/// The parser emits one `Text` per source token; the merge pass coalesces
/// adjacent siblings so the final tree never holds two `Text` nodes side by
/// side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
    pub location: Location,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            location: Location::default(),
        }
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }
}
