//! Document root element

use super::super::range::Location;
use super::node::Node;
use serde::{Deserialize, Serialize};

/// Root of a parsed Blocks tree.
///
/// The children sequence mixes literal text with the eight delimited
/// construct kinds. An empty source yields an empty children list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub children: Vec<Node>,
    pub location: Location,
}

impl Document {
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            children,
            location: Location::default(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }
}
