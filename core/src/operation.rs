//! The closed set of operations the dispatcher understands.

use std::fmt;
use std::str::FromStr;

use crate::error::TransformError;

/// A text transformation, identified on the wire by its exact name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Slugify,
    Reverse,
    Uppercase,
    WordCount,
}

impl Operation {
    /// Every operation, in the order the front-end lists them.
    pub const ALL: [Operation; 4] = [
        Operation::Slugify,
        Operation::Reverse,
        Operation::Uppercase,
        Operation::WordCount,
    ];

    /// The wire name accepted in the `operation` request field.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Slugify => "slugify",
            Operation::Reverse => "reverse",
            Operation::Uppercase => "uppercase",
            Operation::WordCount => "wordCount",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match against the wire names. No aliases.
impl FromStr for Operation {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| TransformError::UnknownOperation(s.to_string()))
    }
}
