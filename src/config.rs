//! Construction-time options.

use crate::sort::SortingTechnique;

/// Configuration for a [`Tree`](crate::Tree).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Name shown in the rendered tree header
    pub name: String,
    /// Lowercase every key before it reaches the tree (lookups included)
    pub case_insensitive: bool,
    /// Re-sort the whole tree after each mutation that changed it
    pub sort: Option<SortingTechnique>,
}

impl Config {
    /// Default configuration with a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
