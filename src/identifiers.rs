// Copyright 2025 Cowboy AI, LLC.

//! Identifier types for composite registries

use serde::{Deserialize, Serialize};
use std::fmt;

/// Registry key - locates a source object inside one composite
///
/// Keys are only meaningful within the composite that assigned them.
/// They are handed out in input order, starting at zero, and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SourceKey(usize);

impl SourceKey {
    /// Create a key from its position in the registry
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Get the position in the registry
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for SourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "source#{}", self.0)
    }
}

impl From<SourceKey> for usize {
    fn from(key: SourceKey) -> Self {
        key.0
    }
}
