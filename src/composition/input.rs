// Copyright 2025 Cowboy AI, LLC.

//! Composition inputs

use std::fmt;
use std::sync::Arc;

use super::composite::Composite;
use crate::cooperative::{Cooperative, SharedSource};
use crate::member_maps::MemberMaps;

/// One input to a composition: a raw object or a mapped one
pub enum CompositionInput {
    /// A source object exposed as-is (subject to `ComposeOptions::hide`)
    Object(SharedSource),
    /// A source object with its own rename/hide table
    Mapped(MemberMaps),
}

impl CompositionInput {
    /// Wrap a raw source object
    pub fn object(source: SharedSource) -> Self {
        CompositionInput::Object(source)
    }

    /// The source object behind this input
    pub fn source(&self) -> &SharedSource {
        match self {
            CompositionInput::Object(source) => source,
            CompositionInput::Mapped(maps) => maps.source(),
        }
    }

    /// Whether this input carries its own mapping table
    pub fn is_mapped(&self) -> bool {
        matches!(self, CompositionInput::Mapped(_))
    }
}

impl<S: Cooperative + 'static> From<Arc<S>> for CompositionInput {
    fn from(source: Arc<S>) -> Self {
        CompositionInput::Object(source)
    }
}

impl From<MemberMaps> for CompositionInput {
    fn from(maps: MemberMaps) -> Self {
        CompositionInput::Mapped(maps)
    }
}

impl From<Composite> for CompositionInput {
    fn from(composite: Composite) -> Self {
        CompositionInput::Object(Arc::new(composite))
    }
}

impl fmt::Debug for CompositionInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositionInput::Object(source) => f
                .debug_tuple("Object")
                .field(&source.type_name())
                .finish(),
            CompositionInput::Mapped(maps) => f.debug_tuple("Mapped").field(maps).finish(),
        }
    }
}
