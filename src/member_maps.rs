// Copyright 2025 Cowboy AI, LLC.

//! Per-source rename and hide tables
//!
//! A [`MemberMaps`] table binds one source object to the rules that decide
//! which of its members reach the composite and under which names. Tables
//! are built with a fluent interface:
//!
//! ```
//! use std::sync::Arc;
//! use cim_cooperate::{map_members, DynamicObject};
//! use serde_json::json;
//!
//! let source = Arc::new(
//!     DynamicObject::new()
//!         .with_method("getItem", |_| Ok(json!(1)))
//!         .with_attribute("uniqueValue", json!("a"))
//!         .with_attribute("debug", json!(false)),
//! );
//!
//! let mut maps = map_members(source);
//! maps.map("getItem")?
//!     .to("getTestItem")?
//!     .map("uniqueValue")?
//!     .to("moreUniqueValue")?
//!     .hide("debug")?;
//!
//! assert_eq!(maps.exposed_name("getItem"), Some("getTestItem"));
//! assert_eq!(maps.exposed_name("debug"), None);
//! # Ok::<(), cim_cooperate::CooperateError>(())
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cooperative::SharedSource;
use crate::errors::{CooperateError, CooperateResult};

/// Rename/hide rule for a single source member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberMap {
    source_name: String,
    target_name: Option<String>,
    hidden: bool,
}

impl MemberMap {
    fn new(source_name: String) -> CooperateResult<Self> {
        if source_name.is_empty() {
            return Err(CooperateError::invalid_argument(
                "source_name",
                "the source member name cannot be empty",
            ));
        }

        Ok(Self {
            source_name,
            target_name: None,
            hidden: false,
        })
    }

    /// Member name on the source object
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Name the member is exposed under, if renamed
    pub fn target_name(&self) -> Option<&str> {
        self.target_name.as_deref()
    }

    /// Whether the member is hidden from the composite
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    /// Name on the composite, or `None` when hidden
    ///
    /// Hiding wins over renaming.
    pub fn exposed_name(&self) -> Option<&str> {
        if self.hidden {
            return None;
        }
        Some(self.target_name().unwrap_or(&self.source_name))
    }
}

/// All rename/hide rules for one source object
pub struct MemberMaps {
    source: SharedSource,
    mappings: IndexMap<String, MemberMap>,
}

impl MemberMaps {
    /// Create an empty table bound to `source`
    pub fn new(source: SharedSource) -> Self {
        Self {
            source,
            mappings: IndexMap::new(),
        }
    }

    /// Start a mapping for one member
    ///
    /// Any earlier mapping of the same name is replaced.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `source_name` is empty
    pub fn map(&mut self, source_name: impl Into<String>) -> CooperateResult<MappedMember<'_>> {
        let mapping = MemberMap::new(source_name.into())?;
        let source_name = mapping.source_name.clone();
        self.mappings.insert(source_name.clone(), mapping);

        Ok(MappedMember {
            parent: self,
            source_name,
        })
    }

    /// Hide one member; shorthand for `map(name)?.hide()`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `source_name` is empty
    pub fn hide(&mut self, source_name: impl Into<String>) -> CooperateResult<&mut Self> {
        Ok(self.map(source_name)?.hide())
    }

    /// The bound source object
    pub fn source(&self) -> &SharedSource {
        &self.source
    }

    /// All registered mappings, keyed by source member name
    pub fn mappings(&self) -> &IndexMap<String, MemberMap> {
        &self.mappings
    }

    /// Mapping registered for a source member name
    pub fn get(&self, source_name: &str) -> Option<&MemberMap> {
        self.mappings.get(source_name)
    }

    /// Resolve the name a source member is exposed under
    ///
    /// Unmapped members keep their own name; hidden members resolve to `None`.
    pub fn exposed_name<'a>(&'a self, source_name: &'a str) -> Option<&'a str> {
        match self.mappings.get(source_name) {
            Some(mapping) => mapping.exposed_name(),
            None => Some(source_name),
        }
    }

    pub(crate) fn into_source(self) -> SharedSource {
        self.source
    }
}

impl fmt::Debug for MemberMaps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberMaps")
            .field("source", &self.source.type_name())
            .field("mappings", &self.mappings)
            .finish()
    }
}

/// Fluent handle to a mapping just registered with [`MemberMaps::map`]
///
/// `to` and `hide` consume the handle and hand back the owning table so
/// the chain can continue at table level.
pub struct MappedMember<'a> {
    parent: &'a mut MemberMaps,
    source_name: String,
}

impl<'a> MappedMember<'a> {
    /// Expose the member under `target_name`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `target_name` is empty
    pub fn to(mut self, target_name: impl Into<String>) -> CooperateResult<&'a mut MemberMaps> {
        let target_name = target_name.into();
        if target_name.is_empty() {
            return Err(CooperateError::invalid_argument(
                "target_name",
                format!(
                    "the target name for member '{}' must be a non-empty string",
                    self.source_name
                ),
            ));
        }

        self.entry().target_name = Some(target_name);
        Ok(self.parent)
    }

    /// Hide the member from the composite
    pub fn hide(mut self) -> &'a mut MemberMaps {
        self.entry().hidden = true;
        self.parent
    }

    /// Whether the member is currently marked hidden
    pub fn hidden(&self) -> bool {
        self.parent
            .mappings
            .get(&self.source_name)
            .is_some_and(MemberMap::hidden)
    }

    /// Member name on the source object
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    fn entry(&mut self) -> &mut MemberMap {
        let source_name = self.source_name.clone();
        self.parent
            .mappings
            .entry(source_name.clone())
            .or_insert(MemberMap {
                source_name,
                target_name: None,
                hidden: false,
            })
    }
}

/// Start a rename/hide table for `source`
///
/// ```
/// use std::sync::Arc;
/// use cim_cooperate::{map_members, DynamicObject};
///
/// let maps = map_members(Arc::new(DynamicObject::new()));
/// assert!(maps.mappings().is_empty());
/// ```
pub fn map_members(source: SharedSource) -> MemberMaps {
    MemberMaps::new(source)
}
