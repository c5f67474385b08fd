// Copyright 2025 Cowboy AI, LLC.

//! Member surfaces - the classified public members of a source object

use serde::{Deserialize, Serialize};

/// Category of a property on a source object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKind {
    /// Accessor with a getter only
    ReadOnly,
    /// Accessor with a setter only
    WriteOnly,
    /// Accessor with both getter and setter
    ReadWrite,
    /// Plain data attribute, readable and writable
    Attribute,
}

impl PropertyKind {
    /// Whether a forwarder for this property gets a getter
    pub fn has_getter(&self) -> bool {
        !matches!(self, PropertyKind::WriteOnly)
    }

    /// Whether a forwarder for this property gets a setter
    pub fn has_setter(&self) -> bool {
        !matches!(self, PropertyKind::ReadOnly)
    }
}

/// Kind of a discovered member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberKind {
    /// Callable method
    Method,
    /// Property of the given category
    Property(PropertyKind),
}

/// The classified public surface of a source object
///
/// The five name lists are expected to be disjoint. Consumers trust the
/// classification and do not re-validate it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSurface {
    /// Method names
    pub methods: Vec<String>,
    /// Getter-only properties
    pub read_only: Vec<String>,
    /// Setter-only properties
    pub write_only: Vec<String>,
    /// Getter and setter properties
    pub read_write: Vec<String>,
    /// Plain data attributes
    pub attributes: Vec<String>,
}

impl MemberSurface {
    /// Create an empty surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a method
    pub fn with_method(mut self, name: impl Into<String>) -> Self {
        self.methods.push(name.into());
        self
    }

    /// Add a property of the given category
    pub fn with_property(mut self, name: impl Into<String>, kind: PropertyKind) -> Self {
        let name = name.into();
        match kind {
            PropertyKind::ReadOnly => self.read_only.push(name),
            PropertyKind::WriteOnly => self.write_only.push(name),
            PropertyKind::ReadWrite => self.read_write.push(name),
            PropertyKind::Attribute => self.attributes.push(name),
        }
        self
    }

    /// Add a getter-only property
    pub fn with_read_only(self, name: impl Into<String>) -> Self {
        self.with_property(name, PropertyKind::ReadOnly)
    }

    /// Add a setter-only property
    pub fn with_write_only(self, name: impl Into<String>) -> Self {
        self.with_property(name, PropertyKind::WriteOnly)
    }

    /// Add a getter and setter property
    pub fn with_read_write(self, name: impl Into<String>) -> Self {
        self.with_property(name, PropertyKind::ReadWrite)
    }

    /// Add a plain data attribute
    pub fn with_attribute(self, name: impl Into<String>) -> Self {
        self.with_property(name, PropertyKind::Attribute)
    }

    /// All members in discovery order: methods, read-write, attributes,
    /// read-only, write-only
    pub fn members(&self) -> impl Iterator<Item = (&str, MemberKind)> + '_ {
        tagged(&self.methods, MemberKind::Method)
            .chain(tagged(
                &self.read_write,
                MemberKind::Property(PropertyKind::ReadWrite),
            ))
            .chain(tagged(
                &self.attributes,
                MemberKind::Property(PropertyKind::Attribute),
            ))
            .chain(tagged(
                &self.read_only,
                MemberKind::Property(PropertyKind::ReadOnly),
            ))
            .chain(tagged(
                &self.write_only,
                MemberKind::Property(PropertyKind::WriteOnly),
            ))
    }

    /// Look up how a name is classified
    pub fn kind_of(&self, name: &str) -> Option<MemberKind> {
        self.members().find(|(n, _)| *n == name).map(|(_, kind)| kind)
    }

    /// Total number of members
    pub fn len(&self) -> usize {
        self.methods.len()
            + self.read_only.len()
            + self.write_only.len()
            + self.read_write.len()
            + self.attributes.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn tagged(names: &[String], kind: MemberKind) -> impl Iterator<Item = (&str, MemberKind)> + '_ {
    names.iter().map(move |n| (n.as_str(), kind))
}

/// Whether a member name is private by convention
///
/// A leading or trailing underscore marks a member private. Private members
/// are never forwarded.
pub fn is_private_name(name: &str) -> bool {
    name.starts_with('_') || name.ends_with('_')
}
