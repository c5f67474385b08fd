// Copyright 2025 Cowboy AI, LLC.

//! The composite - a registry of sources plus a forwarding table

use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use tracing::trace;

use crate::cooperative::{Cooperative, SharedSource};
use crate::errors::{CooperateError, CooperateResult};
use crate::identifiers::SourceKey;
use crate::surface::{MemberKind, MemberSurface, PropertyKind};

/// One forwarding member installed on a composite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardingMember {
    source_key: SourceKey,
    source_name: String,
    kind: MemberKind,
}

impl ForwardingMember {
    pub(crate) fn new(source_key: SourceKey, source_name: impl Into<String>, kind: MemberKind) -> Self {
        Self {
            source_key,
            source_name: source_name.into(),
            kind,
        }
    }

    /// Registry key of the source that serves this member
    pub fn source_key(&self) -> SourceKey {
        self.source_key
    }

    /// Member name on the source, which may differ from the exposed name
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Kind of the source member
    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    /// Whether this forwarder is a method
    pub fn is_method(&self) -> bool {
        matches!(self.kind, MemberKind::Method)
    }

    /// Whether this forwarder has a getter
    pub fn has_getter(&self) -> bool {
        matches!(self.kind, MemberKind::Property(kind) if kind.has_getter())
    }

    /// Whether this forwarder has a setter
    pub fn has_setter(&self) -> bool {
        matches!(self.kind, MemberKind::Property(kind) if kind.has_setter())
    }
}

/// The object produced by composition
///
/// A composite owns no state of its own beyond handles to its sources and
/// the table of forwarding members. Its shape is fixed once built; every
/// call is looked up by exposed name and forwarded to the owning source.
///
/// Composites only come out of the engine:
///
/// ```compile_fail
/// let composite = cim_cooperate::Composite::default();
/// ```
pub struct Composite {
    sources: Vec<SharedSource>,
    members: IndexMap<String, ForwardingMember>,
}

impl Composite {
    pub(crate) fn new() -> Self {
        Self {
            sources: Vec::new(),
            members: IndexMap::new(),
        }
    }

    /// Key the next registered source will receive
    pub(crate) fn next_key(&self) -> SourceKey {
        SourceKey::from_index(self.sources.len())
    }

    /// Register a source together with the forwarders already resolved for it
    pub(crate) fn commit(
        &mut self,
        source: SharedSource,
        members: IndexMap<String, ForwardingMember>,
    ) -> SourceKey {
        let key = self.next_key();
        self.sources.push(source);
        self.members.extend(members);
        key
    }

    /// Call a forwarded method
    ///
    /// # Errors
    ///
    /// `MemberNotFound` for unknown names, `NotCallable` for accessors, or
    /// whatever the source method itself returns.
    pub fn invoke(&self, name: &str, args: &[Value]) -> CooperateResult<Value> {
        let member = self.member(name)?;
        if !member.is_method() {
            return Err(CooperateError::NotCallable(name.to_string()));
        }

        trace!(member = name, source = %member.source_key, "forwarding call");
        self.source_of(member).invoke(&member.source_name, args)
    }

    /// Read a forwarded property
    ///
    /// # Errors
    ///
    /// `MemberNotFound` for unknown names, `NotReadable` for methods and
    /// setter-only properties, or whatever the source getter returns.
    pub fn get(&self, name: &str) -> CooperateResult<Value> {
        let member = self.member(name)?;
        if !member.has_getter() {
            return Err(CooperateError::NotReadable(name.to_string()));
        }

        self.source_of(member).get(&member.source_name)
    }

    /// Write a forwarded property
    ///
    /// # Errors
    ///
    /// `MemberNotFound` for unknown names, `NotWritable` for methods and
    /// getter-only properties, or whatever the source setter returns.
    pub fn set(&self, name: &str, value: Value) -> CooperateResult<()> {
        let member = self.member(name)?;
        if !member.has_setter() {
            return Err(CooperateError::NotWritable(name.to_string()));
        }

        self.source_of(member).set(&member.source_name, value)
    }

    /// Check whether a member is exposed under `name`
    pub fn has_member(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// Forwarding member exposed under `name`
    pub fn descriptor(&self, name: &str) -> Option<&ForwardingMember> {
        self.members.get(name)
    }

    /// Exposed member names, in install order
    pub fn member_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.members.keys().map(String::as_str)
    }

    /// Iterate over exposed names and their forwarders
    pub fn members(&self) -> impl Iterator<Item = (&str, &ForwardingMember)> + '_ {
        self.members.iter().map(|(name, member)| (name.as_str(), member))
    }

    /// Source registered under `key`
    pub fn source(&self, key: SourceKey) -> Option<&SharedSource> {
        self.sources.get(key.index())
    }

    /// Registered sources, in input order
    pub fn sources(&self) -> impl Iterator<Item = (SourceKey, &SharedSource)> + '_ {
        self.sources
            .iter()
            .enumerate()
            .map(|(index, source)| (SourceKey::from_index(index), source))
    }

    /// Number of registered sources
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Number of exposed members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if nothing is exposed
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn member(&self, name: &str) -> CooperateResult<&ForwardingMember> {
        self.members
            .get(name)
            .ok_or_else(|| CooperateError::MemberNotFound(name.to_string()))
    }

    fn source_of(&self, member: &ForwardingMember) -> &SharedSource {
        // keys are only minted by `commit`, which pushes the source first
        &self.sources[member.source_key.index()]
    }
}

impl Cooperative for Composite {
    /// Forwarders classified by their accessors: a forwarded attribute is
    /// reported as read-write.
    fn surface(&self) -> MemberSurface {
        let mut surface = MemberSurface::new();
        for (name, member) in &self.members {
            let kind = match member.kind {
                MemberKind::Method => MemberKind::Method,
                MemberKind::Property(PropertyKind::Attribute) => {
                    MemberKind::Property(PropertyKind::ReadWrite)
                }
                other => other,
            };
            surface = match kind {
                MemberKind::Method => surface.with_method(name.clone()),
                MemberKind::Property(kind) => surface.with_property(name.clone(), kind),
            };
        }
        surface
    }

    fn invoke(&self, method: &str, args: &[Value]) -> CooperateResult<Value> {
        Composite::invoke(self, method, args)
    }

    fn get(&self, property: &str) -> CooperateResult<Value> {
        Composite::get(self, property)
    }

    fn set(&self, property: &str, value: Value) -> CooperateResult<()> {
        Composite::set(self, property, value)
    }
}

impl fmt::Debug for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sources: Vec<&str> = self.sources.iter().map(|s| s.type_name()).collect();
        let members: Vec<&str> = self.member_names().collect();
        f.debug_struct("Composite")
            .field("sources", &sources)
            .field("members", &members)
            .finish()
    }
}
