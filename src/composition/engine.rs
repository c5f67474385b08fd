// Copyright 2025 Cowboy AI, LLC.

//! The composition engine
//!
//! Sources are processed one at a time, in input order. For each source the
//! engine introspects its surface, drops private members, applies the
//! rename/hide table and claims every exposed name. Members of one source
//! are staged and committed together, so a failed input leaves the
//! composite exactly as it was.

use indexmap::IndexMap;
use tracing::{debug, trace};

use super::composite::{Composite, ForwardingMember};
use super::input::CompositionInput;
use super::options::ComposeOptions;
use crate::errors::{CooperateError, CooperateResult};
use crate::member_maps::MemberMaps;
use crate::surface::is_private_name;

/// Incremental builder for a [`Composite`]
///
/// ```
/// use std::sync::Arc;
/// use cim_cooperate::{Composer, ComposeOptions, DynamicObject};
/// use serde_json::json;
///
/// let generic = Arc::new(DynamicObject::new().with_method("insert", |_| Ok(json!(null))));
/// let specific = Arc::new(
///     DynamicObject::new()
///         .with_method("getSalesByRegion", |args| Ok(json!({ "region": args.first().cloned() })))
///         .with_method("reset", |_| Ok(json!(null))),
/// );
///
/// let mut composer = Composer::with_options(ComposeOptions::new().hide("reset"))?;
/// composer.add(generic)?.add(specific)?;
/// let repo = composer.build();
///
/// assert!(repo.has_member("insert"));
/// assert!(!repo.has_member("reset"));
/// # Ok::<(), cim_cooperate::CooperateError>(())
/// ```
#[derive(Debug)]
pub struct Composer {
    options: ComposeOptions,
    composite: Composite,
}

impl Composer {
    /// Composer with no hidden names
    ///
    /// This is the only constructor that skips option validation, so there
    /// is no `Default` impl:
    ///
    /// ```compile_fail
    /// let composer = cim_cooperate::Composer::default();
    /// ```
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            options: ComposeOptions::new(),
            composite: Composite::new(),
        }
    }

    /// Composer applying `options` to every raw-object input
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the options are malformed
    pub fn with_options(options: ComposeOptions) -> CooperateResult<Self> {
        options.validate()?;
        Ok(Self {
            options,
            composite: Composite::new(),
        })
    }

    /// Add one input and install its forwarding members
    ///
    /// # Errors
    ///
    /// Returns `NamingCollision` if any exposed name of this input is
    /// already taken. Nothing from the failed input is installed.
    pub fn add(&mut self, input: impl Into<CompositionInput>) -> CooperateResult<&mut Self> {
        let maps = self.resolve(input.into())?;
        let key = self.composite.next_key();
        let surface = maps.source().surface();

        let mut staged: IndexMap<String, ForwardingMember> = IndexMap::new();
        for (source_name, kind) in surface.members() {
            if is_private_name(source_name) {
                trace!(member = source_name, source = %key, "skipping private member");
                continue;
            }

            let Some(exposed) = maps.exposed_name(source_name) else {
                trace!(member = source_name, source = %key, "skipping hidden member");
                continue;
            };

            self.claim(&staged, exposed, source_name)?;

            trace!(member = exposed, source_member = source_name, source = %key, ?kind, "installing forwarder");
            staged.insert(
                exposed.to_string(),
                ForwardingMember::new(key, source_name, kind),
            );
        }

        let installed = staged.len();
        let source = maps.into_source();
        let type_name = source.type_name();
        self.composite.commit(source, staged);

        debug!(source = %key, type_name, installed, "registered source");
        Ok(self)
    }

    /// Finish the composition
    pub fn build(self) -> Composite {
        debug!(
            sources = self.composite.source_count(),
            members = self.composite.len(),
            "composition complete"
        );
        self.composite
    }

    /// Turn an input into a (source, mapping table) pair
    fn resolve(&self, input: CompositionInput) -> CooperateResult<MemberMaps> {
        match input {
            CompositionInput::Mapped(maps) => Ok(maps),
            CompositionInput::Object(source) => {
                let mut maps = MemberMaps::new(source);
                for name in &self.options.hide {
                    maps.hide(name.as_str())?;
                }
                Ok(maps)
            }
        }
    }

    /// The one check every forwarder passes before it is installed
    fn claim(
        &self,
        staged: &IndexMap<String, ForwardingMember>,
        exposed: &str,
        source_name: &str,
    ) -> CooperateResult<()> {
        if self.composite.has_member(exposed) || staged.contains_key(exposed) {
            debug!(member = source_name, exposed, "naming collision");
            return Err(CooperateError::NamingCollision {
                source_name: source_name.to_string(),
                exposed_name: exposed.to_string(),
            });
        }
        Ok(())
    }
}

/// Compose inputs into one composite
///
/// Input order decides registry keys and precedence: the first input to
/// claim a name keeps it and a later claim fails the whole call.
///
/// # Errors
///
/// `NamingCollision` when two members resolve to the same exposed name.
/// No composite is returned on failure.
pub fn compose<I>(inputs: I) -> CooperateResult<Composite>
where
    I: IntoIterator<Item = CompositionInput>,
{
    compose_with(inputs, ComposeOptions::default())
}

/// Compose inputs with options applied to every raw-object input
///
/// # Errors
///
/// `InvalidArgument` for malformed options, `NamingCollision` when two
/// members resolve to the same exposed name.
pub fn compose_with<I>(inputs: I, options: ComposeOptions) -> CooperateResult<Composite>
where
    I: IntoIterator<Item = CompositionInput>,
{
    let mut composer = Composer::with_options(options)?;
    for input in inputs {
        composer.add(input)?;
    }
    Ok(composer.build())
}
