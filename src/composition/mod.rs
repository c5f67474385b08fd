// Copyright 2025 Cowboy AI, LLC.

//! Composition module for merging independent sources into one composite
//!
//! The engine walks its inputs in order, introspects each source, applies
//! per-source rename/hide tables and installs collision-checked forwarding
//! members on a [`Composite`]. A composite is itself [`Cooperative`](crate::Cooperative),
//! so composites nest; every level adds one forwarding hop.

pub mod composite;
pub mod engine;
pub mod input;
pub mod options;

pub use composite::{Composite, ForwardingMember};
pub use engine::{compose, compose_with, Composer};
pub use input::CompositionInput;
pub use options::ComposeOptions;
