// Copyright 2025 Cowboy AI, LLC.

//! # CIM Cooperate
//!
//! Object composition by delegation.
//!
//! Independently written source objects are merged into one composite that
//! exposes the union of their public methods and properties and forwards
//! every call to the source that owns it. Sources share no state and no
//! common ancestor; the composite holds only handles to them.
//!
//! - **Cooperative**: trait a source implements to report its member surface
//!   and serve forwarded calls
//! - **MemberMaps**: per-source rename/hide table, built fluently
//! - **compose**: the engine, with first-writer-wins collision detection
//! - **Composite**: the result, itself cooperative so composites nest
//! - **DynamicObject**: a ready-made source assembled from closures and values
//!
//! ```
//! use std::sync::Arc;
//! use cim_cooperate::{compose, map_members, CompositionInput, DynamicObject};
//! use serde_json::json;
//!
//! let generic = Arc::new(
//!     DynamicObject::new()
//!         .with_method("findById", |args| Ok(json!({ "_id": args.first().cloned() })))
//!         .with_getter("connected", || Ok(json!(true))),
//! );
//! let overlapping = Arc::new(
//!     DynamicObject::new().with_method("findById", |_| Ok(json!(null))),
//! );
//!
//! // both sources define findById
//! let err = compose(vec![generic.clone().into(), overlapping.clone().into()]).unwrap_err();
//! assert!(err.is_collision());
//!
//! // renaming resolves the collision
//! let mut maps = map_members(overlapping);
//! maps.map("findById")?.to("findLegacyById")?;
//! let repo = compose(vec![CompositionInput::from(generic), maps.into()])?;
//!
//! assert_eq!(repo.invoke("findById", &[json!(1)])?, json!({ "_id": 1 }));
//! assert_eq!(repo.get("connected")?, json!(true));
//! assert!(repo.has_member("findLegacyById"));
//! # Ok::<(), cim_cooperate::CooperateError>(())
//! ```

#![warn(missing_docs)]

mod cooperative;
mod errors;
mod identifiers;
mod member_maps;
mod object;
mod surface;
pub mod composition;

pub use composition::{
    compose, compose_with, ComposeOptions, Composer, Composite, CompositionInput,
    ForwardingMember,
};
pub use cooperative::{Cooperative, SharedSource};
pub use errors::{CooperateError, CooperateResult};
pub use identifiers::SourceKey;
pub use member_maps::{map_members, MappedMember, MemberMap, MemberMaps};
pub use object::DynamicObject;
pub use surface::{is_private_name, MemberKind, MemberSurface, PropertyKind};
