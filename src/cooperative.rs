// Copyright 2025 Cowboy AI, LLC.

//! The `Cooperative` trait - how a source object reports and serves its members

use serde_json::Value;
use std::sync::Arc;

use crate::errors::{CooperateError, CooperateResult};
use crate::surface::MemberSurface;

/// Trait for source objects that can take part in a composition
///
/// A cooperative object describes its own public surface and serves
/// dispatched calls by member name. Calls take `&self`; objects with
/// writable state use interior mutability, so the same object can be shared
/// by several composites.
///
/// # Example
///
/// ```
/// use cim_cooperate::{CooperateError, CooperateResult, Cooperative, MemberSurface};
/// use serde_json::{json, Value};
///
/// struct Clock;
///
/// impl Cooperative for Clock {
///     fn surface(&self) -> MemberSurface {
///         MemberSurface::new().with_method("now").with_read_only("zone")
///     }
///
///     fn invoke(&self, method: &str, _args: &[Value]) -> CooperateResult<Value> {
///         match method {
///             "now" => Ok(json!(0)),
///             _ => Err(CooperateError::MemberNotFound(method.to_string())),
///         }
///     }
///
///     fn get(&self, property: &str) -> CooperateResult<Value> {
///         match property {
///             "zone" => Ok(json!("UTC")),
///             _ => Err(CooperateError::MemberNotFound(property.to_string())),
///         }
///     }
/// }
/// ```
pub trait Cooperative: Send + Sync {
    /// Report the classified public members of this object
    fn surface(&self) -> MemberSurface;

    /// Call a method by name
    fn invoke(&self, method: &str, args: &[Value]) -> CooperateResult<Value> {
        let _ = args;
        Err(CooperateError::MemberNotFound(method.to_string()))
    }

    /// Read a property by name
    fn get(&self, property: &str) -> CooperateResult<Value> {
        Err(CooperateError::NotReadable(property.to_string()))
    }

    /// Write a property by name
    fn set(&self, property: &str, value: Value) -> CooperateResult<()> {
        let _ = value;
        Err(CooperateError::NotWritable(property.to_string()))
    }

    /// Get the name of this source type, for diagnostics
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Shared handle to a source object
pub type SharedSource = Arc<dyn Cooperative>;

impl<T: Cooperative + ?Sized> Cooperative for Arc<T> {
    fn surface(&self) -> MemberSurface {
        (**self).surface()
    }

    fn invoke(&self, method: &str, args: &[Value]) -> CooperateResult<Value> {
        (**self).invoke(method, args)
    }

    fn get(&self, property: &str) -> CooperateResult<Value> {
        (**self).get(property)
    }

    fn set(&self, property: &str, value: Value) -> CooperateResult<()> {
        (**self).set(property, value)
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}
