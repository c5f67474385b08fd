// Copyright 2025 Cowboy AI, LLC.

//! `DynamicObject` - an ad-hoc source assembled from closures and values

use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::cooperative::Cooperative;
use crate::errors::{CooperateError, CooperateResult};
use crate::surface::MemberSurface;

type MethodFn = Arc<dyn Fn(&[Value]) -> CooperateResult<Value> + Send + Sync>;
type GetterFn = Arc<dyn Fn() -> CooperateResult<Value> + Send + Sync>;
type SetterFn = Arc<dyn Fn(Value) -> CooperateResult<()> + Send + Sync>;

#[derive(Clone)]
enum Slot {
    Method(MethodFn),
    Accessor {
        getter: Option<GetterFn>,
        setter: Option<SetterFn>,
    },
    Attribute,
}

/// A source object built member by member
///
/// Methods and accessors are closures; attributes are plain values stored
/// inside the object. Members are discovered in the order they were added.
///
/// ```
/// use cim_cooperate::{Cooperative, DynamicObject};
/// use serde_json::json;
///
/// let db = DynamicObject::new()
///     .with_attribute("connected", json!(true))
///     .with_method("query", |args| Ok(json!({ "query": args.first().cloned() })));
///
/// assert_eq!(db.get("connected").unwrap(), json!(true));
/// assert_eq!(db.invoke("query", &[json!(7)]).unwrap(), json!({ "query": 7 }));
/// ```
#[derive(Default)]
pub struct DynamicObject {
    slots: IndexMap<String, Slot>,
    values: RwLock<IndexMap<String, Value>>,
}

impl DynamicObject {
    /// Create an object with no members
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a method
    pub fn with_method<F>(mut self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&[Value]) -> CooperateResult<Value> + Send + Sync + 'static,
    {
        let name = name.into();
        self.forget_value(&name);
        self.slots.insert(name, Slot::Method(Arc::new(method)));
        self
    }

    /// Add a plain data attribute with an initial value
    pub fn with_attribute(mut self, name: impl Into<String>, value: Value) -> Self {
        let name = name.into();
        self.slots.insert(name.clone(), Slot::Attribute);
        self.values_mut().insert(name, value);
        self
    }

    /// Add (or complete) an accessor with a getter
    pub fn with_getter<G>(mut self, name: impl Into<String>, getter: G) -> Self
    where
        G: Fn() -> CooperateResult<Value> + Send + Sync + 'static,
    {
        if let Slot::Accessor { getter: slot, .. } = self.accessor_slot(name.into()) {
            *slot = Some(Arc::new(getter));
        }
        self
    }

    /// Add (or complete) an accessor with a setter
    pub fn with_setter<S>(mut self, name: impl Into<String>, setter: S) -> Self
    where
        S: Fn(Value) -> CooperateResult<()> + Send + Sync + 'static,
    {
        if let Slot::Accessor { setter: slot, .. } = self.accessor_slot(name.into()) {
            *slot = Some(Arc::new(setter));
        }
        self
    }

    /// Add an accessor with both getter and setter
    pub fn with_accessor<G, S>(self, name: impl Into<String>, getter: G, setter: S) -> Self
    where
        G: Fn() -> CooperateResult<Value> + Send + Sync + 'static,
        S: Fn(Value) -> CooperateResult<()> + Send + Sync + 'static,
    {
        let name = name.into();
        self.with_getter(name.clone(), getter).with_setter(name, setter)
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the object has no members
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn accessor_slot(&mut self, name: String) -> &mut Slot {
        self.forget_value(&name);
        let slot = self.slots.entry(name).or_insert(Slot::Accessor {
            getter: None,
            setter: None,
        });
        if !matches!(slot, Slot::Accessor { .. }) {
            *slot = Slot::Accessor {
                getter: None,
                setter: None,
            };
        }
        slot
    }

    fn forget_value(&mut self, name: &str) {
        self.values_mut().shift_remove(name);
    }

    fn values_mut(&mut self) -> &mut IndexMap<String, Value> {
        // values are replaced whole, so a poisoned map is still consistent
        self.values.get_mut().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Cooperative for DynamicObject {
    fn surface(&self) -> MemberSurface {
        let mut surface = MemberSurface::new();
        for (name, slot) in &self.slots {
            let name = name.clone();
            match slot {
                Slot::Method(_) => surface.methods.push(name),
                Slot::Attribute => surface.attributes.push(name),
                Slot::Accessor { getter, setter } => match (getter.is_some(), setter.is_some()) {
                    (true, true) => surface.read_write.push(name),
                    (true, false) => surface.read_only.push(name),
                    (false, true) => surface.write_only.push(name),
                    (false, false) => {}
                },
            }
        }
        surface
    }

    fn invoke(&self, method: &str, args: &[Value]) -> CooperateResult<Value> {
        match self.slots.get(method) {
            Some(Slot::Method(f)) => f(args),
            Some(_) => Err(CooperateError::NotCallable(method.to_string())),
            None => Err(CooperateError::MemberNotFound(method.to_string())),
        }
    }

    fn get(&self, property: &str) -> CooperateResult<Value> {
        match self.slots.get(property) {
            Some(Slot::Attribute) => {
                let values = self.values.read().map_err(|_| {
                    CooperateError::invocation(property, "attribute storage is poisoned")
                })?;
                Ok(values.get(property).cloned().unwrap_or(Value::Null))
            }
            Some(Slot::Accessor {
                getter: Some(getter),
                ..
            }) => getter(),
            Some(_) => Err(CooperateError::NotReadable(property.to_string())),
            None => Err(CooperateError::MemberNotFound(property.to_string())),
        }
    }

    fn set(&self, property: &str, value: Value) -> CooperateResult<()> {
        match self.slots.get(property) {
            Some(Slot::Attribute) => {
                let mut values = self.values.write().map_err(|_| {
                    CooperateError::invocation(property, "attribute storage is poisoned")
                })?;
                values.insert(property.to_string(), value);
                Ok(())
            }
            Some(Slot::Accessor {
                setter: Some(setter),
                ..
            }) => setter(value),
            Some(_) => Err(CooperateError::NotWritable(property.to_string())),
            None => Err(CooperateError::MemberNotFound(property.to_string())),
        }
    }
}

impl fmt::Debug for DynamicObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicObject")
            .field("surface", &self.surface())
            .finish()
    }
}
