// Copyright 2025 Cowboy AI, LLC.

//! Shared source objects for integration tests.
//! Each fixture implements `Cooperative` by hand, the way an application type would.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, RwLock};

use cim_cooperate::{CooperateError, CooperateResult, Cooperative, DynamicObject, MemberSurface};
use serde_json::{json, Value};

fn not_found(name: &str) -> CooperateError {
    CooperateError::MemberNotFound(name.to_string())
}

fn first_arg(args: &[Value]) -> Value {
    args.first().cloned().unwrap_or(Value::Null)
}

/// In-memory stand-in for a database handle
#[derive(Debug)]
pub struct FakeDb {
    pub connected: bool,
    pub inserted: Mutex<Vec<Value>>,
    pub queries: Mutex<Vec<Value>>,
}

impl FakeDb {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            connected: true,
            inserted: Mutex::new(Vec::new()),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn insert(&self, data: Value) {
        self.inserted.lock().unwrap().push(data);
    }

    pub fn query(&self, query: Value) -> Value {
        self.queries.lock().unwrap().push(query.clone());
        json!({ "query": query })
    }
}

/// Region-specific sales queries plus a public attribute
pub struct SpecificFeatures {
    db: Arc<FakeDb>,
    public: RwLock<Value>,
}

impl SpecificFeatures {
    pub fn new(db: Arc<FakeDb>) -> Arc<Self> {
        Arc::new(Self {
            db,
            public: RwLock::new(json!("public")),
        })
    }
}

impl Cooperative for SpecificFeatures {
    fn surface(&self) -> MemberSurface {
        MemberSurface::new()
            .with_method("getSalesByRegion")
            .with_method("formatQuery_")
            .with_attribute("_db")
            .with_attribute("public")
    }

    fn invoke(&self, method: &str, args: &[Value]) -> CooperateResult<Value> {
        match method {
            "getSalesByRegion" => Ok(self.db.query(json!({ "regionName": first_arg(args) }))),
            "formatQuery_" => Ok(json!({ "region": first_arg(args) })),
            _ => Err(not_found(method)),
        }
    }

    fn get(&self, property: &str) -> CooperateResult<Value> {
        match property {
            "public" => Ok(self.public.read().unwrap().clone()),
            "_db" => Ok(json!({ "connected": self.db.connected })),
            _ => Err(not_found(property)),
        }
    }

    fn set(&self, property: &str, value: Value) -> CooperateResult<()> {
        match property {
            "public" => {
                *self.public.write().unwrap() = value;
                Ok(())
            }
            _ => Err(not_found(property)),
        }
    }
}

/// Generic repository features with every accessor category
pub struct GenericFeatures {
    generic_db: Arc<FakeDb>,
    rw: RwLock<Value>,
    wo: RwLock<Value>,
}

impl GenericFeatures {
    pub fn new(db: Arc<FakeDb>) -> Arc<Self> {
        Arc::new(Self {
            generic_db: db,
            rw: RwLock::new(json!("read-write")),
            wo: RwLock::new(json!("write-only")),
        })
    }

    /// Direct look at the write-only backing value
    pub fn write_only_value(&self) -> Value {
        self.wo.read().unwrap().clone()
    }
}

impl Cooperative for GenericFeatures {
    fn surface(&self) -> MemberSurface {
        MemberSurface::new()
            .with_method("insert")
            .with_method("findById")
            .with_read_only("connected")
            .with_read_write("rw")
            .with_write_only("wo")
            .with_attribute("_genericDb")
            .with_attribute("_rw")
            .with_attribute("_wo")
    }

    fn invoke(&self, method: &str, args: &[Value]) -> CooperateResult<Value> {
        match method {
            "insert" => {
                self.generic_db.insert(first_arg(args));
                Ok(Value::Null)
            }
            "findById" => Ok(self.generic_db.query(json!({ "_id": first_arg(args) }))),
            _ => Err(not_found(method)),
        }
    }

    fn get(&self, property: &str) -> CooperateResult<Value> {
        match property {
            "connected" => Ok(json!(self.generic_db.connected)),
            "rw" | "_rw" => Ok(self.rw.read().unwrap().clone()),
            "_wo" => Ok(self.wo.read().unwrap().clone()),
            "wo" => Err(CooperateError::NotReadable(property.to_string())),
            _ => Err(not_found(property)),
        }
    }

    fn set(&self, property: &str, value: Value) -> CooperateResult<()> {
        match property {
            "rw" | "_rw" => {
                *self.rw.write().unwrap() = value;
                Ok(())
            }
            "wo" | "_wo" => {
                *self.wo.write().unwrap() = value;
                Ok(())
            }
            "connected" => Err(CooperateError::NotWritable(property.to_string())),
            _ => Err(not_found(property)),
        }
    }
}

/// Defines methods that collide with both feature sets
pub struct OverlappingMethod {
    db: Arc<FakeDb>,
}

impl OverlappingMethod {
    pub fn new(db: Arc<FakeDb>) -> Arc<Self> {
        Arc::new(Self { db })
    }
}

impl Cooperative for OverlappingMethod {
    fn surface(&self) -> MemberSurface {
        MemberSurface::new()
            .with_method("getSalesByRegion")
            .with_method("findById")
    }

    fn invoke(&self, method: &str, args: &[Value]) -> CooperateResult<Value> {
        match method {
            "getSalesByRegion" => Ok(self.db.query(json!({ "regionName": first_arg(args) }))),
            "findById" => Ok(json!({ "overlapping": first_arg(args) })),
            _ => Err(not_found(method)),
        }
    }
}

/// Defines a read-only `rw` that collides with `GenericFeatures::rw`
pub fn overlapping_props() -> Arc<DynamicObject> {
    Arc::new(DynamicObject::new().with_getter("rw", || Ok(json!("uh oh"))))
}

/// Defines a method `wo` that collides with `GenericFeatures::wo`
pub fn overlapping_write_only_method() -> Arc<DynamicObject> {
    Arc::new(DynamicObject::new().with_method("wo", |_| Ok(json!("method"))))
}

/// Defines a plain `wo` attribute that collides with `GenericFeatures::wo`
pub fn overlapping_write_only_attribute() -> Arc<DynamicObject> {
    Arc::new(DynamicObject::new().with_attribute("wo", json!("attribute")))
}

/// Defines a setter-only `public` that collides with `SpecificFeatures::public`
pub fn overlapping_attribute_setter() -> Arc<DynamicObject> {
    Arc::new(DynamicObject::new().with_setter("public", |_| Ok(())))
}

/// Defines a plain `public` attribute that collides with `SpecificFeatures::public`
pub fn overlapping_attribute() -> Arc<DynamicObject> {
    Arc::new(DynamicObject::new().with_attribute("public", json!("other")))
}

/// Source whose methods answer with their own name
pub fn named_methods(names: &[&str]) -> Arc<DynamicObject> {
    let object = names.iter().fold(DynamicObject::new(), |object, name| {
        let reply = name.to_string();
        object.with_method(*name, move |_| Ok(json!(reply.clone())))
    });
    Arc::new(object)
}

pub fn multiple_a() -> Arc<DynamicObject> {
    named_methods(&["one"])
}

pub fn multiple_b() -> Arc<DynamicObject> {
    named_methods(&["two"])
}

pub fn multiple_c() -> Arc<DynamicObject> {
    named_methods(&["three", "tres"])
}

pub fn multiple_collision() -> Arc<DynamicObject> {
    named_methods(&["three", "trois"])
}

/// Source carrying a test value, for mapping tests
pub fn test_class(unique_value: &str) -> Arc<DynamicObject> {
    let prefix = unique_value.to_string();
    Arc::new(
        DynamicObject::new()
            .with_method("getItem", move |args| {
                Ok(json!(format!("{}-{}", prefix, first_arg(args))))
            })
            .with_attribute("uniqueValue_", json!(unique_value))
            .with_getter("uniqueValue", {
                let value = unique_value.to_string();
                move || Ok(json!(value.clone()))
            }),
    )
}
