// Copyright 2025 Cowboy AI, LLC.

//! Repository composition example
//!
//! This example demonstrates:
//! - Composing a generic repository with region-specific queries
//! - Resolving a naming collision by renaming one member
//! - Hiding members through compose options
//! - Nesting one composite inside another

use std::sync::{Arc, Mutex};

use anyhow::Result;
use cim_cooperate::{
    compose, compose_with, map_members, ComposeOptions, CooperateError, CooperateResult,
    Cooperative, MemberSurface,
};
use serde_json::{json, Value};
use tracing::info;

/// In-memory orders table shared by both feature sets
#[derive(Default)]
struct Orders {
    rows: Mutex<Vec<Value>>,
}

impl Orders {
    fn rows(&self) -> CooperateResult<std::sync::MutexGuard<'_, Vec<Value>>> {
        self.rows
            .lock()
            .map_err(|_| CooperateError::invocation("orders", "table lock poisoned"))
    }
}

/// Generic CRUD over the orders table
struct GenericRepository {
    orders: Arc<Orders>,
}

impl Cooperative for GenericRepository {
    fn surface(&self) -> MemberSurface {
        MemberSurface::new()
            .with_method("insert")
            .with_method("findById")
            .with_method("count")
            .with_read_only("connected")
    }

    fn invoke(&self, method: &str, args: &[Value]) -> CooperateResult<Value> {
        let arg = args.first().cloned().unwrap_or(Value::Null);
        match method {
            "insert" => {
                let mut rows = self.orders.rows()?;
                rows.push(arg);
                Ok(json!(rows.len() - 1))
            }
            "findById" => {
                let rows = self.orders.rows()?;
                let row = arg
                    .as_u64()
                    .and_then(|id| rows.get(id as usize))
                    .cloned()
                    .unwrap_or(Value::Null);
                Ok(row)
            }
            "count" => Ok(json!(self.orders.rows()?.len())),
            _ => Err(CooperateError::MemberNotFound(method.to_string())),
        }
    }

    fn get(&self, property: &str) -> CooperateResult<Value> {
        match property {
            "connected" => Ok(json!(true)),
            _ => Err(CooperateError::MemberNotFound(property.to_string())),
        }
    }
}

/// Region-specific reporting over the same table
struct SalesReports {
    orders: Arc<Orders>,
}

impl Cooperative for SalesReports {
    fn surface(&self) -> MemberSurface {
        MemberSurface::new()
            .with_method("getSalesByRegion")
            .with_method("count")
            .with_method("formatRegion_")
    }

    fn invoke(&self, method: &str, args: &[Value]) -> CooperateResult<Value> {
        let region = args.first().cloned().unwrap_or(Value::Null);
        match method {
            "getSalesByRegion" => {
                let rows = self.orders.rows()?;
                let total: f64 = rows
                    .iter()
                    .filter(|row| row["region"] == region)
                    .filter_map(|row| row["total"].as_f64())
                    .sum();
                Ok(json!({ "region": region, "total": total }))
            }
            "count" => {
                let rows = self.orders.rows()?;
                Ok(json!(rows.iter().filter(|row| row["region"] == region).count()))
            }
            "formatRegion_" => Ok(json!(format!("region:{}", region))),
            _ => Err(CooperateError::MemberNotFound(method.to_string())),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let orders = Arc::new(Orders::default());
    let generic = Arc::new(GenericRepository {
        orders: orders.clone(),
    });
    let reports = Arc::new(SalesReports {
        orders: orders.clone(),
    });

    // both sources define count
    match compose(vec![generic.clone().into(), reports.clone().into()]) {
        Ok(_) => anyhow::bail!("expected a naming collision"),
        Err(err) => info!(%err, "first attempt rejected"),
    }

    let mut report_maps = map_members(reports.clone());
    report_maps.map("count")?.to("countByRegion")?;
    let repo = compose(vec![generic.clone().into(), report_maps.into()])?;
    info!(members = ?repo.member_names().collect::<Vec<_>>(), "composed repository");

    repo.invoke("insert", &[json!({ "region": "north", "total": 120.0 })])?;
    repo.invoke("insert", &[json!({ "region": "south", "total": 80.5 })])?;
    repo.invoke("insert", &[json!({ "region": "north", "total": 30.0 })])?;

    info!(order = %repo.invoke("findById", &[json!(1)])?, "found order");
    info!(sales = %repo.invoke("getSalesByRegion", &[json!("north")])?, "north sales");
    info!(
        all = %repo.invoke("count", &[])?,
        north = %repo.invoke("countByRegion", &[json!("north")])?,
        "order counts"
    );

    // options apply to raw inputs only
    let read_only = compose_with(
        vec![generic.into(), reports.into()],
        ComposeOptions::from_json(r#"{ "hide": ["insert", "count"] }"#)?,
    )?;
    info!(
        members = ?read_only.member_names().collect::<Vec<_>>(),
        "read-only view"
    );

    // composites nest
    let audit = Arc::new(cim_cooperate::DynamicObject::new().with_method("audit", |_| {
        Ok(json!("audited"))
    }));
    let service = compose(vec![repo.into(), audit.into()])?;
    info!(
        connected = %service.get("connected")?,
        audit = %service.invoke("audit", &[])?,
        "service ready"
    );

    Ok(())
}
