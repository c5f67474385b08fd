// Copyright 2025 Cowboy AI, LLC.

mod fixtures;

use std::sync::Arc;

use cim_cooperate::{
    compose, map_members, CompositionInput, CooperateError, Cooperative, DynamicObject,
    MemberKind, PropertyKind,
};
use fixtures::{multiple_a, multiple_b, multiple_c, FakeDb, GenericFeatures, SpecificFeatures};
use pretty_assertions::assert_eq;
use serde_json::json;

fn repository(db: &Arc<FakeDb>) -> cim_cooperate::Composite {
    compose(vec![
        SpecificFeatures::new(db.clone()).into(),
        GenericFeatures::new(db.clone()).into(),
    ])
    .unwrap()
}

#[test]
fn members_of_a_nested_composite_are_forwarded_transitively() {
    let db = FakeDb::new();
    let audit = Arc::new(DynamicObject::new().with_method("audit", |_| Ok(json!("ok"))));

    let outer = compose(vec![repository(&db).into(), audit.into()]).unwrap();

    assert_eq!(outer.source_count(), 2);
    assert_eq!(outer.invoke("audit", &[]).unwrap(), json!("ok"));
    assert_eq!(
        outer.invoke("findById", &[json!(7)]).unwrap(),
        json!({ "query": { "_id": 7 } })
    );
    assert_eq!(outer.get("connected").unwrap(), json!(true));

    outer.set("rw", json!("nested")).unwrap();
    assert_eq!(outer.get("rw").unwrap(), json!("nested"));
}

/// The outer composite forwards to the inner one, which forwards again
#[test]
fn nesting_adds_a_forwarding_hop() {
    let db = FakeDb::new();
    let outer = compose(vec![repository(&db).into()]).unwrap();

    let forwarder = outer.descriptor("findById").unwrap();
    let inner = outer.source(forwarder.source_key()).unwrap();
    assert!(inner.type_name().ends_with("Composite"));
    assert_eq!(outer.source_count(), 1);
}

#[test]
fn nested_attributes_become_read_write_properties() {
    let db = FakeDb::new();
    let outer = compose(vec![repository(&db).into()]).unwrap();

    let public = outer.descriptor("public").unwrap();
    assert_eq!(public.kind(), MemberKind::Property(PropertyKind::ReadWrite));
    assert!(public.has_getter());
    assert!(public.has_setter());

    let connected = outer.descriptor("connected").unwrap();
    assert_eq!(connected.kind(), MemberKind::Property(PropertyKind::ReadOnly));
    assert_eq!(
        outer.set("connected", json!(false)),
        Err(CooperateError::NotWritable("connected".to_string()))
    );
}

#[test]
fn mapping_applies_to_a_composite_input() {
    let inner = Arc::new(
        compose(vec![multiple_a().into(), multiple_b().into(), multiple_c().into()]).unwrap(),
    );

    let mut maps = map_members(inner.clone());
    maps.map("one").unwrap().to("uno").unwrap().hide("tres").unwrap();

    let outer = compose(vec![maps.into()]).unwrap();
    let names: Vec<&str> = outer.member_names().collect();
    assert_eq!(names, vec!["uno", "two", "three"]);
    assert_eq!(outer.invoke("uno", &[]).unwrap(), json!("one"));

    // the inner composite is shared, not copied
    assert_eq!(inner.invoke("tres", &[]).unwrap(), json!("tres"));
}

#[test]
fn nested_collisions_are_detected() {
    let first = compose(vec![multiple_a().into(), multiple_b().into()]).unwrap();
    let second = compose(vec![multiple_b().into(), multiple_c().into()]).unwrap();

    let err = compose(vec![first.into(), CompositionInput::from(second)]).unwrap_err();
    assert_eq!(
        err,
        CooperateError::NamingCollision {
            source_name: "two".to_string(),
            exposed_name: "two".to_string(),
        }
    );
}

#[test]
fn errors_from_deep_sources_propagate_unchanged() {
    let failing = Arc::new(DynamicObject::new().with_getter("status", || {
        Err(CooperateError::invocation("status", "offline"))
    }));
    let inner = compose(vec![failing.into()]).unwrap();
    let outer = compose(vec![inner.into()]).unwrap();

    assert_eq!(
        outer.get("status"),
        Err(CooperateError::invocation("status", "offline"))
    );
}
