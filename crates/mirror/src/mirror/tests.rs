// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Integration tests for the reflection adapter.

use super::*;
use crate::reflect::DynamicValue;
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Clone)]
struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
}
crate::impl_reflect!(Vector3 as "geometry.Vector3" { x, y, z });

#[derive(Clone)]
struct Pose {
    frame: String,
    position: Vector3,
    waypoints: Vec<Vector3>,
    parent: Option<String>,
}
crate::impl_reflect!(Pose as "geometry.Pose" { frame, position, waypoints, parent });

fn pose() -> Pose {
    Pose {
        frame: "map".to_string(),
        position: Vector3 {
            x: 1.0,
            y: 2.0,
            z: 3.0,
        },
        waypoints: vec![Vector3 {
            x: 0.0,
            y: 0.0,
            z: 1.0,
        }],
        parent: None,
    }
}

#[test]
fn test_struct_workflow() {
    let mirror = Mirror::new(pose());

    assert_eq!(mirror.name(), "geometry.Pose");
    assert_eq!(mirror.short_name(), "Pose");
    assert_eq!(mirror.child_count(), 4);
    assert_eq!(mirror.child_count(), mirror.children().len());
    assert_eq!(mirror.names(), vec!["frame", "position", "waypoints", "parent"]);
    assert_eq!(
        mirror.short_type_names(),
        vec!["String", "Vector3", "[Vector3]", "String?"]
    );

    let position = mirror.value_of("position").expect("position");
    assert_eq!(position.get_field("y").and_then(|v| v.as_f64()), Some(2.0));
    assert_eq!(mirror.get::<Option<String>>("parent"), Some(None));
}

#[test]
fn test_children_are_restartable() {
    let mirror = Mirror::new(pose());
    let first: Vec<_> = mirror.iter().map(|f| f.name().to_string()).collect();
    let second: Vec<_> = (&mirror).into_iter().map(|f| f.name().to_string()).collect();
    assert_eq!(first, second);
    assert_eq!(mirror[0].name(), "frame");
    assert_eq!(mirror.get_index(3).map(|f| f.name()), Some("parent"));
    assert!(mirror.get_index(4).is_none());
}

#[test]
fn test_snapshot_isolation() {
    let mut source = pose();
    let mirror = Mirror::new(source.clone());
    source.frame = "odom".to_string();
    source.position.x = 99.0;

    assert_eq!(mirror.get::<String>("frame").as_deref(), Some("map"));
    assert_eq!(mirror.subject().frame, "map");
    assert_eq!(
        mirror
            .value_of("position")
            .and_then(|p| p.get_field("x"))
            .and_then(|v| v.as_f64()),
        Some(1.0)
    );
}

#[test]
fn test_shared_subject_is_transparent() {
    let shared = Arc::new(pose());
    let mirror = Mirror::new(Arc::clone(&shared));
    assert_eq!(mirror.name(), "geometry.Pose");
    assert_eq!(mirror.child_count(), 4);
    assert_eq!(mirror.memory_size(), std::mem::size_of::<Arc<Pose>>());
    assert!(Arc::ptr_eq(mirror.subject(), &shared));

    let borrowed = Mirror::new(&*shared);
    assert_eq!(borrowed.names(), mirror.names());
}

#[test]
fn test_memory_size_is_shallow() {
    assert_eq!(Mirror::new(7u8).memory_size(), 1);
    assert_eq!(Mirror::new(pose()).memory_size(), std::mem::size_of::<Pose>());
    let big = vec![0u64; 1024];
    assert_eq!(Mirror::new(big).memory_size(), std::mem::size_of::<Vec<u64>>());
}

#[test]
fn test_leaf_value_has_no_children() {
    let mirror = Mirror::new(42i64);
    assert!(mirror.is_empty());
    assert_eq!(mirror.child_count(), 0);
    assert!(mirror.to_mapping().is_empty());
    assert_eq!(mirror.name(), "core.i64");
    assert_eq!(mirror.short_name(), "i64");
}

#[test]
fn test_classifiers() {
    let optional = Mirror::new(Some(vec![1u8]));
    assert!(optional.is_optional());
    assert!(!optional.is_array() && !optional.is_dictionary() && !optional.is_set());
    assert_eq!(optional.short_name(), "[u8]?");

    let array = Mirror::new(vec![Some(1u8)]);
    assert!(array.is_array());
    assert!(!array.is_optional());
    assert_eq!(array.short_name(), "[u8?]");

    let mut map = BTreeMap::new();
    map.insert("k".to_string(), 1i32);
    let dictionary = Mirror::new(map);
    assert!(dictionary.is_dictionary());
    assert_eq!(dictionary.wrapper(), Some(Wrapper::Dictionary));
    assert_eq!(
        dictionary.short_name(),
        "Dictionary<alloc.String,core.i32>"
    );

    let mut optional_values = HashMap::new();
    optional_values.insert("k".to_string(), Some(1i32));
    let nested = Mirror::new(optional_values);
    assert!(nested.is_dictionary());
    assert_eq!(nested.short_name(), "Dictionary<alloc.String,i32?>");

    let set = Mirror::new(HashSet::from([1u16]));
    assert!(set.is_set());

    let plain = Mirror::new(pose());
    assert!(!plain.is_optional() && !plain.is_array() && !plain.is_dictionary() && !plain.is_set());
    assert_eq!(plain.wrapper(), None);
}

#[test]
fn test_collection_children() {
    let some = Mirror::new(Some(3u32));
    assert_eq!(some.names(), vec!["some"]);
    assert_eq!(some.get::<u32>("some"), Some(3));

    let none = Mirror::new(None::<u32>);
    assert!(none.is_empty());

    let list = Mirror::new(vec!["a", "b"].into_iter().map(String::from).collect::<Vec<_>>());
    assert_eq!(list.names(), vec!["", ""]);
    assert_eq!(list[1].value(), &DynamicValue::String("b".into()));

    let tuple = Mirror::new((1u8, "x".to_string()));
    assert_eq!(tuple.child_count(), 2);
    assert_eq!(tuple.short_name(), "Tuple<core.u8,alloc.String>");
}

#[test]
fn test_expanded_rendering() {
    let config = RenderConfig {
        expand_collections: true,
        ..RenderConfig::default()
    };
    let mirror = Mirror::new(BTreeMap::<String, Vec<i32>>::new());
    assert_eq!(mirror.short_name_with(&config), "[String: [i32]]");
}

#[test]
fn test_shared_reads_across_threads() {
    let mirror = Mirror::new(pose());
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                assert_eq!(mirror.child_count(), 4);
                assert_eq!(mirror.get::<String>("frame").as_deref(), Some("map"));
            });
        }
    });
}

#[test]
fn test_into_inner_returns_subject() {
    let mirror = Mirror::new(pose());
    let descriptor = Arc::clone(mirror.descriptor());
    let subject = mirror.into_inner();
    assert_eq!(subject.frame, "map");
    assert_eq!(descriptor.fields().map(|f| f.len()), Some(4));
}
