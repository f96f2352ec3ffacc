// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::uninlined_format_args)] // Test/bench code readability over pedantic
#![allow(clippy::float_cmp)] // Test assertions with constants
#![allow(clippy::doc_markdown)] // Test documentation
#![allow(clippy::missing_panics_doc)] // Tests/examples panic on failure
#![allow(clippy::missing_errors_doc)] // Test documentation
#![allow(clippy::items_after_statements)] // Test helpers
#![allow(clippy::module_name_repetitions)] // Test modules
#![allow(clippy::too_many_lines)] // Example/test code
#![allow(clippy::wildcard_imports)] // Test utility imports
#![allow(clippy::redundant_closure_for_method_calls)] // Test code clarity
#![allow(clippy::similar_names)] // Test variable naming
#![allow(clippy::needless_pass_by_value)] // Test functions
#![allow(clippy::must_use_candidate)] // Test functions

//! End-to-end reflection tests through the public API
//!
//! Covers user structs registered with `impl_reflect!`, a hand-written
//! `Reflect` implementation for an enum, typed lookup and property-list
//! persistence.

use mirror::{
    impl_reflect, DynamicValue, FromDynamicValue, Mirror, MirrorError, RawField, Reflect,
    TypeDescriptor, TypeKind,
};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Operating mode, reflected by hand as an opaque leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    Idle,
    Active,
}

impl Reflect for Mode {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        Arc::new(TypeDescriptor::new(
            "fleet.Mode",
            TypeKind::Opaque,
            std::mem::size_of::<Mode>(),
        ))
    }

    fn to_dynamic(&self) -> DynamicValue {
        match self {
            Mode::Idle => DynamicValue::Enum(0, "Idle".to_string()),
            Mode::Active => DynamicValue::Enum(1, "Active".to_string()),
        }
    }
}

impl FromDynamicValue for Mode {
    fn from_dynamic(value: &DynamicValue) -> Result<Self, MirrorError> {
        match value.enum_variant() {
            Some("Idle") => Ok(Mode::Idle),
            Some("Active") => Ok(Mode::Active),
            _ => Err(MirrorError::TypeMismatch {
                expected: "fleet.Mode".to_string(),
                got: value.kind_name().to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
struct Vehicle {
    id: u64,
    name: String,
    mode: Mode,
    speeds: Vec<f32>,
    depot: Option<String>,
    counters: BTreeMap<String, u32>,
}
impl_reflect!(Vehicle as "fleet.Vehicle" { id, name, mode, speeds, depot, counters });

/// Registered without an explicit name: qualified by module path.
struct Depot {
    code: char,
    vehicles: Vec<Vehicle>,
}
impl_reflect!(Depot { code, vehicles });

/// Tuple-like wrapper reflected by hand with unlabeled members.
struct Pair(u8, String);

impl Reflect for Pair {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        Arc::new(TypeDescriptor::struct_type("fleet.Pair", Vec::new(), 0))
    }

    fn reflect_fields(&self) -> Vec<RawField> {
        vec![RawField::unlabeled(&self.0), RawField::unlabeled(&self.1)]
    }

    fn to_dynamic(&self) -> DynamicValue {
        DynamicValue::Tuple(vec![self.0.to_dynamic(), self.1.to_dynamic()])
    }
}

fn vehicle() -> Vehicle {
    let mut counters = BTreeMap::new();
    counters.insert("trips".to_string(), 14);
    Vehicle {
        id: 7,
        name: "tram-7".to_string(),
        mode: Mode::Active,
        speeds: vec![12.5, 14.0],
        depot: Some("east".to_string()),
        counters,
    }
}

#[test]
fn test_vehicle_fields() {
    let mirror = mirror::reflect(vehicle());

    assert_eq!(mirror.name(), "fleet.Vehicle");
    assert_eq!(mirror.short_name(), "Vehicle");
    assert_eq!(
        mirror.names(),
        vec!["id", "name", "mode", "speeds", "depot", "counters"]
    );
    assert_eq!(
        mirror.short_type_names(),
        vec![
            "u64",
            "String",
            "Mode",
            "[f32]",
            "String?",
            "Dictionary<alloc.String,core.u32>"
        ]
    );
    assert_eq!(mirror.values().len(), mirror.child_count());
    assert_eq!(mirror.types().len(), mirror.child_count());
}

#[test]
fn test_typed_lookup() {
    let mirror = Mirror::new(vehicle());

    assert_eq!(mirror.get::<u64>("id"), Some(7));
    assert_eq!(mirror.get::<Mode>("mode"), Some(Mode::Active));
    assert_eq!(mirror.get::<Vec<f32>>("speeds"), Some(vec![12.5, 14.0]));
    assert_eq!(
        mirror.get::<Option<String>>("depot"),
        Some(Some("east".to_string()))
    );
    let counters: HashMap<String, u32> = mirror.get("counters").expect("counters");
    assert_eq!(counters.get("trips"), Some(&14));

    // wrong type and missing field both collapse to None
    assert_eq!(mirror.get::<Mode>("name"), None);
    assert_eq!(mirror.get::<u64>("odometer"), None);
    assert!(matches!(
        mirror.try_get::<Mode>("name"),
        Err(MirrorError::TypeMismatch { .. })
    ));
    assert_eq!(
        mirror.try_get::<u64>("odometer"),
        Err(MirrorError::FieldNotFound("odometer".to_string()))
    );
}

#[test]
fn test_nested_values_are_snapshots() {
    let depot = Depot {
        code: 'E',
        vehicles: vec![vehicle(), vehicle()],
    };
    let mirror = Mirror::new(depot);

    assert_eq!(mirror.name(), "reflection_workflow.Depot");
    assert_eq!(mirror.short_name(), "Depot");
    assert_eq!(mirror.short_type_names(), vec!["char", "[Vehicle]"]);

    let vehicles = mirror
        .value_of("vehicles")
        .and_then(|v| v.as_sequence())
        .expect("vehicles");
    assert_eq!(vehicles.len(), 2);
    assert_eq!(
        vehicles[0].get_field("mode").and_then(|m| m.enum_variant()),
        Some("Active")
    );
}

#[test]
fn test_field_item_display() {
    let mirror = Mirror::new(vehicle());
    let rendered: Vec<String> = mirror.iter().map(|f| f.to_string()).collect();
    assert_eq!(rendered[0], "id: u64 = 7");
    assert_eq!(rendered[1], "name: String = \"tram-7\"");
    assert_eq!(rendered[2], "mode: Mode = Active");
    assert_eq!(rendered[4], "depot: String? = Some(\"east\")");
}

#[test]
fn test_unlabeled_members() {
    let mirror = Mirror::new(Pair(3, "b".to_string()));
    assert_eq!(mirror.names(), vec!["", ""]);
    assert_eq!(mirror.get::<u8>(""), Some(3));
    assert!(mirror.to_mapping().len() == 1);
}

#[test]
fn test_opaque_leaf() {
    let mirror = Mirror::new(Mode::Idle);
    assert!(mirror.is_empty());
    assert_eq!(mirror.short_name(), "Mode");
    assert!(!mirror.is_optional() && !mirror.is_array());
    assert_eq!(mirror.memory_size(), std::mem::size_of::<Mode>());
}

#[cfg(feature = "property-list")]
#[test]
fn test_property_list_round_trip() {
    use mirror::PropertyList;

    let mut subject = vehicle();
    subject.depot = None;
    let plist = Mirror::new(subject).to_property_list();

    assert!(plist.get("depot").is_none());
    assert_eq!(plist.get("mode").and_then(|v| v.as_str()), Some("Active"));
    assert_eq!(plist.get("id").and_then(|v| v.as_u64()), Some(7));
    assert_eq!(
        plist
            .get("counters")
            .and_then(|c| c.get("trips"))
            .and_then(|v| v.as_u64()),
        Some(14)
    );

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("vehicle.json");
    plist.save(&path).expect("save");
    assert_eq!(PropertyList::load(&path).expect("load"), plist);
}
