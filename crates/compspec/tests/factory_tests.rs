//! Factory behavior tests
//!
//! Exercises the public construction surface: the tag-keyed factory, the
//! enumerated path, and the pass-through/rejection properties.

use compspec::{construct, construct_kind, ComputerKind, FactoryError};
use proptest::prelude::*;

#[test]
fn scenario_pc() {
    let computer = construct("PC", "2 GB", "500 GB", "2.4 GHz").unwrap();
    assert_eq!(computer.kind(), ComputerKind::Pc);
    assert_eq!(
        (computer.memory(), computer.storage(), computer.processor()),
        ("2 GB", "500 GB", "2.4 GHz")
    );
}

#[test]
fn scenario_server() {
    let computer = construct("Server", "16 GB", "1 TB", "2.9 GHz").unwrap();
    assert_eq!(computer.kind(), ComputerKind::Server);
    assert_eq!(
        (computer.memory(), computer.storage(), computer.processor()),
        ("16 GB", "1 TB", "2.9 GHz")
    );
}

#[test]
fn scenario_unrecognized_laptop() {
    let err = construct("Laptop", "8 GB", "256 GB", "3.0 GHz").unwrap_err();
    assert_eq!(err.tag(), "Laptop");
}

#[test]
fn rejects_near_miss_tags() {
    for tag in ["", "pc", "server", "SERVER", " PC", "PC "] {
        let result = construct(tag, "1 GB", "1 GB", "1 GHz");
        assert!(result.is_err(), "tag {tag:?} should be rejected");
    }
}

#[test]
fn identical_inputs_give_equal_values() {
    let a = construct("PC", "2 GB", "500 GB", "2.4 GHz").unwrap();
    let b = construct("PC", "2 GB", "500 GB", "2.4 GHz").unwrap();
    assert_eq!(a, b);
}

#[test]
fn every_kind_is_constructible() {
    for kind in ComputerKind::ALL {
        let computer = construct(kind.as_str(), "4 GB", "250 GB", "2.0 GHz").unwrap();
        assert_eq!(computer.kind(), kind);
    }
}

proptest! {
    #[test]
    fn prop_fields_pass_through_unchanged(
        kind in prop_oneof![Just(ComputerKind::Pc), Just(ComputerKind::Server)],
        memory in ".*",
        storage in ".*",
        processor in ".*",
    ) {
        let computer = construct_kind(kind, memory.clone(), storage.clone(), processor.clone());
        prop_assert_eq!(computer.kind(), kind);
        prop_assert_eq!(computer.memory(), memory.as_str());
        prop_assert_eq!(computer.storage(), storage.as_str());
        prop_assert_eq!(computer.processor(), processor.as_str());
    }

    #[test]
    fn prop_unknown_tags_are_rejected(tag in "[A-Za-z0-9 ]{0,12}") {
        prop_assume!(tag != "PC" && tag != "Server");
        match construct(&tag, "1 GB", "1 GB", "1 GHz") {
            Err(FactoryError::UnrecognizedVariant { tag: rejected }) => {
                prop_assert_eq!(rejected, tag);
            }
            Ok(computer) => {
                prop_assert!(false, "tag {:?} unexpectedly constructed {}", tag, computer);
            }
        }
    }
}
