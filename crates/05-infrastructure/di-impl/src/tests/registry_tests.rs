//! 注册表解析规则测试

use crate::registry::Registry;
use di_abstractions::DependencyRegistry;
use stabby_common::{DependencyError, ResolutionPolicy, TypeInfo};

#[derive(Debug, Clone, PartialEq)]
struct Endpoint(&'static str);

#[test]
fn test_register_then_resolve_unnamed() {
    let mut registry = Registry::new();
    registry.register(Endpoint("primary"), None);

    let resolved: Endpoint = registry.resolve_typed(None).unwrap();
    assert_eq!(resolved, Endpoint("primary"));
}

#[test]
fn test_names_discriminate_records() {
    let mut registry = Registry::new();
    registry.register(Endpoint("v1"), Some("a"));
    registry.register(Endpoint("v2"), Some("b"));

    assert_eq!(registry.resolve_typed::<Endpoint>(Some("a")).unwrap(), Endpoint("v1"));
    assert_eq!(registry.resolve_typed::<Endpoint>(Some("b")).unwrap(), Endpoint("v2"));

    let err = registry.resolve_typed::<Endpoint>(None).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_unnamed_record_does_not_satisfy_named_lookup() {
    let mut registry = Registry::new();
    registry.register(Endpoint("default"), None);

    assert!(registry.contains(&TypeInfo::of::<Endpoint>(), None));
    assert!(!registry.contains(&TypeInfo::of::<Endpoint>(), Some("default")));
}

#[test]
fn test_oldest_matching_name_wins_by_default() {
    let mut registry = Registry::new();
    registry.register(Endpoint("v1"), Some("x"));
    registry.register(Endpoint("v2"), Some("x"));

    assert_eq!(registry.resolution_policy(), ResolutionPolicy::OldestFirst);
    assert_eq!(registry.resolve_typed::<Endpoint>(Some("x")).unwrap(), Endpoint("v1"));
}

#[test]
fn test_newest_first_policy() {
    let mut registry = Registry::with_policy(ResolutionPolicy::NewestFirst);
    registry.register(Endpoint("v1"), Some("x"));
    registry.register(Endpoint("v2"), Some("x"));
    registry.register(Endpoint("other"), Some("y"));

    assert_eq!(registry.resolve_typed::<Endpoint>(Some("x")).unwrap(), Endpoint("v2"));
}

#[test]
fn test_unregistered_type_is_not_found() {
    let mut registry = Registry::new();
    registry.register(42_i64, None);

    let err = registry.resolve(&TypeInfo::of::<String>(), None).unwrap_err();
    assert_eq!(
        err,
        DependencyError::NotFound {
            type_name: std::any::type_name::<String>().to_string(),
            name: None,
        }
    );
}

#[test]
fn test_records_are_newest_first() {
    let mut registry = Registry::new();
    registry.register(Endpoint("first"), None);
    registry.register(Endpoint("second"), Some("b"));

    let order: Vec<_> = registry
        .records(&TypeInfo::of::<Endpoint>())
        .map(|record| record.downcast_ref::<Endpoint>().unwrap().0)
        .collect();
    assert_eq!(order, vec!["second", "first"]);
}

#[test]
fn test_introspection() {
    let mut registry = Registry::new();
    assert!(registry.is_empty());

    registry.register("text".to_string(), None);
    registry.register(1_i64, None);
    registry.register(2_i64, Some("two"));

    assert_eq!(registry.len(), 3);
    assert!(registry.is_registered(&TypeInfo::of::<i64>()));
    assert!(!registry.is_registered(&TypeInfo::of::<u8>()));

    let types = registry.registered_types();
    assert_eq!(types.len(), 2);
    assert!(types.contains(&TypeInfo::of::<String>()));
    assert!(types.contains(&TypeInfo::of::<i64>()));
}
