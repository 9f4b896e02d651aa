//! Centralized integration tests for the registry and injector
use di_abstractions::{
    describe_field, DependencyInjector, DependencyRegistry, FieldDescriptor, Injectable,
    InjectableField,
};
use di_impl::{Injector, Registry};
use stabby_common::{DependencyError, TypeInfo};
use stabby_composition::InjectorBuilder;

/// 测试服务
#[derive(Debug, Clone, PartialEq)]
struct TestService {
    name: String,
}

impl TestService {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// 同时依赖主服务和备用服务的消费者
#[derive(Debug, Default)]
struct Dashboard {
    primary: Option<TestService>,
    fallback: Option<TestService>,
}

impl Injectable for Dashboard {
    fn injectable_fields(&mut self) -> Vec<Box<dyn InjectableField + '_>> {
        let Self { primary, fallback } = self;
        vec![
            FieldDescriptor::of(move |s: TestService| *primary = Some(s)).boxed(),
            describe_field(
                TypeInfo::of::<TestService>(),
                Some("fallback"),
                move |s: TestService| *fallback = Some(s),
            ),
        ]
    }
}

#[test]
fn test_round_trip() {
    let mut registry = Registry::new();
    registry.register(TestService::new("test"), None);
    let resolved: TestService = registry.resolve_typed(None).unwrap();
    assert_eq!(resolved.name, "test");
}

#[test]
fn test_name_discrimination() {
    let mut registry = Registry::new();
    registry.register(TestService::new("v1"), Some("a"));
    registry.register(TestService::new("v2"), Some("b"));

    assert_eq!(
        registry.resolve_typed::<TestService>(Some("a")).unwrap().name,
        "v1"
    );
    assert_eq!(
        registry.resolve_typed::<TestService>(Some("b")).unwrap().name,
        "v2"
    );
    assert!(matches!(
        registry.resolve_typed::<TestService>(None),
        Err(DependencyError::NotFound { .. })
    ));
}

#[test]
fn test_duplicate_names_resolve_to_earliest_registration() {
    let mut registry = Registry::new();
    registry.register(TestService::new("v1"), Some("x"));
    registry.register(TestService::new("v2"), Some("x"));

    assert_eq!(
        registry.resolve_typed::<TestService>(Some("x")).unwrap().name,
        "v1"
    );
}

#[test]
fn test_unregistered_type() {
    let registry = Registry::new();
    assert!(registry
        .resolve(&TypeInfo::of::<TestService>(), None)
        .unwrap_err()
        .is_not_found());
}

#[test]
fn test_named_and_default_services_injected() {
    let mut injector = Injector::new();
    injector.register_dependency(TestService::new("primary"), None);
    injector.register_dependency(TestService::new("fallback"), Some("fallback"));

    let mut dashboard = Dashboard::default();
    injector.inject(&mut dashboard);

    assert_eq!(dashboard.primary, Some(TestService::new("primary")));
    assert_eq!(dashboard.fallback, Some(TestService::new("fallback")));
}

#[test]
fn test_missing_named_service_reports_type() {
    let injector = InjectorBuilder::new()
        .register(TestService::new("primary"))
        .build()
        .unwrap();

    let mut dashboard = Dashboard::default();
    let err = injector.try_inject(&mut dashboard).unwrap_err();

    assert!(matches!(
        &err,
        DependencyError::UnresolvedDependency { name: Some(name), .. } if name == "fallback"
    ));
    assert!(err.to_string().contains("TestService"));
    assert_eq!(dashboard.primary, Some(TestService::new("primary")));
    assert_eq!(dashboard.fallback, None);
}
