use fibre_registry::{Container, ContainerError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// --- Test Fixtures ---

// A simple service value for registration tests.
#[derive(Debug, PartialEq, Eq)]
struct SimpleService {
  id: u32,
}

// --- Service Tests ---

#[test]
fn test_register_and_resolve_service() {
  // Arrange
  let container = Container::new();
  container.register_service("simple", |_: &Container| SimpleService { id: 101 });

  // Act
  let service = container.resolve_service::<SimpleService>("simple").unwrap();

  // Assert
  assert_eq!(service.id, 101);
}

#[test]
fn test_resolve_unknown_service_fails() {
  // Arrange
  let container = Container::new();

  // Act
  let result = container.resolve_service::<SimpleService>("missing");

  // Assert
  assert_eq!(
    result.unwrap_err(),
    ContainerError::UnknownService("missing".to_string())
  );
  assert!(!container.service_exists("missing"));
}

#[test]
fn test_unknown_service_error_carries_name() {
  let container = Container::new();
  let error = container
    .resolve_service::<SimpleService>("no_such_service")
    .unwrap_err();
  assert_eq!(error.to_string(), "Unknown service: no_such_service");
}

#[test]
fn test_service_exists_and_name_listing() {
  // Arrange
  let container = Container::new();
  assert!(container.service_names().is_empty());
  container.register_service("dummy", |_: &Container| SimpleService { id: 1 });

  // Assert
  assert!(container.service_exists("dummy"));
  assert!(container.service_names().contains(&"dummy".to_string()));
}

#[test]
fn test_non_persistent_factory_runs_every_time() {
  // Arrange: a factory producing a unique value per invocation.
  let container = Container::new();
  let calls = Arc::new(AtomicUsize::new(0));
  let counter = Arc::clone(&calls);
  container.register_service("fresh", move |_: &Container| {
    counter.fetch_add(1, Ordering::SeqCst)
  });

  // Act
  let first = container.resolve_service::<usize>("fresh").unwrap();
  let second = container.resolve_service::<usize>("fresh").unwrap();

  // Assert
  assert_ne!(*first, *second);
  assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_persistent_service_caches_first_value() {
  // Arrange
  let container = Container::new();
  let calls = Arc::new(AtomicUsize::new(0));
  let counter = Arc::clone(&calls);
  container.register_service("cached", move |_: &Container| {
    counter.fetch_add(1, Ordering::SeqCst)
  });
  container.set_service_persistent("cached", true).unwrap();

  // Act
  let first = container.resolve_service::<usize>("cached").unwrap();
  let second = container.resolve_service::<usize>("cached").unwrap();

  // Assert: identical value both times, factory ran once.
  assert!(Arc::ptr_eq(&first, &second));
  assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_register_value_resolves_without_factory() {
  // Arrange
  let container = Container::new();
  container.register_value("constant", SimpleService { id: 7 });

  // Act
  let first = container.resolve_service::<SimpleService>("constant").unwrap();
  let second = container.resolve_service::<SimpleService>("constant").unwrap();

  // Assert: same stored value every time.
  assert_eq!(first.id, 7);
  assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_reregistration_replaces_entry_and_cache() {
  // Arrange: a persisted service with an established cache.
  let container = Container::new();
  container.register_service("replaced", |_: &Container| SimpleService { id: 1 });
  container.set_service_persistent("replaced", true).unwrap();
  let old = container.resolve_service::<SimpleService>("replaced").unwrap();
  assert_eq!(old.id, 1);

  // Act: register under the same name again.
  container.register_service("replaced", |_: &Container| SimpleService { id: 2 });

  // Assert: the prior cache is gone and options are back to default.
  let new = container.resolve_service::<SimpleService>("replaced").unwrap();
  assert_eq!(new.id, 2);
  assert!(!container.service_options("replaced").unwrap().persistent);
}

#[test]
fn test_remove_service_is_idempotent() {
  // Arrange
  let container = Container::new();
  container.register_service("ephemeral", |_: &Container| SimpleService { id: 3 });
  assert!(container.service_exists("ephemeral"));

  // Act
  container.remove_service("ephemeral");
  container.remove_service("ephemeral"); // no error on absent entry

  // Assert
  assert!(!container.service_exists("ephemeral"));
  assert_eq!(
    container
      .resolve_service::<SimpleService>("ephemeral")
      .unwrap_err(),
    ContainerError::UnknownService("ephemeral".to_string())
  );
}

#[test]
fn test_service_options_snapshot() {
  // Arrange
  let container = Container::new();
  container.register_service("opts", |_: &Container| SimpleService { id: 4 });

  // Assert: non-persistent by default, persistent after the setter.
  assert!(!container.service_options("opts").unwrap().persistent);
  container.set_service_persistent("opts", true).unwrap();
  assert!(container.service_options("opts").unwrap().persistent);

  // Options on an unknown service fail like any other lookup.
  assert_eq!(
    container.service_options("unknown").unwrap_err(),
    ContainerError::UnknownService("unknown".to_string())
  );
  assert_eq!(
    container.set_service_persistent("unknown", true).unwrap_err(),
    ContainerError::UnknownService("unknown".to_string())
  );
}

#[test]
fn test_resolve_with_wrong_type_fails() {
  // Arrange
  let container = Container::new();
  container.register_service("typed", |_: &Container| SimpleService { id: 5 });

  // Act
  let result = container.resolve_service::<String>("typed");

  // Assert: the entry itself is untouched by the failed downcast.
  assert!(matches!(
    result.unwrap_err(),
    ContainerError::ServiceTypeMismatch { ref name, .. } if name == "typed"
  ));
  assert_eq!(container.resolve_service::<SimpleService>("typed").unwrap().id, 5);
}

// --- Parameter Tests ---

#[test]
fn test_set_and_get_parameter() {
  // Arrange
  let container = Container::new();
  assert!(container.parameter_names().is_empty());
  container.set_parameter("param", true);

  // Assert
  assert!(container.parameter_exists("param"));
  assert!(*container.get_parameter::<bool>("param").unwrap());
  assert!(container.parameter_names().contains(&"param".to_string()));
}

#[test]
fn test_get_unknown_parameter_fails() {
  let container = Container::new();
  let error = container.get_parameter::<bool>("missing").unwrap_err();
  assert_eq!(error, ContainerError::UnknownParameter("missing".to_string()));
  assert_eq!(error.to_string(), "Unknown parameter: missing");
  assert!(!container.parameter_exists("missing"));
}

#[test]
fn test_overwrite_parameter() {
  // Arrange
  let container = Container::new();
  container.set_parameter("limit", 10_u32);

  // Act
  container.set_parameter("limit", 20_u32);

  // Assert
  assert_eq!(*container.get_parameter::<u32>("limit").unwrap(), 20);
}

#[test]
fn test_remove_parameter_is_idempotent() {
  // Arrange
  let container = Container::new();
  container.set_parameter("param", true);

  // Act
  container.remove_parameter("param");
  container.remove_parameter("param"); // no error on absent entry

  // Assert
  assert!(!container.parameter_exists("param"));
}

#[test]
fn test_parameter_with_wrong_type_fails() {
  let container = Container::new();
  container.set_parameter("port", 8080_u16);
  assert!(matches!(
    container.get_parameter::<String>("port").unwrap_err(),
    ContainerError::ParameterTypeMismatch { ref name, .. } if name == "port"
  ));
}

// --- Namespace Tests ---

#[test]
fn test_service_and_parameter_namespaces_are_disjoint() {
  // Arrange: the same name in both namespaces.
  let container = Container::new();
  container.set_parameter("shared", String::from("parameter value"));
  container.register_service("shared", |_: &Container| String::from("service value"));

  // Assert: both live side by side.
  assert_eq!(
    *container.get_parameter::<String>("shared").unwrap(),
    "parameter value"
  );
  assert_eq!(
    *container.resolve_service::<String>("shared").unwrap(),
    "service value"
  );

  // Removing from one namespace leaves the other intact.
  container.remove_parameter("shared");
  assert!(!container.parameter_exists("shared"));
  assert!(container.service_exists("shared"));
}
