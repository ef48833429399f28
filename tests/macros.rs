//! Tests for the resolution macros against explicit container instances.

use fibre_registry::{maybe_resolve_from, resolve_from, Container};

struct MacroTestService {
  value: i32,
}

#[test]
fn test_resolve_from_returns_registered_service() {
  // Arrange
  let container = Container::new();
  container.register_service("svc", |_: &Container| MacroTestService { value: 100 });

  // Act
  let service = resolve_from!(&container, MacroTestService, "svc");

  // Assert
  assert_eq!(service.value, 100);
}

#[test]
#[should_panic(expected = "Failed to resolve required service 'missing'")]
fn test_resolve_from_panics_on_missing_service() {
  let container = Container::new();
  let _service = resolve_from!(&container, MacroTestService, "missing");
}

#[test]
#[should_panic(expected = "Failed to resolve required service 'svc'")]
fn test_resolve_from_panics_on_type_mismatch() {
  let container = Container::new();
  container.register_service("svc", |_: &Container| MacroTestService { value: 1 });
  let _service = resolve_from!(&container, String, "svc");
}

#[test]
fn test_maybe_resolve_from() {
  // Arrange
  let container = Container::new();
  container.register_value("svc", MacroTestService { value: 101 });

  // Act & Assert
  assert_eq!(
    maybe_resolve_from!(&container, MacroTestService, "svc")
      .unwrap()
      .value,
    101
  );
  assert!(maybe_resolve_from!(&container, MacroTestService, "absent").is_none());
  assert!(maybe_resolve_from!(&container, String, "svc").is_none());
}
