//! Public macros for ergonomic service resolution.

/// Resolves a required service from a container, panicking if it is missing
/// or of the wrong type.
///
/// This is the shorthand for dependencies an application cannot run without.
/// For a non-panicking version, use [`maybe_resolve_from!`] or call
/// `resolve_service` directly.
///
/// # Panics
///
/// Panics if the service cannot be resolved as the requested type.
///
/// # Examples
///
/// ```
/// use fibre_registry::{resolve_from, Container};
///
/// let container = Container::new();
/// container.register_value("answer", 42_i32);
///
/// let answer = resolve_from!(&container, i32, "answer");
/// assert_eq!(*answer, 42);
/// ```
#[macro_export]
macro_rules! resolve_from {
  ($container:expr, $type:ty, $name:expr) => {
    ($container)
      .resolve_service::<$type>($name)
      .unwrap_or_else(|error| {
        panic!(
          "Failed to resolve required service '{}': {}",
          $name, error
        )
      })
  };
}

/// Resolves a service from a container, yielding `None` if it is missing or
/// of the wrong type.
///
/// # Examples
///
/// ```
/// use fibre_registry::{maybe_resolve_from, Container};
///
/// let container = Container::new();
/// assert!(maybe_resolve_from!(&container, i32, "answer").is_none());
///
/// container.register_value("answer", 42_i32);
/// assert_eq!(*maybe_resolve_from!(&container, i32, "answer").unwrap(), 42);
/// ```
#[macro_export]
macro_rules! maybe_resolve_from {
  ($container:expr, $type:ty, $name:expr) => {
    ($container).resolve_service::<$type>($name).ok()
  };
}
