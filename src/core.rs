//! Core data structures shared by the container implementations.

use crate::container::Container;

use once_cell::sync::OnceCell;
use std::any::Any;
use std::sync::Arc;

/// A resolved service or parameter value, type-erased and shareable.
///
/// Values are recovered from this form with the checked-downcast accessors on
/// the containers (`resolve_service::<T>`, `get_parameter::<T>`).
pub type Value = Arc<dyn Any + Send + Sync>;

/// A service factory: an ordinary function of the container producing a value.
///
/// Shared (`Arc`) so resolution can invoke it without holding a map shard,
/// which keeps the container usable from inside the factory itself.
pub(crate) type Factory = Arc<dyn Fn(&Container) -> Value + Send + Sync>;

/// Per-service options.
///
/// Read through [`Container::service_options`] and written through
/// [`Container::set_service_persistent`]. The single-threaded container also
/// hands out a mutable reference via `service_options_mut`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ServiceOptions {
  /// When true, the value produced by the next factory invocation is cached
  /// and every later resolution returns that same value instead of running
  /// the factory again.
  pub persistent: bool,
}

pub(crate) struct ServiceEntry {
  pub(crate) factory: Factory,
  pub(crate) options: ServiceOptions,
  // Shared with in-flight resolutions so the cache can be written after the
  // shard guard has been released. Written at most once per entry.
  pub(crate) cell: Arc<OnceCell<Value>>,
}

impl ServiceEntry {
  /// A fresh, unresolved entry for `factory`.
  pub(crate) fn new(factory: Factory) -> Self {
    Self {
      factory,
      options: ServiceOptions::default(),
      cell: Arc::new(OnceCell::new()),
    }
  }

  /// An entry holding an already-resolved value; its factory is never run.
  pub(crate) fn resolved(value: Value) -> Self {
    Self {
      factory: Arc::new(|_| panic!("pre-resolved service factory should not be called")),
      options: ServiceOptions::default(),
      cell: Arc::new(OnceCell::with_value(value)),
    }
  }
}
