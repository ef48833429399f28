//! A single-threaded, non-thread-safe variant of the container.

use crate::core::ServiceOptions;
use crate::error::ContainerError;

use once_cell::unsync::OnceCell;
use std::any::{self, Any};
use std::collections::HashMap;
use std::rc::Rc;
use tracing::{debug, trace};

/// A resolved service or parameter value held by a [`LocalContainer`].
pub type LocalValue = Rc<dyn Any>;

type LocalFactory = Rc<dyn Fn(&LocalContainer) -> LocalValue>;

struct LocalServiceEntry {
  factory: LocalFactory,
  options: ServiceOptions,
  cell: OnceCell<LocalValue>,
}

/// A single-threaded registry of named services and parameters.
///
/// Semantically identical to [`Container`](crate::Container), but backed by a
/// plain `HashMap` with `Rc` shared ownership. It can therefore hold values
/// that are not `Send` or `Sync`.
///
/// # Note on API
///
/// Registration and the other mutating methods require `&mut self`, because
/// `HashMap` does not support interior mutability. In exchange,
/// [`service_options_mut`](LocalContainer::service_options_mut) can hand out
/// a plain mutable reference to a service's options.
#[derive(Default)]
pub struct LocalContainer {
  services: HashMap<String, LocalServiceEntry>,
  parameters: HashMap<String, LocalValue>,
}

impl LocalContainer {
  /// Creates a new, empty `LocalContainer`.
  pub fn new() -> Self {
    Self::default()
  }

  // --- SERVICES ---

  /// Registers a service factory under `name`, discarding any prior entry.
  /// The new entry starts out non-persistent.
  pub fn register_service<T, F>(&mut self, name: impl Into<String>, factory: F)
  where
    T: Any,
    F: Fn(&LocalContainer) -> T + 'static,
  {
    let name = name.into();
    debug!(service = %name, "registering service factory");
    let entry = LocalServiceEntry {
      factory: Rc::new(move |container| -> LocalValue { Rc::new(factory(container)) }),
      options: ServiceOptions::default(),
      cell: OnceCell::new(),
    };
    self.services.insert(name, entry);
  }

  /// Registers an already-resolved value as a service under `name`.
  pub fn register_value<T: Any>(&mut self, name: impl Into<String>, value: T) {
    let name = name.into();
    debug!(service = %name, "registering pre-resolved service value");
    let entry = LocalServiceEntry {
      factory: Rc::new(|_| panic!("pre-resolved service factory should not be called")),
      options: ServiceOptions::default(),
      cell: OnceCell::with_value(Rc::new(value)),
    };
    self.services.insert(name, entry);
  }

  /// Resolves the service registered under `name`, downcast to `T`.
  pub fn resolve_service<T: Any>(&self, name: &str) -> Result<Rc<T>, ContainerError> {
    self
      .resolve_service_value(name)?
      .downcast::<T>()
      .map_err(|_| ContainerError::ServiceTypeMismatch {
        name: name.to_owned(),
        requested: any::type_name::<T>(),
      })
  }

  /// Resolves the service registered under `name` in type-erased form.
  ///
  /// A cached value is returned as-is; otherwise the factory runs, and its
  /// product is cached first when the entry is marked persistent.
  pub fn resolve_service_value(&self, name: &str) -> Result<LocalValue, ContainerError> {
    let entry = self
      .services
      .get(name)
      .ok_or_else(|| ContainerError::UnknownService(name.to_owned()))?;
    if let Some(value) = entry.cell.get() {
      trace!(service = %name, "resolved service from cache");
      return Ok(Rc::clone(value));
    }

    let factory = Rc::clone(&entry.factory);
    let persistent = entry.options.persistent;

    trace!(service = %name, persistent, "invoking service factory");
    let value = factory(self);

    if persistent {
      Ok(Rc::clone(entry.cell.get_or_init(|| value)))
    } else {
      Ok(value)
    }
  }

  /// Returns a snapshot of the options for the service registered under
  /// `name`.
  pub fn service_options(&self, name: &str) -> Result<ServiceOptions, ContainerError> {
    self
      .services
      .get(name)
      .map(|entry| entry.options)
      .ok_or_else(|| ContainerError::UnknownService(name.to_owned()))
  }

  /// Returns a mutable handle to the options for the service registered
  /// under `name`, allowing persistence to be toggled in place.
  pub fn service_options_mut(
    &mut self,
    name: &str,
  ) -> Result<&mut ServiceOptions, ContainerError> {
    self
      .services
      .get_mut(name)
      .map(|entry| &mut entry.options)
      .ok_or_else(|| ContainerError::UnknownService(name.to_owned()))
  }

  /// Marks the service registered under `name` as persistent (or clears the
  /// mark). Equivalent to toggling the flag through
  /// [`service_options_mut`](LocalContainer::service_options_mut).
  pub fn set_service_persistent(
    &mut self,
    name: &str,
    persistent: bool,
  ) -> Result<(), ContainerError> {
    self.service_options_mut(name)?.persistent = persistent;
    Ok(())
  }

  /// Returns true iff a service is registered under `name`.
  pub fn service_exists(&self, name: &str) -> bool {
    self.services.contains_key(name)
  }

  /// Removes the service registered under `name`, if any. Idempotent.
  pub fn remove_service(&mut self, name: &str) {
    if self.services.remove(name).is_some() {
      debug!(service = %name, "removed service");
    }
  }

  /// The names of all currently registered services, in no particular order.
  pub fn service_names(&self) -> Vec<String> {
    self.services.keys().cloned().collect()
  }

  // --- PARAMETERS ---

  /// Sets the parameter `name` to `value`, overwriting any prior value.
  pub fn set_parameter<T: Any>(&mut self, name: impl Into<String>, value: T) {
    let name = name.into();
    debug!(parameter = %name, "setting parameter");
    self.parameters.insert(name, Rc::new(value));
  }

  /// Returns the parameter stored under `name`, downcast to `T`.
  pub fn get_parameter<T: Any>(&self, name: &str) -> Result<Rc<T>, ContainerError> {
    self
      .get_parameter_value(name)?
      .downcast::<T>()
      .map_err(|_| ContainerError::ParameterTypeMismatch {
        name: name.to_owned(),
        requested: any::type_name::<T>(),
      })
  }

  /// Returns the parameter stored under `name` in type-erased form.
  pub fn get_parameter_value(&self, name: &str) -> Result<LocalValue, ContainerError> {
    self
      .parameters
      .get(name)
      .map(Rc::clone)
      .ok_or_else(|| ContainerError::UnknownParameter(name.to_owned()))
  }

  /// Returns true iff the parameter `name` is set.
  pub fn parameter_exists(&self, name: &str) -> bool {
    self.parameters.contains_key(name)
  }

  /// Removes the parameter `name`, if set. Idempotent.
  pub fn remove_parameter(&mut self, name: &str) {
    if self.parameters.remove(name).is_some() {
      debug!(parameter = %name, "removed parameter");
    }
  }

  /// The names of all currently set parameters, in no particular order.
  pub fn parameter_names(&self) -> Vec<String> {
    self.parameters.keys().cloned().collect()
  }
}
