//! The main `Container` struct and its associated methods.

use crate::core::{Factory, ServiceEntry, ServiceOptions, Value};
use crate::error::ContainerError;

use dashmap::DashMap;
use std::any::{self, Any};
use std::sync::Arc;
use tracing::{debug, trace};

/// A thread-safe registry of named services and parameters.
///
/// Services are lazily constructed by factory functions that receive the
/// container itself, so a factory may read parameters or resolve other
/// services. Parameters are plain, eagerly-stored configuration values.
/// The two namespaces are independent: the same name may be a service and a
/// parameter at the same time.
///
/// All methods take `&self`; the container can be shared freely across
/// threads and mutated dynamically at any point in the application's
/// lifecycle.
#[derive(Default)]
pub struct Container {
  services: DashMap<String, ServiceEntry>,
  parameters: DashMap<String, Value>,
}

impl Container {
  /// Creates a new, empty `Container`.
  pub fn new() -> Self {
    Self::default()
  }

  // --- SERVICES ---

  /// Registers a service factory under `name`.
  ///
  /// Any prior entry under `name` is discarded, including a cached value and
  /// its options; the new entry starts out non-persistent. The factory is
  /// invoked on resolution with the container as its sole argument.
  pub fn register_service<T, F>(&self, name: impl Into<String>, factory: F)
  where
    T: Any + Send + Sync,
    F: Fn(&Container) -> T + Send + Sync + 'static,
  {
    let name = name.into();
    debug!(service = %name, "registering service factory");
    let factory: Factory = Arc::new(move |container| -> Value { Arc::new(factory(container)) });
    self.services.insert(name, ServiceEntry::new(factory));
  }

  /// Registers an already-resolved value as a service under `name`.
  ///
  /// The entry behaves like a service whose value has been produced up front:
  /// every resolution returns the same value and no factory is ever run.
  pub fn register_value<T: Any + Send + Sync>(&self, name: impl Into<String>, value: T) {
    let name = name.into();
    debug!(service = %name, "registering pre-resolved service value");
    self
      .services
      .insert(name, ServiceEntry::resolved(Arc::new(value)));
  }

  /// Resolves the service registered under `name`, downcast to `T`.
  ///
  /// Fails with [`ContainerError::UnknownService`] if `name` is not
  /// registered, or [`ContainerError::ServiceTypeMismatch`] if the resolved
  /// value is not a `T`.
  pub fn resolve_service<T: Any + Send + Sync>(
    &self,
    name: &str,
  ) -> Result<Arc<T>, ContainerError> {
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
  /// Resolution order: a cached value is returned as-is (this covers
  /// pre-resolved values and previously persisted results); otherwise the
  /// factory runs, and its product is cached first when the entry is marked
  /// persistent. A non-persistent factory runs again on every resolution.
  pub fn resolve_service_value(&self, name: &str) -> Result<Value, ContainerError> {
    let (factory, cell, persistent) = {
      let entry = self
        .services
        .get(name)
        .ok_or_else(|| ContainerError::UnknownService(name.to_owned()))?;
      if let Some(value) = entry.cell.get() {
        trace!(service = %name, "resolved service from cache");
        return Ok(Arc::clone(value));
      }
      (
        Arc::clone(&entry.factory),
        Arc::clone(&entry.cell),
        entry.options.persistent,
      )
      // The shard guard is dropped here: the factory must be able to resolve
      // other services and read parameters from this same container.
    };

    trace!(service = %name, persistent, "invoking service factory");
    let value = factory(self);

    if persistent {
      // Two threads may race past an empty cache and both run the factory;
      // the first writer wins and every caller receives its value.
      Ok(Arc::clone(cell.get_or_init(|| value)))
    } else {
      Ok(value)
    }
  }

  /// Returns a snapshot of the options for the service registered under
  /// `name`.
  ///
  /// Fails with [`ContainerError::UnknownService`] if `name` is not
  /// registered.
  pub fn service_options(&self, name: &str) -> Result<ServiceOptions, ContainerError> {
    self
      .services
      .get(name)
      .map(|entry| entry.options)
      .ok_or_else(|| ContainerError::UnknownService(name.to_owned()))
  }

  /// Marks the service registered under `name` as persistent (or clears the
  /// mark).
  ///
  /// A persistent service caches the value produced by its next factory
  /// invocation and returns that same value on every later resolution.
  /// Clearing the flag stops future caching but does not evict a value that
  /// is already cached.
  pub fn set_service_persistent(
    &self,
    name: &str,
    persistent: bool,
  ) -> Result<(), ContainerError> {
    let mut entry = self
      .services
      .get_mut(name)
      .ok_or_else(|| ContainerError::UnknownService(name.to_owned()))?;
    debug!(service = %name, persistent, "updating service options");
    entry.options.persistent = persistent;
    Ok(())
  }

  /// Returns true iff a service is registered under `name`.
  pub fn service_exists(&self, name: &str) -> bool {
    self.services.contains_key(name)
  }

  /// Removes the service registered under `name`, if any. Idempotent.
  pub fn remove_service(&self, name: &str) {
    if self.services.remove(name).is_some() {
      debug!(service = %name, "removed service");
    }
  }

  /// The names of all currently registered services, in no particular order.
  pub fn service_names(&self) -> Vec<String> {
    self.services.iter().map(|entry| entry.key().clone()).collect()
  }

  // --- PARAMETERS ---

  /// Sets the parameter `name` to `value`, overwriting any prior value.
  pub fn set_parameter<T: Any + Send + Sync>(&self, name: impl Into<String>, value: T) {
    let name = name.into();
    debug!(parameter = %name, "setting parameter");
    self.parameters.insert(name, Arc::new(value));
  }

  /// Returns the parameter stored under `name`, downcast to `T`.
  ///
  /// Fails with [`ContainerError::UnknownParameter`] if `name` is not set, or
  /// [`ContainerError::ParameterTypeMismatch`] if the value is not a `T`.
  pub fn get_parameter<T: Any + Send + Sync>(&self, name: &str) -> Result<Arc<T>, ContainerError> {
    self
      .get_parameter_value(name)?
      .downcast::<T>()
      .map_err(|_| ContainerError::ParameterTypeMismatch {
        name: name.to_owned(),
        requested: any::type_name::<T>(),
      })
  }

  /// Returns the parameter stored under `name` in type-erased form.
  pub fn get_parameter_value(&self, name: &str) -> Result<Value, ContainerError> {
    self
      .parameters
      .get(name)
      .map(|value| Arc::clone(value.value()))
      .ok_or_else(|| ContainerError::UnknownParameter(name.to_owned()))
  }

  /// Returns true iff the parameter `name` is set.
  pub fn parameter_exists(&self, name: &str) -> bool {
    self.parameters.contains_key(name)
  }

  /// Removes the parameter `name`, if set. Idempotent.
  pub fn remove_parameter(&self, name: &str) {
    if self.parameters.remove(name).is_some() {
      debug!(parameter = %name, "removed parameter");
    }
  }

  /// The names of all currently set parameters, in no particular order.
  pub fn parameter_names(&self) -> Vec<String> {
    self
      .parameters
      .iter()
      .map(|entry| entry.key().clone())
      .collect()
  }
}
