//! # Fibre Registry
//!
//! A lightweight, thread-safe registry of named services and parameters: a
//! dynamic, string-keyed dependency injection container for Rust.
//!
//! The container exposes two independent namespaces. **Services** are values
//! built lazily by factory functions; a factory receives the container
//! itself, so it can read parameters and resolve other services.
//! **Parameters** are plain configuration values stored eagerly. A service
//! marked *persistent* caches the value its factory produces and returns
//! that same value on every later resolution; a non-persistent service runs
//! its factory every time.
//!
//! ## Core Concepts
//!
//! - **Container**: the thread-safe registry. Registration and resolution
//!   take `&self`, so services can be added dynamically at any point in the
//!   application's lifecycle.
//! - **Resolution**: `resolve_service::<T>("name")` returns
//!   `Result<Arc<T>, ContainerError>`; the `resolve_from!` macro is the
//!   panicking shorthand for required dependencies.
//! - **Persistence**: opted into per service with `set_service_persistent`,
//!   before or after the first resolution.
//! - **LocalContainer** (feature `local`): a single-threaded variant backed
//!   by `Rc`, able to hold values that are not `Send` or `Sync`.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_registry::Container;
//!
//! let container = Container::new();
//!
//! // Parameters are plain configuration values.
//! container.set_parameter("greeting", String::from("Hello"));
//!
//! // Services are built lazily; the factory may use the container.
//! container.register_service("message", |c: &Container| {
//!   let greeting = c.get_parameter::<String>("greeting").unwrap();
//!   format!("{}, World!", greeting)
//! });
//!
//! let message = container.resolve_service::<String>("message").unwrap();
//! assert_eq!(*message, "Hello, World!");
//!
//! // Non-persistent services rebuild on every resolution; persistent ones
//! // cache their first result.
//! container.set_service_persistent("message", true).unwrap();
//! let first = container.resolve_service::<String>("message").unwrap();
//! let second = container.resolve_service::<String>("message").unwrap();
//! assert!(std::sync::Arc::ptr_eq(&first, &second));
//! ```

mod container;
mod core;
mod error;
#[cfg(feature = "local")]
mod local_container;
mod macros;

pub use container::Container;
pub use error::ContainerError;
#[cfg(feature = "local")]
pub use local_container::{LocalContainer, LocalValue};
pub use crate::core::{ServiceOptions, Value};
