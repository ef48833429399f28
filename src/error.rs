//! The error type shared by both container implementations.

use thiserror::Error;

/// Failures signalled by container lookups.
///
/// Every variant carries the offending name. Lookups fail immediately; there
/// is no retry or default-value fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
  /// The named service was never registered, or has been removed.
  #[error("Unknown service: {0}")]
  UnknownService(String),

  /// The named parameter was never set, or has been removed.
  #[error("Unknown parameter: {0}")]
  UnknownParameter(String),

  /// The named service resolved, but its value is not of the requested type.
  #[error("Service '{name}' does not hold a value of type {requested}")]
  ServiceTypeMismatch {
    name: String,
    requested: &'static str,
  },

  /// The named parameter exists, but its value is not of the requested type.
  #[error("Parameter '{name}' does not hold a value of type {requested}")]
  ParameterTypeMismatch {
    name: String,
    requested: &'static str,
  },
}
