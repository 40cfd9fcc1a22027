//! Process-wide registry of default error models.
//!
//! The registry is configured once at application startup via
//! [`set_openapi_responses`] and read by the error-response builders
//! whenever an explicit model is omitted. Reads and writes go through an
//! `RwLock`, so concurrent reads are safe; the intended contract is still
//! configure-once before request handling begins, since a late reconfigure
//! changes what subsequent builders see.

use std::sync::{PoisonError, RwLock};

use crate::error::ResponseError;
use crate::types::ModelRef;

struct RegistryConfig {
    default_error_model: ModelRef,
    validation_error_model: Option<ModelRef>,
}

static REGISTRY: RwLock<Option<RegistryConfig>> = RwLock::new(None);

/// Register the global default error schemas.
///
/// Call once at startup, before any route declarations run.
/// Calling again overwrites the previous configuration.
pub fn set_openapi_responses(
    default_error_model: ModelRef,
    validation_error_model: Option<ModelRef>,
) {
    let mut guard = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    *guard = Some(RegistryConfig {
        default_error_model,
        validation_error_model,
    });
}

/// The configured default error model.
///
/// # Errors
///
/// Returns `ResponseError::NotConfigured` if [`set_openapi_responses`]
/// has not been called.
pub fn error_model() -> Result<ModelRef, ResponseError> {
    let guard = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
    guard
        .as_ref()
        .map(|config| config.default_error_model.clone())
        .ok_or(ResponseError::NotConfigured)
}

/// The configured validation error model.
///
/// Falls back to the default error model when no dedicated validation
/// model was registered.
///
/// # Errors
///
/// Returns `ResponseError::NotConfigured` if [`set_openapi_responses`]
/// has not been called.
pub fn validation_error_model() -> Result<ModelRef, ResponseError> {
    let guard = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
    let config = guard.as_ref().ok_or(ResponseError::NotConfigured)?;
    Ok(config
        .validation_error_model
        .clone()
        .unwrap_or_else(|| config.default_error_model.clone()))
}

/// Clear the registry.
///
/// Test support: call between test cases that configure the registry.
/// Production code has no reason to unconfigure.
pub fn reset_openapi_responses() {
    let mut guard = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}
