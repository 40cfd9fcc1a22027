//! Schema-document export.

use std::path::Path;

use serde_json::Value;

use crate::error::SchemaError;
use crate::normalize::normalize_operation_ids;

/// Source of a generated OpenAPI document.
///
/// Seam for the host framework's schema-generation facility: an
/// application handle that can render its own schema implements this.
/// Implemented for [`Value`] so a pre-generated document can be exported
/// directly.
pub trait OpenApiSource {
    /// Produce the full OpenAPI document.
    fn openapi(&self) -> Value;
}

impl OpenApiSource for Value {
    fn openapi(&self) -> Value {
        self.clone()
    }
}

/// Export a normalized schema document to a JSON file.
///
/// Obtains the document from `source`, strips the tag prefixes from all
/// operation ids, and writes the result to `destination` as UTF-8 JSON
/// with 2-space indentation. An existing file is silently overwritten.
///
/// # Errors
///
/// Propagates `SchemaError` from normalization; returns
/// `SchemaError::WriteError` if the file cannot be written.
pub fn export_openapi_json(
    source: &impl OpenApiSource,
    destination: &Path,
) -> Result<(), SchemaError> {
    let document = source.openapi();
    let normalized = normalize_operation_ids(&document)?;

    let json =
        serde_json::to_string_pretty(&normalized).map_err(|source| SchemaError::Serialize {
            source,
        })?;

    std::fs::write(destination, json).map_err(|source| SchemaError::WriteError {
        path: destination.to_path_buf(),
        source,
    })
}
