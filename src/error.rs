//! Error types for response building and schema post-processing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the response-spec builders and merger.
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error(
        "OpenAPI responses not configured: call `set_openapi_responses` before `error_response`"
    )]
    NotConfigured,

    #[error("duplicate response for status {status}")]
    DuplicateStatus { status: u16 },
}

/// Errors during schema-document post-processing and export.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("document has no \"paths\" object")]
    MissingPaths,

    #[error("route \"{name}\" has no tags: cannot derive an operation id")]
    UntaggedRoute { name: String },

    #[error("operation {method} {path} has no tags")]
    MissingTag { path: String, method: String },

    #[error("operation {method} {path} has no operationId")]
    MissingOperationId { path: String, method: String },

    #[error("operationId \"{operation_id}\" at {method} {path} does not start with \"{prefix}\"")]
    PrefixMismatch {
        path: String,
        method: String,
        operation_id: String,
        prefix: String,
    },

    #[error("failed to serialize document: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
