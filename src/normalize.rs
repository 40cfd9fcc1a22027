//! Operation-id derivation and prefix stripping.
//!
//! Client-code generators derive service names from `operationId`, so a
//! framework that prefixes ids with the route's tag ("users-getAll")
//! produces redundant names ("usersGetAllUsers"). [`create_operation_id`]
//! is the policy hook that applies the tag prefix at route-registration
//! time; [`normalize_operation_ids`] removes it again from the generated
//! document before export.

use serde_json::Value;

use crate::error::SchemaError;

/// HTTP method keys of an OpenAPI path item. Other keys (`parameters`,
/// `summary`, ...) are not operations and pass through untouched.
pub const HTTP_METHODS: &[&str] = &[
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Derive an operation id for a route: `"<first-tag>-<name>"`.
///
/// Intended as the unique-id policy hook of the host framework, so that
/// generated ids carry the tag prefix [`normalize_operation_ids`] strips.
///
/// # Errors
///
/// Returns `SchemaError::UntaggedRoute` if `tags` is empty. Every route
/// fed through this hook must carry at least one tag.
pub fn create_operation_id<S: AsRef<str>>(tags: &[S], name: &str) -> Result<String, SchemaError> {
    let tag = tags.first().ok_or_else(|| SchemaError::UntaggedRoute {
        name: name.to_string(),
    })?;
    Ok(format!("{}-{}", tag.as_ref(), name))
}

/// Strip the `"<first-tag>-"` prefix from every operation id in a
/// schema document.
///
/// Returns a transformed copy; the input document is untouched and
/// everything except the operation ids is preserved verbatim, including
/// key order.
///
/// # Errors
///
/// - `SchemaError::MissingPaths` if the document has no `paths` object.
/// - `SchemaError::MissingTag` / `MissingOperationId` if an operation
///   lacks the fields the transform needs.
/// - `SchemaError::PrefixMismatch` if an `operationId` does not start
///   with its tag prefix. Ids are never truncated by position.
pub fn normalize_operation_ids(document: &Value) -> Result<Value, SchemaError> {
    let mut result = document.clone();

    let paths = result
        .get_mut("paths")
        .and_then(Value::as_object_mut)
        .ok_or(SchemaError::MissingPaths)?;

    for (path, item) in paths.iter_mut() {
        let Some(operations) = item.as_object_mut() else {
            continue;
        };
        for (method, operation) in operations.iter_mut() {
            if !HTTP_METHODS.contains(&method.as_str()) {
                continue;
            }
            strip_tag_prefix(path, method, operation)?;
        }
    }

    Ok(result)
}

fn strip_tag_prefix(path: &str, method: &str, operation: &mut Value) -> Result<(), SchemaError> {
    let prefix = {
        let tag = operation
            .get("tags")
            .and_then(Value::as_array)
            .and_then(|tags| tags.first())
            .and_then(Value::as_str)
            .ok_or_else(|| SchemaError::MissingTag {
                path: path.to_string(),
                method: method.to_string(),
            })?;
        format!("{}-", tag)
    };

    let stripped = {
        let operation_id = operation
            .get("operationId")
            .and_then(Value::as_str)
            .ok_or_else(|| SchemaError::MissingOperationId {
                path: path.to_string(),
                method: method.to_string(),
            })?;

        operation_id
            .strip_prefix(&prefix)
            .ok_or_else(|| SchemaError::PrefixMismatch {
                path: path.to_string(),
                method: method.to_string(),
                operation_id: operation_id.to_string(),
                prefix: prefix.clone(),
            })?
            .to_string()
    };

    if let Some(obj) = operation.as_object_mut() {
        obj.insert("operationId".to_string(), Value::String(stripped));
    }

    Ok(())
}
