//! Response-spec builders and the per-route merger.

use crate::error::ResponseError;
use crate::registry;
use crate::types::{Headers, ModelRef, ResponseMap, ResponseSpec};

fn make_response(
    status_code: u16,
    description: String,
    model: ModelRef,
    headers: Option<Headers>,
) -> ResponseMap {
    let headers = headers.filter(|h| !h.is_empty());
    ResponseMap::single(
        status_code,
        ResponseSpec {
            description,
            model,
            headers,
        },
    )
}

/// Build a normal (non-error) response spec.
///
/// Returns a single-entry [`ResponseMap`] for `status_code`. The status
/// code is not range-checked; any value is accepted. Pure construction,
/// independent of the registry.
pub fn api_response(
    status_code: u16,
    description: impl Into<String>,
    model: ModelRef,
    headers: Option<Headers>,
) -> ResponseMap {
    make_response(status_code, description.into(), model, headers)
}

/// Build an error response spec.
///
/// When `model` is `None`, resolves the globally configured default
/// error model.
///
/// # Errors
///
/// Returns `ResponseError::NotConfigured` if no model is supplied and
/// [`crate::set_openapi_responses`] has not been called.
pub fn error_response(
    status_code: u16,
    description: impl Into<String>,
    model: Option<ModelRef>,
    headers: Option<Headers>,
) -> Result<ResponseMap, ResponseError> {
    let model = match model {
        Some(model) => model,
        None => registry::error_model()?,
    };
    Ok(make_response(status_code, description.into(), model, headers))
}

/// Build a validation error response spec.
///
/// Uses the globally configured validation error model, falling back to
/// the default error model when no dedicated one was registered.
///
/// # Errors
///
/// Returns `ResponseError::NotConfigured` if the registry is empty.
pub fn validation_error_response(
    status_code: u16,
    description: impl Into<String>,
    headers: Option<Headers>,
) -> Result<ResponseMap, ResponseError> {
    let model = registry::validation_error_model()?;
    Ok(make_response(status_code, description.into(), model, headers))
}

/// Merge response maps into a single per-route map.
///
/// Entries are copied in argument order, then in each map's insertion
/// order. Duplicate detection is strict: the second occurrence of any
/// status code aborts the merge.
///
/// # Errors
///
/// Returns `ResponseError::DuplicateStatus` if a status code appears in
/// more than one input map (or twice in one irregularly built map).
pub fn response_list<I>(responses: I) -> Result<ResponseMap, ResponseError>
where
    I: IntoIterator<Item = ResponseMap>,
{
    let mut merged = ResponseMap::new();
    for map in responses {
        for (status, spec) in map {
            merged.insert(status, spec)?;
        }
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{reset_openapi_responses, set_openapi_responses};
    use serde_json::{json, Map};
    use serial_test::serial;

    #[test]
    fn api_response_single_entry() {
        let map = api_response(200, "ok", ModelRef::new("User"), None);
        assert_eq!(map.len(), 1);
        let spec = map.get(200).unwrap();
        assert_eq!(spec.description, "ok");
        assert_eq!(spec.model, ModelRef::new("User"));
        assert!(spec.headers.is_none());
    }

    #[test]
    fn api_response_keeps_headers() {
        let mut headers = Map::new();
        headers.insert("X-Request-Id".into(), json!({ "schema": { "type": "string" } }));
        let map = api_response(201, "created", ModelRef::new("User"), Some(headers));
        assert!(map.get(201).unwrap().headers.is_some());
    }

    #[test]
    fn api_response_drops_empty_headers() {
        let map = api_response(200, "ok", ModelRef::new("User"), Some(Map::new()));
        assert!(map.get(200).unwrap().headers.is_none());
    }

    #[test]
    #[serial]
    fn error_response_requires_configuration() {
        reset_openapi_responses();
        let result = error_response(404, "not found", None, None);
        assert!(matches!(result, Err(ResponseError::NotConfigured)));
    }

    #[test]
    #[serial]
    fn error_response_uses_configured_model() {
        reset_openapi_responses();
        set_openapi_responses(ModelRef::new("Error"), None);

        let map = error_response(404, "not found", None, None).unwrap();
        assert_eq!(map.get(404).unwrap().model, ModelRef::new("Error"));
    }

    #[test]
    #[serial]
    fn error_response_explicit_model_skips_registry() {
        reset_openapi_responses();
        let map = error_response(418, "teapot", Some(ModelRef::new("Teapot")), None).unwrap();
        assert_eq!(map.get(418).unwrap().model, ModelRef::new("Teapot"));
    }

    #[test]
    #[serial]
    fn validation_error_response_uses_validation_model() {
        reset_openapi_responses();
        set_openapi_responses(
            ModelRef::new("Error"),
            Some(ModelRef::new("ValidationError")),
        );

        let map = validation_error_response(422, "invalid body", None).unwrap();
        assert_eq!(map.get(422).unwrap().model, ModelRef::new("ValidationError"));
    }

    #[test]
    fn response_list_merges_disjoint_maps() {
        let merged = response_list([
            api_response(200, "ok", ModelRef::new("User"), None),
            api_response(404, "not found", ModelRef::new("Error"), None),
            api_response(500, "oops", ModelRef::new("Error"), None),
        ])
        .unwrap();

        assert_eq!(merged.len(), 3);
        let codes: Vec<u16> = merged.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec![200, 404, 500]);
    }

    #[test]
    fn response_list_rejects_duplicates() {
        let result = response_list([
            api_response(200, "ok", ModelRef::new("User"), None),
            api_response(200, "also ok", ModelRef::new("Other"), None),
        ]);
        assert!(matches!(
            result,
            Err(ResponseError::DuplicateStatus { status: 200 })
        ));
    }

    #[test]
    fn response_list_empty_input() {
        let merged = response_list([]).unwrap();
        assert!(merged.is_empty());
    }
}
