//! OpenAPI response helpers
//!
//! Structured response metadata for HTTP route declarations, plus
//! post-processing of a generated OpenAPI document.
//!
//! Routes declare their possible responses with [`api_response`] and
//! [`error_response`], merged per route by [`response_list`]. A default
//! error model registered once at startup via [`set_openapi_responses`]
//! fills in error responses that omit an explicit model. At
//! documentation-export time, [`export_openapi_json`] strips the
//! tag-derived prefix from every operation id and writes the document to
//! a file.
//!
//! # Example
//!
//! ```
//! use openapi_responses::{
//!     api_response, error_response, response_list, set_openapi_responses, ModelRef,
//! };
//!
//! set_openapi_responses(ModelRef::new("Error"), None);
//!
//! let responses = response_list([
//!     api_response(200, "List of users", ModelRef::new("UserList"), None),
//!     error_response(404, "User not found", None, None)?,
//! ])?;
//!
//! assert_eq!(responses.get(404).unwrap().model, ModelRef::new("Error"));
//! # Ok::<(), openapi_responses::ResponseError>(())
//! ```
//!
//! # Operation ids
//!
//! Frameworks that generate unique operation ids per route tend to
//! produce names like `"users-getAll"` (tag plus route name), which
//! client generators turn into redundant method names. The
//! [`create_operation_id`] hook applies that convention deliberately,
//! and [`normalize_operation_ids`] removes the prefix again from the
//! finished document:
//!
//! ```
//! use openapi_responses::normalize_operation_ids;
//! use serde_json::json;
//!
//! let document = json!({
//!     "paths": {
//!         "/users": {
//!             "get": { "tags": ["users"], "operationId": "users-getAll" }
//!         }
//!     }
//! });
//!
//! let normalized = normalize_operation_ids(&document).unwrap();
//! assert_eq!(normalized["paths"]["/users"]["get"]["operationId"], "getAll");
//! ```

mod error;
mod export;
mod normalize;
mod registry;
mod response;
mod types;

pub use error::{ResponseError, SchemaError};
pub use export::{export_openapi_json, OpenApiSource};
pub use normalize::{create_operation_id, normalize_operation_ids, HTTP_METHODS};
pub use registry::{reset_openapi_responses, set_openapi_responses};
pub use response::{api_response, error_response, response_list, validation_error_response};
pub use types::{Headers, ModelRef, ResponseMap, ResponseSpec};
