//! Core types for response specs.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::ResponseError;

/// Header descriptors keyed by header name.
pub type Headers = Map<String, Value>;

/// Reference to a named schema component.
///
/// This is always a reference to a schema type, never a value instance.
/// Serializes as an OpenAPI `$ref` object pointing into
/// `#/components/schemas`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelRef {
    name: String,
}

impl ModelRef {
    /// Create a reference to the schema component with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The component name (e.g. `"Error"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full OpenAPI reference string
    /// (e.g. `"#/components/schemas/Error"`).
    pub fn reference(&self) -> String {
        format!("#/components/schemas/{}", self.name)
    }
}

impl Serialize for ModelRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("$ref", &self.reference())?;
        map.end()
    }
}

/// Descriptor of one possible HTTP response for a route.
///
/// `description` and `model` are always present; `headers` only when
/// non-empty (the builders drop empty header maps).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseSpec {
    pub description: String,
    pub model: ModelRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Headers>,
}

/// Insertion-ordered mapping from HTTP status code to [`ResponseSpec`].
///
/// Status codes are unique within a map; [`ResponseMap::insert`] rejects
/// duplicates. Serializes as a JSON object with stringified status-code
/// keys, the shape of an OpenAPI responses object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseMap {
    entries: Vec<(u16, ResponseSpec)>,
}

impl ResponseMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map with a single entry.
    pub fn single(status: u16, spec: ResponseSpec) -> Self {
        Self {
            entries: vec![(status, spec)],
        }
    }

    /// Insert a spec for a status code.
    ///
    /// # Errors
    ///
    /// Returns `ResponseError::DuplicateStatus` if the code is already
    /// present.
    pub fn insert(&mut self, status: u16, spec: ResponseSpec) -> Result<(), ResponseError> {
        if self.contains(status) {
            return Err(ResponseError::DuplicateStatus { status });
        }
        self.entries.push((status, spec));
        Ok(())
    }

    /// Look up the spec for a status code.
    pub fn get(&self, status: u16) -> Option<&ResponseSpec> {
        self.entries
            .iter()
            .find(|(code, _)| *code == status)
            .map(|(_, spec)| spec)
    }

    /// Whether a status code is present.
    pub fn contains(&self, status: u16) -> bool {
        self.entries.iter().any(|(code, _)| *code == status)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &ResponseSpec)> {
        self.entries.iter().map(|(code, spec)| (*code, spec))
    }
}

impl IntoIterator for ResponseMap {
    type Item = (u16, ResponseSpec);
    type IntoIter = std::vec::IntoIter<(u16, ResponseSpec)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for ResponseMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (status, spec) in &self.entries {
            map.serialize_entry(&status.to_string(), spec)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spec(description: &str, model: &str) -> ResponseSpec {
        ResponseSpec {
            description: description.into(),
            model: ModelRef::new(model),
            headers: None,
        }
    }

    #[test]
    fn model_ref_reference_string() {
        let model = ModelRef::new("Error");
        assert_eq!(model.name(), "Error");
        assert_eq!(model.reference(), "#/components/schemas/Error");
    }

    #[test]
    fn model_ref_serializes_as_ref_object() {
        let value = serde_json::to_value(ModelRef::new("User")).unwrap();
        assert_eq!(value, json!({ "$ref": "#/components/schemas/User" }));
    }

    #[test]
    fn response_spec_skips_empty_headers() {
        let value = serde_json::to_value(spec("ok", "User")).unwrap();
        assert!(value.get("headers").is_none());
        assert_eq!(value["description"], "ok");
    }

    #[test]
    fn response_map_insert_rejects_duplicate() {
        let mut map = ResponseMap::single(200, spec("ok", "User"));
        let result = map.insert(200, spec("also ok", "Other"));
        assert!(matches!(
            result,
            Err(ResponseError::DuplicateStatus { status: 200 })
        ));
        // First entry untouched
        assert_eq!(map.get(200).unwrap().description, "ok");
    }

    #[test]
    fn response_map_preserves_insertion_order() {
        let mut map = ResponseMap::new();
        map.insert(404, spec("not found", "Error")).unwrap();
        map.insert(200, spec("ok", "User")).unwrap();

        let codes: Vec<u16> = map.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec![404, 200]);
    }

    #[test]
    fn response_map_serializes_string_keys() {
        let map = ResponseMap::single(404, spec("not found", "Error"));
        let value = serde_json::to_value(&map).unwrap();
        assert_eq!(
            value,
            json!({
                "404": {
                    "description": "not found",
                    "model": { "$ref": "#/components/schemas/Error" }
                }
            })
        );
    }
}
