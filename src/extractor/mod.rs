//! Schema extraction from an OpenAPI document.
//!
//! Every operation (one HTTP method on one path) is normalized into a single
//! synthetic object schema whose top-level properties group the request inputs:
//!
//! - `headers` - header parameters
//! - `query` - query string parameters
//! - `params` - path parameters
//! - `body` - the `application/json` request body schema
//!
//! Reusable component schemas are passed through untouched.
//!
//! # Example
//!
//! ```
//! use openapi_typegen::extractor::SchemaExtractor;
//! use serde_json::json;
//!
//! let document = json!({
//!     "paths": {
//!         "/pets/{id}": {
//!             "get": {
//!                 "operationId": "getPet",
//!                 "parameters": [
//!                     { "name": "id", "in": "path", "required": true, "schema": { "type": "string" } }
//!                 ]
//!             }
//!         }
//!     }
//! });
//!
//! let extraction = SchemaExtractor::new(&document).extract().unwrap();
//! assert!(extraction.operations.contains_key("getPet"));
//! ```

use crate::error::{Error, Result};
use crate::reference::Reference;
use crate::schema::{ObjectSchema, SchemaNode};
use indexmap::IndexMap;
use log::debug;
use serde_json::Value;

/// Property name of the request body inside an operation schema
pub const BODY_KEY: &str = "body";

const JSON_BODY_POINTER: &str = "/content/application~1json/schema";

/// HTTP methods recognized on a path item, in traversal priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method
    Get,
    /// HTTP PUT method
    Put,
    /// HTTP DELETE method
    Delete,
    /// HTTP POST method
    Post,
    /// HTTP OPTIONS method
    Options,
}

impl HttpMethod {
    /// All methods, in the order they are visited on each path item
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Post,
        HttpMethod::Options,
    ];

    /// Key of this method inside a path item
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Post => "post",
            HttpMethod::Options => "options",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.as_str().to_uppercase())
    }
}

/// Where a parameter value is carried in an HTTP request.
///
/// Only these locations are grouped into the operation schema; `cookie` and any
/// unrecognized location are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterLocation {
    /// HTTP header parameter
    Header,
    /// Query string parameter (e.g., `?page=1&limit=10`)
    Query,
    /// Path parameter embedded in the URL (e.g., `/users/{id}`)
    Path,
}

impl ParameterLocation {
    /// Parse the `in` field of a parameter
    pub fn parse(location: &str) -> Option<Self> {
        match location {
            "header" => Some(ParameterLocation::Header),
            "query" => Some(ParameterLocation::Query),
            "path" => Some(ParameterLocation::Path),
            _ => None,
        }
    }

    /// Property name of this location's group inside an operation schema
    pub fn group_key(&self) -> &'static str {
        match self {
            ParameterLocation::Header => "headers",
            ParameterLocation::Query => "query",
            ParameterLocation::Path => "params",
        }
    }
}

/// Declarations found in a document, each map in traversal order.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Synthesized request schemas keyed by raw operation id
    pub operations: IndexMap<String, SchemaNode>,
    /// Component schemas keyed by their raw name
    pub components: IndexMap<String, SchemaNode>,
}

/// A parameter after following its `$ref`, if any
#[derive(Debug)]
struct ResolvedParameter<'v> {
    name: Option<&'v str>,
    location: Option<&'v str>,
    required: bool,
    schema: SchemaNode,
}

/// Walks the operations and component schemas of one document.
pub struct SchemaExtractor<'a> {
    document: &'a Value,
}

impl<'a> SchemaExtractor<'a> {
    pub fn new(document: &'a Value) -> Self {
        Self { document }
    }

    /// Extract all operation and component declarations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOperationId`] for the first operation without an
    /// `operationId`, or [`Error::InvalidOperationId`] when it is neither a string
    /// nor a number. Nothing else fails: unresolvable references and missing
    /// schemas degrade to [`SchemaNode::Unknown`].
    pub fn extract(&self) -> Result<Extraction> {
        let mut extraction = Extraction::default();

        if let Some(paths) = self.document.get("paths").and_then(Value::as_object) {
            for (path, path_item) in paths {
                for method in HttpMethod::ALL {
                    let Some(operation) = path_item.get(method.as_str()) else {
                        continue;
                    };
                    if operation.is_null() {
                        continue;
                    }

                    let operation_id = operation_id(operation, method, path)?;

                    debug!("Extracting operation {} ({} {})", operation_id, method, path);
                    let schema = self.operation_schema(path_item, operation);
                    extraction
                        .operations
                        .insert(operation_id, SchemaNode::Object(schema));
                }
            }
        }

        if let Some(schemas) = self
            .document
            .pointer("/components/schemas")
            .and_then(Value::as_object)
        {
            for (name, schema) in schemas {
                extraction
                    .components
                    .insert(name.clone(), SchemaNode::root_from_value(schema));
            }
        }

        debug!(
            "Extracted {} operations and {} components",
            extraction.operations.len(),
            extraction.components.len()
        );
        Ok(extraction)
    }

    /// Build the synthetic request schema of one operation
    fn operation_schema(&self, path_item: &'a Value, operation: &'a Value) -> ObjectSchema {
        let mut groups: IndexMap<ParameterLocation, ObjectSchema> = IndexMap::new();

        // Path-level parameters first, so operation-level ones overwrite by name
        let parameters = parameter_list(path_item)
            .iter()
            .chain(parameter_list(operation).iter());

        for parameter in parameters {
            let resolved = self.resolve_parameter(parameter);

            let Some(location) = resolved.location.and_then(ParameterLocation::parse) else {
                debug!("Dropping parameter {:?} in {:?}", resolved.name, resolved.location);
                continue;
            };
            let Some(name) = resolved.name else {
                debug!("Dropping unnamed {:?} parameter", location);
                continue;
            };

            groups
                .entry(location)
                .or_default()
                .insert(name, resolved.schema, resolved.required);
        }

        let mut root = ObjectSchema::new();
        for (location, group) in groups {
            root.insert(location.group_key(), SchemaNode::Object(group), false);
        }
        if let Some(body) = self.json_body_schema(operation) {
            root.insert(BODY_KEY, SchemaNode::from_value(body), false);
        }
        root
    }

    fn resolve_parameter(&self, parameter: &'a Value) -> ResolvedParameter<'a> {
        let field = |value: &'a Value, key: &str| value.get(key).and_then(Value::as_str);
        let required = |value: &'a Value| value.get("required").and_then(Value::as_bool);

        let Some(raw) = parameter.get("$ref").and_then(Value::as_str) else {
            return ResolvedParameter {
                name: field(parameter, "name"),
                location: field(parameter, "in"),
                required: required(parameter).unwrap_or(false),
                schema: parameter
                    .get("schema")
                    .map(SchemaNode::from_value)
                    .unwrap_or(SchemaNode::Unknown),
            };
        };

        let target = Reference::new(raw).resolve(self.document);
        if target.is_none() {
            debug!("Unresolvable parameter reference {}", raw);
        }

        ResolvedParameter {
            name: field(parameter, "name").or_else(|| target.and_then(|t| field(t, "name"))),
            location: field(parameter, "in").or_else(|| target.and_then(|t| field(t, "in"))),
            required: required(parameter)
                .or_else(|| target.and_then(required))
                .unwrap_or(false),
            schema: target
                .and_then(|t| t.get("schema"))
                .map(SchemaNode::from_value)
                .unwrap_or(SchemaNode::Unknown),
        }
    }

    /// `requestBody.content["application/json"].schema`, following one `$ref`
    /// on the request body itself
    fn json_body_schema(&self, operation: &'a Value) -> Option<&'a Value> {
        let mut request_body = operation.get("requestBody")?;
        if let Some(raw) = request_body.get("$ref").and_then(Value::as_str) {
            request_body = Reference::new(raw).resolve(self.document)?;
        }
        request_body
            .pointer(JSON_BODY_POINTER)
            .filter(|schema| !schema.is_null())
    }
}

/// The operation's declaration key. Numeric ids are used in their decimal form.
fn operation_id(operation: &Value, method: HttpMethod, path: &str) -> Result<String> {
    match operation.get("operationId") {
        Some(Value::String(id)) if !id.is_empty() => Ok(id.clone()),
        Some(Value::Number(id)) => Ok(id.to_string()),
        None | Some(Value::Null) | Some(Value::String(_)) => Err(Error::MissingOperationId {
            method: method.to_string(),
            path: path.to_string(),
        }),
        Some(other) => Err(Error::InvalidOperationId {
            method: method.to_string(),
            path: path.to_string(),
            found: other.to_string(),
        }),
    }
}

fn parameter_list(value: &Value) -> &[Value] {
    value
        .get("parameters")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}
