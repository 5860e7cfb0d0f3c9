//! Normalized schema tree consumed by the emitter.
//!
//! Raw document schemas are loosely shaped JSON objects. [`SchemaNode::from_value`]
//! classifies every one of them into a closed set of variants using a fixed
//! precedence, so the emitter never has to inspect raw keys.

use crate::reference::{Reference, FALLBACK_TYPE};
use indexmap::{IndexMap, IndexSet};
use serde_json::{Map, Value};

/// A normalized schema
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// `$ref` pointer to another schema
    Reference(Reference),
    /// string, number, integer or boolean
    Scalar(ScalarType),
    /// Ordered properties plus required names
    Object(ObjectSchema),
    /// Element schema
    Array(Box<SchemaNode>),
    /// No recognizable shape; rendered as `any`
    Unknown,
}

/// Scalar schema types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    String,
    Number,
    Integer,
    Boolean,
}

impl ScalarType {
    /// Emitted type name; integers collapse into `number`
    pub fn type_name(&self) -> &'static str {
        match self {
            ScalarType::String => "string",
            ScalarType::Number | ScalarType::Integer => "number",
            ScalarType::Boolean => "boolean",
        }
    }
}

/// Object schema with properties in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSchema {
    pub properties: IndexMap<String, SchemaNode>,
    pub required: IndexSet<String>,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a property. An overwritten property keeps its position.
    pub fn insert(&mut self, name: &str, node: SchemaNode, required: bool) {
        self.properties.insert(name.to_string(), node);
        if required {
            self.required.insert(name.to_string());
        }
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.contains(name)
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        let properties = map
            .get("properties")
            .and_then(Value::as_object)
            .map(|props| {
                props
                    .iter()
                    .map(|(name, schema)| (name.clone(), SchemaNode::from_value(schema)))
                    .collect()
            })
            .unwrap_or_default();

        let required = map
            .get("required")
            .and_then(Value::as_array)
            .map(|names| {
                names
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            properties,
            required,
        }
    }
}

impl SchemaNode {
    /// Classify a raw schema.
    ///
    /// Precedence: declared `type` → `properties` → `items` → `$ref` → unknown.
    /// Anything that is not a JSON object (including `null` for a missing schema)
    /// is [`SchemaNode::Unknown`].
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return SchemaNode::Unknown;
        };

        match map.get("type").and_then(Value::as_str) {
            Some("string") => return SchemaNode::Scalar(ScalarType::String),
            Some("number") => return SchemaNode::Scalar(ScalarType::Number),
            Some("integer") => return SchemaNode::Scalar(ScalarType::Integer),
            Some("boolean") => return SchemaNode::Scalar(ScalarType::Boolean),
            Some("object") => return SchemaNode::Object(ObjectSchema::from_map(map)),
            Some("array") => return SchemaNode::array_from_map(map),
            _ => {}
        }

        if map.get("properties").is_some_and(Value::is_object) {
            SchemaNode::Object(ObjectSchema::from_map(map))
        } else if map.get("items").is_some_and(|items| !items.is_null()) {
            SchemaNode::array_from_map(map)
        } else if let Some(raw) = map.get("$ref").and_then(Value::as_str) {
            SchemaNode::Reference(Reference::new(raw))
        } else {
            SchemaNode::Unknown
        }
    }

    fn array_from_map(map: &Map<String, Value>) -> Self {
        let element = map
            .get("items")
            .map(SchemaNode::from_value)
            .unwrap_or(SchemaNode::Unknown);
        SchemaNode::Array(Box::new(element))
    }

    /// Classify a schema that is declared on its own (a component).
    ///
    /// A `$ref` here makes the declaration an alias no matter what else the
    /// schema says; everything else follows [`SchemaNode::from_value`].
    pub fn root_from_value(value: &Value) -> Self {
        match value.get("$ref").and_then(Value::as_str) {
            Some(raw) => SchemaNode::Reference(Reference::new(raw)),
            None => SchemaNode::from_value(value),
        }
    }

    /// Whether the node renders on a single line (anything but object and array)
    pub fn is_scalar(&self) -> bool {
        !matches!(self, SchemaNode::Object(_) | SchemaNode::Array(_))
    }

    /// Resolved type name: `object`, `array`, a scalar name, a reference target or `any`
    pub fn type_name(&self) -> String {
        match self {
            SchemaNode::Reference(reference) => reference.type_name(),
            SchemaNode::Scalar(scalar) => scalar.type_name().to_string(),
            SchemaNode::Object(_) => "object".to_string(),
            SchemaNode::Array(_) => "array".to_string(),
            SchemaNode::Unknown => FALLBACK_TYPE.to_string(),
        }
    }
}
