//! Response schemas for structured output.
//!
//! Mirrors the OpenAPI subset generation providers accept for constrained
//! decoding: typed nodes, object properties, and a required list.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The type of a schema node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaType {
    /// A string
    String,
    /// A floating point number
    Number,
    /// An integer
    Integer,
    /// A boolean
    Boolean,
    /// An array of `items`
    Array,
    /// An object with `properties`
    Object,
}

/// A schema node
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// The node type
    #[serde(rename = "type")]
    pub kind: SchemaType,

    /// Human readable description passed to the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Object properties
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,

    /// Names of properties that must be present
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// Order the model should emit properties in
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub property_ordering: Vec<String>,

    /// Element schema for arrays
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
}

impl Schema {
    /// A bare node of the given type
    pub fn of(kind: SchemaType) -> Self {
        Self {
            kind,
            description: None,
            properties: BTreeMap::new(),
            required: Vec::new(),
            property_ordering: Vec::new(),
            items: None,
        }
    }

    /// A string node
    pub fn string() -> Self {
        Self::of(SchemaType::String)
    }

    /// An array of `items`
    pub fn array(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of(SchemaType::Array)
        }
    }

    /// An object whose properties are all required, emitted in the given order.
    pub fn object<I, K>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<String>,
    {
        let mut schema = Self::of(SchemaType::Object);
        for (name, prop) in properties {
            let name = name.into();
            schema.required.push(name.clone());
            schema.property_ordering.push(name.clone());
            schema.properties.insert(name, prop);
        }
        schema
    }

    /// Attach a description
    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..self
        }
    }
}
