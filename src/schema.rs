//! Schema tree types.
//!
//! A [`SchemaNode`] describes the shape of one JSON value. Only objects carry
//! `properties`, only arrays carry `items`, and string attributes exist only on
//! the string variant, so a node can never hold attributes of another kind.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::{Kind, StringFormat};

/// Structural description of one JSON value.
///
/// Serializes to the object shape used by endpoint records, e.g.
/// `{"type":"string","format":"email","maxLength":255}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SchemaNode {
    String {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<StringFormat>,
        #[serde(
            rename = "maxLength",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        max_length: Option<u64>,
        #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
        enum_values: Option<Vec<String>>,
    },
    Integer,
    Number,
    Boolean,
    Array {
        #[serde(rename = "maxItems", default, skip_serializing_if = "Option::is_none")]
        max_items: Option<u64>,
        items: Box<SchemaNode>,
    },
    Object {
        #[serde(default)]
        properties: Properties,
    },
}

impl SchemaNode {
    /// A string node with no attributes.
    pub fn plain_string() -> Self {
        SchemaNode::String {
            format: None,
            max_length: None,
            enum_values: None,
        }
    }

    /// An object node with no properties.
    pub fn empty_object() -> Self {
        SchemaNode::Object {
            properties: Properties::new(),
        }
    }

    /// A bare node of a scalar kind.
    ///
    /// `Array` falls back to string items and `Object` to no properties.
    pub fn bare(kind: Kind) -> Self {
        match kind {
            Kind::String => SchemaNode::plain_string(),
            Kind::Integer => SchemaNode::Integer,
            Kind::Number => SchemaNode::Number,
            Kind::Boolean => SchemaNode::Boolean,
            Kind::Array => SchemaNode::Array {
                max_items: None,
                items: Box::new(SchemaNode::plain_string()),
            },
            Kind::Object => SchemaNode::empty_object(),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            SchemaNode::String { .. } => Kind::String,
            SchemaNode::Integer => Kind::Integer,
            SchemaNode::Number => Kind::Number,
            SchemaNode::Boolean => Kind::Boolean,
            SchemaNode::Array { .. } => Kind::Array,
            SchemaNode::Object { .. } => Kind::Object,
        }
    }

    /// Returns true for nodes without `properties` or `items`.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, SchemaNode::Array { .. } | SchemaNode::Object { .. })
    }

    pub fn properties(&self) -> Option<&Properties> {
        match self {
            SchemaNode::Object { properties } => Some(properties),
            _ => None,
        }
    }

    pub fn properties_mut(&mut self) -> Option<&mut Properties> {
        match self {
            SchemaNode::Object { properties } => Some(properties),
            _ => None,
        }
    }

    pub fn items(&self) -> Option<&SchemaNode> {
        match self {
            SchemaNode::Array { items, .. } => Some(items),
            _ => None,
        }
    }

    pub fn format(&self) -> Option<StringFormat> {
        match self {
            SchemaNode::String { format, .. } => *format,
            _ => None,
        }
    }

    pub fn max_length(&self) -> Option<u64> {
        match self {
            SchemaNode::String { max_length, .. } => *max_length,
            _ => None,
        }
    }

    pub fn max_items(&self) -> Option<u64> {
        match self {
            SchemaNode::Array { max_items, .. } => *max_items,
            _ => None,
        }
    }

    /// Number of nested object levels, counting this node.
    ///
    /// Leaves have depth 0; arrays have the depth of their items.
    pub fn depth(&self) -> usize {
        match self {
            SchemaNode::Object { properties } => {
                1 + properties
                    .values()
                    .map(SchemaNode::depth)
                    .max()
                    .unwrap_or(0)
            }
            SchemaNode::Array { items, .. } => items.depth(),
            _ => 0,
        }
    }
}

/// Ordered mapping from field name to schema node.
///
/// Keys are unique and keep their insertion order. Inserting an existing key
/// replaces the node in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    entries: Vec<(String, SchemaNode)>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a field, returning the previous node if any.
    pub fn insert(&mut self, name: impl Into<String>, node: SchemaNode) -> Option<SchemaNode> {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, node)),
            None => {
                self.entries.push((name, node));
                None
            }
        }
    }

    /// Remove a field, returning its node if it was present.
    pub fn remove(&mut self, name: &str) -> Option<SchemaNode> {
        let idx = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, node)| node)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut SchemaNode> {
        self.entries
            .iter_mut()
            .find(|(key, _)| key == name)
            .map(|(_, node)| node)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &SchemaNode> {
        self.entries.iter().map(|(_, node)| node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }
}

impl FromIterator<(String, SchemaNode)> for Properties {
    fn from_iter<I: IntoIterator<Item = (String, SchemaNode)>>(iter: I) -> Self {
        let mut properties = Properties::new();
        for (name, node) in iter {
            properties.insert(name, node);
        }
        properties
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, node) in &self.entries {
            map.serialize_entry(name, node)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Properties {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PropertiesVisitor)
    }
}

struct PropertiesVisitor;

impl<'de> Visitor<'de> for PropertiesVisitor {
    type Value = Properties;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of field names to schema nodes")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut properties = Properties::new();
        while let Some((name, node)) = access.next_entry::<String, SchemaNode>()? {
            properties.insert(name, node);
        }
        Ok(properties)
    }
}
