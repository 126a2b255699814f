//! Manual field builder.
//!
//! Builds one schema node from values typed by a user and places it in an
//! object's properties, keyed by field name.

use crate::error::FieldError;
use crate::schema::{Properties, SchemaNode};
use crate::types::Kind;

/// A field described directly rather than inferred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry {
    pub name: String,
    pub kind: Kind,
    pub max_length: Option<u64>,
    pub max_items: Option<u64>,
    pub enum_values: Option<Vec<String>>,
}

impl FieldEntry {
    /// Create a field with no bounds or allowed values.
    pub fn new(name: impl Into<String>, kind: Kind) -> Self {
        Self {
            name: name.into(),
            kind,
            max_length: None,
            max_items: None,
            enum_values: None,
        }
    }

    /// Set `maxLength` (string fields only).
    pub fn max_length(mut self, max_length: u64) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Set `maxItems` (array fields only).
    pub fn max_items(mut self, max_items: u64) -> Self {
        self.max_items = Some(max_items);
        self
    }

    /// Set the allowed values (string fields only).
    pub fn enum_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Build the schema node for this field.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::AttributeNotAllowed` when a bound or enum is set on
    /// a kind that cannot carry it.
    pub fn to_node(&self) -> Result<SchemaNode, FieldError> {
        if self.kind != Kind::String {
            if self.max_length.is_some() {
                return Err(self.not_allowed("maxLength"));
            }
            if self.enum_values.is_some() {
                return Err(self.not_allowed("enum"));
            }
        }
        if self.kind != Kind::Array && self.max_items.is_some() {
            return Err(self.not_allowed("maxItems"));
        }

        let node = match self.kind {
            Kind::String => SchemaNode::String {
                format: None,
                max_length: self.max_length,
                enum_values: self.enum_values.clone(),
            },
            Kind::Array => SchemaNode::Array {
                max_items: self.max_items,
                items: Box::new(SchemaNode::plain_string()),
            },
            other => SchemaNode::bare(other),
        };
        Ok(node)
    }

    /// Insert this field into `properties`, replacing any field of the same name.
    ///
    /// Returns the replaced node, if any.
    pub fn insert_into(&self, properties: &mut Properties) -> Result<Option<SchemaNode>, FieldError> {
        let node = self.to_node()?;
        Ok(properties.insert(self.name.clone(), node))
    }

    fn not_allowed(&self, attribute: &str) -> FieldError {
        FieldError::AttributeNotAllowed {
            attribute: attribute.to_string(),
            kind: self.kind.to_string(),
        }
    }
}

/// Raw field form values, all as typed text.
///
/// Blank bound and enum values mean "not set".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInput {
    pub name: String,
    pub kind: String,
    pub max_length: String,
    pub max_items: String,
    /// Comma-separated allowed values.
    pub enum_values: String,
}

impl Default for FieldInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: Kind::String.to_string(),
            max_length: String::new(),
            max_items: String::new(),
            enum_values: String::new(),
        }
    }
}

impl FieldInput {
    /// Parse the form values into a field entry.
    ///
    /// # Errors
    ///
    /// Returns `FieldError` for a blank name, an unknown kind, or a bound that
    /// is not a non-negative integer.
    pub fn parse(&self) -> Result<FieldEntry, FieldError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FieldError::EmptyName);
        }

        let kind_name = self.kind.trim();
        let kind = Kind::parse(kind_name).ok_or_else(|| FieldError::UnknownKind {
            value: kind_name.to_string(),
        })?;

        let enum_values = if self.enum_values.trim().is_empty() {
            None
        } else {
            Some(split_enum(&self.enum_values))
        };

        Ok(FieldEntry {
            name: name.to_string(),
            kind,
            max_length: parse_bound("maxLength", &self.max_length)?,
            max_items: parse_bound("maxItems", &self.max_items)?,
            enum_values,
        })
    }
}

fn parse_bound(attribute: &str, raw: &str) -> Result<Option<u64>, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<u64>()
        .map(Some)
        .map_err(|_| FieldError::InvalidBound {
            attribute: attribute.to_string(),
            value: raw.to_string(),
        })
}

fn split_enum(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, kind: &str) -> FieldInput {
        FieldInput {
            name: name.into(),
            kind: kind.into(),
            ..FieldInput::default()
        }
    }

    #[test]
    fn string_field_with_bounds_and_enum() {
        let entry = FieldEntry::new("status", Kind::String)
            .max_length(20)
            .enum_values(["active", "inactive"]);
        let node = entry.to_node().unwrap();

        assert_eq!(
            node,
            SchemaNode::String {
                format: None,
                max_length: Some(20),
                enum_values: Some(vec!["active".into(), "inactive".into()]),
            }
        );
    }

    #[test]
    fn array_field_gets_string_items() {
        let node = FieldEntry::new("tags", Kind::Array)
            .max_items(5)
            .to_node()
            .unwrap();
        assert_eq!(node.max_items(), Some(5));
        assert_eq!(node.items(), Some(&SchemaNode::plain_string()));
    }

    #[test]
    fn scalar_and_object_fields_are_bare() {
        assert_eq!(
            FieldEntry::new("n", Kind::Integer).to_node().unwrap(),
            SchemaNode::Integer
        );
        assert_eq!(
            FieldEntry::new("o", Kind::Object).to_node().unwrap(),
            SchemaNode::empty_object()
        );
    }

    #[test]
    fn max_length_rejected_on_integer() {
        let err = FieldEntry::new("age", Kind::Integer)
            .max_length(3)
            .to_node()
            .unwrap_err();
        assert_eq!(
            err,
            FieldError::AttributeNotAllowed {
                attribute: "maxLength".into(),
                kind: "integer".into(),
            }
        );
    }

    #[test]
    fn max_items_rejected_on_string() {
        let err = FieldEntry::new("name", Kind::String)
            .max_items(3)
            .to_node()
            .unwrap_err();
        assert!(matches!(err, FieldError::AttributeNotAllowed { ref attribute, .. } if attribute == "maxItems"));
    }

    #[test]
    fn enum_rejected_on_boolean() {
        let err = FieldEntry::new("flag", Kind::Boolean)
            .enum_values(["yes"])
            .to_node()
            .unwrap_err();
        assert!(matches!(err, FieldError::AttributeNotAllowed { ref attribute, .. } if attribute == "enum"));
    }

    #[test]
    fn insert_overwrites_same_name() {
        let mut properties = Properties::new();
        FieldEntry::new("id", Kind::String)
            .insert_into(&mut properties)
            .unwrap();
        let replaced = FieldEntry::new("id", Kind::Integer)
            .insert_into(&mut properties)
            .unwrap();

        assert_eq!(replaced, Some(SchemaNode::plain_string()));
        assert_eq!(properties.len(), 1);
        assert_eq!(properties.get("id"), Some(&SchemaNode::Integer));
    }

    #[test]
    fn parse_full_form() {
        let form = FieldInput {
            name: " status ".into(),
            kind: "string".into(),
            max_length: "50".into(),
            max_items: String::new(),
            enum_values: "open, closed ,, pending".into(),
        };
        let entry = form.parse().unwrap();

        assert_eq!(entry.name, "status");
        assert_eq!(entry.kind, Kind::String);
        assert_eq!(entry.max_length, Some(50));
        assert_eq!(entry.max_items, None);
        assert_eq!(
            entry.enum_values,
            Some(vec!["open".into(), "closed".into(), "pending".into()])
        );
    }

    #[test]
    fn parse_defaults_to_string_kind() {
        let form = FieldInput {
            name: "title".into(),
            ..FieldInput::default()
        };
        assert_eq!(form.parse().unwrap().kind, Kind::String);
    }

    #[test]
    fn parse_rejects_blank_name() {
        assert_eq!(input("   ", "string").parse(), Err(FieldError::EmptyName));
    }

    #[test]
    fn parse_rejects_unknown_kind() {
        assert_eq!(
            input("x", "date").parse(),
            Err(FieldError::UnknownKind {
                value: "date".into()
            })
        );
    }

    #[test]
    fn parse_rejects_bad_bound() {
        let form = FieldInput {
            max_items: "-1".into(),
            ..input("list", "array")
        };
        assert_eq!(
            form.parse(),
            Err(FieldError::InvalidBound {
                attribute: "maxItems".into(),
                value: "-1".into(),
            })
        );
    }
}
