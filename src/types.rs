//! Core types shared by inference, the field builder and the endpoint draft.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `maxLength` assigned to strings sniffed as email addresses.
pub const EMAIL_MAX_LENGTH: u64 = 255;

/// `maxLength` assigned to strings sniffed as URIs.
pub const URI_MAX_LENGTH: u64 = 500;

/// Floor for the `maxLength` of plain strings.
pub const MIN_STRING_MAX_LENGTH: u64 = 100;

/// Floor for the `maxItems` of arrays.
pub const MIN_MAX_ITEMS: u64 = 10;

/// Multiplier applied to the sample's length or element count.
pub const HEADROOM_FACTOR: u64 = 2;

/// Kind names accepted by the field builder, in display order.
pub const KIND_NAMES: &[&str] = &["string", "integer", "number", "boolean", "array", "object"];

/// Returns the JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Which schema slot of an endpoint an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaTarget {
    #[default]
    Request,
    Response,
}

impl SchemaTarget {
    /// Returns the key the slot is stored under in an endpoint record.
    pub fn slot_key(&self) -> &'static str {
        match self {
            SchemaTarget::Request => "requestSchema",
            SchemaTarget::Response => "responseSchema",
        }
    }

    /// Create target from a request flag (true = Request, false = Response).
    pub fn from_request_flag(is_request: bool) -> Self {
        if is_request {
            SchemaTarget::Request
        } else {
            SchemaTarget::Response
        }
    }

    /// Parse `request` or `response`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "request" => Some(SchemaTarget::Request),
            "response" => Some(SchemaTarget::Response),
            _ => None,
        }
    }
}

/// Semantic format detected by content sniffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StringFormat {
    Email,
    Uri,
    DateTime,
}

impl StringFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            StringFormat::Email => "email",
            StringFormat::Uri => "uri",
            StringFormat::DateTime => "date-time",
        }
    }
}

impl fmt::Display for StringFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a schema node without its attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Integer => "integer",
            Kind::Number => "number",
            Kind::Boolean => "boolean",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }

    /// Parse a kind name.
    ///
    /// Returns `None` for unknown values (caller should error).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "string" => Some(Kind::String),
            "integer" => Some(Kind::Integer),
            "number" => Some(Kind::Number),
            "boolean" => Some(Kind::Boolean),
            "array" => Some(Kind::Array),
            "object" => Some(Kind::Object),
            _ => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn target_slot_key() {
        assert_eq!(SchemaTarget::Request.slot_key(), "requestSchema");
        assert_eq!(SchemaTarget::Response.slot_key(), "responseSchema");
    }

    #[test]
    fn target_from_flag() {
        assert_eq!(SchemaTarget::from_request_flag(true), SchemaTarget::Request);
        assert_eq!(
            SchemaTarget::from_request_flag(false),
            SchemaTarget::Response
        );
    }

    #[test]
    fn kind_parse_valid() {
        for name in KIND_NAMES {
            let kind = Kind::parse(name).unwrap();
            assert_eq!(kind.as_str(), *name);
        }
    }

    #[test]
    fn kind_parse_invalid() {
        assert_eq!(Kind::parse("null"), None);
        assert_eq!(Kind::parse("String"), None);
        assert_eq!(Kind::parse(""), None);
    }

    #[test]
    fn format_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_value(StringFormat::DateTime).unwrap(),
            json!("date-time")
        );
        assert_eq!(StringFormat::Uri.to_string(), "uri");
    }

    #[test]
    fn type_names() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!([1])), "array");
        assert_eq!(json_type_name(&json!(1.5)), "number");
    }
}
