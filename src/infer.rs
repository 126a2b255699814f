//! Schema inference from a single JSON sample.
//!
//! The sample is the only evidence: arrays are described by their first
//! element, strings are classified by sniffing their content, and size bounds
//! are the sample's own size with headroom.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Number, Value};

use crate::error::ImportError;
use crate::schema::{Properties, SchemaNode};
use crate::types::{
    json_type_name, StringFormat, EMAIL_MAX_LENGTH, HEADROOM_FACTOR, MIN_MAX_ITEMS,
    MIN_STRING_MAX_LENGTH, URI_MAX_LENGTH,
};

static DATE_TIME_PREFIX: OnceLock<Regex> = OnceLock::new();

fn date_time_prefix() -> &'static Regex {
    // ASCII digits only; `\d` would also accept other Unicode digits.
    DATE_TIME_PREFIX.get_or_init(|| {
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}")
            .expect("date-time prefix pattern is valid")
    })
}

/// Infer an object schema from JSON text.
///
/// # Errors
///
/// Returns `ImportError::EmptyInput` for blank text, `ImportError::InvalidJson`
/// if the text does not decode, and `ImportError::NotAnObject` if the decoded
/// root is not an object.
///
/// # Example
///
/// ```
/// use api_schema::{infer, SchemaNode};
///
/// let schema = infer(r#"{"age": 30}"#).unwrap();
/// let properties = schema.properties().unwrap();
/// assert_eq!(properties.get("age"), Some(&SchemaNode::Integer));
/// ```
pub fn infer(json_text: &str) -> Result<SchemaNode, ImportError> {
    if json_text.trim().is_empty() {
        return Err(ImportError::EmptyInput);
    }

    let value: Value =
        serde_json::from_str(json_text).map_err(|source| ImportError::InvalidJson { source })?;

    infer_value(&value)
}

/// Infer an object schema from an already decoded sample.
pub fn infer_value(sample: &Value) -> Result<SchemaNode, ImportError> {
    let Value::Object(map) = sample else {
        return Err(ImportError::NotAnObject {
            actual: json_type_name(sample).to_string(),
        });
    };

    let schema = SchemaNode::Object {
        properties: infer_properties(map, 0),
    };
    tracing::debug!(
        fields = map.len(),
        depth = schema.depth(),
        "inferred schema from sample"
    );
    Ok(schema)
}

/// Classify a string sample by its content.
///
/// First match wins: email, then URI, then date-time, then plain string.
pub fn sniff_string(value: &str) -> SchemaNode {
    let (format, max_length) = if value.contains('@') && value.contains('.') {
        (Some(StringFormat::Email), Some(EMAIL_MAX_LENGTH))
    } else if value.starts_with("http://") || value.starts_with("https://") {
        (Some(StringFormat::Uri), Some(URI_MAX_LENGTH))
    } else if date_time_prefix().is_match(value) {
        (Some(StringFormat::DateTime), None)
    } else {
        (None, Some(string_max_length(value)))
    };

    SchemaNode::String {
        format,
        max_length,
        enum_values: None,
    }
}

/// `maxLength` for a plain string sample.
///
/// Length is counted in UTF-16 code units, as browsers report it.
pub fn string_max_length(value: &str) -> u64 {
    let len = value.encode_utf16().count() as u64;
    MIN_STRING_MAX_LENGTH.max(len * HEADROOM_FACTOR)
}

/// `maxItems` for an array sample of `len` elements.
pub fn array_max_items(len: usize) -> u64 {
    MIN_MAX_ITEMS.max(len as u64 * HEADROOM_FACTOR)
}

// --- Internal implementation ---

fn infer_properties(map: &Map<String, Value>, level: usize) -> Properties {
    map.iter()
        .map(|(key, value)| (key.clone(), infer_node(value, level)))
        .collect()
}

fn infer_node(value: &Value, level: usize) -> SchemaNode {
    match value {
        // null is reported as a string without sniffing
        Value::Null => SchemaNode::plain_string(),
        Value::String(s) => sniff_string(s),
        Value::Number(n) if is_whole(n) => SchemaNode::Integer,
        Value::Number(_) => SchemaNode::Number,
        Value::Bool(_) => SchemaNode::Boolean,
        Value::Array(arr) => infer_array(arr, level),
        Value::Object(map) => SchemaNode::Object {
            properties: infer_properties(map, level + 1),
        },
    }
}

fn infer_array(arr: &[Value], level: usize) -> SchemaNode {
    let items = match arr.first() {
        Some(first) => infer_node(first, level + 1),
        None => SchemaNode::plain_string(),
    };

    tracing::trace!(level, len = arr.len(), items = %items.kind(), "sampled array");

    SchemaNode::Array {
        max_items: Some(array_max_items(arr.len())),
        items: Box::new(items),
    }
}

/// Whole numbers are integers even when written with a fraction (`3.0`).
fn is_whole(n: &Number) -> bool {
    if n.is_i64() || n.is_u64() {
        return true;
    }
    n.as_f64()
        .map(|f| f.is_finite() && f.fract() == 0.0)
        .unwrap_or(false)
}
