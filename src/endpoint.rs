//! Endpoint drafts and their request/response schema slots.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EndpointError, FieldError, ImportError};
use crate::field::FieldEntry;
use crate::infer::infer;
use crate::schema::SchemaNode;
use crate::types::SchemaTarget;

/// HTTP method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }

    /// Parse a method name, case-insensitively.
    pub fn parse(s: &str) -> Result<Self, EndpointError> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            "PATCH" => Ok(HttpMethod::Patch),
            _ => Err(EndpointError::UnknownMethod {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An endpoint under construction.
///
/// Both schema slots start as empty objects. `id` is assigned when the
/// endpoint is added to an [`ApiDraft`](crate::ApiDraft).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub method: HttpMethod,
    pub path: String,
    #[serde(default)]
    pub description: String,
    pub request_schema: SchemaNode,
    pub response_schema: SchemaNode,
}

impl Default for EndpointDraft {
    fn default() -> Self {
        Self {
            id: None,
            method: HttpMethod::default(),
            path: String::new(),
            description: String::new(),
            request_schema: SchemaNode::empty_object(),
            response_schema: SchemaNode::empty_object(),
        }
    }
}

impl EndpointDraft {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            ..Self::default()
        }
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn schema(&self, target: SchemaTarget) -> &SchemaNode {
        match target {
            SchemaTarget::Request => &self.request_schema,
            SchemaTarget::Response => &self.response_schema,
        }
    }

    pub fn schema_mut(&mut self, target: SchemaTarget) -> &mut SchemaNode {
        match target {
            SchemaTarget::Request => &mut self.request_schema,
            SchemaTarget::Response => &mut self.response_schema,
        }
    }

    /// Infer a schema from `json_text` and replace the selected slot with it.
    ///
    /// The previous schema is discarded entirely. On error the draft is not
    /// modified.
    pub fn import_sample(
        &mut self,
        target: SchemaTarget,
        json_text: &str,
    ) -> Result<(), ImportError> {
        let schema = infer(json_text)?;
        tracing::debug!(
            path = %self.path,
            slot = target.slot_key(),
            fields = schema.properties().map_or(0, |p| p.len()),
            "replaced schema from sample"
        );
        *self.schema_mut(target) = schema;
        Ok(())
    }

    /// Add a manually built field to the selected slot.
    ///
    /// Returns the node it replaced, if a field of that name existed.
    ///
    /// # Errors
    ///
    /// Returns `FieldError` if the field is invalid or the slot is not an object.
    pub fn add_field(
        &mut self,
        target: SchemaTarget,
        field: &FieldEntry,
    ) -> Result<Option<SchemaNode>, FieldError> {
        let properties = self
            .schema_mut(target)
            .properties_mut()
            .ok_or_else(|| FieldError::NotAnObject {
                target: target_name(target).to_string(),
            })?;
        field.insert_into(properties)
    }

    /// Remove a field from the selected slot.
    pub fn remove_field(&mut self, target: SchemaTarget, name: &str) -> Option<SchemaNode> {
        self.schema_mut(target).properties_mut()?.remove(name)
    }
}

fn target_name(target: SchemaTarget) -> &'static str {
    match target {
        SchemaTarget::Request => "request",
        SchemaTarget::Response => "response",
    }
}
