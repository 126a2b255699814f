//! API definition drafts.
//!
//! An [`ApiDraft`] collects the descriptive fields of an API and the
//! endpoints built for it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::endpoint::EndpointDraft;
use crate::error::{CatalogError, EndpointError};

/// Default requests-per-hour limit for a new API.
pub const DEFAULT_RATE_LIMIT: u32 = 1000;

/// Authentication scheme an API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Authentication {
    #[default]
    Bearer,
    ApiKey,
    Oauth,
    Basic,
}

impl Authentication {
    pub fn parse(s: &str) -> Result<Self, CatalogError> {
        match s {
            "bearer" => Ok(Authentication::Bearer),
            "api-key" => Ok(Authentication::ApiKey),
            "oauth" => Ok(Authentication::Oauth),
            "basic" => Ok(Authentication::Basic),
            _ => Err(CatalogError::UnknownValue {
                field: "authentication",
                value: s.to_string(),
            }),
        }
    }
}

/// Catalog category of an API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Payment,
    User,
    Analytics,
    Notification,
    Integration,
    Security,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Payment => "payment",
            Category::User => "user",
            Category::Analytics => "analytics",
            Category::Notification => "notification",
            Category::Integration => "integration",
            Category::Security => "security",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CatalogError> {
        match s {
            "payment" => Ok(Category::Payment),
            "user" => Ok(Category::User),
            "analytics" => Ok(Category::Analytics),
            "notification" => Ok(Category::Notification),
            "integration" => Ok(Category::Integration),
            "security" => Ok(Category::Security),
            _ => Err(CatalogError::UnknownValue {
                field: "category",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An API definition under construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDraft {
    pub name: String,
    pub provider: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default)]
    pub authentication: Authentication,
    #[serde(default = "default_rate_limit")]
    pub rate_limit: u32,
    #[serde(default)]
    pub endpoints: Vec<EndpointDraft>,
    #[serde(skip)]
    next_endpoint_id: u64,
}

fn default_rate_limit() -> u32 {
    DEFAULT_RATE_LIMIT
}

impl Default for ApiDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            provider: String::new(),
            version: String::new(),
            description: String::new(),
            base_url: String::new(),
            category: None,
            authentication: Authentication::default(),
            rate_limit: DEFAULT_RATE_LIMIT,
            endpoints: Vec::new(),
            next_endpoint_id: 0,
        }
    }
}

impl ApiDraft {
    pub fn new(name: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            provider: provider.into(),
            ..Self::default()
        }
    }

    /// Append an endpoint and assign it the next id.
    ///
    /// # Errors
    ///
    /// Returns `EndpointError::EmptyPath` if the endpoint has no path.
    pub fn add_endpoint(&mut self, mut endpoint: EndpointDraft) -> Result<u64, EndpointError> {
        if endpoint.path.trim().is_empty() {
            return Err(EndpointError::EmptyPath);
        }

        // Deserialized drafts carry ids but no counter.
        let highest = self.endpoints.iter().filter_map(|e| e.id).max().unwrap_or(0);
        let id = self.next_endpoint_id.max(highest) + 1;
        self.next_endpoint_id = id;

        endpoint.id = Some(id);
        tracing::debug!(id, method = %endpoint.method, path = %endpoint.path, "added endpoint");
        self.endpoints.push(endpoint);
        Ok(id)
    }

    /// Remove the endpoint with `id`. Returns false if there was none.
    pub fn remove_endpoint(&mut self, id: u64) -> bool {
        let before = self.endpoints.len();
        self.endpoints.retain(|e| e.id != Some(id));
        self.endpoints.len() != before
    }

    pub fn endpoint(&self, id: u64) -> Option<&EndpointDraft> {
        self.endpoints.iter().find(|e| e.id == Some(id))
    }

    pub fn endpoint_mut(&mut self, id: u64) -> Option<&mut EndpointDraft> {
        self.endpoints.iter_mut().find(|e| e.id == Some(id))
    }

    /// Check the fields every API must have.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let required = [
            ("name", &self.name),
            ("provider", &self.provider),
            ("version", &self.version),
            ("baseUrl", &self.base_url),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CatalogError::MissingField { field });
            }
        }
        Ok(())
    }

    /// Catalog filter: `term` matches name or provider, ignoring case, and
    /// `category` (when given) must be equal.
    pub fn matches(&self, term: &str, category: Option<Category>) -> bool {
        let term = term.to_lowercase();
        let matches_search = self.name.to_lowercase().contains(&term)
            || self.provider.to_lowercase().contains(&term);
        let matches_category = category.map_or(true, |c| self.category == Some(c));
        matches_search && matches_category
    }
}
