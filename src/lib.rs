//! API Schema Inference
//!
//! Builds request/response field schemas for API endpoints from a single
//! sample JSON payload.
//!
//! The sample's root must be an object. Every key becomes a property, in the
//! order it appears in the sample, and every value is classified into one of
//! six kinds. Strings are sniffed for a semantic format and arrays are
//! described by their first element.
//!
//! # Example
//!
//! ```
//! use api_schema::{infer, SchemaNode, StringFormat};
//!
//! let schema = infer(r#"{"email": "a@b.com", "tags": ["x", "y"]}"#).unwrap();
//! let properties = schema.properties().unwrap();
//!
//! let email = properties.get("email").unwrap();
//! assert_eq!(email.format(), Some(StringFormat::Email));
//! assert_eq!(email.max_length(), Some(255));
//!
//! let tags = properties.get("tags").unwrap();
//! assert_eq!(tags.max_items(), Some(10));
//! assert_eq!(tags.items().and_then(SchemaNode::max_length), Some(100));
//! ```
//!
//! # Inference Rules
//!
//! | Sample value | Node |
//! |--------------|------|
//! | contains `@` and `.` | `string`, format `email`, `maxLength` 255 |
//! | starts with `http://` or `https://` | `string`, format `uri`, `maxLength` 500 |
//! | starts with `YYYY-MM-DDTHH:MM:SS` | `string`, format `date-time` |
//! | other string of length `L` | `string`, `maxLength` max(100, 2L) |
//! | `null` | `string` |
//! | whole number | `integer` |
//! | other number | `number` |
//! | boolean | `boolean` |
//! | array of `N` elements | `array`, `maxItems` max(10, 2N), items from the first element |
//! | empty array | `array`, `maxItems` 10, `string` items |
//! | object | `object`, properties inferred recursively |
//!
//! # Endpoint Drafts
//!
//! An [`EndpointDraft`] holds a request and a response schema. Importing a
//! sample replaces the selected schema wholesale; fields can also be added or
//! removed one at a time with [`FieldEntry`].
//!
//! ```
//! use api_schema::{EndpointDraft, FieldEntry, HttpMethod, Kind, SchemaTarget};
//!
//! let mut endpoint = EndpointDraft::new(HttpMethod::Post, "/users");
//! endpoint
//!     .import_sample(SchemaTarget::Request, r#"{"name": "Ana"}"#)
//!     .unwrap();
//! endpoint
//!     .add_field(SchemaTarget::Request, &FieldEntry::new("admin", Kind::Boolean))
//!     .unwrap();
//!
//! let request = endpoint.schema(SchemaTarget::Request).properties().unwrap();
//! assert_eq!(request.keys().collect::<Vec<_>>(), vec!["name", "admin"]);
//! ```

mod catalog;
mod endpoint;
mod error;
mod field;
mod infer;
mod loader;
mod render;
mod repository;
mod schema;
mod types;

pub use catalog::{ApiDraft, Authentication, Category, DEFAULT_RATE_LIMIT};
pub use endpoint::{EndpointDraft, HttpMethod};
pub use error::{
    CatalogError, EndpointError, FieldError, ImportError, LoadError, RepositoryError,
};
pub use field::{FieldEntry, FieldInput};
pub use infer::{array_max_items, infer, infer_value, sniff_string, string_max_length};
pub use loader::{load_sample, load_sample_auto, load_sample_reader, STDIN_SOURCE};
pub use render::{badges, render_tree};
pub use repository::{ApiRepository, InMemoryRepository, StoredApi};
pub use schema::{Properties, SchemaNode};
pub use types::{
    json_type_name, Kind, SchemaTarget, StringFormat, EMAIL_MAX_LENGTH, HEADROOM_FACTOR,
    KIND_NAMES, MIN_MAX_ITEMS, MIN_STRING_MAX_LENGTH, URI_MAX_LENGTH,
};
