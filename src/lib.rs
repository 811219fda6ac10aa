//! OpenOA Site API
//!
//! Read-only JSON API behind the OpenOA public website.
//!
//! Layout:
//! - `catalog/`: the static content records, validated once at startup
//! - `lookup`: exact-match resolution of identifiers and doc topics
//! - `models`: wire shapes for every response and the contact body
//! - `openapi`: the OpenAPI document served at `/openapi.json`
//! - `api_server`: Axum router, handlers and HTTP error mapping (`api` feature)
//! - `config`, `notify`: environment settings and the contact sink (`api` feature)

pub mod catalog;
pub mod lookup;
pub mod models;
pub mod openapi;

#[cfg(feature = "api")]
pub mod api_server;
#[cfg(feature = "api")]
pub mod config;
#[cfg(feature = "api")]
pub mod notify;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError, DocPages};
pub use lookup::{DocTopic, LookupError};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppError, AppState};
#[cfg(feature = "api")]
pub use config::Settings;
