//! Backend library modules.
//!
//! Query text normalisation and role authorisation live in [`domain`];
//! [`inbound::http`] exposes them over Actix Web.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
