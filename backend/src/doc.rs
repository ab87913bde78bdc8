//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint, the adapter-side schema wrappers
//! and the bearer security scheme. Swagger UI serves it in debug builds.

use crate::inbound::http::identity::{IdentityResponse, RoleCatalogueResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, UserRoleSchema};
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the bearer security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Vigilancia backend API",
        description = "Bearer-authenticated identity and role catalogue endpoints plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerToken" = [])),
    paths(
        crate::inbound::http::identity::current_identity,
        crate::inbound::http::identity::list_roles,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        IdentityResponse,
        RoleCatalogueResponse,
        ErrorSchema,
        ErrorCodeSchema,
        UserRoleSchema
    )),
    tags(
        (name = "identity", description = "Caller identity and role catalogue"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
