//! Identity and role catalogue handlers.
//!
//! ```text
//! GET /api/v1/me      Authorization: Bearer <token>
//! GET /api/v1/roles   Authorization: Bearer <token>   (gestor, coordenador)
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Identity, RoleAllowList, UserRole};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::AuthenticatedIdentity;

/// Roles allowed to read the role catalogue.
pub const ROLE_CATALOGUE_READERS: RoleAllowList =
    RoleAllowList::new(&[UserRole::Gestor, UserRole::Coordenador]);

/// Response body for `GET /api/v1/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    /// Stable user identifier.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    /// Login name.
    #[schema(example = "ana.souza")]
    pub username: String,
    /// Role label from the closed role set.
    #[schema(example = "coordenador")]
    pub role: String,
    /// Unit the identity is scoped to, if any.
    #[schema(example = 7)]
    pub unit_id: Option<u32>,
}

impl From<&Identity> for IdentityResponse {
    fn from(value: &Identity) -> Self {
        Self {
            id: value.id().to_string(),
            username: value.username().to_string(),
            role: value.role().as_str().to_owned(),
            unit_id: value.unit().map(u32::from),
        }
    }
}

/// Response body for `GET /api/v1/roles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoleCatalogueResponse {
    /// Every role label, in declaration order.
    #[schema(example = json!(["gestor", "coordenador"]))]
    pub roles: Vec<String>,
}

/// Return the identity behind the caller's bearer token.
#[utoipa::path(
    get,
    path = "/api/v1/me",
    responses(
        (status = 200, description = "Caller identity", body = IdentityResponse),
        (status = 401, description = "Missing, invalid, or role-less credentials", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error")
    ),
    tags = ["identity"],
    operation_id = "currentIdentity"
)]
#[get("/me")]
pub async fn current_identity(auth: AuthenticatedIdentity) -> ApiResult<web::Json<IdentityResponse>> {
    Ok(web::Json(IdentityResponse::from(auth.identity())))
}

/// List the closed role catalogue.
#[utoipa::path(
    get,
    path = "/api/v1/roles",
    responses(
        (status = 200, description = "Role catalogue", body = RoleCatalogueResponse),
        (status = 401, description = "Missing or invalid credentials", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 403, description = "Role not permitted", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error")
    ),
    tags = ["identity"],
    operation_id = "listRoles"
)]
#[get("/roles")]
pub async fn list_roles(auth: AuthenticatedIdentity) -> ApiResult<web::Json<RoleCatalogueResponse>> {
    auth.require(&ROLE_CATALOGUE_READERS)?;
    let roles = UserRole::ALL
        .iter()
        .map(|role| role.as_str().to_owned())
        .collect();
    Ok(web::Json(RoleCatalogueResponse { roles }))
}
