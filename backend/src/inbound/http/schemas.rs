//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of `ToSchema`; the wrappers here mirror their wire
//! shape so utoipa can document them from the adapter layer.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Authentication failed, is missing, or carried an unusable role.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// The caller's role is not on the operation's allow-list.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "forbidden")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "role is not permitted to perform this operation")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "6f1c1c3e-2a0b-4a4e-9d55-0c8f6f1e2b11")]
    trace_id: Option<String>,
    /// Supplementary error details, such as the rejected role.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::UserRole`].
#[derive(ToSchema)]
#[schema(as = UserRole)]
pub enum UserRoleSchema {
    /// Unit or network manager.
    #[schema(rename = "gestor")]
    Gestor,
    /// Programme coordinator.
    #[schema(rename = "coordenador")]
    Coordenador,
    /// Technician with higher-education credentials.
    #[schema(rename = "tecnico_superior")]
    TecnicoSuperior,
    /// Technician with secondary-level credentials.
    #[schema(rename = "tecnico_medio")]
    TecnicoMedio,
    /// Surveillance staff.
    #[schema(rename = "vigilancia")]
    Vigilancia,
    /// General technician.
    #[schema(rename = "tecnico")]
    Tecnico,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn role_schema_lists_every_label() {
        let json = schema_to_json::<UserRoleSchema>();
        for role in crate::domain::UserRole::ALL {
            assert!(json.contains(role.as_str()), "missing {role} in {json}");
        }
    }

    #[test]
    fn error_schema_uses_wire_field_names() {
        let json = schema_to_json::<ErrorSchema>();
        assert!(json.contains("traceId"), "schema should use camelCase: {json}");
        assert!(json.contains("message"));
    }
}
