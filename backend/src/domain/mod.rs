//! Domain primitives and ports.
//!
//! Purpose: keep query-text handling and role authorisation free of
//! framework types so inbound adapters only translate at the edge.
//!
//! Public surface:
//! - `normalize_query_text` / `NormalizedQuery`: whitespace normalisation.
//! - `UserRole` / `InvalidRole`: closed role set and its single error kind.
//! - `Identity`: authenticated principal carrying exactly one role.
//! - `RoleAllowList`: per-operation allow/deny decisions.
//! - `Error` / `ErrorCode`: transport-agnostic failures.
//! - `ports::IdentityResolver`: credential-to-identity port.

pub mod auth;
pub mod authorization;
pub mod error;
pub mod identity;
pub mod ports;
pub mod query_text;
pub mod role;
pub mod trace_id;

pub use self::auth::{AccessToken, CredentialsValidationError};
pub use self::authorization::RoleAllowList;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::identity::{Identity, IdentityValidationError, UnitId, UserId, Username};
pub use self::query_text::{NormalizedQuery, is_query_whitespace, normalize_query_text};
pub use self::role::{InvalidRole, UserRole};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
