//! Role-based allow-lists for individual operations.
//!
//! Each operation declares which roles may run it. Decisions compare the
//! identity's single role against that list; there is no role hierarchy and
//! no implicit grant.

use serde_json::json;
use tracing::debug;

use super::{Error, Identity, InvalidRole, UserRole};

/// Roles permitted to perform one operation.
///
/// # Examples
/// ```
/// use backend::domain::{RoleAllowList, UserRole};
///
/// const MANAGERS: RoleAllowList =
///     RoleAllowList::new(&[UserRole::Gestor, UserRole::Coordenador]);
///
/// assert!(MANAGERS.allows(UserRole::Gestor));
/// assert!(!MANAGERS.allows(UserRole::Tecnico));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleAllowList {
    roles: &'static [UserRole],
}

impl RoleAllowList {
    /// Allow-list admitting exactly `roles`.
    #[must_use]
    pub const fn new(roles: &'static [UserRole]) -> Self {
        Self { roles }
    }

    /// Allow-list admitting every role.
    #[must_use]
    pub const fn all() -> Self {
        Self::new(&UserRole::ALL)
    }

    /// Roles on the list.
    #[must_use]
    pub const fn roles(&self) -> &'static [UserRole] {
        self.roles
    }

    /// Whether `role` is on the list.
    #[must_use]
    pub fn allows(&self, role: UserRole) -> bool {
        self.roles.contains(&role)
    }

    /// Check a validated role, returning [`Error::forbidden`] on deny.
    pub fn check(&self, role: UserRole) -> Result<(), Error> {
        if self.allows(role) {
            debug!(role = %role, "role allowed");
            return Ok(());
        }
        debug!(role = %role, "role denied");
        let allowed: Vec<&str> = self.roles.iter().map(|r| r.as_str()).collect();
        Err(Error::forbidden("role is not permitted to perform this operation")
            .with_details(json!({ "role": role.as_str(), "allowed": allowed })))
    }

    /// Check the role carried by an authenticated identity.
    pub fn authorize(&self, identity: &Identity) -> Result<(), Error> {
        self.check(identity.role())
    }

    /// Validate a raw role label and check it in one step.
    ///
    /// Missing or unknown labels surface as [`Error::unauthorized`] with an
    /// `invalid_role` detail code; known labels not on the list surface as
    /// [`Error::forbidden`].
    pub fn authorize_raw(&self, raw: Option<&str>) -> Result<UserRole, Error> {
        let role = UserRole::parse_optional(raw)?;
        self.check(role)?;
        Ok(role)
    }
}

impl From<InvalidRole> for Error {
    fn from(value: InvalidRole) -> Self {
        Self::unauthorized(value.to_string())
            .with_details(json!({ "code": "invalid_role", "role": value.value() }))
    }
}
