//! Authenticated identity carried through a single request.
//!
//! An [`Identity`] is produced by an identity resolver once credentials have
//! been verified elsewhere. It always holds exactly one [`UserRole`]; payloads
//! with a missing or unknown role never become an identity.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::{InvalidRole, UserRole};

/// Validation errors returned by the identity constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityValidationError {
    /// User id was empty.
    #[error("user id must not be empty")]
    EmptyId,
    /// User id was not a lowercase hyphenated UUID.
    #[error("user id must be a canonical UUID")]
    InvalidId,
    /// Username was blank once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Unit id was zero.
    #[error("unit id must be a positive integer")]
    InvalidUnitId,
    /// Role was missing or outside the closed set.
    #[error(transparent)]
    InvalidRole(#[from] InvalidRole),
}

/// Stable user identifier stored as a UUID.
///
/// Only the lowercase hyphenated form is accepted, so equal ids always carry
/// equal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid, String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, IdentityValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Generate a new random [`UserId`].
    #[must_use]
    pub fn random() -> Self {
        let uuid = Uuid::new_v4();
        Self(uuid, uuid.to_string())
    }

    fn from_owned(id: String) -> Result<Self, IdentityValidationError> {
        if id.is_empty() {
            return Err(IdentityValidationError::EmptyId);
        }
        let parsed = Uuid::parse_str(&id).map_err(|_| IdentityValidationError::InvalidId)?;
        if parsed.hyphenated().to_string() != id {
            return Err(IdentityValidationError::InvalidId);
        }
        Ok(Self(parsed, id))
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.1
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value, value.hyphenated().to_string())
    }
}

impl TryFrom<String> for UserId {
    type Error = IdentityValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Login name of the authenticated user, trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Trim and validate a username.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, IdentityValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(IdentityValidationError::EmptyUsername);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Wrap a compile-time username that is already trimmed and non-empty.
    pub(crate) fn from_static(raw: &'static str) -> Self {
        debug_assert!(
            !raw.is_empty() && raw.trim() == raw,
            "static usernames must be trimmed and non-empty"
        );
        Self(raw.to_owned())
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = IdentityValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Organisational unit an identity is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct UnitId(u32);

impl UnitId {
    /// Validate a unit id; zero is reserved.
    pub const fn new(raw: u32) -> Result<Self, IdentityValidationError> {
        if raw == 0 {
            return Err(IdentityValidationError::InvalidUnitId);
        }
        Ok(Self(raw))
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UnitId> for u32 {
    fn from(value: UnitId) -> Self {
        value.0
    }
}

impl From<NonZeroU32> for UnitId {
    fn from(value: NonZeroU32) -> Self {
        Self(value.get())
    }
}

impl TryFrom<u32> for UnitId {
    type Error = IdentityValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Authenticated principal for one request.
///
/// ## Invariants
/// - exactly one role from the closed [`UserRole`] set;
/// - read-only once built; there are no setters.
///
/// # Examples
/// ```
/// use backend::domain::{Identity, UserRole};
///
/// let identity = Identity::try_from_parts(
///     "3fa85f64-5717-4562-b3fc-2c963f66afa6",
///     "ana.souza",
///     Some("coordenador"),
///     Some(7),
/// )
/// .unwrap();
/// assert_eq!(identity.role(), UserRole::Coordenador);
/// assert_eq!(identity.unit().map(|unit| unit.get()), Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IdentityDto", into = "IdentityDto")]
pub struct Identity {
    id: UserId,
    username: Username,
    role: UserRole,
    unit: Option<UnitId>,
}

impl Identity {
    /// Build an identity from validated components.
    #[must_use]
    pub fn new(id: UserId, username: Username, role: UserRole, unit: Option<UnitId>) -> Self {
        Self {
            id,
            username,
            role,
            unit,
        }
    }

    /// Build an identity from raw claim values.
    ///
    /// The role is checked against the closed set; `None` is rejected.
    pub fn try_from_parts(
        id: impl AsRef<str>,
        username: impl AsRef<str>,
        role: Option<&str>,
        unit: Option<u32>,
    ) -> Result<Self, IdentityValidationError> {
        let id = UserId::new(id)?;
        let username = Username::new(username)?;
        let role = UserRole::parse_optional(role)?;
        let unit = unit.map(UnitId::new).transpose()?;
        Ok(Self::new(id, username, role, unit))
    }

    /// Stable user identifier.
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Login name.
    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// The single role held for this request.
    #[must_use]
    pub fn role(&self) -> UserRole {
        self.role
    }

    /// Unit scope, when the identity is bound to one.
    #[must_use]
    pub fn unit(&self) -> Option<UnitId> {
        self.unit
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
struct IdentityDto {
    id: String,
    username: String,
    #[serde(default)]
    role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unit_id: Option<u32>,
}

impl From<Identity> for IdentityDto {
    fn from(value: Identity) -> Self {
        let Identity {
            id,
            username,
            role,
            unit,
        } = value;
        Self {
            id: id.into(),
            username: username.into(),
            role: Some(role.into()),
            unit_id: unit.map(UnitId::get),
        }
    }
}

impl TryFrom<IdentityDto> for Identity {
    type Error = IdentityValidationError;

    fn try_from(value: IdentityDto) -> Result<Self, Self::Error> {
        Self::try_from_parts(value.id, value.username, value.role.as_deref(), value.unit_id)
    }
}

#[cfg(test)]
mod tests;
