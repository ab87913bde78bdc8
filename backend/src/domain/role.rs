//! Closed set of user roles.
//!
//! Roles travel as plain snake_case strings in tokens and request context.
//! Parsing is strict: anything outside the six labels, including case or
//! padding variants, is rejected with [`InvalidRole`] rather than mapped to a
//! fallback role.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Permission class of an authenticated identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum UserRole {
    /// Unit or network manager.
    Gestor,
    /// Programme coordinator.
    Coordenador,
    /// Technician with higher-education credentials.
    TecnicoSuperior,
    /// Technician with secondary-level credentials.
    TecnicoMedio,
    /// Surveillance staff.
    Vigilancia,
    /// General technician.
    Tecnico,
}

impl UserRole {
    /// Every role, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Gestor,
        Self::Coordenador,
        Self::TecnicoSuperior,
        Self::TecnicoMedio,
        Self::Vigilancia,
        Self::Tecnico,
    ];

    /// Wire label for this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gestor => "gestor",
            Self::Coordenador => "coordenador",
            Self::TecnicoSuperior => "tecnico_superior",
            Self::TecnicoMedio => "tecnico_medio",
            Self::Vigilancia => "vigilancia",
            Self::Tecnico => "tecnico",
        }
    }

    /// Parse a role that may be missing altogether.
    ///
    /// An absent value is an [`InvalidRole`] too; callers never get a default.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::UserRole;
    ///
    /// assert_eq!(UserRole::parse_optional(Some("vigilancia")), Ok(UserRole::Vigilancia));
    /// assert!(UserRole::parse_optional(None).is_err());
    /// ```
    pub fn parse_optional(raw: Option<&str>) -> Result<Self, InvalidRole> {
        match raw {
            Some(value) => value.parse(),
            None => Err(InvalidRole::missing()),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = InvalidRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| InvalidRole::unknown(s))
    }
}

impl TryFrom<&str> for UserRole {
    type Error = InvalidRole;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for UserRole {
    type Error = InvalidRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<UserRole> for String {
    fn from(value: UserRole) -> Self {
        value.as_str().to_owned()
    }
}

/// Role value was absent or outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", describe(.value.as_deref()))]
pub struct InvalidRole {
    value: Option<String>,
}

fn describe(value: Option<&str>) -> String {
    match value {
        Some(raw) => format!("role {raw:?} is not a recognised role"),
        None => "role is missing".to_owned(),
    }
}

impl InvalidRole {
    /// No role value was supplied.
    #[must_use]
    pub const fn missing() -> Self {
        Self { value: None }
    }

    /// A role value was supplied but is not one of the known labels.
    pub fn unknown(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    /// The rejected raw value, or `None` when the role was absent.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}
