//! Driving port for turning credentials into an authenticated identity.
//!
//! Token verification lives behind this trait so inbound adapters never
//! import it. Tests and local development swap in
//! [`FixtureIdentityResolver`] without touching the real verification path.

use std::num::NonZeroU32;

use async_trait::async_trait;
use tracing::warn;
use uuid::{Uuid, uuid};

use crate::domain::{AccessToken, Error, Identity, UnitId, UserId, UserRole, Username};

/// Resolve the identity behind an access token.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Verify `token` and return the identity it represents.
    ///
    /// Implementations return [`Error::unauthorized`] for tokens they cannot
    /// verify and never invent a role for identities that lack one.
    async fn resolve(&self, token: &AccessToken) -> Result<Identity, Error>;
}

const FIXTURE_USER_ID: Uuid = uuid!("123e4567-e89b-12d3-a456-426614174000");
const FIXTURE_USERNAME: &str = "gestor.fixture";
const FIXTURE_UNIT: NonZeroU32 = NonZeroU32::MIN;

/// Resolver returning one fixed identity for every token.
#[derive(Debug, Clone)]
pub struct FixtureIdentityResolver {
    identity: Identity,
}

impl FixtureIdentityResolver {
    /// Resolve every token to `identity`.
    #[must_use]
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }

    /// Same fixture user, holding `role` instead.
    #[must_use]
    pub fn with_role(self, role: UserRole) -> Self {
        let identity = Identity::new(
            self.identity.id().clone(),
            self.identity.username().clone(),
            role,
            self.identity.unit(),
        );
        Self { identity }
    }

    /// The identity handed out.
    #[must_use]
    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}

impl Default for FixtureIdentityResolver {
    fn default() -> Self {
        Self::new(Identity::new(
            UserId::from(FIXTURE_USER_ID),
            Username::from_static(FIXTURE_USERNAME),
            UserRole::Gestor,
            Some(UnitId::from(FIXTURE_UNIT)),
        ))
    }
}

#[async_trait]
impl IdentityResolver for FixtureIdentityResolver {
    async fn resolve(&self, _token: &AccessToken) -> Result<Identity, Error> {
        Ok(self.identity.clone())
    }
}

/// Resolver used when no verifier is configured: every token is refused.
#[derive(Debug, Default, Clone, Copy)]
pub struct RejectingIdentityResolver;

#[async_trait]
impl IdentityResolver for RejectingIdentityResolver {
    async fn resolve(&self, _token: &AccessToken) -> Result<Identity, Error> {
        warn!("access token presented but no identity verifier is configured");
        Err(Error::unauthorized("invalid credentials"))
    }
}
