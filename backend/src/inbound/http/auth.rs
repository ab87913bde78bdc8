//! Bearer authentication for HTTP handlers.
//!
//! [`AuthenticatedIdentity`] pulls the `Authorization: Bearer <token>` header,
//! hands the token to the configured [`IdentityResolver`] and yields the
//! resulting identity. Handlers then gate themselves with a
//! [`RoleAllowList`].
//!
//! [`IdentityResolver`]: crate::domain::ports::IdentityResolver

use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{AccessToken, Error, Identity, RoleAllowList};

use super::state::HttpState;

const BEARER_SCHEME: &str = "bearer";

/// Extract the bearer token from request headers.
fn bearer_token(req: &HttpRequest) -> Result<AccessToken, Error> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| Error::unauthorized("login required"))?;
    let value = header
        .to_str()
        .map_err(|_| Error::unauthorized("authorization header is not valid text"))?;
    let mut parts = value.split_ascii_whitespace();
    let (Some(scheme), Some(token), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(Error::unauthorized(
            "authorization header must be `Bearer <token>`",
        ));
    };
    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return Err(Error::unauthorized(
            "authorization header must use the Bearer scheme",
        ));
    }
    AccessToken::try_from_raw(token).map_err(|err| Error::unauthorized(err.to_string()))
}

/// Identity of the caller, resolved from the bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedIdentity(Identity);

impl AuthenticatedIdentity {
    /// Borrow the resolved identity.
    #[must_use]
    pub fn identity(&self) -> &Identity {
        &self.0
    }

    /// Take ownership of the resolved identity.
    #[must_use]
    pub fn into_inner(self) -> Identity {
        self.0
    }

    /// Return the identity if its role is on `allowed`, else `403 Forbidden`.
    pub fn require(&self, allowed: &RoleAllowList) -> Result<&Identity, Error> {
        allowed.authorize(&self.0)?;
        Ok(&self.0)
    }
}

impl FromRequest for AuthenticatedIdentity {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = bearer_token(req);
        let state = req.app_data::<web::Data<HttpState>>().cloned();
        Box::pin(async move {
            let token = token.inspect_err(|err| warn!(reason = %err, "bearer token rejected"))?;
            let state =
                state.ok_or_else(|| Error::internal("identity resolver is not configured"))?;
            let identity = state
                .identity
                .resolve(&token)
                .await
                .inspect_err(|err| warn!(code = ?err.code(), "identity resolution failed"))?;
            Ok(Self(identity))
        })
    }
}
