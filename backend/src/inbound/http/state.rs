//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` so they depend on
//! domain ports only and stay testable without real token verification.

use std::sync::Arc;

use crate::domain::ports::IdentityResolver;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Port turning bearer tokens into identities.
    pub identity: Arc<dyn IdentityResolver>,
}

impl HttpState {
    /// Build state around an identity resolver.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ports::FixtureIdentityResolver;
    /// use backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureIdentityResolver::default()));
    /// let _resolver = state.identity.clone();
    /// ```
    pub fn new(identity: Arc<dyn IdentityResolver>) -> Self {
        Self { identity }
    }
}
