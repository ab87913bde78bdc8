//! Domain ports for the hexagonal boundary.

mod identity_resolver;

#[cfg(test)]
pub use identity_resolver::MockIdentityResolver;
pub use identity_resolver::{FixtureIdentityResolver, IdentityResolver, RejectingIdentityResolver};
