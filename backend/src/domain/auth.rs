//! Authentication primitives such as bearer credentials.
//!
//! Keep inbound header parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port.

use std::fmt;

use zeroize::Zeroizing;

/// Domain error returned when credential values are unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsValidationError {
    /// Token was missing or blank once trimmed.
    #[error("access token must not be empty")]
    EmptyToken,
}

/// Opaque bearer credential handed to an identity resolver.
///
/// The token is trimmed and wiped from memory on drop. `Debug` never prints
/// the value.
///
/// # Examples
/// ```
/// use backend::domain::AccessToken;
///
/// let token = AccessToken::try_from_raw("  abc123 ").unwrap();
/// assert_eq!(token.expose(), "abc123");
/// assert!(!format!("{token:?}").contains("abc123"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(Zeroizing<String>);

impl AccessToken {
    /// Validate a raw token string.
    pub fn try_from_raw(raw: &str) -> Result<Self, CredentialsValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CredentialsValidationError::EmptyToken);
        }
        Ok(Self(Zeroizing::new(trimmed.to_owned())))
    }

    /// Raw token text for verification adapters.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_tokens_are_rejected(#[case] raw: &str) {
        let err = AccessToken::try_from_raw(raw).expect_err("blank token");
        assert_eq!(err, CredentialsValidationError::EmptyToken);
    }

    #[rstest]
    fn debug_output_is_redacted() {
        let token = AccessToken::try_from_raw("s3cr3t").expect("valid token");
        assert_eq!(format!("{token:?}"), "AccessToken(<redacted>)");
        assert_eq!(token.expose(), "s3cr3t");
    }
}
