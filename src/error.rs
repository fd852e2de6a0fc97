use thiserror::Error;

/// Errors an identity provider can report. The rendered message is what
/// reaches the user, verbatim; the editor core never inspects these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("There is no user record corresponding to this identifier: {0}")]
    UserNotFound(String),

    #[error("The password is invalid for the given email address")]
    InvalidPassword,

    #[error("The email address '{0}' is already in use by another account")]
    EmailInUse(String),

    #[error("The password must be at least {minimum} characters long")]
    WeakPassword { minimum: usize },

    /// An uninterpreted message from a remote backend, passed through
    /// as-is.
    #[error("{0}")]
    Backend(String),
}

/// Errors surfaced by the session controller to whoever drives the login
/// overlay. The provider's message is carried verbatim; there is no retry
/// and no structured classification.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    #[error("{0}")]
    Provider(String),
}

impl From<ProviderError> for AuthError {
    fn from(error: ProviderError) -> Self {
        AuthError::Provider(error.to_string())
    }
}

/// Errors that can occur when converting a custom document format into an
/// `Outline`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OutlineConversionError {
    #[error("Invalid document: {0}")]
    ValidationError(String),
}
