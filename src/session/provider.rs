use crate::error::ProviderError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A signed-in account as reported by the identity backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub uid: String,
    pub email: String,
}

/// The identity backend seam: sign-in, sign-up, password reset, and
/// sign-out as thin call-throughs.
///
/// Implementations are expected to be dumb pipes to whatever managed
/// service actually holds the accounts. A failure is reported once, with
/// a message fit for direct display; retrying and classifying errors is
/// left to the backend itself.
pub trait IdentityProvider {
    fn sign_in(&mut self, email: &str, password: &str) -> Result<UserProfile, ProviderError>;

    fn sign_up(&mut self, email: &str, password: &str) -> Result<UserProfile, ProviderError>;

    fn reset_password(&mut self, email: &str) -> Result<(), ProviderError>;

    fn sign_out(&mut self) -> Result<(), ProviderError>;
}

const MIN_PASSWORD_LEN: usize = 6;

/// An in-memory account store standing in for a managed identity backend,
/// used by tests and the CLI. Accounts live only as long as the provider.
#[derive(Debug, Default)]
pub struct InMemoryProvider {
    accounts: AHashMap<String, String>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        InMemoryProvider::default()
    }

    /// A provider pre-seeded with one account, for test setups.
    pub fn with_account(email: &str, password: &str) -> Self {
        let mut provider = InMemoryProvider::new();
        provider
            .sign_up(email, password)
            .expect("seed account must be valid");
        provider
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }
}

impl IdentityProvider for InMemoryProvider {
    fn sign_in(&mut self, email: &str, password: &str) -> Result<UserProfile, ProviderError> {
        match self.accounts.get(email) {
            None => Err(ProviderError::UserNotFound(email.to_string())),
            Some(stored) if stored != password => Err(ProviderError::InvalidPassword),
            Some(_) => Ok(UserProfile {
                uid: format!("uid-{}", uid_for(email)),
                email: email.to_string(),
            }),
        }
    }

    fn sign_up(&mut self, email: &str, password: &str) -> Result<UserProfile, ProviderError> {
        if self.accounts.contains_key(email) {
            return Err(ProviderError::EmailInUse(email.to_string()));
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(ProviderError::WeakPassword {
                minimum: MIN_PASSWORD_LEN,
            });
        }
        self.accounts.insert(email.to_string(), password.to_string());
        Ok(UserProfile {
            uid: format!("uid-{}", uid_for(email)),
            email: email.to_string(),
        })
    }

    fn reset_password(&mut self, email: &str) -> Result<(), ProviderError> {
        if !self.accounts.contains_key(email) {
            return Err(ProviderError::UserNotFound(email.to_string()));
        }
        // A real backend would send a reset email here; the stand-in only
        // validates that the account exists.
        Ok(())
    }

    fn sign_out(&mut self) -> Result<(), ProviderError> {
        Ok(())
    }
}

/// Stable per-email uid so repeated sign-ins report the same identity.
fn uid_for(email: &str) -> u64 {
    use std::hash::{BuildHasher, Hasher};
    let mut hasher = ahash::RandomState::with_seeds(7, 31, 127, 8191).build_hasher();
    hasher.write(email.as_bytes());
    hasher.finish()
}
