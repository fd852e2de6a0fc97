pub mod provider;

pub use provider::*;

use crate::error::AuthError;

/// Drives the login overlay from the session signal and forwards account
/// actions to an [`IdentityProvider`].
///
/// The controller holds exactly one piece of state the editor core never
/// looks at: whether a user session is active. The overlay is visible
/// precisely while no session is active. Provider failures are returned
/// with the backend's message verbatim and leave the session, and
/// therefore the overlay, untouched.
pub struct SessionController<P: IdentityProvider> {
    provider: P,
    session: Option<UserProfile>,
}

impl<P: IdentityProvider> SessionController<P> {
    pub fn new(provider: P) -> Self {
        SessionController {
            provider,
            session: None,
        }
    }

    /// The boolean session signal: is a user currently authenticated?
    pub fn session_active(&self) -> bool {
        self.session.is_some()
    }

    /// The login overlay shows exactly while no session is active.
    pub fn overlay_visible(&self) -> bool {
        !self.session_active()
    }

    pub fn current_user(&self) -> Option<&UserProfile> {
        self.session.as_ref()
    }

    /// Signs in; success activates the session (dismissing the overlay).
    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        let profile = self.provider.sign_in(email, password)?;
        log::debug!("session started for {}", profile.email);
        self.session = Some(profile);
        Ok(())
    }

    /// Creates an account and activates the session for it, matching the
    /// backend convention that a fresh sign-up is also a sign-in.
    pub fn sign_up(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        let profile = self.provider.sign_up(email, password)?;
        log::debug!("account created, session started for {}", profile.email);
        self.session = Some(profile);
        Ok(())
    }

    /// Requests a password reset. Never touches the session either way.
    pub fn reset_password(&mut self, email: &str) -> Result<(), AuthError> {
        self.provider.reset_password(email)?;
        Ok(())
    }

    /// Signs out; success deactivates the session (raising the overlay).
    pub fn sign_out(&mut self) -> Result<(), AuthError> {
        self.provider.sign_out()?;
        if let Some(profile) = self.session.take() {
            log::debug!("session ended for {}", profile.email);
        }
        Ok(())
    }
}
