//! The sign-in state machine.

use starshelf_catalog::CatalogClient;
use starshelf_config::{ConfigStore, keys};
use tracing::{debug, info, warn};

use crate::error::AuthError;
use crate::surface::{LoginOutcome, LoginSurface};

/// Authentication state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthState {
    /// No valid session; nothing attempted yet or signed out.
    #[default]
    Unauthenticated,
    /// The interactive login surface is (or is about to be) shown.
    Authenticating,
    /// Token exchange succeeded; the account identity is known.
    Authenticated,
}

/// Owns the authentication lifecycle for one account.
///
/// Re-entrant: [`sign_out`](Self::sign_out) followed by another
/// [`sign_in`](Self::sign_in) is supported within one process lifetime.
#[derive(Debug, Default)]
pub struct AuthSession {
    state: AuthState,
    username: Option<String>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == AuthState::Authenticated
    }

    /// Display name of the signed-in account, once authenticated.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Runs the sign-in flow to completion.
    ///
    /// Tries the stored refresh token first; while the exchange fails,
    /// presents the login surface and retries with the produced code.
    /// There is no attempt cap and no backoff: every iteration requires a
    /// fresh interactive response, so the loop cannot spin without user
    /// input. On success the fresh token and account name are persisted.
    ///
    /// A rejected token and an unreachable store are handled identically —
    /// both fall through to the interactive prompt.
    pub async fn sign_in(
        &mut self,
        catalog: &dyn CatalogClient,
        surface: &dyn LoginSurface,
        config: &mut ConfigStore,
    ) -> Result<(), AuthError> {
        let stored = config.refresh_token().map(str::to_string);

        let mut attempt = catalog.authenticate(stored.as_deref(), None).await;
        let token = loop {
            match attempt {
                Ok(token) => break token,
                Err(error) => {
                    debug!(%error, "token exchange failed, requesting interactive login");
                    self.state = AuthState::Authenticating;

                    let login_url = catalog.login_url();
                    let redirect_url = catalog.redirect_url();
                    match surface.prompt(&login_url, &redirect_url).await {
                        LoginOutcome::Code(code) => {
                            attempt = catalog.authenticate(stored.as_deref(), Some(&code)).await;
                        }
                        LoginOutcome::Cancelled => {
                            self.state = AuthState::Unauthenticated;
                            return Err(AuthError::Cancelled);
                        }
                    }
                }
            }
        };

        config.set(keys::REFRESH_TOKEN, token.as_str())?;

        match catalog.user_info().await {
            Ok(username) => {
                config.set(keys::USERNAME, username.as_str())?;
                info!(user = %username, "signed in");
                self.username = Some(username);
            }
            Err(error) => {
                // The session is valid either way; the display name just
                // stays unknown until the next sync.
                warn!(%error, "could not fetch account identity");
                self.username = None;
            }
        }

        self.state = AuthState::Authenticated;
        Ok(())
    }

    /// Clears the persisted session and returns to `Unauthenticated`.
    pub fn sign_out(&mut self, config: &mut ConfigStore) -> Result<(), AuthError> {
        config.unset(keys::USERNAME)?;
        config.unset(keys::REFRESH_TOKEN)?;
        self.username = None;
        self.state = AuthState::Unauthenticated;
        info!("signed out");
        Ok(())
    }
}
