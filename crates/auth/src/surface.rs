//! Abstract interactive login surface.

use std::future::Future;
use std::pin::Pin;

/// What one round of interactive login produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The user completed the login page; here is the authorization code.
    Code(String),
    /// The user dismissed the surface without logging in.
    Cancelled,
}

/// Abstract interactive login surface.
///
/// The embedding application implements this on top of its real dialog
/// (an embedded browser watching for the redirect URL). The session
/// awaits the outcome inline; there is no timeout — the wait is bounded
/// only by user action.
pub trait LoginSurface: Send + Sync {
    /// Presents the login page and resolves once the user produces an
    /// authorization code or cancels.
    fn prompt(
        &self,
        login_url: &str,
        redirect_url: &str,
    ) -> Pin<Box<dyn Future<Output = LoginOutcome> + Send + '_>>;
}
