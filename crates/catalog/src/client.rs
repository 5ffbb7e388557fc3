//! Abstract client for the remote store catalog.

use std::future::Future;
use std::pin::Pin;

use crate::error::CatalogError;
use crate::types::CatalogGame;

/// Abstract connection to the remote store.
///
/// The embedding application implements this trait on top of its actual
/// HTTP client; the engine crates only ever see the trait, so they can be
/// tested with scripted mock implementations.
pub trait CatalogClient: Send + Sync {
    /// Exchanges a refresh token and/or an interactive login code for a
    /// fresh refresh token.
    ///
    /// Either argument may be absent: the startup path passes only the
    /// stored token, the interactive retry path adds the code produced by
    /// the login surface.
    fn authenticate(
        &self,
        refresh_token: Option<&str>,
        login_code: Option<&str>,
    ) -> Pin<Box<dyn Future<Output = Result<String, CatalogError>> + Send + '_>>;

    /// URL the interactive login surface should open.
    fn login_url(&self) -> String;

    /// URL whose load the login surface watches to capture the
    /// authorization code.
    fn redirect_url(&self) -> String;

    /// Human-readable account identity for display.
    fn user_info(&self) -> Pin<Box<dyn Future<Output = Result<String, CatalogError>> + Send + '_>>;

    /// The full list of titles the account owns.
    fn owned_games(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<CatalogGame>, CatalogError>> + Send + '_>>;
}
