//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The operation requires an authenticated user.
    #[error("login required")]
    LoginRequired,

    /// The user lacks the required permission level.
    #[error("not authorized")]
    NotAuthorized,
}
