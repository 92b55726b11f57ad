//! Shop error types.

use rig_auth::AuthError;
use rig_commerce::CommerceError;
use rig_store::StoreError;
use thiserror::Error;

/// Errors that can occur in shop operations.
#[derive(Error, Debug)]
pub enum ShopError {
    /// Computer not found (or not visible to the requester).
    #[error("Computer not found: {0}")]
    ComputerNotFound(String),

    /// Order not found (or not owned by the requester).
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// A second order was placed against an already-ordered computer.
    /// Surfaced from the persistence layer's uniqueness constraint.
    #[error("Computer already ordered: {computer_id}")]
    DuplicateOrder { computer_id: String },

    /// Domain error.
    #[error("Commerce error: {0}")]
    Commerce(#[from] CommerceError),

    /// Identity error.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Storage error.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}
