//! User identity types.
//!
//! Credential verification happens upstream; by the time shop operations
//! run, a request carries either an anonymous visitor or an
//! already-authenticated user.

use crate::AuthError;
use rig_commerce::ids::UserId;
use serde::{Deserialize, Serialize};

/// User role for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    /// Regular customer.
    #[default]
    Customer,
    /// Store staff.
    Staff,
    /// Store administrator.
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Staff => "staff",
            Role::Admin => "admin",
        }
    }

    /// Permission level (higher = more permissions).
    pub fn level(&self) -> u8 {
        match self {
            Role::Customer => 0,
            Role::Staff => 1,
            Role::Admin => 2,
        }
    }

    /// Check if this role has at least the given permission level.
    pub fn has_permission(&self, required: Role) -> bool {
        self.level() >= required.level()
    }
}

/// A user in the system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum User {
    /// Anonymous visitor with session tracking.
    Anonymous {
        /// Session identifier.
        session_id: String,
    },
    /// Authenticated user.
    Authenticated {
        /// User ID.
        id: UserId,
        /// Email address.
        email: String,
        /// Display name.
        name: Option<String>,
        /// User role.
        role: Role,
    },
}

impl User {
    /// Create a new anonymous user.
    pub fn anonymous(session_id: impl Into<String>) -> Self {
        User::Anonymous {
            session_id: session_id.into(),
        }
    }

    /// Create a new authenticated customer.
    pub fn authenticated(id: UserId, email: impl Into<String>, name: Option<String>) -> Self {
        User::Authenticated {
            id,
            email: email.into(),
            name,
            role: Role::Customer,
        }
    }

    /// Check if the user is authenticated.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, User::Authenticated { .. })
    }

    /// Get the user ID if authenticated.
    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            User::Authenticated { id, .. } => Some(id),
            User::Anonymous { .. } => None,
        }
    }

    /// Display name: the name if set, the email otherwise, the session id
    /// for anonymous visitors.
    pub fn display_name(&self) -> &str {
        match self {
            User::Authenticated { name, email, .. } => name.as_deref().unwrap_or(email.as_str()),
            User::Anonymous { session_id } => session_id,
        }
    }

    /// The user's role; anonymous visitors have none.
    pub fn role(&self) -> Option<Role> {
        match self {
            User::Authenticated { role, .. } => Some(*role),
            User::Anonymous { .. } => None,
        }
    }

    /// Check if the user has at least the given permission level.
    pub fn has_permission(&self, required: Role) -> bool {
        self.role().is_some_and(|r| r.has_permission(required))
    }
}

/// The login-required gate: the user id of an authenticated user, or
/// [`AuthError::LoginRequired`].
pub fn require_login(user: &User) -> Result<&UserId, AuthError> {
    user.user_id().ok_or(AuthError::LoginRequired)
}
