//! Order records.

use crate::ids::{ComputerId, OrderId, UserId};
use serde::{Deserialize, Serialize};

/// Order status.
///
/// Orders are created `Pending`; status transitions are handled by
/// fulfillment, outside this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    Pending,
    /// Order being assembled.
    Processing,
    /// Order completed.
    Completed,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

/// An order for one configured computer.
///
/// A computer may be ordered at most once; the order repository enforces
/// the one-to-one constraint at the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub computer_id: ComputerId,
    /// Unix timestamp when the order was placed.
    pub order_date: i64,
    pub status: OrderStatus,
}

impl Order {
    /// Create a new pending order linking a user and a computer.
    pub fn place(user_id: UserId, computer_id: ComputerId) -> Self {
        Self {
            id: OrderId::generate(),
            user_id,
            computer_id,
            order_date: current_timestamp(),
            status: OrderStatus::Pending,
        }
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
