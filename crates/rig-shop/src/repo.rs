//! Record repositories over injected store handles.

use crate::ShopError;
use rig_commerce::ids::{ComputerId, OrderId, UserId};
use rig_commerce::{Computer, Order};
use rig_store::{store_key, Store, StoreError};

/// Repository for persisted computer configurations.
#[derive(Debug, Clone)]
pub struct ComputerRepository {
    store: Store,
}

impl ComputerRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Persist a new computer record.
    pub fn insert(&self, computer: &Computer) -> Result<(), ShopError> {
        let key = store_key!("computer", computer.id);
        self.store.set(&key, computer)?;
        Ok(())
    }

    /// Fetch a computer by id, failing when absent.
    pub fn get(&self, id: &ComputerId) -> Result<Computer, ShopError> {
        let key = store_key!("computer", id);
        self.store.get_or_fail::<Computer>(&key).map_err(|e| match e {
            StoreError::NotFound(_) => ShopError::ComputerNotFound(id.to_string()),
            other => ShopError::Store(other),
        })
    }
}

const ORDER_KEY_PREFIX: &str = "order:id:";

/// Repository for orders.
///
/// Enforces the one-to-one Order↔Computer constraint with an insert-only
/// index keyed by computer id: the second order against the same computer
/// hits the index and fails before the order record is written.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    store: Store,
}

impl OrderRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Persist a new order.
    ///
    /// Fails with [`ShopError::DuplicateOrder`] when the computer already
    /// has an order.
    pub fn insert(&self, order: &Order) -> Result<(), ShopError> {
        let index_key = store_key!("order", "by-computer", order.computer_id);
        self.store
            .set_if_absent(&index_key, &order.id)
            .map_err(|e| match e {
                StoreError::Conflict(_) => ShopError::DuplicateOrder {
                    computer_id: order.computer_id.to_string(),
                },
                other => ShopError::Store(other),
            })?;

        let key = format!("{}{}", ORDER_KEY_PREFIX, order.id);
        self.store.set(&key, order)?;
        Ok(())
    }

    /// Fetch an order by id, failing when absent.
    pub fn get(&self, id: &OrderId) -> Result<Order, ShopError> {
        let key = format!("{}{}", ORDER_KEY_PREFIX, id);
        self.store.get_or_fail::<Order>(&key).map_err(|e| match e {
            StoreError::NotFound(_) => ShopError::OrderNotFound(id.to_string()),
            other => ShopError::Store(other),
        })
    }

    /// All orders placed by a user, newest first.
    pub fn for_user(&self, user_id: &UserId) -> Result<Vec<Order>, ShopError> {
        let mut orders = Vec::new();
        for key in self.store.keys()? {
            if !key.starts_with(ORDER_KEY_PREFIX) {
                continue;
            }
            if let Some(order) = self.store.get::<Order>(&key)? {
                if &order.user_id == user_id {
                    orders.push(order);
                }
            }
        }
        orders.sort_by(|a, b| {
            b.order_date
                .cmp(&a.order_date)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(orders)
    }
}
