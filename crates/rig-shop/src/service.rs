//! The shop facade: turns completed wizard selections into persisted
//! records and projects records for display.

use crate::repo::{ComputerRepository, OrderRepository};
use crate::ShopError;
use rig_auth::{require_login, User};
use rig_commerce::catalog::{DEFAULT_MEMORY_GB, DEFAULT_STORAGE_GB};
use rig_commerce::config::ConfigBuilder;
use rig_commerce::ids::{ComputerId, OrderId};
use rig_commerce::money::Money;
use rig_commerce::wizard::BuildSession;
use rig_commerce::{Computer, Order};
use serde::{Deserialize, Serialize};

/// Raw peripherals input, before normalization.
///
/// Submissions may carry a full list, a bare single item, or nothing at
/// all; everything normalizes to a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeripheralsInput {
    /// A list of items.
    Items(Vec<String>),
    /// A bare single item; wrapped into a one-element list.
    Single(String),
    /// Nothing submitted; normalizes to an empty list.
    Absent,
}

impl PeripheralsInput {
    /// Normalize to a peripheral list.
    pub fn normalize(self) -> Vec<String> {
        match self {
            PeripheralsInput::Items(items) => items,
            PeripheralsInput::Single(item) => vec![item],
            PeripheralsInput::Absent => Vec::new(),
        }
    }
}

/// Input for [`ShopService::create_computer`], one field per wizard step.
///
/// Numeric fields stay as submitted text; the facade coerces them with
/// defaults rather than rejecting malformed input.
#[derive(Debug, Clone)]
pub struct NewComputerInput {
    pub case_type: String,
    pub processor: String,
    pub memory: String,
    pub storage: String,
    pub graphics_card: String,
    pub color: String,
    pub peripherals: PeripheralsInput,
    pub is_laptop: bool,
}

impl NewComputerInput {
    /// Build facade input from a wizard session bag, substituting empty
    /// values for anything the flow skipped.
    pub fn from_session(bag: &BuildSession) -> Self {
        Self {
            case_type: bag.case_type.clone().unwrap_or_default(),
            processor: bag.processor.clone().unwrap_or_default(),
            memory: bag.memory.clone().unwrap_or_default(),
            storage: bag.storage.clone().unwrap_or_default(),
            graphics_card: bag.graphics_card.clone().unwrap_or_default(),
            color: bag.color.clone().unwrap_or_default(),
            peripherals: match bag.peripherals.clone() {
                Some(items) => PeripheralsInput::Items(items),
                None => PeripheralsInput::Absent,
            },
            is_laptop: bag.is_laptop.unwrap_or(false),
        }
    }
}

/// Display-ready projection of a persisted computer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerDetails {
    pub id: ComputerId,
    pub case_type: String,
    pub processor: String,
    pub memory_gb: u32,
    pub storage_gb: u32,
    pub graphics_card: String,
    pub color: String,
    /// Peripherals expanded back into the stored order.
    pub peripherals: Vec<String>,
    pub is_laptop: bool,
    pub price: Money,
}

impl ComputerDetails {
    fn from_computer(computer: &Computer) -> Self {
        Self {
            id: computer.id.clone(),
            case_type: computer.case_type.clone(),
            processor: computer.processor.clone(),
            memory_gb: computer.memory_gb,
            storage_gb: computer.storage_gb,
            graphics_card: computer.graphics_card.clone(),
            color: computer.color.clone(),
            peripherals: computer.peripheral_list(),
            is_laptop: computer.is_laptop,
            price: computer.price,
        }
    }
}

/// The boundary between the wizard and persistence.
#[derive(Debug, Clone)]
pub struct ShopService {
    computers: ComputerRepository,
    orders: OrderRepository,
}

impl ShopService {
    pub fn new(computers: ComputerRepository, orders: OrderRepository) -> Self {
        Self { computers, orders }
    }

    /// Price and persist a computer configuration for `user`.
    ///
    /// Malformed memory/storage values fall back to the defaults instead
    /// of failing; peripherals are normalized to a list. The price is
    /// computed by driving a fresh builder through every step plus
    /// finalize.
    pub fn create_computer(
        &self,
        user: &User,
        input: NewComputerInput,
    ) -> Result<Computer, ShopError> {
        let owner = require_login(user)?.clone();

        let memory_gb = safe_cast_to_u32(&input.memory, DEFAULT_MEMORY_GB);
        let storage_gb = safe_cast_to_u32(&input.storage, DEFAULT_STORAGE_GB);
        let peripherals = input.peripherals.normalize();

        let spec = ConfigBuilder::new()
            .case(input.case_type)
            .processor(input.processor)
            .memory_gb(memory_gb)
            .storage_gb(storage_gb)
            .graphics(input.graphics_card)
            .color(input.color)
            .peripherals(peripherals)
            .device_type(input.is_laptop)
            .finalize()
            .build();

        let computer = Computer::from_spec(spec, owner);
        self.computers.insert(&computer)?;

        tracing::info!(
            computer_id = %computer.id,
            price = %computer.price,
            "computer configuration created"
        );
        Ok(computer)
    }

    /// Place an order for a computer.
    ///
    /// No pre-check for an existing order: the repository's one-to-one
    /// constraint rejects duplicates at the persistence layer.
    pub fn place_order(&self, user: &User, computer: &Computer) -> Result<Order, ShopError> {
        let user_id = require_login(user)?.clone();
        let order = Order::place(user_id, computer.id.clone());
        self.orders.insert(&order)?;

        tracing::info!(order_id = %order.id, computer_id = %computer.id, "order placed");
        Ok(order)
    }

    /// Display details for a computer, failing when absent.
    pub fn computer_details(&self, id: &ComputerId) -> Result<ComputerDetails, ShopError> {
        let computer = self.computers.get(id)?;
        Ok(ComputerDetails::from_computer(&computer))
    }

    /// All of a user's orders, newest first.
    pub fn orders_for(&self, user: &User) -> Result<Vec<Order>, ShopError> {
        let user_id = require_login(user)?;
        self.orders.for_user(user_id)
    }

    /// Fetch an order by id, checking ownership.
    ///
    /// An order that exists but belongs to someone else is reported as
    /// not found, indistinguishable from a missing one.
    pub fn order_for_user(&self, id: &OrderId, user: &User) -> Result<Order, ShopError> {
        let user_id = require_login(user)?;
        let order = self.orders.get(id)?;
        if &order.user_id != user_id {
            return Err(ShopError::OrderNotFound(id.to_string()));
        }
        Ok(order)
    }

    /// An ownership-checked order together with its computer's details.
    pub fn order_with_details(
        &self,
        id: &OrderId,
        user: &User,
    ) -> Result<(Order, ComputerDetails), ShopError> {
        let order = self.order_for_user(id, user)?;
        let details = self.computer_details(&order.computer_id)?;
        Ok((order, details))
    }

    /// All of a user's orders with computer details, newest first.
    pub fn orders_with_details(
        &self,
        user: &User,
    ) -> Result<Vec<(Order, ComputerDetails)>, ShopError> {
        let orders = self.orders_for(user)?;
        orders
            .into_iter()
            .map(|order| {
                let details = self.computer_details(&order.computer_id)?;
                Ok((order, details))
            })
            .collect()
    }
}

/// Try casting a value to u32; return the default on failure.
fn safe_cast_to_u32(value: &str, default: u32) -> u32 {
    value.trim().parse::<u32>().unwrap_or(default)
}
