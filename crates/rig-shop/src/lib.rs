//! Shop service, repositories, and wizard handlers for RigForge.
//!
//! Ties the domain crate to storage: repositories persist computers and
//! orders, [`service::ShopService`] is the facade the wizard calls, and
//! [`wizard::Wizard`] implements the step handlers behind the exposed
//! endpoints.
//!
//! # Example
//!
//! ```
//! use rig_shop::{Shop, ShopConfig};
//! use rig_auth::User;
//! use rig_commerce::ids::UserId;
//!
//! let shop = Shop::open(ShopConfig::default());
//! let user = User::authenticated(UserId::new("u1"), "u1@example.com", None);
//!
//! let response = shop.wizard.index(&user).unwrap();
//! assert!(matches!(response, rig_shop::wizard::StepResponse::Render { .. }));
//! ```

mod config;
mod error;
pub mod repo;
pub mod service;
pub mod wizard;

pub use config::ShopConfig;
pub use error::ShopError;

use crate::repo::{ComputerRepository, OrderRepository};
use crate::service::ShopService;
use crate::wizard::Wizard;
use rig_commerce::wizard::BuildSession;
use rig_store::{Session, Store};

/// A wired shop instance: stores, facade, and wizard.
#[derive(Debug, Clone)]
pub struct Shop {
    /// The service facade.
    pub service: ShopService,
    /// The wizard handlers.
    pub wizard: Wizard,
}

impl Shop {
    /// Open stores per the configuration and wire the facade and wizard.
    pub fn open(config: ShopConfig) -> Self {
        let computers = ComputerRepository::new(Store::open(config.computer_store.as_str()));
        let orders = OrderRepository::new(Store::open(config.order_store.as_str()));
        let service = ShopService::new(computers, orders);
        let sessions = Session::<BuildSession>::new(
            Store::open(config.session_store.as_str()),
            config.session_namespace.clone(),
        );
        let wizard = Wizard::new(service.clone(), sessions);

        tracing::debug!(name = %config.name, "shop opened");
        Shop { service, wizard }
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::repo::{ComputerRepository, OrderRepository};
    pub use crate::service::{ComputerDetails, NewComputerInput, PeripheralsInput, ShopService};
    pub use crate::wizard::{StepResponse, Wizard};
    pub use crate::{Shop, ShopConfig, ShopError};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::StepResponse;
    use rig_auth::User;
    use rig_commerce::ids::UserId;
    use rig_commerce::money::Money;
    use rig_commerce::wizard::{Submission, WizardStep};
    use rig_store::SessionId;

    #[test]
    fn test_open_shop_end_to_end() {
        let shop = Shop::open(ShopConfig::new("test"));
        let user = User::authenticated(UserId::new("u1"), "u1@example.com", None);
        let sid = SessionId::generate();

        let submissions: Vec<(WizardStep, Submission)> = vec![
            (WizardStep::Case, Submission::Choice("Slim".to_string())),
            (WizardStep::Processor, Submission::Choice("i5-12400".to_string())),
            (WizardStep::Memory, Submission::Choice("16".to_string())),
            (WizardStep::Storage, Submission::Choice("512".to_string())),
            (WizardStep::Graphics, Submission::Choice("Integrated".to_string())),
            (WizardStep::Color, Submission::Choice("Silver".to_string())),
            (
                WizardStep::Peripherals,
                Submission::Peripherals(vec!["monitor".to_string()]),
            ),
            (WizardStep::DeviceType, Submission::DeviceType(true)),
        ];
        for (step, submission) in &submissions {
            shop.wizard
                .selection_step(&user, &sid, *step, Some(submission))
                .unwrap();
        }

        // Laptop, 16GB, monitor: the bundle discount applies.
        // 90 + 200 + 100 + 70 + 0 + 20 + 200 + 200 + 50 - 50 = 880.
        match shop.wizard.summary(&user, &sid, false).unwrap() {
            StepResponse::Render { context, .. } => {
                assert_eq!(context["estimated_price_display"], "$880.00");
            }
            other => panic!("expected render, got {other:?}"),
        }

        shop.wizard.summary(&user, &sid, true).unwrap();

        let orders = shop.service.orders_for(&user).unwrap();
        assert_eq!(orders.len(), 1);
        let details = shop.service.computer_details(&orders[0].computer_id).unwrap();
        assert_eq!(details.price, Money::from_units(880));
        assert!(details.is_laptop);
        assert_eq!(details.peripherals, vec!["monitor".to_string()]);
    }
}
