//! Configurator domain types and pricing logic for RigForge.
//!
//! This crate provides the core of the custom-computer shop:
//!
//! - **Catalog**: fixed component price tables and wizard choice lists
//! - **Config**: the priced [`config::ComputerSpec`], its step builder,
//!   and named presets
//! - **Wizard**: the step state machine and the per-user selection bag
//! - **Records**: persisted [`computer::Computer`] and [`order::Order`]
//!
//! # Example
//!
//! ```
//! use rig_commerce::prelude::*;
//!
//! let spec = ConfigBuilder::new()
//!     .case("Gaming")
//!     .processor("i7-12700K")
//!     .memory_gb(16)
//!     .storage_gb(1024)
//!     .graphics("RTX-3070")
//!     .color("Black")
//!     .peripherals(vec!["keyboard".into(), "mouse".into()])
//!     .device_type(false)
//!     .finalize()
//!     .build();
//!
//! assert_eq!(spec.price, Money::from_units(1470));
//! ```

pub mod catalog;
pub mod computer;
pub mod config;
pub mod error;
pub mod ids;
pub mod money;
pub mod order;
pub mod wizard;

pub use computer::Computer;
pub use error::CommerceError;
pub use ids::*;
pub use money::Money;
pub use order::{Order, OrderStatus};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::computer::{Computer, PERIPHERALS_SEPARATOR};
    pub use crate::config::{ComputerSpec, ConfigBuilder, ConfigDirector};
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;
    pub use crate::order::{Order, OrderStatus};
    pub use crate::wizard::{apply, BuildSession, Submission, WizardStep, START_OVER_NOTICE};
}
