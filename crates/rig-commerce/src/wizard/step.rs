//! Steps in the build wizard.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Steps of the configurator wizard, in flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    /// Case selection; entering it starts a fresh session bag.
    Case,
    /// Processor selection.
    Processor,
    /// Memory size selection.
    Memory,
    /// Storage size selection.
    Storage,
    /// Graphics card selection.
    Graphics,
    /// Color selection.
    Color,
    /// Peripherals selection.
    Peripherals,
    /// Laptop/desktop selection.
    DeviceType,
    /// Configuration summary and order confirmation.
    Summary,
    /// Order placed; terminal.
    OrderPlaced,
}

impl WizardStep {
    /// All steps, in flow order.
    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::Case,
            WizardStep::Processor,
            WizardStep::Memory,
            WizardStep::Storage,
            WizardStep::Graphics,
            WizardStep::Color,
            WizardStep::Peripherals,
            WizardStep::DeviceType,
            WizardStep::Summary,
            WizardStep::OrderPlaced,
        ]
    }

    /// Route segment for the step.
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Case => "case",
            WizardStep::Processor => "processor",
            WizardStep::Memory => "memory",
            WizardStep::Storage => "storage",
            WizardStep::Graphics => "graphics",
            WizardStep::Color => "color",
            WizardStep::Peripherals => "peripherals",
            WizardStep::DeviceType => "device-type",
            WizardStep::Summary => "summary",
            WizardStep::OrderPlaced => "order-placed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WizardStep::Case => "Case Selection",
            WizardStep::Processor => "Processor Selection",
            WizardStep::Memory => "Memory Selection",
            WizardStep::Storage => "Storage Selection",
            WizardStep::Graphics => "Graphics Selection",
            WizardStep::Color => "Color Selection",
            WizardStep::Peripherals => "Peripherals Selection",
            WizardStep::DeviceType => "Device Type Selection",
            WizardStep::Summary => "Summary",
            WizardStep::OrderPlaced => "Order Placed",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Case => 1,
            WizardStep::Processor => 2,
            WizardStep::Memory => 3,
            WizardStep::Storage => 4,
            WizardStep::Graphics => 5,
            WizardStep::Color => 6,
            WizardStep::Peripherals => 7,
            WizardStep::DeviceType => 8,
            WizardStep::Summary => 9,
            WizardStep::OrderPlaced => 10,
        }
    }

    /// The step that follows this one in the flow, if any.
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Case => Some(WizardStep::Processor),
            WizardStep::Processor => Some(WizardStep::Memory),
            WizardStep::Memory => Some(WizardStep::Storage),
            WizardStep::Storage => Some(WizardStep::Graphics),
            WizardStep::Graphics => Some(WizardStep::Color),
            WizardStep::Color => Some(WizardStep::Peripherals),
            WizardStep::Peripherals => Some(WizardStep::DeviceType),
            WizardStep::DeviceType => Some(WizardStep::Summary),
            WizardStep::Summary => Some(WizardStep::OrderPlaced),
            WizardStep::OrderPlaced => None,
        }
    }

    /// Whether entering this step requires a started bag.
    ///
    /// A single global precondition: every step between case selection and
    /// the terminal state only checks that the flow was started (a case
    /// type exists in the bag), not that the immediately preceding field
    /// was collected.
    pub fn requires_started(&self) -> bool {
        !matches!(self, WizardStep::Case | WizardStep::OrderPlaced)
    }

    /// Whether this step ends the flow.
    pub fn is_terminal(&self) -> bool {
        matches!(self, WizardStep::OrderPlaced)
    }
}

impl FromStr for WizardStep {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WizardStep::all()
            .iter()
            .copied()
            .find(|step| step.as_str() == s)
            .ok_or_else(|| CommerceError::UnknownStep(s.to_string()))
    }
}
