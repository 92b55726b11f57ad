//! Persisted computer configuration records.

use crate::config::ComputerSpec;
use crate::ids::{ComputerId, UserId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Separator used to flatten the peripheral list for storage.
pub const PERIPHERALS_SEPARATOR: &str = ", ";

/// A finalized, persisted computer configuration.
///
/// Created only from a finalized [`ComputerSpec`]; there is no update
/// path. Peripherals are flattened to a joined text field and expanded
/// back with [`Computer::peripheral_list`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Computer {
    pub id: ComputerId,
    pub case_type: String,
    pub processor: String,
    pub memory_gb: u32,
    pub storage_gb: u32,
    pub graphics_card: String,
    pub color: String,
    /// Peripheral items joined with [`PERIPHERALS_SEPARATOR`].
    pub peripherals: String,
    pub is_laptop: bool,
    pub price: Money,
    pub owner: UserId,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Computer {
    /// Materialize a finalized spec as a record owned by `owner`.
    pub fn from_spec(spec: ComputerSpec, owner: UserId) -> Self {
        Self {
            id: ComputerId::generate(),
            case_type: spec.case_type,
            processor: spec.processor,
            memory_gb: spec.memory_gb,
            storage_gb: spec.storage_gb,
            graphics_card: spec.graphics_card,
            color: spec.color,
            peripherals: spec.peripherals.join(PERIPHERALS_SEPARATOR),
            is_laptop: spec.is_laptop,
            price: spec.price,
            owner,
            created_at: current_timestamp(),
        }
    }

    /// Expand the stored peripherals text back into the ordered list.
    pub fn peripheral_list(&self) -> Vec<String> {
        if self.peripherals.is_empty() {
            return Vec::new();
        }
        self.peripherals
            .split(PERIPHERALS_SEPARATOR)
            .map(str::to_string)
            .collect()
    }

    /// Short human-readable description, e.g. "Black Gaming Desktop
    /// (i7-12700K, 16GB RAM)".
    pub fn summary_line(&self) -> String {
        let device = if self.is_laptop { "Laptop" } else { "Desktop" };
        format!(
            "{} {} {} ({}, {}GB RAM)",
            self.color, self.case_type, device, self.processor, self.memory_gb
        )
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;

    fn finalized_spec() -> ComputerSpec {
        ConfigBuilder::new()
            .case("Gaming")
            .processor("i7-12700K")
            .memory_gb(16)
            .storage_gb(1024)
            .graphics("RTX-3070")
            .color("Black")
            .peripherals(vec!["monitor".to_string(), "mouse".to_string()])
            .device_type(false)
            .finalize()
            .build()
    }

    #[test]
    fn test_from_spec_flattens_peripherals() {
        let computer = Computer::from_spec(finalized_spec(), UserId::new("u1"));
        assert_eq!(computer.peripherals, "monitor, mouse");
        assert_eq!(computer.owner, UserId::new("u1"));
    }

    #[test]
    fn test_peripheral_list_round_trips() {
        let computer = Computer::from_spec(finalized_spec(), UserId::new("u1"));
        assert_eq!(
            computer.peripheral_list(),
            vec!["monitor".to_string(), "mouse".to_string()]
        );
    }

    #[test]
    fn test_peripheral_list_empty_text_is_empty_list() {
        let mut computer = Computer::from_spec(finalized_spec(), UserId::new("u1"));
        computer.peripherals = String::new();
        assert!(computer.peripheral_list().is_empty());
    }

    #[test]
    fn test_summary_line() {
        let computer = Computer::from_spec(finalized_spec(), UserId::new("u1"));
        assert_eq!(
            computer.summary_line(),
            "Black Gaming Desktop (i7-12700K, 16GB RAM)"
        );
    }
}
