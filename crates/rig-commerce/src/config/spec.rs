//! The component selection under construction.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A computer configuration as accumulated by the builder.
///
/// `price` always equals the sum of the increments applied so far; after
/// finalization it additionally carries the assembly fee and any bundle
/// discount. Peripheral order is preserved for display; it has no effect
/// on pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ComputerSpec {
    pub case_type: String,
    pub processor: String,
    pub memory_gb: u32,
    pub storage_gb: u32,
    pub graphics_card: String,
    pub color: String,
    pub peripherals: Vec<String>,
    pub is_laptop: bool,
    pub price: Money,
}

impl ComputerSpec {
    /// Short human-readable description, e.g. "Red Gaming Desktop".
    pub fn summary_line(&self) -> String {
        let device = if self.is_laptop { "Laptop" } else { "Desktop" };
        format!(
            "{} {} {} ({}, {}GB RAM)",
            self.color, self.case_type, device, self.processor, self.memory_gb
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spec_is_zero_valued() {
        let spec = ComputerSpec::default();
        assert_eq!(spec.case_type, "");
        assert_eq!(spec.memory_gb, 0);
        assert!(spec.peripherals.is_empty());
        assert!(!spec.is_laptop);
        assert!(spec.price.is_zero());
    }

    #[test]
    fn test_summary_line() {
        let spec = ComputerSpec {
            case_type: "Gaming".to_string(),
            processor: "i7-12700K".to_string(),
            memory_gb: 16,
            color: "Red".to_string(),
            ..Default::default()
        };
        assert_eq!(spec.summary_line(), "Red Gaming Desktop (i7-12700K, 16GB RAM)");
    }
}
