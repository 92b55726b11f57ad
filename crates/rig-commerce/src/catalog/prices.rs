//! Fixed component price tables.
//!
//! Every lookup is permissive: an unrecognized value prices at zero
//! rather than erroring. The tables are part of the product definition
//! and are not user-extensible.

use crate::money::Money;

/// Fee added whenever a color customization is chosen, regardless of color.
pub const COLOR_FEE: Money = Money::from_units(20);

/// Premium for the laptop form factor.
pub const LAPTOP_PREMIUM: Money = Money::from_units(200);

/// Assembly fee added on finalization.
pub const ASSEMBLY_FEE: Money = Money::from_units(50);

/// Discount for laptop builds with at least 16 GB memory and a monitor.
pub const BUNDLE_DISCOUNT: Money = Money::from_units(50);

/// Fallback memory size when a submitted value cannot be parsed.
pub const DEFAULT_MEMORY_GB: u32 = 8;

/// Fallback storage size when a submitted value cannot be parsed.
pub const DEFAULT_STORAGE_GB: u32 = 512;

const CASE_PRICES: &[(&str, i64)] = &[("Tower", 100), ("Mini", 80), ("Slim", 90), ("Gaming", 150)];

const PROCESSOR_PRICES: &[(&str, i64)] = &[
    ("i5-12400", 200),
    ("i7-12700K", 350),
    ("i9-12900K", 550),
    ("Ryzen-5-5600X", 220),
    ("Ryzen-7-5800X", 320),
];

const MEMORY_PRICES: &[(u32, i64)] = &[(8, 50), (16, 100), (32, 180), (64, 320)];

const STORAGE_PRICES: &[(u32, i64)] = &[(512, 70), (1024, 120), (2048, 220)];

const GRAPHICS_PRICES: &[(&str, i64)] = &[
    ("Integrated", 0),
    ("RTX-3060", 400),
    ("RTX-3070", 600),
    ("RTX-3080", 800),
    ("RX-6700XT", 450),
];

const PERIPHERAL_PRICES: &[(&str, i64)] = &[
    ("monitor", 200),
    ("keyboard", 50),
    ("mouse", 30),
    ("headset", 70),
    ("webcam", 40),
];

fn lookup(table: &[(&str, i64)], value: &str) -> Money {
    table
        .iter()
        .find(|(name, _)| *name == value)
        .map(|(_, units)| Money::from_units(*units))
        .unwrap_or_else(Money::zero)
}

fn lookup_size(table: &[(u32, i64)], size: u32) -> Money {
    table
        .iter()
        .find(|(s, _)| *s == size)
        .map(|(_, units)| Money::from_units(*units))
        .unwrap_or_else(Money::zero)
}

/// Price increment for a case type.
pub fn case_price(case_type: &str) -> Money {
    lookup(CASE_PRICES, case_type)
}

/// Price increment for a processor.
pub fn processor_price(processor: &str) -> Money {
    lookup(PROCESSOR_PRICES, processor)
}

/// Price increment for a memory size in GB.
pub fn memory_price(size_gb: u32) -> Money {
    lookup_size(MEMORY_PRICES, size_gb)
}

/// Price increment for a storage size in GB.
pub fn storage_price(size_gb: u32) -> Money {
    lookup_size(STORAGE_PRICES, size_gb)
}

/// Price increment for a graphics card.
pub fn graphics_price(card: &str) -> Money {
    lookup(GRAPHICS_PRICES, card)
}

/// Price increment for a single peripheral item.
pub fn peripheral_price(item: &str) -> Money {
    lookup(PERIPHERAL_PRICES, item)
}

/// Total price increment for a set of peripherals.
pub fn peripherals_price(items: &[String]) -> Money {
    items.iter().map(|item| peripheral_price(item)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_prices() {
        assert_eq!(case_price("Gaming"), Money::from_units(150));
        assert_eq!(case_price("Mini"), Money::from_units(80));
    }

    #[test]
    fn test_unknown_values_price_at_zero() {
        assert_eq!(case_price("Cube"), Money::zero());
        assert_eq!(processor_price("i3-9100"), Money::zero());
        assert_eq!(memory_price(12), Money::zero());
        assert_eq!(storage_price(256), Money::zero());
        assert_eq!(graphics_price("GTX-1050"), Money::zero());
        assert_eq!(peripheral_price("printer"), Money::zero());
    }

    #[test]
    fn test_integrated_graphics_is_free() {
        assert_eq!(graphics_price("Integrated"), Money::zero());
    }

    #[test]
    fn test_peripherals_sum() {
        let items = vec![
            "monitor".to_string(),
            "keyboard".to_string(),
            "mouse".to_string(),
        ];
        assert_eq!(peripherals_price(&items), Money::from_units(280));
    }

    #[test]
    fn test_peripherals_sum_skips_unknown_items() {
        let items = vec!["monitor".to_string(), "printer".to_string()];
        assert_eq!(peripherals_price(&items), Money::from_units(200));
    }
}
