//! Step-by-step configuration builder with per-component pricing.

use crate::catalog;
use crate::config::ComputerSpec;
use crate::money::Money;

/// Accumulates a [`ComputerSpec`], applying the price table increment for
/// each selection as it is recorded.
///
/// Setters are order-independent and may be called in any sequence; a
/// repeated call for the same component replaces the earlier selection
/// and its price contribution. [`ConfigBuilder::finalize`] is a
/// single-call contract: it applies the assembly fee and the conditional
/// bundle discount, and calling it twice would apply both twice. Build
/// fresh and finalize exactly once per configuration.
///
/// # Example
///
/// ```
/// use rig_commerce::config::ConfigBuilder;
/// use rig_commerce::money::Money;
///
/// let spec = ConfigBuilder::new()
///     .case("Gaming")
///     .processor("i7-12700K")
///     .memory_gb(16)
///     .finalize()
///     .build();
/// assert_eq!(spec.price, Money::from_units(650));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    spec: ComputerSpec,
    color_fee_applied: bool,
}

impl ConfigBuilder {
    /// Create a builder holding the zero-value spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all accumulated state and start fresh.
    pub fn reset(self) -> Self {
        Self::new()
    }

    /// Select the case type and add its price.
    pub fn case(mut self, case_type: impl Into<String>) -> Self {
        let case_type = case_type.into();
        self.spec.price -= catalog::case_price(&self.spec.case_type);
        self.spec.price += catalog::case_price(&case_type);
        self.spec.case_type = case_type;
        self
    }

    /// Select the processor and add its price.
    pub fn processor(mut self, processor: impl Into<String>) -> Self {
        let processor = processor.into();
        self.spec.price -= catalog::processor_price(&self.spec.processor);
        self.spec.price += catalog::processor_price(&processor);
        self.spec.processor = processor;
        self
    }

    /// Select the memory size in GB and add its price.
    pub fn memory_gb(mut self, size_gb: u32) -> Self {
        self.spec.price -= catalog::memory_price(self.spec.memory_gb);
        self.spec.price += catalog::memory_price(size_gb);
        self.spec.memory_gb = size_gb;
        self
    }

    /// Select the storage size in GB and add its price.
    pub fn storage_gb(mut self, size_gb: u32) -> Self {
        self.spec.price -= catalog::storage_price(self.spec.storage_gb);
        self.spec.price += catalog::storage_price(size_gb);
        self.spec.storage_gb = size_gb;
        self
    }

    /// Select the graphics card and add its price.
    pub fn graphics(mut self, card: impl Into<String>) -> Self {
        let card = card.into();
        self.spec.price -= catalog::graphics_price(&self.spec.graphics_card);
        self.spec.price += catalog::graphics_price(&card);
        self.spec.graphics_card = card;
        self
    }

    /// Select the color. Always adds the fixed customization fee,
    /// regardless of which color is chosen. The fee is charged once per
    /// build even if the color is re-selected.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        if !self.color_fee_applied {
            self.spec.price += catalog::COLOR_FEE;
            self.color_fee_applied = true;
        }
        self.spec.color = color.into();
        self
    }

    /// Record the full peripheral set, replacing any prior set, and add
    /// the sum of the items' prices.
    pub fn peripherals(mut self, items: Vec<String>) -> Self {
        self.spec.price -= catalog::peripherals_price(&self.spec.peripherals);
        self.spec.price += catalog::peripherals_price(&items);
        self.spec.peripherals = items;
        self
    }

    /// Record the laptop/desktop form factor; laptops carry a premium.
    pub fn device_type(mut self, is_laptop: bool) -> Self {
        if self.spec.is_laptop {
            self.spec.price -= catalog::LAPTOP_PREMIUM;
        }
        if is_laptop {
            self.spec.price += catalog::LAPTOP_PREMIUM;
        }
        self.spec.is_laptop = is_laptop;
        self
    }

    /// Apply the assembly fee, then the bundle discount when the build is
    /// a laptop with at least 16 GB memory and a monitor among its
    /// peripherals.
    ///
    /// Call exactly once per build; a second call would re-apply both.
    pub fn finalize(mut self) -> Self {
        self.spec.price += catalog::ASSEMBLY_FEE;

        let monitor = self.spec.peripherals.iter().any(|p| p == "monitor");
        if self.spec.is_laptop && self.spec.memory_gb >= 16 && monitor {
            self.spec.price -= catalog::BUNDLE_DISCOUNT;
        }
        self
    }

    /// The accumulated spec, by reference.
    pub fn spec(&self) -> &ComputerSpec {
        &self.spec
    }

    /// Consume the builder and return the accumulated spec.
    pub fn build(self) -> ComputerSpec {
        self.spec
    }

    /// Current accumulated price.
    pub fn price(&self) -> Money {
        self.spec.price
    }
}
