//! Preset configurations driven through the builder.

use crate::config::{ComputerSpec, ConfigBuilder};

/// Stateless helper that drives a fresh [`ConfigBuilder`] through the
/// fixed step sequence for a named preset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigDirector;

impl ConfigDirector {
    /// A gaming desktop: "Gaming" case, desktop form factor, caller-chosen
    /// internals.
    pub fn gaming_desktop(
        processor: &str,
        memory_gb: u32,
        storage_gb: u32,
        graphics: &str,
        color: &str,
        peripherals: Vec<String>,
    ) -> ComputerSpec {
        ConfigBuilder::new()
            .case("Gaming")
            .processor(processor)
            .memory_gb(memory_gb)
            .storage_gb(storage_gb)
            .graphics(graphics)
            .color(color)
            .peripherals(peripherals)
            .device_type(false)
            .finalize()
            .build()
    }

    /// A business laptop: "Slim" case, integrated graphics, laptop form
    /// factor.
    pub fn business_laptop(
        processor: &str,
        memory_gb: u32,
        storage_gb: u32,
        color: &str,
        peripherals: Vec<String>,
    ) -> ComputerSpec {
        ConfigBuilder::new()
            .case("Slim")
            .processor(processor)
            .memory_gb(memory_gb)
            .storage_gb(storage_gb)
            .graphics("Integrated")
            .color(color)
            .peripherals(peripherals)
            .device_type(true)
            .finalize()
            .build()
    }
}
