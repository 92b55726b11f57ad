//! The in-progress selection bag held in session storage.

use crate::catalog::{DEFAULT_MEMORY_GB, DEFAULT_STORAGE_GB};
use crate::config::{ComputerSpec, ConfigBuilder};
use serde::{Deserialize, Serialize};

/// One user's in-progress wizard selections.
///
/// Every field is optional: the wizard collects one field per step, and
/// the single entry guard only requires `case_type`, so any later field
/// may still be absent when the summary is priced. Numeric selections are
/// kept as the submitted strings; coercion to sizes happens at pricing
/// time, falling back to the defaults when it fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BuildSession {
    pub case_type: Option<String>,
    pub processor: Option<String>,
    pub memory: Option<String>,
    pub storage: Option<String>,
    pub graphics_card: Option<String>,
    pub color: Option<String>,
    pub peripherals: Option<Vec<String>>,
    pub is_laptop: Option<bool>,
}

impl BuildSession {
    /// Fresh bag containing only a case selection. Starting the flow
    /// replaces the whole bag, discarding any earlier attempt.
    pub fn start(case_type: impl Into<String>) -> Self {
        Self {
            case_type: Some(case_type.into()),
            ..Default::default()
        }
    }

    /// Whether the flow has been started (a case type was selected).
    pub fn started(&self) -> bool {
        self.case_type.is_some()
    }

    /// Memory size in GB, defaulting when absent or unparseable.
    pub fn memory_gb(&self) -> u32 {
        parse_size(self.memory.as_deref(), DEFAULT_MEMORY_GB)
    }

    /// Storage size in GB, defaulting when absent or unparseable.
    pub fn storage_gb(&self) -> u32 {
        parse_size(self.storage.as_deref(), DEFAULT_STORAGE_GB)
    }

    /// Price the current selections without persisting anything.
    ///
    /// Drives a fresh builder through the full step sequence in flow
    /// order; absent fields contribute their zero values (or the numeric
    /// defaults) exactly as the summary page displays them.
    pub fn preview(&self) -> ComputerSpec {
        ConfigBuilder::new()
            .case(self.case_type.clone().unwrap_or_default())
            .processor(self.processor.clone().unwrap_or_default())
            .memory_gb(self.memory_gb())
            .storage_gb(self.storage_gb())
            .graphics(self.graphics_card.clone().unwrap_or_default())
            .color(self.color.clone().unwrap_or_default())
            .peripherals(self.peripherals.clone().unwrap_or_default())
            .device_type(self.is_laptop.unwrap_or(false))
            .finalize()
            .build()
    }
}

fn parse_size(value: Option<&str>, default: u32) -> u32 {
    value
        .and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(default)
}
