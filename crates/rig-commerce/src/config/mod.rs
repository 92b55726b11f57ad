//! Configuration assembly: the priced spec, the step builder, and presets.

mod builder;
mod director;
mod spec;

pub use builder::ConfigBuilder;
pub use director::ConfigDirector;
pub use spec::ComputerSpec;
