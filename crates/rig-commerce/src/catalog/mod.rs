//! Component catalog: fixed price tables and user-facing choice lists.

mod choices;
mod prices;

pub use choices::{
    case_choices, color_choices, graphics_choices, is_valid_case, is_valid_color,
    is_valid_graphics, is_valid_memory, is_valid_peripheral, is_valid_processor, is_valid_storage,
    memory_choices, peripheral_choices, processor_choices, storage_choices,
};
pub use prices::{
    case_price, graphics_price, memory_price, peripheral_price, peripherals_price,
    processor_price, storage_price, ASSEMBLY_FEE, BUNDLE_DISCOUNT, COLOR_FEE,
    DEFAULT_MEMORY_GB, DEFAULT_STORAGE_GB, LAPTOP_PREMIUM,
};
