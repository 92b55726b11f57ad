//! User-facing choice lists for the wizard forms.
//!
//! Each list pairs the stored value with its display label. Form
//! validation accepts only listed values; the permissive price tables in
//! [`super::prices`] are a separate concern.

/// (value, label) pairs for the case selection step.
pub fn case_choices() -> &'static [(&'static str, &'static str)] {
    &[
        ("Tower", "Tower Desktop"),
        ("Mini", "Mini Desktop"),
        ("Slim", "Slim Desktop"),
        ("Gaming", "Gaming Desktop"),
    ]
}

/// (value, label) pairs for the processor selection step.
pub fn processor_choices() -> &'static [(&'static str, &'static str)] {
    &[
        ("i5-12400", "Intel Core i5-12400"),
        ("i7-12700K", "Intel Core i7-12700K"),
        ("i9-12900K", "Intel Core i9-12900K"),
        ("Ryzen-5-5600X", "AMD Ryzen 5 5600X"),
        ("Ryzen-7-5800X", "AMD Ryzen 7 5800X"),
    ]
}

/// (value, label) pairs for the memory selection step.
pub fn memory_choices() -> &'static [(&'static str, &'static str)] {
    &[("8", "8GB"), ("16", "16GB"), ("32", "32GB"), ("64", "64GB")]
}

/// (value, label) pairs for the storage selection step.
pub fn storage_choices() -> &'static [(&'static str, &'static str)] {
    &[("512", "512GB SSD"), ("1024", "1TB SSD"), ("2048", "2TB SSD")]
}

/// (value, label) pairs for the graphics selection step.
pub fn graphics_choices() -> &'static [(&'static str, &'static str)] {
    &[
        ("Integrated", "Integrated Graphics"),
        ("RTX-3060", "NVIDIA RTX 3060"),
        ("RTX-3070", "NVIDIA RTX 3070"),
        ("RTX-3080", "NVIDIA RTX 3080"),
        ("RX-6700XT", "AMD RX 6700XT"),
    ]
}

/// (value, label) pairs for the color selection step.
pub fn color_choices() -> &'static [(&'static str, &'static str)] {
    &[
        ("Black", "Midnight Black"),
        ("White", "Arctic White"),
        ("Silver", "Metallic Silver"),
        ("Blue", "Royal Blue"),
        ("Red", "Racing Red"),
    ]
}

/// (value, label) pairs for the peripherals selection step.
pub fn peripheral_choices() -> &'static [(&'static str, &'static str)] {
    &[
        ("monitor", "Monitor"),
        ("keyboard", "Keyboard"),
        ("mouse", "Mouse"),
        ("headset", "Headset"),
        ("webcam", "Webcam"),
    ]
}

fn contains(choices: &[(&str, &str)], value: &str) -> bool {
    choices.iter().any(|(v, _)| *v == value)
}

/// Check whether a value is a listed case type.
pub fn is_valid_case(value: &str) -> bool {
    contains(case_choices(), value)
}

/// Check whether a value is a listed processor.
pub fn is_valid_processor(value: &str) -> bool {
    contains(processor_choices(), value)
}

/// Check whether a value is a listed memory size.
pub fn is_valid_memory(value: &str) -> bool {
    contains(memory_choices(), value)
}

/// Check whether a value is a listed storage size.
pub fn is_valid_storage(value: &str) -> bool {
    contains(storage_choices(), value)
}

/// Check whether a value is a listed graphics card.
pub fn is_valid_graphics(value: &str) -> bool {
    contains(graphics_choices(), value)
}

/// Check whether a value is a listed color.
pub fn is_valid_color(value: &str) -> bool {
    contains(color_choices(), value)
}

/// Check whether a value is a listed peripheral item.
pub fn is_valid_peripheral(value: &str) -> bool {
    contains(peripheral_choices(), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_choices() {
        assert!(is_valid_case("Gaming"));
        assert!(is_valid_processor("Ryzen-7-5800X"));
        assert!(is_valid_memory("64"));
        assert!(is_valid_storage("1024"));
        assert!(is_valid_graphics("Integrated"));
        assert!(is_valid_color("Red"));
        assert!(is_valid_peripheral("webcam"));
    }

    #[test]
    fn test_invalid_choices() {
        assert!(!is_valid_case("Cube"));
        assert!(!is_valid_memory("12"));
        assert!(!is_valid_peripheral("printer"));
    }

    #[test]
    fn test_choice_lists_carry_labels() {
        let (value, label) = case_choices()[3];
        assert_eq!(value, "Gaming");
        assert_eq!(label, "Gaming Desktop");
    }
}
