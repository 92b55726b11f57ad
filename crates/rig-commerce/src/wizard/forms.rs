//! Per-step submission validation and bag transitions.

use crate::catalog;
use crate::error::CommerceError;
use crate::wizard::{BuildSession, WizardStep};

/// A submitted value for one wizard step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// A single-choice selection (case, processor, memory, storage,
    /// graphics, color).
    Choice(String),
    /// The peripherals checkbox set.
    Peripherals(Vec<String>),
    /// The laptop/desktop flag.
    DeviceType(bool),
}

/// Validate a submission against its step and merge it into the bag.
///
/// Returns the step to advance to. On a validation error the bag is left
/// untouched and the caller re-renders the current step. The case step is
/// special: a valid case selection REPLACES the whole bag, starting a
/// fresh build.
pub fn apply(
    bag: &mut BuildSession,
    step: WizardStep,
    submission: &Submission,
) -> Result<WizardStep, CommerceError> {
    match (step, submission) {
        (WizardStep::Case, Submission::Choice(value)) => {
            let value = validate_choice("case_type", value, catalog::is_valid_case)?;
            *bag = BuildSession::start(value);
        }
        (WizardStep::Processor, Submission::Choice(value)) => {
            bag.processor = Some(validate_choice("processor", value, catalog::is_valid_processor)?);
        }
        (WizardStep::Memory, Submission::Choice(value)) => {
            bag.memory = Some(validate_choice("memory", value, catalog::is_valid_memory)?);
        }
        (WizardStep::Storage, Submission::Choice(value)) => {
            bag.storage = Some(validate_choice("storage", value, catalog::is_valid_storage)?);
        }
        (WizardStep::Graphics, Submission::Choice(value)) => {
            bag.graphics_card =
                Some(validate_choice("graphics_card", value, catalog::is_valid_graphics)?);
        }
        (WizardStep::Color, Submission::Choice(value)) => {
            bag.color = Some(validate_choice("color", value, catalog::is_valid_color)?);
        }
        (WizardStep::Peripherals, Submission::Peripherals(items)) => {
            for item in items {
                if !catalog::is_valid_peripheral(item) {
                    return Err(CommerceError::InvalidChoice {
                        field: "peripherals",
                        value: item.clone(),
                    });
                }
            }
            bag.peripherals = Some(items.clone());
        }
        (WizardStep::DeviceType, Submission::DeviceType(is_laptop)) => {
            bag.is_laptop = Some(*is_laptop);
        }
        (step, _) => {
            return Err(CommerceError::UnsupportedSubmission { step: step.as_str() });
        }
    }

    // Every accepting arm above has a next step.
    step.next()
        .ok_or(CommerceError::UnsupportedSubmission { step: step.as_str() })
}

fn validate_choice(
    field: &'static str,
    value: &str,
    is_valid: fn(&str) -> bool,
) -> Result<String, CommerceError> {
    if value.is_empty() {
        return Err(CommerceError::MissingField { field });
    }
    if !is_valid(value) {
        return Err(CommerceError::InvalidChoice {
            field,
            value: value.to_string(),
        });
    }
    Ok(value.to_string())
}
