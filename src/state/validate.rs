//! Presence validation for each form step

use super::fields::FieldId;
use super::record::ApplicationRecord;
use super::session::Step;

/// The fields a step requires, in the order they are shown and reported
pub fn step_fields(step: Step) -> &'static [FieldId] {
    match step {
        Step::Identity => &[FieldId::Name, FieldId::Role, FieldId::Email, FieldId::Phone],
        Step::CompanyProfile => &[FieldId::CompanyName, FieldId::Employees, FieldId::Revenue],
        Step::ChallengeAndUrgency => &[FieldId::Challenge, FieldId::Urgency],
    }
}

/// Labels of the step's required fields that are still empty, in declared
/// order. An empty result means the step may be left.
pub fn missing_fields(step: Step, record: &ApplicationRecord) -> Vec<&'static str> {
    step_fields(step)
        .iter()
        .filter(|field| !record.is_filled(**field))
        .map(|field| field.label())
        .collect()
}

/// Compose the user-facing message for a non-empty missing-field list
pub fn missing_fields_message(missing: &[&str]) -> String {
    format!(
        "Please fill in the required fields: {}",
        missing.join(", ")
    )
}
