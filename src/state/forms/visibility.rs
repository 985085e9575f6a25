//! Conditional section visibility
//!
//! Which optional parts of a form render is derived from the current answers only.
//! There is no separate "shown" flag anywhere.

use super::field::FieldId;
use super::form_state::FormState;
use std::collections::BTreeSet;

/// Child status answers that open the child issues checklist
pub const CHILD_AGE_STATUSES: &[&str] = &["1 Year", "2 Year", "< 1 Year"];

/// Child status answer that shows the no-child note instead
pub const NO_CHILD_STATUS: &str = "No Child";

/// Disease answer that opens the heart condition dropdown
pub const HEART_DISEASE: &str = "Heart";

/// Optional groups of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    HeartCondition,
    PregnancySymptoms,
    ChildStatus,
    ChildIssues,
    /// Informational "No Child, No Pregnant" note, bound to no field
    NoChildNotice,
}

/// Sections that should render for the given answers
pub fn visible_sections(state: &FormState) -> BTreeSet<Section> {
    let mut sections = BTreeSet::new();

    if state.scalar(FieldId::Disease) == HEART_DISEASE {
        sections.insert(Section::HeartCondition);
    }

    let (yes, no) = state.variant().pregnancy_answers();
    let pregnant = state.scalar(FieldId::Pregnant);
    if pregnant == yes {
        sections.insert(Section::PregnancySymptoms);
    } else if pregnant == no {
        sections.insert(Section::ChildStatus);

        let child_status = state.scalar(FieldId::ChildStatus);
        if CHILD_AGE_STATUSES.contains(&child_status) {
            sections.insert(Section::ChildIssues);
        } else if child_status == NO_CHILD_STATUS {
            sections.insert(Section::NoChildNotice);
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::{FieldInput, FormVariant};
    use pretty_assertions::assert_eq;

    fn state_with(variant: FormVariant, answers: &[(FieldId, &str)]) -> FormState {
        let mut state = FormState::new(variant);
        for (id, value) in answers {
            state.apply(*id, FieldInput::scalar(*value)).unwrap();
        }
        state
    }

    fn sections(items: &[Section]) -> BTreeSet<Section> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_fresh_form_shows_no_optional_sections() {
        for variant in FormVariant::ALL {
            assert!(visible_sections(&FormState::new(variant)).is_empty());
        }
    }

    #[test]
    fn test_heart_disease_shows_heart_condition() {
        let state = state_with(FormVariant::HealthCheck, &[(FieldId::Disease, "Heart")]);
        assert_eq!(visible_sections(&state), sections(&[Section::HeartCondition]));
    }

    #[test]
    fn test_other_disease_hides_heart_condition() {
        let state = state_with(FormVariant::HealthCheck, &[(FieldId::Disease, "Malaria")]);
        assert!(!visible_sections(&state).contains(&Section::HeartCondition));
    }

    #[test]
    fn test_pregnant_yes_shows_symptoms_not_child_status() {
        let state = state_with(FormVariant::HealthCheck, &[(FieldId::Pregnant, "Yes")]);
        let visible = visible_sections(&state);
        assert!(visible.contains(&Section::PregnancySymptoms));
        assert!(!visible.contains(&Section::ChildStatus));
    }

    #[test]
    fn test_pregnant_no_shows_child_status_only() {
        let state = state_with(FormVariant::HealthCheck, &[(FieldId::Pregnant, "No")]);
        assert_eq!(visible_sections(&state), sections(&[Section::ChildStatus]));
    }

    #[test]
    fn test_no_child_hides_child_issues() {
        let state = state_with(
            FormVariant::HealthCheck,
            &[(FieldId::Pregnant, "No"), (FieldId::ChildStatus, "No Child")],
        );
        assert_eq!(
            visible_sections(&state),
            sections(&[Section::ChildStatus, Section::NoChildNotice])
        );
    }

    #[test]
    fn test_child_ages_show_child_issues() {
        for status in CHILD_AGE_STATUSES {
            let state = state_with(
                FormVariant::NutritionPlan,
                &[(FieldId::Pregnant, "No"), (FieldId::ChildStatus, *status)],
            );
            assert_eq!(
                visible_sections(&state),
                sections(&[Section::ChildStatus, Section::ChildIssues]),
                "{status}"
            );
        }
    }

    #[test]
    fn test_child_status_ignored_while_pregnant() {
        let state = state_with(
            FormVariant::HealthCheck,
            &[(FieldId::ChildStatus, "1 Year"), (FieldId::Pregnant, "Yes")],
        );
        assert!(!visible_sections(&state).contains(&Section::ChildIssues));
    }

    #[test]
    fn test_lowercase_variant_uses_lowercase_answers() {
        let lower = state_with(FormVariant::DietaryIntake, &[(FieldId::Pregnant, "yes")]);
        assert!(visible_sections(&lower).contains(&Section::PregnancySymptoms));

        let title_case = state_with(FormVariant::DietaryIntake, &[(FieldId::Pregnant, "Yes")]);
        assert!(visible_sections(&title_case).is_empty());
    }

    #[test]
    fn test_same_state_gives_same_sections() {
        let state = state_with(
            FormVariant::NutritionPlan,
            &[(FieldId::Disease, "Heart"), (FieldId::Pregnant, "No")],
        );
        assert_eq!(visible_sections(&state), visible_sections(&state));
    }

    #[test]
    fn test_unrelated_fields_and_order_do_not_matter() {
        let a = state_with(
            FormVariant::NutritionPlan,
            &[
                (FieldId::Disease, "Heart"),
                (FieldId::Pregnant, "No"),
                (FieldId::ChildStatus, "2 Year"),
            ],
        );
        let b = state_with(
            FormVariant::NutritionPlan,
            &[
                (FieldId::ChildStatus, "2 Year"),
                (FieldId::Name, "Asha"),
                (FieldId::Pregnant, "No"),
                (FieldId::MonthlyIncome, "12000"),
                (FieldId::Disease, "Heart"),
            ],
        );
        assert_eq!(visible_sections(&a), visible_sections(&b));
    }
}
