//! Static schemas of the three intake form variants

use super::field::{FieldId, FieldKind};
use super::visibility::Section;

pub const GENDER_OPTIONS: &[&str] = &["Male", "Female"];

pub const DISEASE_OPTIONS: &[&str] = &[
    "Malaria",
    "Typhoid",
    "Diarrhea",
    "Rabies",
    "HIV",
    "Jaundice",
    "Tuberculosis",
    "Cancer",
    "Heart",
    "Chicken Pox",
    "Coronavirus",
];

pub const HEART_OPTIONS: &[&str] = &["Low BP", "High BP"];

pub const PREGNANCY_SYMPTOM_OPTIONS: &[&str] = &[
    "Painful Body",
    "Rashes on Stomach",
    "Skin Issues",
    "Itching or Irritating",
    "Headache",
    "Vomiting",
    "Cough",
    "Swelling of Hands and Legs",
    "Heavy Body",
];

pub const CHILD_STATUS_OPTIONS: &[&str] = &["1 Year", "2 Year", "< 1 Year", "No Child"];

pub const CHILD_ISSUE_OPTIONS: &[&str] = &[
    "Frequent Disease",
    "Illness",
    "Allergy",
    "Infection",
    "Diarrhea",
    "Fever",
    "No Activity",
    "No Response from Child",
    "Heavy Weight of Mother",
    "Stressful or Anxious Behavior",
    "Skin Issues",
];

pub const DIET_TYPE_OPTIONS: &[&str] = &["Vegetarian", "Non-Vegetarian", "Eggetarian", "Vegan"];

pub const FOOD_ALLERGY_OPTIONS: &[&str] = &[
    "Milk",
    "Eggs",
    "Peanuts",
    "Tree Nuts",
    "Wheat",
    "Soy",
    "Fish",
    "Shellfish",
];

const PREGNANCY_ANSWERS: &[&str] = &["Yes", "No"];
const PREGNANCY_ANSWERS_LOWER: &[&str] = &["yes", "no"];

/// Static description of one field within a variant
#[derive(Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: FieldId,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Section whose visibility gates this field, if any
    pub section: Option<Section>,
}

const fn spec(id: FieldId, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        id,
        label,
        kind,
        section: None,
    }
}

const fn gated(
    id: FieldId,
    label: &'static str,
    kind: FieldKind,
    section: Section,
) -> FieldSpec {
    FieldSpec {
        id,
        label,
        kind,
        section: Some(section),
    }
}

const NAME: FieldSpec = spec(FieldId::Name, "Name", FieldKind::Text);
const ADDRESS: FieldSpec = spec(FieldId::Address, "Address", FieldKind::Text);
const PHONE: FieldSpec = spec(FieldId::Phone, "Phone Number", FieldKind::Text);
const GENDER: FieldSpec = spec(FieldId::Gender, "Gender", FieldKind::Radio(GENDER_OPTIONS));
const AGE: FieldSpec = spec(FieldId::Age, "Age", FieldKind::Number);
const HEIGHT: FieldSpec = spec(FieldId::Height, "Height", FieldKind::Text);
const WEIGHT: FieldSpec = spec(FieldId::Weight, "Weight", FieldKind::Text);
const DISEASE: FieldSpec = spec(
    FieldId::Disease,
    "Disease",
    FieldKind::Select(DISEASE_OPTIONS),
);
const HEART_CONDITION: FieldSpec = gated(
    FieldId::HeartCondition,
    "Heart Condition",
    FieldKind::Select(HEART_OPTIONS),
    Section::HeartCondition,
);
const PREGNANT: FieldSpec = spec(
    FieldId::Pregnant,
    "Are you pregnant?",
    FieldKind::Select(PREGNANCY_ANSWERS),
);
const PREGNANT_LOWER: FieldSpec = spec(
    FieldId::Pregnant,
    "Are you pregnant?",
    FieldKind::Select(PREGNANCY_ANSWERS_LOWER),
);
const PREGNANCY_SYMPTOMS: FieldSpec = gated(
    FieldId::PregnancySymptoms,
    "Symptoms",
    FieldKind::Checkboxes(PREGNANCY_SYMPTOM_OPTIONS),
    Section::PregnancySymptoms,
);
const CHILD_STATUS: FieldSpec = gated(
    FieldId::ChildStatus,
    "Do you have a child?",
    FieldKind::Select(CHILD_STATUS_OPTIONS),
    Section::ChildStatus,
);
const CHILD_ISSUES: FieldSpec = gated(
    FieldId::ChildIssues,
    "Child Issues",
    FieldKind::Checkboxes(CHILD_ISSUE_OPTIONS),
    Section::ChildIssues,
);
const DIET_TYPE: FieldSpec = spec(
    FieldId::DietType,
    "Diet Type",
    FieldKind::Select(DIET_TYPE_OPTIONS),
);
const FOOD_ALLERGIES: FieldSpec = spec(
    FieldId::FoodAllergies,
    "Food Allergies",
    FieldKind::Checkboxes(FOOD_ALLERGY_OPTIONS),
);
const MEALS_PER_DAY: FieldSpec = spec(FieldId::MealsPerDay, "Meals per Day", FieldKind::Number);
const MONTHLY_INCOME: FieldSpec = spec(
    FieldId::MonthlyIncome,
    "Monthly Household Income",
    FieldKind::Number,
);
const HOUSEHOLD_SIZE: FieldSpec = spec(
    FieldId::HouseholdSize,
    "Household Size",
    FieldKind::Number,
);

static HEALTH_CHECK_SCHEMA: [FieldSpec; 13] = [
    NAME,
    ADDRESS,
    PHONE,
    GENDER,
    AGE,
    HEIGHT,
    WEIGHT,
    DISEASE,
    HEART_CONDITION,
    PREGNANT,
    PREGNANCY_SYMPTOMS,
    CHILD_STATUS,
    CHILD_ISSUES,
];

static DIETARY_INTAKE_SCHEMA: [FieldSpec; 18] = [
    NAME,
    ADDRESS,
    PHONE,
    GENDER,
    AGE,
    HEIGHT,
    WEIGHT,
    DISEASE,
    HEART_CONDITION,
    PREGNANT_LOWER,
    PREGNANCY_SYMPTOMS,
    CHILD_STATUS,
    CHILD_ISSUES,
    DIET_TYPE,
    FOOD_ALLERGIES,
    MEALS_PER_DAY,
    MONTHLY_INCOME,
    HOUSEHOLD_SIZE,
];

static NUTRITION_PLAN_SCHEMA: [FieldSpec; 18] = [
    NAME,
    ADDRESS,
    PHONE,
    GENDER,
    AGE,
    HEIGHT,
    WEIGHT,
    DISEASE,
    HEART_CONDITION,
    PREGNANT,
    PREGNANCY_SYMPTOMS,
    CHILD_STATUS,
    CHILD_ISSUES,
    DIET_TYPE,
    FOOD_ALLERGIES,
    MEALS_PER_DAY,
    MONTHLY_INCOME,
    HOUSEHOLD_SIZE,
];

/// The intake form variants offered on the selection page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormVariant {
    #[default]
    HealthCheck,
    DietaryIntake,
    NutritionPlan,
}

impl FormVariant {
    pub const ALL: [FormVariant; 3] = [
        FormVariant::HealthCheck,
        FormVariant::DietaryIntake,
        FormVariant::NutritionPlan,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::HealthCheck => "Health Check Form",
            Self::DietaryIntake => "Dietary Intake Form",
            Self::NutritionPlan => "Nutrition Plan Request",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Self::HealthCheck => "Personal details, disease, pregnancy and child status",
            Self::DietaryIntake => "Health check plus diet, allergies and household income",
            Self::NutritionPlan => "Full intake submitted for a personalised nutrition plan",
        }
    }

    /// Stable key stored in the config file
    pub fn key(self) -> &'static str {
        match self {
            Self::HealthCheck => "health_check",
            Self::DietaryIntake => "dietary_intake",
            Self::NutritionPlan => "nutrition_plan",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.key() == key)
    }

    /// Ordered field specs of this variant
    pub fn schema(self) -> &'static [FieldSpec] {
        match self {
            Self::HealthCheck => &HEALTH_CHECK_SCHEMA,
            Self::DietaryIntake => &DIETARY_INTAKE_SCHEMA,
            Self::NutritionPlan => &NUTRITION_PLAN_SCHEMA,
        }
    }

    /// Literal (yes, no) answers this variant uses for the pregnancy question
    pub fn pregnancy_answers(self) -> (&'static str, &'static str) {
        match self {
            Self::DietaryIntake => ("yes", "no"),
            Self::HealthCheck | Self::NutritionPlan => ("Yes", "No"),
        }
    }

    /// Only the nutrition plan variant sends its data to the recommendation endpoint
    pub fn submits(self) -> bool {
        matches!(self, Self::NutritionPlan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_schemas_have_unique_field_ids() {
        for variant in FormVariant::ALL {
            let ids: HashSet<_> = variant.schema().iter().map(|s| s.id).collect();
            assert_eq!(ids.len(), variant.schema().len(), "{variant:?}");
        }
    }

    #[test]
    fn test_pregnancy_answers_match_select_options() {
        for variant in FormVariant::ALL {
            let pregnant = variant
                .schema()
                .iter()
                .find(|s| s.id == FieldId::Pregnant)
                .unwrap();
            let (yes, no) = variant.pregnancy_answers();
            assert_eq!(pregnant.kind.options(), &[yes, no]);
        }
    }

    #[test]
    fn test_only_nutrition_plan_submits() {
        assert!(!FormVariant::HealthCheck.submits());
        assert!(!FormVariant::DietaryIntake.submits());
        assert!(FormVariant::NutritionPlan.submits());
    }

    #[test]
    fn test_key_round_trip() {
        for variant in FormVariant::ALL {
            assert_eq!(FormVariant::from_key(variant.key()), Some(variant));
        }
        assert_eq!(FormVariant::from_key("unknown"), None);
    }

    #[test]
    fn test_health_check_has_no_dietary_fields() {
        let has = |variant: FormVariant, id| variant.schema().iter().any(|s| s.id == id);
        assert!(!has(FormVariant::HealthCheck, FieldId::DietType));
        assert!(!has(FormVariant::HealthCheck, FieldId::MonthlyIncome));
        assert!(has(FormVariant::DietaryIntake, FieldId::MonthlyIncome));
    }

    #[test]
    fn test_gated_fields_name_their_section() {
        let gated: Vec<_> = FormVariant::NutritionPlan
            .schema()
            .iter()
            .filter_map(|s| s.section.map(|section| (s.id, section)))
            .collect();
        assert_eq!(
            gated,
            vec![
                (FieldId::HeartCondition, Section::HeartCondition),
                (FieldId::PregnancySymptoms, Section::PregnancySymptoms),
                (FieldId::ChildStatus, Section::ChildStatus),
                (FieldId::ChildIssues, Section::ChildIssues),
            ]
        );
    }
}
