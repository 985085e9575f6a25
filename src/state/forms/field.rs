//! Form field value objects

use super::schema::FieldSpec;
use super::visibility::Section;

/// Every field identifier used by any intake form variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Name,
    Address,
    Phone,
    Gender,
    Age,
    Height,
    Weight,
    Disease,
    HeartCondition,
    Pregnant,
    PregnancySymptoms,
    ChildStatus,
    ChildIssues,
    DietType,
    FoodAllergies,
    MealsPerDay,
    MonthlyIncome,
    HouseholdSize,
}

impl FieldId {
    /// Key used for this field in the submitted JSON payload
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Address => "address",
            Self::Phone => "phone",
            Self::Gender => "gender",
            Self::Age => "age",
            Self::Height => "height",
            Self::Weight => "weight",
            Self::Disease => "disease",
            Self::HeartCondition => "heartCondition",
            Self::Pregnant => "pregnant",
            Self::PregnancySymptoms => "pregnancySymptoms",
            Self::ChildStatus => "childStatus",
            Self::ChildIssues => "childIssues",
            Self::DietType => "dietType",
            Self::FoodAllergies => "foodAllergies",
            Self::MealsPerDay => "mealsPerDay",
            Self::MonthlyIncome => "monthlyIncome",
            Self::HouseholdSize => "householdSize",
        }
    }
}

/// How a field is entered and which options it offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Free text restricted to digits and a single decimal point
    Number,
    Radio(&'static [&'static str]),
    /// Dropdown; the empty value stands for the "Select" placeholder
    Select(&'static [&'static str]),
    Checkboxes(&'static [&'static str]),
}

impl FieldKind {
    /// True for fields holding a set of selected options
    pub fn is_multi(&self) -> bool {
        matches!(self, Self::Checkboxes(_))
    }

    /// Options offered by choice fields (empty for free input)
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Self::Radio(options) | Self::Select(options) | Self::Checkboxes(options) => options,
            Self::Text | Self::Number => &[],
        }
    }

    /// Whether typed characters edit this field
    pub fn is_typed(&self) -> bool {
        matches!(self, Self::Text | Self::Number)
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Scalar(String),
    /// Selected options in the order they were checked, without duplicates
    Multi(Vec<String>),
}

impl FieldValue {
    /// Schema-seeded default for a field kind
    pub fn empty_for(kind: &FieldKind) -> Self {
        if kind.is_multi() {
            FieldValue::Multi(Vec::new())
        } else {
            FieldValue::Scalar(String::new())
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(s) => Some(s),
            FieldValue::Multi(_) => None,
        }
    }

    pub fn as_multi(&self) -> Option<&[String]> {
        match self {
            FieldValue::Multi(values) => Some(values),
            FieldValue::Scalar(_) => None,
        }
    }
}

/// A single form field: its static spec plus its current value
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub spec: &'static FieldSpec,
    pub value: FieldValue,
}

impl FormField {
    /// Create a field seeded with the empty value for its kind
    pub fn from_spec(spec: &'static FieldSpec) -> Self {
        Self {
            spec,
            value: FieldValue::empty_for(&spec.kind),
        }
    }

    pub fn id(&self) -> FieldId {
        self.spec.id
    }

    pub fn label(&self) -> &'static str {
        self.spec.label
    }

    pub fn kind(&self) -> FieldKind {
        self.spec.kind
    }

    pub fn section(&self) -> Option<Section> {
        self.spec.section
    }

    /// Get the text value (returns empty string for multi-value fields)
    pub fn as_text(&self) -> &str {
        self.value.as_scalar().unwrap_or("")
    }

    /// Get the selected options (returns empty slice for scalar fields)
    pub fn selected(&self) -> &[String] {
        self.value.as_multi().unwrap_or(&[])
    }

    /// Check whether typing `c` into this field is allowed
    pub fn accepts_char(&self, c: char) -> bool {
        match self.spec.kind {
            FieldKind::Text => !c.is_control(),
            FieldKind::Number => c.is_ascii_digit() || (c == '.' && !self.as_text().contains('.')),
            _ => false,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Scalar(s) if s.is_empty() => match self.spec.kind {
                FieldKind::Select(_) | FieldKind::Radio(_) => "Select".to_string(),
                _ => String::new(),
            },
            FieldValue::Scalar(s) => s.clone(),
            FieldValue::Multi(values) if values.is_empty() => "None selected".to_string(),
            FieldValue::Multi(values) => values.join(", "),
        }
    }
}
