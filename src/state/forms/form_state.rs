//! Form state management

use super::field::{FieldId, FieldKind, FieldValue, FormField};
use super::schema::FormVariant;
use super::visibility::{self, Section};
use serde_json::{Map, Number, Value};
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors for updates that fall outside a variant's schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("field `{0}` is not part of this form")]
    UnknownField(&'static str),

    #[error("field `{field}` expects a {expected} value")]
    KindMismatch {
        field: &'static str,
        expected: &'static str,
    },
}

/// A single input event for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    /// Replace a scalar value
    Scalar(String),
    /// Check or uncheck one option of a multi-value field
    Toggle { value: String, checked: bool },
}

impl FieldInput {
    pub fn scalar(value: impl Into<String>) -> Self {
        FieldInput::Scalar(value.into())
    }

    pub fn check(value: impl Into<String>) -> Self {
        FieldInput::Toggle {
            value: value.into(),
            checked: true,
        }
    }

    pub fn uncheck(value: impl Into<String>) -> Self {
        FieldInput::Toggle {
            value: value.into(),
            checked: false,
        }
    }
}

/// Answers of one open form, seeded from its variant's schema
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    variant: FormVariant,
    fields: Vec<FormField>,
}

impl FormState {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            variant,
            fields: variant.schema().iter().map(FormField::from_spec).collect(),
        }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn field(&self, id: FieldId) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id() == id)
    }

    fn field_mut(&mut self, id: FieldId) -> Result<&mut FormField, FormError> {
        self.fields
            .iter_mut()
            .find(|f| f.id() == id)
            .ok_or(FormError::UnknownField(id.wire_name()))
    }

    /// Scalar value of a field, empty when absent or multi-valued
    pub fn scalar(&self, id: FieldId) -> &str {
        self.field(id).map(FormField::as_text).unwrap_or("")
    }

    /// Selected options of a multi-value field, empty when absent or scalar
    pub fn selected(&self, id: FieldId) -> &[String] {
        self.field(id).map(FormField::selected).unwrap_or(&[])
    }

    pub fn is_selected(&self, id: FieldId, option: &str) -> bool {
        self.selected(id).iter().any(|v| v == option)
    }

    /// Apply one input event in place.
    ///
    /// A scalar input replaces the value unconditionally. A checked toggle adds the option
    /// unless it is already selected; an unchecked toggle removes every equal entry.
    /// Rejected inputs leave the state untouched.
    pub fn apply(&mut self, id: FieldId, input: FieldInput) -> Result<(), FormError> {
        let field = self.field_mut(id)?;

        match (&mut field.value, input) {
            (FieldValue::Scalar(current), FieldInput::Scalar(value)) => {
                *current = value;
            }
            (FieldValue::Multi(selected), FieldInput::Toggle { value, checked }) => {
                if checked {
                    if !selected.contains(&value) {
                        selected.push(value);
                    }
                } else {
                    selected.retain(|v| *v != value);
                }
            }
            (FieldValue::Scalar(_), FieldInput::Toggle { .. }) => {
                return Err(FormError::KindMismatch {
                    field: id.wire_name(),
                    expected: "single",
                });
            }
            (FieldValue::Multi(_), FieldInput::Scalar(_)) => {
                return Err(FormError::KindMismatch {
                    field: id.wire_name(),
                    expected: "multi-select",
                });
            }
        }

        tracing::trace!(field = id.wire_name(), "form field updated");
        Ok(())
    }

    /// Append a typed character to a text or number field if the field accepts it
    pub fn push_char(&mut self, id: FieldId, c: char) -> Result<bool, FormError> {
        let field = self.field(id).ok_or(FormError::UnknownField(id.wire_name()))?;
        if !field.accepts_char(c) {
            return Ok(false);
        }
        let mut text = field.as_text().to_string();
        text.push(c);
        self.apply(id, FieldInput::scalar(text))?;
        Ok(true)
    }

    /// Remove the last character of a text or number field
    pub fn pop_char(&mut self, id: FieldId) -> Result<(), FormError> {
        let field = self.field(id).ok_or(FormError::UnknownField(id.wire_name()))?;
        if !field.kind().is_typed() {
            return Ok(());
        }
        let mut text = field.as_text().to_string();
        text.pop();
        self.apply(id, FieldInput::scalar(text))
    }

    /// Step a dropdown or radio field to its next/previous option.
    ///
    /// Dropdowns cycle through the empty placeholder; radio groups only cycle their options.
    pub fn cycle_option(&mut self, id: FieldId, forward: bool) -> Result<(), FormError> {
        let field = self.field(id).ok_or(FormError::UnknownField(id.wire_name()))?;

        let mut choices: Vec<&str> = Vec::new();
        match field.kind() {
            FieldKind::Select(options) => {
                choices.push("");
                choices.extend_from_slice(options);
            }
            FieldKind::Radio(options) => choices.extend_from_slice(options),
            _ => return Ok(()),
        }

        let current = choices.iter().position(|c| *c == field.as_text());
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => choices.len() - 1,
            (Some(i), true) => (i + 1) % choices.len(),
            (Some(0), false) => choices.len() - 1,
            (Some(i), false) => i - 1,
        };
        self.apply(id, FieldInput::scalar(choices[next]))
    }

    /// Flip one option of a checkbox group
    pub fn toggle_option(&mut self, id: FieldId, option: &str) -> Result<(), FormError> {
        let input = if self.is_selected(id, option) {
            FieldInput::uncheck(option)
        } else {
            FieldInput::check(option)
        };
        self.apply(id, input)
    }

    pub fn visible_sections(&self) -> BTreeSet<Section> {
        visibility::visible_sections(self)
    }

    /// Fields that should render, in schema order
    pub fn visible_fields(&self) -> Vec<&FormField> {
        let sections = self.visible_sections();
        self.fields
            .iter()
            .filter(|f| f.section().map_or(true, |s| sections.contains(&s)))
            .collect()
    }

    /// JSON body mirroring the form: wire names to strings, numbers, or string lists
    pub fn to_payload(&self) -> Value {
        let mut body = Map::new();
        for field in &self.fields {
            let value = match (&field.value, field.kind()) {
                (FieldValue::Scalar(s), FieldKind::Number) => number_or_string(s),
                (FieldValue::Scalar(s), _) => Value::String(s.clone()),
                (FieldValue::Multi(values), _) => {
                    Value::Array(values.iter().cloned().map(Value::String).collect())
                }
            };
            body.insert(field.id().wire_name().to_string(), value);
        }
        Value::Object(body)
    }
}

fn number_or_string(raw: &str) -> Value {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::Number(n.into());
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(raw.to_string()))
}
