//! Form domain layer
//!
//! Type-safe intake form handling: static schemas per variant, the answers held by
//! [`FormState`], and which optional sections those answers reveal.

mod field;
mod form_state;
mod schema;
mod visibility;

pub use field::{FieldId, FieldKind, FormField};
#[cfg(test)]
pub use form_state::FieldInput;
pub use form_state::{FormError, FormState};
pub use schema::FormVariant;
pub use visibility::Section;
