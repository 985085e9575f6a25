//! Form rendering module
//!
//! - `field_renderer`: per-field line rendering
//! - `intake_form`: the intake form page and its submit panel

mod field_renderer;
mod intake_form;

pub use intake_form::draw;
