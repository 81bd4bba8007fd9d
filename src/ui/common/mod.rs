//! Common reusable UI components shared by the lead forms

pub mod button;
pub mod form;
pub mod message;

pub use button::{InlineSpinner, SubmitButton};
pub use form::{FormField, TextAreaField};
pub use message::StatusMessage;
