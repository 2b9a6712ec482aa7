//! Failure kinds of loading and submitting a form.
//!
//! Every variant is terminal for the operation that produced it. The frontend shows
//! load-time errors in place of the form (see [`FormError::container_message`]) and
//! submit-time errors in a blocking alert, keeping whatever the user typed.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The `formName` query parameter is absent, empty or the literal `"undefined"`.
    #[error("No form specified.")]
    MissingFormName,

    /// The schema endpoint answered with a non-success status.
    #[error("Form not found (HTTP {status})")]
    FormNotFound { status: u16 },

    /// The schema body could not be decoded into a form schema.
    #[error("Error parsing form data.")]
    SchemaParse { detail: String },

    /// The submit endpoint answered with a non-success status.
    #[error("Submission failed (HTTP {status})")]
    Submission { status: u16 },

    /// The request never produced a response (DNS, connection refused, CORS, ...).
    #[error("{0}")]
    Network(String),
}

impl FormError {
    pub fn schema_parse(err: serde_json::Error) -> Self {
        FormError::SchemaParse { detail: err.to_string() }
    }

    /// The one-line text written into the form container when loading fails.
    pub fn container_message(&self) -> String {
        match self {
            FormError::SchemaParse { .. } => self.to_string(),
            _ => format!("Error: {}", self),
        }
    }

    /// The text of the blocking notification shown when a submission fails.
    pub fn submit_alert_message(&self) -> String {
        format!("Error submitting form: {}", self)
    }
}
