//! Endpoint paths and query payloads shared by the browser client and the server.

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Name of the query parameter carrying the form identifier, both on the page URL
/// and on the submit endpoint.
pub const FORM_NAME_PARAM: &str = "formName";

/// Query string of `POST /submit`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct SubmitQuery {
    #[serde(rename = "formName")]
    pub form_name: String,
}

/// Validates the raw `formName` query value read from the page URL.
///
/// Absent, empty and the literal `"undefined"` all count as "no form specified".
pub fn resolve_form_name(raw: Option<String>) -> Result<String, FormError> {
    match raw {
        Some(name) if !name.is_empty() && name != "undefined" => Ok(name),
        _ => Err(FormError::MissingFormName),
    }
}

/// `GET` path of a form schema, with the name percent-encoded as one path segment.
pub fn schema_path(form_name: &str) -> String {
    format!("/form/{}", urlencoding::encode(form_name))
}

/// `POST` path that receives a submission for `form_name`.
pub fn submit_path(form_name: &str) -> String {
    format!("/submit?{}={}", FORM_NAME_PARAM, urlencoding::encode(form_name))
}
