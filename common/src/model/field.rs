use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::lenient;

/// One entry of a form schema: a single control with its label, kind and constraints.
///
/// The `name` doubles as the DOM lookup key and the key of the submitted value, so it is
/// expected to be unique within a schema. Duplicates are not rejected; the later field
/// simply overwrites the earlier one when the submission is collected.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub label: String,
    #[serde(rename = "type", default, deserialize_with = "lenient::field_kind")]
    pub kind: FieldKind,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub required: bool,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Choices for a `select` field, in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRules>,
    /// Turns a `select` field into a multi-choice list. Ignored for other kinds.
    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "std::ops::Not::not")]
    pub multiple: bool,
}

/// The control variant requested by a descriptor's `type` tag.
///
/// Tags other than the four dedicated ones are passed through verbatim as the
/// `type` attribute of a single-line input (`email`, `number`, `date`, ...).
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(from = "Option<String>", into = "String")]
pub enum FieldKind {
    #[default]
    Text,
    Select,
    TextArea,
    Checkbox,
    Input(String),
}

impl FieldKind {
    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Select => "select",
            FieldKind::TextArea => "textarea",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Input(other) => other,
        }
    }
}

impl From<Option<String>> for FieldKind {
    fn from(tag: Option<String>) -> Self {
        match tag.as_deref() {
            None | Some("") | Some("text") => FieldKind::Text,
            Some("select") => FieldKind::Select,
            Some("textarea") => FieldKind::TextArea,
            Some("checkbox") => FieldKind::Checkbox,
            Some(other) => FieldKind::Input(other.to_string()),
        }
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single choice of a `select` field.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct SelectOption {
    #[serde(default, deserialize_with = "lenient::option_value", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub label: String,
}

impl SelectOption {
    /// The submitted value: the explicit `value` when present and non-empty, the label otherwise.
    pub fn effective_value(&self) -> &str {
        match self.value.as_deref() {
            Some(value) if !value.is_empty() => value,
            _ => &self.label,
        }
    }
}

/// Native constraint attributes attached to a control.
///
/// Only the five recognized keys are read; anything else in the JSON object is ignored,
/// and so are recognized keys holding values of an unusable type.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    #[serde(default, deserialize_with = "lenient::opt_length", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_length", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_bound", skip_serializing_if = "Option::is_none")]
    pub min: Option<Bound>,
    #[serde(default, deserialize_with = "lenient::opt_bound", skip_serializing_if = "Option::is_none")]
    pub max: Option<Bound>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// A `min`/`max` bound. Numbers cover numeric inputs, strings cover dates and times.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Bound {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Number(n) => write!(f, "{}", n),
            Bound::Text(s) => f.write_str(s),
        }
    }
}
