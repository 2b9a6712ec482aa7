use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::field::FieldDescriptor;
use crate::model::schema::FormSchema;

/// Current value of one rendered control.
///
/// Serialized untagged, so the submitted JSON holds a plain boolean, array or string.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ControlValue {
    /// Checked state of a checkbox.
    Checked(bool),
    /// Selected values of a multi-choice select, in document order.
    Selected(Vec<String>),
    /// Raw value of every other control.
    Text(String),
}

/// Field name to value map sent to the submit endpoint.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(transparent)]
pub struct SubmissionRecord {
    pub values: BTreeMap<String, ControlValue>,
}

impl SubmissionRecord {
    /// Builds a record by asking `read` for the value of each schema field.
    ///
    /// Fields for which `read` returns `None` (no matching control) are left out.
    /// A repeated field name keeps the value read last.
    pub fn collect<F>(schema: &FormSchema, mut read: F) -> Self
    where
        F: FnMut(&FieldDescriptor) -> Option<ControlValue>,
    {
        let mut values = BTreeMap::new();
        for field in &schema.fields {
            if let Some(value) = read(field) {
                values.insert(field.name.clone(), value);
            }
        }
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&ControlValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
