//! Turns a form schema into the ordered list of controls the frontend renders.
//!
//! The layout is plain data so the rendering rules can be checked without a browser:
//! a hidden `formName` input first, one [`FieldControl`] per descriptor, and the submit
//! button last.

use crate::model::{FieldDescriptor, FieldKind, FormSchema};
use crate::requests::FORM_NAME_PARAM;

/// Text of the disabled entry that leads every select.
pub const SELECT_PLACEHOLDER: &str = "Select an option";
/// Visible height of multi-line text controls.
pub const TEXTAREA_ROWS: u32 = 4;
pub const SUBMIT_LABEL: &str = "Submit";

#[derive(Clone, Debug, PartialEq)]
pub struct FormLayout {
    pub controls: Vec<Control>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Control {
    Hidden { name: String, value: String },
    Field(FieldControl),
    Submit { label: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldControl {
    pub name: String,
    pub label: String,
    pub widget: Widget,
    pub attrs: ControlAttrs,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Widget {
    Select { multiple: bool, options: Vec<OptionEntry> },
    TextArea { rows: u32 },
    Checkbox,
    Input { input_type: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct OptionEntry {
    pub value: String,
    pub label: String,
    pub disabled: bool,
    pub selected: bool,
}

/// Attributes applied to every control regardless of its widget.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ControlAttrs {
    pub required: bool,
    pub placeholder: Option<String>,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub pattern: Option<String>,
}

impl FormLayout {
    pub fn fields(&self) -> impl Iterator<Item = &FieldControl> {
        self.controls.iter().filter_map(|control| match control {
            Control::Field(field) => Some(field),
            _ => None,
        })
    }
}

/// Lays out the controls for `schema`, tagging the form with `form_name`.
pub fn layout_form(schema: &FormSchema, form_name: &str) -> FormLayout {
    let mut controls = Vec::with_capacity(schema.len() + 2);
    controls.push(Control::Hidden {
        name: FORM_NAME_PARAM.to_string(),
        value: form_name.to_string(),
    });
    controls.extend(schema.fields.iter().map(|field| Control::Field(field_control(field))));
    controls.push(Control::Submit { label: SUBMIT_LABEL.to_string() });
    FormLayout { controls }
}

fn field_control(field: &FieldDescriptor) -> FieldControl {
    FieldControl {
        name: field.name.clone(),
        label: field.label.clone(),
        widget: widget_for(field),
        attrs: attrs_for(field),
    }
}

fn widget_for(field: &FieldDescriptor) -> Widget {
    match (&field.kind, &field.options) {
        (FieldKind::Select, Some(options)) => {
            let mut entries = Vec::with_capacity(options.len() + 1);
            entries.push(OptionEntry {
                value: String::new(),
                label: SELECT_PLACEHOLDER.to_string(),
                disabled: true,
                selected: true,
            });
            entries.extend(options.iter().map(|option| OptionEntry {
                value: option.effective_value().to_string(),
                label: option.label.clone(),
                disabled: false,
                selected: false,
            }));
            Widget::Select { multiple: field.multiple, options: entries }
        }
        // A select with nothing to choose from degrades to a free-text input.
        (FieldKind::Select, None) => Widget::Input { input_type: "text".to_string() },
        (FieldKind::TextArea, _) => Widget::TextArea { rows: TEXTAREA_ROWS },
        (FieldKind::Checkbox, _) => Widget::Checkbox,
        (FieldKind::Text, _) => Widget::Input { input_type: "text".to_string() },
        (FieldKind::Input(input_type), _) => Widget::Input { input_type: input_type.clone() },
    }
}

fn attrs_for(field: &FieldDescriptor) -> ControlAttrs {
    let mut attrs = ControlAttrs {
        required: field.required,
        placeholder: field.placeholder.clone(),
        ..ControlAttrs::default()
    };
    if let Some(rules) = &field.validation {
        attrs.min_length = rules.min_length;
        attrs.max_length = rules.max_length;
        attrs.min = rules.min.as_ref().map(ToString::to_string);
        attrs.max = rules.max.as_ref().map(ToString::to_string);
        attrs.pattern = rules.pattern.clone();
    }
    attrs
}
