//! Reads the current values of the rendered controls back into a `SubmissionRecord`.

use common::model::{ControlValue, FormSchema, SubmissionRecord};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlFormElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

/// Collects one value per schema field from the controls inside `form`.
///
/// Controls are found by `id` (the hidden `formName` input has none, so a field of that
/// name does not collide with it). Fields without a matching control are left out.
pub fn collect_record(form: &HtmlFormElement, schema: &FormSchema) -> SubmissionRecord {
    SubmissionRecord::collect(schema, |field| {
        find_control(form, &field.name).and_then(|element| read_control(&element))
    })
}

/// The last control inside `form` whose id is `name`; with repeated names the later
/// control wins.
fn find_control(form: &HtmlFormElement, name: &str) -> Option<Element> {
    let matches = form.query_selector_all(&id_selector(name)).ok()?;
    let last = matches.length().checked_sub(1)?;
    matches.item(last)?.dyn_into::<Element>().ok()
}

/// CSS selector matching an exact `id`, safe for ids containing quotes or backslashes.
fn id_selector(id: &str) -> String {
    let escaped = id.replace('\\', "\\\\").replace('"', "\\\"");
    format!("[id=\"{}\"]", escaped)
}

/// Value of a single control, shaped by its element type.
///
/// - checkbox: checked state
/// - `<select multiple>`: values of the selected options in document order, skipping
///   the disabled placeholder
/// - anything else: the raw string value
fn read_control(element: &Element) -> Option<ControlValue> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        if input.type_() == "checkbox" {
            return Some(ControlValue::Checked(input.checked()));
        }
        return Some(ControlValue::Text(input.value()));
    }

    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        if select.multiple() {
            let selected = select.selected_options();
            let values = (0..selected.length())
                .filter_map(|i| selected.item(i))
                .filter_map(|option| option.dyn_into::<HtmlOptionElement>().ok())
                .filter(|option| !option.disabled())
                .map(|option| option.value())
                .collect();
            return Some(ControlValue::Selected(values));
        }
        return Some(ControlValue::Text(select.value()));
    }

    element
        .dyn_ref::<HtmlTextAreaElement>()
        .map(|textarea| ControlValue::Text(textarea.value()))
}
