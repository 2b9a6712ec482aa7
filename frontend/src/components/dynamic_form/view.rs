//! View rendering for the schema-driven form.
//!
//! Maps each entry of the precomputed `FormLayout` to its DOM control. Controls are
//! left uncontrolled: their values live in the DOM and are read back on submit, so a
//! re-render never overwrites what the user typed.

use common::controls::{Control, ControlAttrs, FieldControl, FormLayout, OptionEntry, Widget};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{DynamicFormComponent, FormPhase};

pub fn view(component: &DynamicFormComponent, ctx: &Context<DynamicFormComponent>) -> Html {
    match (&component.phase, &component.layout) {
        (FormPhase::Loading, _) => html! {},
        (FormPhase::Failed(err), _) => html! { <p>{ err.container_message() }</p> },
        (FormPhase::Ready | FormPhase::Submitting, Some(layout)) => {
            let submitting = component.phase == FormPhase::Submitting;
            build_form(layout, component.form_ref.clone(), submitting, ctx.link())
        }
        (FormPhase::Ready | FormPhase::Submitting, None) => html! {},
    }
}

fn build_form(
    layout: &FormLayout,
    form_ref: NodeRef,
    submitting: bool,
    link: &Scope<DynamicFormComponent>,
) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form id="userForm" ref={form_ref} {onsubmit}>
            { for layout.controls.iter().map(|control| build_control(control, submitting)) }
        </form>
    }
}

fn build_control(control: &Control, submitting: bool) -> Html {
    match control {
        Control::Hidden { name, value } => html! {
            <input type="hidden" name={name.clone()} value={value.clone()} />
        },
        Control::Field(field) => html! {
            <div class="form-group">
                <label for={field.name.clone()}>{ field.label.clone() }</label>
                { build_widget(field) }
            </div>
        },
        Control::Submit { label } => html! {
            <button type="submit" disabled={submitting}>{ label.clone() }</button>
        },
    }
}

fn build_widget(field: &FieldControl) -> Html {
    let FieldControl { name, attrs, widget, .. } = field;
    let ControlAttrs {
        required,
        placeholder,
        min_length,
        max_length,
        min,
        max,
        pattern,
    } = attrs;
    let minlength = min_length.map(|n| n.to_string());
    let maxlength = max_length.map(|n| n.to_string());

    match widget {
        Widget::Select { multiple, options } => html! {
            <select
                name={name.clone()}
                id={name.clone()}
                multiple={*multiple}
                required={*required}
                placeholder={placeholder.clone()}
                minlength={minlength}
                maxlength={maxlength}
                min={min.clone()}
                max={max.clone()}
                pattern={pattern.clone()}
            >
                { for options.iter().map(build_option) }
            </select>
        },
        Widget::TextArea { rows } => html! {
            <textarea
                name={name.clone()}
                id={name.clone()}
                rows={rows.to_string()}
                required={*required}
                placeholder={placeholder.clone()}
                minlength={minlength}
                maxlength={maxlength}
                min={min.clone()}
                max={max.clone()}
                pattern={pattern.clone()}
            />
        },
        Widget::Checkbox => html! {
            <input
                type="checkbox"
                name={name.clone()}
                id={name.clone()}
                required={*required}
                placeholder={placeholder.clone()}
                minlength={minlength}
                maxlength={maxlength}
                min={min.clone()}
                max={max.clone()}
                pattern={pattern.clone()}
            />
        },
        Widget::Input { input_type } => html! {
            <input
                type={input_type.clone()}
                name={name.clone()}
                id={name.clone()}
                required={*required}
                placeholder={placeholder.clone()}
                minlength={minlength}
                maxlength={maxlength}
                min={min.clone()}
                max={max.clone()}
                pattern={pattern.clone()}
            />
        },
    }
}

fn build_option(option: &OptionEntry) -> Html {
    html! {
        <option
            value={option.value.clone()}
            disabled={option.disabled}
            selected={option.selected}
        >
            { option.label.clone() }
        </option>
    }
}
