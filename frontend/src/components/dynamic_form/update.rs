//! Update function for the schema-driven form.
//!
//! Handles the three transitions of the form: schema arrival, submit request and
//! submit completion. Only one submission is in flight at a time; a `Submit` while
//! one is pending is ignored.

use common::controls::layout_form;
use common::error::FormError;
use web_sys::HtmlFormElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::submit_record;

use super::collect::collect_record;
use super::helpers::alert;
use super::messages::Msg;
use super::state::{DynamicFormComponent, FormPhase};

const SUBMITTED_MESSAGE: &str = "Form submitted successfully!";

pub fn update(
    component: &mut DynamicFormComponent,
    ctx: &Context<DynamicFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SchemaLoaded(Ok(schema)) => {
            component.layout = Some(layout_form(&schema, &ctx.props().form_name));
            component.schema = Some(schema);
            component.phase = FormPhase::Ready;
            true
        }
        Msg::SchemaLoaded(Err(err)) => {
            gloo_console::error!(format!("Error loading form: {:?}", err));
            component.schema = None;
            component.layout = None;
            component.phase = FormPhase::Failed(err);
            true
        }
        Msg::Submit => {
            if component.phase != FormPhase::Ready {
                return false;
            }
            let (Some(schema), Some(form)) = (
                component.schema.as_ref(),
                component.form_ref.cast::<HtmlFormElement>(),
            ) else {
                return false;
            };

            let record = collect_record(&form, schema);
            component.phase = FormPhase::Submitting;

            let link = ctx.link().clone();
            let form_name = ctx.props().form_name.clone();
            spawn_local(async move {
                let result = submit_record(&form_name, &record).await;
                link.send_message(Msg::SubmitFinished(result));
            });
            true
        }
        Msg::SubmitFinished(result) => {
            component.phase = FormPhase::Ready;
            let form = component.form_ref.cast::<HtmlFormElement>();
            alert(&finish_submission(form.as_ref(), &result));
            true
        }
    }
}

/// Applies the outcome of a submission to the rendered form and returns the notice for
/// the user. Success clears the form; a failure keeps every value as typed.
fn finish_submission(form: Option<&HtmlFormElement>, result: &Result<(), FormError>) -> String {
    match result {
        Ok(()) => {
            if let Some(form) = form {
                form.reset();
            }
            SUBMITTED_MESSAGE.to_string()
        }
        Err(err) => {
            gloo_console::error!(format!("Submission error: {}", err));
            err.submit_alert_message()
        }
    }
}
