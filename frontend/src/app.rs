use crate::components::dynamic_form::DynamicFormComponent;
use common::error::FormError;
use common::requests::{resolve_form_name, FORM_NAME_PARAM};
use web_sys::UrlSearchParams;
use yew::{html, Component, Context, Html};

/// Page shell: a title naming the requested form and the container the form lives in.
///
/// The form name is resolved once from the page URL. Without one no request is made and
/// both the title and the container report the error.
pub struct App {
    form_name: Result<String, FormError>,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form_name: resolve_form_name(query_param(FORM_NAME_PARAM)),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.form_name {
            Ok(form_name) => html! {
                <>
                    <h1 id="formTitle">{ format!("Form: {}", form_name) }</h1>
                    <div id="formContainer">
                        <DynamicFormComponent form_name={form_name.clone()} />
                    </div>
                </>
            },
            Err(err) => {
                let message = err.container_message();
                html! {
                    <>
                        <h1 id="formTitle">{ message.clone() }</h1>
                        <div id="formContainer">
                            <p>{ message }</p>
                        </div>
                    </>
                }
            }
        }
    }
}

/// Reads one parameter from the page's query string.
fn query_param(key: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()?.get(key)
}
