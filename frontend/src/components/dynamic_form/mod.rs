//! Schema-driven form: loads a form schema, renders its controls and submits them.
//!
//! Responsibilities
//! - On first render, fetch the schema named by the `form_name` prop.
//! - Render the controls laid out by `common::controls::layout_form` inside the
//!   component's own `<form>` element.
//! - On submit, read the current control values from that element and post them;
//!   failures are reported in a blocking alert and leave the input untouched.

use yew::platform::spawn_local;
use yew::prelude::*;

mod collect;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use messages::Msg;
use props::DynamicFormProps;
pub use state::DynamicFormComponent;

use crate::api::fetch_schema;

impl Component for DynamicFormComponent {
    type Message = Msg;
    type Properties = DynamicFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DynamicFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            let form_name = ctx.props().form_name.clone();
            spawn_local(async move {
                let result = fetch_schema(&form_name).await;
                link.send_message(Msg::SchemaLoaded(result));
            });
        }
    }
}
