//! Runtime state of the schema-driven form.

use common::controls::FormLayout;
use common::error::FormError;
use common::model::FormSchema;
use yew::prelude::*;

/// Where the form is in its load/submit cycle.
///
/// `Loading -> Failed | Ready`, then `Ready -> Submitting -> Ready`. A failed submission
/// returns to `Ready` with the input kept; a successful one returns to `Ready` after the
/// form has been reset.
#[derive(Clone, Debug, PartialEq)]
pub enum FormPhase {
    Loading,
    Failed(FormError),
    Ready,
    Submitting,
}

pub struct DynamicFormComponent {
    pub phase: FormPhase,

    /// The schema as received; kept for collecting values on submit.
    pub schema: Option<FormSchema>,

    /// Controls derived from `schema`.
    pub layout: Option<FormLayout>,

    /// The rendered `<form>`. Controls are looked up by id inside it.
    pub form_ref: NodeRef,

    /// Guard to run the schema request only once.
    pub loaded: bool,
}

impl DynamicFormComponent {
    pub fn new() -> Self {
        Self {
            phase: FormPhase::Loading,
            schema: None,
            layout: None,
            form_ref: NodeRef::default(),
            loaded: false,
        }
    }
}
