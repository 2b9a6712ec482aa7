use yew::prelude::*;

/// Properties for the `DynamicFormComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct DynamicFormProps {
    /// Identifier of the form to load. Used in the schema URL, the submit URL and the
    /// hidden `formName` input.
    pub form_name: String,
}
