use common::error::FormError;
use common::model::FormSchema;

pub enum Msg {
    SchemaLoaded(Result<FormSchema, FormError>),
    Submit,
    SubmitFinished(Result<(), FormError>),
}
