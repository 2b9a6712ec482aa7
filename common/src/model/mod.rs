pub mod field;
mod lenient;
pub mod schema;
pub mod submission;

pub use field::{Bound, FieldDescriptor, FieldKind, SelectOption, ValidationRules};
pub use schema::FormSchema;
pub use submission::{ControlValue, SubmissionRecord};
