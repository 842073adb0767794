pub mod field;
pub mod form_state;
pub mod progress;
pub mod step;
pub mod validation;
pub mod value;
pub mod wizard;

pub use field::{FieldDef, FieldId, FieldKind};
pub use form_state::FormState;
pub use progress::completion_percent;
pub use step::{StepBuilder, StepDef, StepStatus};
pub use validation::{ValidationErrors, validate_field, validate_form, validate_step};
pub use value::FieldValue;
pub use wizard::{SubmissionPhase, Wizard};
