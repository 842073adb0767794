#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// The artificial submission delay elapsed.
    SubmissionSettled,
    /// The success screen timed out; return to an empty first step.
    ResetForm,
}
