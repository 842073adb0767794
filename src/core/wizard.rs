use crate::core::field::{FieldDef, FieldId, FieldKind};
use crate::core::form_state::FormState;
use crate::core::progress::completion_percent;
use crate::core::step::{StepDef, StepStatus};
use crate::core::validation::{ValidationErrors, validate_form, validate_step};
use crate::core::value::FieldValue;
use crate::error::WizardError;
use std::collections::HashSet;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// Step state holder for one form instance.
///
/// Owns the step index, the field values and the inline validation errors.
/// The index always stays within `0..len()`.
#[derive(Debug, Clone)]
pub struct Wizard {
    steps: Vec<StepDef>,
    current: usize,
    completed: Vec<bool>,
    values: FormState,
    errors: ValidationErrors,
    phase: SubmissionPhase,
}

impl Wizard {
    pub fn new(steps: Vec<StepDef>) -> Result<Self, WizardError> {
        check_definition(&steps)?;
        let completed = vec![false; steps.len()];
        Ok(Self {
            steps,
            current: 0,
            completed,
            values: FormState::new(),
            errors: ValidationErrors::new(),
            phase: SubmissionPhase::Editing,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[StepDef] {
        &self.steps
    }

    pub fn current_step(&self) -> &StepDef {
        &self.steps[self.current]
    }

    pub fn is_last_step(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    /// The current step is always `Active`; a step stays `Done` once it has
    /// been passed with `go_next`, even after navigating back to it.
    pub fn status_at(&self, index: usize) -> StepStatus {
        if index == self.current {
            StepStatus::Active
        } else if self.completed.get(index).copied().unwrap_or(false) {
            StepStatus::Done
        } else {
            StepStatus::Pending
        }
    }

    pub fn values(&self) -> &FormState {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, id: &str) -> Option<&str> {
        self.errors.get(id)
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == SubmissionPhase::Submitted
    }

    /// Edits are frozen while a submission is pending or being shown.
    pub fn is_locked(&self) -> bool {
        self.phase != SubmissionPhase::Editing
    }

    pub fn field(&self, id: &str) -> Option<&FieldDef> {
        self.steps.iter().find_map(|step| step.field(id))
    }

    pub fn progress(&self) -> u8 {
        completion_percent(&self.steps, &self.values)
    }

    /// Stores `value` for `id` and drops that field's error. Returns `false`
    /// when the form is locked.
    pub fn set_field(&mut self, id: impl Into<FieldId>, value: impl Into<FieldValue>) -> bool {
        let id = id.into();
        if self.is_locked() {
            debug!(field = %id, phase = ?self.phase, "edit ignored while form is locked");
            return false;
        }
        if self.field(&id).is_none() {
            debug!(field = %id, "value stored for undeclared field");
        }
        self.errors.remove(&id);
        self.values.set(id, value.into());
        true
    }

    /// Validates the current step and advances when it passes.
    ///
    /// On the last step a passing validation keeps the index and still
    /// returns `true`; the caller decides whether to submit.
    pub fn go_next(&mut self) -> bool {
        if self.is_locked() {
            return false;
        }

        let errors = validate_step(self.current_step(), &self.values);
        if !errors.is_empty() {
            debug!(
                step = %self.current_step().id,
                invalid = errors.len(),
                "step validation failed"
            );
            self.errors = errors;
            return false;
        }

        self.errors.clear();
        if self.is_last_step() {
            return true;
        }

        self.completed[self.current] = true;
        self.current += 1;
        info!(step = %self.current_step().id, index = self.current, "advanced to step");
        true
    }

    /// Moves back one step without validating. Returns `false` on step 0.
    pub fn go_previous(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.move_to(self.current - 1);
        true
    }

    /// Jumps to an earlier step or to any step already completed.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.steps.len() || index == self.current {
            return false;
        }
        if index > self.current && self.status_at(index) != StepStatus::Done {
            debug!(index, "jump refused, step not completed yet");
            return false;
        }
        self.move_to(index);
        true
    }

    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
        self.current = 0;
        self.completed.fill(false);
        self.phase = SubmissionPhase::Editing;
        info!("form reset");
    }

    /// Validates every step. On failure the errors are stored and the wizard
    /// moves to the first step that holds an invalid field.
    pub fn validate_all(&mut self) -> bool {
        let errors = validate_form(&self.steps, &self.values);
        if errors.is_empty() {
            self.errors.clear();
            return true;
        }

        let first_invalid = self
            .steps
            .iter()
            .position(|step| step.fields.iter().any(|f| errors.contains(&f.id)));
        if let Some(index) = first_invalid
            && index != self.current
        {
            self.move_to(index);
        }
        self.errors = errors;
        false
    }

    pub(crate) fn set_phase(&mut self, phase: SubmissionPhase) {
        debug!(from = ?self.phase, to = ?phase, "submission phase changed");
        self.phase = phase;
    }

    fn move_to(&mut self, index: usize) {
        self.current = index;
        self.errors.clear();
        debug!(step = %self.current_step().id, index, "moved to step");
    }
}

fn check_definition(steps: &[StepDef]) -> Result<(), WizardError> {
    if steps.is_empty() {
        return Err(WizardError::NoSteps);
    }
    let mut seen = HashSet::new();
    for field in steps.iter().flat_map(|step| step.fields.iter()) {
        if !seen.insert(field.id.as_str()) {
            return Err(WizardError::DuplicateField(field.id.clone()));
        }
        if field.kind == FieldKind::Select && field.options.is_empty() {
            return Err(WizardError::EmptyOptions(field.id.clone()));
        }
    }
    Ok(())
}
