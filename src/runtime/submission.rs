use crate::core::field::FieldId;
use crate::core::form_state::FormState;
use crate::core::value::FieldValue;
use crate::core::wizard::{SubmissionPhase, Wizard};
use crate::error::SubmitError;
use crate::runtime::event::FormEvent;
use crate::runtime::scheduler::{Scheduler, SchedulerCommand};
use std::time::{Duration, Instant};
use tracing::{info, warn};

const SUBMIT_KEY: &str = "form.submit";
const RESET_KEY: &str = "form.reset";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub reference: String,
    pub values: FormState,
}

/// Destination of a finished form. The simulated one never fails; a real
/// network implementation plugs in here.
pub trait Submitter {
    fn submit(&mut self, values: &FormState) -> Result<Receipt, SubmitError>;
}

#[derive(Debug, Default)]
pub struct SimulatedSubmitter {
    sent: u32,
}

impl SimulatedSubmitter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit(&mut self, values: &FormState) -> Result<Receipt, SubmitError> {
        self.sent += 1;
        Ok(Receipt {
            reference: format!("SH-{:06}", self.sent),
            values: values.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTimings {
    pub submit_delay: Duration,
    pub reset_delay: Duration,
}

impl Default for SubmissionTimings {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(1500),
            reset_delay: Duration::from_millis(3000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Scheduled,
    AlreadyPending,
    AlreadySubmitted,
    NotLastStep,
    Invalid,
}

/// Drives one wizard through submission: validation, the artificial delay,
/// the success screen and the automatic reset.
pub struct FormController {
    wizard: Wizard,
    scheduler: Scheduler,
    submitter: Box<dyn Submitter>,
    timings: SubmissionTimings,
    receipt: Option<Receipt>,
    last_error: Option<SubmitError>,
}

impl FormController {
    pub fn new(wizard: Wizard, timings: SubmissionTimings) -> Self {
        Self::with_submitter(wizard, timings, Box::new(SimulatedSubmitter::new()))
    }

    pub fn with_submitter(
        wizard: Wizard,
        timings: SubmissionTimings,
        submitter: Box<dyn Submitter>,
    ) -> Self {
        Self {
            wizard,
            scheduler: Scheduler::new(),
            submitter,
            timings,
            receipt: None,
            last_error: None,
        }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn timings(&self) -> SubmissionTimings {
        self.timings
    }

    pub fn receipt(&self) -> Option<&Receipt> {
        self.receipt.as_ref()
    }

    pub fn last_error(&self) -> Option<&SubmitError> {
        self.last_error.as_ref()
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.wizard.phase() == SubmissionPhase::Editing
    }

    pub fn set_field(&mut self, id: impl Into<FieldId>, value: impl Into<FieldValue>) -> bool {
        self.wizard.set_field(id, value)
    }

    pub fn go_next(&mut self) -> bool {
        self.wizard.go_next()
    }

    pub fn go_previous(&mut self) -> bool {
        self.wizard.go_previous()
    }

    pub fn jump_to(&mut self, index: usize) -> bool {
        self.wizard.jump_to(index)
    }

    /// Clears the form and drops any timer still pending.
    pub fn reset(&mut self) {
        self.scheduler.clear();
        self.wizard.reset();
    }

    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        match self.wizard.phase() {
            SubmissionPhase::Submitting => return SubmitOutcome::AlreadyPending,
            SubmissionPhase::Submitted => return SubmitOutcome::AlreadySubmitted,
            SubmissionPhase::Editing => {}
        }
        if !self.wizard.is_last_step() {
            return SubmitOutcome::NotLastStep;
        }
        if !self.wizard.validate_all() {
            warn!(
                invalid = self.wizard.errors().len(),
                "submission blocked by validation"
            );
            return SubmitOutcome::Invalid;
        }

        self.last_error = None;
        self.wizard.set_phase(SubmissionPhase::Submitting);
        self.scheduler.schedule(
            SchedulerCommand::EmitAfter {
                key: SUBMIT_KEY.to_string(),
                delay: self.timings.submit_delay,
                event: FormEvent::SubmissionSettled,
            },
            now,
        );
        info!(
            delay_ms = self.timings.submit_delay.as_millis() as u64,
            fields = self.wizard.values().len(),
            "submission scheduled"
        );
        SubmitOutcome::Scheduled
    }

    /// Handles every timer due at `now` and returns the events processed.
    pub fn tick(&mut self, now: Instant) -> Vec<FormEvent> {
        let events = self.scheduler.drain_ready(now);
        for event in &events {
            self.handle_event(*event, now);
        }
        events
    }

    pub fn poll_timeout(&self, now: Instant, default_timeout: Duration) -> Duration {
        self.scheduler.poll_timeout(now, default_timeout)
    }

    /// Cancels pending timers; an in-flight submission is discarded.
    pub fn dispose(&mut self) {
        if self.wizard.phase() == SubmissionPhase::Submitting {
            warn!("pending submission discarded");
        }
        self.scheduler.clear();
    }

    fn handle_event(&mut self, event: FormEvent, now: Instant) {
        match event {
            FormEvent::SubmissionSettled => self.settle_submission(now),
            FormEvent::ResetForm => self.wizard.reset(),
        }
    }

    fn settle_submission(&mut self, now: Instant) {
        if self.wizard.phase() != SubmissionPhase::Submitting {
            return;
        }
        match self.submitter.submit(self.wizard.values()) {
            Ok(receipt) => {
                info!(reference = %receipt.reference, "submission accepted");
                self.receipt = Some(receipt);
                self.wizard.set_phase(SubmissionPhase::Submitted);
                self.scheduler.schedule(
                    SchedulerCommand::EmitAfter {
                        key: RESET_KEY.to_string(),
                        delay: self.timings.reset_delay,
                        event: FormEvent::ResetForm,
                    },
                    now,
                );
            }
            Err(err) => {
                warn!(error = %err, "submission failed");
                self.last_error = Some(err);
                self.wizard.set_phase(SubmissionPhase::Editing);
            }
        }
    }
}

impl Drop for FormController {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldDef;
    use crate::core::step::StepDef;

    fn timings() -> SubmissionTimings {
        SubmissionTimings {
            submit_delay: Duration::from_millis(100),
            reset_delay: Duration::from_millis(500),
        }
    }

    fn wizard() -> Wizard {
        Wizard::new(vec![
            StepDef::new(
                "about",
                "About",
                vec![
                    FieldDef::text("name", "Name").required(),
                    FieldDef::email("email", "Email").required(),
                ],
            ),
            StepDef::new(
                "message",
                "Message",
                vec![FieldDef::textarea("message", "Message").required()],
            ),
        ])
        .expect("definition")
    }

    fn controller() -> FormController {
        FormController::new(wizard(), timings())
    }

    fn fill(ctrl: &mut FormController) {
        ctrl.set_field("name", "Alice");
        ctrl.set_field("email", "alice@example.com");
        assert!(ctrl.go_next());
        ctrl.set_field("message", "Hello");
    }

    struct Failing;

    impl Submitter for Failing {
        fn submit(&mut self, _values: &FormState) -> Result<Receipt, SubmitError> {
            Err(SubmitError::Rejected("offline".into()))
        }
    }

    #[test]
    fn submit_requires_last_step() {
        let mut ctrl = controller();
        assert_eq!(ctrl.submit(Instant::now()), SubmitOutcome::NotLastStep);
    }

    #[test]
    fn full_cycle_submits_then_resets() {
        let start = Instant::now();
        let mut ctrl = controller();
        fill(&mut ctrl);

        assert_eq!(ctrl.submit(start), SubmitOutcome::Scheduled);
        assert!(!ctrl.is_submit_enabled());
        assert_eq!(ctrl.submit(start), SubmitOutcome::AlreadyPending);

        assert!(ctrl.tick(start + Duration::from_millis(50)).is_empty());
        assert!(!ctrl.wizard().is_submitted());

        let settled = start + Duration::from_millis(100);
        assert_eq!(ctrl.tick(settled), vec![FormEvent::SubmissionSettled]);
        assert!(ctrl.wizard().is_submitted());
        let receipt = ctrl.receipt().expect("receipt");
        assert_eq!(receipt.reference, "SH-000001");
        assert_eq!(receipt.values.text("message"), Some("Hello"));

        assert_eq!(
            ctrl.tick(settled + Duration::from_millis(500)),
            vec![FormEvent::ResetForm]
        );
        assert!(ctrl.wizard().values().is_empty());
        assert_eq!(ctrl.wizard().current_index(), 0);
        assert!(ctrl.is_submit_enabled());
    }

    #[test]
    fn invalid_form_is_not_scheduled() {
        let mut ctrl = controller();
        fill(&mut ctrl);
        ctrl.set_field("message", " ");

        assert_eq!(ctrl.submit(Instant::now()), SubmitOutcome::Invalid);
        assert_eq!(ctrl.wizard().error("message"), Some("Message is required"));
        assert!(ctrl.is_submit_enabled());
    }

    #[test]
    fn dispose_discards_pending_submission() {
        let start = Instant::now();
        let mut ctrl = controller();
        fill(&mut ctrl);
        ctrl.submit(start);
        ctrl.dispose();

        assert!(ctrl.tick(start + Duration::from_secs(5)).is_empty());
        assert!(ctrl.receipt().is_none());
    }

    #[test]
    fn failing_submitter_unlocks_form() {
        let start = Instant::now();
        let mut ctrl = FormController::with_submitter(wizard(), timings(), Box::new(Failing));
        fill(&mut ctrl);
        ctrl.submit(start);
        ctrl.tick(start + Duration::from_millis(100));

        assert_eq!(ctrl.wizard().phase(), SubmissionPhase::Editing);
        assert_eq!(
            ctrl.last_error(),
            Some(&SubmitError::Rejected("offline".into()))
        );
        assert_eq!(ctrl.wizard().values().text("message"), Some("Hello"));
    }
}
