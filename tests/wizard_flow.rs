use proptest::prelude::*;
use std::time::{Duration, Instant};
use studenthub_forms::catalog::InquiryCategory;
use studenthub_forms::core::{FieldDef, StepDef, StepStatus, SubmissionPhase, Wizard};
use studenthub_forms::forms::contact_wizard;
use studenthub_forms::runtime::FormEvent;
use studenthub_forms::submission::{FormController, SubmissionTimings, SubmitOutcome};

fn fill_contact(controller: &mut FormController) {
    controller.set_field("name", "Alice Smith");
    controller.set_field("email", "alice@example.com");
    assert!(controller.go_next());
    controller.set_field("category", InquiryCategory::Tutoring.label());
    assert!(controller.go_next());
    controller.set_field("message", "Looking for a calculus tutor.");
    controller.set_field("consent", true);
}

#[test]
fn contact_form_submits_and_resets() {
    let timings = SubmissionTimings::default();
    let mut controller = FormController::new(contact_wizard().expect("contact form"), timings);
    fill_contact(&mut controller);
    assert_eq!(controller.wizard().progress(), 100);

    let start = Instant::now();
    assert_eq!(controller.submit(start), SubmitOutcome::Scheduled);
    assert_eq!(controller.wizard().phase(), SubmissionPhase::Submitting);
    assert_eq!(controller.submit(start), SubmitOutcome::AlreadyPending);
    assert!(!controller.set_field("name", "Mallory"));

    assert!(controller.tick(start + Duration::from_millis(1499)).is_empty());
    let settled = start + timings.submit_delay;
    assert_eq!(controller.tick(settled), vec![FormEvent::SubmissionSettled]);
    assert!(controller.wizard().is_submitted());
    let receipt = controller.receipt().expect("receipt after submit");
    assert_eq!(receipt.values.text("name"), Some("Alice Smith"));

    let reset_at = settled + timings.reset_delay;
    assert_eq!(controller.tick(reset_at), vec![FormEvent::ResetForm]);
    let wizard = controller.wizard();
    assert_eq!(wizard.phase(), SubmissionPhase::Editing);
    assert_eq!(wizard.current_index(), 0);
    assert!(wizard.values().is_empty());
    assert_eq!(wizard.status_at(0), StepStatus::Active);
}

#[test]
fn invalid_email_blocks_first_step() {
    let mut wizard = contact_wizard().expect("contact form");
    wizard.set_field("name", "Alice");
    wizard.set_field("email", "alice@");

    assert!(!wizard.go_next());
    assert_eq!(wizard.current_index(), 0);
    assert_eq!(wizard.error("email"), Some("Please enter a valid email address"));
    assert_eq!(wizard.error("name"), None);
}

#[test]
fn submit_outside_last_step_is_refused() {
    let mut controller =
        FormController::new(contact_wizard().expect("contact form"), SubmissionTimings::default());
    assert_eq!(controller.submit(Instant::now()), SubmitOutcome::NotLastStep);
    assert!(controller.wizard().errors().is_empty());
}

#[test]
fn dispose_drops_pending_submission() {
    let mut controller =
        FormController::new(contact_wizard().expect("contact form"), SubmissionTimings::default());
    fill_contact(&mut controller);
    let start = Instant::now();
    assert_eq!(controller.submit(start), SubmitOutcome::Scheduled);

    controller.dispose();
    assert!(controller.tick(start + Duration::from_secs(60)).is_empty());
    assert!(controller.receipt().is_none());
}

fn generated_steps(required: &[Vec<bool>]) -> Vec<StepDef> {
    required
        .iter()
        .enumerate()
        .map(|(step, fields)| {
            let fields = fields
                .iter()
                .enumerate()
                .map(|(index, required)| {
                    let field = FieldDef::text(format!("s{step}f{index}"), format!("Field {index}"));
                    if *required { field.required() } else { field }
                })
                .collect();
            StepDef::new(format!("step{step}"), format!("Step {step}"), fields)
        })
        .collect()
}

fn layout() -> impl Strategy<Value = Vec<Vec<bool>>> {
    prop::collection::vec(prop::collection::vec(any::<bool>(), 0..4), 1..5)
}

proptest! {
    #[test]
    fn filled_step_advances_by_one(required in layout()) {
        let steps = generated_steps(&required);
        let mut wizard = Wizard::new(steps.clone()).expect("generated wizard");
        for (index, step) in steps.iter().enumerate() {
            prop_assert_eq!(wizard.current_index(), index);
            for field in &step.fields {
                wizard.set_field(field.id.clone(), "x");
            }
            prop_assert!(wizard.go_next());
            let expected = (index + 1).min(steps.len() - 1);
            prop_assert_eq!(wizard.current_index(), expected);
        }
    }

    #[test]
    fn errors_name_exactly_the_blank_required_fields(
        required in layout(),
        filled in prop::collection::vec(any::<bool>(), 4),
    ) {
        let steps = generated_steps(&required);
        let mut wizard = Wizard::new(steps.clone()).expect("generated wizard");
        let first = &steps[0];
        for (field, fill) in first.fields.iter().zip(&filled) {
            if *fill {
                wizard.set_field(field.id.clone(), "value");
            }
        }

        let advanced = wizard.go_next();
        let mut expected: Vec<&str> = first
            .fields
            .iter()
            .zip(filled.iter().chain(std::iter::repeat(&false)))
            .filter(|(field, fill)| field.required && !**fill)
            .map(|(field, _)| field.id.as_str())
            .collect();
        expected.sort_unstable();
        let mut actual: Vec<&str> = wizard.errors().ids().collect();
        actual.sort_unstable();

        prop_assert_eq!(advanced, expected.is_empty());
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn previous_on_first_step_is_a_no_op(required in layout(), presses in 1usize..5) {
        let mut wizard = Wizard::new(generated_steps(&required)).expect("generated wizard");
        for _ in 0..presses {
            prop_assert!(!wizard.go_previous());
            prop_assert_eq!(wizard.current_index(), 0);
        }
    }

    #[test]
    fn reset_always_returns_to_a_blank_first_step(required in layout(), next_presses in 0usize..6) {
        let steps = generated_steps(&required);
        let mut wizard = Wizard::new(steps.clone()).expect("generated wizard");
        for step in &steps {
            for field in &step.fields {
                wizard.set_field(field.id.clone(), "x");
            }
        }
        for _ in 0..next_presses {
            wizard.go_next();
        }

        wizard.reset();
        prop_assert_eq!(wizard.current_index(), 0);
        prop_assert!(wizard.values().is_empty());
        prop_assert!(wizard.errors().is_empty());
        prop_assert_eq!(wizard.phase(), SubmissionPhase::Editing);
        prop_assert_eq!(wizard.status_at(0), StepStatus::Active);
        for index in 1..steps.len() {
            prop_assert_eq!(wizard.status_at(index), StepStatus::Pending);
        }
    }

    #[test]
    fn progress_grows_with_each_filled_field(required in layout()) {
        let steps = generated_steps(&required);
        let mut wizard = Wizard::new(steps.clone()).expect("generated wizard");
        let has_required = steps.iter().any(|step| step.required_fields().next().is_some());

        let mut last = wizard.progress();
        let ids: Vec<String> = steps
            .iter()
            .flat_map(|step| step.required_fields().map(|field| field.id.clone()))
            .collect();
        for (filled, id) in ids.iter().enumerate() {
            if has_required {
                prop_assert!(last < 100, "100% reached with {} of {} filled", filled, ids.len());
            }
            wizard.set_field(id.clone(), "x");
            let now = wizard.progress();
            prop_assert!(now >= last);
            last = now;
        }
        if has_required {
            prop_assert_eq!(last, 100);
        } else {
            prop_assert_eq!(last, 0);
        }
    }
}
