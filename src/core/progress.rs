use crate::core::form_state::FormState;
use crate::core::step::StepDef;
use crate::core::validation::validate_field;

/// Percentage of required fields, across every step, that currently validate.
///
/// Rounded down, so 100 is only reported once every required field is filled.
/// A form without required fields reports 0.
pub fn completion_percent(steps: &[StepDef], values: &FormState) -> u8 {
    let (completed, total) = required_counts(steps, values);
    if total == 0 {
        return 0;
    }
    ((completed * 100) / total) as u8
}

pub fn required_counts(steps: &[StepDef], values: &FormState) -> (usize, usize) {
    steps
        .iter()
        .flat_map(|step| step.required_fields())
        .fold((0, 0), |(completed, total), field| {
            let ok = validate_field(field, values).is_none();
            (completed + usize::from(ok), total + 1)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldDef;

    fn steps() -> Vec<StepDef> {
        vec![
            StepDef::new(
                "a",
                "A",
                vec![
                    FieldDef::text("name", "Name").required(),
                    FieldDef::email("email", "Email").required(),
                ],
            ),
            StepDef::new(
                "b",
                "B",
                vec![
                    FieldDef::textarea("message", "Message").required(),
                    FieldDef::text("subject", "Subject"),
                ],
            ),
        ]
    }

    #[test]
    fn zero_required_fields_reports_zero() {
        let steps = vec![StepDef::new("a", "A", vec![FieldDef::text("x", "X")])];
        assert_eq!(completion_percent(&steps, &FormState::new()), 0);
        assert_eq!(completion_percent(&[], &FormState::new()), 0);
    }

    #[test]
    fn counts_across_all_steps() {
        let values: FormState = [("name", "Alice"), ("subject", "hi")].into_iter().collect();
        assert_eq!(required_counts(&steps(), &values), (1, 3));
        assert_eq!(completion_percent(&steps(), &values), 33);
    }

    #[test]
    fn invalid_email_does_not_count() {
        let values: FormState = [("name", "Alice"), ("email", "bad"), ("message", "hey")]
            .into_iter()
            .collect();
        assert_eq!(completion_percent(&steps(), &values), 66);
    }

    #[test]
    fn full_form_is_one_hundred() {
        let values: FormState = [
            ("name", "Alice"),
            ("email", "alice@example.com"),
            ("message", "hello"),
        ]
        .into_iter()
        .collect();
        assert_eq!(completion_percent(&steps(), &values), 100);
    }
}
