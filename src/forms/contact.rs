use crate::catalog::InquiryCategory;
use crate::core::field::FieldDef;
use crate::core::step::StepDef;
use crate::core::wizard::Wizard;
use crate::error::WizardError;

pub const CONTACT_TITLE: &str = "Contact us";

pub fn contact_steps() -> Vec<StepDef> {
    vec![
        StepDef::builder("about", "About you")
            .description("Tell us who you are so we can get back to you.")
            .field(
                FieldDef::text("name", "Full name")
                    .required()
                    .with_placeholder("Jane Doe"),
            )
            .field(
                FieldDef::email("email", "Email")
                    .required()
                    .with_placeholder("jane@university.edu"),
            )
            .field(FieldDef::text("phone", "Phone").with_placeholder("optional"))
            .build(),
        StepDef::builder("request", "Your request")
            .description("What can STUDENTHUB help you with?")
            .field(
                FieldDef::select("category", "Category", InquiryCategory::labels()).required(),
            )
            .field(FieldDef::text("subject", "Subject").with_placeholder("optional"))
            .build(),
        StepDef::builder("message", "Message")
            .description("A few lines are enough. We usually reply within two days.")
            .field(FieldDef::textarea("message", "Message").required())
            .field(FieldDef::checkbox("newsletter", "Send me the STUDENTHUB newsletter"))
            .field(FieldDef::checkbox("consent", "I agree to be contacted about this request").required())
            .build(),
    ]
}

pub fn contact_wizard() -> Result<Wizard, WizardError> {
    Wizard::new(contact_steps())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldKind;

    #[test]
    fn builds_three_step_wizard() {
        let wizard = contact_wizard().expect("contact form is valid");
        assert_eq!(wizard.len(), 3);
        assert_eq!(wizard.current_step().id, "about");
    }

    #[test]
    fn category_options_come_from_catalog() {
        let steps = contact_steps();
        let category = steps[1].field("category").expect("category field");
        assert_eq!(category.kind, FieldKind::Select);
        assert_eq!(category.options.len(), InquiryCategory::ALL.len());
        assert_eq!(
            InquiryCategory::lookup(&category.options[2]),
            Some(InquiryCategory::Tutoring)
        );
    }
}
