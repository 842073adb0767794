use crate::core::field::{FieldDef, FieldId, FieldKind};
use crate::core::form_state::FormState;
use crate::core::step::StepDef;
use crate::core::value::FieldValue;
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern"));

/// Field id -> message for every invalid field, in field declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: IndexMap<FieldId, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<FieldId>, message: impl Into<String>) {
        self.entries.insert(id.into(), message.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<String> {
        self.entries.shift_remove(id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn extend(&mut self, other: ValidationErrors) {
        self.entries.extend(other.entries);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(id, message)| (id.as_str(), message.as_str()))
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

pub fn required_message(label: &str) -> String {
    format!("{label} is required")
}

/// Checks one field. The e-mail format message replaces the required message.
///
/// The format rule also applies to optional e-mail fields once they hold a
/// value, so a filled but malformed optional address is reported.
pub fn validate_field(field: &FieldDef, values: &FormState) -> Option<String> {
    let value = values.get(&field.id);

    if field.kind == FieldKind::Email {
        match value {
            Some(FieldValue::Text(text)) if !text.trim().is_empty() && !is_valid_email(text) => {
                return Some(INVALID_EMAIL_MESSAGE.to_string());
            }
            Some(FieldValue::Bool(_)) => return Some(INVALID_EMAIL_MESSAGE.to_string()),
            _ => {}
        }
    }

    if field.required && !satisfies_required(field.kind, value) {
        return Some(required_message(&field.label));
    }
    None
}

/// A checkbox needs a ticked box; every other kind needs non-blank text.
fn satisfies_required(kind: FieldKind, value: Option<&FieldValue>) -> bool {
    match (kind, value) {
        (FieldKind::Checkbox, Some(FieldValue::Bool(checked))) => *checked,
        (FieldKind::Checkbox, _) => false,
        (_, Some(FieldValue::Text(text))) => !text.trim().is_empty(),
        (_, _) => false,
    }
}

pub fn validate_step(step: &StepDef, values: &FormState) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for field in &step.fields {
        if let Some(message) = validate_field(field, values) {
            errors.insert(field.id.clone(), message);
        }
    }
    errors
}

pub fn validate_form(steps: &[StepDef], values: &FormState) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for step in steps {
        errors.extend(validate_step(step, values));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_step() -> StepDef {
        StepDef::new(
            "about",
            "About you",
            vec![
                FieldDef::text("name", "Full name").required(),
                FieldDef::email("email", "Email").required(),
                FieldDef::text("phone", "Phone"),
            ],
        )
    }

    #[test]
    fn empty_required_fields_get_label_message() {
        let errors = validate_step(&contact_step(), &FormState::new());
        assert_eq!(errors.get("name"), Some("Full name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert!(!errors.contains("phone"));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let values: FormState = [("name", "   "), ("email", "a@b.io")].into_iter().collect();
        let errors = validate_step(&contact_step(), &values);
        assert_eq!(errors.ids().collect::<Vec<_>>(), vec!["name"]);
    }

    #[test]
    fn malformed_email_uses_format_message() {
        let values: FormState = [("name", "Alice"), ("email", "bad-email")]
            .into_iter()
            .collect();
        let errors = validate_step(&contact_step(), &values);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some(INVALID_EMAIL_MESSAGE));
    }

    #[test]
    fn optional_email_is_checked_only_when_filled() {
        let step = StepDef::new("s", "S", vec![FieldDef::email("alt", "Alt email")]);
        assert!(validate_step(&step, &FormState::new()).is_empty());

        let values: FormState = [("alt", "nope")].into_iter().collect();
        assert_eq!(validate_step(&step, &values).get("alt"), Some(INVALID_EMAIL_MESSAGE));
    }

    #[test]
    fn required_checkbox_must_be_ticked() {
        let step = StepDef::new(
            "s",
            "S",
            vec![FieldDef::checkbox("consent", "Consent").required()],
        );
        let mut values = FormState::new();
        values.set("consent", FieldValue::Bool(false));
        assert_eq!(
            validate_step(&step, &values).get("consent"),
            Some("Consent is required")
        );

        values.set("consent", FieldValue::Bool(true));
        assert!(validate_step(&step, &values).is_empty());
    }

    #[test]
    fn mismatched_value_types_do_not_pass() {
        let step = StepDef::new(
            "s",
            "S",
            vec![
                FieldDef::email("email", "Email").required(),
                FieldDef::text("name", "Name").required(),
                FieldDef::select("topic", "Topic", ["General"]).required(),
                FieldDef::checkbox("consent", "Consent").required(),
                FieldDef::email("alt", "Alt email"),
            ],
        );
        let mut values = FormState::new();
        values.set("email", FieldValue::Bool(true));
        values.set("name", FieldValue::Bool(true));
        values.set("topic", FieldValue::Bool(true));
        values.set("consent", FieldValue::text("yes"));
        values.set("alt", FieldValue::Bool(false));

        let errors = validate_step(&step, &values);
        assert_eq!(errors.get("email"), Some(INVALID_EMAIL_MESSAGE));
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("topic"), Some("Topic is required"));
        assert_eq!(errors.get("consent"), Some("Consent is required"));
        assert_eq!(errors.get("alt"), Some(INVALID_EMAIL_MESSAGE));
    }

    #[test]
    fn email_pattern_accepts_simple_addresses() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b+c@uni.edu.au"));
        assert!(!is_valid_email("alice@example"));
        assert!(!is_valid_email("alice example@x.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn validate_form_merges_all_steps() {
        let steps = vec![
            contact_step(),
            StepDef::new("msg", "Message", vec![FieldDef::textarea("message", "Message").required()]),
        ];
        let errors = validate_form(&steps, &FormState::new());
        assert_eq!(errors.ids().collect::<Vec<_>>(), vec!["name", "email", "message"]);
    }
}
