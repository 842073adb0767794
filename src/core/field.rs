use serde::{Deserialize, Serialize};

pub type FieldId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Textarea,
    Select,
    Checkbox,
}

impl FieldKind {
    pub fn is_textual(self) -> bool {
        matches!(self, Self::Text | Self::Email | Self::Textarea)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    pub id: FieldId,
    pub label: String,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl FieldDef {
    pub fn new(id: impl Into<FieldId>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            required: false,
            options: Vec::new(),
            placeholder: None,
        }
    }

    pub fn text(id: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self::new(id, label, FieldKind::Text)
    }

    pub fn email(id: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self::new(id, label, FieldKind::Email)
    }

    pub fn textarea(id: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self::new(id, label, FieldKind::Textarea)
    }

    pub fn select(
        id: impl Into<FieldId>,
        label: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let mut field = Self::new(id, label, FieldKind::Select);
        field.options = options.into_iter().map(Into::into).collect();
        field
    }

    pub fn checkbox(id: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self::new(id, label, FieldKind::Checkbox)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}
