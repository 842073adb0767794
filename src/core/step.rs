use crate::core::field::FieldDef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Active,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDef {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

impl StepDef {
    pub fn new(id: impl Into<String>, title: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            fields,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn builder(id: impl Into<String>, title: impl Into<String>) -> StepBuilder {
        StepBuilder::new(id, title)
    }

    pub fn field(&self, id: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.id == id)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|field| field.required)
    }
}

pub struct StepBuilder {
    id: String,
    title: String,
    description: Option<String>,
    fields: Vec<FieldDef>,
}

impl StepBuilder {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldDef>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn build(self) -> StepDef {
        StepDef {
            id: self.id,
            title: self.title,
            description: self.description,
            fields: self.fields,
        }
    }
}
