use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Text(String),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Blank means "nothing entered": whitespace-only text or an unticked box.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(v) => v.trim().is_empty(),
            Self::Bool(v) => !*v,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v.as_str()),
            Self::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    pub fn to_query_value(&self) -> String {
        match self {
            Self::Text(v) => v.clone(),
            Self::Bool(v) => v.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::FieldValue;

    #[test]
    fn whitespace_text_is_blank() {
        assert!(FieldValue::text("   \t").is_blank());
        assert!(!FieldValue::text(" a ").is_blank());
    }

    #[test]
    fn unticked_checkbox_is_blank() {
        assert!(FieldValue::Bool(false).is_blank());
        assert!(!FieldValue::Bool(true).is_blank());
    }

    #[test]
    fn serializes_without_tags() {
        let json = serde_json::to_string(&vec![FieldValue::text("x"), FieldValue::Bool(true)])
            .expect("serialize");
        assert_eq!(json, r#"["x",true]"#);
    }
}
