use crate::core::field::FieldId;
use crate::core::value::FieldValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Live field values of one wizard instance, in the order they were first set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormState {
    values: IndexMap<FieldId, FieldValue>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, id: impl Into<FieldId>, value: FieldValue) {
        self.values.insert(id.into(), value);
    }

    pub fn get(&self, id: &str) -> Option<&FieldValue> {
        self.values.get(id)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(FieldValue::as_text)
    }

    pub fn bool_value(&self, id: &str) -> Option<bool> {
        self.get(id).and_then(FieldValue::as_bool)
    }

    /// Missing ids count as blank.
    pub fn is_blank(&self, id: &str) -> bool {
        self.get(id).is_none_or(FieldValue::is_blank)
    }

    pub fn remove(&mut self, id: &str) -> Option<FieldValue> {
        self.values.shift_remove(id)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<FieldId>, V: Into<FieldValue>> FromIterator<(K, V)> for FormState {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
