use crate::core::field::FieldId;
use crate::core::step::StepDef;

#[derive(Debug, Default, Clone)]
pub struct FocusState {
    targets: Vec<FieldId>,
    index: Option<usize>,
}

impl FocusState {
    pub fn from_step(step: &StepDef) -> Self {
        let mut state = Self::default();
        state.rebuild(step);
        state
    }

    pub fn rebuild(&mut self, step: &StepDef) {
        self.targets = step.fields.iter().map(|field| field.id.clone()).collect();
        self.index = if self.targets.is_empty() {
            None
        } else {
            Some(0)
        };
    }

    pub fn current_id(&self) -> Option<&str> {
        self.index
            .and_then(|i| self.targets.get(i))
            .map(String::as_str)
    }

    pub fn set_focus_by_id(&mut self, id: &str) -> bool {
        match self.targets.iter().position(|target| target == id) {
            Some(index) => {
                self.index = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn next(&mut self) {
        let Some(current) = self.index else {
            return;
        };
        self.index = Some((current + 1) % self.targets.len());
    }

    pub fn prev(&mut self) {
        let Some(current) = self.index else {
            return;
        };
        self.index = Some((current + self.targets.len() - 1) % self.targets.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldDef;

    #[test]
    fn cycles_through_step_fields() {
        let step = StepDef::new(
            "s",
            "S",
            vec![FieldDef::text("a", "A"), FieldDef::text("b", "B")],
        );
        let mut focus = FocusState::from_step(&step);
        assert_eq!(focus.current_id(), Some("a"));
        focus.next();
        assert_eq!(focus.current_id(), Some("b"));
        focus.next();
        assert_eq!(focus.current_id(), Some("a"));
        focus.prev();
        assert_eq!(focus.current_id(), Some("b"));
        assert!(!focus.set_focus_by_id("zzz"));
    }

    #[test]
    fn empty_step_has_no_focus() {
        let mut focus = FocusState::from_step(&StepDef::new("s", "S", vec![]));
        focus.next();
        assert_eq!(focus.current_id(), None);
    }
}
