use crate::app::command::Command;
use crate::app::focus::FocusState;
use crate::app::text_edit;
use crate::core::field::{FieldDef, FieldKind};
use crate::core::value::FieldValue;
use crate::core::wizard::SubmissionPhase;
use crate::runtime::submission::{FormController, Receipt, SubmitOutcome};
use crate::terminal::{KeyCode, KeyEvent};
use crate::ui::frame::RenderFrame;
use crate::ui::render::{FormRenderer, FormView};
use crate::ui::spinner::Spinner;
use crate::ui::theme::Theme;
use std::time::{Duration, Instant};
use tracing::debug;

/// Interactive state around one [`FormController`]: focus, text cursor and
/// the bits of screen state the renderer needs.
pub struct FormApp {
    title: String,
    controller: FormController,
    focus: FocusState,
    cursor: usize,
    synced: (usize, SubmissionPhase),
    spinner: Spinner,
    should_exit: bool,
}

impl FormApp {
    pub fn new(title: impl Into<String>, controller: FormController) -> Self {
        let focus = FocusState::from_step(controller.wizard().current_step());
        let synced = (
            controller.wizard().current_index(),
            controller.wizard().phase(),
        );
        let mut app = Self {
            title: title.into(),
            controller,
            focus,
            cursor: 0,
            synced,
            spinner: Spinner::new(),
            should_exit: false,
        };
        app.cursor_to_end();
        app
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.focus.current_id()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn last_receipt(&self) -> Option<&Receipt> {
        self.controller.receipt()
    }

    pub fn poll_timeout(&self, now: Instant, default_timeout: Duration) -> Duration {
        self.controller.poll_timeout(now, default_timeout)
    }

    /// Fires due timers. Returns `true` when the screen changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let fired = !self.controller.tick(now).is_empty();
        let spinning = self.controller.wizard().phase() == SubmissionPhase::Submitting;
        if spinning {
            self.spinner.tick();
        }
        self.sync_focus();
        fired || spinning
    }

    pub fn handle_command(&mut self, command: Command, now: Instant) -> bool {
        let changed = match command {
            Command::Exit => {
                self.should_exit = true;
                self.controller.dispose();
                false
            }
            Command::Next => self.next(now),
            Command::Previous => !self.is_locked() && self.controller.go_previous(),
            Command::JumpTo(index) => !self.is_locked() && self.controller.jump_to(index),
            Command::NextFocus => self.move_focus(true),
            Command::PrevFocus => self.move_focus(false),
            Command::InsertNewline => self.edit_text(|value, cursor| {
                text_edit::insert_char(value, cursor, '\n');
                true
            }),
            Command::DeleteWordLeft => self.edit_text(text_edit::delete_word_left),
            Command::InputKey(key) => self.input_key(key),
        };
        self.sync_focus();
        changed
    }

    pub fn frame(&self, theme: &Theme) -> RenderFrame {
        let notice = self
            .controller
            .last_error()
            .map(|err| format!("Could not send your message: {err}"));
        let view = FormView {
            title: &self.title,
            wizard: self.controller.wizard(),
            focused: self.focus.current_id(),
            cursor: self.cursor,
            spinner: &self.spinner,
            receipt: self.controller.receipt(),
            notice: notice.as_deref(),
        };
        FormRenderer::new(theme).render(&view)
    }

    fn is_locked(&self) -> bool {
        self.controller.wizard().is_locked()
    }

    fn next(&mut self, now: Instant) -> bool {
        if self.is_locked() {
            return false;
        }
        if self.controller.wizard().is_last_step() {
            let outcome = self.controller.submit(now);
            debug!(?outcome, "submit requested");
            if outcome == SubmitOutcome::Invalid {
                self.sync_focus();
                self.focus_first_error();
            }
            return true;
        }
        if !self.controller.go_next() {
            self.focus_first_error();
        }
        true
    }

    fn focus_first_error(&mut self) {
        let wizard = self.controller.wizard();
        let first = wizard
            .current_step()
            .fields
            .iter()
            .find(|field| wizard.error(&field.id).is_some())
            .map(|field| field.id.clone());
        if let Some(id) = first
            && self.focus.set_focus_by_id(&id)
        {
            self.cursor_to_end();
        }
    }

    fn move_focus(&mut self, forward: bool) -> bool {
        if forward {
            self.focus.next();
        } else {
            self.focus.prev();
        }
        self.cursor_to_end();
        true
    }

    /// Rebuilds focus whenever the step or the submission phase changed
    /// underneath it.
    fn sync_focus(&mut self) {
        let wizard = self.controller.wizard();
        let current = (wizard.current_index(), wizard.phase());
        if current == self.synced {
            return;
        }
        self.synced = current;
        self.focus.rebuild(wizard.current_step());
        self.cursor_to_end();
    }

    fn cursor_to_end(&mut self) {
        self.cursor = self
            .focused_field()
            .and_then(|field| self.controller.wizard().values().text(&field.id))
            .map(text_edit::char_count)
            .unwrap_or(0);
    }

    fn focused_field(&self) -> Option<&FieldDef> {
        let id = self.focus.current_id()?;
        self.controller.wizard().field(id)
    }

    fn input_key(&mut self, key: KeyEvent) -> bool {
        let Some(kind) = self.focused_field().map(|field| field.kind) else {
            return false;
        };
        match kind {
            FieldKind::Checkbox => match key.code {
                KeyCode::Char(' ') => self.toggle_checkbox(),
                _ => false,
            },
            FieldKind::Select => match key.code {
                KeyCode::Left => self.cycle_option(false),
                KeyCode::Right | KeyCode::Char(' ') => self.cycle_option(true),
                _ => false,
            },
            FieldKind::Text | FieldKind::Email | FieldKind::Textarea => match key.code {
                KeyCode::Char(ch) if !key.modifiers.has_command() => {
                    self.edit_text(|value, cursor| {
                        text_edit::insert_char(value, cursor, ch);
                        true
                    })
                }
                KeyCode::Backspace => self.edit_text(text_edit::backspace_char),
                KeyCode::Delete => self.edit_text(text_edit::delete_char),
                KeyCode::Left => self.move_cursor(|cursor, value| text_edit::move_left(cursor, value)),
                KeyCode::Right => {
                    self.move_cursor(|cursor, value| text_edit::move_right(cursor, value))
                }
                KeyCode::Home => self.move_cursor(|cursor, _| {
                    *cursor = 0;
                    true
                }),
                KeyCode::End => self.move_cursor(|cursor, value| {
                    *cursor = text_edit::char_count(value);
                    true
                }),
                _ => false,
            },
        }
    }

    fn edit_text(&mut self, edit: impl FnOnce(&mut String, &mut usize) -> bool) -> bool {
        let Some(field) = self.focused_field() else {
            return false;
        };
        if !field.kind.is_textual() || self.controller.wizard().is_locked() {
            return false;
        }
        let id = field.id.clone();
        let multiline = field.kind == FieldKind::Textarea;

        let mut value = self
            .controller
            .wizard()
            .values()
            .text(&id)
            .unwrap_or("")
            .to_string();
        let mut cursor = text_edit::clamp_cursor(self.cursor, &value);
        if !edit(&mut value, &mut cursor) {
            return false;
        }
        if !multiline && value.contains('\n') {
            return false;
        }
        self.cursor = cursor;
        self.controller.set_field(id, FieldValue::Text(value))
    }

    fn move_cursor(&mut self, step: impl FnOnce(&mut usize, &str) -> bool) -> bool {
        let value = self
            .focused_field()
            .and_then(|field| self.controller.wizard().values().text(&field.id))
            .unwrap_or("")
            .to_string();
        let mut cursor = text_edit::clamp_cursor(self.cursor, &value);
        let moved = step(&mut cursor, &value);
        self.cursor = cursor;
        moved
    }

    fn toggle_checkbox(&mut self) -> bool {
        let Some(id) = self.focus.current_id().map(str::to_owned) else {
            return false;
        };
        let checked = self
            .controller
            .wizard()
            .values()
            .bool_value(&id)
            .unwrap_or(false);
        self.controller.set_field(id, FieldValue::Bool(!checked))
    }

    fn cycle_option(&mut self, forward: bool) -> bool {
        let Some(field) = self.focused_field() else {
            return false;
        };
        let options = &field.options;
        if options.is_empty() {
            return false;
        }
        let len = options.len();
        let current = self
            .controller
            .wizard()
            .values()
            .text(&field.id)
            .and_then(|value| options.iter().position(|option| option == value));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        let id = field.id.clone();
        let value = options[next].clone();
        self.controller.set_field(id, FieldValue::Text(value))
    }
}
