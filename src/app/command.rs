use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    /// Validate and advance; submits on the last step.
    Next,
    Previous,
    NextFocus,
    PrevFocus,
    JumpTo(usize),
    InsertNewline,
    DeleteWordLeft,
    InputKey(KeyEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn alt(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::ALT)
    }

    pub fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeyBindings {
    bindings: HashMap<KeyBinding, Command>,
}

impl KeyBindings {
    pub fn new() -> Self {
        let mut bindings = Self::default();
        bindings.install_defaults();
        bindings
    }

    pub fn bind(&mut self, key: KeyBinding, command: Command) {
        self.bindings.insert(key, command);
    }

    pub fn unbind(&mut self, key: &KeyBinding) {
        self.bindings.remove(key);
    }

    /// Unbound keys fall through to the focused field.
    pub fn resolve(&self, event: KeyEvent) -> Command {
        self.bindings
            .get(&KeyBinding::from_event(event))
            .copied()
            .unwrap_or(Command::InputKey(event))
    }

    fn install_defaults(&mut self) {
        self.bind(KeyBinding::ctrl(KeyCode::Char('c')), Command::Exit);
        self.bind(KeyBinding::key(KeyCode::Enter), Command::Next);
        self.bind(KeyBinding::ctrl(KeyCode::Char('n')), Command::Next);
        self.bind(KeyBinding::key(KeyCode::Esc), Command::Previous);
        self.bind(KeyBinding::ctrl(KeyCode::Char('p')), Command::Previous);
        self.bind(KeyBinding::key(KeyCode::Tab), Command::NextFocus);
        self.bind(KeyBinding::key(KeyCode::Down), Command::NextFocus);
        self.bind(
            KeyBinding::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Command::PrevFocus,
        );
        self.bind(KeyBinding::key(KeyCode::BackTab), Command::PrevFocus);
        self.bind(KeyBinding::key(KeyCode::Up), Command::PrevFocus);
        self.bind(KeyBinding::alt(KeyCode::Enter), Command::InsertNewline);
        self.bind(KeyBinding::ctrl(KeyCode::Char('j')), Command::InsertNewline);
        self.bind(KeyBinding::ctrl(KeyCode::Char('w')), Command::DeleteWordLeft);
        self.bind(KeyBinding::ctrl(KeyCode::Backspace), Command::DeleteWordLeft);
        for n in 1..=9u8 {
            self.bind(
                KeyBinding::key(KeyCode::F(n)),
                Command::JumpTo(usize::from(n - 1)),
            );
        }
    }
}
