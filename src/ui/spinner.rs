use crate::ui::span::Span;
use crate::ui::style::{Color, Style};

const BRAILLE: &[char] = &['⣾', '⣽', '⣻', '⢿', '⡿', '⣟', '⣯', '⣷'];

#[derive(Debug, Clone, Default)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % BRAILLE.len();
    }

    pub fn glyph(&self) -> char {
        BRAILLE[self.frame % BRAILLE.len()]
    }

    pub fn span(&self) -> Span {
        Span::styled(self.glyph().to_string(), Style::new().color(Color::Cyan))
    }
}
