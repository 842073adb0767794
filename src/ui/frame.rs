use crate::ui::span::SpanLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPos {
    pub col: u16,
    pub row: u16,
}

/// One full screen: styled lines plus where the text cursor should sit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
}

impl RenderFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: SpanLine) {
        self.lines.push(line);
    }

    pub fn blank(&mut self) {
        self.lines.push(Vec::new());
    }

    pub fn next_row(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }
}
