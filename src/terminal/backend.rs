use crate::terminal::input_event::{KeyCode, KeyEvent, KeyModifiers, TerminalEvent};
use crate::ui::frame::RenderFrame;
use crate::ui::span::SpanLine;
use crate::ui::style::Color;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode as CrosstermKeyCode, KeyEvent as CrosstermKeyEvent,
    KeyEventKind, KeyModifiers as CrosstermKeyModifiers,
};
use crossterm::style::{
    Attribute, Color as CrosstermColor, Print, ResetColor, SetAttribute, SetForegroundColor,
};
use crossterm::terminal::{
    self, BeginSynchronizedUpdate, Clear, ClearType, DisableLineWrap, EnableLineWrap,
    EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use tracing::{debug, warn};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: u16,
    pub height: u16,
}

/// Alternate-screen session. Raw mode and the alternate screen are acquired
/// by [`Terminal::enter`] and released on [`Terminal::exit`] or drop.
pub struct Terminal {
    stdout: Stdout,
    size: TerminalSize,
    entered: bool,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout: io::stdout(),
            size: TerminalSize { width, height },
            entered: false,
        })
    }

    pub fn enter(&mut self) -> io::Result<()> {
        if self.entered {
            return Ok(());
        }
        terminal::enable_raw_mode()?;
        execute!(self.stdout, EnterAlternateScreen, DisableLineWrap, Hide)?;
        self.entered = true;
        debug!(width = self.size.width, height = self.size.height, "terminal session entered");
        Ok(())
    }

    pub fn exit(&mut self) -> io::Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        execute!(self.stdout, Show, EnableLineWrap, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        debug!("terminal session released");
        Ok(())
    }

    pub fn size(&self) -> TerminalSize {
        self.size
    }

    /// Waits up to `timeout` for the next key or resize.
    pub fn poll_event(&mut self, timeout: Duration) -> io::Result<TerminalEvent> {
        if !event::poll(timeout)? {
            return Ok(TerminalEvent::Tick);
        }
        match event::read()? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(TerminalEvent::Key(map_key_event(key)))
            }
            CrosstermEvent::Resize(width, height) => {
                self.size = TerminalSize { width, height };
                Ok(TerminalEvent::Resize { width, height })
            }
            _ => Ok(TerminalEvent::Tick),
        }
    }

    pub fn render_frame(&mut self, frame: &RenderFrame) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        self.size = TerminalSize { width, height };
        let height = height as usize;

        let skip = match frame.cursor {
            Some(cursor) if cursor.row as usize >= height => cursor.row as usize + 1 - height,
            _ => 0,
        };

        queue!(
            self.stdout,
            BeginSynchronizedUpdate,
            Hide,
            MoveTo(0, 0),
            Clear(ClearType::All)
        )?;
        for (row, line) in frame.lines.iter().skip(skip).take(height).enumerate() {
            queue!(self.stdout, MoveTo(0, row as u16))?;
            self.write_span_line(line, width)?;
        }
        if let Some(cursor) = frame.cursor {
            let row = (cursor.row as usize).saturating_sub(skip) as u16;
            let col = cursor.col.min(width.saturating_sub(1));
            queue!(self.stdout, MoveTo(col, row), Show)?;
        }
        queue!(self.stdout, EndSynchronizedUpdate)?;
        self.stdout.flush()
    }

    fn write_span_line(&mut self, line: &SpanLine, width: u16) -> io::Result<()> {
        let render_width = width.saturating_sub(1) as usize;
        let mut used = 0usize;
        for span in line {
            if used >= render_width {
                break;
            }
            let clipped = clip_to_width(&span.text, render_width - used);
            if clipped.is_empty() {
                continue;
            }
            if let Some(color) = span.style.color {
                queue!(self.stdout, SetForegroundColor(map_color(color)))?;
            }
            if span.style.bold {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }
            if span.style.dim {
                queue!(self.stdout, SetAttribute(Attribute::Dim))?;
            }
            queue!(self.stdout, Print(clipped.as_str()), ResetColor)?;
            if span.style.bold || span.style.dim {
                queue!(self.stdout, SetAttribute(Attribute::NormalIntensity))?;
            }
            used = used.saturating_add(UnicodeWidthStr::width(clipped.as_str()));
        }
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(err) = self.exit() {
            warn!(error = %err, "failed to restore terminal");
        }
    }
}

fn map_color(color: Color) -> CrosstermColor {
    match color {
        Color::Reset => CrosstermColor::Reset,
        Color::Black => CrosstermColor::Black,
        Color::DarkGrey => CrosstermColor::DarkGrey,
        Color::Red => CrosstermColor::Red,
        Color::Green => CrosstermColor::Green,
        Color::Yellow => CrosstermColor::DarkYellow,
        Color::Blue => CrosstermColor::DarkBlue,
        Color::Magenta => CrosstermColor::DarkMagenta,
        Color::Cyan => CrosstermColor::DarkCyan,
        Color::White => CrosstermColor::White,
    }
}

fn map_key_event(key: CrosstermKeyEvent) -> KeyEvent {
    KeyEvent {
        code: map_key_code(key.code),
        modifiers: map_key_modifiers(key.modifiers),
    }
}

fn map_key_code(code: CrosstermKeyCode) -> KeyCode {
    match code {
        CrosstermKeyCode::Char(ch) => KeyCode::Char(ch),
        CrosstermKeyCode::F(n) => KeyCode::F(n),
        CrosstermKeyCode::Enter => KeyCode::Enter,
        CrosstermKeyCode::Tab => KeyCode::Tab,
        CrosstermKeyCode::BackTab => KeyCode::BackTab,
        CrosstermKeyCode::Esc => KeyCode::Esc,
        CrosstermKeyCode::Backspace => KeyCode::Backspace,
        CrosstermKeyCode::Delete => KeyCode::Delete,
        CrosstermKeyCode::Home => KeyCode::Home,
        CrosstermKeyCode::End => KeyCode::End,
        CrosstermKeyCode::Left => KeyCode::Left,
        CrosstermKeyCode::Right => KeyCode::Right,
        CrosstermKeyCode::Up => KeyCode::Up,
        CrosstermKeyCode::Down => KeyCode::Down,
        _ => KeyCode::Unknown,
    }
}

fn map_key_modifiers(modifiers: CrosstermKeyModifiers) -> KeyModifiers {
    let mut out = KeyModifiers::NONE;
    if modifiers.contains(CrosstermKeyModifiers::SHIFT) {
        out = out.union(KeyModifiers::SHIFT);
    }
    if modifiers.contains(CrosstermKeyModifiers::CONTROL) {
        out = out.union(KeyModifiers::CONTROL);
    }
    if modifiers.contains(CrosstermKeyModifiers::ALT) {
        out = out.union(KeyModifiers::ALT);
    }
    out
}

fn clip_to_width(text: &str, max_width: usize) -> String {
    let mut used = 0usize;
    let mut out = String::new();
    for ch in text.chars().filter(|ch| !matches!(ch, '\n' | '\r')) {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(ch_width) > max_width {
            break;
        }
        out.push(ch);
        used = used.saturating_add(ch_width);
    }
    out
}
