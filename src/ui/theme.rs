use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub brand: Style,
    pub title: Style,
    pub hint: Style,
    pub error: Style,
    pub placeholder: Style,
    pub focused: Style,
    pub done: Style,
    pub pending: Style,
    pub progress_fill: Style,
    pub progress_empty: Style,
    pub success: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            brand: Style::new().color(Color::Cyan).bold(),
            title: Style::new().bold(),
            hint: Style::new().color(Color::DarkGrey),
            error: Style::new().color(Color::Red).bold(),
            placeholder: Style::new().color(Color::DarkGrey).dim(),
            focused: Style::new().color(Color::Cyan).bold(),
            done: Style::new().color(Color::Green),
            pending: Style::new().color(Color::DarkGrey),
            progress_fill: Style::new().color(Color::Cyan),
            progress_empty: Style::new().color(Color::DarkGrey),
            success: Style::new().color(Color::Green).bold(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
