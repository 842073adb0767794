use crate::catalog::InquiryCategory;
use crate::core::field::{FieldDef, FieldKind};
use crate::core::step::StepStatus;
use crate::core::wizard::{SubmissionPhase, Wizard};
use crate::runtime::submission::Receipt;
use crate::ui::frame::{CursorPos, RenderFrame};
use crate::ui::span::{Span, SpanLine, line_width};
use crate::ui::spinner::Spinner;
use crate::ui::style::Style;
use crate::ui::theme::Theme;
use unicode_width::UnicodeWidthStr;

const PROGRESS_WIDTH: usize = 24;
const KEY_HINTS: &str =
    "Enter next/submit  •  Esc back  •  Tab/↑↓ focus  •  ←/→ choose  •  Space toggle  •  F1-F9 jump  •  Ctrl+C quit";

/// Everything the renderer needs to draw one frame of the wizard.
pub struct FormView<'a> {
    pub title: &'a str,
    pub wizard: &'a Wizard,
    pub focused: Option<&'a str>,
    pub cursor: usize,
    pub spinner: &'a Spinner,
    pub receipt: Option<&'a Receipt>,
    pub notice: Option<&'a str>,
}

pub struct FormRenderer<'a> {
    theme: &'a Theme,
}

impl<'a> FormRenderer<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn render(&self, view: &FormView<'_>) -> RenderFrame {
        let mut frame = RenderFrame::new();
        frame.push(vec![
            Span::styled("STUDENTHUB", self.theme.brand),
            Span::styled(format!(" · {}", view.title), self.theme.title),
        ]);
        frame.push(self.step_indicator(view.wizard));
        frame.push(self.progress_line(view.wizard.progress()));
        frame.blank();

        match view.wizard.phase() {
            SubmissionPhase::Submitting => {
                frame.push(vec![
                    view.spinner.span(),
                    Span::new(" Sending your message…"),
                ]);
                return frame;
            }
            SubmissionPhase::Submitted => {
                frame.push(vec![Span::styled(
                    "✓ Thank you! Your message has been sent.",
                    self.theme.success,
                )]);
                if let Some(receipt) = view.receipt {
                    frame.push(vec![Span::styled(
                        format!("  Reference {}", receipt.reference),
                        self.theme.hint,
                    )]);
                }
                frame.push(vec![Span::styled(
                    "  Returning to the start shortly.",
                    self.theme.hint,
                )]);
                return frame;
            }
            SubmissionPhase::Editing => {}
        }

        let step = view.wizard.current_step();
        frame.push(vec![Span::styled(step.title.clone(), self.theme.title)]);
        if let Some(description) = &step.description {
            frame.push(vec![Span::styled(description.clone(), self.theme.hint)]);
        }
        frame.blank();

        for field in &step.fields {
            let focused = view.focused == Some(field.id.as_str());
            self.render_field(&mut frame, view, field, focused);
        }

        if let Some(notice) = view.notice {
            frame.blank();
            frame.push(vec![Span::styled(notice.to_string(), self.theme.error)]);
        }

        frame.blank();
        frame.push(vec![Span::styled(KEY_HINTS, self.theme.hint)]);
        frame
    }

    fn step_indicator(&self, wizard: &Wizard) -> SpanLine {
        let mut line = Vec::new();
        for (index, step) in wizard.steps().iter().enumerate() {
            if index > 0 {
                line.push(Span::styled(" ─ ", self.theme.pending));
            }
            let (glyph, style) = match wizard.status_at(index) {
                StepStatus::Done => ("✓", self.theme.done),
                StepStatus::Active => ("●", self.theme.focused),
                StepStatus::Pending => ("○", self.theme.pending),
            };
            line.push(Span::styled(
                format!("{glyph} {}. {}", index + 1, step.title),
                style,
            ));
        }
        line
    }

    fn progress_line(&self, percent: u8) -> SpanLine {
        let filled = usize::from(percent) * PROGRESS_WIDTH / 100;
        vec![
            Span::styled("█".repeat(filled), self.theme.progress_fill),
            Span::styled("░".repeat(PROGRESS_WIDTH - filled), self.theme.progress_empty),
            Span::new(format!(" {percent:>3}%")),
        ]
    }

    fn render_field(
        &self,
        frame: &mut RenderFrame,
        view: &FormView<'_>,
        field: &FieldDef,
        focused: bool,
    ) {
        let values = view.wizard.values();
        let marker = if focused {
            Span::styled("› ", self.theme.focused)
        } else {
            Span::new("  ")
        };
        let label_style = if focused {
            self.theme.focused
        } else {
            Style::default()
        };
        let required = if field.required { " *" } else { "" };

        match field.kind {
            FieldKind::Checkbox => {
                let checked = values.bool_value(&field.id).unwrap_or(false);
                frame.push(vec![
                    marker,
                    Span::styled(if checked { "[x] " } else { "[ ] " }, label_style),
                    Span::styled(format!("{}{required}", field.label), label_style),
                ]);
            }
            FieldKind::Select => {
                let current = if values.is_blank(&field.id) {
                    None
                } else {
                    values.text(&field.id)
                };
                let mut line = vec![
                    marker,
                    Span::styled(format!("{}{required}: ", field.label), label_style),
                ];
                match current {
                    Some(value) => {
                        let style = InquiryCategory::lookup(value)
                            .map(|category| Style::new().color(category.descriptor().color))
                            .unwrap_or_default();
                        line.push(Span::styled(format!("‹ {value} ›"), style));
                    }
                    None => line.push(Span::styled(
                        format!("‹ {} ›", field.placeholder.as_deref().unwrap_or("choose")),
                        self.theme.placeholder,
                    )),
                }
                frame.push(line);
            }
            FieldKind::Text | FieldKind::Email | FieldKind::Textarea => {
                let text = values.text(&field.id).unwrap_or("");
                let prefix = vec![
                    marker,
                    Span::styled(format!("{}{required}: ", field.label), label_style),
                ];
                let indent = line_width(&prefix);
                let first_row = frame.next_row();

                if text.is_empty() {
                    let mut line = prefix;
                    if let Some(placeholder) = &field.placeholder {
                        line.push(Span::styled(placeholder.clone(), self.theme.placeholder));
                    }
                    frame.push(line);
                } else {
                    for (index, part) in text.split('\n').enumerate() {
                        let mut line = if index == 0 {
                            prefix.clone()
                        } else {
                            vec![Span::new(" ".repeat(indent))]
                        };
                        line.push(Span::new(part.to_string()));
                        frame.push(line);
                    }
                }

                if focused {
                    frame.cursor = Some(cursor_position(text, view.cursor, indent, first_row));
                }
            }
        }

        if let Some(message) = view.wizard.error(&field.id) {
            frame.push(vec![Span::styled(
                format!("    ✗ {message}"),
                self.theme.error,
            )]);
        }
    }
}

/// Maps a char offset inside a possibly multi-line value to a screen cell.
fn cursor_position(text: &str, cursor: usize, indent: usize, first_row: u16) -> CursorPos {
    let before: String = text.chars().take(cursor).collect();
    let row_offset = before.matches('\n').count();
    let last_line = before.rsplit('\n').next().unwrap_or("");
    let col = indent + UnicodeWidthStr::width(last_line);
    CursorPos {
        col: col.min(u16::MAX as usize) as u16,
        row: first_row.saturating_add(row_offset.min(u16::MAX as usize) as u16),
    }
}
