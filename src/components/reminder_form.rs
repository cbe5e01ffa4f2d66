use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormField {
    Name,
    Date,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::Name => FormField::Date,
            FormField::Date => FormField::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::Name => FormField::Date,
            FormField::Date => FormField::Name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReminderFormState {
    pub name: String,
    pub date: String,
    pub active_field: FormField,
}

impl ReminderFormState {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            date: String::new(),
            active_field: FormField::Name,
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    pub fn input_char(&mut self, c: char) {
        match self.active_field {
            FormField::Name => self.name.push(c),
            FormField::Date => self.date.push(c),
        }
    }

    pub fn backspace(&mut self) {
        match self.active_field {
            FormField::Name => {
                self.name.pop();
            }
            FormField::Date => {
                self.date.pop();
            }
        }
    }

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub fn prev_field(&mut self) {
        self.active_field = self.active_field.prev();
    }

    /// Success-path reset: both fields empty, cursor back on the name.
    pub fn clear(&mut self) {
        self.name.clear();
        self.date.clear();
        self.active_field = FormField::Name;
    }
}

impl Default for ReminderFormState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ReminderForm;

impl ReminderForm {
    /// Rows the form panel needs, borders included.
    pub const HEIGHT: u16 = 5;

    pub fn render(frame: &mut Frame, area: Rect, state: &ReminderFormState, focused: bool) {
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            theme::current().border
        };

        let block = Block::default()
            .title(" New Reminder ")
            .title_style(theme::current().header)
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(1), // name
            Constraint::Length(1), // date
            Constraint::Length(1), // help
            Constraint::Min(0),
        ])
        .split(inner);

        render_field(
            frame,
            rows[0],
            "Name:",
            &state.name,
            "",
            focused && state.active_field == FormField::Name,
        );
        render_field(
            frame,
            rows[1],
            "Date:",
            &state.date,
            "YYYY-MM-DD",
            focused && state.active_field == FormField::Date,
        );

        let help = Line::from(vec![
            Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Field ", theme::current().dim),
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Add ", theme::current().dim),
            Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":List", theme::current().dim),
        ]);
        frame.render_widget(Paragraph::new(help), rows[2]);
    }
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    active: bool,
) {
    let mut spans = vec![Span::styled(
        format!("{:<7}", label),
        theme::current().dim,
    )];

    if value.is_empty() && !active && !placeholder.is_empty() {
        spans.push(Span::styled(placeholder.to_string(), theme::current().dim));
    } else {
        let cursor = if active { "_" } else { "" };
        let style = if active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!("{}{}", value, cursor), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
