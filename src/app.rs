use chrono::{Local, NaiveDateTime};

use crate::components::reminder_form::ReminderFormState;
use crate::reminder::Reminder;

/// Which surface owns keystrokes: the input form or the list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Form,
    Normal,
}

pub struct App {
    pub running: bool,
    pub input_mode: InputMode,
    pub form: ReminderFormState,
    pub reminders: Vec<Reminder>,
    pub selected_index: usize,
    pub detail_index: Option<usize>,
    pub show_help: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            input_mode: InputMode::Form,
            form: ReminderFormState::new(),
            reminders: Vec::new(),
            selected_index: 0,
            detail_index: None,
            show_help: false,
            status_message: None,
        }
    }

    /// Handle a form submission against the wall clock.
    pub fn submit_form(&mut self) {
        self.submit_form_at(Local::now().naive_local());
    }

    /// Handle a form submission as of `now`.
    ///
    /// The whole validation policy: the trimmed name must be non-empty, a
    /// date must be present, and the date must parse as `YYYY-MM-DD`. A
    /// missing name or date is swallowed silently; an unparseable date sets
    /// a status message. Either way a rejected submission leaves the fields
    /// untouched; they reset only when an entry was actually added.
    pub fn submit_form_at(&mut self, now: NaiveDateTime) {
        let name = self.form.name.trim();
        if name.is_empty() || self.form.date.is_empty() {
            return;
        }

        let Some(expiry) = self.form.parsed_date() else {
            self.status_message = Some("Invalid date, expected YYYY-MM-DD".to_string());
            return;
        };

        let reminder = Reminder::new(name.to_string(), self.form.date.clone(), expiry, now);
        self.reminders.push(reminder);
        self.form.clear();
    }

    pub fn focus_form(&mut self) {
        self.input_mode = InputMode::Form;
    }

    pub fn focus_list(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.reminders.len() {
            self.selected_index += 1;
        }
    }

    pub fn show_detail(&mut self) {
        if !self.reminders.is_empty() {
            self.detail_index = Some(self.selected_index);
        }
    }

    pub fn close_detail(&mut self) {
        self.detail_index = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
