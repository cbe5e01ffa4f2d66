use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::reminder::Reminder;
use crate::theme;

pub struct ReminderList;

impl ReminderList {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        reminders: &[Reminder],
        selected_index: usize,
        focused: bool,
    ) {
        let w = area.width as usize;

        let title = if w >= 20 {
            format!(" Reminders ({}) ", reminders.len())
        } else {
            " Reminders ".to_string()
        };

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            theme::current().border
        };

        let block = Block::default()
            .title(title)
            .title_style(theme::current().header)
            .borders(Borders::ALL)
            .border_style(border_style);

        if reminders.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let msg = Paragraph::new("No reminders").style(theme::current().dim);
            frame.render_widget(msg, inner);
            return;
        }

        let items: Vec<ListItem> = reminders
            .iter()
            .enumerate()
            .map(|(i, rem)| ListItem::new(format_entry(rem, focused && i == selected_index)))
            .collect();

        // Skip earlier entries as needed to keep the selection on screen
        let inner_h = area.height.saturating_sub(2) as usize;
        let skip = if focused && inner_h > 0 {
            selected_index.saturating_sub(inner_h - 1)
        } else {
            0
        };
        let visible: Vec<ListItem> = items.into_iter().skip(skip).collect();

        let list = List::new(visible).block(block);
        frame.render_widget(list, area);
    }
}

/// One list row: the fixed line, urgent entries in the theme's red.
fn format_entry(rem: &Reminder, selected: bool) -> Line<'static> {
    let style = if selected {
        theme::current().selected
    } else if rem.is_urgent() {
        theme::current().urgent
    } else {
        Style::default()
    };

    Line::from(Span::styled(rem.line(), style))
}

/// Read-only detail popup for the selected reminder.
pub fn render_detail_popup(frame: &mut Frame, area: Rect, rem: &Reminder) {
    let popup_w = area.width.min(50).max(26);
    let popup_h = area.height.min(9).max(7);
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", rem.name))
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let status = if rem.days_left < 0 {
        "Expired"
    } else if rem.is_urgent() {
        "Expiring soon"
    } else {
        "Fresh"
    };

    let days_style = if rem.is_urgent() {
        theme::current().urgent
    } else {
        Style::default()
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Expires: ", theme::current().dim),
            Span::styled(
                rem.expiry.format("%A, %B %d, %Y").to_string(),
                Style::default(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Days left: ", theme::current().dim),
            Span::styled(rem.days_left.to_string(), days_style),
        ]),
        Line::from(vec![
            Span::styled("Status: ", theme::current().dim),
            Span::styled(status, Style::default()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Press Esc to close", theme::current().dim)),
    ];

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reminder(name: &str, days_out: i64) -> Reminder {
        let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let expiry = today + chrono::Duration::days(days_out);
        Reminder::new(
            name.to_string(),
            expiry.format("%Y-%m-%d").to_string(),
            expiry,
            today.and_hms_opt(12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn entry_text_is_the_reminder_line() {
        let rem = reminder("milk", 7);
        let line = format_entry(&rem, false);

        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.spans[0].content, "milk - 2026-09-01 (剩余 7 天)");
    }

    #[test]
    fn urgent_entries_use_the_urgent_style() {
        let at_threshold = format_entry(&reminder("milk", 3), false);
        let beyond = format_entry(&reminder("milk", 4), false);

        assert_eq!(at_threshold.spans[0].style, theme::current().urgent);
        assert_eq!(beyond.spans[0].style, Style::default());
    }

    #[test]
    fn overdue_entries_are_urgent_too() {
        let overdue = format_entry(&reminder("yogurt", -2), false);

        assert_eq!(overdue.spans[0].style, theme::current().urgent);
        assert_eq!(overdue.spans[0].content, "yogurt - 2026-08-23 (剩余 -2 天)");
    }

    #[test]
    fn selection_overrides_the_entry_style() {
        let selected = format_entry(&reminder("milk", 3), true);

        assert_eq!(selected.spans[0].style, theme::current().selected);
    }
}
