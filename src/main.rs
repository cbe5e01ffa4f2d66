mod app;
mod components;
mod event;
mod reminder;
mod theme;
mod tui;

use std::time::Duration;

use app::{App, InputMode};
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};

fn main() -> Result<()> {
    color_eyre::install()?;

    let mut app = App::new();

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app);
    tui::restore()?;
    result
}

fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| draw(frame, app))?;

        if let Some(key) = event::next_key_press(Duration::from_millis(100))? {
            // Clear status message on any key
            app.status_message = None;

            // Ctrl+C quits from any mode or overlay
            if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
                app.running = false;
                continue;
            }

            // Help overlay takes priority
            if app.show_help {
                if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
                    app.show_help = false;
                }
                continue;
            }

            // Detail popup takes priority
            if app.detail_index.is_some() {
                if key.code == KeyCode::Esc {
                    app.close_detail();
                }
                continue;
            }

            match app.input_mode {
                InputMode::Form => handle_form_input(app, key.code),
                InputMode::Normal => handle_normal_input(app, key.code),
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let w = area.width;

    // Main layout: form panel + list + status bar
    let layout = Layout::vertical([
        Constraint::Length(components::ReminderForm::HEIGHT),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(area);

    components::ReminderForm::render(
        frame,
        layout[0],
        &app.form,
        app.input_mode == InputMode::Form,
    );

    components::ReminderList::render(
        frame,
        layout[1],
        &app.reminders,
        app.selected_index,
        app.input_mode == InputMode::Normal,
    );

    render_status_bar(frame, layout[2], app, w);

    // Render detail popup overlay
    if let Some(rem) = app.detail_index.and_then(|i| app.reminders.get(i)) {
        components::reminder_list::render_detail_popup(frame, area, rem);
    }

    // Render help overlay
    if app.show_help {
        render_help(frame, area);
    }
}

fn handle_form_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.focus_list(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab => app.form.next_field(),
        KeyCode::BackTab => app.form.prev_field(),
        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Char(c) => app.form.input_char(c),
        _ => {}
    }
}

fn handle_normal_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('n') => app.focus_form(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter => app.show_detail(),
        KeyCode::Char('?') => app.show_help = true,
        _ => {}
    }
}

fn render_status_bar(frame: &mut ratatui::Frame, area: Rect, app: &App, w: u16) {
    use ratatui::text::{Line, Span};
    use ratatui::widgets::Paragraph;

    let theme = theme::current();
    let w = w as usize;

    let mode_str = match app.input_mode {
        InputMode::Form => "[Form]",
        InputMode::Normal => "[List]",
    };

    // Show status message if present, otherwise show context-aware hints
    let right_text = if let Some(ref msg) = app.status_message {
        format!(" {} ", msg)
    } else {
        match app.input_mode {
            InputMode::Form if w >= 70 => {
                " Tab:Field Enter:Add Esc:List Ctrl-C:Quit".to_string()
            }
            InputMode::Form => " Enter:Add Esc:List".to_string(),
            InputMode::Normal if w >= 70 => {
                " jk:Select Enter:Detail n:New ?:Help q:Quit".to_string()
            }
            InputMode::Normal => " n:New q:Quit".to_string(),
        }
    };

    let left = format!(" {} ", mode_str);
    let padding_len = w.saturating_sub(left.len() + right_text.len());
    let padding = " ".repeat(padding_len);

    let line = Line::from(vec![
        Span::styled(left, theme.status),
        Span::styled(padding, theme.status),
        Span::styled(right_text, theme.status),
    ]);

    let bar = Paragraph::new(line).style(theme.status);
    frame.render_widget(bar, area);
}

fn render_help(frame: &mut ratatui::Frame, area: Rect) {
    use ratatui::style::{Color, Modifier, Style};
    use ratatui::text::{Line, Span};
    use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

    let popup_w = area.width.min(46).max(28);
    let popup_h = area.height.min(16).max(10);
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Keybindings ")
        .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let theme = theme::current();
    let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let desc_style = Style::default();
    let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let lines = vec![
        Line::from(Span::styled("Form", section_style)),
        Line::from(vec![
            Span::styled("  Tab       ", key_style),
            Span::styled("Next field", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  Enter     ", key_style),
            Span::styled("Add reminder", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  Esc       ", key_style),
            Span::styled("Switch to the list", desc_style),
        ]),
        Line::from(""),
        Line::from(Span::styled("List", section_style)),
        Line::from(vec![
            Span::styled("  j/k ", key_style),
            Span::styled("or ", theme.dim),
            Span::styled("\u{2191}/\u{2193}  ", key_style),
            Span::styled("Select reminder", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  Enter     ", key_style),
            Span::styled("View reminder details", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  n         ", key_style),
            Span::styled("New reminder", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  q         ", key_style),
            Span::styled("Quit", desc_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Esc", key_style),
            Span::styled(" / ", theme.dim),
            Span::styled("?       ", key_style),
            Span::styled("Close this popup", desc_style),
        ]),
    ];

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}
