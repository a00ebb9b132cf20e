use chrono::Datelike;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::{App, InputMode};
use crate::ui::form::{month_weeks, FormField};
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_fields(f, chunks[0], app);
    render_calendar(f, chunks[1], app);
}

fn render_fields(f: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let editing = app.input_mode == InputMode::Editing;

    let mut lines = vec![Line::from("")];
    for field in FormField::all() {
        let focused = *field == form.focus;
        let style = if focused && editing && field.is_text() {
            theme::editing_style()
        } else if focused {
            theme::selected_style()
        } else {
            theme::normal_style()
        };

        let value = match field {
            FormField::Amount => with_cursor(&form.amount, focused && editing),
            FormField::Description => with_cursor(&form.description, focused && editing),
            FormField::Category => format!("◂ {} ▸", form.category),
            FormField::Date => format!("◂ {} ▸", form.date_string()),
            FormField::Submit => String::new(),
        };

        let line = if *field == FormField::Submit {
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("[ {} ]", field.label()),
                    style.add_modifier(Modifier::BOLD),
                ),
            ])
        } else {
            Line::from(vec![
                Span::styled(format!("  {:<13}", format!("{}:", field.label())), theme::dim_style()),
                Span::styled(format!(" {value:<30}"), style),
            ])
        };
        lines.push(line);
        lines.push(Line::from(""));
    }

    let hint = match form.focus {
        FormField::Amount | FormField::Description if editing => "Type to edit, Enter to confirm",
        FormField::Amount | FormField::Description => "Enter to edit",
        FormField::Category => "+/- to change category",
        FormField::Date => "+/- day, [/] month, t today",
        FormField::Submit => "Enter to add (Ctrl-s from anywhere)",
    };
    lines.push(Line::from(Span::styled(format!("  {hint}"), theme::dim_style())));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(" Add Expense ", theme::title_style()));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn with_cursor(text: &str, editing: bool) -> String {
    if editing {
        format!("{text}▏")
    } else {
        text.to_string()
    }
}

fn render_calendar(f: &mut Frame, area: Rect, app: &App) {
    let date = app.form.date;
    let date_focused = app.form.focus == FormField::Date;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            date.format("%B %Y").to_string(),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Mo Tu We Th Fr Sa Su", theme::dim_style())),
    ];

    for week in month_weeks(date) {
        let mut spans = Vec::new();
        for (i, day) in week.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            match day {
                Some(d) if *d == date.day() => {
                    let style = if date_focused {
                        theme::selected_style()
                    } else {
                        Style::default()
                            .fg(theme::YELLOW)
                            .add_modifier(Modifier::BOLD)
                    };
                    spans.push(Span::styled(format!("{d:>2}"), style));
                }
                Some(d) => spans.push(Span::styled(format!("{d:>2}"), theme::normal_style())),
                None => spans.push(Span::raw("  ")),
            }
        }
        lines.push(Line::from(spans));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if date_focused {
            theme::ACCENT
        } else {
            theme::OVERLAY
        }))
        .title(Span::styled(" Date ", theme::title_style()));
    f.render_widget(Paragraph::new(lines).centered().block(block), area);
}
