use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::{App, Screen};
use crate::ui::theme;
use crate::ui::util::{bar_height, format_amount, truncate};

const MIN_BAR_WIDTH: u16 = 4;
const MAX_BAR_WIDTH: u16 = 12;

/// Bar chart of the current summary, in the order the aggregator returned it.
pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let (title, axis) = match app.screen {
        Screen::Categories => ("Category-wise Expenses Summary", "Category"),
        _ => ("Monthly Expenses Summary", "Month"),
    };
    let totals = app.current_totals();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(
                " {title} · {} expenses · total {} ",
                app.record_count,
                format_amount(app.ledger_total)
            ),
            theme::title_style(),
        ))
        .title_bottom(Line::from(Span::styled(format!(" {axis} "), theme::dim_style())).centered());

    if totals.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No expenses recorded yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Add one on the form (1) or with :add <amount> [category] [description]",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let bar_width = bar_width_for(area.width, totals.len());
    let label_width = usize::from(bar_width);

    let bars: Vec<Bar> = totals
        .iter()
        .map(|(key, total)| {
            Bar::default()
                .value(bar_height(*total))
                .text_value(format_amount(*total))
                .label(Line::from(truncate(key, label_width)))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme::ACCENT))
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, area);
}

/// Spread bars over the inner width, one column of gap between each.
fn bar_width_for(width: u16, bars: usize) -> u16 {
    let inner = width.saturating_sub(2);
    let count = u16::try_from(bars.max(1)).unwrap_or(u16::MAX);
    (inner / count)
        .saturating_sub(1)
        .clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH)
}
