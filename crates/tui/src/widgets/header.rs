//! Title bar and summary bar of the app screen.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs, Widget},
};
use tarefas_protocol::{Filter, Summary};

/// Renders the header bar: title and greeting on the left, help cue on the
/// right.
pub fn render_header(greeting: Option<&str>, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    block.render(area, buf);

    let [title_area, help_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(10)]).areas(inner);

    let mut title = vec![Span::styled(
        "tarefas",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(greeting) = greeting {
        title.push(Span::raw(" - "));
        title.push(Span::styled(greeting, Style::default().fg(Color::White)));
    }
    Paragraph::new(Line::from(title)).render(title_area, buf);

    Paragraph::new(Line::from(vec![
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" ajuda", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Right)
    .render(help_area, buf);
}

/// Renders the summary counts on the left and the filter tabs on the right.
///
/// The counts cover the whole list; `filter` only selects the active tab.
pub fn render_summary(summary: Summary, filter: Filter, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    block.render(area, buf);

    let [counts_area, tabs_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(40)]).areas(inner);

    let number = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let label = Style::default().fg(Color::DarkGray);
    Paragraph::new(Line::from(vec![
        Span::styled("total ", label),
        Span::styled(summary.total.to_string(), number),
        Span::styled("  pendentes ", label),
        Span::styled(summary.pending.to_string(), number),
        Span::styled("  concluídas ", label),
        Span::styled(summary.completed.to_string(), number),
    ]))
    .render(counts_area, buf);

    let titles = Filter::all()
        .iter()
        .enumerate()
        .map(|(i, f)| format!("{} {}", i + 1, f.label()));
    let selected = Filter::all().iter().position(|f| *f == filter);
    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .render(tabs_area, buf);
}
