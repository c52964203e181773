//! The filtered task list.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{
        Block, BorderType, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget,
    },
};
use tarefas_protocol::Task;
use tarefas_protocol::format::display_text;

use crate::state::{AppState, Focus};

/// Shown instead of the list when the filter matches nothing.
pub const EMPTY_MESSAGE: &str = "nenhuma tarefa aqui.";

/// Key hints appended to the selected row.
const ROW_HINTS: &str = "e editar · d deletar";

/// Renders the tasks matching the current filter.
///
/// Each row shows a completion marker and the description; tasks with a
/// complete due date get a second line with the date. The selected row is
/// highlighted and carries the edit and delete hints while the list has
/// focus.
pub fn render_task_list(state: &AppState, area: Rect, buf: &mut Buffer) {
    let focused = state.focus == Focus::TaskList && state.edit.is_none();
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(format!(" {} ", state.filter.label()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let tasks = state.visible_tasks();
    if tasks.is_empty() {
        Paragraph::new(EMPTY_MESSAGE)
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
        return;
    }

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| task_item(task, focused && state.selected == Some(i)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(state.selected);
    StatefulWidget::render(list, area, buf, &mut list_state);
}

fn task_item(task: &Task, with_hints: bool) -> ListItem<'static> {
    let (marker, marker_style, text_style) = if task.done {
        (
            "[✔] ",
            Style::default().fg(Color::Green),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        ("[ ] ", Style::default().fg(Color::White), Style::default())
    };

    let mut first = vec![
        Span::styled(marker, marker_style),
        Span::styled(display_text(&task.description).into_owned(), text_style),
    ];
    if with_hints {
        first.push(Span::styled(
            format!("  {ROW_HINTS}"),
            Style::default().fg(Color::Yellow),
        ));
    }

    let mut lines = vec![Line::from(first)];
    if let Some(date) = task.due.label() {
        lines.push(Line::from(Span::styled(
            format!("    📅 {date}"),
            Style::default().fg(Color::Blue),
        )));
    }
    ListItem::new(Text::from(lines))
}
