//! The new-task form.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
};

use super::render_input;
use crate::layout::{DATE_FIELD_WIDTH, YEAR_FIELD_WIDTH};
use crate::state::{AppState, Focus};

/// Renders the description, day, month and year fields on one row.
///
/// ```text
/// ╭ nova tarefa ─────────────────╮╭ dia ╮╭ mês ╮╭ ano ──╮
/// │comprar leite_                ││5    ││3    ││2026   │
/// ╰──────────────────────────────╯╰─────╯╰─────╯╰───────╯
/// ```
pub fn render_task_form(state: &AppState, area: Rect, buf: &mut Buffer) {
    let [description, day, month, year] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(DATE_FIELD_WIDTH),
        Constraint::Length(DATE_FIELD_WIDTH),
        Constraint::Length(YEAR_FIELD_WIDTH),
    ])
    .areas(area);

    let form = &state.form;
    let focused = |focus: Focus| state.edit.is_none() && state.focus == focus;

    render_input(
        "nova tarefa",
        &form.description,
        focused(Focus::NewDescription),
        description,
        buf,
    );
    render_input("dia", &form.day, focused(Focus::NewDay), day, buf);
    render_input("mês", &form.month, focused(Focus::NewMonth), month, buf);
    render_input("ano", &form.year, focused(Focus::NewYear), year, buf);
}
