//! Edit modal and delete confirmation.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::{centered_rect, render_input};
use crate::state::EditModal;

const EDIT_WIDTH: u16 = 56;
const EDIT_HEIGHT: u16 = 6;
const CONFIRM_WIDTH: u16 = 36;
const CONFIRM_HEIGHT: u16 = 5;

fn overlay_block(title: &'static str, color: Color) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

/// Renders the edit modal centered over `area`.
pub fn render_edit_modal(edit: &EditModal, area: Rect, buf: &mut Buffer) {
    let popup = centered_rect(EDIT_WIDTH, EDIT_HEIGHT, area);
    Clear.render(popup, buf);

    let block = overlay_block(" editar tarefa ", Color::LightYellow);
    let inner = block.inner(popup);
    block.render(popup, buf);

    let [input_area, hint_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(inner);
    render_input("descrição", &edit.input, true, input_area, buf);
    Paragraph::new("Enter salvar · Esc cancelar")
        .style(Style::default().fg(Color::DarkGray))
        .render(hint_area, buf);
}

/// Renders the delete confirmation prompt centered over `area`.
pub fn render_delete_confirm(area: Rect, buf: &mut Buffer) {
    let popup = centered_rect(CONFIRM_WIDTH, CONFIRM_HEIGHT, area);
    Clear.render(popup, buf);

    let key = Style::default().fg(Color::Yellow);
    Paragraph::new(vec![
        Line::from("deletar esta tarefa?"),
        Line::from(""),
        Line::from(vec![
            Span::styled("s", key),
            Span::raw(" sim   "),
            Span::styled("n", key),
            Span::raw(" não"),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(overlay_block(" confirmar ", Color::Red))
    .render(popup, buf);
}
