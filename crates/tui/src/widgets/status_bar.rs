//! Status line at the bottom of the app screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::state::{AppState, Focus};

/// Renders the app error banner if one is showing, otherwise key hints for
/// the focused component.
pub fn render_status_bar(state: &AppState, area: Rect, buf: &mut Buffer) {
    if let Some(banner) = &state.app_error {
        Paragraph::new(Line::from(Span::styled(
            format!(" {}", banner.message),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )))
        .render(area, buf);
        return;
    }

    let hints: &[(&str, &str)] = if state.focus == Focus::TaskList {
        &[
            ("Enter", "concluir"),
            ("e", "editar"),
            ("d", "deletar"),
            ("Tab", "nova tarefa"),
            ("?", "ajuda"),
        ]
    } else {
        &[
            ("Enter", "adicionar"),
            ("Tab", "próximo campo"),
            ("Esc", "lista"),
        ]
    };

    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::DarkGray);
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, text)) in hints.iter().enumerate() {
        spans.push(Span::raw(if i == 0 { " " } else { "  " }));
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {text}"), text_style));
    }
    Paragraph::new(Line::from(spans)).render(area, buf);
}
