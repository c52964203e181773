//! Key binding reference shown over the app screen on `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::centered_rect;

const HELP_WIDTH: u16 = 48;
const HELP_HEIGHT: u16 = 23;

/// Draws the binding reference in a centered panel, clearing what is behind
/// it.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tarefas_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);
    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " ajuda ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(build_help_lines())
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let binding = |key: &'static str, text: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<11}"), Style::default().fg(Color::Green)),
            Span::styled(text, Style::default().fg(Color::White)),
        ])
    };

    vec![
        Line::from(""),
        Line::from(Span::styled("  Lista", header_style)),
        binding("↑ ↓", "mover seleção"),
        binding("Enter", "concluir / reabrir"),
        binding("e", "editar descrição"),
        binding("d", "deletar"),
        binding("1 2 3", "todas / pendentes / concluídas"),
        binding("r", "recarregar"),
        Line::from(""),
        Line::from(Span::styled("  Formulário", header_style)),
        binding("Tab", "próximo campo"),
        binding("Shift+Tab", "campo anterior"),
        binding("Enter", "adicionar tarefa"),
        binding("Esc", "voltar para a lista"),
        Line::from(""),
        Line::from(Span::styled("  Geral", header_style)),
        binding("L", "sair da conta"),
        binding("Ctrl+C", "fechar"),
        binding("?", "mostrar / esconder ajuda"),
        Line::from(""),
        Line::from(Span::styled("  qualquer tecla fecha", hint_style)),
    ]
}
