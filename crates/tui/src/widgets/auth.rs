//! Login and registration panels.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Tabs, Widget},
};

use super::{centered_rect, render_input};
use crate::input::TextInput;
use crate::state::{AppState, AuthTab, Focus};

/// Width of the auth panel.
const AUTH_WIDTH: u16 = 48;

/// Renders the auth screen: a centered panel with the login and
/// registration tabs, the fields of the active tab and its error banner.
///
/// # Layout
///
/// ```text
/// ╭──────────── tarefas ────────────╮
/// │ entrar │ criar conta            │
/// │╭ email ────────────────────────╮│
/// ││a@b.com_                       ││
/// │╰───────────────────────────────╯│
/// │╭ senha ────────────────────────╮│
/// ││••••                           ││
/// │╰───────────────────────────────╯│
/// │ email ou senha incorretos.      │
/// │ Enter entrar · ←/→ trocar aba   │
/// ╰─────────────────────────────────╯
/// ```
pub fn render_auth(state: &AppState, area: Rect, buf: &mut Buffer) {
    let fields: Vec<(&str, &TextInput, Focus)> = match state.auth_tab {
        AuthTab::Login => vec![
            ("email", &state.login.email, Focus::LoginEmail),
            ("senha", &state.login.password, Focus::LoginPassword),
        ],
        AuthTab::Register => vec![
            ("nome", &state.register.name, Focus::RegisterName),
            ("email", &state.register.email, Focus::RegisterEmail),
            ("senha", &state.register.password, Focus::RegisterPassword),
        ],
    };

    // tabs + fields + banner + hint + borders
    let height = 1 + 3 * fields.len() as u16 + 1 + 1 + 2;
    let panel = centered_rect(AUTH_WIDTH, height, area);
    Clear.render(panel, buf);

    let block = Block::default()
        .title(Span::styled(
            " tarefas ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(panel);
    block.render(panel, buf);

    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(fields.iter().map(|_| Constraint::Length(3)));
    constraints.extend([Constraint::Length(1), Constraint::Length(1)]);
    let rows = Layout::vertical(constraints).split(inner);

    let selected = match state.auth_tab {
        AuthTab::Login => 0,
        AuthTab::Register => 1,
    };
    Tabs::new([AuthTab::Login.label(), AuthTab::Register.label()])
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .render(rows[0], buf);

    for (i, (title, input, focus)) in fields.iter().enumerate() {
        render_input(title, input, state.focus == *focus, rows[i + 1], buf);
    }

    let banner = match state.auth_tab {
        AuthTab::Login => state.login_error.as_ref(),
        AuthTab::Register => state.register_error.as_ref(),
    };
    if let Some(banner) = banner {
        Paragraph::new(banner.message.as_str())
            .style(Style::default().fg(Color::Red))
            .render(rows[fields.len() + 1], buf);
    }

    let submit = match state.auth_tab {
        AuthTab::Login => "entrar",
        AuthTab::Register => "criar conta",
    };
    Paragraph::new(format!("Enter {submit} · Tab campo · ←/→ trocar aba"))
        .style(Style::default().fg(Color::DarkGray))
        .render(rows[fields.len() + 2], buf);
}
