//! Widget components for the tarefas TUI.
//!
//! Each widget is a function that renders part of the [`AppState`] into a
//! buffer. Widgets never change state; selection and focus are read from
//! the state passed in.
//!
//! # Modules
//!
//! - [`auth`]: Login and registration panels
//! - [`header`]: Title bar, summary counts and filter tabs
//! - [`form`]: The new-task form
//! - [`task_list`]: The filtered task list
//! - [`overlay`]: Edit modal and delete confirmation
//! - [`help`]: Keybinding reference
//! - [`status_bar`]: Error banner or key hints
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use tarefas_protocol::{DueDate, Task, User};
//! use tarefas_tui::{AppState, widgets};
//!
//! let mut state = AppState::new(2026);
//! state.sign_in(User::new(1, "Ana", "a@b.com"));
//! state.replace_tasks(vec![Task::new(1, "comprar leite", DueDate::default())]);
//!
//! let area = Rect::new(0, 0, 80, 10);
//! let mut buf = Buffer::empty(area);
//! widgets::render_task_list(&state, area, &mut buf);
//! ```
//!
//! [`AppState`]: crate::AppState

pub mod auth;
pub mod form;
pub mod header;
pub mod help;
pub mod overlay;
pub mod status_bar;
pub mod task_list;

pub use auth::render_auth;
pub use form::render_task_form;
pub use header::{render_header, render_summary};
pub use help::render_help_overlay;
pub use overlay::{render_delete_confirm, render_edit_modal};
pub use status_bar::render_status_bar;
pub use task_list::render_task_list;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::input::TextInput;

/// Marker drawn after the content of the focused field.
const CURSOR: &str = "_";

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// will be clamped to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}

/// Renders a bordered single-line text field titled `title`.
///
/// The focused field gets a cyan border and a cursor marker.
pub(crate) fn render_input(
    title: &str,
    input: &TextInput,
    focused: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let mut spans = vec![Span::raw(input.display())];
    if focused {
        spans.push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
    }

    Paragraph::new(Line::from(spans))
        .block(block)
        .render(area, buf);
}
