//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. The same key means different things depending
//! on whether a text field, the task list, or a confirmation prompt has
//! the keyboard, so the mapping takes an [`InputMode`].

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tarefas_protocol::{Filter, Message};

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// How key presses are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// A text field has focus: printable keys are typed.
    Text,
    /// The task list has focus: keys are shortcuts.
    Command,
    /// A yes/no prompt is open.
    Confirm,
}

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a terminal event to an application message.
///
/// Only key presses are handled; releases, repeats reported as separate
/// kinds, mouse and resize events map to `None`.
#[must_use]
pub fn event_to_message(event: &Event, mode: InputMode) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => key_to_message(*key, mode),
        _ => None,
    }
}

/// Converts a terminal key event to an application message.
///
/// # Key Bindings
///
/// `Ctrl+C` quits in every mode.
///
/// Text mode:
///
/// | Key | Action |
/// |-----|--------|
/// | `Enter` | Submit the form |
/// | `Tab` / `Shift+Tab` | Next / previous field |
/// | `Left` / `Right` | Switch between login and registration |
/// | `Backspace` | Delete last character |
/// | `Esc` | Leave the field or close the modal |
/// | any character | Type it |
///
/// Command mode:
///
/// | Key | Action |
/// |-----|--------|
/// | `Up` / `Down` | Move the selection |
/// | `Enter` or `Space` | Toggle completion |
/// | `e` | Edit description |
/// | `d` or `Delete` | Delete (asks first) |
/// | `1` / `2` / `3` | Filter all / pending / completed |
/// | `Tab` / `Shift+Tab` | Move to the new-task form |
/// | `r` | Refresh |
/// | `L` | Log out |
/// | `?` | Toggle help |
///
/// Confirm mode: `s`, `y` or `Enter` confirm; `n` or `Esc` cancel.
#[must_use]
pub fn key_to_message(key: KeyEvent, mode: InputMode) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match mode {
        InputMode::Text => text_key(key),
        InputMode::Command => command_key(key),
        InputMode::Confirm => confirm_key(key),
    }
}

fn text_key(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Enter => Some(Message::Submit),
        KeyCode::Tab => Some(Message::NextField),
        KeyCode::BackTab => Some(Message::PrevField),
        KeyCode::Left | KeyCode::Right => Some(Message::SwitchAuthTab),
        KeyCode::Backspace => Some(Message::Backspace),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(Message::Input { ch })
        }
        _ => None,
    }
}

fn command_key(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Tab => Some(Message::NextField),
        KeyCode::BackTab => Some(Message::PrevField),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::ToggleSelected),
        KeyCode::Char('e') => Some(Message::EditSelected),
        KeyCode::Char('d') | KeyCode::Delete => Some(Message::DeleteSelected),
        KeyCode::Char('1') => Some(Message::SetFilter {
            filter: Filter::All,
        }),
        KeyCode::Char('2') => Some(Message::SetFilter {
            filter: Filter::Pending,
        }),
        KeyCode::Char('3') => Some(Message::SetFilter {
            filter: Filter::Completed,
        }),
        KeyCode::Char('r') => Some(Message::Refresh),
        KeyCode::Char('L') => Some(Message::Logout),
        KeyCode::Char('?') => Some(Message::ToggleHelp),
        _ => None,
    }
}

fn confirm_key(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('s' | 'S' | 'y' | 'Y') => Some(Message::Confirm),
        KeyCode::Esc | KeyCode::Char('n' | 'N') => Some(Message::Cancel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn ctrl_c_quits_in_every_mode() {
        let key = make_key_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for mode in [InputMode::Text, InputMode::Command, InputMode::Confirm] {
            assert_eq!(key_to_message(key, mode), Some(Message::Quit));
        }
        // 'q' is typed, not a quit key
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('q')), InputMode::Text),
            Some(Message::Input { ch: 'q' })
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('q')), InputMode::Command),
            None
        );
    }

    #[test]
    fn text_mode_types_shortcut_letters() {
        for ch in ['e', 'd', 'r', '1', '?', ' '] {
            assert_eq!(
                key_to_message(make_key(KeyCode::Char(ch)), InputMode::Text),
                Some(Message::Input { ch })
            );
        }
        assert_eq!(
            key_to_message(
                make_key_with_modifiers(KeyCode::Char('A'), KeyModifiers::SHIFT),
                InputMode::Text
            ),
            Some(Message::Input { ch: 'A' })
        );
    }

    #[test]
    fn text_mode_ignores_control_chords() {
        assert_eq!(
            key_to_message(
                make_key_with_modifiers(KeyCode::Char('x'), KeyModifiers::ALT),
                InputMode::Text
            ),
            None
        );
    }

    #[test]
    fn text_mode_editing_keys() {
        let cases = [
            (KeyCode::Enter, Message::Submit),
            (KeyCode::Tab, Message::NextField),
            (KeyCode::BackTab, Message::PrevField),
            (KeyCode::Backspace, Message::Backspace),
            (KeyCode::Esc, Message::Escape),
            (KeyCode::Left, Message::SwitchAuthTab),
            (KeyCode::Right, Message::SwitchAuthTab),
        ];
        for (code, expected) in cases {
            assert_eq!(key_to_message(make_key(code), InputMode::Text), Some(expected));
        }
    }

    #[test]
    fn command_mode_list_keys() {
        let cases = [
            (KeyCode::Up, Message::NavigateUp),
            (KeyCode::Down, Message::NavigateDown),
            (KeyCode::Enter, Message::ToggleSelected),
            (KeyCode::Char(' '), Message::ToggleSelected),
            (KeyCode::Char('e'), Message::EditSelected),
            (KeyCode::Char('d'), Message::DeleteSelected),
            (KeyCode::Delete, Message::DeleteSelected),
            (KeyCode::Char('r'), Message::Refresh),
            (KeyCode::Char('L'), Message::Logout),
            (KeyCode::Char('?'), Message::ToggleHelp),
        ];
        for (code, expected) in cases {
            assert_eq!(
                key_to_message(make_key(code), InputMode::Command),
                Some(expected)
            );
        }
    }

    #[test]
    fn command_mode_filter_keys() {
        for (ch, filter) in [
            ('1', Filter::All),
            ('2', Filter::Pending),
            ('3', Filter::Completed),
        ] {
            assert_eq!(
                key_to_message(make_key(KeyCode::Char(ch)), InputMode::Command),
                Some(Message::SetFilter { filter })
            );
        }
    }

    #[test]
    fn confirm_mode_keys() {
        for ch in ['s', 'S', 'y', 'Y'] {
            assert_eq!(
                key_to_message(make_key(KeyCode::Char(ch)), InputMode::Confirm),
                Some(Message::Confirm)
            );
        }
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('n')), InputMode::Confirm),
            Some(Message::Cancel)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Esc), InputMode::Confirm),
            Some(Message::Cancel)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('d')), InputMode::Confirm),
            None
        );
    }

    #[test]
    fn key_releases_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(event_to_message(&Event::Key(release), InputMode::Text), None);
        assert_eq!(
            event_to_message(&Event::Key(make_key(KeyCode::Char('a'))), InputMode::Text),
            Some(Message::Input { ch: 'a' })
        );
    }

    #[test]
    fn non_key_events_are_ignored() {
        assert_eq!(
            event_to_message(&Event::Resize(80, 24), InputMode::Command),
            None
        );
        assert_eq!(
            event_to_message(&Event::FocusGained, InputMode::Command),
            None
        );
    }
}
