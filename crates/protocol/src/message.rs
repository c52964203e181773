//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler, the remote effects and the application state.
//! Input messages are produced from terminal events; outcome messages are
//! produced when a remote call completes.

use serde::{Deserialize, Serialize};

use crate::filter::Filter;
use crate::task::Task;
use crate::user::User;

/// Messages that drive the application state.
///
/// # Examples
///
/// ```
/// use tarefas_protocol::{Filter, Message};
///
/// let msg = Message::SetFilter { filter: Filter::Pending };
/// assert!(!msg.is_outcome());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    // --- Input messages ---
    /// Quit the application.
    Quit,
    /// Escape: close the topmost overlay or leave the current input (contextual).
    Escape,
    /// Submit the focused form.
    Submit,
    /// Move focus to the next field.
    NextField,
    /// Move focus to the previous field.
    PrevField,
    /// Switch between the login and registration panels.
    SwitchAuthTab,
    /// Type a character into the focused input.
    Input {
        /// The character that was typed.
        ch: char,
    },
    /// Delete the character before the cursor of the focused input.
    Backspace,
    /// Move the list selection up.
    NavigateUp,
    /// Move the list selection down.
    NavigateDown,
    /// Show only the tasks matching a filter.
    SetFilter {
        /// The filter to apply.
        filter: Filter,
    },
    /// Flip the completion state of the selected task.
    ToggleSelected,
    /// Open the edit modal for the selected task.
    EditSelected,
    /// Ask for confirmation before deleting the selected task.
    DeleteSelected,
    /// Answer "yes" to the pending confirmation.
    Confirm,
    /// Answer "no" to the pending confirmation.
    Cancel,
    /// Re-fetch the task list.
    Refresh,
    /// End the session and return to the auth screen.
    Logout,
    /// Toggle help overlay.
    ToggleHelp,

    // --- Outcome messages ---
    /// Login or registration succeeded.
    SignedIn {
        /// The authenticated user.
        user: User,
    },
    /// Login or registration failed; the message is shown on the auth panel.
    AuthFailed {
        /// User-facing error text.
        message: String,
    },
    /// A task sync completed.
    TasksLoaded {
        /// Tasks as returned by the service, before soft-delete filtering.
        tasks: Vec<Task>,
    },
    /// The service accepted a new task.
    TaskCreated,
    /// The service answered a toggle or delete request.
    TaskChanged,
    /// The service answered an edit request.
    EditFinished,
}

impl Message {
    /// Returns `true` if this message reports the result of a remote call.
    ///
    /// Outcome messages are applied even while an overlay is open.
    ///
    /// # Examples
    ///
    /// ```
    /// use tarefas_protocol::Message;
    ///
    /// assert!(Message::TaskCreated.is_outcome());
    /// assert!(!Message::Submit.is_outcome());
    /// ```
    #[must_use]
    pub fn is_outcome(&self) -> bool {
        matches!(
            self,
            Self::SignedIn { .. }
                | Self::AuthFailed { .. }
                | Self::TasksLoaded { .. }
                | Self::TaskCreated
                | Self::TaskChanged
                | Self::EditFinished
        )
    }
}
