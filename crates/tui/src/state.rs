//! Application state management.
//!
//! This module defines the state of the TUI: which screen is shown, the
//! signed-in session, the cached task list, every form field and overlay,
//! and the focus and selection used for keyboard navigation. All changes
//! go through the transition methods on [`AppState`].

use std::time::{Duration, Instant};

use tarefas_protocol::{Filter, Summary, Task, TaskId, User, retain_active, visible};

use crate::input::TextInput;

/// The screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Login and registration forms.
    #[default]
    Auth,
    /// The task list of the signed-in user.
    App,
}

/// The panel shown on the auth screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    /// Log in to an existing account.
    #[default]
    Login,
    /// Create a new account.
    Register,
}

impl AuthTab {
    /// Returns the tab title.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Login => "entrar",
            Self::Register => "criar conta",
        }
    }

    /// Returns the other tab.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }
}

/// The component receiving keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Login e-mail field.
    #[default]
    LoginEmail,
    /// Login password field.
    LoginPassword,
    /// Registration name field.
    RegisterName,
    /// Registration e-mail field.
    RegisterEmail,
    /// Registration password field.
    RegisterPassword,
    /// New-task description field.
    NewDescription,
    /// New-task day field.
    NewDay,
    /// New-task month field.
    NewMonth,
    /// New-task year field.
    NewYear,
    /// The task list.
    TaskList,
}

const LOGIN_FIELDS: &[Focus] = &[Focus::LoginEmail, Focus::LoginPassword];
const REGISTER_FIELDS: &[Focus] = &[
    Focus::RegisterName,
    Focus::RegisterEmail,
    Focus::RegisterPassword,
];
const APP_FIELDS: &[Focus] = &[
    Focus::NewDescription,
    Focus::NewDay,
    Focus::NewMonth,
    Focus::NewYear,
    Focus::TaskList,
];

impl Focus {
    /// Returns `true` if this focus is a text field.
    #[must_use]
    pub const fn is_text(self) -> bool {
        !matches!(self, Self::TaskList)
    }

    /// Returns `true` for the day, month and year fields.
    #[must_use]
    pub const fn is_date(self) -> bool {
        matches!(self, Self::NewDay | Self::NewMonth | Self::NewYear)
    }
}

/// A transient error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    /// Text shown to the user.
    pub message: String,
    /// When the banner appeared.
    pub shown_at: Instant,
}

impl Banner {
    /// Creates a banner shown from now on.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    /// Returns `true` once the banner has been visible for `ttl`.
    #[must_use]
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.shown_at) >= ttl
    }
}

/// Fields of the login panel.
#[derive(Debug, Clone)]
pub struct LoginForm {
    /// E-mail address.
    pub email: TextInput,
    /// Password, masked.
    pub password: TextInput,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: TextInput::new(),
            password: TextInput::masked(),
        }
    }
}

/// Fields of the registration panel.
#[derive(Debug, Clone)]
pub struct RegisterForm {
    /// Display name.
    pub name: TextInput,
    /// E-mail address.
    pub email: TextInput,
    /// Password, masked.
    pub password: TextInput,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            name: TextInput::new(),
            email: TextInput::new(),
            password: TextInput::masked(),
        }
    }
}

/// Fields of the new-task form.
#[derive(Debug, Clone, Default)]
pub struct TaskForm {
    /// Task description.
    pub description: TextInput,
    /// Day of month.
    pub day: TextInput,
    /// Month.
    pub month: TextInput,
    /// Year, prefilled with the configured default.
    pub year: TextInput,
}

/// The edit modal.
#[derive(Debug, Clone)]
pub struct EditModal {
    /// Task being edited.
    pub task_id: TaskId,
    /// Replacement description, prefilled with the current one.
    pub input: TextInput,
}

/// The application state.
///
/// The task list only ever holds active tasks. The selection is an index
/// into the *visible* list and is clamped whenever that list changes.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Screen currently shown.
    pub screen: Screen,
    /// Panel shown on the auth screen.
    pub auth_tab: AuthTab,
    /// Login panel fields.
    pub login: LoginForm,
    /// Registration panel fields.
    pub register: RegisterForm,
    /// Error shown on the login panel.
    pub login_error: Option<Banner>,
    /// Error shown on the registration panel.
    pub register_error: Option<Banner>,
    /// Error shown on the app screen.
    pub app_error: Option<Banner>,
    /// Signed-in user.
    pub session: Option<User>,
    /// Active tasks of the signed-in user, in server order.
    pub tasks: Vec<Task>,
    /// Current list filter.
    pub filter: Filter,
    /// New-task form fields.
    pub form: TaskForm,
    /// Component receiving keyboard input.
    pub focus: Focus,
    /// Index of the selected task within the visible list.
    pub selected: Option<usize>,
    /// Edit modal, if open.
    pub edit: Option<EditModal>,
    /// Task awaiting delete confirmation.
    pub pending_delete: Option<TaskId>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Value the year field is reset to.
    default_year: i32,
}

impl AppState {
    /// Creates the initial state: auth screen, login panel, nobody signed in.
    ///
    /// # Examples
    ///
    /// ```
    /// use tarefas_tui::state::{AppState, Screen};
    ///
    /// let state = AppState::new(2026);
    /// assert_eq!(state.screen, Screen::Auth);
    /// assert_eq!(state.form.year.value(), "2026");
    /// assert!(state.session.is_none());
    /// ```
    #[must_use]
    pub fn new(default_year: i32) -> Self {
        let mut state = Self {
            screen: Screen::default(),
            auth_tab: AuthTab::default(),
            login: LoginForm::default(),
            register: RegisterForm::default(),
            login_error: None,
            register_error: None,
            app_error: None,
            session: None,
            tasks: Vec::new(),
            filter: Filter::default(),
            form: TaskForm::default(),
            focus: Focus::default(),
            selected: None,
            edit: None,
            pending_delete: None,
            help_visible: false,
            default_year,
        };
        state.reset_task_form();
        state
    }

    /// Returns the tasks matching the current filter.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        visible(&self.tasks, self.filter)
    }

    /// Returns the counts over the full list, whatever the filter.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::of(&self.tasks)
    }

    /// Returns the selected task, if any.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.selected
            .and_then(|index| self.visible_tasks().get(index).copied())
    }

    /// Returns the greeting for the signed-in user.
    #[must_use]
    pub fn greeting(&self) -> Option<String> {
        self.session.as_ref().map(User::greeting)
    }

    // --- Auth screen ---

    /// Shows the other auth panel and clears both panels' errors.
    pub fn switch_auth_tab(&mut self) {
        self.auth_tab = self.auth_tab.other();
        self.login_error = None;
        self.register_error = None;
        self.focus = self.fields()[0];
    }

    /// Shows an error on the auth panel currently displayed.
    pub fn show_auth_error(&mut self, message: impl Into<String>) {
        let banner = Some(Banner::new(message));
        match self.auth_tab {
            AuthTab::Login => self.login_error = banner,
            AuthTab::Register => self.register_error = banner,
        }
    }

    /// Stores the session and switches to the app screen.
    ///
    /// The task list starts empty until the first sync completes.
    pub fn sign_in(&mut self, user: User) {
        self.session = Some(user);
        self.screen = Screen::App;
        self.tasks.clear();
        self.selected = None;
        self.login_error = None;
        self.register_error = None;
        self.focus = Focus::TaskList;
    }

    /// Ends the session and returns to the auth screen.
    ///
    /// The login fields are cleared; the registration fields are kept.
    pub fn sign_out(&mut self) {
        self.session = None;
        self.tasks.clear();
        self.selected = None;
        self.edit = None;
        self.pending_delete = None;
        self.app_error = None;
        self.login.email.clear();
        self.login.password.clear();
        self.screen = Screen::Auth;
        self.focus = self.fields()[0];
    }

    // --- Task list ---

    /// Replaces the task list with a fetched one, dropping deleted tasks.
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = retain_active(tasks);
        self.clamp_selection();
    }

    /// Changes the filter.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.clamp_selection();
    }

    /// Moves the selection up one row.
    pub fn navigate_up(&mut self) {
        if let Some(index) = self.selected {
            self.selected = Some(index.saturating_sub(1));
        } else {
            self.clamp_selection();
        }
    }

    /// Moves the selection down one row.
    pub fn navigate_down(&mut self) {
        let len = self.visible_tasks().len();
        if let Some(index) = self.selected {
            self.selected = Some((index + 1).min(len.saturating_sub(1)));
        }
        self.clamp_selection();
    }

    /// Keeps the selection inside the visible list.
    ///
    /// A non-empty list always has a selected row; an empty one has none.
    pub fn clamp_selection(&mut self) {
        let len = self.visible_tasks().len();
        self.selected = match (self.selected, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(index), len) => Some(index.min(len - 1)),
        };
    }

    // --- New-task form ---

    /// Clears the description and date fields and resets the year.
    pub fn reset_task_form(&mut self) {
        self.form.description.clear();
        self.form.day.clear();
        self.form.month.clear();
        self.form.year.set(self.default_year.to_string());
    }

    /// Shows an error on the app screen.
    pub fn show_app_error(&mut self, message: impl Into<String>) {
        self.app_error = Some(Banner::new(message));
    }

    // --- Overlays ---

    /// Opens the edit modal for the selected task.
    ///
    /// Returns `false` if no task is selected.
    pub fn open_edit(&mut self) -> bool {
        let Some(task) = self.selected_task() else {
            return false;
        };
        self.edit = Some(EditModal {
            task_id: task.id,
            input: TextInput::with_value(task.description.clone()),
        });
        true
    }

    /// Closes the edit modal.
    pub fn close_edit(&mut self) {
        self.edit = None;
    }

    /// Asks for confirmation before deleting the selected task.
    pub fn request_delete(&mut self) {
        self.pending_delete = self.selected_task().map(|task| task.id);
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    // --- Focus and input ---

    /// Returns the focus cycle of the current screen.
    fn fields(&self) -> &'static [Focus] {
        match (self.screen, self.auth_tab) {
            (Screen::Auth, AuthTab::Login) => LOGIN_FIELDS,
            (Screen::Auth, AuthTab::Register) => REGISTER_FIELDS,
            (Screen::App, _) => APP_FIELDS,
        }
    }

    /// Moves focus to the next field, wrapping around.
    pub fn next_field(&mut self) {
        self.step_focus(1);
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn prev_field(&mut self) {
        self.step_focus(-1);
    }

    fn step_focus(&mut self, delta: isize) {
        let fields = self.fields();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = (current as isize + delta).rem_euclid(fields.len() as isize);
        self.focus = fields[next as usize];
    }

    /// Returns the text field receiving input: the edit modal when it is
    /// open, otherwise the focused field.
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        if let Some(edit) = self.edit.as_mut() {
            return Some(&mut edit.input);
        }
        match self.focus {
            Focus::LoginEmail => Some(&mut self.login.email),
            Focus::LoginPassword => Some(&mut self.login.password),
            Focus::RegisterName => Some(&mut self.register.name),
            Focus::RegisterEmail => Some(&mut self.register.email),
            Focus::RegisterPassword => Some(&mut self.register.password),
            Focus::NewDescription => Some(&mut self.form.description),
            Focus::NewDay => Some(&mut self.form.day),
            Focus::NewMonth => Some(&mut self.form.month),
            Focus::NewYear => Some(&mut self.form.year),
            Focus::TaskList => None,
        }
    }

    /// Types a character into the focused field.
    ///
    /// Date fields only accept ASCII digits.
    pub fn input_char(&mut self, ch: char) {
        if self.edit.is_none() && self.focus.is_date() && !ch.is_ascii_digit() {
            return;
        }
        if let Some(input) = self.focused_input_mut() {
            input.insert_char(ch);
        }
    }

    /// Deletes the last character of the focused field.
    pub fn backspace(&mut self) {
        if let Some(input) = self.focused_input_mut() {
            input.backspace();
        }
    }

    /// Clears every banner shown for `ttl` or longer.
    pub fn expire_banners(&mut self, now: Instant, ttl: Duration) {
        for banner in [
            &mut self.login_error,
            &mut self.register_error,
            &mut self.app_error,
        ] {
            if banner.as_ref().is_some_and(|b| b.is_expired(now, ttl)) {
                *banner = None;
            }
        }
    }
}
