//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle: key events become messages, messages update the
//! state and may request an [`Effect`], effects are run against the task
//! service and their outcomes are fed back as messages.

use std::collections::VecDeque;
use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
};
use tarefas_api::TaskApi;
use tarefas_config::Config;
use tarefas_protocol::{Message, validate};
use tracing::debug;

use crate::{
    AppState, Focus, Screen,
    effect::{Effect, run_effect},
    event::{InputMode, event_to_message, poll_event},
    layout::{
        FORM_HEIGHT, HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH, STATUS_HEIGHT,
        SUMMARY_HEIGHT,
    },
    state::AuthTab,
    terminal::AppTerminal,
    widgets::{
        render_auth, render_delete_confirm, render_edit_modal, render_header, render_help_overlay,
        render_status_bar, render_summary, render_task_form, render_task_list,
    },
};

/// The main application struct.
///
/// Owns the application state and the configuration, and provides the main
/// event loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    config: Config,
    should_quit: bool,
}

impl App {
    /// Creates a new application on the auth screen.
    ///
    /// # Examples
    ///
    /// ```
    /// use tarefas_config::Config;
    /// use tarefas_tui::{App, Screen};
    ///
    /// let app = App::new(Config::default());
    /// assert_eq!(app.state().screen, Screen::Auth);
    /// ```
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            state: AppState::new(config.default_year),
            config,
            should_quit: false,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns whether a quit was requested.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns how key presses should be interpreted right now.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if self.state.pending_delete.is_some() {
            InputMode::Confirm
        } else if self.state.help_visible {
            InputMode::Command
        } else if self.state.edit.is_some()
            || self.state.screen == Screen::Auth
            || self.state.focus.is_text()
        {
            InputMode::Text
        } else {
            InputMode::Command
        }
    }

    /// Updates the application state based on a message.
    ///
    /// Returns the remote call the message requires, if any. Outcome
    /// messages are always applied. Otherwise the topmost overlay decides
    /// what a message means: the help overlay is dismissed by any key, the
    /// delete prompt only answers `Confirm` and `Cancel`, and the edit modal
    /// captures text input.
    pub fn update(&mut self, msg: Message) -> Option<Effect> {
        if msg.is_outcome() {
            return self.apply_outcome(msg);
        }

        if matches!(msg, Message::Quit) {
            self.should_quit = true;
            return None;
        }

        if self.state.help_visible {
            self.state.toggle_help();
            return None;
        }

        if self.state.pending_delete.is_some() {
            return match msg {
                Message::Confirm => self
                    .state
                    .pending_delete
                    .take()
                    .map(|id| Effect::DeleteTask { id }),
                Message::Cancel | Message::Escape => {
                    self.state.pending_delete = None;
                    None
                }
                _ => None,
            };
        }

        if self.state.edit.is_some() {
            return self.update_edit(msg);
        }

        match msg {
            Message::Escape => {
                if self.state.screen == Screen::App && self.state.focus.is_text() {
                    self.state.focus = Focus::TaskList;
                }
            }
            Message::Submit => return self.submit(),
            Message::NextField => self.state.next_field(),
            Message::PrevField => self.state.prev_field(),
            Message::SwitchAuthTab => {
                if self.state.screen == Screen::Auth {
                    self.state.switch_auth_tab();
                }
            }
            Message::Input { ch } => self.state.input_char(ch),
            Message::Backspace => self.state.backspace(),
            Message::NavigateUp => {
                if self.state.focus == Focus::TaskList {
                    self.state.navigate_up();
                }
            }
            Message::NavigateDown => {
                if self.state.focus == Focus::TaskList {
                    self.state.navigate_down();
                }
            }
            Message::SetFilter { filter } => self.state.set_filter(filter),
            Message::ToggleSelected => {
                return self
                    .selected_id()
                    .map(|id| Effect::ToggleTask { id });
            }
            Message::EditSelected => {
                if self.state.screen == Screen::App {
                    self.state.open_edit();
                }
            }
            Message::DeleteSelected => {
                if self.state.screen == Screen::App {
                    self.state.request_delete();
                }
            }
            Message::Refresh => return self.load_tasks(),
            Message::Logout => {
                if self.state.session.is_some() {
                    self.state.sign_out();
                }
            }
            Message::ToggleHelp => self.state.toggle_help(),
            // Confirm and Cancel only mean something while the prompt is open
            _ => {}
        }
        None
    }

    fn apply_outcome(&mut self, msg: Message) -> Option<Effect> {
        match msg {
            Message::SignedIn { user } => {
                self.state.sign_in(user);
                self.load_tasks()
            }
            Message::AuthFailed { message } => {
                self.state.show_auth_error(message);
                None
            }
            Message::TasksLoaded { tasks } => {
                // A sync finishing after logout must not repopulate the list.
                if self.state.session.is_some() {
                    self.state.replace_tasks(tasks);
                }
                None
            }
            Message::TaskCreated => {
                self.state.reset_task_form();
                self.load_tasks()
            }
            Message::TaskChanged => self.load_tasks(),
            Message::EditFinished => {
                self.state.close_edit();
                self.load_tasks()
            }
            _ => None,
        }
    }

    fn update_edit(&mut self, msg: Message) -> Option<Effect> {
        match msg {
            Message::Input { ch } => self.state.input_char(ch),
            Message::Backspace => self.state.backspace(),
            Message::Escape | Message::Cancel => self.state.close_edit(),
            Message::Submit => {
                let edit = self.state.edit.as_ref()?;
                // An empty description keeps the modal open without a request.
                let description = validate::edited_description(edit.input.value()).ok()?;
                return Some(Effect::EditTask {
                    id: edit.task_id,
                    description,
                });
            }
            _ => {}
        }
        None
    }

    fn submit(&mut self) -> Option<Effect> {
        match self.state.screen {
            Screen::Auth => self.submit_auth(),
            Screen::App => self.submit_task(),
        }
    }

    fn submit_auth(&mut self) -> Option<Effect> {
        let effect = match self.state.auth_tab {
            AuthTab::Login => {
                let login = &self.state.login;
                validate::login(login.email.value(), login.password.value()).map(Effect::Login)
            }
            AuthTab::Register => {
                let register = &self.state.register;
                validate::registration(
                    register.name.value(),
                    register.email.value(),
                    register.password.value(),
                )
                .map(Effect::Register)
            }
        };

        match effect {
            Ok(effect) => Some(effect),
            Err(err) => {
                self.state.show_auth_error(err.to_string());
                None
            }
        }
    }

    fn submit_task(&mut self) -> Option<Effect> {
        let user_id = self.state.session.as_ref()?.id;
        let form = &self.state.form;
        match validate::new_task(
            user_id,
            form.description.value(),
            form.day.value(),
            form.month.value(),
            form.year.value(),
        ) {
            Ok(task) => Some(Effect::CreateTask(task)),
            Err(err) => {
                self.state.show_app_error(err.to_string());
                None
            }
        }
    }

    fn load_tasks(&self) -> Option<Effect> {
        self.state
            .session
            .as_ref()
            .map(|user| Effect::LoadTasks { user_id: user.id })
    }

    fn selected_id(&self) -> Option<tarefas_protocol::TaskId> {
        if self.state.screen != Screen::App {
            return None;
        }
        self.state.selected_task().map(|task| task.id)
    }

    /// Clears banners that have been visible for the configured duration.
    pub fn tick(&mut self, now: Instant) {
        self.state
            .expire_banners(now, self.config.banner_duration());
    }

    /// Applies `msg`, runs every effect it leads to and applies their
    /// outcomes, until nothing is left to do.
    ///
    /// Effects run one at a time, in order.
    pub async fn dispatch(&mut self, msg: Message, api: &dyn TaskApi) {
        let mut queue = VecDeque::from([msg]);
        while let Some(msg) = queue.pop_front() {
            if let Some(effect) = self.update(msg) {
                debug!(?effect, "running effect");
                queue.extend(run_effect(api, effect).await);
            }
        }
    }

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes:
    /// - If terminal is below minimum dimensions, shows a "terminal too small" message.
    /// - If terminal is tight (below `MIN_HEIGHT_WITH_HEADER`), hides the header to reclaim space.
    /// - Otherwise, renders normally with header.
    pub fn view(&self, frame: &mut Frame) {
        let area = frame.area();

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            Self::render_terminal_too_small(frame, area);
            return;
        }

        let content_area = if area.height >= MIN_HEIGHT_WITH_HEADER {
            let [header, content] =
                Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
                    .areas(area);
            let greeting = self.state.greeting();
            render_header(greeting.as_deref(), header, frame.buffer_mut());
            content
        } else {
            area
        };

        match self.state.screen {
            Screen::Auth => render_auth(&self.state, content_area, frame.buffer_mut()),
            Screen::App => self.render_app(frame, content_area),
        }

        let buf = frame.buffer_mut();
        if let Some(edit) = &self.state.edit {
            render_edit_modal(edit, area, buf);
        }
        if self.state.pending_delete.is_some() {
            render_delete_confirm(area, buf);
        }
        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    /// Renders the summary, the new-task form, the list and the status line.
    fn render_app(&self, frame: &mut Frame, area: Rect) {
        let [summary, form, list, status] = Layout::vertical([
            Constraint::Length(SUMMARY_HEIGHT),
            Constraint::Length(FORM_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .areas(area);

        let buf = frame.buffer_mut();
        render_summary(self.state.summary(), self.state.filter, summary, buf);
        render_task_form(&self.state, form, buf);
        render_task_list(&self.state, list, buf);
        render_status_bar(&self.state, status, buf);
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(frame: &mut Frame, area: Rect) {
        let message = format!(
            "terminal muito pequeno ({}×{})\nmínimo: {}×{}",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Runs the main application loop until the user quits.
    ///
    /// Each iteration expires banners, renders, waits briefly for a key and
    /// dispatches the resulting message. Remote calls are awaited inside the
    /// iteration, so keys pressed meanwhile are handled afterwards, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail. Task service failures
    /// are never returned; they are logged or shown as banners.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tarefas_api::InMemoryTaskApi;
    /// use tarefas_config::Config;
    /// use tarefas_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let api = InMemoryTaskApi::with_demo_data();
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(Config::default());
    ///     app.run(&mut terminal, &api).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal, api: &dyn TaskApi) -> anyhow::Result<()> {
        loop {
            self.tick(Instant::now());
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()? {
                if let Some(msg) = event_to_message(&event, self.input_mode()) {
                    self.dispatch(msg, api).await;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Duration;
    use tarefas_api::InMemoryTaskApi;
    use tarefas_protocol::Filter;

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            assert!(app.update(Message::Input { ch }).is_none());
        }
    }

    async fn signed_in(api: &InMemoryTaskApi) -> App {
        let mut app = App::new(Config::default());
        type_text(&mut app, "a@b.com");
        app.update(Message::NextField);
        type_text(&mut app, "1234");
        app.dispatch(Message::Submit, api).await;
        app
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn descriptions(app: &App) -> Vec<&str> {
        app.state()
            .tasks
            .iter()
            .map(|t| t.description.as_str())
            .collect()
    }

    #[test]
    fn app_quit_message_sets_should_quit() {
        let mut app = App::new(Config::default());
        assert!(!app.should_quit());
        app.update(Message::Quit);
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn login_switches_screen_and_syncs() {
        let api = InMemoryTaskApi::with_demo_data();
        let app = signed_in(&api).await;

        assert_eq!(app.state().screen, Screen::App);
        let user = app.state().session.as_ref().unwrap();
        assert_eq!((user.id, user.name.as_str()), (1, "Ana"));
        assert_eq!(
            api.request_log().await,
            vec!["POST /login", "GET /tarefas?idUsuario=1"]
        );
        assert_eq!(
            descriptions(&app),
            vec!["comprar leite", "pagar conta de luz", "marcar dentista"]
        );
        assert_eq!(app.state().selected, Some(0));
    }

    #[tokio::test]
    async fn empty_login_fails_locally() {
        let api = InMemoryTaskApi::with_demo_data();
        let mut app = App::new(Config::default());
        type_text(&mut app, "a@b.com");

        app.dispatch(Message::Submit, &api).await;

        assert_eq!(
            app.state().login_error.as_ref().map(|b| b.message.as_str()),
            Some("preencha todos os campos.")
        );
        assert!(api.request_log().await.is_empty());
    }

    #[tokio::test]
    async fn wrong_password_shows_server_message() {
        let api = InMemoryTaskApi::with_demo_data();
        let mut app = App::new(Config::default());
        type_text(&mut app, "a@b.com");
        app.update(Message::NextField);
        type_text(&mut app, "0000");

        app.dispatch(Message::Submit, &api).await;

        assert_eq!(app.state().screen, Screen::Auth);
        assert_eq!(
            app.state().login_error.as_ref().map(|b| b.message.as_str()),
            Some("email ou senha incorretos.")
        );
    }

    #[tokio::test]
    async fn short_password_is_rejected_before_register() {
        let api = InMemoryTaskApi::with_demo_data();
        let mut app = App::new(Config::default());
        app.update(Message::SwitchAuthTab);
        type_text(&mut app, "Bia");
        app.update(Message::NextField);
        type_text(&mut app, "bia@x.com");
        app.update(Message::NextField);
        type_text(&mut app, "123");

        app.dispatch(Message::Submit, &api).await;
        assert_eq!(
            app.state()
                .register_error
                .as_ref()
                .map(|b| b.message.as_str()),
            Some("senha muito curta (mín. 4 caracteres).")
        );
        assert!(api.request_log().await.is_empty());

        type_text(&mut app, "4");
        app.dispatch(Message::Submit, &api).await;
        assert_eq!(app.state().session.as_ref().map(|u| u.id), Some(2));
        assert!(app.state().tasks.is_empty());
    }

    #[tokio::test]
    async fn create_task_resets_form_and_resyncs() {
        let api = InMemoryTaskApi::with_demo_data();
        let mut app = signed_in(&api).await;

        app.update(Message::NextField);
        type_text(&mut app, "  ligar pro banco ");
        app.update(Message::NextField);
        type_text(&mut app, "5");
        app.update(Message::NextField);
        type_text(&mut app, "3");
        app.update(Message::NextField);
        app.update(Message::Backspace);
        type_text(&mut app, "7");
        app.dispatch(Message::Submit, &api).await;

        let created = app.state().tasks.last().unwrap();
        assert_eq!(created.description, "ligar pro banco");
        assert_eq!(created.due.label().as_deref(), Some("05/03/2027"));

        let form = &app.state().form;
        assert!(form.description.is_empty());
        assert!(form.day.is_empty());
        assert!(form.month.is_empty());
        assert_eq!(form.year.value(), "2026");

        let log = api.request_log().await;
        assert_eq!(&log[2..], ["POST /tarefas", "GET /tarefas?idUsuario=1"]);
    }

    #[tokio::test]
    async fn empty_description_never_reaches_service() {
        let api = InMemoryTaskApi::with_demo_data();
        let mut app = signed_in(&api).await;
        app.update(Message::NextField);
        type_text(&mut app, "   ");

        app.dispatch(Message::Submit, &api).await;

        assert_eq!(
            app.state().app_error.as_ref().map(|b| b.message.as_str()),
            Some("escreva uma descrição.")
        );
        assert_eq!(api.request_log().await.len(), 2);
    }

    #[tokio::test]
    async fn toggle_flips_selected_task() {
        let api = InMemoryTaskApi::with_demo_data();
        let mut app = signed_in(&api).await;

        app.dispatch(Message::ToggleSelected, &api).await;

        assert!(app.state().tasks[0].done);
        assert_eq!(app.state().summary().completed, 2);
    }

    #[tokio::test]
    async fn delete_asks_first() {
        let api = InMemoryTaskApi::with_demo_data();
        let mut app = signed_in(&api).await;
        app.dispatch(Message::NavigateDown, &api).await;

        app.dispatch(Message::DeleteSelected, &api).await;
        assert_eq!(app.state().pending_delete, Some(2));
        assert_eq!(app.input_mode(), InputMode::Confirm);

        app.dispatch(Message::Cancel, &api).await;
        assert!(app.state().pending_delete.is_none());
        assert_eq!(api.request_log().await.len(), 2);

        app.dispatch(Message::DeleteSelected, &api).await;
        app.dispatch(Message::Confirm, &api).await;
        assert_eq!(descriptions(&app), vec!["comprar leite", "marcar dentista"]);
        assert_eq!(app.state().selected, Some(1));
    }

    #[tokio::test]
    async fn edit_replaces_description() {
        let api = InMemoryTaskApi::with_demo_data();
        let mut app = signed_in(&api).await;

        app.dispatch(Message::EditSelected, &api).await;
        assert_eq!(app.input_mode(), InputMode::Text);
        for _ in 0.."leite".len() {
            app.update(Message::Backspace);
        }
        type_text(&mut app, "pão");
        app.dispatch(Message::Submit, &api).await;

        assert!(app.state().edit.is_none());
        assert_eq!(descriptions(&app)[0], "comprar pão");
    }

    #[tokio::test]
    async fn edit_with_blank_text_stays_open() {
        let api = InMemoryTaskApi::with_demo_data();
        let mut app = signed_in(&api).await;
        app.update(Message::EditSelected);
        for _ in 0.."comprar leite".len() {
            app.update(Message::Backspace);
        }

        app.dispatch(Message::Submit, &api).await;

        assert!(app.state().edit.is_some());
        assert_eq!(api.request_log().await.len(), 2);

        app.update(Message::Escape);
        assert!(app.state().edit.is_none());
    }

    #[tokio::test]
    async fn outage_keeps_list_unchanged() {
        let api = InMemoryTaskApi::with_demo_data();
        let mut app = signed_in(&api).await;
        api.set_available(false).await;

        app.dispatch(Message::ToggleSelected, &api).await;
        app.dispatch(Message::Refresh, &api).await;

        assert_eq!(app.state().tasks.len(), 3);
        assert!(!app.state().tasks[0].done);
    }

    #[tokio::test]
    async fn filter_does_not_change_summary() {
        let api = InMemoryTaskApi::with_demo_data();
        let mut app = signed_in(&api).await;

        app.update(Message::SetFilter {
            filter: Filter::Completed,
        });

        assert_eq!(app.state().visible_tasks().len(), 1);
        let summary = app.state().summary();
        assert_eq!((summary.total, summary.pending, summary.completed), (3, 2, 1));
    }

    #[tokio::test]
    async fn logout_returns_to_auth() {
        let api = InMemoryTaskApi::with_demo_data();
        let mut app = signed_in(&api).await;

        app.update(Message::Logout);

        assert_eq!(app.state().screen, Screen::Auth);
        assert!(app.state().session.is_none());
        assert!(app.state().tasks.is_empty());
        assert!(app.state().login.email.is_empty());

        // A late sync must not leak tasks into the auth screen.
        app.update(Message::TasksLoaded {
            tasks: api.list_tasks(1).await.unwrap(),
        });
        assert!(app.state().tasks.is_empty());
    }

    #[test]
    fn help_dismisses_on_any_key() {
        let mut app = App::new(Config::default());
        app.update(Message::ToggleHelp);
        assert!(app.state().help_visible);

        app.update(Message::Input { ch: 'x' });
        assert!(!app.state().help_visible);
        assert!(app.state().login.email.is_empty());
    }

    #[test]
    fn outcomes_apply_under_help() {
        let mut app = App::new(Config::default());
        app.update(Message::ToggleHelp);

        let effect = app.update(Message::SignedIn {
            user: tarefas_protocol::User::new(1, "Ana", "a@b.com"),
        });

        assert!(matches!(effect, Some(Effect::LoadTasks { user_id: 1 })));
        assert!(app.state().help_visible);
        assert_eq!(app.state().screen, Screen::App);
    }

    #[tokio::test]
    async fn input_mode_follows_focus() {
        let api = InMemoryTaskApi::with_demo_data();
        assert_eq!(App::new(Config::default()).input_mode(), InputMode::Text);

        let mut app = signed_in(&api).await;
        assert_eq!(app.input_mode(), InputMode::Command);
        app.update(Message::NextField);
        assert_eq!(app.input_mode(), InputMode::Text);
        app.update(Message::Escape);
        assert_eq!(app.state().focus, Focus::TaskList);
    }

    #[test]
    fn banners_expire_on_tick() {
        let mut app = App::new(Config::default());
        app.update(Message::Submit);
        let shown = app.state().login_error.as_ref().unwrap().shown_at;

        app.tick(shown + Duration::from_secs(1));
        assert!(app.state().login_error.is_some());

        app.tick(shown + Duration::from_secs(3));
        assert!(app.state().login_error.is_none());
    }

    #[tokio::test]
    async fn view_renders_task_screen() {
        let api = InMemoryTaskApi::with_demo_data();
        let app = signed_in(&api).await;

        let content = render(&app, 80, 24);

        assert!(content.contains("olá, Ana"));
        assert!(content.contains("total 3"));
        assert!(content.contains("[ ] comprar leite"));
        assert!(content.contains("pagar conta de luz"));
        assert!(content.contains('✔'));
        assert!(content.contains("05/03/2026"));
        assert!(content.contains("20/03/2026"));
        assert!(!content.contains("tarefa antiga"));
    }

    #[test]
    fn view_renders_auth_screen() {
        let app = App::new(Config::default());
        let content = render(&app, 80, 24);

        assert!(content.contains("entrar"));
        assert!(content.contains(" email "));
        assert!(content.contains("? ajuda"));
    }

    #[test]
    fn view_shows_too_small_message() {
        let app = App::new(Config::default());

        let content = render(&app, 80, MIN_HEIGHT - 1);
        assert!(content.contains("terminal muito pequeno"));

        let content = render(&app, MIN_WIDTH - 1, 24);
        assert!(content.contains("terminal muito pequeno"));
        assert!(!content.contains("? ajuda"));
    }

    #[test]
    fn view_hides_header_in_compact_mode() {
        let app = App::new(Config::default());

        let compact = render(&app, 80, MIN_HEIGHT_WITH_HEADER - 1);
        assert!(!compact.contains("? ajuda"));
        assert!(compact.contains("entrar"));

        let full = render(&app, 80, MIN_HEIGHT_WITH_HEADER);
        assert!(full.contains("? ajuda"));
    }

    #[tokio::test]
    async fn view_draws_delete_prompt() {
        let api = InMemoryTaskApi::with_demo_data();
        let mut app = signed_in(&api).await;
        app.update(Message::DeleteSelected);

        assert!(render(&app, 80, 24).contains("deletar esta tarefa?"));
    }
}
