//! Application controller wiring intents to state and view events.
//!
//! This module provides the `App` that owns every piece of render-relevant
//! state (session plus home screen) and serves as the single execution
//! context on which that state changes. Synchronous intents apply
//! immediately; network intents spawn a task and report back as an outcome
//! over a channel, so concurrently in-flight fetches may settle in any
//! order without ever touching state from another task.

use tokio::sync::mpsc;

use crate::{
    api::ApiClient,
    config::Config,
    error::{auth::AuthError, directory::DirectoryError},
    model::{auth::SessionToken, user::User},
    service::{auth::AuthService, directory::DirectoryService},
    store::{
        home::HomeState,
        session::{Screen, Session},
    },
};

/// ID of the featured user shown on the home screen.
pub const FEATURED_USER_ID: i32 = 2;

/// The only user-list page the home screen requests.
pub const USERS_PAGE: u32 = 1;

/// Notice shown after a successful login.
const LOGIN_SUCCESS_NOTICE: &str = "Login successful!";

/// A user action captured by the view layer.
#[derive(Clone, Debug)]
pub enum Intent {
    /// Submit the login form with the entered credentials.
    SubmitLogin {
        /// Username as entered, possibly empty.
        username: String,
        /// Password as entered, possibly empty.
        password: String,
    },
    /// Log out and return to the login screen.
    Logout,
    /// Fetch the featured single user.
    FetchSingleUser,
    /// Empty the single-user slot.
    ClearSingleUser,
    /// Fetch the first page of the user list.
    FetchUsersList,
    /// Empty the users-list slot.
    ClearUsersList,
}

/// A change the view layer should render.
#[derive(Clone, Debug)]
pub enum ViewEvent {
    /// The session transitioned; swap to this screen.
    ScreenChanged(Screen),
    /// A human-readable notice for the user, one per login attempt.
    Notice(String),
    /// Home screen state changed; render this snapshot.
    HomeChanged(HomeState),
}

/// Settled result of a spawned network task, applied on the `App` context.
#[derive(Debug)]
enum TaskOutcome {
    LoginSettled(Result<SessionToken, AuthError>),
    SingleUserSettled(Result<User, DirectoryError>),
    UsersListSettled(Result<Vec<User>, DirectoryError>),
}

/// Owns the client state and applies every mutation to it.
///
/// Drive it either with [`App::run`] on an intent channel, or manually with
/// [`App::handle`] plus [`App::settle_next`] when the caller wants control
/// over when outcomes are applied.
pub struct App {
    api: ApiClient,
    session: Session,
    home: HomeState,
    view_tx: mpsc::UnboundedSender<ViewEvent>,
    outcome_tx: mpsc::UnboundedSender<TaskOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<TaskOutcome>,
    in_flight: usize,
}

impl App {
    /// Creates the controller and the view event stream it renders to.
    ///
    /// # Arguments
    /// - `config` - Resolved process configuration; only the base URL is
    ///   used here
    ///
    /// # Returns
    /// - `(App, UnboundedReceiver<ViewEvent>)` - The controller and the
    ///   receiving end of its view events
    pub fn new(config: &Config) -> (Self, mpsc::UnboundedReceiver<ViewEvent>) {
        let (view_tx, view_rx) = mpsc::unbounded_channel();
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        let app = Self {
            api: ApiClient::from_config(config),
            session: Session::new(),
            home: HomeState::new(),
            view_tx,
            outcome_tx,
            outcome_rx,
            in_flight: 0,
        };

        (app, view_rx)
    }

    /// Current session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current home screen state.
    pub fn home(&self) -> &HomeState {
        &self.home
    }

    /// Applies a user intent on this context.
    ///
    /// Synchronous intents (logout, clears) change state before returning.
    /// Network intents flip their loading flag where one exists, spawn the
    /// request, and return without waiting; the result is applied when the
    /// outcome is received.
    pub fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::SubmitLogin { username, password } => self.submit_login(username, password),
            Intent::Logout => {
                if self.session.logout() {
                    self.emit(ViewEvent::ScreenChanged(self.session.screen()));
                }
            }
            Intent::FetchSingleUser => self.fetch_single_user(),
            Intent::ClearSingleUser => {
                self.home.clear_single_user();
                self.emit_home();
            }
            Intent::FetchUsersList => self.fetch_users_list(),
            Intent::ClearUsersList => {
                self.home.clear_users();
                self.emit_home();
            }
        }
    }

    /// Waits for the next in-flight task to settle and applies its outcome.
    ///
    /// Outcomes arrive in settlement order, not submission order.
    ///
    /// # Returns
    /// - `true` - An outcome was applied
    /// - `false` - Nothing was in flight
    pub async fn settle_next(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }

        // self holds an outcome_tx clone, so recv cannot return None
        if let Some(outcome) = self.outcome_rx.recv().await {
            self.apply(outcome);
        }

        true
    }

    /// Drives the controller until the intent stream closes and every
    /// spawned task has settled.
    ///
    /// # Arguments
    /// - `intents` - Stream of user intents; dropping all senders ends the
    ///   loop once in-flight work drains
    pub async fn run(mut self, mut intents: mpsc::UnboundedReceiver<Intent>) {
        enum Step {
            Intent(Option<Intent>),
            Outcome(Option<TaskOutcome>),
        }

        let mut intents_open = true;

        loop {
            if !intents_open && self.in_flight == 0 {
                break;
            }

            let step = tokio::select! {
                intent = intents.recv(), if intents_open => Step::Intent(intent),
                outcome = self.outcome_rx.recv(), if self.in_flight > 0 => {
                    Step::Outcome(outcome)
                }
            };

            match step {
                Step::Intent(Some(intent)) => self.handle(intent),
                Step::Intent(None) => intents_open = false,
                Step::Outcome(Some(outcome)) => self.apply(outcome),
                Step::Outcome(None) => break,
            }
        }
    }

    /// Spawns a login attempt.
    ///
    /// Input validation happens inside the attempt so that every submission
    /// settles through the same path and produces exactly one notice.
    fn submit_login(&mut self, username: String, password: String) {
        let api = self.api.clone();
        let outcome_tx = self.outcome_tx.clone();
        self.in_flight += 1;

        tokio::spawn(async move {
            let result = AuthService::new(&api)
                .authenticate(&username, &password)
                .await;
            let _ = outcome_tx.send(TaskOutcome::LoginSettled(result));
        });
    }

    /// Spawns a featured-user fetch and marks the slot loading.
    fn fetch_single_user(&mut self) {
        self.home.loading_single_user = true;
        self.emit_home();

        let api = self.api.clone();
        let outcome_tx = self.outcome_tx.clone();
        self.in_flight += 1;

        tokio::spawn(async move {
            let result = DirectoryService::new(&api)
                .fetch_single_user(FEATURED_USER_ID)
                .await;
            let _ = outcome_tx.send(TaskOutcome::SingleUserSettled(result));
        });
    }

    /// Spawns a users-list fetch and marks the slot loading.
    fn fetch_users_list(&mut self) {
        self.home.loading_users = true;
        self.emit_home();

        let api = self.api.clone();
        let outcome_tx = self.outcome_tx.clone();
        self.in_flight += 1;

        tokio::spawn(async move {
            let result = DirectoryService::new(&api).fetch_users_page(USERS_PAGE).await;
            let _ = outcome_tx.send(TaskOutcome::UsersListSettled(result));
        });
    }

    /// Applies one settled task outcome on this context.
    fn apply(&mut self, outcome: TaskOutcome) {
        self.in_flight -= 1;

        match outcome {
            TaskOutcome::LoginSettled(result) => self.apply_login(result),
            TaskOutcome::SingleUserSettled(result) => {
                self.home.loading_single_user = false;

                match result {
                    Ok(user) => self.home.single_user = Some(user),
                    Err(e) => tracing::error!("Failed to fetch single user: {e}"),
                }

                self.emit_home();
            }
            TaskOutcome::UsersListSettled(result) => {
                self.home.loading_users = false;

                match result {
                    Ok(users) => self.home.users = users,
                    Err(e) => tracing::error!("Failed to fetch users list: {e}"),
                }

                self.emit_home();
            }
        }
    }

    /// Applies a settled login attempt.
    ///
    /// A screen change is only emitted when the session actually
    /// transitions; the notice is emitted for every attempt.
    fn apply_login(&mut self, result: Result<SessionToken, AuthError>) {
        match result {
            Ok(_) => {
                if self.session.login() {
                    self.emit(ViewEvent::ScreenChanged(self.session.screen()));
                }
                self.emit(ViewEvent::Notice(LOGIN_SUCCESS_NOTICE.to_string()));
            }
            Err(e) => self.emit(ViewEvent::Notice(e.to_string())),
        }
    }

    fn emit(&self, event: ViewEvent) {
        let _ = self.view_tx.send(event);
    }

    fn emit_home(&self) {
        self.emit(ViewEvent::HomeChanged(self.home.clone()));
    }
}
