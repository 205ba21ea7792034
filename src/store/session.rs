//! Login session state.
//!
//! A deliberately small state machine: the process starts logged out, a
//! successful authentication logs in, an explicit logout logs out. Nothing
//! is persisted across runs.

/// Whether a user is currently logged in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No active session.
    #[default]
    LoggedOut,
    /// A login attempt succeeded and no logout followed.
    LoggedIn,
}

/// Screen the view layer should render for a given session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// The login form.
    Login,
    /// The home screen with the user directory views.
    Home,
}

/// Tracks the logged-in state and its screen mapping.
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    /// Creates a logged-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether a user is logged in.
    pub fn is_logged_in(&self) -> bool {
        self.state == SessionState::LoggedIn
    }

    /// The screen matching the current state.
    pub fn screen(&self) -> Screen {
        match self.state {
            SessionState::LoggedOut => Screen::Login,
            SessionState::LoggedIn => Screen::Home,
        }
    }

    /// Transitions to logged in. Returns whether a transition occurred; a
    /// no-op when already logged in.
    pub fn login(&mut self) -> bool {
        if self.state == SessionState::LoggedIn {
            return false;
        }

        self.state = SessionState::LoggedIn;
        true
    }

    /// Transitions to logged out. Returns whether a transition occurred; a
    /// no-op when already logged out.
    pub fn logout(&mut self) -> bool {
        if self.state == SessionState::LoggedOut {
            return false;
        }

        self.state = SessionState::LoggedOut;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod login {
        use super::*;

        /// Expect a fresh session to start logged out on the login screen
        #[test]
        fn starts_logged_out() {
            let session = Session::new();

            assert!(!session.is_logged_in());
            assert_eq!(session.state(), SessionState::LoggedOut);
            assert_eq!(session.screen(), Screen::Login);
        }

        /// Expect login to transition to logged in exactly once
        #[test]
        fn transitions_once() {
            let mut session = Session::new();

            assert!(session.login());
            assert!(session.is_logged_in());
            assert_eq!(session.screen(), Screen::Home);

            assert!(!session.login());
            assert!(session.is_logged_in());
        }
    }

    mod logout {
        use super::*;

        /// Expect logout to return to logged out from a live session
        #[test]
        fn transitions_from_logged_in() {
            let mut session = Session::new();
            session.login();

            assert!(session.logout());
            assert!(!session.is_logged_in());
            assert_eq!(session.screen(), Screen::Login);
        }

        /// Expect logout on a logged-out session to be a no-op
        #[test]
        fn no_op_when_logged_out() {
            let mut session = Session::new();

            assert!(!session.logout());
            assert!(!session.is_logged_in());
        }
    }
}
