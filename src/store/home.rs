//! Home screen state.

use crate::model::user::User;

/// State backing the home screen.
///
/// The two slots are independent: each is replaced wholesale by its own
/// fetch and emptied by its own clear, never merged incrementally.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HomeState {
    /// The featured single user, when fetched.
    pub single_user: Option<User>,
    /// The current page of users, in server order.
    pub users: Vec<User>,
    /// Whether a single-user fetch is in flight.
    pub loading_single_user: bool,
    /// Whether a users-list fetch is in flight.
    pub loading_users: bool,
}

impl HomeState {
    /// Creates an empty home screen state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties the single-user slot. Idempotent, touches nothing else.
    pub fn clear_single_user(&mut self) {
        self.single_user = None;
    }

    /// Empties the users-list slot. Idempotent, touches nothing else.
    pub fn clear_users(&mut self) {
        self.users.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(id: i32) -> User {
        User {
            id,
            email: format!("user.{id}@reqres.in"),
            first_name: format!("First{id}"),
            last_name: format!("Last{id}"),
            avatar_url: format!("https://reqres.in/img/faces/{id}-image.jpg"),
        }
    }

    mod clear_single_user {
        use super::*;

        /// Expect clearing twice to leave the slot empty and the list alone
        #[test]
        fn idempotent_and_independent() {
            let mut home = HomeState::new();
            home.single_user = Some(sample_user(2));
            home.users = vec![sample_user(1), sample_user(3)];

            home.clear_single_user();
            assert!(home.single_user.is_none());
            assert_eq!(home.users.len(), 2);

            home.clear_single_user();
            assert!(home.single_user.is_none());
            assert_eq!(home.users.len(), 2);
        }
    }

    mod clear_users {
        use super::*;

        /// Expect clearing twice to empty the list and leave the single user alone
        #[test]
        fn idempotent_and_independent() {
            let mut home = HomeState::new();
            home.single_user = Some(sample_user(2));
            home.users = vec![sample_user(1), sample_user(3)];

            home.clear_users();
            assert!(home.users.is_empty());
            assert_eq!(home.single_user, Some(sample_user(2)));

            home.clear_users();
            assert!(home.users.is_empty());
            assert_eq!(home.single_user, Some(sample_user(2)));
        }
    }
}
