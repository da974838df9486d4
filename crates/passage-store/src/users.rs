//! CRUD operations for [`User`] records.

use passage_shared::schema::InsertUser;
use tracing::debug;

use crate::memory::Collections;
use crate::models::User;

impl Collections {
    /// Insert a new user. Duplicate usernames are accepted.
    pub fn create_user(&mut self, user: InsertUser) -> User {
        let created = self.users.insert_with(|id| User {
            id,
            username: user.username,
            password: user.password,
        });
        debug!(id = created.id, "User created");
        created
    }

    /// Linear scan for the first user with this exact username.
    pub fn find_user_by_username(&self, username: &str) -> Option<User> {
        self.users.iter().find(|u| u.username == username).cloned()
    }
}
