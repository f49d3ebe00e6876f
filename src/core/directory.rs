use crate::domain::model::{Post, User, UserId};
use crate::domain::services::post_count_for;

/// State owned by the directory view. Both lists arrive independently;
/// either fetch failing simply leaves its list empty.
#[derive(Debug, Default)]
pub struct DirectoryState {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub cursor: usize,
}

impl DirectoryState {
    pub fn set_users(&mut self, users: Vec<User>) {
        self.users = users;
        if self.cursor >= self.users.len() {
            self.cursor = self.users.len().saturating_sub(1);
        }
    }

    pub fn post_count(&self, user_id: UserId) -> usize {
        post_count_for(&self.posts, user_id)
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.users.get(self.cursor)
    }

    pub fn select_next(&mut self) {
        if !self.users.is_empty() {
            self.cursor = (self.cursor + 1).min(self.users.len() - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }
}
