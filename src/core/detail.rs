use crate::core::clock::Clock;
use crate::domain::model::{Post, User, UserId};

/// Which pane of the detail view receives list navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailFocus {
    #[default]
    Timezones,
    Posts,
}

/// State owned by the detail view for one mounted user id. Dropped whole on
/// navigation away.
#[derive(Debug, Default)]
pub struct DetailState {
    pub user_id: UserId,
    pub user: Option<User>,
    pub posts: Vec<Post>,
    pub timezones: Vec<String>,
    pub selected_timezone: Option<String>,
    pub clock: Clock,
    /// `Some` holds a copy of the post shown in the open modal; `None` is
    /// closed.
    pub modal: Option<Post>,
    pub focus: DetailFocus,
    pub tz_cursor: usize,
    pub post_cursor: usize,
    seed_generation: u64,
}

impl DetailState {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            ..Self::default()
        }
    }

    /// Stamp a new seed request. Responses carrying an older generation are
    /// stale (the selection changed again in flight) and must be dropped.
    pub fn next_seed_generation(&mut self) -> u64 {
        self.seed_generation += 1;
        self.seed_generation
    }

    pub fn current_seed_generation(&self) -> u64 {
        self.seed_generation
    }

    pub fn set_timezones(&mut self, timezones: Vec<String>) {
        self.timezones = timezones;
        if self.tz_cursor >= self.timezones.len() {
            self.tz_cursor = self.timezones.len().saturating_sub(1);
        }
    }

    pub fn set_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        if self.post_cursor >= self.posts.len() {
            self.post_cursor = self.posts.len().saturating_sub(1);
        }
    }

    pub fn highlighted_timezone(&self) -> Option<&String> {
        self.timezones.get(self.tz_cursor)
    }

    pub fn highlighted_post(&self) -> Option<&Post> {
        self.posts.get(self.post_cursor)
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            DetailFocus::Timezones => DetailFocus::Posts,
            DetailFocus::Posts => DetailFocus::Timezones,
        };
    }

    pub fn select_next(&mut self) {
        match self.focus {
            DetailFocus::Timezones => {
                if !self.timezones.is_empty() {
                    self.tz_cursor = (self.tz_cursor + 1).min(self.timezones.len() - 1);
                }
            }
            DetailFocus::Posts => {
                if !self.posts.is_empty() {
                    self.post_cursor = (self.post_cursor + 1).min(self.posts.len() - 1);
                }
            }
        }
    }

    pub fn select_previous(&mut self) {
        match self.focus {
            DetailFocus::Timezones => self.tz_cursor = self.tz_cursor.saturating_sub(1),
            DetailFocus::Posts => self.post_cursor = self.post_cursor.saturating_sub(1),
        }
    }

    /// Open the modal on the highlighted post, remembering a copy of it.
    pub fn open_modal(&mut self) {
        if let Some(post) = self.highlighted_post().cloned() {
            self.modal = Some(post);
        }
    }

    /// Close the modal, clearing both the open flag and the remembered post.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(user_id: UserId, id: u32, title: &str) -> Post {
        Post {
            user_id,
            id,
            title: title.to_string(),
            body: format!("body of {}", title),
        }
    }

    #[test]
    fn test_modal_copies_highlighted_post() {
        let mut state = DetailState::new(1);
        state.set_posts(vec![post(1, 10, "first"), post(1, 11, "second")]);
        state.focus = DetailFocus::Posts;
        state.select_next();

        state.open_modal();
        let shown = state.modal.as_ref().unwrap();
        assert_eq!(shown.title, "second");
        assert_eq!(shown.body, "body of second");

        state.close_modal();
        assert!(state.modal.is_none());
    }

    #[test]
    fn test_modal_open_close_leaves_clock_untouched() {
        let mut state = DetailState::new(1);
        state.set_posts(vec![post(1, 10, "only")]);
        state.clock.seed(12_345);

        state.open_modal();
        state.close_modal();
        assert_eq!(state.clock, Clock::Running { seconds: 12_345 });
    }

    #[test]
    fn test_open_modal_with_no_posts_is_noop() {
        let mut state = DetailState::new(1);
        state.open_modal();
        assert!(state.modal.is_none());
    }

    #[test]
    fn test_seed_generations_supersede() {
        let mut state = DetailState::new(1);
        let first = state.next_seed_generation();
        let second = state.next_seed_generation();
        assert!(second > first);
        assert_eq!(state.current_seed_generation(), second);
    }

    #[test]
    fn test_focus_routes_navigation() {
        let mut state = DetailState::new(1);
        state.set_timezones(vec!["Asia/Kolkata".to_string(), "Europe/London".to_string()]);
        state.set_posts(vec![post(1, 10, "a"), post(1, 11, "b")]);

        state.select_next();
        assert_eq!(state.tz_cursor, 1);
        assert_eq!(state.post_cursor, 0);

        state.toggle_focus();
        state.select_next();
        assert_eq!(state.post_cursor, 1);
        assert_eq!(state.tz_cursor, 1);
    }
}
