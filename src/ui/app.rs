use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::task::JoinHandle;

use crate::core::{DetailFocus, DetailState, DirectoryState, Route};
use crate::domain::model::{Post, User, UserId};
use crate::domain::ports::{TimeApi, UserApi};

/// Result of a background task, delivered to the UI thread. Fetch failures
/// never become events; the task logs them and the dependent state stays
/// empty.
#[derive(Debug)]
pub enum AppEvent {
    UsersLoaded(Vec<User>),
    AllPostsLoaded(Vec<Post>),
    UserLoaded(User),
    UserPostsLoaded { user_id: UserId, posts: Vec<Post> },
    TimezonesLoaded(Vec<String>),
    ClockSeeded { generation: u64, epoch_seconds: i64 },
    ClockTick,
}

/// Application shell: owns the route, the mounted view's state, and the
/// channel that background tasks report into.
pub struct App {
    user_api: Arc<dyn UserApi>,
    time_api: Arc<dyn TimeApi>,
    runtime: tokio::runtime::Handle,
    tx: Sender<AppEvent>,
    rx: Receiver<AppEvent>,
    ticker: Option<JoinHandle<()>>,
    pub route: Route,
    pub directory: DirectoryState,
    pub detail: Option<DetailState>,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        user_api: Arc<dyn UserApi>,
        time_api: Arc<dyn TimeApi>,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            user_api,
            time_api,
            runtime,
            tx,
            rx,
            ticker: None,
            route: Route::Directory,
            directory: DirectoryState::default(),
            detail: None,
            should_quit: false,
        }
    }

    /// Next pending background event, if any. Non-blocking; the draw loop
    /// drains this every frame.
    pub fn poll_event(&self) -> Option<AppEvent> {
        self.rx.try_recv().ok()
    }

    /// Block until a background event arrives or `timeout` expires. Test
    /// harness entry point; the draw loop uses `poll_event`.
    pub fn wait_event(&self, timeout: Duration) -> Option<AppEvent> {
        self.rx.recv_timeout(timeout).ok()
    }

    pub fn ticker_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Mount the directory view: discard whatever was mounted and issue the
    /// two independent list fetches.
    pub fn open_directory(&mut self) {
        self.stop_ticker();
        self.detail = None;
        self.directory = DirectoryState::default();
        self.route = Route::Directory;

        let api = Arc::clone(&self.user_api);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            match api.fetch_users().await {
                Ok(users) => {
                    let _ = tx.send(AppEvent::UsersLoaded(users));
                }
                Err(e) => tracing::error!("Error fetching users: {}", e),
            }
        });

        let api = Arc::clone(&self.user_api);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            match api.fetch_posts().await {
                Ok(posts) => {
                    let _ = tx.send(AppEvent::AllPostsLoaded(posts));
                }
                Err(e) => tracing::error!("Error fetching posts: {}", e),
            }
        });
    }

    /// Mount the detail view for `user_id`: fresh state, three independent
    /// fetches, and the view's ticker.
    pub fn open_detail(&mut self, user_id: UserId) {
        self.directory = DirectoryState::default();
        self.detail = Some(DetailState::new(user_id));
        self.route = Route::UserDetails { user_id };

        let api = Arc::clone(&self.user_api);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            match api.fetch_user(user_id).await {
                Ok(user) => {
                    let _ = tx.send(AppEvent::UserLoaded(user));
                }
                Err(e) => tracing::error!("Error fetching user {}: {}", user_id, e),
            }
        });

        let api = Arc::clone(&self.user_api);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            match api.fetch_user_posts(user_id).await {
                Ok(posts) => {
                    let _ = tx.send(AppEvent::UserPostsLoaded { user_id, posts });
                }
                Err(e) => tracing::error!("Error fetching posts for user {}: {}", user_id, e),
            }
        });

        let api = Arc::clone(&self.time_api);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            match api.fetch_timezones().await {
                Ok(zones) => {
                    let _ = tx.send(AppEvent::TimezonesLoaded(zones));
                }
                Err(e) => tracing::error!("Error fetching timezones: {}", e),
            }
        });

        self.start_ticker();
    }

    /// Apply a background event to the mounted view. Events for a view that
    /// has been navigated away from (or a superseded seed request) are
    /// dropped.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::UsersLoaded(users) => {
                if self.route == Route::Directory {
                    self.directory.set_users(users);
                }
            }
            AppEvent::AllPostsLoaded(posts) => {
                if self.route == Route::Directory {
                    self.directory.posts = posts;
                }
            }
            AppEvent::UserLoaded(user) => {
                if let Some(detail) = &mut self.detail {
                    if user.id == detail.user_id {
                        detail.user = Some(user);
                    }
                }
            }
            AppEvent::UserPostsLoaded { user_id, posts } => {
                if let Some(detail) = &mut self.detail {
                    if user_id == detail.user_id {
                        detail.set_posts(posts);
                    }
                }
            }
            AppEvent::TimezonesLoaded(zones) => {
                if let Some(detail) = &mut self.detail {
                    detail.set_timezones(zones);
                }
            }
            AppEvent::ClockSeeded {
                generation,
                epoch_seconds,
            } => {
                let mut seeded = false;
                if let Some(detail) = &mut self.detail {
                    if generation == detail.current_seed_generation() {
                        detail.clock.seed(epoch_seconds);
                        seeded = true;
                    } else {
                        tracing::debug!("Dropping stale clock seed (generation {})", generation);
                    }
                }
                // A seed restarts a clock that was paused; the ticker must
                // follow it back to life.
                if seeded && self.ticker.is_none() {
                    self.start_ticker();
                }
            }
            AppEvent::ClockTick => {
                if let Some(detail) = &mut self.detail {
                    detail.clock.tick();
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // An open modal captures all input, so keys never reach the view
        // underneath it.
        if let Some(detail) = &mut self.detail {
            if detail.modal.is_some() {
                if matches!(
                    key.code,
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')
                ) {
                    detail.close_modal();
                }
                return;
            }
        }

        match self.route {
            Route::Directory => self.handle_directory_key(key),
            Route::UserDetails { .. } => self.handle_detail_key(key),
        }
    }

    fn handle_directory_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.directory.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.directory.select_previous(),
            KeyCode::Enter => {
                if let Some(user) = self.directory.selected_user() {
                    let user_id = user.id;
                    self.open_detail(user_id);
                }
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Char('b') => self.open_directory(),
            KeyCode::Tab => {
                if let Some(detail) = &mut self.detail {
                    detail.toggle_focus();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(detail) = &mut self.detail {
                    detail.select_next();
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(detail) = &mut self.detail {
                    detail.select_previous();
                }
            }
            KeyCode::Char('p') | KeyCode::Char(' ') => self.toggle_pause(),
            KeyCode::Enter => {
                let focus = match &self.detail {
                    Some(detail) => detail.focus,
                    None => return,
                };
                match focus {
                    DetailFocus::Timezones => self.select_timezone(),
                    DetailFocus::Posts => {
                        if let Some(detail) = &mut self.detail {
                            detail.open_modal();
                        }
                    }
                }
            }
            _ => {}
        }
    }

    /// Commit the highlighted timezone and fetch its current time. No fetch
    /// is ever issued without a concrete selection.
    fn select_timezone(&mut self) {
        let Some(detail) = &mut self.detail else {
            return;
        };
        let Some(zone) = detail.highlighted_timezone().cloned() else {
            return;
        };

        detail.selected_timezone = Some(zone.clone());
        let generation = detail.next_seed_generation();

        let api = Arc::clone(&self.time_api);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            match api.fetch_current_time(&zone).await {
                Ok(epoch_seconds) => {
                    let _ = tx.send(AppEvent::ClockSeeded {
                        generation,
                        epoch_seconds,
                    });
                }
                Err(e) => tracing::error!("Error fetching time for {}: {}", zone, e),
            }
        });
    }

    fn toggle_pause(&mut self) {
        let Some(detail) = &mut self.detail else {
            return;
        };
        if detail.clock.toggle_pause() {
            if detail.clock.is_paused() {
                self.stop_ticker();
            } else {
                self.start_ticker();
            }
        }
    }

    /// Spawn the one-second ticker. Any previous ticker is cancelled first,
    /// so the mounted view owns at most one.
    fn start_ticker(&mut self) {
        self.stop_ticker();
        let tx = self.tx.clone();
        self.ticker = Some(self.runtime.spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            // The first tick completes immediately; the clock starts moving
            // one full second after the ticker does.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(AppEvent::ClockTick).is_err() {
                    break;
                }
            }
        }));
    }

    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}
