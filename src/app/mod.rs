//! Application shell.
//!
//! [`App`] owns the top-level [`ShellMode`], the active [`MainTab`], both
//! flow controllers and the theme. Flows report completion by sending an
//! [`AppMessage`] on the shell's channel; the shell applies the resulting
//! mode change when it drains that channel.

mod chat;
mod handlers;
mod navigation;
mod types;

pub use chat::{ChatMessage, ChatSession, Sender};
pub use handlers::LANDING_ACTIONS;
pub use types::{AppMessage, Cursors, MainTab, ShellMode};

use tokio::sync::mpsc;

use crate::catalog::ProgressBook;
use crate::config::ShellConfig;
use crate::error::NavResult;
use crate::navigation::{CourseExplorer, OnboardingFlow, OnboardingMethod};
use crate::theme::{ThemeState, ThemeStore};
use crate::widgets::TextInput;

/// Main application state
pub struct App {
    pub mode: ShellMode,
    pub active_tab: MainTab,
    /// Onboarding flow; reset whenever onboarding is (re-)entered
    pub onboarding: OnboardingFlow,
    /// Course-exploration flow owned by the Courses tab
    pub courses: CourseExplorer<ProgressBook>,
    pub theme: ThemeState,
    pub config: ShellConfig,
    /// Flag to indicate the app should quit
    pub should_quit: bool,
    /// Set when state changed and the next loop iteration must redraw
    pub needs_redraw: bool,
    pub tick_count: u64,
    pub cursors: Cursors,
    /// Shared editor for onboarding answers and the chat composer
    pub input: TextInput,
    /// Present exactly while the chat view is on top of the course stack
    pub chat: Option<ChatSession>,
    /// Method of the last completed onboarding run
    pub onboarding_method: Option<OnboardingMethod>,
    /// Courses finished this session, in completion order
    pub courses_completed: Vec<u32>,
    /// One-line feedback shown in the footer
    pub status: Option<String>,
    /// Receiver for completion messages (taken by the run loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender handed to flow completion hooks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    /// Build the shell, loading the theme from the configured data dir.
    pub fn new(config: ShellConfig) -> Self {
        let store = ThemeStore::in_dir(&config.resolved_data_dir());
        Self::with_theme_store(config, store)
    }

    pub fn with_theme_store(config: ShellConfig, store: ThemeStore) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let onboarding_tx = message_tx.clone();
        let onboarding =
            OnboardingFlow::new().with_completion_hook(Box::new(move |method: OnboardingMethod| {
                let _ = onboarding_tx.send(AppMessage::OnboardingCompleted { method });
            }));

        let course_tx = message_tx.clone();
        let courses = CourseExplorer::new(ProgressBook::seeded()).with_completion_hook(Box::new(
            move |course_id: u32| {
                let _ = course_tx.send(AppMessage::CourseCompleted { course_id });
            },
        ));

        tracing::info!(
            mode = config.initial_mode.as_str(),
            preserve_course_depth = config.preserve_course_depth,
            "shell created"
        );

        Self {
            mode: config.initial_mode,
            active_tab: MainTab::default(),
            onboarding,
            courses,
            theme: ThemeState::load(store),
            config,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            cursors: Cursors::default(),
            input: TextInput::new(),
            chat: None,
            onboarding_method: None,
            courses_completed: Vec::new(),
            status: None,
            message_rx: Some(message_rx),
            message_tx,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
        self.mark_dirty();
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    /// Apply a flow action result.
    ///
    /// Handlers check locks and origins before acting, so an `Err` here is a
    /// caller bug: logged, surfaced in the footer, and fatal in debug builds.
    fn apply_nav(&mut self, action: &'static str, result: NavResult<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(action, error = %err, "navigation contract violated");
                self.status = Some(err.to_string());
                debug_assert!(false, "{action}: {err}");
                false
            }
        }
    }
}
