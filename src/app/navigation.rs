//! Shell-level transitions: modes, tabs and completion messages.

use tokio::sync::mpsc;

use crate::catalog::courses;
use crate::navigation::{CourseView, OnboardingView};

use super::{App, AppMessage, ChatSession, Cursors, MainTab, ShellMode};

impl App {
    fn set_mode(&mut self, mode: ShellMode) {
        if self.mode != mode {
            tracing::info!(from = self.mode.as_str(), to = mode.as_str(), "mode change");
        }
        self.mode = mode;
        self.mark_dirty();
    }

    /// Landing → onboarding. The flow is reset so no earlier run resurfaces.
    pub fn start_onboarding(&mut self) {
        self.onboarding.reset();
        self.input.clear();
        self.cursors.method = 0;
        self.cursors.field = 0;
        self.set_mode(ShellMode::Onboarding);
    }

    /// Landing → main.
    pub fn enter_app(&mut self) {
        self.set_mode(ShellMode::Main);
    }

    /// Leaving onboarding from its root goes back to the landing screen.
    pub fn exit_onboarding(&mut self) {
        if self.mode == ShellMode::Onboarding
            && *self.onboarding.active_view() == OnboardingView::Selection
        {
            self.set_mode(ShellMode::Landing);
        }
    }

    /// "Redo setup": main → onboarding, offered on the Dashboard only.
    pub fn redo_setup(&mut self) -> bool {
        if self.mode != ShellMode::Main || self.active_tab != MainTab::Dashboard {
            return false;
        }
        self.start_onboarding();
        true
    }

    /// Switch the main-mode tab.
    ///
    /// Leaving Courses resets the course flow to its catalog unless
    /// `preserve_course_depth` is configured.
    pub fn select_tab(&mut self, tab: MainTab) {
        if self.active_tab == tab {
            return;
        }
        if self.active_tab == MainTab::Courses && !self.config.preserve_course_depth {
            self.courses.reset();
            self.reset_course_cursors();
            self.sync_chat();
        }
        tracing::debug!(from = self.active_tab.title(), to = tab.title(), "tab change");
        self.active_tab = tab;
        self.mark_dirty();
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.active_tab.next());
    }

    pub fn previous_tab(&mut self) {
        self.select_tab(self.active_tab.previous());
    }

    fn reset_course_cursors(&mut self) {
        self.cursors = Cursors {
            landing: self.cursors.landing,
            method: self.cursors.method,
            field: self.cursors.field,
            reward: self.cursors.reward,
            ..Cursors::default()
        };
    }

    /// Keep the chat transcript in step with the course stack.
    ///
    /// A transcript exists only while `chat` is the active course view.
    pub(crate) fn sync_chat(&mut self) {
        match *self.courses.active_view() {
            CourseView::Chat {
                mentor_id,
                mentor_kind,
            } => {
                let stale = self
                    .chat
                    .as_ref()
                    .map_or(true, |chat| !chat.is_for(mentor_id, mentor_kind));
                if stale {
                    self.chat = Some(ChatSession::open(mentor_id, mentor_kind));
                    self.input.clear();
                    self.cursors.suggestion = 0;
                }
            }
            _ => {
                if self.chat.take().is_some() {
                    self.input.clear();
                }
            }
        }
    }

    /// Apply every queued completion message. Returns how many were handled.
    pub fn drain_messages(&mut self) -> usize {
        let Some(mut rx) = self.message_rx.take() else {
            return 0;
        };
        let count = self.apply_pending(&mut rx);
        self.message_rx = Some(rx);
        count
    }

    /// Apply whatever is already queued on `rx` without waiting.
    ///
    /// The run loop owns the receiver, so it calls this directly.
    pub fn apply_pending(&mut self, rx: &mut mpsc::UnboundedReceiver<AppMessage>) -> usize {
        let mut count = 0;
        while let Ok(message) = rx.try_recv() {
            self.handle_message(message);
            count += 1;
        }
        count
    }

    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::OnboardingCompleted { method } => {
                tracing::info!(method = %method, "onboarding completed");
                self.onboarding_method = Some(method);
                self.onboarding.reset();
                self.input.clear();
                self.cursors.field = 0;
                self.active_tab = MainTab::Dashboard;
                self.set_mode(ShellMode::Main);
            }
            AppMessage::CourseCompleted { course_id } => {
                tracing::info!(course_id, "course completion recorded");
                self.courses_completed.push(course_id);
                let title = courses::course(course_id).map_or("Course", |c| c.title);
                self.set_status(format!("{title} completed"));
                self.reset_course_cursors();
                self.mark_dirty();
            }
        }
    }
}
