//! Key dispatch.
//!
//! Every flow action is guarded here by the same predicates the flows
//! enforce (`is_unlocked`, `can_go_back`, the active view), so a disabled
//! affordance is simply a key that does nothing.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::catalog::courses::{self, CATEGORIES};
use crate::catalog::mentors::{self, MENTOR_FILTERS};
use crate::catalog::pages::REDEEMABLE;
use crate::navigation::{
    is_unlocked, CourseProgress, CourseView, ItemStatus, OnboardingMethod, OnboardingView,
    StepOutcome,
};

use super::{App, MainTab, ShellMode};

/// Landing screen entries, in display order.
pub const LANDING_ACTIONS: [&str; 2] = ["Get Started", "Enter App"];

fn step_cursor(cursor: &mut usize, len: usize, down: bool) {
    if len == 0 {
        *cursor = 0;
    } else if down {
        *cursor = (*cursor + 1).min(len - 1);
    } else {
        *cursor = cursor.saturating_sub(1);
    }
}

fn cycle(cursor: &mut usize, len: usize, forward: bool) {
    if len == 0 {
        return;
    }
    *cursor = if forward {
        (*cursor + 1) % len
    } else {
        (*cursor + len - 1) % len
    };
}

impl App {
    /// True while keystrokes go into a text field.
    pub fn is_text_entry(&self) -> bool {
        match self.mode {
            ShellMode::Onboarding => {
                matches!(self.onboarding.active_view(), OnboardingView::Method(_))
            }
            ShellMode::Main => {
                self.active_tab == MainTab::Courses
                    && matches!(self.courses.active_view(), CourseView::Chat { .. })
            }
            ShellMode::Landing => false,
        }
    }

    /// Handle one key press.
    ///
    /// A status message lasts one interaction: it is cleared before dispatch.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.mark_dirty();
        self.status = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.quit();
                return;
            }
            KeyCode::Char('t') if ctrl => {
                self.toggle_theme();
                return;
            }
            KeyCode::Char('q') if !ctrl && !self.is_text_entry() => {
                self.quit();
                return;
            }
            _ => {}
        }

        match self.mode {
            ShellMode::Landing => self.handle_landing_key(key),
            ShellMode::Onboarding => self.handle_onboarding_key(key),
            ShellMode::Main => self.handle_main_key(key),
        }
    }

    /// Bracketed paste goes into the focused text field, newlines dropped.
    pub fn handle_paste(&mut self, text: &str) {
        if !self.is_text_entry() {
            return;
        }
        for c in text.chars().filter(|c| !c.is_control()) {
            self.input.insert_char(c);
        }
        if self.mode == ShellMode::Onboarding {
            self.write_answer();
        }
        self.mark_dirty();
    }

    fn handle_landing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Left => {
                step_cursor(&mut self.cursors.landing, LANDING_ACTIONS.len(), false)
            }
            KeyCode::Down | KeyCode::Right => {
                step_cursor(&mut self.cursors.landing, LANDING_ACTIONS.len(), true)
            }
            KeyCode::Enter => {
                if self.cursors.landing == 0 {
                    self.start_onboarding();
                } else {
                    self.enter_app();
                }
            }
            _ => {}
        }
    }

    // ------------------------------------------------------------------
    // Onboarding
    // ------------------------------------------------------------------

    fn handle_onboarding_key(&mut self, key: KeyEvent) {
        match *self.onboarding.active_view() {
            OnboardingView::Selection => match key.code {
                KeyCode::Up => {
                    step_cursor(&mut self.cursors.method, OnboardingMethod::ALL.len(), false)
                }
                KeyCode::Down => {
                    step_cursor(&mut self.cursors.method, OnboardingMethod::ALL.len(), true)
                }
                KeyCode::Enter => {
                    let method = OnboardingMethod::ALL[self.cursors.method];
                    let result = self.onboarding.select_method(method);
                    if self.apply_nav("select_method", result) {
                        self.focus_field(0);
                    }
                }
                KeyCode::Esc => self.exit_onboarding(),
                _ => {}
            },
            OnboardingView::Method(_) => self.handle_method_key(key),
            OnboardingView::Complete => {
                if key.code == KeyCode::Enter {
                    self.onboarding.continue_to_app();
                }
            }
        }
    }

    fn field_count(&self) -> usize {
        self.onboarding.session().map_or(0, |s| s.field_count())
    }

    /// Move focus to `field` and load its stored answer into the editor.
    fn focus_field(&mut self, field: usize) {
        self.cursors.field = field;
        let answer = self
            .onboarding
            .session()
            .map(|s| s.answer(field).to_string())
            .unwrap_or_default();
        self.input.set_content(answer);
    }

    fn write_answer(&mut self) {
        let value = self.input.content().to_string();
        self.onboarding.set_answer(self.cursors.field, value);
    }

    fn handle_method_key(&mut self, key: KeyEvent) {
        let fields = self.field_count();
        match key.code {
            KeyCode::Esc => {
                if self.onboarding.previous_step() {
                    self.focus_field(0);
                }
            }
            KeyCode::Tab | KeyCode::Down => {
                if self.cursors.field + 1 < fields {
                    self.focus_field(self.cursors.field + 1);
                }
            }
            KeyCode::BackTab | KeyCode::Up => {
                if self.cursors.field > 0 {
                    self.focus_field(self.cursors.field - 1);
                }
            }
            KeyCode::Enter => {
                if self.cursors.field + 1 < fields {
                    self.focus_field(self.cursors.field + 1);
                    return;
                }
                let outcome = match self.onboarding.complete_current_step() {
                    Ok(outcome) => outcome,
                    Err(err) => {
                        self.apply_nav("complete_current_step", Err(err));
                        return;
                    }
                };
                match outcome {
                    StepOutcome::Blocked => {
                        let empty = self
                            .onboarding
                            .session()
                            .and_then(|s| s.first_empty_field())
                            .unwrap_or(0);
                        self.focus_field(empty);
                        self.set_status("Fill in every field to continue");
                    }
                    StepOutcome::Advanced => self.focus_field(0),
                    StepOutcome::Completed => {
                        self.input.clear();
                        self.cursors.field = 0;
                    }
                }
            }
            KeyCode::Backspace => {
                self.input.backspace();
                self.write_answer();
            }
            KeyCode::Delete => {
                self.input.delete_char();
                self.write_answer();
            }
            KeyCode::Left => self.input.move_cursor_left(),
            KeyCode::Right => self.input.move_cursor_right(),
            KeyCode::Home => self.input.move_cursor_home(),
            KeyCode::End => self.input.move_cursor_end(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.insert_char(c);
                self.write_answer();
            }
            _ => {}
        }
    }

    // ------------------------------------------------------------------
    // Main
    // ------------------------------------------------------------------

    fn handle_main_key(&mut self, key: KeyEvent) {
        if !self.is_text_entry() {
            match key.code {
                KeyCode::Char(c @ '1'..='5') => {
                    if let Some(tab) = c.to_digit(10).and_then(MainTab::from_number) {
                        self.select_tab(tab);
                    }
                    return;
                }
                KeyCode::Tab => {
                    self.next_tab();
                    return;
                }
                KeyCode::BackTab => {
                    self.previous_tab();
                    return;
                }
                _ => {}
            }
        }

        match self.active_tab {
            MainTab::Dashboard => {
                if key.code == KeyCode::Char('r') {
                    self.redo_setup();
                }
            }
            MainTab::Courses => {
                self.handle_courses_key(key);
                self.sync_chat();
            }
            MainTab::Redemption => match key.code {
                KeyCode::Up => step_cursor(&mut self.cursors.reward, REDEEMABLE.len(), false),
                KeyCode::Down => step_cursor(&mut self.cursors.reward, REDEEMABLE.len(), true),
                _ => {}
            },
            MainTab::SkillAnalysis | MainTab::Rewards => {}
        }
    }

    /// Courses in the selected category, in catalog order.
    pub fn visible_courses(&self) -> Vec<&'static courses::CourseSpec> {
        let category = CATEGORIES[self.cursors.category.min(CATEGORIES.len() - 1)];
        courses::courses_in_category(category)
    }

    pub fn visible_mentors(&self) -> Vec<&'static mentors::Mentor> {
        let filter = MENTOR_FILTERS[self.cursors.mentor_filter.min(MENTOR_FILTERS.len() - 1)];
        mentors::mentors_of_kind(filter)
    }

    fn handle_courses_key(&mut self, key: KeyEvent) {
        match *self.courses.active_view() {
            CourseView::Catalog => self.handle_catalog_key(key),
            CourseView::CourseDetails { course_id } => {
                self.handle_course_details_key(key, course_id)
            }
            CourseView::WeekDetails { course_id, week_id } => {
                self.handle_week_key(key, course_id, week_id)
            }
            CourseView::QuestContent { .. } => match key.code {
                KeyCode::Enter | KeyCode::Char('c') => {
                    let result = self.courses.complete_quest();
                    if self.apply_nav("complete_quest", result) {
                        self.focus_current_quest();
                        self.set_status("Quest complete");
                    }
                }
                KeyCode::Esc | KeyCode::Backspace => {
                    self.courses.go_back();
                }
                _ => {}
            },
            CourseView::Completion { .. } => {
                if key.code == KeyCode::Enter {
                    self.courses.return_to_catalog();
                    self.cursors.course = 0;
                }
            }
            CourseView::Mentors => self.handle_mentors_key(key),
            CourseView::Chat { .. } => self.handle_chat_key(key),
        }
    }

    fn handle_catalog_key(&mut self, key: KeyEvent) {
        let visible = self.visible_courses();
        match key.code {
            KeyCode::Left | KeyCode::Right => {
                cycle(&mut self.cursors.category, CATEGORIES.len(), key.code == KeyCode::Right);
                self.cursors.course = 0;
            }
            KeyCode::Up => step_cursor(&mut self.cursors.course, visible.len(), false),
            KeyCode::Down => step_cursor(&mut self.cursors.course, visible.len(), true),
            KeyCode::Enter => {
                let Some(course) = visible.get(self.cursors.course) else {
                    return;
                };
                let course_id = course.id;
                let result = self.courses.launch_course(course_id);
                if self.apply_nav("launch_course", result) {
                    self.cursors.week = self
                        .courses
                        .progress()
                        .current_week(course_id)
                        .and_then(|w| course.weeks.iter().position(|x| x.id == w.id))
                        .unwrap_or(0);
                }
            }
            KeyCode::Char('m') => {
                let result = self.courses.open_mentors();
                if self.apply_nav("open_mentors", result) {
                    self.cursors.mentor = 0;
                    self.cursors.mentor_filter = 0;
                }
            }
            KeyCode::Char('f') => {
                let Some(course) = visible.get(self.cursors.course) else {
                    return;
                };
                let target = CourseView::Completion { course_id: course.id };
                if is_unlocked(&target, self.courses.progress()) {
                    let result = self.courses.finish_course(course.id);
                    self.apply_nav("finish_course", result);
                } else {
                    self.set_status(format!("Complete every week of {} first", course.title));
                }
            }
            _ => {}
        }
    }

    fn handle_course_details_key(&mut self, key: KeyEvent, course_id: u32) {
        let Some(course) = courses::course(course_id) else {
            return;
        };
        match key.code {
            KeyCode::Up => step_cursor(&mut self.cursors.week, course.weeks.len(), false),
            KeyCode::Down => step_cursor(&mut self.cursors.week, course.weeks.len(), true),
            KeyCode::Enter => {
                let Some(week) = course.weeks.get(self.cursors.week) else {
                    return;
                };
                let target = CourseView::WeekDetails {
                    course_id,
                    week_id: week.id,
                };
                if !is_unlocked(&target, self.courses.progress()) {
                    self.set_status(format!("Week {} is locked", week.id));
                    return;
                }
                let result = self.courses.start_week(week.id);
                if self.apply_nav("start_week", result) {
                    self.focus_current_quest();
                }
            }
            KeyCode::Esc | KeyCode::Backspace => {
                self.courses.go_back();
            }
            _ => {}
        }
    }

    /// Point the quest cursor at the week's current quest, if any.
    fn focus_current_quest(&mut self) {
        let CourseView::WeekDetails { course_id, week_id } = *self.courses.active_view() else {
            return;
        };
        let Some(week) = courses::week(course_id, week_id) else {
            return;
        };
        let progress = self.courses.progress();
        self.cursors.quest = week
            .quests
            .iter()
            .position(|q| {
                progress.quest_status(course_id, week_id, q.id) == Some(ItemStatus::Current)
            })
            .unwrap_or(0);
    }

    fn handle_week_key(&mut self, key: KeyEvent, course_id: u32, week_id: u32) {
        let Some(week) = courses::week(course_id, week_id) else {
            return;
        };
        match key.code {
            KeyCode::Up => step_cursor(&mut self.cursors.quest, week.quests.len(), false),
            KeyCode::Down => step_cursor(&mut self.cursors.quest, week.quests.len(), true),
            KeyCode::Enter => {
                let Some(quest) = week.quests.get(self.cursors.quest) else {
                    return;
                };
                let target = CourseView::QuestContent {
                    course_id,
                    week_id,
                    quest_id: quest.id,
                };
                if !is_unlocked(&target, self.courses.progress()) {
                    self.set_status(format!("{} is locked", quest.title));
                    return;
                }
                let result = self.courses.start_quest(quest.id);
                self.apply_nav("start_quest", result);
            }
            KeyCode::Esc | KeyCode::Backspace => {
                self.courses.go_back();
            }
            _ => {}
        }
    }

    fn handle_mentors_key(&mut self, key: KeyEvent) {
        let visible = self.visible_mentors();
        match key.code {
            KeyCode::Left | KeyCode::Right => {
                cycle(
                    &mut self.cursors.mentor_filter,
                    MENTOR_FILTERS.len(),
                    key.code == KeyCode::Right,
                );
                self.cursors.mentor = 0;
            }
            KeyCode::Up => step_cursor(&mut self.cursors.mentor, visible.len(), false),
            KeyCode::Down => step_cursor(&mut self.cursors.mentor, visible.len(), true),
            KeyCode::Enter => {
                if let Some(mentor) = visible.get(self.cursors.mentor) {
                    let result = self.courses.start_chat(mentor.id, mentor.kind);
                    self.apply_nav("start_chat", result);
                }
            }
            KeyCode::Esc | KeyCode::Backspace => {
                self.courses.go_back();
            }
            _ => {}
        }
    }

    fn handle_chat_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.courses.go_back();
            }
            KeyCode::Enter => {
                let text = self.input.take();
                if let Some(chat) = self.chat.as_mut() {
                    chat.send(&text);
                }
            }
            KeyCode::Tab => {
                let Some(chat) = self.chat.as_ref() else {
                    return;
                };
                let suggestions = chat.suggestions();
                if chat.shows_suggestions() && !suggestions.is_empty() {
                    let pick = suggestions[self.cursors.suggestion % suggestions.len()];
                    self.input.set_content(pick);
                    self.cursors.suggestion = (self.cursors.suggestion + 1) % suggestions.len();
                }
            }
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete_char(),
            KeyCode::Left => self.input.move_cursor_left(),
            KeyCode::Right => self.input.move_cursor_right(),
            KeyCode::Home => self.input.move_cursor_home(),
            KeyCode::End => self.input.move_cursor_end(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.insert_char(c)
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_cursor_clamps() {
        let mut cursor = 0;
        step_cursor(&mut cursor, 3, false);
        assert_eq!(cursor, 0);
        step_cursor(&mut cursor, 3, true);
        step_cursor(&mut cursor, 3, true);
        step_cursor(&mut cursor, 3, true);
        assert_eq!(cursor, 2);
    }

    #[test]
    fn test_cycle_wraps() {
        let mut cursor = 0;
        cycle(&mut cursor, 5, false);
        assert_eq!(cursor, 4);
        cycle(&mut cursor, 5, true);
        assert_eq!(cursor, 0);
    }
}
