//! Course-exploration flow.
//!
//! Main path: `catalog → course-details → week-details → quest-content`, with
//! `completion` replacing the catalog once a course is finished. The
//! `mentors → chat` branch hangs directly off `catalog`, so leaving a chat
//! always passes through `mentors`.
//!
//! Every push checks both the origin (the current top) and the target's lock
//! state, so the stack always spells a legal path from root to leaf.

use std::fmt;

use crate::catalog::mentors::MentorKind;
use crate::error::{NavError, NavResult, TransitionBlock};

use super::locks::{is_unlocked, CourseProgress};
use super::view_stack::{ViewDescriptor, ViewStack};
use super::CompletionHook;

/// Screens of the course-exploration flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseView {
    Catalog,
    CourseDetails { course_id: u32 },
    WeekDetails { course_id: u32, week_id: u32 },
    QuestContent { course_id: u32, week_id: u32, quest_id: u32 },
    Completion { course_id: u32 },
    Mentors,
    Chat { mentor_id: u32, mentor_kind: MentorKind },
}

impl ViewDescriptor for CourseView {
    fn kind(&self) -> &'static str {
        match self {
            CourseView::Catalog => "catalog",
            CourseView::CourseDetails { .. } => "course-details",
            CourseView::WeekDetails { .. } => "week-details",
            CourseView::QuestContent { .. } => "quest-content",
            CourseView::Completion { .. } => "completion",
            CourseView::Mentors => "mentors",
            CourseView::Chat { .. } => "chat",
        }
    }
}

/// Secondary context derived from the stack.
///
/// Recomputed after every operation, so it is empty whenever the stack is
/// back at its root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CourseSelection {
    pub course_id: Option<u32>,
    pub week_id: Option<u32>,
    pub quest_id: Option<u32>,
    pub mentor: Option<(u32, MentorKind)>,
}

impl CourseSelection {
    fn from_stack(stack: &ViewStack<CourseView>) -> Self {
        let mut selection = Self::default();
        for view in stack.iter() {
            match *view {
                CourseView::CourseDetails { course_id } => selection.course_id = Some(course_id),
                CourseView::WeekDetails { week_id, .. } => selection.week_id = Some(week_id),
                CourseView::QuestContent { quest_id, .. } => selection.quest_id = Some(quest_id),
                CourseView::Chat {
                    mentor_id,
                    mentor_kind,
                } => selection.mentor = Some((mentor_id, mentor_kind)),
                CourseView::Catalog | CourseView::Completion { .. } | CourseView::Mentors => {}
            }
        }
        selection
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// State machine for the Courses tab.
pub struct CourseExplorer<P> {
    stack: ViewStack<CourseView>,
    selection: CourseSelection,
    progress: P,
    on_complete: Option<CompletionHook<u32>>,
}

impl<P: fmt::Debug> fmt::Debug for CourseExplorer<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CourseExplorer")
            .field("stack", &self.stack)
            .field("selection", &self.selection)
            .field("progress", &self.progress)
            .finish_non_exhaustive()
    }
}

impl<P: CourseProgress> CourseExplorer<P> {
    pub fn new(progress: P) -> Self {
        Self {
            stack: ViewStack::new(CourseView::Catalog),
            selection: CourseSelection::default(),
            progress,
            on_complete: None,
        }
    }

    /// Install the hook fired with the course id when leaving `completion`.
    pub fn with_completion_hook(mut self, hook: CompletionHook<u32>) -> Self {
        self.on_complete = Some(hook);
        self
    }

    pub fn set_completion_hook(&mut self, hook: CompletionHook<u32>) {
        self.on_complete = Some(hook);
    }

    pub fn active_view(&self) -> &CourseView {
        self.stack.top()
    }

    pub fn stack(&self) -> &ViewStack<CourseView> {
        &self.stack
    }

    pub fn selection(&self) -> CourseSelection {
        self.selection
    }

    pub fn progress(&self) -> &P {
        &self.progress
    }

    /// `completion` is left through [`return_to_catalog`](Self::return_to_catalog) only.
    pub fn can_go_back(&self) -> bool {
        self.stack.can_pop() && !matches!(self.stack.top(), CourseView::Completion { .. })
    }

    /// One level up. No-op returning `false` when not allowed.
    pub fn go_back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        let moved = self.stack.pop().is_ok();
        self.sync_selection();
        moved
    }

    /// "Launch" a course card on the catalog.
    pub fn launch_course(&mut self, course_id: u32) -> NavResult<()> {
        let target = CourseView::CourseDetails { course_id };
        self.require_top(&target, |top| matches!(top, CourseView::Catalog))?;
        self.require_unlocked(&target, TransitionBlock::UnknownItem)?;
        self.push(target);
        Ok(())
    }

    /// "Start week" on the course details screen.
    pub fn start_week(&mut self, week_id: u32) -> NavResult<()> {
        let course_id = match *self.stack.top() {
            CourseView::CourseDetails { course_id } => course_id,
            _ => return Err(self.wrong_origin("week-details")),
        };
        let target = CourseView::WeekDetails { course_id, week_id };
        let block = match self.progress.week_status(course_id, week_id) {
            None => TransitionBlock::UnknownItem,
            Some(_) => TransitionBlock::Locked,
        };
        self.require_unlocked(&target, block)?;
        self.push(target);
        Ok(())
    }

    /// Open a quest on the week details screen.
    pub fn start_quest(&mut self, quest_id: u32) -> NavResult<()> {
        let (course_id, week_id) = match *self.stack.top() {
            CourseView::WeekDetails { course_id, week_id } => (course_id, week_id),
            _ => return Err(self.wrong_origin("quest-content")),
        };
        let target = CourseView::QuestContent {
            course_id,
            week_id,
            quest_id,
        };
        let block = match self.progress.quest_status(course_id, week_id, quest_id) {
            None => TransitionBlock::UnknownItem,
            Some(_) => TransitionBlock::Locked,
        };
        self.require_unlocked(&target, block)?;
        self.push(target);
        Ok(())
    }

    /// Finish the open quest: record it, then return to its week.
    pub fn complete_quest(&mut self) -> NavResult<()> {
        let CourseView::QuestContent {
            course_id,
            week_id,
            quest_id,
        } = *self.stack.top()
        else {
            return Err(self.wrong_origin("week-details"));
        };
        self.progress
            .record_quest_completed(course_id, week_id, quest_id);
        self.stack.pop()?;
        self.sync_selection();
        Ok(())
    }

    /// Enter the mentor list from the catalog.
    pub fn open_mentors(&mut self) -> NavResult<()> {
        let target = CourseView::Mentors;
        self.require_top(&target, |top| matches!(top, CourseView::Catalog))?;
        self.push(target);
        Ok(())
    }

    /// Open a chat with a mentor from the mentor list.
    pub fn start_chat(&mut self, mentor_id: u32, mentor_kind: MentorKind) -> NavResult<()> {
        let target = CourseView::Chat {
            mentor_id,
            mentor_kind,
        };
        self.require_top(&target, |top| matches!(top, CourseView::Mentors))?;
        self.require_unlocked(&target, TransitionBlock::UnknownItem)?;
        self.push(target);
        Ok(())
    }

    /// Show the completion screen for a finished course.
    ///
    /// Replaces the catalog, so the exhausted course flow is not reachable
    /// through back-navigation.
    pub fn finish_course(&mut self, course_id: u32) -> NavResult<()> {
        let target = CourseView::Completion { course_id };
        self.require_top(&target, |top| matches!(top, CourseView::Catalog))?;
        let block = if self.progress.course_exists(course_id) {
            TransitionBlock::NotFinished
        } else {
            TransitionBlock::UnknownItem
        };
        self.require_unlocked(&target, block)?;
        self.stack.replace(target);
        self.sync_selection();
        tracing::info!(course_id, "course finished");
        Ok(())
    }

    /// "Return" to the catalog root, clearing all selection.
    ///
    /// Leaving `completion` this way fires the completion hook with the
    /// course id, which is also returned.
    pub fn return_to_catalog(&mut self) -> Option<u32> {
        let finished = match *self.stack.top() {
            CourseView::Completion { course_id } => Some(course_id),
            _ => None,
        };
        self.reset();
        if let Some(course_id) = finished {
            if let Some(hook) = self.on_complete.as_mut() {
                hook(course_id);
            }
        }
        finished
    }

    /// Back to a bare catalog without firing any hook.
    pub fn reset(&mut self) {
        self.stack.reset(CourseView::Catalog);
        self.sync_selection();
    }

    fn push(&mut self, target: CourseView) {
        self.stack.push(target);
        self.sync_selection();
    }

    fn sync_selection(&mut self) {
        self.selection = CourseSelection::from_stack(&self.stack);
    }

    fn wrong_origin(&self, to: &'static str) -> NavError {
        NavError::invalid(self.stack.top().kind(), to, TransitionBlock::WrongOrigin)
    }

    fn require_top(
        &self,
        target: &CourseView,
        accepts: impl FnOnce(&CourseView) -> bool,
    ) -> NavResult<()> {
        if accepts(self.stack.top()) {
            Ok(())
        } else {
            Err(self.wrong_origin(target.kind()))
        }
    }

    fn require_unlocked(&self, target: &CourseView, block: TransitionBlock) -> NavResult<()> {
        if is_unlocked(target, &self.progress) {
            Ok(())
        } else {
            Err(NavError::invalid(self.stack.top().kind(), target.kind(), block))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProgressBook;
    use std::cell::Cell;
    use std::rc::Rc;

    fn explorer() -> CourseExplorer<ProgressBook> {
        CourseExplorer::new(ProgressBook::seeded())
    }

    #[test]
    fn test_drill_down_records_selection() {
        let mut flow = explorer();
        flow.launch_course(1).unwrap();
        flow.start_week(2).unwrap();
        flow.start_quest(2).unwrap();
        assert_eq!(
            flow.stack().kinds(),
            vec!["catalog", "course-details", "week-details", "quest-content"]
        );
        let selection = flow.selection();
        assert_eq!(selection.course_id, Some(1));
        assert_eq!(selection.week_id, Some(2));
        assert_eq!(selection.quest_id, Some(2));
    }

    #[test]
    fn test_back_clears_deeper_selection() {
        let mut flow = explorer();
        flow.launch_course(1).unwrap();
        flow.start_week(1).unwrap();
        assert!(flow.go_back());
        assert_eq!(flow.selection().week_id, None);
        assert!(flow.go_back());
        assert!(flow.selection().is_empty());
        assert!(!flow.go_back());
    }

    #[test]
    fn test_locked_week_is_refused() {
        let mut flow = explorer();
        flow.launch_course(1).unwrap();
        let err = flow.start_week(3).unwrap_err();
        assert_eq!(err.reason(), Some(TransitionBlock::Locked));
        assert_eq!(flow.active_view(), &CourseView::CourseDetails { course_id: 1 });
    }

    #[test]
    fn test_unknown_week_is_refused() {
        let mut flow = explorer();
        flow.launch_course(1).unwrap();
        let err = flow.start_week(42).unwrap_err();
        assert_eq!(err.reason(), Some(TransitionBlock::UnknownItem));
    }

    #[test]
    fn test_locked_quest_is_refused() {
        let mut flow = explorer();
        flow.launch_course(1).unwrap();
        flow.start_week(2).unwrap();
        let err = flow.start_quest(3).unwrap_err();
        assert_eq!(err.reason(), Some(TransitionBlock::Locked));
    }

    #[test]
    fn test_complete_quest_unlocks_next() {
        let mut flow = explorer();
        flow.launch_course(1).unwrap();
        flow.start_week(2).unwrap();
        flow.start_quest(2).unwrap();
        flow.complete_quest().unwrap();
        assert_eq!(
            flow.active_view(),
            &CourseView::WeekDetails { course_id: 1, week_id: 2 }
        );
        assert!(flow.start_quest(3).is_ok());
    }

    #[test]
    fn test_complete_quest_outside_quest_is_invalid() {
        let mut flow = explorer();
        assert!(flow.complete_quest().is_err());
    }

    #[test]
    fn test_mentor_branch_only_from_catalog() {
        let mut flow = explorer();
        flow.launch_course(1).unwrap();
        let err = flow.open_mentors().unwrap_err();
        assert_eq!(err.reason(), Some(TransitionBlock::WrongOrigin));
    }

    #[test]
    fn test_chat_records_mentor() {
        let mut flow = explorer();
        flow.open_mentors().unwrap();
        flow.start_chat(4, MentorKind::Ai).unwrap();
        assert_eq!(flow.selection().mentor, Some((4, MentorKind::Ai)));
        flow.go_back();
        assert_eq!(flow.selection().mentor, None);
        assert_eq!(flow.active_view(), &CourseView::Mentors);
    }

    #[test]
    fn test_finish_requires_finished_course() {
        let mut flow = explorer();
        let err = flow.finish_course(1).unwrap_err();
        assert_eq!(err.reason(), Some(TransitionBlock::NotFinished));
        let err = flow.finish_course(77).unwrap_err();
        assert_eq!(err.reason(), Some(TransitionBlock::UnknownItem));
    }

    #[test]
    fn test_completion_is_not_back_navigable() {
        let mut flow = explorer();
        flow.finish_course(5).unwrap();
        assert_eq!(flow.active_view(), &CourseView::Completion { course_id: 5 });
        assert!(!flow.can_go_back());
        assert!(!flow.go_back());
    }

    #[test]
    fn test_return_from_completion_fires_hook() {
        let fired = Rc::new(Cell::new(None));
        let sink = Rc::clone(&fired);
        let mut flow = explorer().with_completion_hook(Box::new(move |id: u32| sink.set(Some(id))));
        flow.finish_course(5).unwrap();
        assert_eq!(flow.return_to_catalog(), Some(5));
        assert_eq!(fired.get(), Some(5));
        assert_eq!(flow.active_view(), &CourseView::Catalog);
        assert_eq!(flow.stack().depth(), 1);
    }

    #[test]
    fn test_return_from_elsewhere_does_not_fire() {
        let fired = Rc::new(Cell::new(0));
        let sink = Rc::clone(&fired);
        let mut flow =
            explorer().with_completion_hook(Box::new(move |_: u32| sink.set(sink.get() + 1)));
        flow.launch_course(2).unwrap();
        assert_eq!(flow.return_to_catalog(), None);
        assert_eq!(fired.get(), 0);
        assert!(flow.selection().is_empty());
    }
}
