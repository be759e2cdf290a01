//! Lock rules for course-exploration targets.
//!
//! Whether a week or quest may be entered is derived from progress, never
//! read from the view that asks. The course flow evaluates [`is_unlocked`]
//! before every push, and the UI uses the same predicate to disable
//! affordances.

use crate::catalog::mentors;

use super::course::CourseView;

/// Derived status of a week or quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemStatus {
    Completed,
    Current,
    Locked,
}

impl ItemStatus {
    pub fn is_locked(&self) -> bool {
        matches!(self, ItemStatus::Locked)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Completed => "completed",
            ItemStatus::Current => "current",
            ItemStatus::Locked => "locked",
        }
    }
}

/// Progress bookkeeping consulted by the course flow.
///
/// Lookups return `None` for ids that do not exist.
pub trait CourseProgress {
    fn course_exists(&self, course_id: u32) -> bool;

    fn week_status(&self, course_id: u32, week_id: u32) -> Option<ItemStatus>;

    fn quest_status(&self, course_id: u32, week_id: u32, quest_id: u32) -> Option<ItemStatus>;

    /// True once every week of the course is completed.
    fn course_finished(&self, course_id: u32) -> bool;

    /// Mark a quest done. Returns `true` if it was not already recorded.
    fn record_quest_completed(&mut self, course_id: u32, week_id: u32, quest_id: u32) -> bool;
}

/// Can `target` become the active course view given `progress`?
///
/// Only the payload is checked here; whether the target may follow the
/// current top is the flow's concern.
pub fn is_unlocked<P: CourseProgress + ?Sized>(target: &CourseView, progress: &P) -> bool {
    match *target {
        CourseView::Catalog | CourseView::Mentors => true,
        CourseView::CourseDetails { course_id } => progress.course_exists(course_id),
        CourseView::WeekDetails { course_id, week_id } => progress
            .week_status(course_id, week_id)
            .is_some_and(|status| !status.is_locked()),
        CourseView::QuestContent {
            course_id,
            week_id,
            quest_id,
        } => {
            progress
                .week_status(course_id, week_id)
                .is_some_and(|status| !status.is_locked())
                && progress
                    .quest_status(course_id, week_id, quest_id)
                    .is_some_and(|status| !status.is_locked())
        }
        CourseView::Completion { course_id } => progress.course_finished(course_id),
        CourseView::Chat {
            mentor_id,
            mentor_kind,
        } => mentors::mentor(mentor_id).is_some_and(|m| m.kind == mentor_kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mentors::MentorKind;
    use crate::catalog::ProgressBook;

    #[test]
    fn test_roots_always_unlocked() {
        let book = ProgressBook::seeded();
        assert!(is_unlocked(&CourseView::Catalog, &book));
        assert!(is_unlocked(&CourseView::Mentors, &book));
    }

    #[test]
    fn test_week_lock_follows_progress() {
        let book = ProgressBook::seeded();
        let current = CourseView::WeekDetails { course_id: 1, week_id: 2 };
        let locked = CourseView::WeekDetails { course_id: 1, week_id: 3 };
        assert!(is_unlocked(&current, &book));
        assert!(!is_unlocked(&locked, &book));
    }

    #[test]
    fn test_quest_in_locked_week_is_locked() {
        let book = ProgressBook::seeded();
        let view = CourseView::QuestContent { course_id: 1, week_id: 3, quest_id: 1 };
        assert!(!is_unlocked(&view, &book));
    }

    #[test]
    fn test_unknown_targets_are_not_unlocked() {
        let book = ProgressBook::seeded();
        assert!(!is_unlocked(&CourseView::CourseDetails { course_id: 42 }, &book));
        let chat = CourseView::Chat { mentor_id: 99, mentor_kind: MentorKind::Ai };
        assert!(!is_unlocked(&chat, &book));
    }

    #[test]
    fn test_chat_kind_must_match_mentor() {
        let book = ProgressBook::seeded();
        let ai = CourseView::Chat { mentor_id: 4, mentor_kind: MentorKind::Ai };
        let mislabelled = CourseView::Chat { mentor_id: 4, mentor_kind: MentorKind::Expert };
        assert!(is_unlocked(&ai, &book));
        assert!(!is_unlocked(&mislabelled, &book));
    }

    #[test]
    fn test_completion_requires_finished_course() {
        let book = ProgressBook::seeded();
        assert!(is_unlocked(&CourseView::Completion { course_id: 5 }, &book));
        assert!(!is_unlocked(&CourseView::Completion { course_id: 1 }, &book));
    }
}
