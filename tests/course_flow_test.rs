//! Course exploration flow over the seeded catalog.

use std::cell::RefCell;
use std::rc::Rc;

use edux::catalog::mentors::MentorKind;
use edux::catalog::ProgressBook;
use edux::error::{NavError, TransitionBlock};
use edux::navigation::{CourseExplorer, CourseProgress, CourseView, ItemStatus};

fn explorer() -> CourseExplorer<ProgressBook> {
    CourseExplorer::new(ProgressBook::seeded())
}

#[test]
fn test_quest_round_trip_returns_to_week() {
    let mut flow = explorer();
    flow.launch_course(1).unwrap();
    flow.start_week(2).unwrap();
    flow.start_quest(2).unwrap();
    assert_eq!(
        flow.active_view(),
        &CourseView::QuestContent {
            course_id: 1,
            week_id: 2,
            quest_id: 2
        }
    );

    flow.complete_quest().unwrap();
    assert_eq!(
        flow.active_view(),
        &CourseView::WeekDetails {
            course_id: 1,
            week_id: 2
        }
    );
    assert_eq!(
        flow.stack().kinds(),
        vec!["catalog", "course-details", "week-details"]
    );
    assert!(flow.progress().is_quest_done(1, 2, 2));
    assert_eq!(
        flow.progress().quest_status(1, 2, 3),
        Some(ItemStatus::Current)
    );
}

#[test]
fn test_start_quest_requires_week_on_top() {
    let mut flow = explorer();
    flow.launch_course(1).unwrap();
    let err = flow.start_quest(1).unwrap_err();
    assert!(matches!(
        err,
        NavError::InvalidTransition {
            reason: TransitionBlock::WrongOrigin,
            ..
        }
    ));
    assert_eq!(flow.active_view(), &CourseView::CourseDetails { course_id: 1 });
}

#[test]
fn test_locked_week_is_refused() {
    let mut flow = explorer();
    flow.launch_course(1).unwrap();
    let err = flow.start_week(4).unwrap_err();
    assert_eq!(err.reason(), Some(TransitionBlock::Locked));
    assert_eq!(flow.stack().depth(), 2);
}

#[test]
fn test_chat_back_to_catalog_takes_two_steps() {
    let mut flow = explorer();
    flow.open_mentors().unwrap();
    flow.start_chat(4, MentorKind::Ai).unwrap();
    assert_eq!(flow.selection().mentor, Some((4, MentorKind::Ai)));

    assert!(flow.go_back());
    assert_eq!(flow.active_view(), &CourseView::Mentors);
    assert!(flow.go_back());
    assert_eq!(flow.active_view(), &CourseView::Catalog);
    assert!(flow.selection().is_empty());
}

#[test]
fn test_chat_with_mismatched_mentor_kind_is_refused() {
    let mut flow = explorer();
    flow.open_mentors().unwrap();
    let err = flow.start_chat(4, MentorKind::Expert).unwrap_err();
    assert!(matches!(err, NavError::InvalidTransition { .. }));
    assert_eq!(err.reason(), Some(TransitionBlock::UnknownItem));
    assert_eq!(flow.active_view(), &CourseView::Mentors);
    assert_eq!(flow.selection().mentor, None);
}

#[test]
fn test_go_back_at_root_is_noop() {
    let mut flow = explorer();
    assert!(!flow.can_go_back());
    assert!(!flow.go_back());
    assert_eq!(flow.active_view(), &CourseView::Catalog);
}

#[test]
fn test_finish_course_replaces_catalog() {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&fired);
    let mut flow = explorer().with_completion_hook(Box::new(move |course_id: u32| {
        sink.borrow_mut().push(course_id);
    }));

    flow.finish_course(5).unwrap();
    assert_eq!(flow.active_view(), &CourseView::Completion { course_id: 5 });
    assert_eq!(flow.stack().depth(), 1);
    assert!(!flow.can_go_back());

    assert_eq!(flow.return_to_catalog(), Some(5));
    assert_eq!(flow.active_view(), &CourseView::Catalog);
    assert_eq!(*fired.borrow(), vec![5]);
}

#[test]
fn test_unfinished_course_cannot_complete() {
    let mut flow = explorer();
    let err = flow.finish_course(1).unwrap_err();
    assert_eq!(err.reason(), Some(TransitionBlock::NotFinished));
    let err = flow.finish_course(99).unwrap_err();
    assert_eq!(err.reason(), Some(TransitionBlock::UnknownItem));
}

#[test]
fn test_return_to_catalog_without_completion_fires_nothing() {
    let fired = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&fired);
    let mut flow = explorer().with_completion_hook(Box::new(move |_: u32| {
        *sink.borrow_mut() += 1;
    }));
    flow.launch_course(1).unwrap();

    assert_eq!(flow.return_to_catalog(), None);
    assert_eq!(*fired.borrow(), 0);
    assert_eq!(flow.stack().depth(), 1);
}
