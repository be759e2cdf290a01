//! Onboarding flow from selection to completion.

use std::cell::RefCell;
use std::rc::Rc;

use edux::error::TransitionBlock;
use edux::navigation::{OnboardingFlow, OnboardingMethod, OnboardingView, StepOutcome};

fn recording_flow() -> (OnboardingFlow, Rc<RefCell<Vec<OnboardingMethod>>>) {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&fired);
    let flow =
        OnboardingFlow::new().with_completion_hook(Box::new(move |method: OnboardingMethod| {
            sink.borrow_mut().push(method);
        }));
    (flow, fired)
}

fn answer_all(flow: &mut OnboardingFlow, steps: usize) {
    for _ in 0..steps {
        flow.set_answer(0, "yes");
        flow.complete_current_step().unwrap();
    }
}

#[test]
fn test_audio_interview_completes() {
    let (mut flow, fired) = recording_flow();
    flow.select_method(OnboardingMethod::Audio).unwrap();
    assert_eq!(
        flow.active_view(),
        &OnboardingView::Method(OnboardingMethod::Audio)
    );

    for step in 0..5 {
        assert!(flow.set_answer(0, format!("answer {step}")));
        let outcome = flow.complete_current_step().unwrap();
        if step < 4 {
            assert_eq!(outcome, StepOutcome::Advanced);
        } else {
            assert_eq!(outcome, StepOutcome::Completed);
        }
    }

    assert_eq!(flow.active_view(), &OnboardingView::Complete);
    assert_eq!(flow.selection(), Some(OnboardingMethod::Audio));
    assert!(flow.continue_to_app());
    assert_eq!(*fired.borrow(), vec![OnboardingMethod::Audio]);
}

#[test]
fn test_unanswered_step_blocks() {
    let (mut flow, fired) = recording_flow();
    flow.select_method(OnboardingMethod::Text).unwrap();

    assert_eq!(flow.complete_current_step().unwrap(), StepOutcome::Blocked);
    assert_eq!(flow.session().map(|s| s.index()), Some(0));
    assert!(fired.borrow().is_empty());
}

#[test]
fn test_completion_fires_once() {
    let (mut flow, fired) = recording_flow();
    flow.select_method(OnboardingMethod::Video).unwrap();
    answer_all(&mut flow, 5);

    assert!(flow.continue_to_app());
    assert!(!flow.continue_to_app());
    assert_eq!(fired.borrow().len(), 1);
}

#[test]
fn test_back_from_method_returns_to_selection() {
    let (mut flow, _) = recording_flow();
    assert!(!flow.can_go_back());
    flow.select_method(OnboardingMethod::Text).unwrap();

    assert!(flow.go_back());
    assert_eq!(flow.active_view(), &OnboardingView::Selection);
    assert_eq!(flow.selection(), None);
    assert!(!flow.go_back());
}

#[test]
fn test_select_twice_is_wrong_origin() {
    let (mut flow, _) = recording_flow();
    flow.select_method(OnboardingMethod::Text).unwrap();
    let err = flow.select_method(OnboardingMethod::Audio).unwrap_err();
    assert_eq!(err.reason(), Some(TransitionBlock::WrongOrigin));
}

#[test]
fn test_complete_has_no_way_back() {
    let (mut flow, _) = recording_flow();
    flow.select_method(OnboardingMethod::Audio).unwrap();
    answer_all(&mut flow, 5);

    assert!(!flow.can_go_back());
    assert!(!flow.go_back());
    assert_eq!(flow.active_view(), &OnboardingView::Complete);
}

#[test]
fn test_reset_starts_a_fresh_run() {
    let (mut flow, fired) = recording_flow();
    flow.select_method(OnboardingMethod::Audio).unwrap();
    answer_all(&mut flow, 5);
    flow.continue_to_app();

    flow.reset();
    assert_eq!(flow.active_view(), &OnboardingView::Selection);
    assert!(!flow.is_finished());

    flow.select_method(OnboardingMethod::Video).unwrap();
    answer_all(&mut flow, 5);
    assert!(flow.continue_to_app());
    assert_eq!(
        *fired.borrow(),
        vec![OnboardingMethod::Audio, OnboardingMethod::Video]
    );
}
