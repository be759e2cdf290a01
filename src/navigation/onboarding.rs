//! Onboarding flow: selection → {text | audio | video} → complete.
//!
//! The method screens run a local [`StepSequence`]; only the screen-level
//! transitions go through the [`ViewStack`]. Reaching `complete` replaces the
//! method screen, and leaving `complete` is not a stack transition at all: the
//! completion hook hands control back to the shell.

use std::fmt;

use crate::catalog::onboarding::steps_for;
use crate::error::{NavError, NavResult, TransitionBlock};

use super::steps::{StepAdvance, StepRetreat, StepSequence};
use super::view_stack::{ViewDescriptor, ViewStack};
use super::CompletionHook;

/// How the student chose to introduce themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnboardingMethod {
    Text,
    Audio,
    Video,
}

impl OnboardingMethod {
    pub const ALL: [OnboardingMethod; 3] = [
        OnboardingMethod::Text,
        OnboardingMethod::Audio,
        OnboardingMethod::Video,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OnboardingMethod::Text => "text",
            OnboardingMethod::Audio => "audio",
            OnboardingMethod::Video => "video",
        }
    }
}

impl fmt::Display for OnboardingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screens of the onboarding flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingView {
    Selection,
    Method(OnboardingMethod),
    Complete,
}

impl ViewDescriptor for OnboardingView {
    fn kind(&self) -> &'static str {
        match self {
            OnboardingView::Selection => "selection",
            OnboardingView::Method(method) => method.as_str(),
            OnboardingView::Complete => "complete",
        }
    }
}

/// Outcome of `complete_current_step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step is unanswered; the "next" affordance is disabled.
    Blocked,
    /// Moved to the next step of the method.
    Advanced,
    /// The method is done and `complete` is now active.
    Completed,
}

/// State machine for the onboarding flow.
pub struct OnboardingFlow {
    stack: ViewStack<OnboardingView>,
    selection: Option<OnboardingMethod>,
    session: Option<StepSequence>,
    on_complete: Option<CompletionHook<OnboardingMethod>>,
    /// Set once the hook fired for the current run.
    finished: bool,
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OnboardingFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnboardingFlow")
            .field("stack", &self.stack)
            .field("selection", &self.selection)
            .field("session", &self.session)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self {
            stack: ViewStack::new(OnboardingView::Selection),
            selection: None,
            session: None,
            on_complete: None,
            finished: false,
        }
    }

    /// Install the hook fired when the student continues from `complete`.
    pub fn with_completion_hook(mut self, hook: CompletionHook<OnboardingMethod>) -> Self {
        self.on_complete = Some(hook);
        self
    }

    pub fn set_completion_hook(&mut self, hook: CompletionHook<OnboardingMethod>) {
        self.on_complete = Some(hook);
    }

    pub fn active_view(&self) -> &OnboardingView {
        self.stack.top()
    }

    pub fn stack(&self) -> &ViewStack<OnboardingView> {
        &self.stack
    }

    /// The method picked on the selection screen, if any.
    pub fn selection(&self) -> Option<OnboardingMethod> {
        self.selection
    }

    /// Step state of the active method screen.
    pub fn session(&self) -> Option<&StepSequence> {
        self.session.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Back is allowed from a method screen only; `complete` has no way back.
    pub fn can_go_back(&self) -> bool {
        matches!(self.stack.top(), OnboardingView::Method(_)) && self.stack.can_pop()
    }

    /// Leave the method screen for `selection`. No-op when not allowed.
    pub fn go_back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        if self.stack.pop().is_err() {
            return false;
        }
        self.selection = None;
        self.session = None;
        true
    }

    /// Pick a method on the selection screen.
    pub fn select_method(&mut self, method: OnboardingMethod) -> NavResult<()> {
        let target = OnboardingView::Method(method);
        if *self.stack.top() != OnboardingView::Selection {
            return Err(NavError::invalid(
                self.stack.top().kind(),
                target.kind(),
                TransitionBlock::WrongOrigin,
            ));
        }
        let steps = steps_for(method);
        self.session = Some(StepSequence::new(steps.iter().map(|s| s.fields.len())));
        self.selection = Some(method);
        self.stack.push(target);
        tracing::info!(method = %method, "onboarding method selected");
        Ok(())
    }

    /// Record an answer for a field of the current step.
    ///
    /// Returns `false` when no method screen is active or the field is unknown.
    pub fn set_answer(&mut self, field: usize, value: impl Into<String>) -> bool {
        match self.session.as_mut() {
            Some(session) => session.set_answer(field, value),
            None => false,
        }
    }

    /// "Next" on the active method screen.
    ///
    /// Unanswered steps are a no-op ([`StepOutcome::Blocked`]). Finishing the
    /// last step replaces the method screen with `complete`.
    pub fn complete_current_step(&mut self) -> NavResult<StepOutcome> {
        let OnboardingView::Method(_) = *self.stack.top() else {
            return Err(NavError::invalid(
                self.stack.top().kind(),
                OnboardingView::Complete.kind(),
                TransitionBlock::WrongOrigin,
            ));
        };
        let Some(session) = self.session.as_mut() else {
            return Err(NavError::invalid(
                self.stack.top().kind(),
                OnboardingView::Complete.kind(),
                TransitionBlock::WrongOrigin,
            ));
        };
        match session.next() {
            StepAdvance::Blocked => Ok(StepOutcome::Blocked),
            StepAdvance::Advanced => Ok(StepOutcome::Advanced),
            StepAdvance::Finished => {
                self.stack.replace(OnboardingView::Complete);
                self.session = None;
                tracing::info!(method = ?self.selection, "onboarding method completed");
                Ok(StepOutcome::Completed)
            }
        }
    }

    /// "Previous" on the active method screen; at step 0 this leaves to `selection`.
    pub fn previous_step(&mut self) -> bool {
        match self.session.as_mut().map(StepSequence::previous) {
            Some(StepRetreat::Moved) => true,
            Some(StepRetreat::AtStart) => self.go_back(),
            None => false,
        }
    }

    /// "Continue" on the completion screen.
    ///
    /// Fires the completion hook at most once per run and leaves the stack
    /// untouched. Returns whether the hook fired.
    pub fn continue_to_app(&mut self) -> bool {
        if *self.stack.top() != OnboardingView::Complete || self.finished {
            return false;
        }
        let Some(method) = self.selection else {
            return false;
        };
        self.finished = true;
        if let Some(hook) = self.on_complete.as_mut() {
            hook(method);
        }
        true
    }

    /// Back to a fresh `selection`, discarding any previous run.
    pub fn reset(&mut self) {
        self.stack.reset(OnboardingView::Selection);
        self.selection = None;
        self.session = None;
        self.finished = false;
    }
}
