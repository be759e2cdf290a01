//! Hierarchical view navigation.
//!
//! [`ViewStack`] is the shared primitive; [`OnboardingFlow`] and
//! [`CourseExplorer`] are the flow controllers built on it. Flows own their
//! stack and selection exclusively and report their terminal event through a
//! [`CompletionHook`] handed in by the shell.

mod course;
mod locks;
mod onboarding;
mod steps;
mod view_stack;

pub use course::{CourseExplorer, CourseSelection, CourseView};
pub use locks::{is_unlocked, CourseProgress, ItemStatus};
pub use onboarding::{OnboardingFlow, OnboardingMethod, OnboardingView, StepOutcome};
pub use steps::{StepAdvance, StepRetreat, StepSequence};
pub use view_stack::{ViewDescriptor, ViewStack};

/// Terminal callback of a flow, invoked once per successful run.
pub type CompletionHook<T> = Box<dyn FnMut(T)>;
