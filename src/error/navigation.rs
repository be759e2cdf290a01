//! Navigation contract errors.
//!
//! These are caller bugs, not user-facing failures: the UI only offers
//! affordances that are legal for the active view. When one of these shows
//! up, something upstream skipped a `can_go_back()` / `is_unlocked()` check.

use std::fmt;

use thiserror::Error;

/// Why a transition was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionBlock {
    /// The active view is not a legal origin for this action.
    WrongOrigin,
    /// The target item exists but its prerequisites are unmet.
    Locked,
    /// The target id does not exist in the catalog.
    UnknownItem,
    /// The course still has unfinished weeks.
    NotFinished,
}

impl fmt::Display for TransitionBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TransitionBlock::WrongOrigin => "not reachable from the active view",
            TransitionBlock::Locked => "target is locked",
            TransitionBlock::UnknownItem => "target does not exist",
            TransitionBlock::NotFinished => "course is not finished",
        };
        f.write_str(text)
    }
}

/// Errors raised by view stacks and flow controllers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// `pop()` was called while only the root view remained.
    #[error("cannot pop root view `{root}`")]
    EmptyStack { root: &'static str },

    /// A push/replace toward `to` was attempted without its precondition.
    #[error("invalid transition from `{from}` to `{to}`: {reason}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
        reason: TransitionBlock,
    },
}

impl NavError {
    pub fn invalid(from: &'static str, to: &'static str, reason: TransitionBlock) -> Self {
        NavError::InvalidTransition { from, to, reason }
    }

    /// The refusal reason, if this is a transition error.
    pub fn reason(&self) -> Option<TransitionBlock> {
        match self {
            NavError::InvalidTransition { reason, .. } => Some(*reason),
            NavError::EmptyStack { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stack_message_names_root() {
        let err = NavError::EmptyStack { root: "catalog" };
        assert_eq!(err.to_string(), "cannot pop root view `catalog`");
        assert_eq!(err.reason(), None);
    }

    #[test]
    fn test_invalid_transition_message() {
        let err = NavError::invalid("catalog", "quest-content", TransitionBlock::WrongOrigin);
        assert_eq!(
            err.to_string(),
            "invalid transition from `catalog` to `quest-content`: not reachable from the active view"
        );
        assert_eq!(err.reason(), Some(TransitionBlock::WrongOrigin));
    }
}
