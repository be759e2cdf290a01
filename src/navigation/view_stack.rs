//! Generic hierarchical navigation primitive.
//!
//! A [`ViewStack`] is an ordered history of view descriptors, oldest first.
//! The top is the only active view; everything below it is back-navigation
//! history. The root is stored apart from the history so the stack can never
//! be empty, whatever sequence of operations is applied.
//!
//! The stack holds no policy. Which kinds may follow which, and what selection
//! accompanies a push, is decided by the flow controllers built on top.

use std::fmt;

use crate::error::{NavError, NavResult};

/// A tagged, immutable record identifying a screen and its render payload.
///
/// Implementors are plain enums: the variant is the kind, the fields are the
/// payload. Descriptors are never mutated once pushed; transitions create new
/// ones.
pub trait ViewDescriptor: Clone + PartialEq + fmt::Debug {
    /// Stable kind tag, used for logging and error reporting.
    fn kind(&self) -> &'static str;
}

/// Ordered navigation history with a guaranteed root.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewStack<V> {
    root: V,
    /// Descriptors pushed above the root, oldest first.
    history: Vec<V>,
}

impl<V: ViewDescriptor> ViewStack<V> {
    /// Create a stack holding only `root`.
    pub fn new(root: V) -> Self {
        Self {
            root,
            history: Vec::new(),
        }
    }

    /// Append `descriptor` as the new active view.
    pub fn push(&mut self, descriptor: V) {
        tracing::debug!(from = self.top().kind(), to = descriptor.kind(), "view push");
        self.history.push(descriptor);
    }

    /// Swap the active view for `descriptor`, returning the one it replaced.
    ///
    /// The replaced view is not reachable through back-navigation afterwards.
    /// Replacing while only the root remains replaces the root itself.
    pub fn replace(&mut self, descriptor: V) -> V {
        tracing::debug!(from = self.top().kind(), to = descriptor.kind(), "view replace");
        match self.history.last_mut() {
            Some(top) => std::mem::replace(top, descriptor),
            None => std::mem::replace(&mut self.root, descriptor),
        }
    }

    /// Remove the active view, exposing the previous one.
    ///
    /// # Errors
    ///
    /// [`NavError::EmptyStack`] if only the root remains. Exiting a flow from
    /// its root is the parent's decision, not the stack's.
    pub fn pop(&mut self) -> NavResult<V> {
        match self.history.pop() {
            Some(popped) => {
                tracing::debug!(from = popped.kind(), to = self.top().kind(), "view pop");
                Ok(popped)
            }
            None => Err(NavError::EmptyStack {
                root: self.root.kind(),
            }),
        }
    }

    /// Drop all history and install `root` as the only view.
    pub fn reset(&mut self, root: V) {
        tracing::debug!(from = self.top().kind(), to = root.kind(), depth = self.depth(), "view reset");
        self.history.clear();
        self.root = root;
    }

    /// The active (top) descriptor.
    pub fn top(&self) -> &V {
        self.history.last().unwrap_or(&self.root)
    }

    /// The bottom descriptor.
    pub fn root(&self) -> &V {
        &self.root
    }

    /// True iff there is something below the top.
    pub fn can_pop(&self) -> bool {
        !self.history.is_empty()
    }

    /// Number of descriptors, root included. Always at least 1.
    pub fn depth(&self) -> usize {
        self.history.len() + 1
    }

    /// Descriptors oldest first, root included.
    pub fn iter(&self) -> impl Iterator<Item = &V> + '_ {
        std::iter::once(&self.root).chain(self.history.iter())
    }

    /// Kind tags oldest first; handy for asserting legal paths.
    pub fn kinds(&self) -> Vec<&'static str> {
        self.iter().map(ViewDescriptor::kind).collect()
    }

    /// Descriptor directly below the top, if any.
    pub fn parent(&self) -> Option<&V> {
        match self.history.len() {
            0 => None,
            1 => Some(&self.root),
            n => self.history.get(n - 2),
        }
    }
}
