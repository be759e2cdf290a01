//! Built-in content: courses, mentors, onboarding copy and page data.

pub mod courses;
pub mod mentors;
pub mod onboarding;
pub mod pages;
mod progress;

pub use progress::ProgressBook;
