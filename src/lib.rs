//! edux - a terminal learning platform
//!
//! This library exposes modules for use in integration tests and benches.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod storage;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
