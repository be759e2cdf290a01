//! Panic hook that restores the terminal before the message is printed.

use super::setup::emergency_restore;
use std::panic;

/// Install the hook. Call early in `main`, before `TerminalManager::new`.
///
/// ```no_run
/// edux::terminal::setup_panic_hook();
/// ```
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!(%panic_info, "panic");
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_panic_hook_does_not_panic() {
        setup_panic_hook();
        // Restore the default hook so other tests are unaffected.
        let _ = panic::take_hook();
    }
}
