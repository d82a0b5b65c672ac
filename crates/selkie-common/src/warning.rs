//! Builder warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used when a selector is built from input that renders fine but falls
//! outside standard CSS, such as an unknown combinator character.

use std::collections::HashSet;
use std::sync::Mutex;

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Build the deduplication key for a warning.
fn warning_key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about questionable input (prints once per unique message).
///
/// Returns `true` if the warning was printed, `false` if an identical
/// warning was already reported since the last [`clear_warnings`].
///
/// # Example
/// ```
/// use selkie_common::warning::warn_once;
///
/// let _ = warn_once("Selector", "combinator '|' is not a CSS combinator");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) -> bool {
    let should_print = WARNED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(warning_key(component, message));

    if should_print {
        eprintln!("{YELLOW}[Selkie {component}] ⚠ {message}{RESET}");
    }
    should_print
}

/// Check whether a warning has been reported since the last clear.
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap()
        .as_ref()
        .is_some_and(|set| set.contains(&warning_key(component, message)))
}

/// Clear all recorded warnings.
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
