//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use strongpass::StrengthAssessment;

use super::quiet;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Warning to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Error to stderr (red) - always shown
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Every character class was turned off - always shown, it is why nothing printed
pub fn empty_pool() {
    error("Select at least one character type.");
}

/// Strength summary to stderr so stdout stays just passwords
pub fn strength(assessment: &StrengthAssessment) {
    if !quiet::enabled() {
        eprintln!("Strength: {} \u{2022} {}%", assessment, assessment.percent);
    }
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        println!("*** {count} password(s) copied to clipboard ***");
    }
}

/// Always shown
pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Clipboard unavailable: true falls back to the terminal, false aborts.
/// Quiet or non-interactive runs fall back silently.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

pub fn settings_saved(path: &str) {
    if !quiet::enabled() {
        println!("Settings saved \u{2192} {path}");
    }
}
