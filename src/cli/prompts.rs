//! Stderr prompt and message helpers for client mode.

use std::io::Write;

use super::quiet;

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Errors are always shown, even in quiet mode.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Copy confirmation - suppressed in quiet mode.
pub fn clipboard_copied() {
    if !quiet::enabled() {
        println!("Copied to clipboard");
    }
}

pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Ask whether to print instead when no clipboard is available. Returns true
/// to fall back to the terminal. Quiet or non-interactive runs fall back
/// silently.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }

    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        eprintln!();
        return true;
    }

    eprintln!("\nAborted.");
    false
}
