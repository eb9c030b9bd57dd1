//! Terminal plumbing: box drawing, ANSI helpers, raw mode guard.

mod output;

pub use output::*;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

/// RAII guard: raw mode stays enabled exactly as long as the guard lives.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}
