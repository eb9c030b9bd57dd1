//! Application state and the reactive pipeline.
//!
//! Every settings mutation runs the same fixed sequence: rebuild the
//! alphabet, resample the password, rescore the strength. The strength value
//! is only ever derived from the current password.

use std::time::{Duration, Instant};

use rand::Rng;
use zeroize::Zeroize;

use crate::pass::{generate, strength};
use crate::settings::Settings;

/// How long the "copied" indicator stays on after a copy.
pub const COPIED_RESET: Duration = Duration::from_millis(2000);

pub struct App {
    pub settings: Settings,
    pub password: String,
    pub strength: u8,
    copied_at: Option<Instant>,
}

impl App {
    /// Create the state with an initial password already generated.
    pub fn new<R: Rng>(settings: Settings, rng: &mut R) -> Self {
        let mut app = Self {
            settings,
            password: String::new(),
            strength: 0,
            copied_at: None,
        };
        app.regenerate(rng);
        app
    }

    /// Rebuild alphabet, resample password, rescore strength. Also drops the
    /// copied indicator: the clipboard no longer matches the display.
    pub fn regenerate<R: Rng>(&mut self, rng: &mut R) {
        let pass = generate(rng, &self.settings);
        self.password.zeroize();
        self.password = pass;
        self.strength = strength::score(&self.password);
        self.copied_at = None;
    }

    pub fn set_length<R: Rng>(&mut self, length: usize, rng: &mut R) {
        self.settings.set_length(length);
        self.regenerate(rng);
    }

    pub fn toggle_uppercase<R: Rng>(&mut self, rng: &mut R) {
        self.settings.include_uppercase = !self.settings.include_uppercase;
        self.regenerate(rng);
    }

    pub fn toggle_numbers<R: Rng>(&mut self, rng: &mut R) {
        self.settings.include_numbers = !self.settings.include_numbers;
        self.regenerate(rng);
    }

    pub fn toggle_symbols<R: Rng>(&mut self, rng: &mut R) {
        self.settings.include_symbols = !self.settings.include_symbols;
        self.regenerate(rng);
    }

    /// Record a copy action. A repeat copy restarts the window.
    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// Whether the copied indicator is on at `now`.
    pub fn copied(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.duration_since(at) < COPIED_RESET)
    }

    /// When the indicator will expire, if it is currently set.
    pub fn copied_deadline(&self) -> Option<Instant> {
        self.copied_at.map(|at| at + COPIED_RESET)
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}
