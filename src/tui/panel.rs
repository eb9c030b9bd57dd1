//! The interactive generator panel.
//!
//! One raw-mode screen: password, strength meter, length slider, class
//! toggles. Every settings key reruns the generation pipeline synchronously;
//! the panel is redrawn after each event and when the copied indicator
//! expires.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use copypasta::{ClipboardContext, ClipboardProvider};
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use rand::Rng;

use crate::pass::{charset, strength};
use crate::rng;
use crate::settings::{MAX_LENGTH, MIN_LENGTH, Settings};
use crate::state::App;
use crate::terminal::{
    BOLD, DIM, GREEN, RED, RESET, RawModeGuard, YELLOW, box_bottom_raw, box_line_center_raw,
    box_line_raw, box_rule_raw, box_top_raw, clear, print_error, reset_terminal,
};

/// Redraw cadence while idle (no copied deadline pending).
const IDLE_POLL: Duration = Duration::from_millis(500);

pub fn run() {
    let mut rng = rng::sampler();
    let mut app = App::new(Settings::default(), &mut rng);

    let guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(e) => {
            print_error(&format!("Cannot enter raw mode: {}", e));
            return;
        }
    };

    print!("\x1b[?25l");
    clear();

    let result = event_loop(&mut app, &mut rng);

    drop(guard);
    print!("\x1b[?25h");
    reset_terminal();
    clear();

    if let Err(e) = result {
        print_error(&format!("Panel error: {}", e));
    }
}

fn event_loop<R: Rng>(app: &mut App, rng: &mut R) -> io::Result<()> {
    let mut clipboard = ClipboardContext::new().ok();
    let mut clipboard_err: Option<String> = None;

    loop {
        let now = Instant::now();
        draw(app, clipboard_err.as_deref(), now)?;

        // Wake up exactly when the copied indicator lapses so it is redrawn
        // off without a key press.
        let timeout = match app.copied_deadline() {
            Some(deadline) if deadline > now => deadline - now + Duration::from_millis(10),
            _ => IDLE_POLL,
        };

        if !event::poll(timeout)? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
            KeyCode::Char('q') | KeyCode::Esc => break,
            KeyCode::Left | KeyCode::Down => {
                clipboard_err = None;
                app.set_length(app.settings.length.saturating_sub(1), rng);
            }
            KeyCode::Right | KeyCode::Up => {
                clipboard_err = None;
                app.set_length(app.settings.length + 1, rng);
            }
            KeyCode::Char('u') => {
                clipboard_err = None;
                app.toggle_uppercase(rng);
            }
            KeyCode::Char('n') => {
                clipboard_err = None;
                app.toggle_numbers(rng);
            }
            KeyCode::Char('s') => {
                clipboard_err = None;
                app.toggle_symbols(rng);
            }
            KeyCode::Char('r') | KeyCode::Char(' ') | KeyCode::Enter => {
                clipboard_err = None;
                app.regenerate(rng);
            }
            KeyCode::Char('c') => match clipboard.as_mut() {
                Some(ctx) => match ctx.set_contents(app.password.clone()) {
                    Ok(()) => {
                        clipboard_err = None;
                        app.mark_copied(Instant::now());
                    }
                    Err(e) => clipboard_err = Some(format!("Clipboard error: {}", e)),
                },
                None => clipboard_err = Some("Clipboard unavailable".to_string()),
            },
            _ => {}
        }
    }

    Ok(())
}

fn draw(app: &App, clipboard_err: Option<&str>, now: Instant) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    write!(out, "\x1b[H")?;

    box_top_raw(&mut out, "passpanel")?;
    box_line_center_raw(
        &mut out,
        &format!("{DIM}Generate a strong, safe password, simply.{RESET}"),
    )?;
    box_line_raw(&mut out, "")?;
    box_line_center_raw(&mut out, &format!("{BOLD}{}{RESET}", app.password))?;
    box_line_raw(&mut out, "")?;

    let size = charset::size(&app.settings);
    let bits = strength::entropy_bits(app.settings.length, size);
    box_line_raw(
        &mut out,
        &format!(
            "Strength:  {}  {}",
            meter(app.strength),
            strength::label(app.strength)
        ),
    )?;
    box_line_raw(
        &mut out,
        &format!(
            "{DIM}Entropy:   {:.1} bits | charset {} | {}{RESET}",
            bits,
            size,
            rng::source_name()
        ),
    )?;
    box_line_raw(&mut out, "")?;

    box_line_raw(
        &mut out,
        &format!("Length:    {} {:>2}", slider(app.settings.length), app.settings.length),
    )?;
    box_line_raw(&mut out, "")?;
    box_line_raw(
        &mut out,
        &format!(
            "  {} u) uppercase     {} n) numbers     {} s) symbols",
            switch(app.settings.include_uppercase),
            switch(app.settings.include_numbers),
            switch(app.settings.include_symbols),
        ),
    )?;
    box_line_raw(&mut out, "")?;

    box_rule_raw(&mut out)?;
    box_line_center_raw(
        &mut out,
        "left/right: length | enter: regenerate | c: copy | q: quit",
    )?;
    box_bottom_raw(&mut out)?;

    let status = if let Some(err) = clipboard_err {
        format!("{RED}{}{RESET}", err)
    } else if app.copied(now) {
        format!("{GREEN}Copied to clipboard{RESET}")
    } else {
        String::new()
    };
    write!(out, "\r  {}\x1b[K\r\n", status)?;

    write!(out, "\x1b[J")?;
    out.flush()
}

/// Five meter segments, filled up to the score, colored by label band.
fn meter(score: u8) -> String {
    let color = match score {
        0..=1 => RED,
        2..=3 => YELLOW,
        _ => GREEN,
    };

    let mut bar = String::new();
    for i in 0..strength::MAX_SCORE {
        if i < score {
            bar.push_str(color);
            bar.push_str("██");
        } else {
            bar.push_str(DIM);
            bar.push_str("··");
        }
        bar.push_str(RESET);
    }
    bar
}

/// One track cell per length step, thumb at the current value.
fn slider(length: usize) -> String {
    let pos = length - MIN_LENGTH;
    let mut track = String::from("├");
    for i in 0..=(MAX_LENGTH - MIN_LENGTH) {
        track.push(if i == pos { '█' } else { '─' });
    }
    track.push('┤');
    track
}

fn switch(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_thumb_tracks_length() {
        let min = slider(MIN_LENGTH);
        assert!(min.starts_with("├█"));
        let max = slider(MAX_LENGTH);
        assert!(max.ends_with("█┤"));
        // One cell per step plus the two rails
        assert_eq!(min.chars().count(), MAX_LENGTH - MIN_LENGTH + 3);
    }

    #[test]
    fn meter_fills_to_score() {
        assert_eq!(meter(0).matches("██").count(), 0);
        assert_eq!(meter(3).matches("██").count(), 3);
        assert_eq!(meter(5).matches("██").count(), 5);
    }
}
