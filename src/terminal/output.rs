//! Terminal output utilities.
//!
//! Box drawing in cooked and raw-mode flavors, ANSI constants.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const GREEN: &str = "\x1b[38;5;10m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m");
    flush();
}

/// Print error message in red.
pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

fn frame_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - console_width(&title_part);
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

fn frame_rule() -> String {
    format!("├{}┤", "─".repeat(BOX_WIDTH - 2))
}

fn frame_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

fn framed(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        format!("│ {}{} │", content, " ".repeat(inner_width - display_len))
    } else {
        format!("│ {} │", content)
    }
}

fn framed_center(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let total = inner_width - display_len;
        let left = total / 2;
        format!(
            "│ {}{}{} │",
            " ".repeat(left),
            content,
            " ".repeat(total - left)
        )
    } else {
        format!("│ {} │", content)
    }
}

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    println!("{}", frame_top(title));
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    println!("{}", framed(content));
}

/// Print centered box content line.
pub fn box_line_center(content: &str) {
    println!("{}", framed_center(content));
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("{}", frame_bottom());
}

/// Print a help option with flag and description, auto-wrapping if needed.
pub fn box_opt(flag: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 24;
    let desc_col = inner_width - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let words: Vec<&str> = desc.split_whitespace().collect();
    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in words {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if let Some(first) = lines.first() {
        box_line(&format!("{}{}", flag_padded, first));
    } else {
        box_line(&flag_padded);
    }

    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        box_line(&format!("{}{}", indent, line));
    }
}

// ============================================================================
// Raw-Mode Box Drawing
// ============================================================================

// Raw mode leaves the cursor where \n puts it, so the panel draws through
// these \r\n variants.

pub fn box_top_raw(out: &mut impl Write, title: &str) -> io::Result<()> {
    write!(out, "\r{}\r\n", frame_top(title))
}

pub fn box_rule_raw(out: &mut impl Write) -> io::Result<()> {
    write!(out, "\r{}\r\n", frame_rule())
}

pub fn box_line_raw(out: &mut impl Write, content: &str) -> io::Result<()> {
    write!(out, "\r{}\r\n", framed(content))
}

pub fn box_line_center_raw(out: &mut impl Write, content: &str) -> io::Result<()> {
    write!(out, "\r{}\r\n", framed_center(content))
}

pub fn box_bottom_raw(out: &mut impl Write) -> io::Result<()> {
    write!(out, "\r{}\r\n", frame_bottom())
}

/// Calculate display width accounting for ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framed_lines_have_fixed_width() {
        assert_eq!(framed("hello").chars().count(), BOX_WIDTH);
        assert_eq!(framed_center("hello").chars().count(), BOX_WIDTH);
        assert_eq!(frame_top("Title").chars().count(), BOX_WIDTH);
        assert_eq!(frame_bottom().chars().count(), BOX_WIDTH);
    }

    #[test]
    fn ansi_codes_do_not_count_toward_width() {
        let plain = framed("abc");
        let colored = framed(&format!("{RED}abc{RESET}"));
        assert_eq!(console_width(&plain), console_width(&colored));
    }
}
