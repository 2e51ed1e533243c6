//! Terminal output utilities.
//!
//! Everything here builds lines instead of printing them, so the widget can
//! render a whole frame in raw mode with `\r\n` endings and one write.

use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const DIM: &str = "\x1b[2m";
pub const BOLD: &str = "\x1b[1m";
pub const RED: &str = "\x1b[38;5;9m";
pub const ORANGE: &str = "\x1b[38;5;208m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const CYAN: &str = "\x1b[38;5;14m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub const CLEAR: &str = "\x1b[2J\x1b[3J\x1b[H";

/// Write a rendered frame in one go.
pub fn write_frame(lines: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(CLEAR.as_bytes())?;
    for line in lines {
        out.write_all(line.as_bytes())?;
        out.write_all(b"\r\n")?;
    }
    out.flush()
}

// ============================================================================
// Box Drawing (56 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 56;

/// ┌─ Title ──────────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// │ content          │
pub fn box_line(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// ├──────────────────┤
pub fn box_rule() -> String {
    format!("├{}┤", "─".repeat(BOX_WIDTH - 2))
}

/// └──────────────────┘
pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Display width, skipping ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
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

/// `s` with ANSI escape sequences removed.
pub fn strip_ansi(s: &str) -> String {
    let mut plain = String::with_capacity(s.len());
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            plain.push(c);
        }
    }
    plain
}

// ============================================================================
// Meter
// ============================================================================

/// Three-line bar filled to `percent` in `color`, with `text` centered.
pub fn meter(percent: u8, text: &str, color: &str) -> [String; 3] {
    let inner_width = BOX_WIDTH - 2;
    let filled = (percent.min(100) as usize * inner_width) / 100;

    let text_chars: Vec<char> = text.chars().collect();
    let padding = inner_width.saturating_sub(text_chars.len()) / 2;

    let mut content: Vec<char> = vec![' '; inner_width];
    for (i, ch) in text_chars.iter().enumerate() {
        if padding + i < inner_width {
            content[padding + i] = *ch;
        }
    }

    let filled_text: String = content[..filled].iter().collect();
    let empty_text: String = content[filled..].iter().collect();

    let top = format!(
        "┌{color}{}{RESET}{}┐",
        "▄".repeat(filled),
        "─".repeat(inner_width - filled)
    );
    let middle = format!("│{color}\x1b[7m{filled_text}{RESET}{empty_text}│");
    let bottom = format!(
        "└{color}{}{RESET}{}┘",
        "▀".repeat(filled),
        "─".repeat(inner_width - filled)
    );

    [top, middle, bottom]
}

/// Horizontal slider for `value` in `min..=max`.
pub fn slider(value: usize, min: usize, max: usize, width: usize) -> String {
    let span = max.saturating_sub(min).max(1);
    let pos = (value.clamp(min, max) - min) * (width - 1) / span;
    (0..width)
        .map(|i| if i == pos { '●' } else { '─' })
        .collect()
}
