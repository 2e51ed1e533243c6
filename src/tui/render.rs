//! Frame layout for the widget.

use std::time::Instant;

use strongpass::pass::{CharacterClass, GenerationRequest};
use strongpass::strength::StrengthLevel;

use super::widget::Widget;
use crate::terminal::{
    BOLD, CYAN, DIM, GREEN, ORANGE, RED, RESET, YELLOW, box_bottom, box_line, box_rule, box_top,
    meter, slider,
};

const SLIDER_WIDTH: usize = GenerationRequest::MAX_LENGTH - GenerationRequest::MIN_LENGTH + 1;

pub fn level_color(level: StrengthLevel) -> &'static str {
    match level {
        StrengthLevel::VeryWeak => RED,
        StrengthLevel::Weak => ORANGE,
        StrengthLevel::Medium => YELLOW,
        StrengthLevel::Strong => GREEN,
        StrengthLevel::Excellent => CYAN,
    }
}

/// Build every line of the current frame.
pub fn frame(widget: &Widget, now: Instant) -> Vec<String> {
    let request = widget.request();
    let mut lines = Vec::with_capacity(20);

    lines.push(box_top("Password"));
    lines.push(match widget.password() {
        Some(password) => box_line(&format!("{BOLD}{password}{RESET}")),
        None => box_line(&format!("{DIM}[Enter] to generate{RESET}")),
    });
    lines.push(box_rule());

    lines.push(box_line(&format!(
        "Length {:>2}  {}",
        request.length(),
        slider(
            request.length(),
            GenerationRequest::MIN_LENGTH,
            GenerationRequest::MAX_LENGTH,
            SLIDER_WIDTH,
        )
    )));
    lines.push(box_line(""));

    let classes = request.classes();
    for (i, class) in CharacterClass::ALL.into_iter().enumerate() {
        let mark = if classes.contains(class) { "x" } else { " " };
        lines.push(box_line(&format!("{}) [{}] {}", i + 1, mark, class)));
    }
    lines.push(box_bottom());

    let strength = widget.strength();
    lines.extend(meter(
        strength.percent,
        &strength.to_string(),
        level_color(strength.level),
    ));

    if widget.warning() {
        lines.push(format!("{RED}Select at least one character type.{RESET}"));
    } else {
        lines.push(String::new());
    }
    lines.push(widget.tip(now).unwrap_or_default().to_string());

    lines.push(format!(
        "{DIM}[Enter] Generate  [c] Copy  [1-4] Toggle  [\u{2190}/\u{2192}] Length  [q] Quit{RESET}"
    ));

    lines
}
