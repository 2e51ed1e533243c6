//! Widget state and key handling, kept free of terminal I/O.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use strongpass::pass::{CharacterClass, GenerationRequest};
use strongpass::strength::{self, StrengthAssessment};
use zeroize::Zeroizing;

use crate::clipboard::Clipboard;

/// How long a copy tip stays on screen.
pub const TIP_DURATION: Duration = Duration::from_millis(1500);

pub const TIP_NOTHING: &str = "Nothing to copy";
pub const TIP_COPIED: &str = "Copied to clipboard \u{2714}";
pub const TIP_FAILED: &str = "Copy failed, select and copy manually";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Lengthen,
    Shorten,
    Toggle(CharacterClass),
    Generate,
    Copy,
    Quit,
}

/// Map a key press to a widget action.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Right | KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => {
            Some(Action::Lengthen)
        }
        KeyCode::Left | KeyCode::Down | KeyCode::Char('-') => Some(Action::Shorten),
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            Some(Action::Toggle(CharacterClass::ALL[index]))
        }
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('g') => Some(Action::Generate),
        KeyCode::Char('c') => Some(Action::Copy),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

struct Tip {
    text: &'static str,
    shown_at: Instant,
}

pub struct Widget {
    request: GenerationRequest,
    password: Option<Zeroizing<String>>,
    strength: StrengthAssessment,
    warn: bool,
    tip: Option<Tip>,
}

impl Widget {
    pub fn new(request: GenerationRequest) -> Self {
        Self {
            request,
            password: None,
            strength: request.strength(),
            warn: false,
            tip: None,
        }
    }

    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().map(String::as_str)
    }

    pub fn strength(&self) -> &StrengthAssessment {
        &self.strength
    }

    /// Whether the "no character type selected" warning is showing.
    pub fn warning(&self) -> bool {
        self.warn
    }

    /// Current tip, if it has not expired at `now`.
    pub fn tip(&self, now: Instant) -> Option<&'static str> {
        self.tip
            .as_ref()
            .filter(|tip| now.saturating_duration_since(tip.shown_at) < TIP_DURATION)
            .map(|tip| tip.text)
    }

    /// Apply `action`. Returns false when the widget should close.
    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        action: Action,
        rng: &mut R,
        clipboard: Option<&mut dyn Clipboard>,
        now: Instant,
    ) -> bool {
        match action {
            Action::Lengthen => self.adjust_length(1),
            Action::Shorten => self.adjust_length(-1),
            Action::Toggle(class) => self.toggle(class),
            Action::Generate => self.generate(rng),
            Action::Copy => self.copy(clipboard, now),
            Action::Quit => return false,
        }
        true
    }

    pub fn adjust_length(&mut self, delta: i64) {
        self.request.adjust_length(delta);
        self.update_strength_preview();
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.request.classes_mut().toggle(class);
        self.update_strength_preview();
    }

    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        match self.request.generate(rng) {
            Some(password) => {
                self.warn = false;
                self.password = Some(Zeroizing::new(password));
                self.strength = self.request.strength();
            }
            None => {
                self.warn = true;
                self.password = None;
                self.strength = strength::classify(0.0);
            }
        }
    }

    pub fn copy(&mut self, clipboard: Option<&mut dyn Clipboard>, now: Instant) {
        let text = match (&self.password, clipboard) {
            (None, _) => TIP_NOTHING,
            (Some(_), None) => TIP_FAILED,
            (Some(password), Some(clipboard)) => match clipboard.copy(password) {
                Ok(()) => TIP_COPIED,
                Err(e) => {
                    log::warn!("{}", e);
                    TIP_FAILED
                }
            },
        };
        self.tip = Some(Tip {
            text,
            shown_at: now,
        });
    }

    fn update_strength_preview(&mut self) {
        self.strength = self.request.strength();
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use strongpass::pass::ClassSet;
    use strongpass::strength::StrengthLevel;

    use super::*;

    #[derive(Default)]
    struct FakeClipboard {
        contents: Option<String>,
        fail: bool,
    }

    impl Clipboard for FakeClipboard {
        fn copy(&mut self, text: &str) -> strongpass::Result<()> {
            if self.fail {
                return Err(strongpass::Error::Clipboard("no display".into()));
            }
            self.contents = Some(text.to_owned());
            Ok(())
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn widget() -> Widget {
        Widget::new(GenerationRequest::new(12, ClassSet::all()))
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(action_for(key(KeyCode::Right)), Some(Action::Lengthen));
        assert_eq!(action_for(key(KeyCode::Left)), Some(Action::Shorten));
        assert_eq!(
            action_for(key(KeyCode::Char('3'))),
            Some(Action::Toggle(CharacterClass::Digit))
        );
        assert_eq!(action_for(key(KeyCode::Enter)), Some(Action::Generate));
        assert_eq!(action_for(key(KeyCode::Char('c'))), Some(Action::Copy));
        assert_eq!(
            action_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(action_for(key(KeyCode::Char('5'))), None);
    }

    #[test]
    fn length_changes_refresh_preview() {
        let mut widget = widget();
        let before = widget.strength().entropy_bits;
        widget.adjust_length(1);
        assert_eq!(widget.request().length(), 13);
        assert!(widget.strength().entropy_bits > before);

        widget.adjust_length(100);
        assert_eq!(widget.request().length(), 32);
    }

    #[test]
    fn deselecting_everything_previews_zero() {
        let mut widget = widget();
        for class in CharacterClass::ALL {
            widget.toggle(class);
        }
        assert_eq!(widget.strength().percent, 0);
        assert_eq!(widget.strength().level, StrengthLevel::VeryWeak);
    }

    #[test]
    fn generate_with_empty_pool_warns_and_clears() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut widget = widget();
        widget.generate(&mut rng);
        assert!(widget.password().is_some());

        for class in CharacterClass::ALL {
            widget.toggle(class);
        }
        widget.generate(&mut rng);
        assert!(widget.warning());
        assert!(widget.password().is_none());
        assert_eq!(widget.strength().display_bits, 0);

        widget.toggle(CharacterClass::Digit);
        widget.generate(&mut rng);
        assert!(!widget.warning());
        assert!(
            widget
                .password()
                .unwrap()
                .chars()
                .all(|c| c.is_ascii_digit())
        );
    }

    #[test]
    fn copy_tips() {
        let now = Instant::now();
        let mut rng = StdRng::seed_from_u64(8);
        let mut clipboard = FakeClipboard::default();
        let mut widget = widget();

        widget.copy(Some(&mut clipboard), now);
        assert_eq!(widget.tip(now), Some(TIP_NOTHING));
        assert!(clipboard.contents.is_none());

        widget.generate(&mut rng);
        widget.copy(Some(&mut clipboard), now);
        assert_eq!(widget.tip(now), Some(TIP_COPIED));
        assert_eq!(clipboard.contents.as_deref(), widget.password());

        widget.copy(None, now);
        assert_eq!(widget.tip(now), Some(TIP_FAILED));

        clipboard.fail = true;
        widget.copy(Some(&mut clipboard), now);
        assert_eq!(widget.tip(now), Some(TIP_FAILED));
    }

    #[test]
    fn tips_expire() {
        let now = Instant::now();
        let mut widget = widget();
        widget.copy(None, now);
        assert!(widget.tip(now + Duration::from_millis(1499)).is_some());
        assert!(widget.tip(now + TIP_DURATION).is_none());
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut widget = widget();
        assert!(widget.apply(Action::Lengthen, &mut rng, None, Instant::now()));
        assert!(!widget.apply(Action::Quit, &mut rng, None, Instant::now()));
    }
}
