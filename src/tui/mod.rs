//! Interactive widget: live strength preview, generate, copy.

mod render;
mod widget;

use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};
use strongpass::Settings;
use strongpass::pass::GenerationRequest;

use crate::cli::prompts;
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::terminal::{ScreenGuard, write_frame};

use widget::{Widget, action_for};

/// Redraw at least this often so copy tips expire on screen.
const TICK: Duration = Duration::from_millis(250);

/// Run the widget until the user quits. Returns the process exit status.
pub fn run(settings_path: &Path) -> i32 {
    let (mut settings, loaded) = match Settings::load_from(settings_path) {
        Ok(settings) => (settings, true),
        Err(e) => {
            prompts::warn(&format!("Failed to load settings: {}", e));
            (Settings::default(), false)
        }
    };

    let mut clipboard = SystemClipboard::new()
        .map_err(|e| info!("clipboard unavailable: {}", e))
        .ok();
    let mut rng = rand::thread_rng();
    let mut widget = Widget::new(settings.request());

    let mut guard = match ScreenGuard::new() {
        Ok(guard) => guard,
        Err(e) => {
            prompts::error(&format!("Failed to set up terminal: {}", e));
            return 1;
        }
    };

    let status = loop {
        if let Err(e) = write_frame(&render::frame(&widget, Instant::now())) {
            break Err(e);
        }

        match event::poll(TICK) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(e) => break Err(e),
        }

        let key = match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
            Ok(_) => continue,
            Err(e) => break Err(e),
        };

        let Some(action) = action_for(key) else {
            continue;
        };
        let sink = clipboard.as_mut().map(|c| c as &mut dyn Clipboard);
        if !widget.apply(action, &mut rng, sink, Instant::now()) {
            break Ok(());
        }
    };

    guard.restore();

    if let Err(e) = status {
        prompts::error(&format!("Terminal error: {}", e));
        return 1;
    }

    if let Err(e) = persist(&mut settings, widget.request(), settings_path, loaded) {
        warn!("could not save settings: {}", e);
    }
    0
}

/// Store the last length and classes. A file that failed to load is left
/// as it was. Returns whether anything was written.
fn persist(
    settings: &mut Settings,
    request: &GenerationRequest,
    path: &Path,
    loaded: bool,
) -> strongpass::Result<bool> {
    if !loaded {
        info!("not saving over unreadable {}", path.display());
        return Ok(false);
    }
    settings.apply_request(request);
    settings.save_to(path)?;
    Ok(true)
}
