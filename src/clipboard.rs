//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use log::debug;
use strongpass::{Error, Result};

/// Destination for a copied password.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// On X11 the selection is served by this process and is gone once it exits.
pub struct SystemClipboard(ClipboardContext);

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        ClipboardContext::new()
            .map(SystemClipboard)
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.0
            .set_contents(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        debug!("copied {} chars to clipboard", text.len());
        Ok(())
    }
}
