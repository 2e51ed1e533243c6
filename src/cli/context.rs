//! CLI context - bundles settings, flags, and clipboard state.

use std::io::{self, Write};

use log::info;
use strongpass::pass::{PoolSelection, generate};
use strongpass::settings::Settings;
use zeroize::Zeroize;

use super::{CliFlags, prompts};
use crate::clipboard::{Clipboard, SystemClipboard};

/// Early exit with a process status - not necessarily an error.
#[derive(Debug, PartialEq, Eq)]
pub struct Done(pub i32);

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<SystemClipboard>,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        let settings = if flags.saved {
            Settings::load_from(&flags.settings_path()).unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Self {
            settings,
            clipboard: None,
            flags,
        }
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.apply_flags();
        self.handle_save();
        self.handle_strength()?;
        self.open_clipboard()?;
        self.generate_output()
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        if let Some(length) = self.flags.length {
            self.settings.length = length;
        }
        if let Some(number) = self.flags.number {
            self.settings.number_of_passwords = number.max(1);
        }
        self.flags.apply_exclusions(&mut self.settings.classes);
        if self.flags.clipboard {
            self.settings.to_clipboard = true;
        }
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        let path = self.flags.settings_path();
        match self.settings.save_to(&path) {
            Ok(()) => prompts::settings_saved(&path.display().to_string()),
            Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
        }
    }

    fn handle_strength(&self) -> Result<(), Done> {
        if !self.flags.strength {
            return Ok(());
        }
        let request = self.settings.request();
        if request.pool().is_empty() {
            prompts::empty_pool();
        }
        let assessment = request.strength();
        println!("{} {}%", assessment, assessment.percent);
        Err(Done(0))
    }

    fn open_clipboard(&mut self) -> Result<(), Done> {
        if !self.settings.to_clipboard {
            return Ok(());
        }
        match SystemClipboard::new() {
            Ok(clipboard) => self.clipboard = Some(clipboard),
            Err(e) => {
                info!("{}", e);
                if prompts::clipboard_fallback_prompt() {
                    self.settings.to_clipboard = false;
                } else {
                    return Err(Done(0));
                }
            }
        }
        Ok(())
    }

    /// Generate passwords to the clipboard or stdout.
    fn generate_output(&mut self) -> Result<(), Done> {
        let request = self.settings.request();
        let assessment = request.strength();

        let PoolSelection::Active(pool) = request.pool() else {
            prompts::empty_pool();
            prompts::strength(&assessment);
            return Err(Done(1));
        };

        let count = self.settings.number_of_passwords.max(1);
        let mut rng = rand::thread_rng();
        prompts::strength(&assessment);

        if self.settings.to_clipboard
            && let Some(clipboard) = self.clipboard.as_mut()
        {
            let mut passwords = String::new();
            for n in 0..count {
                if n > 0 {
                    passwords.push('\n');
                }
                let mut password = generate(request.length(), &pool, &mut rng);
                passwords.push_str(&password);
                password.zeroize();
            }

            let copied = clipboard.copy(&passwords);
            passwords.zeroize();

            return match copied {
                Ok(()) => {
                    prompts::clipboard_copied(count);
                    Ok(())
                }
                Err(e) => {
                    prompts::clipboard_error(&e.to_string());
                    Err(Done(1))
                }
            };
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        for _ in 0..count {
            let mut password = generate(request.length(), &pool, &mut rng);
            password.push('\n');
            let written = out.write_all(password.as_bytes());
            password.zeroize();
            // Reader went away (e.g. `| head`)
            if written.is_err() {
                break;
            }
        }
        let _ = out.flush();
        Ok(())
    }
}
