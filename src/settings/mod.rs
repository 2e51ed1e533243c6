//! Persisted generator settings.

mod file;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pass::{ClassSet, GenerationRequest, clamp_length};

pub use file::{CONFIG_ENV, default_path};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: usize,
    pub classes: ClassSet,
    pub number_of_passwords: usize,
    pub to_clipboard: bool,
}

impl Settings {
    /// Load from `path`, writing defaults there if it is missing or blank.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        file::load(path)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        file::save(self, path)
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.length as i64, self.classes)
    }

    /// Copy length and classes back from an edited request.
    pub fn apply_request(&mut self, request: &GenerationRequest) {
        self.length = request.length();
        self.classes = request.classes();
    }

    /// Bring loaded values back in range.
    fn normalize(&mut self) {
        self.length = clamp_length(self.length.min(i64::MAX as usize) as i64);
        self.number_of_passwords = self.number_of_passwords.max(1);
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: GenerationRequest::DEFAULT_LENGTH,
            classes: ClassSet::all(),
            number_of_passwords: 1,
            to_clipboard: false,
        }
    }
}
