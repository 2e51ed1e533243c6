//! Crate error type.
//!
//! The generation core is infallible; errors only come from the edges
//! (settings file, clipboard, terminal).

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Settings format error: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, Error>;
