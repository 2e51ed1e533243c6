//! Password pool building, generation and the length-bound request.

pub mod charset;
mod generate;
mod request;

pub use charset::{ActivePool, CharacterClass, ClassSet, PoolSelection, build_pool};
pub use generate::{generate, generate_password};
pub use request::{GenerationRequest, clamp_length, parse_length};
