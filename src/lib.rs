//! Password generation with class coverage and entropy-based strength feedback.
//!
//! The crate is split the same way the terminal front-end uses it: build a
//! pool from the enabled character classes, generate from a non-empty pool,
//! and estimate strength from `(length, pool size)` independently of any
//! generated password.
//!
//! ```rust
//! use strongpass::pass::{self, CharacterClass, ClassSet, PoolSelection};
//! use strongpass::strength;
//!
//! let classes: ClassSet = [CharacterClass::Uppercase, CharacterClass::Lowercase]
//!     .into_iter()
//!     .collect();
//!
//! let selection = pass::build_pool(classes);
//! assert_eq!(selection.total_size(), 52);
//!
//! if let PoolSelection::Active(pool) = &selection {
//!     let password = pass::generate_password(12, pool);
//!     assert_eq!(password.len(), 12);
//! }
//!
//! let bits = strength::estimate_entropy_bits(12, selection.total_size());
//! assert_eq!(strength::classify(bits).percent, 53);
//! ```

pub mod error;
pub mod pass;
pub mod settings;
pub mod strength;

pub use error::{Error, Result};
pub use pass::{
    ActivePool, CharacterClass, ClassSet, GenerationRequest, PoolSelection, build_pool, generate,
    generate_password,
};
pub use settings::Settings;
pub use strength::{StrengthAssessment, StrengthLevel, classify, estimate_entropy_bits};
