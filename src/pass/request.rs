//! Length binding and the request a front-end re-evaluates on every change.

use rand::Rng;

use super::charset::{ClassSet, PoolSelection, build_pool};
use super::generate::generate;
use crate::strength::{self, StrengthAssessment};

/// Target length plus enabled classes. The length is always within
/// [`GenerationRequest::MIN_LENGTH`, `GenerationRequest::MAX_LENGTH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
    classes: ClassSet,
}

impl GenerationRequest {
    pub const MIN_LENGTH: usize = 4;
    pub const MAX_LENGTH: usize = 32;
    pub const DEFAULT_LENGTH: usize = 16;

    pub fn new(length: i64, classes: ClassSet) -> Self {
        Self {
            length: clamp_length(length),
            classes,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    pub fn classes_mut(&mut self) -> &mut ClassSet {
        &mut self.classes
    }

    pub fn set_length(&mut self, length: i64) {
        self.length = clamp_length(length);
    }

    /// Move the length by `delta`, staying in range.
    pub fn adjust_length(&mut self, delta: i64) {
        self.set_length((self.length as i64).saturating_add(delta));
    }

    pub fn pool(&self) -> PoolSelection {
        build_pool(self.classes)
    }

    /// Strength preview; an empty pool reads as zero bits.
    pub fn strength(&self) -> StrengthAssessment {
        let bits = strength::estimate_entropy_bits(self.length, self.pool().total_size());
        strength::classify(bits)
    }

    /// Generate a password, or `None` when no class is enabled.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<String> {
        match self.pool() {
            PoolSelection::Empty => None,
            PoolSelection::Active(pool) => Some(generate(self.length, &pool, rng)),
        }
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: Self::DEFAULT_LENGTH,
            classes: ClassSet::all(),
        }
    }
}

pub fn clamp_length(length: i64) -> usize {
    length.clamp(
        GenerationRequest::MIN_LENGTH as i64,
        GenerationRequest::MAX_LENGTH as i64,
    ) as usize
}

/// Parse user-typed length text: optional sign and leading digits, anything
/// else counts as 0. The result is clamped.
pub fn parse_length(input: &str) -> usize {
    let trimmed = input.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    let value = if digits.is_empty() {
        0
    } else {
        // Overflowing input saturates to the far end of the range
        digits.parse::<i64>().unwrap_or(i64::MAX)
    };

    clamp_length(sign * value)
}
