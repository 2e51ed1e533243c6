//! Entropy estimate and strength classification.
//!
//! Entropy is combinatorial: every character is treated as an independent
//! uniform draw from the pool, `H = length * log2(pool_size)`. It says
//! nothing about the actual string that was produced.

use std::fmt;

use log::trace;

/// Bits that map to a full strength bar.
pub const FULL_BAR_BITS: f64 = 128.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    Excellent,
}

impl StrengthLevel {
    /// Lowest entropy (inclusive) for each level above `VeryWeak`,
    /// highest first.
    const THRESHOLDS: [(f64, StrengthLevel); 4] = [
        (128.0, StrengthLevel::Excellent),
        (60.0, StrengthLevel::Strong),
        (36.0, StrengthLevel::Medium),
        (28.0, StrengthLevel::Weak),
    ];

    pub fn from_bits(bits: f64) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(min, _)| bits >= *min)
            .map(|(_, level)| *level)
            .unwrap_or(StrengthLevel::VeryWeak)
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthAssessment {
    pub entropy_bits: f64,
    /// 0..=100, 128 bits is 100.
    pub percent: u8,
    pub level: StrengthLevel,
    /// `entropy_bits` truncated toward zero, for display.
    pub display_bits: u64,
}

impl fmt::Display for StrengthAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bits)", self.level, self.display_bits)
    }
}

/// Calculate password entropy in bits.
pub fn estimate_entropy_bits(length: usize, pool_size: usize) -> f64 {
    if pool_size <= 1 || length == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

/// Map an entropy estimate to a bar percentage and a level.
pub fn classify(entropy_bits: f64) -> StrengthAssessment {
    // NaN and negatives read as zero; +inf stays and saturates below
    let bits = entropy_bits.max(0.0);

    let percent = (bits / (FULL_BAR_BITS / 100.0)).round().clamp(0.0, 100.0) as u8;
    let level = StrengthLevel::from_bits(bits);
    let display_bits = bits.trunc() as u64;

    trace!("classified {bits:.2} bits as {level} ({percent}%)");

    StrengthAssessment {
        entropy_bits: bits,
        percent,
        level,
        display_bits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_pools_have_no_entropy() {
        assert_eq!(estimate_entropy_bits(12, 0), 0.0);
        assert_eq!(estimate_entropy_bits(12, 1), 0.0);
        assert_eq!(estimate_entropy_bits(0, 90), 0.0);
    }

    #[test]
    fn entropy_formula() {
        let bits = estimate_entropy_bits(12, 52);
        assert!((bits - 68.4053).abs() < 1e-3, "{bits}");
        assert_eq!(estimate_entropy_bits(8, 2), 8.0);
    }

    #[test]
    fn entropy_is_strictly_increasing() {
        for pool in [2, 10, 52, 90] {
            for length in 1..32 {
                assert!(
                    estimate_entropy_bits(length + 1, pool) > estimate_entropy_bits(length, pool)
                );
            }
        }
        for length in [1, 4, 16, 32] {
            for pool in 2..90 {
                assert!(
                    estimate_entropy_bits(length, pool + 1) > estimate_entropy_bits(length, pool)
                );
            }
        }
    }

    #[test]
    fn level_boundaries() {
        let cases = [
            (128.0, StrengthLevel::Excellent),
            (127.99, StrengthLevel::Strong),
            (60.0, StrengthLevel::Strong),
            (59.99, StrengthLevel::Medium),
            (36.0, StrengthLevel::Medium),
            (35.99, StrengthLevel::Weak),
            (28.0, StrengthLevel::Weak),
            (27.99, StrengthLevel::VeryWeak),
            (0.0, StrengthLevel::VeryWeak),
        ];
        for (bits, level) in cases {
            assert_eq!(classify(bits).level, level, "{bits} bits");
        }
    }

    #[test]
    fn percent_mapping() {
        assert_eq!(classify(0.0).percent, 0);
        assert_eq!(classify(64.0).percent, 50);
        assert_eq!(classify(128.0).percent, 100);
        assert_eq!(classify(400.0).percent, 100);
        // 0.64 / 1.28 = 0.5 rounds up
        assert_eq!(classify(0.64).percent, 1);
    }

    #[test]
    fn zero_is_very_weak() {
        let assessment = classify(0.0);
        assert_eq!(assessment.level, StrengthLevel::VeryWeak);
        assert_eq!(assessment.percent, 0);
        assert_eq!(assessment.display_bits, 0);
    }

    #[test]
    fn display_bits_truncate() {
        let assessment = classify(68.99);
        assert_eq!(assessment.display_bits, 68);
        assert_eq!(assessment.to_string(), "Strong (68 bits)");
    }

    #[test]
    fn odd_inputs_are_tolerated() {
        let nan = classify(f64::NAN);
        assert_eq!(nan.level, StrengthLevel::VeryWeak);
        assert_eq!(nan.percent, 0);

        let negative = classify(-5.0);
        assert_eq!(negative.display_bits, 0);
        assert_eq!(negative.entropy_bits, 0.0);

        let infinite = classify(f64::INFINITY);
        assert_eq!(infinite.level, StrengthLevel::Excellent);
        assert_eq!(infinite.percent, 100);
    }
}
