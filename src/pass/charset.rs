//! Character classes and pool building.

use std::fmt;

use serde::{Deserialize, Serialize};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>/?~";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Every class, in pool order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// Fixed ASCII alphabet for this class.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Uppercase (A-Z)",
            CharacterClass::Lowercase => "Lowercase (a-z)",
            CharacterClass::Digit => "Numbers (0-9)",
            CharacterClass::Symbol => "Symbols (!@#$...)",
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of enabled character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "Vec<CharacterClass>", from = "Vec<CharacterClass>")]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub const fn all() -> Self {
        ClassSet(0b1111)
    }

    pub fn contains(self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharacterClass) {
        self.0 &= !class.bit();
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        if enabled {
            self.insert(class);
        } else {
            self.remove(class);
        }
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.0 ^= class.bit();
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Enabled classes in pool order.
    pub fn iter(self) -> impl Iterator<Item = CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

impl From<Vec<CharacterClass>> for ClassSet {
    fn from(classes: Vec<CharacterClass>) -> Self {
        classes.into_iter().collect()
    }
}

impl From<ClassSet> for Vec<CharacterClass> {
    fn from(set: ClassSet) -> Self {
        set.iter().collect()
    }
}

/// A pool with at least one alphabet. Only [`build_pool`] constructs one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePool {
    alphabets: Vec<&'static str>,
    total_size: usize,
}

impl ActivePool {
    /// One alphabet per enabled class, in pool order.
    pub fn alphabets(&self) -> &[&'static str] {
        &self.alphabets
    }

    pub fn total_size(&self) -> usize {
        self.total_size
    }

    /// Whether `c` belongs to any active alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.alphabets.iter().any(|alphabet| alphabet.contains(c))
    }
}

/// Result of [`build_pool`]. `Empty` is the normal state when every class is
/// deselected; callers must branch on it before generating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolSelection {
    Empty,
    Active(ActivePool),
}

impl PoolSelection {
    pub fn total_size(&self) -> usize {
        match self {
            PoolSelection::Empty => 0,
            PoolSelection::Active(pool) => pool.total_size,
        }
    }

    pub fn active_alphabets(&self) -> &[&'static str] {
        match self {
            PoolSelection::Empty => &[],
            PoolSelection::Active(pool) => pool.alphabets(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PoolSelection::Empty)
    }

    pub fn as_active(&self) -> Option<&ActivePool> {
        match self {
            PoolSelection::Empty => None,
            PoolSelection::Active(pool) => Some(pool),
        }
    }
}

/// Build the character pool from the enabled classes.
pub fn build_pool(classes: ClassSet) -> PoolSelection {
    let alphabets: Vec<&'static str> = classes.iter().map(CharacterClass::alphabet).collect();

    if alphabets.is_empty() {
        return PoolSelection::Empty;
    }

    let total_size = alphabets.iter().map(|alphabet| alphabet.len()).sum();
    PoolSelection::Active(ActivePool {
        alphabets,
        total_size,
    })
}
