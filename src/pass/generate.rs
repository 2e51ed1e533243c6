//! Password generation.

use log::{debug, warn};
use rand::Rng;
use zeroize::Zeroize;

use super::charset::ActivePool;

/// Generate a password of exactly `length` characters from `pool`.
///
/// One character is drawn from every active alphabet first, the rest from a
/// uniformly chosen alphabet each, then the whole buffer is shuffled and cut
/// to `length`. When `length` is smaller than the number of active classes
/// the cut drops some of the guaranteed picks.
pub fn generate<R: Rng + ?Sized>(length: usize, pool: &ActivePool, rng: &mut R) -> String {
    let alphabets = pool.alphabets();

    if length < alphabets.len() {
        warn!(
            "length {} is shorter than {} selected classes; class coverage not guaranteed",
            length,
            alphabets.len()
        );
    }

    let mut picks: Vec<u8> = Vec::with_capacity(length.max(alphabets.len()));

    for alphabet in alphabets {
        picks.push(sample(alphabet, rng));
    }

    while picks.len() < length {
        let alphabet = alphabets[rng.gen_range(0..alphabets.len())];
        picks.push(sample(alphabet, rng));
    }

    shuffle(&mut picks, rng);
    picks.truncate(length);

    // Alphabets are ASCII, so each byte is one char
    let password: String = picks.iter().map(|&b| b as char).collect();
    picks.zeroize();

    debug!(
        "generated password: length={} pool_size={} classes={}",
        length,
        pool.total_size(),
        alphabets.len()
    );

    password
}

/// [`generate`] with the thread-local RNG.
pub fn generate_password(length: usize, pool: &ActivePool) -> String {
    generate(length, pool, &mut rand::thread_rng())
}

#[inline]
fn sample<R: Rng + ?Sized>(alphabet: &str, rng: &mut R) -> u8 {
    let bytes = alphabet.as_bytes();
    bytes[rng.gen_range(0..bytes.len())]
}

/// Fisher-Yates, back to front, `j` drawn from `0..=i`.
#[inline]
fn shuffle<R: Rng + ?Sized>(picks: &mut [u8], rng: &mut R) {
    for i in (1..picks.len()).rev() {
        let j = rng.gen_range(0..=i);
        picks.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::pass::{CharacterClass, ClassSet, build_pool};

    fn pool_of(classes: &[CharacterClass]) -> ActivePool {
        let set: ClassSet = classes.iter().copied().collect();
        build_pool(set)
            .as_active()
            .cloned()
            .expect("non-empty class set")
    }

    fn every_non_empty_subset() -> Vec<ClassSet> {
        (1u8..16)
            .map(|mask| {
                CharacterClass::ALL
                    .into_iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, class)| class)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn exact_length_for_every_subset() {
        let mut rng = StdRng::seed_from_u64(7);
        for classes in every_non_empty_subset() {
            let pool = build_pool(classes).as_active().cloned().unwrap();
            for length in 4..=32 {
                let password = generate(length, &pool, &mut rng);
                assert_eq!(password.chars().count(), length, "{classes:?}");
            }
        }
    }

    #[test]
    fn only_pool_characters() {
        let mut rng = StdRng::seed_from_u64(11);
        let pool = pool_of(&[CharacterClass::Digit, CharacterClass::Symbol]);
        for _ in 0..200 {
            let password = generate(24, &pool, &mut rng);
            assert!(password.chars().all(|c| pool.contains(c)), "{password}");
        }
    }

    #[test]
    fn covers_every_class_when_length_allows() {
        let mut rng = StdRng::seed_from_u64(3);
        for classes in every_non_empty_subset() {
            let pool = build_pool(classes).as_active().cloned().unwrap();
            for _ in 0..50 {
                let password = generate(4, &pool, &mut rng);
                for alphabet in pool.alphabets() {
                    assert!(
                        password.chars().any(|c| alphabet.contains(c)),
                        "{password} misses {alphabet}"
                    );
                }
            }
        }
    }

    #[test]
    fn short_length_truncates_coverage_picks() {
        let mut rng = StdRng::seed_from_u64(5);
        let pool = pool_of(&CharacterClass::ALL);
        let password = generate(2, &pool, &mut rng);
        assert_eq!(password.len(), 2);
        assert!(password.chars().all(|c| pool.contains(c)));
    }

    #[test]
    fn same_seed_same_password() {
        let pool = pool_of(&CharacterClass::ALL);
        let a = generate(16, &pool, &mut StdRng::seed_from_u64(42));
        let b = generate(16, &pool, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_keeps_multiset() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut bytes = b"abcdefghij".to_vec();
        shuffle(&mut bytes, &mut rng);
        let mut sorted = bytes.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, b"abcdefghij");
    }

    #[test]
    fn single_class_pool() {
        let pool = pool_of(&[CharacterClass::Lowercase]);
        let password = generate_password(32, &pool);
        assert_eq!(password.len(), 32);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }
}
