//! Letter shuffling attacks.

use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle every character of `word` into a random permutation.
///
/// Words shorter than three characters are returned unchanged. Up to
/// `max_attempts` shuffles are tried until one differs from the input; a
/// word like `"aaa"` cannot change and comes back as is.
///
/// # Example
///
/// ```rust
/// use libperturb::transform::swap_full;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let shuffled = swap_full("hello", 10, &mut rng);
///
/// let mut a: Vec<char> = shuffled.chars().collect();
/// let mut b: Vec<char> = "hello".chars().collect();
/// a.sort_unstable();
/// b.sort_unstable();
/// assert_eq!(a, b);
/// ```
pub fn swap_full<R: Rng + ?Sized>(word: &str, max_attempts: usize, rng: &mut R) -> String {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < 3 {
        return word.to_string();
    }
    shuffle_range(word, &chars, 0..chars.len(), max_attempts, rng)
}

/// Shuffle the interior of `word`, keeping its first and last characters.
///
/// Words shorter than four characters are returned unchanged; otherwise
/// this retries like [`swap_full`].
pub fn swap_inner<R: Rng + ?Sized>(word: &str, max_attempts: usize, rng: &mut R) -> String {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < 4 {
        return word.to_string();
    }
    shuffle_range(word, &chars, 1..chars.len() - 1, max_attempts, rng)
}

fn shuffle_range<R: Rng + ?Sized>(
    word: &str,
    chars: &[char],
    range: std::ops::Range<usize>,
    max_attempts: usize,
    rng: &mut R,
) -> String {
    let mut perturbed = word.to_string();

    for _ in 0..max_attempts {
        let mut shuffled = chars.to_vec();
        shuffled[range.clone()].shuffle(rng);
        perturbed = shuffled.into_iter().collect();
        if perturbed != word {
            break;
        }
    }

    perturbed
}
