//! Token re-segmentation.

use rand::Rng;

/// Fuse adjacent tokens by dropping the boundary after each token with
/// probability `probability`.
///
/// Deferred tokens accumulate in a buffer and are glued to the next token
/// that is emitted; a buffer still pending at the end becomes the last
/// token. No characters are added or lost.
///
/// ```rust
/// use libperturb::segment::segment;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let tokens = vec!["I".to_string(), "like".to_string(), "apples".to_string()];
/// let mut rng = StdRng::seed_from_u64(0);
/// assert_eq!(segment(&tokens, 1.0, &mut rng), vec!["Ilikeapples".to_string()]);
/// assert_eq!(segment(&tokens, 0.0, &mut rng), tokens);
/// ```
pub fn segment<R, S>(tokens: &[S], probability: f64, rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    let mut segmented = Vec::with_capacity(tokens.len());
    let mut buffer = String::new();

    for token in tokens {
        let token = token.as_ref();
        if rng.gen::<f64>() < probability {
            buffer.push_str(token);
        } else {
            buffer.push_str(token);
            segmented.push(std::mem::take(&mut buffer));
        }
    }

    if !buffer.is_empty() {
        segmented.push(buffer);
    }

    segmented
}
