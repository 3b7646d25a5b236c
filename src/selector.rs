//! Budgeted word selection.
//!
//! Applies a word transform to a target fraction of the tokens of a
//! sentence. Positions are drawn at random without replacement from a
//! candidate pool; an index leaves the pool *before* its word is tried, so
//! every position is attempted at most once whether or not the transform
//! changes it. Only tokens whose value actually changed count toward the
//! budget, and the loop stops early once the pool is exhausted, which
//! bounds it to one iteration per token.

use rand::Rng;
use tracing::trace;

use crate::attack::Level;

/// Outcome of one selector run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionReport {
    /// Number of tokens the level asked for.
    pub target: usize,
    /// Positions drawn from the pool.
    pub attempted: usize,
    /// Positions whose token changed.
    pub perturbed: usize,
}

impl SelectionReport {
    /// Whether the budget was met.
    #[inline]
    pub fn reached_target(&self) -> bool {
        self.perturbed >= self.target
    }
}

/// Number of tokens to perturb: `level × token_count`, rounded half away
/// from zero.
pub fn budget(level: Level, token_count: usize) -> usize {
    (level.value() * token_count as f64).round() as usize
}

/// Mutate `tokens` in place until `budget(level, tokens.len())` of them
/// changed or every position was tried.
///
/// `transform` receives the current token and the generator and returns
/// the replacement.
pub fn select_and_apply<R, F>(
    tokens: &mut [String],
    level: Level,
    rng: &mut R,
    mut transform: F,
) -> SelectionReport
where
    R: Rng + ?Sized,
    F: FnMut(&str, &mut R) -> String,
{
    let mut report = SelectionReport {
        target: budget(level, tokens.len()),
        ..SelectionReport::default()
    };
    let mut pool: Vec<usize> = (0..tokens.len()).collect();

    while report.perturbed < report.target && !pool.is_empty() {
        let pick = rng.gen_range(0..pool.len());
        let index = pool.swap_remove(pick);
        report.attempted += 1;

        let perturbed = transform(&tokens[index], &mut *rng);
        let changed = perturbed != tokens[index];
        trace!(index, token = %tokens[index], %perturbed, changed, "selector attempt");

        if changed {
            tokens[index] = perturbed;
            report.perturbed += 1;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_budget_rounds() {
        assert_eq!(budget(Level::ZERO, 10), 0);
        assert_eq!(budget(Level::FULL, 6), 6);
        assert_eq!(budget(Level::new(0.3).unwrap(), 6), 2);
        assert_eq!(budget(Level::new(0.25).unwrap(), 6), 2);
        assert_eq!(budget(Level::new(0.05).unwrap(), 6), 0);
        assert_eq!(budget(Level::new(0.5).unwrap(), 5), 3);
    }

    #[test]
    fn test_zero_level_attempts_nothing() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut words = tokens(&["a", "b", "c"]);
        let report = select_and_apply(&mut words, Level::ZERO, &mut rng, |_, _| {
            panic!("transform must not run")
        });
        assert_eq!(report.attempted, 0);
        assert_eq!(words, tokens(&["a", "b", "c"]));
    }

    #[test]
    fn test_stops_at_target() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut words = tokens(&["one", "two", "three", "four"]);
        let report = select_and_apply(&mut words, Level::new(0.5).unwrap(), &mut rng, |w, _| {
            w.to_uppercase()
        });
        assert_eq!(report.target, 2);
        assert_eq!(report.perturbed, 2);
        assert_eq!(report.attempted, 2);
        assert_eq!(words.iter().filter(|w| w.chars().all(char::is_uppercase)).count(), 2);
    }

    #[test]
    fn test_pool_exhaustion_terminates() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut words = tokens(&["a", "b", "c", "d"]);
        let mut calls = 0;
        let report = select_and_apply(&mut words, Level::FULL, &mut rng, |w, _| {
            calls += 1;
            w.to_string()
        });
        assert_eq!(calls, 4);
        assert_eq!(report.attempted, 4);
        assert_eq!(report.perturbed, 0);
        assert!(!report.reached_target());
    }

    #[test]
    fn test_each_index_attempted_once() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut words: Vec<String> = (0..20).map(|i| i.to_string()).collect();
        let mut seen = Vec::new();
        select_and_apply(&mut words, Level::FULL, &mut rng, |w, _| {
            seen.push(w.to_string());
            w.to_string()
        });
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 20);
    }

    #[test]
    fn test_empty_sentence() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut words: Vec<String> = Vec::new();
        let report = select_and_apply(&mut words, Level::FULL, &mut rng, |w, _| w.to_string());
        assert_eq!(report, SelectionReport::default());
    }
}
