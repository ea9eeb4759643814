//! Pairing and litter production.

use crate::sampling::{shuffled, uniform_int};
use crate::{Population, Weight};
use rand::Rng;

/// Pairs the retained adults and produces the next crop of offspring.
///
/// Both groups are shuffled independently, then paired by index. Pairing
/// truncates to the shorter group: any surplus individuals in the longer
/// one sit out the generation. With a validated even retention count the
/// groups arrive equal-sized, so a mismatch indicates upstream pool
/// truncation and is logged.
///
/// Each pair contributes `litter_size` offspring, every one an inclusive
/// uniform integer-gram draw between the pair's two weights. Sex is
/// assigned by sort position upstream, so the "female" weight is usually
/// the lower one, but the pair is normalized to `(lo, hi)` before drawing
/// rather than trusting that ordering; an inverted pair is logged. When
/// the pair's weights straddle no whole gram the litter inherits the
/// heavier parent's weight, keeping every offspring inside the parents'
/// range.
///
/// Output length is `litter_size × min(males.len(), females.len())`.
pub fn breed<R: Rng + ?Sized>(
    males: &[Weight],
    females: &[Weight],
    litter_size: usize,
    rng: &mut R,
) -> Population {
    if males.len() != females.len() {
        tracing::warn!(
            males = males.len(),
            females = females.len(),
            "breeding groups differ in size; surplus individuals are dropped"
        );
    }

    let males = shuffled(males, rng);
    let females = shuffled(females, rng);

    let pairs = males.len().min(females.len());
    let mut children = Vec::with_capacity(pairs * litter_size);
    for (male, female) in males.into_iter().zip(females) {
        if male < female {
            tracing::warn!(male, female, "inverted breeding pair; normalizing range");
        }
        let (lo, hi) = (male.min(female), male.max(female));
        for _ in 0..litter_size {
            let child = if lo.ceil() <= hi.floor() {
                uniform_int(lo, hi, rng)
            } else {
                hi
            };
            children.push(child);
        }
    }
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_breed_offspring_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let males = [400.0, 500.0, 600.0];
        let females = [200.0, 250.0, 300.0];
        let children = breed(&males, &females, 8, &mut rng);
        assert_eq!(children.len(), 24);
    }

    #[test]
    fn test_breed_offspring_within_parent_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let males = [1.0, 2.0, 3.0];
        let females = [4.0, 5.0, 6.0];
        let children = breed(&males, &females, 2, &mut rng);
        for c in &children {
            assert!((1.0..=6.0).contains(c), "offspring {c} outside parent range");
        }
    }

    #[test]
    fn test_breed_truncates_to_shorter_group() {
        let mut rng = StdRng::seed_from_u64(42);
        let males = [400.0, 500.0, 600.0, 700.0];
        let females = [200.0, 300.0];
        let children = breed(&males, &females, 3, &mut rng);
        assert_eq!(children.len(), 6);
    }

    #[test]
    fn test_breed_offspring_are_whole_grams() {
        let mut rng = StdRng::seed_from_u64(42);
        let males = [412.7, 555.1];
        let females = [239.4, 301.9];
        let children = breed(&males, &females, 4, &mut rng);
        for c in &children {
            assert_eq!(*c, c.trunc(), "offspring {c} is not a whole gram");
        }
    }

    #[test]
    fn test_breed_handles_inverted_pair() {
        let mut rng = StdRng::seed_from_u64(42);
        // Single pair, female heavier than male.
        let males = [200.0];
        let females = [500.0];
        let children = breed(&males, &females, 10, &mut rng);
        for c in &children {
            assert!((200.0..=500.0).contains(c));
        }
    }

    #[test]
    fn test_breed_pair_straddling_no_whole_gram() {
        let mut rng = StdRng::seed_from_u64(42);
        let males = [300.2];
        let females = [300.7];
        let children = breed(&males, &females, 3, &mut rng);
        assert_eq!(children, vec![300.7, 300.7, 300.7]);
    }

    #[test]
    fn test_breed_empty_group_yields_no_offspring() {
        let mut rng = StdRng::seed_from_u64(42);
        let children = breed(&[], &[200.0, 300.0], 8, &mut rng);
        assert!(children.is_empty());
    }
}
