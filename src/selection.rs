//! Selection of breeding stock.

use crate::{Population, Weight};

/// Ranks a population by weight and retains the heaviest of each sex pool.
///
/// The population is sorted ascending on a copy — the caller's slice is
/// never reordered. The sorted sequence floor-splits into a lower "female"
/// pool and an upper "male" pool (an odd leftover element lands in the
/// male pool); sex here is positional, not an attribute of the
/// individuals. Each pool then keeps its heaviest `⌊retain / 2⌋` members,
/// taken from the tail of the sorted half.
///
/// Edge behavior, deliberate and saturating rather than an error:
///
/// - An odd `retain` loses one slot to the floor division; it is never
///   rounded up.
/// - If `⌊retain / 2⌋` exceeds a pool's size, the whole pool is returned.
///
/// Returns `(males, females)`, each in ascending weight order.
///
/// ```
/// use ratsim::select;
///
/// let pop = [3.0, 10.0, 1.0, 6.0, 5.0, 7.0, 9.0, 8.0, 7.0, 2.0];
/// let (males, females) = select(&pop, 4);
/// assert_eq!(males, vec![9.0, 10.0]);
/// assert_eq!(females, vec![5.0, 6.0]);
/// ```
pub fn select(population: &[Weight], retain: usize) -> (Population, Population) {
    let mut ranked = population.to_vec();
    ranked.sort_by(f64::total_cmp);

    let mid = ranked.len() / 2;
    let (female_pool, male_pool) = ranked.split_at(mid);

    let per_sex = retain / 2;
    let males = tail(male_pool, per_sex);
    let females = tail(female_pool, per_sex);
    (males, females)
}

/// The last `n` elements of `pool`, or all of them when `n` exceeds its
/// length.
fn tail(pool: &[Weight], n: usize) -> Population {
    pool[pool.len().saturating_sub(n)..].to_vec()
}
