//! Randomized selections over logical characters

use akshara_core::LogicalChar;
use rand::seq::{index, SliceRandom};
use rand::Rng;

/// The units in random order
pub fn shuffle_units<R: Rng + ?Sized>(units: &[LogicalChar], rng: &mut R) -> Vec<LogicalChar> {
    let mut shuffled = units.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// `count` units from distinct positions, kept in text order
///
/// Asking for more units than there are returns all of them.
pub fn sample_units<R: Rng + ?Sized>(
    units: &[LogicalChar],
    count: usize,
    rng: &mut R,
) -> Vec<LogicalChar> {
    let amount = count.min(units.len());
    let mut positions = index::sample(rng, units.len(), amount).into_vec();
    positions.sort_unstable();
    positions.into_iter().map(|i| units[i].clone()).collect()
}

/// `count` single-scalar units drawn uniformly, with repeats, from `inventory`
pub fn draw_fillers<R: Rng + ?Sized>(
    inventory: &[char],
    count: usize,
    rng: &mut R,
) -> Vec<LogicalChar> {
    if inventory.is_empty() {
        log::warn!("filler inventory is empty");
        return Vec::new();
    }
    (0..count)
        .map(|_| LogicalChar::single(inventory[rng.gen_range(0..inventory.len())]))
        .collect()
}
