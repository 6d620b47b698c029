//! Uniform random bouquets drawn without replacement.

use rand::Rng;
use rand::seq::SliceRandom;
use suitor_core::{Bouquet, FlowerCounts};

/// Draws up to `size` flowers uniformly without replacement, removing them
/// from `inventory`.
pub fn sample_bouquet<R: Rng + ?Sized>(
    inventory: &mut FlowerCounts,
    size: u32,
    rng: &mut R,
) -> Bouquet {
    let pool = inventory.flatten();
    let chosen: Vec<_> = pool
        .choose_multiple(rng, size as usize)
        .copied()
        .collect();

    let mut bouquet = Bouquet::empty();
    for flower in chosen {
        if inventory.take(&flower) {
            bouquet.add(flower, 1);
        }
    }
    bouquet
}
