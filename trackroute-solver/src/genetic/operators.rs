//! Selection, recombination and mutation over index tours.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

/// Waypoint indices in visiting order.
pub(super) type Tour = Vec<usize>;

/// A tour starting at index zero with the remaining indices shuffled.
pub(super) fn random_tour<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Tour {
    let mut tour: Tour = (0..len).collect();
    if let Some((_, rest)) = tour.split_first_mut() {
        rest.shuffle(rng);
    }
    tour
}

/// Roulette-wheel selection in proportion to `fitness`.
///
/// Falls back to a uniform draw when the total fitness is not a positive
/// finite number, which happens when a tour has zero length.
#[expect(
    clippy::float_arithmetic,
    reason = "roulette selection walks a cumulative fitness sum"
)]
pub(super) fn select_parent<R: Rng + ?Sized>(fitness: &[f64], rng: &mut R) -> usize {
    if fitness.is_empty() {
        return 0;
    }
    let total: f64 = fitness.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return rng.gen_range(0..fitness.len());
    }

    let mut remaining = rng.r#gen::<f64>() * total;
    for (index, value) in fitness.iter().enumerate() {
        remaining -= value;
        if remaining <= 0.0 {
            return index;
        }
    }
    fitness.len().saturating_sub(1)
}

fn ordered_pair<R: Rng + ?Sized>(low: usize, len: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.gen_range(low..len);
    let b = rng.gen_range(low..len);
    (a.min(b), a.max(b))
}

/// Overwrite a random inclusive index range of `first` with the genes
/// `second` holds at the same positions.
///
/// The range may include position zero, where both parents hold the start.
/// Positions are copied without regard to genes already present, so the
/// child may repeat or miss indices.
pub(super) fn segment_copy_crossover<R: Rng + ?Sized>(
    first: &[usize],
    second: &[usize],
    rng: &mut R,
) -> Tour {
    let mut child = first.to_vec();
    if child.is_empty() {
        return child;
    }
    let (lo, hi) = ordered_pair(0, child.len(), rng);
    for (slot, gene) in child
        .iter_mut()
        .zip(second)
        .skip(lo)
        .take(hi.saturating_sub(lo).saturating_add(1))
    {
        *slot = *gene;
    }
    child
}

/// Keep `first[lo..=hi]` and fill the other non-start positions with the
/// genes of `second` that are not already present, in `second`'s order.
pub(super) fn order_crossover<R: Rng + ?Sized>(
    first: &[usize],
    second: &[usize],
    rng: &mut R,
) -> Tour {
    if first.len() < 3 {
        return first.to_vec();
    }
    let (lo, hi) = ordered_pair(1, first.len(), rng);
    let kept: HashSet<usize> = first
        .iter()
        .skip(lo)
        .take(hi.saturating_sub(lo).saturating_add(1))
        .copied()
        .collect();
    let mut donors = second.iter().skip(1).filter(|gene| !kept.contains(gene));

    first
        .iter()
        .enumerate()
        .map(|(position, &gene)| {
            if position == 0 || (lo..=hi).contains(&position) {
                gene
            } else {
                donors.next().copied().unwrap_or(gene)
            }
        })
        .collect()
}

/// Whether `tour` holds each index below its length exactly once.
pub(super) fn is_permutation(tour: &[usize]) -> bool {
    let mut seen = vec![false; tour.len()];
    tour.iter().all(|&gene| match seen.get_mut(gene) {
        Some(slot) if !*slot => {
            *slot = true;
            true
        }
        _ => false,
    })
}

/// Swap two random non-start positions. Tours of two or fewer are untouched.
pub(super) fn swap_mutation<R: Rng + ?Sized>(tour: &mut [usize], rng: &mut R) {
    if tour.len() <= 2 {
        return;
    }
    let a = rng.gen_range(1..tour.len());
    let b = rng.gen_range(1..tour.len());
    tour.swap(a, b);
}
