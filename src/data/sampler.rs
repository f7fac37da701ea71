// ============================================================
// Layer 4 — Random Sampler
// ============================================================
// Picks `amount` distinct items out of a slice, uniformly at
// random, WITHOUT replacement. The picked items come back in a
// random order too — not in their original order.
//
// The random source is always passed in by the caller:
//   - production uses rand::thread_rng()
//   - tests and reproducible runs use StdRng::seed_from_u64
// so the same seed always yields the same sample.
//
// Asking for more items than exist is not an error; the sample
// is silently capped at the slice length.
//
// Uses rand::seq::index::sample, which returns fully shuffled
// distinct indices.
//
// Reference: rand crate documentation (seq::index)
//            Rust Book §10 (Generic Types)

use rand::seq::index;
use rand::Rng;

/// Sample up to `amount` distinct elements of `items` in random order.
pub fn sample_without_replacement<T, R>(items: &[T], amount: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let amount = amount.min(items.len());

    let picked: Vec<T> = index::sample(rng, items.len(), amount)
        .into_iter()
        .map(|i| items[i].clone())
        .collect();

    tracing::debug!("Sampled {} of {} items", picked.len(), items.len());

    picked
}
