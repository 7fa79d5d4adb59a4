//! Seeded Fisher–Yates shuffle.

use secret_santa_core::rng::DeterministicRng;

/// Returns a shuffled copy of `items`, leaving the input untouched.
///
/// Walks from the last index down to 1, swapping each slot with
/// `floor(next_f64() * (i + 1))`. Consumes exactly `len - 1` draws (none for
/// zero or one element), which matters for replaying a draw from its seed.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn shuffle<T: Clone>(items: &[T], rng: &mut dyn DeterministicRng) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = (rng.next_f64() * (i + 1) as f64) as usize;
        shuffled.swap(i, j);
    }
    shuffled
}
