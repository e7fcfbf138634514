//! Small dice helpers over the session RNG.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

/// Uniform index in `0..len`. `len` must be non-zero.
pub(crate) fn pick_index(rng: &mut ChaCha8Rng, len: usize) -> usize {
    debug_assert!(len > 0);
    (rng.next_u64() % len as u64) as usize
}

/// True with probability `percent` / 100.
pub(crate) fn chance(rng: &mut ChaCha8Rng, percent: u32) -> bool {
    rng.next_u64() % 100 < u64::from(percent)
}

pub(crate) fn coin_flip(rng: &mut ChaCha8Rng) -> bool {
    rng.next_u64() & 1 == 0
}
