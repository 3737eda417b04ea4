//! Testing utilities for the blockflow library
//!
//! Shared by the integration tests and benchmarks of this crate: published
//! known-answer vectors, a seeded chunk splitter for streaming tests, and a
//! statistical timing harness for the constant-time padding check.

pub mod suites;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Split `data` into consecutive chunks with lengths drawn from a seeded RNG
///
/// Chunks may be empty; concatenated they always reproduce `data`.
pub fn random_chunks(data: &[u8], max_chunk: usize, seed: u64) -> Vec<&[u8]> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut chunks = Vec::new();
    let mut rest = data;
    while !rest.is_empty() {
        let take = rng.gen_range(0..=max_chunk).min(rest.len());
        let (head, tail) = rest.split_at(take);
        chunks.push(head);
        rest = tail;
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_chunks_cover_input() {
        let data: Vec<u8> = (0..=255u8).collect();
        for seed in 0..8 {
            let chunks = random_chunks(&data, 40, seed);
            assert_eq!(chunks.concat(), data);
            assert!(chunks.iter().all(|c| c.len() <= 40));
        }
        assert!(random_chunks(&[], 4, 1).is_empty());
    }
}
