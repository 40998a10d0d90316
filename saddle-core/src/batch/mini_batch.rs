//! Partitioning an index range into minibatches.
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration of [`mini_batches`].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct MiniBatchConfig {
    /// Target number of frames per batch. `None` means one batch holding
    /// everything, in original order.
    pub batch_size: Option<usize>,

    /// Draw the index order from a seeded permutation instead of the input
    /// order. Ignored when `batch_size` is `None`.
    pub shuffle: bool,

    /// Seed of the permutation used when `shuffle` is set.
    pub seed: u64,
}

impl Default for MiniBatchConfig {
    fn default() -> Self {
        Self {
            batch_size: None,
            shuffle: false,
            seed: 42,
        }
    }
}

impl MiniBatchConfig {
    /// Sets the target batch size.
    pub fn batch_size(mut self, v: Option<usize>) -> Self {
        self.batch_size = v;
        self
    }

    /// Requests a shuffled index order.
    pub fn shuffle(mut self, v: bool) -> Self {
        self.shuffle = v;
        self
    }

    /// Sets the seed of the permutation.
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }
}

/// Lazy iterator over index chunks partitioning `0..n`.
///
/// Created with [`mini_batches`].
pub struct MiniBatches {
    order: Vec<usize>,
    chunk_size: usize,
    pos: usize,
}

impl Iterator for MiniBatches {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.pos >= self.order.len() {
            return None;
        }
        let end = (self.pos + self.chunk_size).min(self.order.len());
        let chunk = self.order[self.pos..end].to_vec();
        self.pos = end;
        Some(chunk)
    }
}

/// Splits `0..n` into chunks of at most `batch_size` indices.
///
/// Every index in `0..n` appears in exactly one yielded chunk; the last
/// chunk may be shorter. With a `batch_size` of `None` the whole range is
/// yielded as a single chunk and no shuffling is applied. `n == 0` yields no
/// chunks.
///
/// # Panics
///
/// Panics if `batch_size` is `Some(0)`.
pub fn mini_batches(n: usize, config: &MiniBatchConfig) -> MiniBatches {
    let (order, chunk_size) = match config.batch_size {
        None => ((0..n).collect(), n.max(1)),
        Some(batch_size) => {
            assert!(batch_size > 0, "batch_size must be positive");
            let mut order: Vec<usize> = (0..n).collect();
            if config.shuffle {
                let mut rng = StdRng::seed_from_u64(config.seed);
                order.shuffle(&mut rng);
            }
            (order, batch_size)
        }
    };
    MiniBatches {
        order,
        chunk_size,
        pos: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::{mini_batches, MiniBatchConfig};

    #[test]
    fn test_single_batch() {
        let config = MiniBatchConfig::default();
        let chunks: Vec<_> = mini_batches(5, &config).collect();
        assert_eq!(chunks, vec![vec![0, 1, 2, 3, 4]]);
    }

    #[test]
    fn test_empty_range() {
        assert_eq!(mini_batches(0, &MiniBatchConfig::default()).count(), 0);
        let config = MiniBatchConfig::default().batch_size(Some(4));
        assert_eq!(mini_batches(0, &config).count(), 0);
    }

    #[test]
    fn test_partition() {
        let config = MiniBatchConfig::default().batch_size(Some(3));
        let chunks: Vec<_> = mini_batches(7, &config).collect();
        assert_eq!(chunks, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6]]);
    }

    #[test]
    fn test_shuffled_partition() {
        let config = MiniBatchConfig::default().batch_size(Some(4)).shuffle(true);
        let chunks: Vec<_> = mini_batches(10, &config).collect();
        assert!(chunks.iter().all(|c| c.len() <= 4));

        let mut seen: Vec<usize> = chunks.into_iter().flatten().collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_deterministic() {
        let config = MiniBatchConfig::default().batch_size(Some(4)).shuffle(true);
        let a: Vec<_> = mini_batches(10, &config).collect();
        let b: Vec<_> = mini_batches(10, &config).collect();
        assert_eq!(a, b);
    }
}
