//! Conversion of rollouts into training minibatches.
mod frames;
mod mini_batch;
pub use frames::{flatten_rollouts, FrameSet};
pub use mini_batch::{mini_batches, MiniBatchConfig, MiniBatches};
