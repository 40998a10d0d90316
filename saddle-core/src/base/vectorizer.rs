//! Observation vectorization.
use anyhow::Result;

/// Converts raw observations into fixed-shape numeric batches.
///
/// Implementations are consumed by policy models both at inference time
/// (inside [`ActorCritic::step`](crate::ActorCritic::step)) and at training
/// time (when building the feed of a
/// [`TrainingBatch`](crate::TrainingBatch)).
pub trait ObsVectorizer {
    /// Raw observation type.
    type Obs;

    /// Batched numeric output, e.g. a tensor of shape `(batch, *out_shape)`.
    type Output;

    /// Shape of one vectorized observation.
    fn out_shape(&self) -> &[usize];

    /// Vectorizes a batch of observations.
    fn to_vecs(&self, observations: &[&Self::Obs]) -> Result<Self::Output>;
}
