//! Action distributions.
use anyhow::Result;

/// Samples actions from batches of distribution parameters.
///
/// The mapping from parameters to a probability distribution is defined by
/// the implementation; policy models only rely on `param_shape` to size
/// their actor head and on `sample` to pick actions.
pub trait ActionDist {
    /// Batch of distribution parameters, shaped `(batch, *param_shape)`.
    type ParamBatch;

    /// Batch of sampled actions.
    type ActBatch;

    /// Shape of one distribution-parameter tuple.
    fn param_shape(&self) -> &[usize];

    /// Samples one action per batch element.
    fn sample(&mut self, params: &Self::ParamBatch) -> Result<Self::ActBatch>;
}
