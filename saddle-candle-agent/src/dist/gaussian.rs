use anyhow::Result;
use candle_core::{IndexOp, Tensor};
use saddle_core::ActionDist;

/// Diagonal Gaussian over continuous actions.
///
/// Parameters are shaped `(batch, 2, act_dim)`: means in row 0, log standard
/// deviations in row 1. Log standard deviations are clamped before
/// exponentiation. Actions are an f32 tensor of shape `(batch, act_dim)`.
pub struct DiagGaussian {
    param_shape: [usize; 2],
    min_lstd: f64,
    max_lstd: f64,
}

impl DiagGaussian {
    /// Creates a distribution over `act_dim`-dimensional actions.
    pub fn new(act_dim: usize) -> Self {
        Self {
            param_shape: [2, act_dim],
            min_lstd: -20.0,
            max_lstd: 2.0,
        }
    }
}

impl ActionDist for DiagGaussian {
    type ParamBatch = Tensor;
    type ActBatch = Tensor;

    fn param_shape(&self) -> &[usize] {
        &self.param_shape
    }

    fn sample(&mut self, params: &Tensor) -> Result<Tensor> {
        let mean = params.i((.., 0))?;
        let std = params
            .i((.., 1))?
            .clamp(self.min_lstd, self.max_lstd)?
            .exp()?;
        let z = Tensor::randn(0f32, 1f32, mean.dims(), mean.device())?;
        Ok((&std * &z + &mean)?)
    }
}
