use anyhow::Result;
use candle_core::Tensor;
use candle_nn::ops::softmax;
use rand::{distributions::WeightedIndex, rngs::StdRng, Rng, SeedableRng};
use saddle_core::ActionDist;

/// Samples discrete actions from a batch of logits.
///
/// Parameters are shaped `(batch, n)`; actions are an i64 tensor of shape
/// `(batch,)`.
pub struct Categorical {
    param_shape: [usize; 1],
    rng: StdRng,
}

impl Categorical {
    /// Creates a distribution over `n` discrete actions.
    pub fn new(n: usize, seed: u64) -> Self {
        Self {
            param_shape: [n],
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ActionDist for Categorical {
    type ParamBatch = Tensor;
    type ActBatch = Tensor;

    fn param_shape(&self) -> &[usize] {
        &self.param_shape
    }

    fn sample(&mut self, params: &Tensor) -> Result<Tensor> {
        let device = params.device();
        let probs = softmax(params, 1)?.to_vec2::<f32>()?;
        let n_samples = probs.len();
        let rng = &mut self.rng;
        let data = probs
            .into_iter()
            .map(|p| Ok(rng.sample(WeightedIndex::new(&p)?) as i64))
            .collect::<Result<Vec<_>>>()?;
        Ok(Tensor::from_vec(data, &[n_samples], device)?)
    }
}
