use crate::{util::OutDim, Activation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
/// Configuration of [`Mlp`](super::Mlp).
pub struct MlpConfig {
    pub(super) in_dim: usize,
    pub(super) units: Vec<usize>,
    pub(super) out_dim: usize,
    pub(super) activation: Activation,
}

impl MlpConfig {
    /// Creates configuration of the MLP.
    ///
    /// * `in_dim` - number of features of one flattened observation.
    /// * `units` - hidden layer sizes.
    ///
    /// The output dimension of the actor head is wired in by the agent from
    /// the action distribution's parameter shape.
    pub fn new(in_dim: usize, units: Vec<usize>, activation: Activation) -> Self {
        Self {
            in_dim,
            units,
            out_dim: 0,
            activation,
        }
    }
}

impl OutDim for MlpConfig {
    fn get_out_dim(&self) -> usize {
        self.out_dim
    }

    fn set_out_dim(&mut self, out_dim: usize) {
        self.out_dim = out_dim;
    }
}
