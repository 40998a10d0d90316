//! Actor-critic models implemented with [candle](https://crates.io/crates/candle-core).
pub mod dist;
mod feedforward;
pub mod mlp;
pub mod model;
pub mod util;
mod vectorizer;
pub use feedforward::{FeedforwardActorCritic, FeedforwardActorCriticConfig};
pub use vectorizer::ArrayObsVectorizer;
use candle_core::Tensor;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Copy, Deserialize, Serialize, PartialEq)]
/// Device for using candle.
///
/// This enum is added because [`candle_core::Device`] does not support
/// serialization.
pub enum Device {
    /// The main CPU device.
    Cpu,

    /// The main GPU device.
    Cuda(usize),
}

impl Into<candle_core::Device> for Device {
    fn into(self) -> candle_core::Device {
        match self {
            Self::Cpu => candle_core::Device::Cpu,
            Self::Cuda(n) => candle_core::Device::new_cuda(n).unwrap(),
        }
    }
}

#[derive(Clone, Debug, Copy, Deserialize, Serialize, PartialEq)]
/// Activation function applied between hidden layers.
pub enum Activation {
    /// Rectified linear unit.
    ReLU,

    /// Hyperbolic tangent.
    Tanh,

    /// No activation.
    None,
}

impl Activation {
    /// Applies the activation to a tensor.
    pub fn forward(&self, xs: &Tensor) -> Result<Tensor, candle_core::Error> {
        match self {
            Activation::ReLU => xs.relu(),
            Activation::Tanh => xs.tanh(),
            Activation::None => Ok(xs.clone()),
        }
    }
}
