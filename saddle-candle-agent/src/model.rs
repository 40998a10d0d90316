//! Interface of neural networks used by the agents.
use anyhow::Result;
use candle_core::Tensor;
use candle_nn::{VarBuilder, VarMap};

/// An actor-critic network not owning its [`VarMap`] internally.
///
/// The network maps a flattened observation batch of shape
/// `(batch, in_dim)` to a pair of outputs: the flat actor parameters of
/// shape `(batch, out_dim)` and the scalar values of shape `(batch,)`.
///
/// [`VarMap`]: https://docs.rs/candle-nn/0.8.4/candle_nn/var_map/struct.VarMap.html
pub trait ActorCriticModel {
    /// Configuration from which the network is constructed.
    type Config;

    /// Builds the network with [`VarBuilder`] and [`Self::Config`].
    ///
    /// [`VarBuilder`]: https://docs.rs/candle-nn/0.8.4/candle_nn/var_builder/type.VarBuilder.html
    fn build(vb: VarBuilder, config: Self::Config) -> Result<Self>
    where
        Self: Sized;

    /// A generalized forward function.
    fn forward(&self, xs: &Tensor) -> Result<(Tensor, Tensor)>;

    /// Rescales the output heads by `scale`, rewriting the head parameters
    /// registered in `varmap` in place.
    fn scale_outputs(&self, varmap: &VarMap, scale: f64) -> Result<()>;
}
