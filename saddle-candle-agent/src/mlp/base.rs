use super::MlpConfig;
use crate::{model::ActorCriticModel, util::scale_vars};
use anyhow::Result;
use candle_core::{Tensor, D};
use candle_nn::{linear, Init, Linear, Module, VarBuilder, VarMap};

/// Returns the linear layers of the hidden trunk.
fn create_trunk(prefix: &str, vb: VarBuilder, config: &MlpConfig) -> Result<Vec<Linear>> {
    let mut in_dim = config.in_dim;
    let vb = vb.pp(prefix);
    let mut layers = Vec::with_capacity(config.units.len());
    for (i, &out_dim) in config.units.iter().enumerate() {
        layers.push(linear(in_dim, out_dim, vb.pp(format!("ln{}", i)))?);
        in_dim = out_dim;
    }
    Ok(layers)
}

/// Returns a linear layer with zero-initialized weight and bias.
fn zero_linear(in_dim: usize, out_dim: usize, vb: VarBuilder) -> Result<Linear> {
    let ws = vb.get_with_hints((out_dim, in_dim), "weight", Init::Const(0.))?;
    let bs = vb.get_with_hints(out_dim, "bias", Init::Const(0.))?;
    Ok(Linear::new(ws, Some(bs)))
}

/// Multilayer perceptron with an actor head and a critic head.
///
/// The actor head is zero-initialized so that a freshly built model produces
/// centered distribution parameters; the critic head outputs one scalar per
/// sample.
pub struct Mlp {
    config: MlpConfig,
    layers: Vec<Linear>,
    actor: Linear,
    critic: Linear,
}

impl ActorCriticModel for Mlp {
    type Config = MlpConfig;

    fn build(vb: VarBuilder, config: Self::Config) -> Result<Self> {
        let layers = create_trunk("trunk", vb.clone(), &config)?;
        let feat_dim = config.units.last().copied().unwrap_or(config.in_dim);
        let actor = zero_linear(feat_dim, config.out_dim, vb.pp("actor"))?;
        let critic = linear(feat_dim, 1, vb.pp("critic"))?;
        Ok(Self {
            config,
            layers,
            actor,
            critic,
        })
    }

    fn forward(&self, xs: &Tensor) -> Result<(Tensor, Tensor)> {
        let mut xs = xs.clone();
        for layer in self.layers.iter() {
            xs = self.config.activation.forward(&layer.forward(&xs)?)?;
        }
        let params = self.actor.forward(&xs)?;
        let values = self.critic.forward(&xs)?.squeeze(D::Minus1)?;
        Ok((params, values))
    }

    fn scale_outputs(&self, varmap: &VarMap, scale: f64) -> Result<()> {
        scale_vars(varmap, &["actor", "critic"], scale)
    }
}

#[cfg(test)]
mod tests {
    use super::{Mlp, MlpConfig};
    use crate::{model::ActorCriticModel, util::OutDim, Activation};
    use candle_core::{DType, Device, Tensor};
    use candle_nn::{VarBuilder, VarMap};

    fn build_mlp(out_dim: usize) -> (VarMap, Mlp) {
        let mut config = MlpConfig::new(4, vec![8, 8], Activation::ReLU);
        config.set_out_dim(out_dim);
        let varmap = VarMap::new();
        let vb = VarBuilder::from_varmap(&varmap, DType::F32, &Device::Cpu);
        let mlp = Mlp::build(vb, config).unwrap();
        (varmap, mlp)
    }

    #[test]
    fn test_output_shapes() {
        let (_, mlp) = build_mlp(3);
        let xs = Tensor::zeros((5, 4), DType::F32, &Device::Cpu).unwrap();
        let (params, values) = mlp.forward(&xs).unwrap();
        assert_eq!(params.dims(), &[5, 3]);
        assert_eq!(values.dims(), &[5]);
    }

    #[test]
    fn test_actor_head_zero_initialized() {
        let (_, mlp) = build_mlp(3);
        let xs = Tensor::ones((2, 4), DType::F32, &Device::Cpu).unwrap();
        let (params, _) = mlp.forward(&xs).unwrap();
        let params = params.to_vec2::<f32>().unwrap();
        assert!(params.iter().flatten().all(|&p| p == 0.0));
    }

    #[test]
    fn test_scale_outputs_scales_critic() {
        let (varmap, mlp) = build_mlp(2);
        let xs = Tensor::ones((3, 4), DType::F32, &Device::Cpu).unwrap();
        let before = mlp.forward(&xs).unwrap().1.to_vec1::<f32>().unwrap();
        mlp.scale_outputs(&varmap, 2.0).unwrap();
        let after = mlp.forward(&xs).unwrap().1.to_vec1::<f32>().unwrap();
        for (b, a) in before.iter().zip(after.iter()) {
            assert!((a - 2.0 * b).abs() < 1e-5);
        }
    }
}
