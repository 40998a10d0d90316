use super::FeedforwardActorCriticConfig;
use crate::{model::ActorCriticModel, util::OutDim, Device};
use anyhow::{Context, Result};
use candle_core::{DType, Tensor};
use candle_nn::{VarBuilder, VarMap};
use log::info;
use saddle_core::{
    batch::{flatten_rollouts, mini_batches, MiniBatchConfig},
    ActionDist, ActorCritic, ObsVectorizer, PolicyOutput, Rollout, TrainingBatch,
};
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;

/// Feed-forward actor-critic model.
///
/// Observations are vectorized with `V`, flattened to one feature vector per
/// sample and passed through the network `P`; actions are sampled from the
/// actor head's parameters with the action distribution `D`. The model
/// carries no recurrent state.
pub struct FeedforwardActorCritic<P, D, V>
where
    P: ActorCriticModel,
    P::Config: DeserializeOwned + Serialize + OutDim + Clone,
    D: ActionDist<ParamBatch = Tensor>,
    V: ObsVectorizer<Output = Tensor>,
{
    device: candle_core::Device,
    varmap: VarMap,
    net: P,
    dist: D,
    vectorizer: V,
    shuffle_batches: bool,
    seed: u64,
}

impl<P, D, V> FeedforwardActorCritic<P, D, V>
where
    P: ActorCriticModel,
    P::Config: DeserializeOwned + Serialize + OutDim + Clone,
    D: ActionDist<ParamBatch = Tensor>,
    V: ObsVectorizer<Output = Tensor>,
{
    /// Builds the model on the given device.
    ///
    /// The output dimension of the actor head is taken from the action
    /// distribution's parameter shape. The network's input dimension must
    /// equal the number of elements of one vectorized observation.
    pub fn build(
        config: FeedforwardActorCriticConfig<P::Config>,
        dist: D,
        vectorizer: V,
        device: Device,
    ) -> Result<Self> {
        let mut net_config = config.net_config.context("net_config is not set.")?;
        net_config.set_out_dim(dist.param_shape().iter().product());
        let device: candle_core::Device = device.into();
        let varmap = VarMap::new();
        let net = {
            let vb = VarBuilder::from_varmap(&varmap, DType::F32, &device);
            P::build(vb, net_config)?
        };
        Ok(Self {
            device,
            varmap,
            net,
            dist,
            vectorizer,
            shuffle_batches: config.shuffle_batches,
            seed: config.seed,
        })
    }

    /// Saves the parameters of the model.
    pub fn save<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        self.varmap.save(&path)?;
        info!("Save feed-forward model to {:?}", path.as_ref());
        Ok(())
    }

    /// Loads the parameters of the model.
    pub fn load<T: AsRef<Path>>(&mut self, path: T) -> Result<()> {
        self.varmap.load(&path)?;
        info!("Load feed-forward model from {:?}", path.as_ref());
        Ok(())
    }

    /// Vectorizes a batch of observations and flattens the feature
    /// dimensions.
    fn vectorize(&self, observations: &[&V::Obs]) -> Result<Tensor> {
        let xs = self.vectorizer.to_vecs(observations)?;
        let batch = xs.dims()[0];
        let feat: usize = xs.dims()[1..].iter().product();
        Ok(xs.reshape((batch, feat))?.to_device(&self.device)?)
    }
}

impl<P, D, V> ActorCritic for FeedforwardActorCritic<P, D, V>
where
    P: ActorCriticModel,
    P::Config: DeserializeOwned + Serialize + OutDim + Clone,
    D: ActionDist<ParamBatch = Tensor>,
    V: ObsVectorizer<Output = Tensor>,
{
    type Obs = V::Obs;
    type State = ();
    type ParamBatch = Tensor;
    type ActBatch = D::ActBatch;
    type Feed = Tensor;

    fn stateful(&self) -> bool {
        false
    }

    fn start_state(&self, _batch_size: usize) -> Option<()> {
        None
    }

    fn step(
        &mut self,
        observations: &[Self::Obs],
        _states: Option<&()>,
    ) -> Result<PolicyOutput<Tensor, D::ActBatch, ()>> {
        let obs_refs: Vec<&Self::Obs> = observations.iter().collect();
        let xs = self.vectorize(&obs_refs)?;
        let (params, values) = self.net.forward(&xs)?;
        let params = {
            let mut shape = vec![observations.len()];
            shape.extend_from_slice(self.dist.param_shape());
            params.reshape(shape)?
        };
        let actions = self.dist.sample(&params)?;
        let values = values.to_vec1::<f32>()?;
        debug_assert_eq!(values.len(), observations.len());
        Ok(PolicyOutput {
            action_params: params,
            actions,
            states: None,
            values,
        })
    }

    fn batches<'a>(
        &'a self,
        rollouts: &'a [Rollout<Self::Obs>],
        batch_size: Option<usize>,
    ) -> Box<dyn Iterator<Item = Result<TrainingBatch<Tensor>>> + 'a> {
        let frames = flatten_rollouts(rollouts);
        let config = MiniBatchConfig::default()
            .batch_size(batch_size)
            .shuffle(self.shuffle_batches)
            .seed(self.seed);
        Box::new(mini_batches(frames.len(), &config).map(move |ixs| {
            let sub_obses: Vec<&Self::Obs> =
                ixs.iter().map(|&i| frames.observations[i]).collect();
            let feed = self.vectorize(&sub_obses)?;
            Ok(TrainingBatch {
                rollout_ixs: ixs.iter().map(|&i| frames.rollout_ixs[i]).collect(),
                timestep_ixs: ixs.iter().map(|&i| frames.timestep_ixs[i]).collect(),
                feed,
            })
        }))
    }

    fn scale_outputs(&mut self, scale: f64) -> Result<()> {
        self.net.scale_outputs(&self.varmap, scale)
    }
}
