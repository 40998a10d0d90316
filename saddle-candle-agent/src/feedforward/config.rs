use crate::util::OutDim;
use anyhow::Result;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
/// Configuration of [`FeedforwardActorCritic`](super::FeedforwardActorCritic).
pub struct FeedforwardActorCriticConfig<P: OutDim> {
    pub(super) net_config: Option<P>,
    pub(super) shuffle_batches: bool,
    pub(super) seed: u64,
}

impl<P: OutDim> Default for FeedforwardActorCriticConfig<P> {
    fn default() -> Self {
        Self {
            net_config: None,
            shuffle_batches: false,
            seed: 42,
        }
    }
}

impl<P> FeedforwardActorCriticConfig<P>
where
    P: DeserializeOwned + Serialize + OutDim,
{
    /// Sets the network configuration.
    pub fn net_config(mut self, v: P) -> Self {
        self.net_config = Some(v);
        self
    }

    /// Sets the output dimension of the network.
    pub fn out_dim(mut self, v: usize) -> Self {
        match &mut self.net_config {
            None => {}
            Some(net_config) => net_config.set_out_dim(v),
        };
        self
    }

    /// Requests shuffled minibatch order during training iteration.
    ///
    /// Off by default; minibatch partitioning is deterministic unless
    /// randomization is asked for explicitly.
    pub fn shuffle_batches(mut self, v: bool) -> Self {
        self.shuffle_batches = v;
        self
    }

    /// Sets the seed of the minibatch permutation.
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }

    /// Constructs [`FeedforwardActorCriticConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`FeedforwardActorCriticConfig`] as YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
