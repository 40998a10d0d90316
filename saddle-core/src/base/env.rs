//! Environment.
use anyhow::Result;
use std::fmt::Debug;

/// Represents an environment, typically an MDP.
///
/// Only the step/reset boundary is modeled here; concrete environments live
/// outside this crate and are supplied by the rollout-collection driver.
pub trait Env {
    /// Observation of the environment.
    type Obs: Clone + Debug;

    /// Action of the environment.
    type Act;

    /// Resets the environment and returns an initial observation.
    fn reset(&mut self) -> Result<Self::Obs>;

    /// Performs an environment step.
    fn step(&mut self, act: &Self::Act) -> Result<EnvStep<Self::Obs>>;
}

/// Result of one environment step.
#[derive(Clone, Debug)]
pub struct EnvStep<O> {
    /// Observation after the step.
    pub obs: O,

    /// Reward of the step.
    pub reward: f32,

    /// Flag denoting if the episode is terminated.
    pub is_terminated: bool,

    /// Flag denoting if the episode is truncated.
    pub is_truncated: bool,
}

impl<O> EnvStep<O> {
    #[inline]
    /// Terminated or truncated.
    pub fn is_done(&self) -> bool {
        self.is_terminated || self.is_truncated
    }
}
