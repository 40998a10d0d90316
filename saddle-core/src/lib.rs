#![warn(missing_docs)]
//! Core abstractions of a library for reinforcement learning.
pub mod batch;
pub mod error;
pub mod record;

mod base;
pub use base::{
    ActionDist,
    ActorCritic,
    Env,
    EnvStep,
    ObsVectorizer,
    PolicyOutput,
    Rollout,
    TrainingBatch,
};
