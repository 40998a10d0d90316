//! Core interfaces.
mod dist;
mod env;
mod policy;
mod rollout;
mod vectorizer;
pub use dist::ActionDist;
pub use env::{Env, EnvStep};
pub use policy::{ActorCritic, PolicyOutput, TrainingBatch};
pub use rollout::Rollout;
pub use vectorizer::ObsVectorizer;
