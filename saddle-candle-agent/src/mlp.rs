//! Multilayer perceptron actor-critic network.
mod base;
mod config;
pub use base::Mlp;
pub use config::MlpConfig;
