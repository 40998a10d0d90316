//! Actor-critic policy models.
use super::Rollout;
use anyhow::Result;

/// Per-step output of an [`ActorCritic`] model.
#[derive(Debug)]
pub struct PolicyOutput<P, A, S> {
    /// Raw distribution parameters from the actor head.
    pub action_params: P,

    /// Actions sampled from `action_params`.
    pub actions: A,

    /// Recurrent states after the step. `None` for stateless models.
    pub states: Option<S>,

    /// Scalar value estimates from the critic head, one per batch element.
    pub values: Vec<f32>,
}

/// A minibatch of training frames with their provenance.
pub struct TrainingBatch<F> {
    /// Rollout index of each frame routed to this batch.
    pub rollout_ixs: Vec<usize>,

    /// Timestep index of each frame within its rollout.
    pub timestep_ixs: Vec<usize>,

    /// Forward-pass input bundle for the frames of this batch.
    ///
    /// Opaque to callers; a training step consumes it together with
    /// `rollout_ixs`/`timestep_ixs` to align externally computed advantages
    /// and returns.
    pub feed: F,
}

/// An actor-critic policy model.
///
/// The trait unifies the two ways a training driver consumes a policy:
/// per-timestep action selection with [`ActorCritic::step`] during rollout
/// collection, and conversion of collected rollouts into training minibatches
/// with [`ActorCritic::batches`].
///
/// Implementations may be stateless or carry recurrent state across
/// timesteps; `None` is the designated stateless sentinel for
/// [`ActorCritic::start_state`] and [`PolicyOutput::states`].
pub trait ActorCritic {
    /// Raw observation consumed per step.
    type Obs;

    /// Recurrent state threaded between steps.
    type State;

    /// Batch of distribution parameters from the actor head.
    type ParamBatch;

    /// Batch of sampled actions.
    type ActBatch;

    /// Forward-pass input bundle of a training batch.
    type Feed;

    /// True if the model carries recurrent state across timesteps.
    fn stateful(&self) -> bool;

    /// Initial recurrent state for a batch of independent trajectories.
    ///
    /// Stateless models return `None` for every batch size.
    fn start_state(&self, batch_size: usize) -> Option<Self::State>;

    /// Runs one forward evaluation over a batch of raw observations and
    /// samples an action per batch element.
    ///
    /// Caller-owned `observations` and `states` are not mutated. Stateful
    /// implementations must fail fast with
    /// [`SaddleError::StateBatchMismatch`](crate::error::SaddleError) when
    /// the state batch size disagrees with the observation batch size.
    fn step(
        &mut self,
        observations: &[Self::Obs],
        states: Option<&Self::State>,
    ) -> Result<PolicyOutput<Self::ParamBatch, Self::ActBatch, Self::State>>;

    /// Lazily produces training batches covering every non-trailing
    /// observation of `rollouts` exactly once.
    ///
    /// A `batch_size` of `None` means one batch containing everything. An
    /// empty or all-truncated rollout set yields no batches. The sequence is
    /// finite and single-pass; it restarts only by calling this method again.
    fn batches<'a>(
        &'a self,
        rollouts: &'a [Rollout<Self::Obs>],
        batch_size: Option<usize>,
    ) -> Box<dyn Iterator<Item = Result<TrainingBatch<Self::Feed>>> + 'a>;

    /// Rescales the action-parameter and value outputs by `scale`.
    ///
    /// Commonly called right after initialization to adapt to the reward
    /// scale of an environment. The rescaling is a rewrite of the output
    /// parameters; applying it twice compounds.
    fn scale_outputs(&mut self, scale: f64) -> Result<()>;
}
