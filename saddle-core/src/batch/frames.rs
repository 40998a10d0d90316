//! Flattening rollouts into training frames.
use crate::Rollout;

/// Flattened training frames with their provenance.
///
/// The three sequences are parallel and of equal length: `rollout_ixs[i]`
/// and `timestep_ixs[i]` identify the source of `observations[i]`.
pub struct FrameSet<'a, O> {
    /// Borrowed observations, rollout-major then timestep-minor.
    pub observations: Vec<&'a O>,

    /// Rollout index of each frame.
    pub rollout_ixs: Vec<usize>,

    /// Timestep index of each frame within its rollout.
    pub timestep_ixs: Vec<usize>,
}

impl<'a, O> FrameSet<'a, O> {
    /// Number of frames.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// True if the set holds no frames.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

/// Flattens rollouts into a list of observations plus parallel index arrays.
///
/// The trailing observation of a truncated rollout has no training target
/// and is excluded. For example, `[[o1, o2], [o3, o4, o5]]` with the second
/// rollout truncated becomes
/// `([o1, o2, o3, o4], [0, 0, 1, 1], [0, 1, 0, 1])`.
///
/// Runs in O(total timesteps); the output order is a pure function of the
/// input order.
pub fn flatten_rollouts<'a, O>(rollouts: &'a [Rollout<O>]) -> FrameSet<'a, O> {
    let mut observations = Vec::new();
    let mut rollout_ixs = Vec::new();
    let mut timestep_ixs = Vec::new();
    for (rollout_ix, rollout) in rollouts.iter().enumerate() {
        for (timestep_ix, obs) in rollout.trimmed_observations().iter().enumerate() {
            observations.push(obs);
            rollout_ixs.push(rollout_ix);
            timestep_ixs.push(timestep_ix);
        }
    }
    FrameSet {
        observations,
        rollout_ixs,
        timestep_ixs,
    }
}

#[cfg(test)]
mod tests {
    use super::flatten_rollouts;
    use crate::Rollout;
    use std::time::SystemTime;

    fn rollout(obs: Vec<i64>, trunc_end: bool) -> Rollout<i64> {
        let steps = obs.len();
        Rollout::new(obs, trunc_end, 0.0, steps, SystemTime::now())
    }

    #[test]
    fn test_trailing_observation_excluded() {
        let rollouts = vec![rollout(vec![10, 11], false), rollout(vec![20, 21, 22], true)];
        let frames = flatten_rollouts(&rollouts);
        assert_eq!(frames.len(), 4);
        assert_eq!(frames.observations, vec![&10, &11, &20, &21]);
        assert_eq!(frames.rollout_ixs, vec![0, 0, 1, 1]);
        assert_eq!(frames.timestep_ixs, vec![0, 1, 0, 1]);
    }

    #[test]
    fn test_empty() {
        let frames = flatten_rollouts::<i64>(&[]);
        assert!(frames.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let rollouts = vec![
            rollout(vec![1, 2, 3], false),
            rollout(vec![4], false),
            rollout(vec![5, 6], true),
        ];
        let frames = flatten_rollouts(&rollouts);
        for i in 0..frames.len() {
            let expected =
                &rollouts[frames.rollout_ixs[i]].trimmed_observations()[frames.timestep_ixs[i]];
            assert_eq!(frames.observations[i], expected);
        }
    }
}
