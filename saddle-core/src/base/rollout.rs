//! Recorded episode trajectories.
use std::time::SystemTime;

/// One recorded episode-attempt trajectory.
///
/// Rollouts are created by the collection driver and are immutable once
/// finalized; this library only reads them. When `trunc_end` is set, the
/// rollout was cut off by a length or time limit and the final entry of
/// `step_observations` is the dangling next observation, which has no
/// associated training target.
#[derive(Clone, Debug)]
pub struct Rollout<O> {
    step_observations: Vec<O>,
    trunc_end: bool,
    total_reward: f32,
    total_steps: usize,
    end_time: SystemTime,
}

impl<O> Rollout<O> {
    /// Creates a finalized rollout.
    pub fn new(
        step_observations: Vec<O>,
        trunc_end: bool,
        total_reward: f32,
        total_steps: usize,
        end_time: SystemTime,
    ) -> Self {
        Self {
            step_observations,
            trunc_end,
            total_reward,
            total_steps,
            end_time,
        }
    }

    /// All observations visited by the rollout, one per timestep, including
    /// the trailing observation of a truncated rollout.
    pub fn step_observations(&self) -> &[O] {
        &self.step_observations
    }

    /// The observations usable as training frames.
    ///
    /// Drops the trailing observation when the rollout was truncated; this is
    /// the single place where truncation trimming happens.
    pub fn trimmed_observations(&self) -> &[O] {
        match self.trunc_end {
            true => {
                let n = self.step_observations.len().saturating_sub(1);
                &self.step_observations[..n]
            }
            false => &self.step_observations,
        }
    }

    /// True if the rollout ended due to a cutoff rather than episode
    /// termination.
    pub fn trunc_end(&self) -> bool {
        self.trunc_end
    }

    /// Sum of rewards over the episode attempt.
    pub fn total_reward(&self) -> f32 {
        self.total_reward
    }

    /// Number of timesteps taken in the episode attempt.
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Wall-clock time at which the rollout ended.
    pub fn end_time(&self) -> SystemTime {
        self.end_time
    }
}

#[cfg(test)]
mod tests {
    use super::Rollout;
    use std::time::SystemTime;

    #[test]
    fn test_trimming() {
        let rollout = Rollout::new(vec![0, 1, 2], false, 3.0, 3, SystemTime::now());
        assert_eq!(rollout.trimmed_observations(), &[0, 1, 2]);

        let rollout = Rollout::new(vec![0, 1, 2], true, 2.0, 2, SystemTime::now());
        assert_eq!(rollout.trimmed_observations(), &[0, 1]);
    }

    #[test]
    fn test_trimming_empty() {
        let rollout = Rollout::new(Vec::<i32>::new(), true, 0.0, 0, SystemTime::now());
        assert!(rollout.trimmed_observations().is_empty());
    }
}
