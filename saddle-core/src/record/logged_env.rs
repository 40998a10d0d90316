//! An environment wrapper that logs episodes to a file.
use super::{append_records, init_log_file, relative_time, EpisodeRecord};
use crate::{Env, EnvStep};
use anyhow::Result;
use fs2::FileExt;
use std::{
    fs::{File, OpenOptions},
    path::Path,
    time::SystemTime,
};

/// An environment that logs completed episodes to a CSV file.
///
/// The wrapper accumulates reward and step counts across steps and appends
/// one record whenever an episode ends, either terminated or truncated. With
/// `use_locking`, an advisory file lock serializes the read-modify-write
/// sequences so that multiple processes can share one log.
pub struct LoggedEnv<E: Env> {
    env: E,
    file: File,
    start_time: SystemTime,
    use_locking: bool,
    cur_reward: f32,
    cur_steps: usize,
}

impl<E: Env> LoggedEnv<E> {
    /// Wraps `env`, appending to the log at `path` if it already exists.
    pub fn new(env: E, path: impl AsRef<Path>, use_locking: bool) -> Result<Self> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(path.as_ref())?;
        if use_locking {
            file.lock_exclusive()?;
        }
        let start_time = init_log_file(&mut file);
        if use_locking {
            file.unlock()?;
        }
        Ok(Self {
            env,
            file,
            start_time: start_time?,
            use_locking,
            cur_reward: 0.0,
            cur_steps: 0,
        })
    }

    /// Returns a reference to the wrapped environment.
    pub fn env(&self) -> &E {
        &self.env
    }

    fn write_entry(&mut self) -> Result<()> {
        let record = EpisodeRecord {
            r: self.cur_reward,
            l: self.cur_steps as u64,
            t: relative_time(SystemTime::now(), self.start_time),
        };
        if self.use_locking {
            self.file.lock_exclusive()?;
        }
        let res = append_records(&mut self.file, &[record]);
        if self.use_locking {
            self.file.unlock()?;
        }
        res
    }
}

impl<E: Env> Env for LoggedEnv<E> {
    type Obs = E::Obs;
    type Act = E::Act;

    fn reset(&mut self) -> Result<Self::Obs> {
        self.env.reset()
    }

    fn step(&mut self, act: &Self::Act) -> Result<EnvStep<Self::Obs>> {
        let step = self.env.step(act)?;
        self.cur_reward += step.reward;
        self.cur_steps += 1;
        if step.is_done() {
            self.write_entry()?;
            self.cur_reward = 0.0;
            self.cur_steps = 0;
        }
        Ok(step)
    }
}

#[cfg(test)]
mod tests {
    use super::LoggedEnv;
    use crate::{Env, EnvStep};
    use anyhow::Result;
    use tempdir::TempDir;

    /// Episodes of three steps with reward 1.0 each.
    struct ThreeStepEnv {
        t: usize,
    }

    impl Env for ThreeStepEnv {
        type Obs = usize;
        type Act = ();

        fn reset(&mut self) -> Result<usize> {
            self.t = 0;
            Ok(self.t)
        }

        fn step(&mut self, _act: &()) -> Result<EnvStep<usize>> {
            self.t += 1;
            Ok(EnvStep {
                obs: self.t,
                reward: 1.0,
                is_terminated: self.t == 3,
                is_truncated: false,
            })
        }
    }

    fn run_episodes<E: Env<Act = ()>>(env: &mut E, n: usize) {
        for _ in 0..n {
            env.reset().unwrap();
            loop {
                if env.step(&()).unwrap().is_done() {
                    break;
                }
            }
        }
    }

    #[test]
    fn test_episodes_logged() {
        let dir = TempDir::new("logged_env").unwrap();
        let path = dir.path().join("episodes.csv");

        let mut env = LoggedEnv::new(ThreeStepEnv { t: 0 }, &path, false).unwrap();
        run_episodes(&mut env, 2);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "r,l,t");
        assert!(lines[1].starts_with("3.0,3,"));
        assert!(lines[2].starts_with("3.0,3,"));
    }

    #[test]
    fn test_locking_roundtrip() {
        let dir = TempDir::new("logged_env").unwrap();
        let path = dir.path().join("episodes.csv");

        let mut env = LoggedEnv::new(ThreeStepEnv { t: 0 }, &path, true).unwrap();
        run_episodes(&mut env, 1);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_append_to_existing_log() {
        let dir = TempDir::new("logged_env").unwrap();
        let path = dir.path().join("episodes.csv");

        {
            let mut env = LoggedEnv::new(ThreeStepEnv { t: 0 }, &path, false).unwrap();
            run_episodes(&mut env, 1);
        }
        {
            let mut env = LoggedEnv::new(ThreeStepEnv { t: 0 }, &path, false).unwrap();
            run_episodes(&mut env, 1);
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        let ts: Vec<f64> = lines
            .iter()
            .skip(1)
            .map(|l| l.rsplit(',').next().unwrap().parse().unwrap())
            .collect();
        assert!(ts[1] >= ts[0] - 1e-3);
    }
}
