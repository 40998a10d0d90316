//! A handle to an episode log file.
use super::{append_records, init_log_file, relative_time, EpisodeRecord};
use crate::Rollout;
use anyhow::Result;
use log::info;
use std::{
    fs::{File, OpenOptions},
    path::Path,
    time::SystemTime,
};

/// A handle to an episode log file.
///
/// Records the completed episodes of finalized rollouts. If the file already
/// exists, new records are appended; see the [module docs](super) for the
/// timestamp anchoring.
pub struct EpisodeLogger {
    file: File,
    start_time: SystemTime,
}

impl EpisodeLogger {
    /// Opens the log at `path`, creating it if absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(path.as_ref())?;
        let start_time = init_log_file(&mut file)?;
        info!("Opened episode log {:?}", path.as_ref());
        Ok(Self { file, start_time })
    }

    /// Logs the completed episodes from the rollouts.
    ///
    /// Truncated rollouts have no completed episode and are skipped. Records
    /// are written in order of their end time and flushed before returning.
    pub fn write_rollouts<O>(&mut self, rollouts: &[Rollout<O>]) -> Result<()> {
        let mut records = Vec::new();
        for rollout in rollouts.iter() {
            if rollout.trunc_end() {
                continue;
            }
            records.push(EpisodeRecord {
                r: rollout.total_reward(),
                l: rollout.total_steps() as u64,
                t: relative_time(rollout.end_time(), self.start_time),
            });
        }
        if records.is_empty() {
            return Ok(());
        }
        records.sort_by(|a, b| a.t.partial_cmp(&b.t).unwrap());
        append_records(&mut self.file, &records)
    }
}
