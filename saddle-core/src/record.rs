//! Episode logging.
//!
//! Logs are CSV files with three columns:
//!   r: episode reward
//!   l: episode length (timesteps)
//!   t: timestamp of episode end, relative to log start.
//!
//! When a log file already exists, the start-time anchor is recomputed from
//! the highest timestamp on record so that appended timestamps stay
//! monotonically increasing across restarts.
mod episode_logger;
mod logged_env;
pub use episode_logger::EpisodeLogger;
pub use logged_env::LoggedEnv;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{Seek, SeekFrom, Write},
    time::{Duration, SystemTime},
};

/// One completed-episode record of the log.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct EpisodeRecord {
    /// Episode reward.
    pub r: f32,

    /// Episode length in timesteps.
    pub l: u64,

    /// Episode end time relative to log start, in seconds.
    pub t: f64,
}

const HEADER: &str = "r,l,t\n";

fn write_header(file: &mut File) -> Result<()> {
    file.write_all(HEADER.as_bytes())?;
    file.flush()?;
    Ok(())
}

/// Reads the highest relative timestamp of an existing log.
fn max_logged_time(file: &mut File) -> Result<Option<f64>> {
    file.seek(SeekFrom::Start(0))?;
    let mut rdr = csv::Reader::from_reader(&mut *file);
    let mut max_t = None;
    for row in rdr.deserialize::<EpisodeRecord>() {
        let row = row?;
        max_t = Some(match max_t {
            Some(t) if t > row.t => t,
            _ => row.t,
        });
    }
    Ok(max_t)
}

/// Initializes the log file and returns the start-time anchor.
///
/// An absent or empty file gets the header and a fresh anchor; a file with
/// rows keeps its content and the anchor is moved back by the highest
/// timestamp on record.
fn init_log_file(file: &mut File) -> Result<SystemTime> {
    let len = file.seek(SeekFrom::End(0))?;
    if len == 0 {
        write_header(file)?;
        return Ok(SystemTime::now());
    }
    match max_logged_time(file)? {
        Some(t) if t > 0.0 => Ok(SystemTime::now() - Duration::from_secs_f64(t)),
        _ => Ok(SystemTime::now()),
    }
}

/// Appends records to the end of the log and flushes.
fn append_records(file: &mut File, records: &[EpisodeRecord]) -> Result<()> {
    file.seek(SeekFrom::End(0))?;
    {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut *file);
        for record in records.iter() {
            wtr.serialize(record)?;
        }
        wtr.flush()?;
    }
    Ok(())
}

/// Seconds between `time` and the anchor, negative if `time` precedes it.
fn relative_time(time: SystemTime, anchor: SystemTime) -> f64 {
    match time.duration_since(anchor) {
        Ok(d) => d.as_secs_f64(),
        Err(e) => -e.duration().as_secs_f64(),
    }
}
