use std::fmt;
use std::str::FromStr;

use crate::error::MonitorError;

/// Lifecycle state reported by the feed for a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobState {
    Pending,
    LocalOnly,
    Running,
    Finished,
    Failed,
}

impl JobState {
    /// Label shown in the State column.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobState::Pending => "Waiting",
            JobState::LocalOnly => "LocalOnly",
            JobState::Running => "Compiling",
            JobState::Finished => "Finished",
            JobState::Failed => "Failed",
        }
    }

    /// No further updates are expected once a job is finished or failed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Finished | JobState::Failed)
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobState {
    type Err = MonitorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" | "waiting" => Ok(JobState::Pending),
            "localonly" | "local" => Ok(JobState::LocalOnly),
            "running" | "compiling" => Ok(JobState::Running),
            "finished" | "done" => Ok(JobState::Finished),
            "failed" => Ok(JobState::Failed),
            _ => Err(MonitorError::UnknownState(s.to_string())),
        }
    }
}

/// A full status snapshot for one job. Updates replace the whole record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: u32,
    pub state: JobState,
    pub file_path: String,
    pub client_host_id: u32,
    pub server_host_id: Option<u32>,
    pub real_msec: u32,
    pub user_msec: u32,
    pub page_faults: u32,
    pub in_uncompressed: u64,
    pub out_uncompressed: u64,
}

impl Job {
    pub fn new(id: u32, state: JobState, file_path: impl Into<String>, client_host_id: u32) -> Self {
        Self {
            id,
            state,
            file_path: file_path.into(),
            client_host_id,
            server_host_id: None,
            real_msec: 0,
            user_msec: 0,
            page_faults: 0,
            in_uncompressed: 0,
            out_uncompressed: 0,
        }
    }

    pub fn with_state(mut self, state: JobState) -> Self {
        self.state = state;
        self
    }

    pub fn with_server(mut self, server_host_id: u32) -> Self {
        self.server_host_id = Some(server_host_id);
        self
    }

    pub fn with_times(mut self, real_msec: u32, user_msec: u32) -> Self {
        self.real_msec = real_msec;
        self.user_msec = user_msec;
        self
    }

    pub fn with_page_faults(mut self, page_faults: u32) -> Self {
        self.page_faults = page_faults;
        self
    }

    pub fn with_sizes(mut self, in_uncompressed: u64, out_uncompressed: u64) -> Self {
        self.in_uncompressed = in_uncompressed;
        self.out_uncompressed = out_uncompressed;
        self
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_finished_and_failed_are_terminal() {
        assert!(JobState::Finished.is_terminal());
        assert!(JobState::Failed.is_terminal());
        assert!(!JobState::Pending.is_terminal());
        assert!(!JobState::LocalOnly.is_terminal());
        assert!(!JobState::Running.is_terminal());
    }

    #[test]
    fn parses_state_names_and_labels() {
        assert_eq!("running".parse::<JobState>().unwrap(), JobState::Running);
        assert_eq!("Compiling".parse::<JobState>().unwrap(), JobState::Running);
        assert_eq!("FAILED".parse::<JobState>().unwrap(), JobState::Failed);
        assert!(matches!(
            "exploded".parse::<JobState>(),
            Err(MonitorError::UnknownState(s)) if s == "exploded"
        ));
    }

    #[test]
    fn builder_keeps_snapshot_fields() {
        let job = Job::new(7, JobState::Running, "/src/main.c", 1)
            .with_server(2)
            .with_times(120, 80)
            .with_page_faults(3)
            .with_sizes(4096, 1024);

        assert_eq!(job.server_host_id, Some(2));
        assert_eq!(job.real_msec, 120);
        assert_eq!(job.user_msec, 80);
        assert_eq!(job.page_faults, 3);
        assert_eq!(job.in_uncompressed, 4096);
        assert!(!job.is_finished());
        assert!(job.with_state(JobState::Finished).is_finished());
    }
}
