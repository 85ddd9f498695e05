use std::thread::JoinHandle;

use crossbeam_channel::{bounded, unbounded, Sender};
use log::{error, info};

use crate::error::MonitorError;
use crate::manager::clock::SystemClock;
use crate::manager::hosts::HostTable;
use crate::manager::job_list::{JobList, DEFAULT_FILE_PATH_PARTS, NEVER_EXPIRE};
use crate::models::column::{Column, SortOrder};
use crate::models::job::Job;
use crate::models::message::{JobListSnapshot, JobMessage};
use crate::worker::timer::TickTimer;
use crate::worker::worker::spawn_worker_thread;

#[derive(Debug, Clone)]
pub struct MonitorSettings {
    pub hosts: HostTable,
    pub expire_duration: i64,
    pub file_path_parts: i32,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            hosts: HostTable::new(),
            expire_duration: NEVER_EXPIRE,
            file_path_parts: DEFAULT_FILE_PATH_PARTS,
        }
    }
}

/// Handle to the job event loop. Cheap calls that only post messages.
pub struct JobMonitor {
    sender: Sender<JobMessage>,
    handle: Option<JoinHandle<()>>,
}

impl JobMonitor {
    pub fn start(settings: MonitorSettings) -> Self {
        let (sender, receiver) = unbounded();

        let mut jobs = JobList::new(
            Box::new(settings.hosts),
            TickTimer::new(sender.clone()),
            SystemClock,
        );
        jobs.set_expire_duration(settings.expire_duration);
        jobs.set_number_of_file_path_parts(settings.file_path_parts);

        let handle = spawn_worker_thread(receiver, jobs);
        info!(
            "Job monitor started (expire {}s, {} path parts).",
            settings.expire_duration, settings.file_path_parts
        );

        JobMonitor {
            sender,
            handle: Some(handle),
        }
    }

    /// Sender for producers that feed job updates directly.
    pub fn sender(&self) -> Sender<JobMessage> {
        self.sender.clone()
    }

    pub fn update(&self, job: Job) -> Result<(), MonitorError> {
        self.send(JobMessage::Update(job))
    }

    pub fn clear(&self) -> Result<(), MonitorError> {
        self.send(JobMessage::Clear)
    }

    pub fn set_expire_duration(&self, seconds: i64) -> Result<(), MonitorError> {
        self.send(JobMessage::SetExpireDuration(seconds))
    }

    pub fn set_number_of_file_path_parts(&self, parts: i32) -> Result<(), MonitorError> {
        self.send(JobMessage::SetFilePathParts(parts))
    }

    pub fn snapshot(&self, column: Column, order: SortOrder) -> Result<JobListSnapshot, MonitorError> {
        let (reply, response) = bounded(1);
        self.send(JobMessage::Snapshot { column, order, reply })?;
        response.recv().map_err(|_| MonitorError::EventLoopGone)
    }

    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = self.sender.send(JobMessage::Shutdown);
            if handle.join().is_err() {
                error!("Job event loop panicked.");
            }
        }
    }

    fn send(&self, message: JobMessage) -> Result<(), MonitorError> {
        self.sender.send(message).map_err(|e| {
            error!("Failed to send message: {}", e);
            MonitorError::EventLoopGone
        })
    }
}

impl Drop for JobMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}
