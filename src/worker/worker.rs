use std::thread::{self, JoinHandle};

use crossbeam_channel::Receiver;
use log::{error, info, warn};

use crate::manager::clock::{Clock, ExpiryTimer};
use crate::manager::job_list::JobList;
use crate::models::message::{JobListSnapshot, JobMessage};

/// Runs the job list on its own thread. Every mutation arrives as a message,
/// so the list itself is only ever touched from this one loop.
pub fn spawn_worker_thread<T, C>(receiver: Receiver<JobMessage>, mut jobs: JobList<T, C>) -> JoinHandle<()>
where
    T: ExpiryTimer + Send + 'static,
    C: Clock + Send + 'static,
{
    thread::spawn(move || {
        info!("Job event loop started.");
        loop {
            match receiver.recv() {
                Ok(JobMessage::Shutdown) => break,
                Ok(message) => handle_message(&mut jobs, message),
                Err(e) => {
                    error!("Failed to receive message: {}", e);
                    break;
                }
            }
        }
        jobs.clear();
        info!("Job event loop stopped.");
    })
}

pub fn handle_message<T: ExpiryTimer, C: Clock>(jobs: &mut JobList<T, C>, message: JobMessage) {
    match message {
        JobMessage::Update(job) => jobs.update(job),
        JobMessage::Clear => jobs.clear(),
        JobMessage::SetExpireDuration(seconds) => {
            info!("Expire duration set to {}s.", seconds);
            jobs.set_expire_duration(seconds);
        }
        JobMessage::SetFilePathParts(parts) => {
            info!("Showing {} file path parts.", parts);
            jobs.set_number_of_file_path_parts(parts);
        }
        JobMessage::ExpireTick => jobs.expire_finished_jobs(),
        JobMessage::Snapshot { column, order, reply } => {
            let snapshot = JobListSnapshot {
                rows: jobs.rows(column, order),
                expire_duration: jobs.expire_duration(),
                file_path_parts: jobs.number_of_file_path_parts(),
                pending_expiry: jobs.pending_expiry(),
            };
            if reply.send(snapshot).is_err() {
                warn!("Snapshot requester went away.");
            }
        }
        JobMessage::Shutdown => {}
    }
}
