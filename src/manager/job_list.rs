use std::cmp::Ordering;

use log::debug;

use crate::manager::aging_queue::AgingQueue;
use crate::manager::clock::{Clock, ExpiryTimer};
use crate::manager::entry::JobEntry;
use crate::manager::entry_index::EntryIndex;
use crate::manager::hosts::HostNameResolver;
use crate::models::column::{Column, SortOrder};
use crate::models::job::Job;
use crate::models::message::JobRow;

/// Period of the expiry sweep while finished jobs are waiting.
pub const EXPIRE_TICK_MS: u64 = 1000;
pub const DEFAULT_FILE_PATH_PARTS: i32 = 2;
/// Finished jobs stay until the list is cleared.
pub const NEVER_EXPIRE: i64 = -1;

/// Tracks the live jobs and expires finished ones.
///
/// The timer is running exactly while the aging queue holds finished jobs.
pub struct JobList<T: ExpiryTimer, C: Clock> {
    index: EntryIndex,
    finished: AgingQueue,
    hosts: Box<dyn HostNameResolver + Send>,
    timer: T,
    clock: C,
    file_path_parts: i32,
    expire_duration: i64,
}

impl<T: ExpiryTimer, C: Clock> JobList<T, C> {
    pub fn new(hosts: Box<dyn HostNameResolver + Send>, timer: T, clock: C) -> Self {
        Self {
            index: EntryIndex::new(),
            finished: AgingQueue::new(),
            hosts,
            timer,
            clock,
            file_path_parts: DEFAULT_FILE_PATH_PARTS,
            expire_duration: NEVER_EXPIRE,
        }
    }

    pub fn update(&mut self, job: Job) {
        let entry = self.index.upsert(job, self.hosts.as_ref(), self.file_path_parts);
        if entry.job().is_finished() {
            let (id, serial) = (entry.id(), entry.serial());
            self.expire_item(id, serial);
        }
    }

    fn expire_item(&mut self, id: u32, serial: u64) {
        match self.expire_duration {
            0 => {
                self.index.remove(id);
                debug!("Job {} finished and removed immediately.", id);
            }
            d if d > 0 => {
                self.finished.push(self.clock.now(), id, serial);
                if !self.timer.is_active() {
                    debug!("Arming expiry timer.");
                    self.timer.start(EXPIRE_TICK_MS);
                }
            }
            _ => {}
        }
    }

    /// Periodic sweep: drops every finished job older than the expire duration.
    pub fn expire_finished_jobs(&mut self) {
        if self.expire_duration < 0 {
            // Expiry was switched off after these jobs finished; they stay.
            debug!("Expiry disabled, forgetting {} queued jobs.", self.finished.len());
            self.finished.clear();
        } else {
            let now = self.clock.now();
            for aged in self.finished.pop_expired(now, self.expire_duration as u64) {
                if self.index.remove_if_serial(aged.id, aged.serial).is_some() {
                    debug!("Job {} expired.", aged.id);
                }
            }
        }

        if self.finished.is_empty() && self.timer.is_active() {
            debug!("No finished jobs left, stopping expiry timer.");
            self.timer.stop();
        }
    }

    pub fn clear(&mut self) {
        self.timer.stop();
        self.finished.clear();
        self.index.clear();
        debug!("Job list cleared.");
    }

    pub fn number_of_file_path_parts(&self) -> i32 {
        self.file_path_parts
    }

    /// Reformats the Filename column of every live entry right away.
    pub fn set_number_of_file_path_parts(&mut self, parts: i32) {
        if parts == self.file_path_parts {
            return;
        }
        self.file_path_parts = parts;
        self.index.for_each_mut(|entry| entry.update_file_name(parts));
    }

    pub fn expire_duration(&self) -> i64 {
        self.expire_duration
    }

    /// Takes effect from the next update or tick; queued jobs are not re-evaluated.
    pub fn set_expire_duration(&mut self, seconds: i64) {
        self.expire_duration = seconds;
    }

    pub fn get(&self, id: u32) -> Option<&JobEntry> {
        self.index.get(id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.index.contains(id)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of finished jobs waiting in the aging queue.
    pub fn pending_expiry(&self) -> usize {
        self.finished.len()
    }

    pub fn is_timer_active(&self) -> bool {
        self.timer.is_active()
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Compares two live entries by id. Unknown ids compare equal.
    pub fn compare_ids(&self, a: u32, b: u32, column: Column) -> Ordering {
        match (self.index.get(a), self.index.get(b)) {
            (Some(a), Some(b)) => a.compare(b, column),
            _ => Ordering::Equal,
        }
    }

    /// Live entries sorted by a single column.
    pub fn sorted(&self, column: Column, order: SortOrder) -> Vec<&JobEntry> {
        let mut entries: Vec<&JobEntry> = self.index.iter().collect();
        entries.sort_by_key(|entry| entry.id());
        match order {
            SortOrder::Ascending => entries.sort_by(|a, b| a.compare(b, column)),
            SortOrder::Descending => entries.sort_by(|a, b| b.compare(a, column)),
        }
        entries
    }

    pub fn rows(&self, column: Column, order: SortOrder) -> Vec<JobRow> {
        self.sorted(column, order)
            .into_iter()
            .map(|entry| JobRow {
                id: entry.id(),
                cells: entry.cells(),
            })
            .collect()
    }
}
