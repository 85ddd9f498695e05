use std::collections::hash_map::{Entry, HashMap};

use crate::manager::entry::JobEntry;
use crate::manager::hosts::HostNameResolver;
use crate::models::job::Job;

/// Owns every live entry, keyed by job id.
#[derive(Debug, Default)]
pub struct EntryIndex {
    entries: HashMap<u32, JobEntry>,
    next_serial: u64,
}

impl EntryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the entry for `job.id` or updates the existing one in place.
    pub fn upsert(&mut self, job: Job, hosts: &dyn HostNameResolver, file_path_parts: i32) -> &mut JobEntry {
        let next_serial = &mut self.next_serial;
        match self.entries.entry(job.id) {
            Entry::Occupied(occupied) => {
                let entry = occupied.into_mut();
                entry.update(job, hosts, file_path_parts);
                entry
            }
            Entry::Vacant(vacant) => {
                let serial = *next_serial;
                *next_serial += 1;
                vacant.insert(JobEntry::new(job, serial, hosts, file_path_parts))
            }
        }
    }

    pub fn get(&self, id: u32) -> Option<&JobEntry> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.entries.contains_key(&id)
    }

    /// Removing an unknown id is a no-op.
    pub fn remove(&mut self, id: u32) -> Option<JobEntry> {
        self.entries.remove(&id)
    }

    /// Removes `id` only if it is still the entry created with `serial`.
    pub fn remove_if_serial(&mut self, id: u32, serial: u64) -> Option<JobEntry> {
        match self.entries.get(&id) {
            Some(entry) if entry.serial() == serial => self.entries.remove(&id),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn for_each_mut<F: FnMut(&mut JobEntry)>(&mut self, f: F) {
        self.entries.values_mut().for_each(f);
    }

    pub fn iter(&self) -> impl Iterator<Item = &JobEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
