use crossbeam_channel::Sender;

use super::column::{Column, SortOrder};
use super::job::Job;

/// Display cells of one job, in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRow {
    pub id: u32,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListSnapshot {
    pub rows: Vec<JobRow>,
    pub expire_duration: i64,
    pub file_path_parts: i32,
    pub pending_expiry: usize,
}

#[derive(Debug)]
pub enum JobMessage {
    Update(Job),
    Clear,
    SetExpireDuration(i64),
    SetFilePathParts(i32),
    ExpireTick,
    Snapshot {
        column: Column,
        order: SortOrder,
        reply: Sender<JobListSnapshot>,
    },
    Shutdown,
}
