pub mod aging_queue;
pub mod clock;
pub mod entry;
pub mod entry_index;
pub mod hosts;
pub mod job_list;
pub mod monitor;
pub mod path;
