pub mod app;
pub mod error;
pub mod manager;
pub mod models;
pub mod worker;

pub use error::MonitorError;
pub use manager::job_list::JobList;
pub use manager::monitor::{JobMonitor, MonitorSettings};
pub use models::column::{Column, SortOrder};
pub use models::job::{Job, JobState};
