pub mod column;
pub mod job;
pub mod message;
