pub mod timer;
pub mod worker;
