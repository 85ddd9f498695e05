/// Wall-clock source, in whole seconds since the epoch.
pub trait Clock {
    fn now(&self) -> u64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        chrono::Utc::now().timestamp().max(0) as u64
    }
}

/// A periodic timer. Whoever owns the timer routes each period's tick back
/// into [`JobList::expire_finished_jobs`](crate::manager::job_list::JobList::expire_finished_jobs).
pub trait ExpiryTimer {
    fn start(&mut self, period_ms: u64);
    fn stop(&mut self);
    fn is_active(&self) -> bool;
}
