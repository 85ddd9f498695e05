#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use job_monitor::manager::clock::{Clock, ExpiryTimer};
use job_monitor::manager::hosts::HostTable;
use job_monitor::{Job, JobList, JobState};

/// Clock whose time only moves when a test advances it.
#[derive(Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn at(now: u64) -> Self {
        Self { now: Rc::new(Cell::new(now)) }
    }

    pub fn advance(&self, seconds: u64) {
        self.now.set(self.now.get() + seconds);
    }

    pub fn set(&self, now: u64) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> u64 {
        self.now.get()
    }
}

#[derive(Debug, Default)]
pub struct ManualTimer {
    active: bool,
    pub starts: usize,
    pub period_ms: u64,
}

impl ExpiryTimer for ManualTimer {
    fn start(&mut self, period_ms: u64) {
        self.active = true;
        self.starts += 1;
        self.period_ms = period_ms;
    }

    fn stop(&mut self) {
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

pub fn hosts() -> HostTable {
    let mut hosts = HostTable::new();
    hosts.insert(1, "alpha");
    hosts.insert(2, "beta");
    hosts
}

pub fn job_list(clock: &ManualClock) -> JobList<ManualTimer, ManualClock> {
    JobList::new(Box::new(hosts()), ManualTimer::default(), clock.clone())
}

pub fn running(id: u32) -> Job {
    Job::new(id, JobState::Running, format!("/src/project/module/file{}.c", id), 1)
}

pub fn finished(id: u32) -> Job {
    running(id).with_state(JobState::Finished)
}

/// Advances one second at a time, ticking like the armed timer would.
pub fn run_for(jobs: &mut JobList<ManualTimer, ManualClock>, clock: &ManualClock, seconds: u64) {
    for _ in 0..seconds {
        clock.advance(1);
        if jobs.is_timer_active() {
            jobs.expire_finished_jobs();
        }
    }
}
