use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, select, tick, Sender};
use log::{debug, error};

use crate::manager::clock::ExpiryTimer;
use crate::models::message::JobMessage;

/// Posts [`JobMessage::ExpireTick`] to the event loop once per period.
pub struct TickTimer {
    sender: Sender<JobMessage>,
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TickTimer {
    pub fn new(sender: Sender<JobMessage>) -> Self {
        Self {
            sender,
            stop: None,
            handle: None,
        }
    }
}

impl ExpiryTimer for TickTimer {
    fn start(&mut self, period_ms: u64) {
        if self.is_active() {
            return;
        }

        let (stop_tx, stop_rx) = bounded::<()>(0);
        let sender = self.sender.clone();
        let ticker = tick(Duration::from_millis(period_ms));

        let handle = thread::spawn(move || loop {
            select! {
                recv(ticker) -> _ => {
                    if let Err(e) = sender.send(JobMessage::ExpireTick) {
                        error!("Failed to deliver expiry tick: {}", e);
                        break;
                    }
                }
                // Disconnected when the timer is stopped.
                recv(stop_rx) -> _ => break,
            }
        });

        debug!("Expiry ticker started ({} ms).", period_ms);
        self.stop = Some(stop_tx);
        self.handle = Some(handle);
    }

    fn stop(&mut self) {
        if self.stop.take().is_none() {
            return;
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!("Expiry ticker thread panicked.");
            }
        }
        debug!("Expiry ticker stopped.");
    }

    fn is_active(&self) -> bool {
        self.stop.is_some()
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
