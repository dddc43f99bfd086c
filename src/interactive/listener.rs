//! Terminal key reader
//!
//! A single background thread polls crossterm for key events and forwards
//! them into a tokio channel. The thread is started when the UI mounts and
//! stopped and joined when the listener is dropped.

use crossterm::event::{self, Event, KeyEvent};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Owns the key-reading thread for the lifetime of the UI
pub struct KeyListener {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl KeyListener {
    /// Start forwarding key events to `tx`
    ///
    /// The thread also exits on its own once the receiving side is gone.
    #[must_use]
    pub fn spawn(tx: UnboundedSender<KeyEvent>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);

        let handle = thread::spawn(move || {
            debug!("Key listener started");
            while !flag.load(Ordering::Relaxed) {
                match event::poll(POLL_INTERVAL) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            if tx.send(key).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(e) => {
                            warn!(error = %e, "Failed to read terminal event");
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(e) => {
                        warn!(error = %e, "Failed to poll terminal events");
                        break;
                    }
                }
            }
            debug!("Key listener stopped");
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            warn!("Key listener thread panicked");
        }
    }
}
