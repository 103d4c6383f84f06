//! Periodic callback on a background thread.
//!
//! The thread waits on a channel with a timeout equal to the interval; a
//! timeout fires the callback, anything else (cancel or the handle being
//! dropped) ends the loop. The callback returns `false` to stop itself.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub struct Timer {
    cancel: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Timer {
    /// Fire `callback` every `interval` until it returns `false` or the timer
    /// is stopped.
    pub fn start<F>(interval: Duration, mut callback: F) -> std::io::Result<Self>
    where
        F: FnMut() -> bool + Send + 'static,
    {
        let (cancel, rx) = mpsc::channel::<()>();
        let handle = thread::Builder::new()
            .name("solsim-timer".into())
            .spawn(move || loop {
                match rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        if !callback() {
                            break;
                        }
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            })?;

        Ok(Self {
            cancel: Some(cancel),
            handle: Some(handle),
        })
    }

    /// Stop firing and wait for an in-flight callback to finish.
    ///
    /// Must not be called while holding a lock the callback takes.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        // dropping the sender disconnects the channel
        self.cancel.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.shutdown();
    }
}
