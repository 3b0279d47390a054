//! Testing utilities for the crate's own test suite.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Runs a test with a 10-second timeout to prevent infinite hangs.
///
/// A future whose waker is never woken hangs its executor forever; the
/// watchdog turns that into a prompt panic instead.
pub(crate) fn with_watchdog<F, R>(test_fn: F) -> R
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    let test_handle = thread::spawn(move || {
        let result = test_fn();
        // If this fails, the receiver has already timed out.
        drop(tx.send(result));
    });

    match rx.recv_timeout(Duration::from_secs(10)) {
        Ok(result) => {
            test_handle.join().expect("test thread should not panic");
            result
        }
        Err(mpsc::RecvTimeoutError::Timeout) => {
            panic!("test exceeded 10-second timeout - likely a missed wakeup");
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            // The test thread panicked before sending; surface that panic.
            match test_handle.join() {
                Ok(_) => panic!("test thread disconnected unexpectedly"),
                Err(e) => std::panic::resume_unwind(e),
            }
        }
    }
}
