//! Run cancellation: a shared abort token set from the interrupt handler.
//!
//! The batch checks the token between candidates and the HTTP write and
//! progress callbacks check it mid-transfer, so an interrupted item stops
//! without leaving a file.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Error returned when a run is stopped by the user (Ctrl-C).
#[derive(Debug)]
pub struct RunAborted;

impl std::fmt::Display for RunAborted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "run aborted by user")
    }
}

impl std::error::Error for RunAborted {}

/// Cloneable abort flag shared between the interrupt handler and the batch.
#[derive(Debug, Clone, Default)]
pub struct AbortToken(Arc<AtomicBool>);

impl AbortToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_abort(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_aborted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// `Err(RunAborted)` once abort was requested.
    pub fn check(&self) -> Result<(), RunAborted> {
        if self.is_aborted() {
            Err(RunAborted)
        } else {
            Ok(())
        }
    }
}
