//! Application startup state machine.
//!
//! The content schema bootstrap runs once before pages are served. Its
//! outcome moves the application out of [`Lifecycle::Initializing`] exactly
//! once; afterwards the state never changes for the life of the process.
//!
//! ```text
//! Initializing --bootstrap ok-----> Ready
//!              --bootstrap failed--> InitializationFailed
//! ```

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;

use crate::error::CoreError;

/// Startup state of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
    Initializing,
    Ready,
    InitializationFailed,
}

impl Lifecycle {
    /// Terminal state for a bootstrap outcome.
    pub fn from_bootstrap(succeeded: bool) -> Self {
        if succeeded {
            Self::Ready
        } else {
            Self::InitializationFailed
        }
    }

    /// Whether content may be served. A failed bootstrap still serves
    /// against whatever schema already exists remotely.
    pub fn is_serving(self) -> bool {
        !matches!(self, Self::Initializing)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Initializing => "initializing",
            Self::Ready => "ready",
            Self::InitializationFailed => "initialization_failed",
        }
    }

    fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Initializing, Self::Ready) | (Self::Initializing, Self::InitializationFailed)
        )
    }
}

/// Shared, cloneable view of the lifecycle state.
///
/// Backed by a [`watch`] channel so request handlers can read the current
/// state cheaply and startup code can await the bootstrap outcome.
#[derive(Debug, Clone)]
pub struct LifecycleHandle {
    tx: Arc<watch::Sender<Lifecycle>>,
}

impl LifecycleHandle {
    /// Create a handle in the `Initializing` state.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Lifecycle::Initializing);
        Self { tx: Arc::new(tx) }
    }

    pub fn current(&self) -> Lifecycle {
        *self.tx.borrow()
    }

    /// Move to `next`. Only transitions out of `Initializing` are allowed.
    pub fn transition(&self, next: Lifecycle) -> Result<(), CoreError> {
        let mut outcome = Ok(());
        self.tx.send_if_modified(|state| {
            if state.can_transition_to(next) {
                tracing::info!(from = state.as_str(), to = next.as_str(), "Lifecycle transition");
                *state = next;
                true
            } else {
                outcome = Err(CoreError::Validation(format!(
                    "Invalid lifecycle transition from {} to {}",
                    state.as_str(),
                    next.as_str()
                )));
                false
            }
        });
        outcome
    }

    /// Resolve once the state has left `Initializing`.
    pub async fn settled(&self) -> Lifecycle {
        let mut rx = self.tx.subscribe();
        // Copy out before `rx` drops; the guard borrows it.
        let settled = match rx.wait_for(|state| state.is_serving()).await {
            Ok(state) => *state,
            Err(_) => self.current(),
        };
        settled
    }
}

impl Default for LifecycleHandle {
    fn default() -> Self {
        Self::new()
    }
}
