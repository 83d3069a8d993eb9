//! Shutdown signal handling for `watch`

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use colored::Colorize;

/// Sets a shared flag on SIGINT or SIGTERM
pub struct ShutdownSignal {
    shutdown: Arc<AtomicBool>,
}

impl ShutdownSignal {
    /// Create a handler that sets its own flag
    pub fn new() -> Self {
        Self::with_flag(Arc::new(AtomicBool::new(false)))
    }

    /// Create a handler that sets an existing flag, e.g. a monitor's
    pub fn with_flag(shutdown: Arc<AtomicBool>) -> Self {
        Self { shutdown }
    }

    /// Get a clone of the shutdown flag
    pub fn flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    /// Check if shutdown was requested
    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Start listening for shutdown signals
    #[cfg(unix)]
    pub async fn setup(&self) -> Result<(), std::io::Error> {
        use tokio::signal::unix::{signal, SignalKind};

        for (kind, name) in [
            (SignalKind::interrupt(), "SIGINT"),
            (SignalKind::terminate(), "SIGTERM"),
        ] {
            let shutdown = Arc::clone(&self.shutdown);
            let mut stream = signal(kind)?;
            tokio::spawn(async move {
                stream.recv().await;
                eprintln!("{} Received {} (shutdown)", "↓".cyan(), name);
                shutdown.store(true, Ordering::SeqCst);
            });
        }

        Ok(())
    }

    /// Start listening for Ctrl+C
    #[cfg(not(unix))]
    pub async fn setup(&self) -> Result<(), std::io::Error> {
        let shutdown = Arc::clone(&self.shutdown);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                eprintln!("{} Received Ctrl+C (shutdown)", "↓".cyan());
                shutdown.store(true, Ordering::SeqCst);
            }
        });
        Ok(())
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shutdown_signal_default_is_false() {
        let signal = ShutdownSignal::new();
        assert!(!signal.is_shutdown());
    }

    #[test]
    fn shared_flag_is_observed() {
        let flag = Arc::new(AtomicBool::new(false));
        let signal = ShutdownSignal::with_flag(Arc::clone(&flag));
        flag.store(true, Ordering::SeqCst);
        assert!(signal.is_shutdown());
    }

    #[tokio::test]
    async fn setup_succeeds() {
        let signal = ShutdownSignal::new();
        signal.setup().await.unwrap();
        assert!(!signal.is_shutdown());
    }
}
