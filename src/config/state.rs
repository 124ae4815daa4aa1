// Application state module
// Shared, read-only state handed to every connection task

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

use super::types::Config;
use crate::classifier::ResponseClassifier;

/// Application state
pub struct AppState {
    pub config: Config,
    pub classifier: ResponseClassifier,

    // Cached config values for fast access
    pub access_log: bool,
    pub debug: bool,

    /// Notified once when the server should stop accepting
    pub shutdown: Arc<Notify>,
    shutdown_requested: AtomicBool,
}

impl AppState {
    /// Build state with the standard keyword table
    pub fn new(config: &Config) -> Self {
        Self {
            access_log: config.logging.access_log && config.info_enabled(),
            debug: config.server.debug,
            config: config.clone(),
            classifier: ResponseClassifier::default(),
            shutdown: Arc::new(Notify::new()),
            shutdown_requested: AtomicBool::new(false),
        }
    }

    /// Ask the server loop to stop; later calls are no-ops
    pub fn request_shutdown(&self) {
        if !self.shutdown_requested.swap(true, Ordering::SeqCst) {
            // notify_one stores a permit, so a loop not yet waiting still sees it
            self.shutdown.notify_one();
        }
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown_requested.load(Ordering::SeqCst)
    }
}
