//! Logger module
//!
//! Provides logging utilities for the assistant server including:
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Classification traces in debug mode
//! - Error and warning logging

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::classifier::Intent;
use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
        config.info_enabled(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("🤖 EasyFly ChatBot starting up...");
    write_info(&format!("📡 Server available at http://{addr}"));
    write_info(&format!(
        "  - POST http://{addr}{}  (chat)",
        config.chatbot.path
    ));
    write_info(&format!("  - GET  http://{addr}/  (readiness)"));
    if config.health.enabled {
        write_info(&format!(
            "  - GET  http://{addr}{}, {}  (health)",
            config.health.liveness_path, config.health.readiness_path
        ));
    }
    write_info(&format!("Log level: {}", config.logging.level));
    match config.server.workers {
        Some(workers) => write_info(&format!("Worker threads: {workers}")),
        None => write_info("Worker threads: default (CPU cores)"),
    }
    write_info(&format!(
        "Response delay: {}ms",
        config.chatbot.response_delay_ms
    ));
    if config.server.debug {
        write_info("Debug mode: classification traces enabled");
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================\n");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_info(message: &str) {
    write_info(&format!("[INFO] {message}"));
}

/// Failure turned into the apology reply
pub fn log_processing_failure(err: &crate::error::ChatError) {
    write_error(&format!("Error processing request: {err}"));
}

/// Classification trace, written only in debug mode
pub fn log_classification(message: &str, intent: Intent) {
    write_info(&format!("[Chat] \"{message}\" -> {intent}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}

pub fn log_shutdown(active: usize) {
    write_info(&format!(
        "\n[Shutdown] Listener closed, {active} connection(s) still finishing"
    ));
}
