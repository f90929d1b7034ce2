//! Logger module
//!
//! Process-wide diagnostic output for the translator service:
//! - Startup and fatal lines
//! - One line per handled translation request
//! - Connection-level errors and warnings
//!
//! Lines go to stdout/stderr until `init()` points them at files.

pub mod writer;

use chrono::Local;
use std::net::SocketAddr;

use crate::config::Config;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Prefix a message with the local time, `2024/01/31 12:00:00 message`
fn stamp(message: &str) -> String {
    format!("{} {message}", Local::now().format("%Y/%m/%d %H:%M:%S"))
}

fn write_info(message: &str) {
    let line = stamp(message);
    match writer::get() {
        Some(w) => w.write_info(&line),
        None => println!("{line}"),
    }
}

fn write_error(message: &str) {
    let line = stamp(message);
    match writer::get() {
        Some(w) => w.write_error(&line),
        None => eprintln!("{line}"),
    }
}

pub fn log_listening(address: &str, config: &Config) {
    write_info(&format!(r#"Listening on "{address}"..."#));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(limit) = config.translator.max_identifiers {
        write_info(&format!("Max identifiers per request: {limit}"));
    }
    if config.translator.seed.is_some() {
        write_info("Random generator uses a fixed seed");
    }
}

pub fn log_translation_sent(peer_addr: &SocketAddr) {
    write_info(&format!(
        r#"Translation performed and response sent to "{peer_addr}""#
    ));
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
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

pub fn log_fatal(message: &str) {
    write_error(&format!("[FATAL] {message}"));
}
