//! Logger module
//!
//! Timestamped logging helpers for the agent: server lifecycle, access
//! lines and error reporting. Info and access lines go to stdout, errors
//! and warnings to stderr.

use std::net::SocketAddr;

use chrono::Local;

use crate::config::Config;

fn timestamp() -> String {
    Local::now().format("%d/%b/%Y:%H:%M:%S %z").to_string()
}

fn write_info(message: &str) {
    println!("{message}");
}

fn write_error(message: &str) {
    eprintln!("{message}");
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("Bitte Docs agent started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Public base URL: {}", config.agent.base_url));
    write_info(&format!("Assets directory: {}", config.agent.assets_dir));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if config.payment.enabled {
        write_info(&format!(
            "Payment gating enabled (facilitator: {})",
            config.payment.facilitator_url
        ));
    } else {
        write_info("Payment gating disabled");
    }
    write_info("======================================\n");
}

/// Access log line: `[time] "METHOD /path" -> bytes`
pub fn log_request(method: &hyper::Method, path: &str) {
    write_info(&format!("[{}] \"{method} {path}\"", timestamp()));
}

pub fn log_response(size: usize) {
    write_info(&format!("[{}] response: {size} bytes", timestamp()));
}

pub fn log_headers_count(count: usize, show: bool) {
    if show {
        write_info(&format!("[Headers] Count: {count}"));
    }
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
