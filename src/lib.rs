//! Bitte Docs agent library
//!
//! The `docs-agent` binary wires these modules to a hyper server; the
//! `agent-ctl` binary reuses `cli` for URL resolution.

pub mod assets;
pub mod cli;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod payment;
