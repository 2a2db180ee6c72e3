//! Cloudscope daemon
//!
//! Process bootstrap around the search connector: configuration, credential
//! settling and a JSON-lines host on stdout.

pub mod config;
pub mod error;
pub mod output;
pub mod settle;

pub use error::{DaemonError, Result};
