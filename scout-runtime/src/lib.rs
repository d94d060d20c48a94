//! Profile Scout Runtime
//!
//! Wires the sources, miners and composer into one request pipeline:
//! - [`ScoutConfig`]: defaults plus optional TOML overrides
//! - [`ScoutContext`]: the HTTP client and config every request shares
//! - [`Scout`]: turns one raw message into the reply chunks to send

pub mod config;
pub mod pipeline;

pub use config::*;
pub use pipeline::*;
