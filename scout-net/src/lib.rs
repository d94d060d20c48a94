//! Profile Scout Network Layer
//!
//! Provides HTTP access for the lookup pipeline:
//! - Shared client construction (timeouts, user agent, optional proxy)
//! - Page retrieval with status checking
//! - Linked-website contact extraction

pub mod client;
pub mod website;

pub use client::*;
pub use website::*;
