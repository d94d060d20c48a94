//! Profile Scout Core - domain model and text processing
//!
//! This crate provides the pure, I/O-free pieces of the lookup pipeline:
//! - Identifier normalization from URLs and handles
//! - Rich-text sanitization of free-text fields
//! - The normalized profile record
//! - Contact mining (emails, phones, social handles)
//! - Reply composition and chunking

pub mod identifier;
pub mod sanitize;
pub mod profile;
pub mod contacts;
pub mod compose;
pub mod replies;

pub use identifier::*;
pub use sanitize::*;
pub use profile::*;
pub use contacts::*;
pub use compose::*;
