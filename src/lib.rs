//! LinkSnap: a terminal client for a URL shortening service.
//!
//! The crate validates a URL locally, sends it to the configured service
//! and shows the short link, with a single request in flight at a time.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod shorten;
pub mod ui;
pub mod validate;
