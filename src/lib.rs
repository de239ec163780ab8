//! barlog - reliability statistics from dispensing-device logs
//!
//! barlog classifies the free-text lines of a device log into a fixed
//! event taxonomy, pairs each user action with the outcomes that follow
//! it, and aggregates per-file and per-directory order statistics.

pub mod config;
pub mod correlate;
pub mod error;
pub mod event;
pub mod parser;
pub mod report;
pub mod scan;
pub mod stats;

pub use error::{BarlogError, Result};
