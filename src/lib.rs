//! Sample List - A scrollable terminal list of generated sample products
//!
//! This crate provides:
//! - A faker-style generator for product records
//! - An interactive list with a loading skeleton, scroll-to-top and add-item controls
//! - Plain-text and JSON record output

pub mod cli;
pub mod commands;
pub mod config;
pub mod data;
pub mod error;
pub mod tui;

// Re-export commonly used types
pub use config::Config;
pub use data::Record;
pub use error::{ListError, Result};
