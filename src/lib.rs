//! Media Renamer Library
//!
//! A library for batch-renaming video files with naming templates,
//! natural sort ordering and episode-number inference.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use error::{Error, Result};
