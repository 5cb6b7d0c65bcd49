//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

pub mod config_management;
mod export;
mod extract;
mod scan;

pub use export::*;
pub use extract::*;
pub use scan::*;
