//! User interfaces
//!
//! Currently only the CLI; a serving layer would slot in beside it.

pub mod cli;
