//! ui
//!
//! User-facing output for the `cl` binary.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! All command output goes through this module so that `--quiet` and
//! `--json` are handled in one place.

pub mod output;
