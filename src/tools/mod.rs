//! The tools module provides helper functions for hfmn.
//!
//! The tools are:
//! - cli: Command line interface and run options.
//! - freq_count: Frequency count of the input bytes.
//!
pub mod cli;
pub mod freq_count;
