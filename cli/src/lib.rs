//! `fitcalc` command-line front end for the fitness calculator
//!
//! Parses form fields from flags, fills unset selectors from configuration
//! and renders the same panel and report the web page shows.

pub mod args;
pub mod config;
pub mod render;
