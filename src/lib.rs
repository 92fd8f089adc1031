//! TrueTribe Library
//!
//! Terminal frontend for TrueTribe identity verification: bootstrap, adapters
//! and command handlers on top of the `tt-*` crates.

pub mod adapters;
pub mod bootstrap;
pub mod commands;
