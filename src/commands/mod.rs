//! Command handlers for the `truetribe` binary.
//!
//! Commands are thin: open a `command.*` span, call a use case, map errors.

pub mod dto;
pub mod error;
pub mod session;
pub mod verification;

pub use error::map_err;
