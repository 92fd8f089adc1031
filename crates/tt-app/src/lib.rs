//! TrueTribe Application Orchestration Layer
//!
//! This crate contains the use cases that drive the verification wizard and
//! talk to the backend through `tt-core` ports.

pub mod app_paths;
pub mod deps;
pub mod usecases;

pub use deps::AppDeps;
