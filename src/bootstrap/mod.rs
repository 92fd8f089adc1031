pub mod config;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::{load_app_config, load_config, resolve_app_paths, resolve_config};
pub use runtime::{create_runtime, AppRuntime, UseCases};
pub use wiring::{wire_dependencies, WiringError};
