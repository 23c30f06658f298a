//! Input/output, configuration and error handling

/// Command-line interface
pub mod cli;
/// Workflow constants and defaults
pub mod configuration;
/// Copick project configuration writer
pub mod copick;
/// Error types
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// YAML settings with overrides
pub mod settings;
