//! Application-level utilities for the Travelog CLI.
//!
//! This module provides:
//! - Path resolution for the config file and data directory
//! - The per-invocation context that opens the entry store

mod context;
mod resolver;

// Re-export public API
pub use context::{AppContext, Session};
pub use resolver::{load_config, resolve_config_path, resolve_data_dir};
