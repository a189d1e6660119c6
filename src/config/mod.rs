//! Configuration module
//!
//! This module handles loading, parsing, and validating TOML configuration,
//! and resolving the generator credential from the environment. Every
//! section is optional; defaults produce a working configuration for any
//! publicly fetchable page.
//!
//! # Example
//!
//! ```no_run
//! use faqsmith::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Some(Path::new("config.toml"))).unwrap();
//! println!("Generator model: {}", config.generator.model);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetcherConfig, GeneratorConfig, SynthesizerConfig};

// Re-export parser functions
pub use parser::load_config;
