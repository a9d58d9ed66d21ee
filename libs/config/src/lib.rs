//! # Trapwire Configuration
//!
//! Loads the sender's settings — monitoring server endpoint, log settings —
//! from a TOML file with environment overrides. Configuration failures are
//! fatal to the run and happen before any network attempt; the loader
//! reports them as typed errors and leaves aborting to the entry point.

pub mod error;
pub mod sender_config;

pub use error::{ConfigError, Result};
pub use sender_config::{resolve_config_path, AgentSection, SenderConfig, ServerSection};
