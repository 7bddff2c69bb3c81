//! # Feature Showcase
//!
//! Small, self-contained demos, each illustrating one language or
//! standard-library feature, run through a shared registry.
//!
//! ## Pieces
//!
//! - [`registry`] - named demos, run one by one or all in order
//! - [`console`] - lock-guarded output shared by every demo
//! - [`report`] - outcome of a run, rendered as text or JSON
//! - [`config`] - optional TOML settings
//! - [`alloc_tracker`] - explicitly owned allocation counters
//! - [`demos`] - the built-in demo catalog
//! - [`cli`] - argument parsing and command dispatch for `showcase`
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin showcase -- list
//! cargo run --bin showcase -- run variant threads
//! cargo run --bin showcase -- all --json
//! ```

pub mod alloc_tracker;
pub mod cli;
pub mod config;
pub mod console;
pub mod demos;
pub mod registry;
pub mod report;

pub use config::{Config, ConfigError, DemoSettings};
pub use console::{CaptureBuffer, Console};
pub use registry::{DemoRegistry, RegistryError};
pub use report::{Outcome, ReportEntry, RunReport};
