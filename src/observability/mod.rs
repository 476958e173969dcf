//! Structured logging setup.
//!
//! The crate logs through `tracing` macros and spans. This module installs the
//! subscriber that turns them into human-readable lines on stderr, leaving stdout
//! free for command output.
//!
//! # Configuration
//!
//! The filter is chosen by:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"warn"`
//!
//! # Usage
//!
//! ```rust
//! use bloodref::observability::init_tracing;
//! use bloodref::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("logging ready");
//! ```

mod init;

pub use init::{filter_directive, init_tracing};
