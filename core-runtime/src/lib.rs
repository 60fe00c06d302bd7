//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the media suite:
//! - Logging and tracing infrastructure
//! - Configuration management
//!
//! ## Overview
//!
//! This crate contains the runtime utilities the other crates depend on. It
//! establishes the logging conventions (diagnostics on stderr, transcript on
//! stdout) and the validated configuration handed to every session.

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
