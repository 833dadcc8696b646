//! Zero Install feed model: implementation versions, version ranges and
//! manifest digests.
//!
//! # Modules
//!
//! - [`version`]: Version ordering and the version range algebra
//! - [`digest`]: Manifest digests and partial equality
//! - [`requirements`]: Interfaces to run with extra version restrictions
//! - [`config`]: Persisted preferences and file locations
//! - [`logging`]: Tracing subscriber setup
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod digest;
pub mod logging;
pub mod requirements;
pub mod version;
