//! # System Interaction Layer
//!
//! Boundary between the resolution engine and the operating system.
//!
//! ## Modules
//!
//! - **`executor`**: spawns the final command with inherited standard streams and
//!   reports its exit code.
//! - **`logging`**: installs the `env_logger` backend and applies the provisional
//!   (`ERUN_LOG`) and final (settings) log levels.

/// Child process execution.
pub mod executor;
/// Logger installation and level control.
pub mod logging;
