//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `admin.rs` — doctor and config command trees.
//! - `runtime.rs` — android/windows/macos pipelines and plan.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate pipeline logic to `services/*`.
//! - Keep output text and `--json` schema stable.

pub mod admin;
pub mod runtime;

pub use admin::{handle_config_commands, handle_doctor_command};
pub use runtime::handle_runtime_commands;
