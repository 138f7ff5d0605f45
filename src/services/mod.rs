//! Service layer containing pipeline logic and side-effect helpers.
//!
//! ## Service map
//! - `config.rs` — `packwright.toml` loading, defaults, project root.
//! - `android.rs` / `installer.rs` / `bundle.rs` — stage lists per target.
//! - `pipeline.rs` — the stage executor and its error type.
//! - `runner.rs` — `ToolRunner` seam and the process-spawning runner.
//! - `icons.rs` — density-bucket launcher icon copy.
//! - `doctor.rs` — tool and input availability checks.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Stage builders are pure; all process and filesystem effects happen in
//!   `pipeline::execute` and the helpers it calls.
//! - Keep command handlers thin; delegate to services.

pub mod android;
pub mod bundle;
pub mod config;
pub mod doctor;
pub mod icons;
pub mod installer;
pub mod output;
pub mod pipeline;
pub mod runner;
