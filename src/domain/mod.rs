//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — invocations, stages, pipelines and the reports built from them.
//! - `constants.rs` — stage tags, failure messages, density buckets.
//!
//! Domain types are data-only: no filesystem or process side effects.
//!
//! ## Compatibility note
//! Report structs are the `--json` output. Keep schema-impacting changes
//! synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
