//! `epi-core`: foundational types for the `rust_epi` epidemic simulator.
//!
//! This crate is a dependency of every other `epi-*` crate.  It intentionally
//! has no `epi-*` dependencies.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`params`]      | `DiseaseParameters`, `SamplerKind`, `MAX_DISEASE_DAYS`|
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (run-level)          |
//! | [`error`]       | `ConfigError`, `ConfigResult`                         |

pub mod error;
pub mod ids;
pub mod params;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ConfigError, ConfigResult};
pub use ids::AgentId;
pub use params::{DiseaseParameters, MAX_DISEASE_DAYS, SamplerKind};
pub use rng::{AgentRng, SimRng};
