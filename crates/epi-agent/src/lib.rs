//! `epi-agent`: per-person state and population storage.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`person`]      | `Status` bit set, `Person` record                         |
//! | [`store`]       | `Population` (dense `Vec<Person>` indexed by `AgentId`)   |
//! | [`builder`]     | `PopulationBuilder` (trait draws + initial infections)    |

pub mod builder;
pub mod person;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::PopulationBuilder;
pub use person::{Person, Status};
pub use store::Population;
