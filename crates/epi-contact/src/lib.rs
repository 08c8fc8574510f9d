//! `epi-contact`: who an infected agent meets on a given day.
//!
//! # Modelling assumption
//!
//! A person always has contact with the same people.  Every sampler is keyed
//! on the agent index alone, never on the day, so the contact graph is fixed
//! for the whole run.  The `day` argument of
//! [`ContactSampler::for_each_contact`] exists so that custom samplers may choose
//! otherwise.
//!
//! # Samplers
//!
//! | Type                  | `SamplerKind` | Cost per agent-day                      |
//! |-----------------------|---------------|-----------------------------------------|
//! | [`RepeatableSampler`] | `Default`     | seed a `SmallRng`, N uniform draws      |
//! | [`LfsrSampler`]       | `Faster`      | N LFSR steps + N modulo                 |
//! | [`ContiguousSampler`] | `Ludicrous`   | 1 LFSR step, then N adjacent indices    |
//!
//! All three emit exactly `interaction_circle_count` targets in
//! `[0, population_count)`.  Repeats and self-contact are allowed.

pub mod contiguous;
pub mod lfsr;
pub mod repeatable;
pub mod sampler;


pub use contiguous::ContiguousSampler;
pub use lfsr::{Lfsr32, LfsrSampler};
pub use repeatable::RepeatableSampler;
pub use sampler::{ContactSampler, sampler_for};
