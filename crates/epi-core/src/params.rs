//! Disease-spread parameter set.
//!
//! # JSON format
//!
//! The serialized field names are part of the external contract; parameter
//! files written for earlier releases must keep loading.
//!
//! ```json
//! {
//!   "algorithm_type": 1,
//!   "population_count": 10000000,
//!   "start_infected": 1000,
//!   "collapse_threshold": 5000,
//!   "interaction_circle_count": 40,
//!   "asymptomatic_ratio": 0.5,
//!   "isolation_ratio": 0.9,
//!   "isolation_violators_ratio": 0.1,
//!   "asymptomatic_days": 13,
//!   "total_disease_days": 25,
//!   "spread_prob_isolation": 0.001,
//!   "spread_prob_not_isolation": 0.4,
//!   "spread_prob_asymptomatic_isolation": 0.0001,
//!   "spread_prob_asymptomatic_not_isolation": 0.001,
//!   "death_prob_normal": 0.0008,
//!   "death_prob_collapse": 0.006
//! }
//! ```
//!
//! Any field may be omitted; it then keeps its [`Default`] value.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

// ── SamplerKind ───────────────────────────────────────────────────────────────

/// Which contact-sampling algorithm a run uses.
///
/// Serialized as the integer `algorithm_type`; the integer is resolved into
/// this enum once, when the world is built.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum SamplerKind {
    /// Per-agent `SmallRng` re-seeded from the agent index.
    Default,
    /// 32-bit LFSR stepped once per contact.
    Faster,
    /// One LFSR step, then a contiguous run of indices.
    Ludicrous,
}

impl SamplerKind {
    /// The serialized `algorithm_type` value.
    pub fn as_u32(self) -> u32 {
        match self {
            SamplerKind::Default => 0,
            SamplerKind::Faster => 1,
            SamplerKind::Ludicrous => 2,
        }
    }
}

impl TryFrom<u32> for SamplerKind {
    type Error = ConfigError;

    fn try_from(value: u32) -> ConfigResult<Self> {
        match value {
            0 => Ok(SamplerKind::Default),
            1 => Ok(SamplerKind::Faster),
            2 => Ok(SamplerKind::Ludicrous),
            other => Err(ConfigError::UnknownAlgorithm(other)),
        }
    }
}

impl fmt::Display for SamplerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SamplerKind::Default => "default",
            SamplerKind::Faster => "faster",
            SamplerKind::Ludicrous => "ludicrous",
        };
        f.write_str(s)
    }
}

// ── DiseaseParameters ─────────────────────────────────────────────────────────

/// Immutable configuration for one simulation run.
///
/// Spread probabilities are keyed by the state of the *source* agent: whether
/// it shows symptoms and whether it is in isolation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiseaseParameters {
    /// Contact sampler selector (0 = default, 1 = faster, 2 = ludicrous).
    pub algorithm_type: u32,

    /// Population size.  Fixed for the run.
    pub population_count: u32,

    /// Number of initial infection draws (with replacement).
    pub start_infected: u32,

    /// Healthcare collapses when more than this many alive agents are infected.
    pub collapse_threshold: u32,

    /// Contacts sampled per infected agent per day (Dunbar's number).
    pub interaction_circle_count: u32,

    /// Share of agents who never develop symptoms.
    #[serde(rename = "asymptomatic_ratio")]
    pub always_asymptomatic_ratio: f32,

    /// Probability that a newly infected agent goes into isolation.
    pub isolation_ratio: f32,

    /// Share of agents who ignore isolation rules.
    pub isolation_violators_ratio: f32,

    /// Days after which a not-always-asymptomatic agent shows symptoms.
    pub asymptomatic_days: u32,

    /// Days after which an infected agent recovers and becomes immune.
    pub total_disease_days: u32,

    #[serde(rename = "spread_prob_isolation")]
    pub spread_symptomatic_isolation: f32,

    #[serde(rename = "spread_prob_not_isolation")]
    pub spread_symptomatic_not_isolation: f32,

    #[serde(rename = "spread_prob_asymptomatic_isolation")]
    pub spread_asymptomatic_isolation: f32,

    #[serde(rename = "spread_prob_asymptomatic_not_isolation")]
    pub spread_asymptomatic_not_isolation: f32,

    /// Daily death probability with a functioning healthcare system.
    pub death_prob_normal: f32,

    /// Daily death probability once healthcare has collapsed.
    pub death_prob_collapse: f32,
}

impl Default for DiseaseParameters {
    fn default() -> Self {
        Self {
            algorithm_type:                    SamplerKind::Faster.as_u32(),
            population_count:                  10_000_000,
            start_infected:                    1_000,
            collapse_threshold:                5_000,
            interaction_circle_count:          40,
            always_asymptomatic_ratio:         0.5,
            isolation_ratio:                   0.9,
            isolation_violators_ratio:         0.1,
            asymptomatic_days:                 13,
            total_disease_days:                25,
            spread_symptomatic_isolation:      0.001,
            spread_symptomatic_not_isolation:  0.4,
            spread_asymptomatic_isolation:     0.0001,
            spread_asymptomatic_not_isolation: 0.001,
            death_prob_normal:                 0.0008, // 0.02 over 25 days
            death_prob_collapse:               0.006,  // 0.15 over 25 days
        }
    }
}

/// Longest `total_disease_days` a world accepts: the range of the per-agent
/// days-infected counter, so every infection can reach recovery.
pub const MAX_DISEASE_DAYS: u32 = u16::MAX as u32;

impl DiseaseParameters {
    /// Resolve `algorithm_type` into a [`SamplerKind`].
    pub fn sampler_kind(&self) -> ConfigResult<SamplerKind> {
        SamplerKind::try_from(self.algorithm_type)
    }

    /// Check every constraint a world relies on.
    ///
    /// Returns the resolved [`SamplerKind`] so callers validate and select
    /// the sampler in one step.
    pub fn validate(&self) -> ConfigResult<SamplerKind> {
        if self.population_count == 0 {
            return Err(ConfigError::ZeroPopulation);
        }
        if self.start_infected > self.population_count {
            return Err(ConfigError::StartInfectedExceedsPopulation {
                start_infected:   self.start_infected,
                population_count: self.population_count,
            });
        }
        if self.total_disease_days > MAX_DISEASE_DAYS {
            return Err(ConfigError::DiseaseTooLong {
                total_disease_days: self.total_disease_days,
                max:                MAX_DISEASE_DAYS,
            });
        }
        for (name, value) in self.probabilities() {
            // `contains` is false for NaN, so NaN is rejected too.
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { name, value });
            }
        }
        self.sampler_kind()
    }

    /// Every probability-valued field with its serialized name.
    pub fn probabilities(&self) -> [(&'static str, f32); 9] {
        [
            ("asymptomatic_ratio", self.always_asymptomatic_ratio),
            ("isolation_ratio", self.isolation_ratio),
            ("isolation_violators_ratio", self.isolation_violators_ratio),
            ("spread_prob_isolation", self.spread_symptomatic_isolation),
            ("spread_prob_not_isolation", self.spread_symptomatic_not_isolation),
            ("spread_prob_asymptomatic_isolation", self.spread_asymptomatic_isolation),
            ("spread_prob_asymptomatic_not_isolation", self.spread_asymptomatic_not_isolation),
            ("death_prob_normal", self.death_prob_normal),
            ("death_prob_collapse", self.death_prob_collapse),
        ]
    }

    // ── JSON ──────────────────────────────────────────────────────────────

    /// Parse a (possibly partial) JSON record.  Missing fields take defaults.
    ///
    /// Only the syntax is checked here; call [`validate`](Self::validate)
    /// (or build a world, which does) to check the values.
    pub fn from_json_str(s: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse a JSON record from any reader.
    pub fn from_json_reader<R: Read>(reader: R) -> ConfigResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse a JSON record from a file.
    pub fn from_json_file(path: &Path) -> ConfigResult<Self> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// Single-line JSON, as echoed at the top of a report.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON, suitable as a starting point for a parameter file.
    pub fn to_json_pretty(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
