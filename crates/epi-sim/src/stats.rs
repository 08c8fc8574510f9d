//! Per-day snapshots and outcomes.

use epi_agent::{Person, Population};

/// Population counts at one instant.  Derived on demand, never stored.
///
/// `infected_count`, `isolation_count` and `immune_count` only count alive
/// agents, so `live_count + dead_count` is always the population size.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct WorldStat {
    pub live_count:      u32,
    pub infected_count:  u32,
    pub dead_count:      u32,
    pub isolation_count: u32,
    pub immune_count:    u32,
}

impl WorldStat {
    /// One linear pass over `population`.
    pub fn from_population(population: &Population) -> Self {
        #[cfg(not(feature = "parallel"))]
        {
            population.iter().fold(WorldStat::default(), |mut stat, p| {
                stat.record(p);
                stat
            })
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            population
                .as_slice()
                .par_iter()
                .fold(WorldStat::default, |mut stat, p| {
                    stat.record(p);
                    stat
                })
                .reduce(WorldStat::default, WorldStat::merge)
        }
    }

    /// Add one person to the counts.
    #[inline]
    pub fn record(&mut self, person: &Person) {
        if person.is_alive() {
            self.live_count += 1;
            self.infected_count += person.is_infected() as u32;
            self.isolation_count += person.is_in_isolation() as u32;
            self.immune_count += person.is_immune() as u32;
        } else {
            self.dead_count += 1;
        }
    }

    /// Sum of two partial counts.
    pub fn merge(self, other: WorldStat) -> WorldStat {
        WorldStat {
            live_count:      self.live_count + other.live_count,
            infected_count:  self.infected_count + other.infected_count,
            dead_count:      self.dead_count + other.dead_count,
            isolation_count: self.isolation_count + other.isolation_count,
            immune_count:    self.immune_count + other.immune_count,
        }
    }

    /// Total agents counted.
    #[inline]
    pub fn population(&self) -> u32 {
        self.live_count + self.dead_count
    }
}

/// What happened during one call to
/// [`World::advance_one_day`][crate::World::advance_one_day].
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct DayOutcome {
    /// The day that was processed.
    pub day: u32,
    /// Alive and infected agents before the pass.
    pub infected_at_start: u32,
    /// `infected_at_start > collapse_threshold`.
    pub collapsed: bool,
    /// Death probability applied to every roll of the pass.
    pub death_probability: f32,
    pub recovered: u32,
    pub died: u32,
    /// Agents whose symptomatic flag was set by this pass.
    pub became_symptomatic: u32,
    /// Transmission attempts made (immune targets included).
    pub contacts: u64,
    /// Targets whose infected flag was set by this pass.
    pub new_infections: u32,
}

/// Result of [`World::run`][crate::World::run].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct RunSummary {
    /// Number of days advanced.
    pub days: u32,
    /// Snapshot at the day the loop stopped.
    pub final_stat: WorldStat,
    /// `true` if the loop stopped because nobody was infected any more,
    /// `false` if it hit the day limit.
    pub burned_out: bool,
}
