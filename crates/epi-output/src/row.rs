//! Plain data row types written by output backends.

use epi_sim::WorldStat;

/// Population counts at the start of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayStatsRow {
    pub day:             u32,
    pub live_count:      u32,
    pub infected_count:  u32,
    pub dead_count:      u32,
    pub isolation_count: u32,
    pub immune_count:    u32,
}

impl DayStatsRow {
    pub const HEADER: [&'static str; 6] = [
        "day",
        "live_count",
        "infected_count",
        "dead_count",
        "isolation_count",
        "immune_count",
    ];

    pub fn new(day: u32, stat: &WorldStat) -> Self {
        Self {
            day,
            live_count:      stat.live_count,
            infected_count:  stat.infected_count,
            dead_count:      stat.dead_count,
            isolation_count: stat.isolation_count,
            immune_count:    stat.immune_count,
        }
    }
}
