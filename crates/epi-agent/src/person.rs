//! The per-person record: a status bit set plus a days-infected counter.
//!
//! Flags combine independently (an agent can be symptomatic and isolated, or
//! neither), so they live in one byte rather than a state enum.  A `Person`
//! is four bytes, so ten million agents fit in 40 MB.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

// ── Status ────────────────────────────────────────────────────────────────────

/// Set of status flags carried by a [`Person`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Status(u8);

impl Status {
    pub const EMPTY:               Status = Status(0);
    pub const ALIVE:               Status = Status(1 << 0);
    pub const INFECTED:            Status = Status(1 << 1);
    pub const IN_ISOLATION:        Status = Status(1 << 2);
    pub const SYMPTOMATIC:         Status = Status(1 << 3);
    /// Assigned at creation, never changes.
    pub const ALWAYS_ASYMPTOMATIC: Status = Status(1 << 4);
    /// Assigned at creation, never changes.
    pub const ISOLATION_VIOLATOR:  Status = Status(1 << 5);
    /// Once set, never cleared.
    pub const IMMUNE:              Status = Status(1 << 6);

    const NAMES: [(Status, &'static str); 7] = [
        (Status::ALIVE, "alive"),
        (Status::INFECTED, "infected"),
        (Status::IN_ISOLATION, "in_isolation"),
        (Status::SYMPTOMATIC, "symptomatic"),
        (Status::ALWAYS_ASYMPTOMATIC, "always_asymptomatic"),
        (Status::ISOLATION_VIOLATOR, "isolation_violator"),
        (Status::IMMUNE, "immune"),
    ];

    /// Raw bit pattern.
    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    /// `true` if every flag in `other` is set in `self`.
    #[inline]
    pub fn contains(self, other: Status) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn insert(&mut self, other: Status) {
        self.0 |= other.0;
    }

    #[inline]
    pub fn remove(&mut self, other: Status) {
        self.0 &= !other.0;
    }
}

impl BitOr for Status {
    type Output = Status;
    #[inline]
    fn bitor(self, rhs: Status) -> Status {
        Status(self.0 | rhs.0)
    }
}

impl BitOrAssign for Status {
    #[inline]
    fn bitor_assign(&mut self, rhs: Status) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for (flag, name) in Status::NAMES {
            if self.contains(flag) {
                set.entry(&format_args!("{name}"));
            }
        }
        set.finish()
    }
}

// ── Person ────────────────────────────────────────────────────────────────────

/// One simulated individual.
///
/// `Default` is a record with no flags set, i.e. *not alive*; use
/// [`Person::healthy`] for a fresh living agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Person {
    status:        Status,
    days_infected: u16,
}

impl Person {
    /// Alive, susceptible, with the given fixed traits.
    pub fn healthy(always_asymptomatic: bool, isolation_violator: bool) -> Self {
        let mut status = Status::ALIVE;
        if always_asymptomatic {
            status |= Status::ALWAYS_ASYMPTOMATIC;
        }
        if isolation_violator {
            status |= Status::ISOLATION_VIOLATOR;
        }
        Self { status, days_infected: 0 }
    }

    /// Build a record from raw parts.  Intended for tests and tooling.
    pub fn from_parts(status: Status, days_infected: u16) -> Self {
        Self { status, days_infected }
    }

    #[inline]
    pub fn days_infected(&self) -> u16 {
        self.days_infected
    }

    // ── Predicates ────────────────────────────────────────────────────────

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.status.contains(Status::ALIVE)
    }

    #[inline]
    pub fn is_infected(&self) -> bool {
        self.status.contains(Status::INFECTED)
    }

    #[inline]
    pub fn is_in_isolation(&self) -> bool {
        self.status.contains(Status::IN_ISOLATION)
    }

    #[inline]
    pub fn is_symptomatic(&self) -> bool {
        self.status.contains(Status::SYMPTOMATIC)
    }

    #[inline]
    pub fn is_always_asymptomatic(&self) -> bool {
        self.status.contains(Status::ALWAYS_ASYMPTOMATIC)
    }

    #[inline]
    pub fn is_isolation_violator(&self) -> bool {
        self.status.contains(Status::ISOLATION_VIOLATOR)
    }

    #[inline]
    pub fn is_immune(&self) -> bool {
        self.status.contains(Status::IMMUNE)
    }

    /// Alive and infected: the only agents the day-advance pass processes.
    #[inline]
    pub fn is_active_case(&self) -> bool {
        self.status.contains(Status::ALIVE | Status::INFECTED)
    }

    // ── Transitions ───────────────────────────────────────────────────────

    #[inline]
    pub fn infect(&mut self) {
        self.status.insert(Status::INFECTED);
    }

    #[inline]
    pub fn enter_isolation(&mut self) {
        self.status.insert(Status::IN_ISOLATION);
    }

    #[inline]
    pub fn mark_symptomatic(&mut self) {
        self.status.insert(Status::SYMPTOMATIC);
    }

    /// Clear `INFECTED` and `IN_ISOLATION`, set `IMMUNE`.
    ///
    /// `SYMPTOMATIC` is left as residue; immune agents never act as a source
    /// again, so it has no further effect.
    #[inline]
    pub fn recover(&mut self) {
        self.status.remove(Status::INFECTED | Status::IN_ISOLATION);
        self.status.insert(Status::IMMUNE);
    }

    /// Terminal.  Other flags are kept as they were at the time of death.
    #[inline]
    pub fn die(&mut self) {
        self.status.remove(Status::ALIVE);
    }

    /// Count one more day of infection and return the new total.
    #[inline]
    pub fn advance_infection_day(&mut self) -> u16 {
        self.days_infected = self.days_infected.saturating_add(1);
        self.days_infected
    }
}
