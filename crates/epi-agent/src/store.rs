//! Dense population storage.
//!
//! A `Population` is created once, never resized and never reordered; an
//! agent's index is its identity for the whole run.  Every later operation
//! mutates entries in place.

use std::ops::{Index, IndexMut};

use epi_core::AgentId;

use crate::Person;

/// Fixed-length sequence of [`Person`] records indexed by [`AgentId`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Population {
    people: Vec<Person>,
}

impl Population {
    /// Wrap an existing vector.  Intended for tests and tooling; simulations
    /// should go through [`PopulationBuilder`](crate::PopulationBuilder).
    pub fn from_people(people: Vec<Person>) -> Self {
        Self { people }
    }

    /// Number of agents.
    #[inline]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<&Person> {
        self.people.get(agent.index())
    }

    /// Read-only view of every record, in index order.
    #[inline]
    pub fn as_slice(&self) -> &[Person] {
        &self.people
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.people.iter()
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.people.len() as u32).map(AgentId)
    }

    /// Number of agents that are alive and infected.
    pub fn active_cases(&self) -> u32 {
        self.people.iter().filter(|p| p.is_active_case()).count() as u32
    }
}

impl Index<AgentId> for Population {
    type Output = Person;
    #[inline]
    fn index(&self, agent: AgentId) -> &Person {
        &self.people[agent.index()]
    }
}

impl IndexMut<AgentId> for Population {
    #[inline]
    fn index_mut(&mut self, agent: AgentId) -> &mut Person {
        &mut self.people[agent.index()]
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;
    fn into_iter(self) -> Self::IntoIter {
        self.people.iter()
    }
}
