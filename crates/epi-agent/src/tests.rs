//! Unit tests for epi-agent.

#[cfg(test)]
mod person {
    use crate::{Person, Status};

    #[test]
    fn healthy_person_flags() {
        let p = Person::healthy(false, false);
        assert!(p.is_alive());
        assert!(!p.is_infected());
        assert!(!p.is_in_isolation());
        assert!(!p.is_symptomatic());
        assert!(!p.is_immune());
        assert_eq!(p.days_infected(), 0);

        let q = Person::healthy(true, true);
        assert!(q.is_always_asymptomatic());
        assert!(q.is_isolation_violator());
    }

    #[test]
    fn default_is_not_alive() {
        assert!(!Person::default().is_alive());
    }

    #[test]
    fn flags_combine_independently() {
        let mut p = Person::healthy(false, false);
        p.infect();
        p.mark_symptomatic();
        assert!(p.is_infected() && p.is_symptomatic() && !p.is_in_isolation());
        p.enter_isolation();
        assert!(p.is_infected() && p.is_symptomatic() && p.is_in_isolation());
        assert!(p.is_active_case());
    }

    #[test]
    fn recover_clears_infection_and_isolation() {
        let mut p = Person::healthy(false, false);
        p.infect();
        p.enter_isolation();
        p.mark_symptomatic();
        p.recover();
        assert!(!p.is_infected());
        assert!(!p.is_in_isolation());
        assert!(p.is_immune());
        assert!(p.is_alive());
        // Symptomatic residue is kept.
        assert!(p.is_symptomatic());
    }

    #[test]
    fn die_keeps_other_flags() {
        let mut p = Person::healthy(false, true);
        p.infect();
        p.die();
        assert!(!p.is_alive());
        assert!(p.is_infected());
        assert!(p.is_isolation_violator());
        assert!(!p.is_active_case());
    }

    #[test]
    fn infection_day_counter_saturates() {
        let mut p = Person::from_parts(Status::ALIVE | Status::INFECTED, u16::MAX - 1);
        assert_eq!(p.advance_infection_day(), u16::MAX);
        assert_eq!(p.advance_infection_day(), u16::MAX);
    }

    #[test]
    fn status_set_operations() {
        let mut s = Status::ALIVE | Status::INFECTED;
        assert!(s.contains(Status::ALIVE));
        assert!(s.contains(Status::ALIVE | Status::INFECTED));
        assert!(!s.contains(Status::IMMUNE));
        s.remove(Status::INFECTED);
        assert_eq!(s, Status::ALIVE);
        s.insert(Status::IMMUNE);
        assert_eq!(s.bits(), 0b100_0001);
        assert!(Status::EMPTY.contains(Status::EMPTY));
    }

    #[test]
    fn status_debug_lists_names() {
        let s = Status::ALIVE | Status::IMMUNE;
        assert_eq!(format!("{s:?}"), "{alive, immune}");
    }
}

#[cfg(test)]
mod population {
    use epi_core::{AgentId, DiseaseParameters, SimRng};

    use crate::{Person, Population, PopulationBuilder};

    #[test]
    fn index_and_mutate_in_place() {
        let mut pop = Population::from_people(vec![Person::healthy(false, false); 4]);
        pop[AgentId(2)].infect();
        assert!(pop[AgentId(2)].is_infected());
        assert_eq!(pop.active_cases(), 1);
        assert!(pop.get(AgentId(4)).is_none());
        assert_eq!(pop.agent_ids().collect::<Vec<_>>(), vec![AgentId(0), AgentId(1), AgentId(2), AgentId(3)]);
    }

    #[test]
    fn builder_allocates_all_alive() {
        let mut rng = SimRng::new(1);
        let pop = PopulationBuilder::new(1_000).build(&mut rng);
        assert_eq!(pop.len(), 1_000);
        assert!(pop.iter().all(|p| p.is_alive() && !p.is_infected() && !p.is_immune()));
        assert!(pop.iter().all(|p| !p.is_always_asymptomatic() && !p.is_isolation_violator()));
    }

    #[test]
    fn ratio_one_marks_everyone() {
        let mut rng = SimRng::new(1);
        let pop = PopulationBuilder::new(200)
            .always_asymptomatic_ratio(1.0)
            .isolation_violators_ratio(1.0)
            .build(&mut rng);
        assert!(pop.iter().all(|p| p.is_always_asymptomatic() && p.is_isolation_violator()));
    }

    #[test]
    fn ratio_roughly_respected() {
        let mut rng = SimRng::new(7);
        let pop = PopulationBuilder::new(20_000).always_asymptomatic_ratio(0.3).build(&mut rng);
        let share = pop.iter().filter(|p| p.is_always_asymptomatic()).count() as f64 / 20_000.0;
        assert!((share - 0.3).abs() < 0.02, "got {share}");
    }

    #[test]
    fn start_infected_draws_with_replacement() {
        let mut rng = SimRng::new(3);
        let pop = PopulationBuilder::new(10).start_infected(50).build(&mut rng);
        let infected = pop.active_cases();
        assert!(infected >= 1 && infected <= 10);
    }

    #[test]
    fn start_infected_never_exceeds_draws() {
        let mut rng = SimRng::new(3);
        let pop = PopulationBuilder::new(10_000).start_infected(100).build(&mut rng);
        let infected = pop.active_cases();
        assert!(infected <= 100 && infected > 90, "got {infected}");
    }

    #[test]
    fn same_seed_same_population() {
        let params = DiseaseParameters { population_count: 5_000, start_infected: 20, ..Default::default() };
        let a = PopulationBuilder::from_params(&params).build(&mut SimRng::new(99));
        let b = PopulationBuilder::from_params(&params).build(&mut SimRng::new(99));
        assert_eq!(a, b);
        let c = PopulationBuilder::from_params(&params).build(&mut SimRng::new(100));
        assert_ne!(a, c);
    }

    #[test]
    fn empty_population_with_infections_is_empty() {
        let mut rng = SimRng::new(0);
        let pop = PopulationBuilder::new(0).start_infected(5).build(&mut rng);
        assert!(pop.is_empty());
    }
}
