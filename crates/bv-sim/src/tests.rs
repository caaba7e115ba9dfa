//! Unit tests for bv-sim.

#[cfg(test)]
mod helpers {
    use bv_core::{SimRng, Vec2};
    use bv_light::{LightField, LightSource};
    use bv_scenario::{generate_lights, generate_vehicles};
    use bv_vehicle::{Behavior, Vehicle};

    use crate::Flock;

    pub fn vehicle(x: f64, y: f64, heading: f64, speed: f64, behavior: Behavior) -> Vehicle {
        Vehicle::new(Vec2::new(x, y), heading, speed, behavior)
    }

    /// A dense seeded world with leaders mixed in.
    pub fn random_world(seed: u64, lights: usize, vehicles: usize) -> (LightField, Vec<Vehicle>) {
        let mut rng = SimRng::new(seed);
        let field = LightField::new(generate_lights(lights, &mut rng));
        let mut population = generate_vehicles(vehicles, &mut rng);
        population.push(vehicle(0.0, 0.0, 0.0, 1.0, Behavior::LeaderCw));
        population.push(vehicle(3.0, 3.0, 1.0, 2.0, Behavior::LeaderCcw));
        (field, population)
    }

    pub fn single_light_flock(vehicles: Vec<Vehicle>) -> Flock {
        let field = LightField::new(vec![LightSource::new(Vec2::new(5.0, 0.0), 2.0)]);
        Flock::new(field, vehicles)
    }

    pub fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }
}

// ── Generations ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod generations {
    use bv_core::Vec2;
    use bv_vehicle::Vehicle;

    use crate::Generations;

    #[test]
    fn split_reads_current_and_writes_other() {
        let mut g = Generations::new(vec![Vehicle::follower_at(Vec2::ZERO)]);
        {
            let (current, next) = g.split();
            assert_eq!(current[0].position(), Vec2::ZERO);
            next[0] = Vehicle::follower_at(Vec2::new(1.0, 0.0));
        }
        assert_eq!(g.current()[0].position(), Vec2::ZERO);
        g.flip();
        assert_eq!(g.side(), 1);
        assert_eq!(g.current()[0].position(), Vec2::new(1.0, 0.0));
        g.flip();
        assert_eq!(g.side(), 0);
    }

    #[test]
    fn empty_generations() {
        let mut g = Generations::new(Vec::new());
        assert!(g.is_empty());
        let (current, next) = g.split();
        assert!(current.is_empty() && next.is_empty());
    }
}

// ── Neighbour index ───────────────────────────────────────────────────────────

#[cfg(test)]
mod neighbors {
    use bv_core::Vec2;
    use bv_vehicle::Vehicle;

    use crate::NeighborIndex;

    #[test]
    fn candidates_are_sorted_and_within_radius() {
        let vehicles: Vec<Vehicle> = [30.0, 0.0, 19.0, -20.0, 5.0, 21.0]
            .iter()
            .map(|&x| Vehicle::follower_at(Vec2::new(x, 0.0)))
            .collect();
        let index = NeighborIndex::build(&vehicles);
        assert_eq!(index.len(), 6);
        assert_eq!(index.candidates(Vec2::ZERO, 20.0), vec![1, 2, 3, 4]);
    }

    #[test]
    fn empty_index_has_no_candidates() {
        let index = NeighborIndex::build(&[]);
        assert!(index.is_empty());
        assert!(index.candidates(Vec2::ZERO, 20.0).is_empty());
    }
}

// ── Flock stepping ────────────────────────────────────────────────────────────

#[cfg(test)]
mod flock {
    use std::f64::consts::PI;

    use bv_core::{Vec2, VehicleId};
    use bv_light::LightField;
    use bv_scenario::ScenarioBuilder;
    use bv_vehicle::Behavior;

    use super::helpers::{close, random_world, single_light_flock, vehicle};
    use crate::{Flock, NeighborSearch};

    #[test]
    fn empty_flock_steps_without_effect() {
        let mut flock = Flock::new(LightField::empty(), Vec::new());
        flock.step(0.01);
        assert!(flock.is_empty());
    }

    #[test]
    fn step_publishes_next_generation() {
        let mut flock = single_light_flock(vec![vehicle(0.0, 0.0, 0.0, 1.0, Behavior::LeaderCw)]);
        flock.step(0.5);
        let v = flock.vehicle(VehicleId(0)).unwrap();
        assert!(close(v.position().x, 0.5));
        assert!(close(v.speed(), 1.0));
    }

    #[test]
    fn two_followers_repel() {
        let mut flock = Flock::new(
            LightField::empty(),
            vec![
                vehicle(0.0, 0.0, 0.0, 0.0, Behavior::Follower),
                vehicle(1.0, 0.0, 0.0, 0.0, Behavior::Follower),
            ],
        );
        flock.step(0.1);
        let a = flock.vehicles()[0];
        let b = flock.vehicles()[1];
        assert!(close(a.speed(), 0.875));
        assert!(close(b.speed(), 0.875));
        assert!(close(a.heading(), PI));
        assert!(close(b.heading(), 0.0));
        assert!(close(a.position().x, -0.0875));
        assert!(close(b.position().x, 1.0875));
    }

    #[test]
    fn update_order_does_not_matter() {
        let (field, vehicles) = random_world(7, 3, 30);
        let mut reversed_input = vehicles.clone();
        reversed_input.reverse();

        let mut forward = Flock::new(field.clone(), vehicles);
        let mut reversed = Flock::new(field, reversed_input);
        for _ in 0..5 {
            forward.step(0.01);
            reversed.step(0.01);
        }

        let n = forward.len();
        for (i, a) in forward.vehicles().iter().enumerate() {
            let b = &reversed.vehicles()[n - 1 - i];
            assert!((a.position() - b.position()).length() < 1e-9);
            assert!((a.speed() - b.speed()).abs() < 1e-9);
        }
    }

    #[test]
    fn indexed_search_matches_linear_scan_exactly() {
        let (field, vehicles) = random_world(12345, 4, 60);
        let mut linear = Flock::new(field.clone(), vehicles.clone()).with_search(NeighborSearch::Linear);
        let mut indexed = Flock::new(field, vehicles).with_search(NeighborSearch::Indexed);
        for _ in 0..20 {
            linear.step(0.01);
            indexed.step(0.01);
        }
        assert_eq!(linear.vehicles(), indexed.vehicles());
    }

    #[test]
    fn far_groups_do_not_interact() {
        let near = vec![
            vehicle(0.0, 0.0, 0.0, 0.0, Behavior::Follower),
            vehicle(2.0, 0.0, 0.0, 0.0, Behavior::Follower),
        ];
        let mut alone = Flock::new(LightField::empty(), near.clone());
        let mut with_far = near;
        with_far.push(vehicle(500.0, 500.0, 0.0, 1.0, Behavior::LeaderCw));
        let mut crowded = Flock::new(LightField::empty(), with_far);

        alone.step(0.05);
        crowded.step(0.05);
        assert_eq!(alone.vehicles()[..], crowded.vehicles()[..2]);
    }

    #[test]
    fn edits_between_steps_are_seen() {
        let mut flock = single_light_flock(vec![vehicle(0.0, 0.0, 0.0, 0.0, Behavior::LeaderCw)]);
        flock.vehicle_mut(VehicleId(0)).unwrap().set_speed(2.0);
        flock.step(1.0);
        assert!(close(flock.vehicles()[0].position().x, 2.0));
        assert_eq!(flock.lights().len(), 1);
    }

    #[test]
    fn from_scenario_keeps_slot_order() {
        let scenario = ScenarioBuilder::new()
            .vehicle_record("1 2 0 0 master_ccw")
            .random_vehicles(3)
            .build()
            .unwrap();
        let flock = Flock::from(scenario);
        assert_eq!(flock.len(), 4);
        let (id, first) = flock.iter().next().unwrap();
        assert_eq!(id, VehicleId(0));
        assert_eq!(first.position(), Vec2::new(1.0, 2.0));
        assert_eq!(first.behavior(), Behavior::LeaderCcw);
    }
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scheduler {
    use std::time::Duration;

    use bv_core::{BvError, SimTime, Tick, TimingConfig};
    use bv_light::LightField;
    use bv_vehicle::Behavior;

    use super::helpers::{close, vehicle};
    use crate::{
        Flock, FlockObserver, ManualClock, NoopObserver, SchedulerBuilder, SimError, StopToken,
    };

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn leader_flock() -> Flock {
        Flock::new(
            LightField::empty(),
            vec![vehicle(0.0, 0.0, 0.0, 1.0, Behavior::LeaderCw)],
        )
    }

    #[derive(Default)]
    struct Recorder {
        starts:  Vec<Tick>,
        ends:    Vec<(Tick, Duration)>,
        renders: Vec<(Tick, f64, f64)>,
        stops:   Vec<SimTime>,
    }

    impl FlockObserver for Recorder {
        fn on_tick_start(&mut self, tick: Tick) {
            self.starts.push(tick);
        }

        fn on_tick_end(&mut self, tick: Tick, step: Duration) {
            self.ends.push((tick, step));
        }

        fn on_render(&mut self, tick: Tick, elapsed: f64, flock: &Flock) {
            self.renders.push((tick, elapsed, flock.vehicles()[0].position().x));
        }

        fn on_stop(&mut self, time: SimTime) {
            self.stops.push(time);
        }
    }

    #[test]
    fn rejects_zero_max_step() {
        let timing = TimingConfig { max_step: Duration::ZERO, ..TimingConfig::default() };
        let result = SchedulerBuilder::new(leader_flock(), ManualClock::new())
            .timing(timing)
            .build();
        assert!(matches!(result, Err(SimError::Config(BvError::Config(_)))));
    }

    #[test]
    fn step_is_real_time_since_last_tick() {
        let clock = ManualClock::new();
        let mut s = SchedulerBuilder::new(leader_flock(), clock.clone()).build().unwrap();

        let first = s.tick(&mut NoopObserver);
        assert_eq!(first.step, Duration::ZERO);
        assert!(!first.rendered);

        clock.advance(ms(4));
        let second = s.tick(&mut NoopObserver);
        assert_eq!(second.step, ms(4));
        assert!(close(s.flock().vehicles()[0].position().x, 0.004));
    }

    #[test]
    fn long_gaps_are_clamped() {
        let clock = ManualClock::new();
        let mut s = SchedulerBuilder::new(leader_flock(), clock.clone()).build().unwrap();

        clock.advance(ms(250));
        let report = s.tick(&mut NoopObserver);
        assert_eq!(report.real_elapsed, ms(250));
        assert_eq!(report.step, ms(10));
        assert!(close(s.flock().vehicles()[0].position().x, 0.01));
        assert_eq!(s.time().simulated, ms(10));
    }

    #[test]
    fn render_requires_strictly_more_than_interval() {
        let clock = ManualClock::new();
        let mut s = SchedulerBuilder::new(leader_flock(), clock.clone()).build().unwrap();

        clock.advance(ms(15));
        assert!(!s.tick(&mut NoopObserver).rendered);

        clock.advance(Duration::from_nanos(1));
        assert!(s.tick(&mut NoopObserver).rendered);
        assert_eq!(s.renders(), 1);
    }

    #[test]
    fn render_receives_simulated_time_since_previous_render() {
        let clock = ManualClock::new();
        let mut rec = Recorder::default();
        let mut s = SchedulerBuilder::new(leader_flock(), clock.clone()).build().unwrap();

        clock.advance(ms(4));
        s.tick(&mut rec);
        clock.advance(ms(30));
        s.tick(&mut rec);

        assert_eq!(rec.renders.len(), 1);
        let (tick, elapsed, x) = rec.renders[0];
        assert_eq!(tick, Tick(1));
        assert!(close(elapsed, 0.014));
        assert!(close(x, 0.014));

        // Accumulator was reset by the hand-off.
        clock.advance(ms(8));
        s.tick(&mut rec);
        clock.advance(ms(8));
        s.tick(&mut rec);
        assert_eq!(rec.renders.len(), 2);
        assert!(close(rec.renders[1].1, 0.016));
    }

    #[test]
    fn hooks_fire_in_order() {
        let clock = ManualClock::new();
        let mut rec = Recorder::default();
        let mut s = SchedulerBuilder::new(leader_flock(), clock.clone()).build().unwrap();

        for _ in 0..3 {
            clock.advance(ms(5));
            s.tick(&mut rec);
        }
        assert_eq!(rec.starts, vec![Tick(0), Tick(1), Tick(2)]);
        assert_eq!(rec.ends, vec![(Tick(0), ms(5)), (Tick(1), ms(5)), (Tick(2), ms(5))]);
        assert_eq!(s.current_tick(), Tick(3));
        assert!(rec.stops.is_empty());
    }

    #[test]
    fn run_ticks_accumulates_time() {
        let mut s = SchedulerBuilder::new(leader_flock(), ManualClock::new()).build().unwrap();
        let time = s.run_ticks(7, &mut NoopObserver);
        assert_eq!(time.tick, Tick(7));
        assert_eq!(time.simulated, Duration::ZERO);
    }

    /// Advances the shared clock each tick and requests a stop after a fixed
    /// number of renders.
    struct Driver {
        clock:   ManualClock,
        stop:    StopToken,
        renders: u64,
        limit:   u64,
        stopped: Option<SimTime>,
    }

    impl FlockObserver for Driver {
        fn on_tick_start(&mut self, _tick: Tick) {
            self.clock.advance(ms(6));
        }

        fn on_render(&mut self, _tick: Tick, _elapsed: f64, _flock: &Flock) {
            self.renders += 1;
            if self.renders == self.limit {
                self.stop.stop();
            }
        }

        fn on_stop(&mut self, time: SimTime) {
            assert!(self.stopped.is_none());
            self.stopped = Some(time);
        }
    }

    #[test]
    fn run_stops_between_ticks() {
        let clock = ManualClock::new();
        let stop = StopToken::new();
        let mut driver = Driver {
            clock:   clock.clone(),
            stop:    stop.clone(),
            renders: 0,
            limit:   3,
            stopped: None,
        };
        let mut s = SchedulerBuilder::new(leader_flock(), clock).build().unwrap();

        let time = s.run(&mut driver, &stop);

        // 6 ms per tick renders on every third tick (18 ms > 15 ms).
        assert_eq!(time.tick, Tick(9));
        assert_eq!(driver.stopped, Some(time));
        assert_eq!(s.renders(), 3);
        assert_eq!(time.simulated, ms(54));
    }

    #[test]
    fn stopped_token_runs_no_ticks() {
        let stop = StopToken::new();
        stop.stop();
        let mut s = SchedulerBuilder::new(leader_flock(), ManualClock::new()).build().unwrap();
        let mut rec = Recorder::default();
        let time = s.run(&mut rec, &stop);
        assert_eq!(time.tick, Tick::ZERO);
        assert!(rec.starts.is_empty());
        assert_eq!(rec.stops.len(), 1);
    }

    #[test]
    fn tuple_observer_fans_out() {
        let clock = ManualClock::new();
        let mut pair = (Recorder::default(), Recorder::default());
        let mut s = SchedulerBuilder::new(leader_flock(), clock.clone()).build().unwrap();
        clock.advance(ms(20));
        s.tick(&mut pair);
        assert_eq!(pair.0.renders.len(), 1);
        assert_eq!(pair.1.renders.len(), 1);
    }
}
