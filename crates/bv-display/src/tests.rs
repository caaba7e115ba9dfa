//! Unit tests for bv-display.

#[cfg(test)]
mod helpers {
    use bv_core::Vec2;
    use bv_light::{LightField, LightSource};
    use bv_sim::Flock;
    use bv_vehicle::{Behavior, Vehicle};

    pub fn flock() -> Flock {
        let lights = LightField::new(vec![
            LightSource::new(Vec2::new(0.0, 0.0), 3.0),
            LightSource::new(Vec2::new(10.0, 0.0), -2.0),
        ]);
        let vehicles = vec![
            Vehicle::new(Vec2::new(1.0, 1.0), -std::f64::consts::FRAC_PI_2, 1.0, Behavior::LeaderCw),
            Vehicle::new(Vec2::new(-3.0, 2.0), 0.0, 0.0, Behavior::Follower),
        ];
        Flock::new(lights, vehicles)
    }

    pub fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }
}

// ── Lights ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod light {
    use bv_core::Vec2;
    use bv_light::LightSource;

    use super::helpers::close;
    use crate::light::INITIAL_PHASES;
    use crate::{Halo, LightDisplay, UnitCircle, logistic};

    #[test]
    fn logistic_is_centered_at_half() {
        assert_eq!(logistic(0.0), 0.5);
        assert!(close(logistic(2.0) + logistic(-2.0), 1.0));
        assert!(logistic(50.0) > 0.999);
    }

    #[test]
    fn color_tracks_sign_of_intensity() {
        let warm = LightDisplay::from_source(&LightSource::new(Vec2::ZERO, 3.0));
        assert!(warm.color[0] > warm.color[2]);
        assert_eq!(warm.color[1], 0.2);
        assert_eq!(warm.color[3], 0.2);
        assert!(close(warm.color[0], logistic(3.0)));

        let cold = LightDisplay::from_source(&LightSource::new(Vec2::ZERO, -3.0));
        assert!(cold.color[2] > cold.color[0]);
    }

    #[test]
    fn starts_at_initial_phases() {
        let light = LightDisplay::from_source(&LightSource::new(Vec2::ZERO, 1.0));
        assert_eq!(light.phases, INITIAL_PHASES);
    }

    #[test]
    fn phases_wrap_to_zero_past_one() {
        let mut light = LightDisplay::from_source(&LightSource::new(Vec2::ZERO, 1.0));
        light.advance(0.4);
        assert!(close(light.phases[0], 0.4));
        assert!(close(light.phases[1], 0.73));
        assert_eq!(light.phases[2], 0.0);
    }

    #[test]
    fn phase_of_exactly_one_is_kept() {
        let mut light = LightDisplay::from_source(&LightSource::new(Vec2::ZERO, 1.0));
        light.advance(1.0);
        assert_eq!(light.phases[0], 1.0);
    }

    #[test]
    fn positive_halos_expand_and_fade() {
        let mut light = LightDisplay::from_source(&LightSource::new(Vec2::ZERO, 2.0));
        light.phases = [0.0, 0.5, 1.0];
        let [a, b, c] = light.halos();
        assert_eq!(a, Halo { radius: 0.0, alpha: 1.0 });
        assert_eq!(b, Halo { radius: 0.25, alpha: 0.5 });
        assert_eq!(c, Halo { radius: 0.5, alpha: 0.0 });
    }

    #[test]
    fn negative_halos_contract_and_appear() {
        let mut light = LightDisplay::from_source(&LightSource::new(Vec2::ZERO, -2.0));
        light.phases = [0.0, 0.5, 1.0];
        let [a, b, c] = light.halos();
        assert_eq!(a, Halo { radius: 0.5, alpha: 0.0 });
        assert_eq!(b, Halo { radius: 0.25, alpha: 0.5 });
        assert_eq!(c, Halo { radius: 0.0, alpha: 1.0 });
    }

    #[test]
    fn outline_is_closed_circle() {
        let circle = UnitCircle::default();
        assert_eq!(circle.segments(), 60);
        let center = Vec2::new(2.0, -1.0);
        let outline = circle.outline(center, Halo { radius: 0.5, alpha: 1.0 });
        assert_eq!(outline.len(), 61);
        assert_eq!(outline[0], outline[60]);
        assert!(outline.iter().all(|p| close((*p - center).length(), 0.5)));
    }

    #[test]
    fn sync_keeps_phases_and_recolors() {
        let mut light = LightDisplay::from_source(&LightSource::new(Vec2::ZERO, 2.0));
        light.advance(0.1);
        let phases = light.phases;
        light.sync(&LightSource::new(Vec2::new(1.0, 1.0), -2.0));
        assert_eq!(light.phases, phases);
        assert_eq!(light.position, Vec2::new(1.0, 1.0));
        assert!(light.color[2] > light.color[0]);
    }
}

// ── Vehicles ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod vehicle {
    use std::f64::consts::{FRAC_PI_2, PI};

    use bv_core::{Vec2, VehicleId};
    use bv_vehicle::{Behavior, Vehicle};

    use super::helpers::close;
    use crate::VehicleDisplay;

    #[test]
    fn display_heading_is_wrapped() {
        let v = Vehicle::new(Vec2::ZERO, -FRAC_PI_2, 1.0, Behavior::Follower);
        let d = VehicleDisplay::new(VehicleId(0), &v);
        assert_eq!(d.heading, -FRAC_PI_2);
        assert!(close(d.display_heading(), 3.0 * FRAC_PI_2));
        assert!(close(d.display_heading_degrees(), 270.0));
    }

    #[test]
    fn large_headings_wrap_too() {
        let v = Vehicle::new(Vec2::ZERO, 5.0 * PI, 1.0, Behavior::Follower);
        let d = VehicleDisplay::new(VehicleId(3), &v);
        assert!(close(d.display_heading(), PI));
    }
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod snapshot {
    use std::time::Duration;

    use bv_core::{Tick, Vec2, VehicleId};
    use bv_sim::{FlockObserver, ManualClock, SchedulerBuilder};

    use super::helpers::{close, flock};
    use crate::DisplaySnapshot;
    use crate::light::INITIAL_PHASES;

    #[test]
    fn capture_projects_everything() {
        let f = flock();
        let snap = DisplaySnapshot::capture(&f);
        assert_eq!(snap.lights.len(), 2);
        assert_eq!(snap.vehicles.len(), 2);
        assert_eq!(snap.lights[1].intensity, -2.0);
        assert!(snap.lights.iter().all(|l| l.phases == INITIAL_PHASES));
        assert_eq!(snap.vehicle(VehicleId(1)).unwrap().position, Vec2::new(-3.0, 2.0));
        assert_eq!(snap.frames, 0);
    }

    #[test]
    fn advance_copies_poses_and_pulses() {
        let mut f = flock();
        let mut snap = DisplaySnapshot::capture(&f);
        f.step(0.5);
        snap.advance_display(0.5, &f);

        let leader = snap.vehicle(VehicleId(0)).unwrap();
        assert_eq!(leader.position, f.vehicles()[0].position());
        assert!(close(leader.position.y, 0.5));
        assert!(close(snap.lights[0].phases[0], 0.5));
        assert!(close(snap.lights[0].phases[1], 0.83));
        assert_eq!(snap.lights[0].phases[2], 0.0);
        assert!(close(snap.shown_secs, 0.5));
    }

    #[test]
    fn on_render_counts_frames() {
        let f = flock();
        let mut snap = DisplaySnapshot::default();
        snap.on_render(Tick(4), 0.01, &f);
        snap.on_render(Tick(9), 0.02, &f);
        assert_eq!(snap.frames, 2);
        assert_eq!(snap.tick, Tick(9));
        assert_eq!(snap.lights.len(), 2);
        // The first hand-off both captures and advances.
        assert!(close(snap.lights[0].phases[0], 0.03));
    }

    #[test]
    fn driven_by_scheduler() {
        let clock = ManualClock::new();
        let mut snap = DisplaySnapshot::capture(&flock());
        let mut s = SchedulerBuilder::new(flock(), clock.clone()).build().unwrap();

        for _ in 0..4 {
            clock.advance(Duration::from_millis(10));
            s.tick(&mut snap);
        }

        assert_eq!(snap.frames, 2);
        assert!(close(snap.shown_secs, 0.04));
        assert!(close(snap.lights[0].phases[0], 0.04));
        assert_eq!(snap.vehicles[0].position, s.flock().vehicles()[0].position());
    }
}
