//! Unit tests for sir-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn try_from_usize() {
        assert_eq!(AgentId::try_from(42usize).unwrap(), AgentId(42));
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
    }

    #[test]
    fn try_from_rejects_ids_beyond_u32() {
        assert!(AgentId::try_from(u32::MAX as usize).is_ok());
        #[cfg(target_pointer_width = "64")]
        assert!(AgentId::try_from(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod geom {
    use proptest::prelude::*;

    use crate::{Vec2, torus_delta, torus_distance, wrap_coord, wrap_point};

    /// Reference implementation: minimum over all nine toroidal images.
    fn nine_image_distance(a: Vec2, b: Vec2) -> f64 {
        let mut best = f64::INFINITY;
        for dx in [-1.0, 0.0, 1.0] {
            for dy in [-1.0, 0.0, 1.0] {
                let image = Vec2::new(b.x + dx, b.y + dy);
                best = best.min((image - a).norm());
            }
        }
        best
    }

    #[test]
    fn wrap_crosses_right_edge() {
        // (0.999, 0.5) moved by (0.01, 0) * 1 lands at (0.009, 0.5).
        let p = wrap_point(Vec2::new(0.999, 0.5) + Vec2::new(0.01, 0.0) * 1.0);
        assert!((p.x - 0.009).abs() < 1e-12, "got {p}");
        assert_eq!(p.y, 0.5);
    }

    #[test]
    fn wrap_negative() {
        assert!((wrap_coord(-0.25) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn wrap_tiny_negative_stays_half_open() {
        let w = wrap_coord(-1e-18);
        assert!((0.0..1.0).contains(&w), "got {w}");
    }

    #[test]
    fn delta_takes_short_way_round() {
        let a = Vec2::new(0.95, 0.5);
        let b = Vec2::new(0.05, 0.5);
        let d = torus_delta(a, b);
        assert!((d.x - 0.1).abs() < 1e-12, "got {d}");
        assert!((torus_distance(a, b) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn corner_to_corner() {
        let a = Vec2::new(0.01, 0.01);
        let b = Vec2::new(0.99, 0.99);
        let expected = (2.0_f64 * 0.02 * 0.02).sqrt();
        assert!((torus_distance(a, b) - expected).abs() < 1e-12);
    }

    #[test]
    fn from_angle_has_requested_magnitude() {
        let v = Vec2::from_angle(1.234, 0.002);
        assert!((v.norm() - 0.002).abs() < 1e-15);
    }

    proptest! {
        #[test]
        fn wrapped_points_in_bounds(x in -10.0f64..10.0, y in -10.0f64..10.0) {
            let p = wrap_point(Vec2::new(x, y));
            prop_assert!((0.0..1.0).contains(&p.x));
            prop_assert!((0.0..1.0).contains(&p.y));
        }

        #[test]
        fn distance_matches_nine_images(
            ax in 0.0f64..1.0, ay in 0.0f64..1.0,
            bx in 0.0f64..1.0, by in 0.0f64..1.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert!((torus_distance(a, b) - nine_image_distance(a, b)).abs() < 1e-12);
        }

        #[test]
        fn distance_is_symmetric(
            ax in 0.0f64..1.0, ay in 0.0f64..1.0,
            bx in 0.0f64..1.0, by in 0.0f64..1.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert!((torus_distance(a, b) - torus_distance(b, a)).abs() < 1e-12);
        }
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn clock_elapsed_scales_with_dt() {
        let mut clock = SimClock::new(0.5);
        assert_eq!(clock.elapsed(), 0.0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.elapsed(), 1.0);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(3).to_string(), "T3");
        let mut clock = SimClock::new(0.25);
        clock.advance();
        assert_eq!(clock.to_string(), "T1 (t = 0.250)");
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, SimConfig};

    fn field_of(err: CoreError) -> &'static str {
        match err {
            CoreError::InvalidConfig { field, .. } => field,
        }
    }

    #[test]
    fn default_is_valid() {
        SimConfig::default().validate().unwrap();
    }

    #[test]
    fn more_infected_than_agents_rejected() {
        let cfg = SimConfig { agent_count: 3, initial_infected: 4, ..SimConfig::default() };
        assert_eq!(field_of(cfg.validate().unwrap_err()), "initial_infected");
    }

    #[test]
    fn all_infected_allowed() {
        let cfg = SimConfig { agent_count: 3, initial_infected: 3, ..SimConfig::default() };
        cfg.validate().unwrap();
    }

    #[test]
    fn empty_population_rejected() {
        let cfg = SimConfig { agent_count: 0, initial_infected: 0, ..SimConfig::default() };
        assert_eq!(field_of(cfg.validate().unwrap_err()), "agent_count");
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn agent_count_must_fit_u32_ids() {
        let ok = SimConfig { agent_count: u32::MAX as usize, initial_infected: 0, ..SimConfig::default() };
        ok.validate().unwrap();
        let too_big = SimConfig { agent_count: u32::MAX as usize + 1, ..SimConfig::default() };
        assert_eq!(field_of(too_big.validate().unwrap_err()), "agent_count");
    }

    #[test]
    fn probabilities_outside_unit_interval_rejected() {
        let cases = [
            (SimConfig { death_rate: 1.5, ..SimConfig::default() }, "death_rate"),
            (SimConfig { reinfection_probability: -0.1, ..SimConfig::default() }, "reinfection_probability"),
            (SimConfig { isolated_fraction: f64::NAN, ..SimConfig::default() }, "isolated_fraction"),
        ];
        for (cfg, field) in cases {
            assert_eq!(field_of(cfg.validate().unwrap_err()), field);
        }
    }

    #[test]
    fn inverted_beta_range_rejected() {
        let cfg = SimConfig { beta_min: 0.9, beta_max: 0.3, ..SimConfig::default() };
        assert_eq!(field_of(cfg.validate().unwrap_err()), "beta_min");
    }

    #[test]
    fn zero_beta_rejected() {
        let cfg = SimConfig { beta_min: 0.0, ..SimConfig::default() };
        assert_eq!(field_of(cfg.validate().unwrap_err()), "beta_min");
    }

    #[test]
    fn non_positive_radius_and_dt_rejected() {
        let r = SimConfig { interaction_radius: 0.0, ..SimConfig::default() };
        assert_eq!(field_of(r.validate().unwrap_err()), "interaction_radius");
        let dt = SimConfig { dt: -1.0, ..SimConfig::default() };
        assert_eq!(field_of(dt.validate().unwrap_err()), "dt");
    }

    #[test]
    fn zero_speed_allowed() {
        SimConfig { speed: 0.0, ..SimConfig::default() }.validate().unwrap();
    }

    #[test]
    fn isolated_count_floors() {
        let cfg = SimConfig { agent_count: 10, isolated_fraction: 0.35, ..SimConfig::default() };
        assert_eq!(cfg.isolated_count(), 3);
    }

    #[test]
    fn error_message_names_field() {
        let cfg = SimConfig { dt: 0.0, ..SimConfig::default() };
        let msg = cfg.validate().unwrap_err().to_string();
        assert!(msg.contains("`dt`"), "got {msg}");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.uniform().to_bits(), b.uniform().to_bits());
        }
    }

    #[test]
    fn uniform_in_half_open_unit_interval() {
        let mut r = SimRng::new(1);
        for _ in 0..10_000 {
            let u = r.uniform();
            assert!((0.0..1.0).contains(&u));
        }
    }
}
