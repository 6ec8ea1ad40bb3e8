//! Unit tests for sir-physics.

use sir_agent::Agent;
use sir_core::{AgentId, Vec2};

fn ball(id: u32, pos: Vec2, vel: Vec2, mass: f64) -> Agent {
    Agent::mobile(AgentId(id), pos, vel, mass, 0.5)
}

#[cfg(test)]
mod motion_tests {
    use sir_agent::Agent;
    use sir_core::{AgentId, Vec2};

    use super::ball;
    use crate::{move_agent, move_all};

    #[test]
    fn wraps_across_right_edge() {
        let mut a = ball(0, Vec2::new(0.999, 0.5), Vec2::new(0.01, 0.0), 1.0);
        move_agent(&mut a, 1.0);
        assert!((a.pos.x - 0.009).abs() < 1e-12, "got {}", a.pos);
        assert_eq!(a.pos.y, 0.5);
    }

    #[test]
    fn wraps_across_bottom_edge() {
        let mut a = ball(0, Vec2::new(0.5, 0.001), Vec2::new(0.0, -0.002), 1.0);
        move_agent(&mut a, 1.0);
        assert!((a.pos.y - 0.999).abs() < 1e-12, "got {}", a.pos);
    }

    #[test]
    fn dt_scales_displacement() {
        let mut a = ball(0, Vec2::new(0.1, 0.1), Vec2::new(0.01, 0.02), 1.0);
        move_agent(&mut a, 0.5);
        assert!((a.pos.x - 0.105).abs() < 1e-12);
        assert!((a.pos.y - 0.11).abs() < 1e-12);
    }

    #[test]
    fn infinite_mass_never_moves() {
        let mut wall = Agent::isolated(AgentId(0), Vec2::new(0.3, 0.3), 0.5);
        // Even with a (corrupt) nonzero velocity the wall stays put.
        wall.vel = Vec2::new(0.1, 0.1);
        move_agent(&mut wall, 1.0);
        assert_eq!(wall.pos, Vec2::new(0.3, 0.3));
    }

    #[test]
    fn move_all_moves_everyone() {
        let mut agents = vec![
            ball(0, Vec2::new(0.1, 0.1), Vec2::new(0.1, 0.0), 1.0),
            ball(1, Vec2::new(0.2, 0.2), Vec2::new(0.0, 0.1), 1.0),
        ];
        move_all(&mut agents, 1.0);
        assert!((agents[0].pos.x - 0.2).abs() < 1e-12);
        assert!((agents[1].pos.y - 0.3).abs() < 1e-12);
    }
}

#[cfg(test)]
mod collision_tests {
    use proptest::prelude::*;
    use sir_agent::Agent;
    use sir_core::{AgentId, Vec2};

    use super::ball;
    use crate::{elastic_collision, kinetic_energy, momentum};

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).norm() < 1e-12
    }

    #[test]
    fn equal_masses_head_on_swap_velocities() {
        let mut a = ball(0, Vec2::new(0.10, 0.5), Vec2::new(0.002, 0.0), 1.0);
        let mut b = ball(1, Vec2::new(0.11, 0.5), Vec2::new(-0.001, 0.0), 1.0);
        assert!(elastic_collision(&mut a, &mut b));
        assert!(approx(a.vel, Vec2::new(-0.001, 0.0)), "a {}", a.vel);
        assert!(approx(b.vel, Vec2::new(0.002, 0.0)), "b {}", b.vel);
    }

    #[test]
    fn separating_pair_untouched() {
        let mut a = ball(0, Vec2::new(0.10, 0.5), Vec2::new(-0.002, 0.0), 1.0);
        let mut b = ball(1, Vec2::new(0.11, 0.5), Vec2::new(0.002, 0.0), 1.0);
        assert!(!elastic_collision(&mut a, &mut b));
        assert_eq!(a.vel, Vec2::new(-0.002, 0.0));
        assert_eq!(b.vel, Vec2::new(0.002, 0.0));
    }

    #[test]
    fn collision_axis_uses_torus_displacement() {
        // a sits just left of the seam moving right; b just right of it.
        let mut a = ball(0, Vec2::new(0.995, 0.5), Vec2::new(0.002, 0.0), 1.0);
        let mut b = ball(1, Vec2::new(0.004, 0.5), Vec2::ZERO, 1.0);
        assert!(elastic_collision(&mut a, &mut b));
        assert!(approx(a.vel, Vec2::ZERO));
        assert!(approx(b.vel, Vec2::new(0.002, 0.0)));
    }

    #[test]
    fn wall_reflects_and_stays_still() {
        let mut wall = Agent::isolated(AgentId(0), Vec2::new(0.5, 0.5), 0.5);
        let mut b = ball(1, Vec2::new(0.49, 0.5), Vec2::new(0.003, 0.001), 1.0);
        assert!(elastic_collision(&mut wall, &mut b));
        assert_eq!(wall.vel, Vec2::ZERO);
        // Normal (x) component flips, tangential (y) component kept.
        assert!(approx(b.vel, Vec2::new(-0.003, 0.001)), "b {}", b.vel);
    }

    #[test]
    fn wall_in_second_position() {
        let mut a = ball(0, Vec2::new(0.5, 0.49), Vec2::new(0.0, 0.002), 1.0);
        let mut wall = Agent::isolated(AgentId(1), Vec2::new(0.5, 0.5), 0.5);
        assert!(elastic_collision(&mut a, &mut wall));
        assert!(approx(a.vel, Vec2::new(0.0, -0.002)));
        assert_eq!(wall.vel, Vec2::ZERO);
    }

    #[test]
    fn two_walls_do_nothing() {
        let mut a = Agent::isolated(AgentId(0), Vec2::new(0.5, 0.5), 0.5);
        let mut b = Agent::isolated(AgentId(1), Vec2::new(0.505, 0.5), 0.5);
        assert!(!elastic_collision(&mut a, &mut b));
        assert_eq!(a.vel, Vec2::ZERO);
        assert_eq!(b.vel, Vec2::ZERO);
    }

    #[test]
    fn coincident_positions_do_nothing() {
        let mut a = ball(0, Vec2::new(0.5, 0.5), Vec2::new(0.001, 0.0), 1.0);
        let mut b = ball(1, Vec2::new(0.5, 0.5), Vec2::new(-0.001, 0.0), 1.0);
        assert!(!elastic_collision(&mut a, &mut b));
    }

    #[test]
    fn positions_and_masses_unchanged() {
        let mut a = ball(0, Vec2::new(0.10, 0.5), Vec2::new(0.002, 0.0), 2.0);
        let mut b = ball(1, Vec2::new(0.11, 0.5), Vec2::new(-0.001, 0.0), 3.0);
        elastic_collision(&mut a, &mut b);
        assert_eq!((a.pos, a.mass), (Vec2::new(0.10, 0.5), 2.0));
        assert_eq!((b.pos, b.mass), (Vec2::new(0.11, 0.5), 3.0));
    }

    proptest! {
        #[test]
        fn momentum_and_energy_conserved(
            dx in -0.01f64..0.01, dy in -0.01f64..0.01,
            vax in -0.01f64..0.01, vay in -0.01f64..0.01,
            vbx in -0.01f64..0.01, vby in -0.01f64..0.01,
            ma in 0.1f64..10.0, mb in 0.1f64..10.0,
        ) {
            prop_assume!(dx * dx + dy * dy > 1e-8);
            let mut a = ball(0, Vec2::new(0.5, 0.5), Vec2::new(vax, vay), ma);
            let mut b = ball(1, Vec2::new(0.5 + dx, 0.5 + dy), Vec2::new(vbx, vby), mb);

            let p0 = momentum([&a, &b]);
            let e0 = kinetic_energy([&a, &b]);
            elastic_collision(&mut a, &mut b);
            let p1 = momentum([&a, &b]);
            let e1 = kinetic_energy([&a, &b]);

            prop_assert!((p1 - p0).norm() < 1e-12, "momentum {p0} -> {p1}");
            prop_assert!((e1 - e0).abs() <= 1e-9 * e0.max(1e-12), "energy {e0} -> {e1}");
        }

        #[test]
        fn wall_bounce_preserves_speed(
            dx in -0.01f64..0.01, dy in -0.01f64..0.01,
            vx in -0.01f64..0.01, vy in -0.01f64..0.01,
        ) {
            prop_assume!(dx * dx + dy * dy > 1e-8);
            let mut wall = Agent::isolated(AgentId(0), Vec2::new(0.5, 0.5), 0.5);
            let mut b = ball(1, Vec2::new(0.5 + dx, 0.5 + dy), Vec2::new(vx, vy), 1.0);
            let speed = b.vel.norm();
            elastic_collision(&mut wall, &mut b);
            prop_assert_eq!(wall.vel, Vec2::ZERO);
            prop_assert!((b.vel.norm() - speed).abs() < 1e-12);
        }
    }
}

#[cfg(test)]
mod energy_tests {
    use sir_agent::Agent;
    use sir_core::{AgentId, Vec2};

    use super::ball;
    use crate::{kinetic_energy, momentum};

    #[test]
    fn walls_excluded() {
        let agents = [
            ball(0, Vec2::new(0.1, 0.1), Vec2::new(2.0, 0.0), 1.0),
            Agent::isolated(AgentId(1), Vec2::new(0.2, 0.2), 0.5),
        ];
        assert_eq!(kinetic_energy(&agents), 2.0);
        assert_eq!(momentum(&agents), Vec2::new(2.0, 0.0));
    }
}
