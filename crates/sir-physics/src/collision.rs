//! Two-body elastic collision response.
//!
//! The collision is resolved in one dimension, along the axis joining the two
//! centres (taken as the shortest displacement on the torus).  With
//! `r = pos_a - pos_b`, `s = ((v_a - v_b) · r) / |r|²` and total mass `M`:
//!
//! ```text
//! v_a' = v_a - (2 m_b / M) s r
//! v_b' = v_b + (2 m_a / M) s r
//! ```
//!
//! which conserves momentum and kinetic energy.  An infinite-mass agent acts
//! as a fixed wall: its factor is `0` and the other agent's is `2`, i.e. a
//! mirror reflection of the normal velocity component.

use sir_agent::Agent;
use sir_core::torus_delta;

/// Resolve an elastic collision between `a` and `b`, updating velocities only.
///
/// Returns `true` if velocities changed.  Nothing happens (`false`) when:
///
/// - both agents have infinite mass;
/// - the agents occupy the same point (no collision axis);
/// - the agents are not approaching each other along the axis, which keeps a
///   pair that is still overlapping after a bounce from colliding again.
pub fn elastic_collision(a: &mut Agent, b: &mut Agent) -> bool {
    let (m_a, m_b) = (a.mass, b.mass);
    if m_a.is_infinite() && m_b.is_infinite() {
        return false;
    }

    let r = torus_delta(b.pos, a.pos);
    let r_sq = r.norm_sq();
    if r_sq == 0.0 {
        return false;
    }

    let s = (a.vel - b.vel).dot(r) / r_sq;
    if s >= 0.0 {
        return false;
    }

    let (f_a, f_b) = if m_a.is_infinite() {
        (0.0, 2.0)
    } else if m_b.is_infinite() {
        (2.0, 0.0)
    } else {
        let total = m_a + m_b;
        (2.0 * m_b / total, 2.0 * m_a / total)
    };

    a.vel = a.vel - r * (f_a * s);
    b.vel = b.vel + r * (f_b * s);
    true
}
