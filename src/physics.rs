/*
 * Physics Module
 *
 * This module holds the movement rule every dood follows once per tick:
 * 1. Target acquisition: pick a random queen when there is no target, on a
 *    random turn, or when the target is the dood itself
 * 2. Chase: accelerate toward the target, or jitter when on top of it
 * 3. Edge avoidance: random push away from any edge closer than the margin
 * 4. Speed clamp and an explicit Euler step
 *
 * The rule is a pure function of the dood, the queens, the parameters, the
 * viewport and the generator, so it can be driven headless with a seeded rng.
 */

use rand::Rng;

use crate::dood::{Dood, DoodId};
use crate::params::SimulationParams;
use crate::viewport::Viewport;

// Displacements smaller than this on both axes have no direction
pub const DIRECTION_EPSILON: f64 = 0.01;

// Unit vector pointing from (x1, y1) to (x2, y2), zero when the points coincide
pub fn unit_vector(x1: f64, y1: f64, x2: f64, y2: f64) -> (f64, f64) {
    let dx = x2 - x1;
    let dy = y2 - y1;

    if dx.abs() < DIRECTION_EPSILON && dy.abs() < DIRECTION_EPSILON {
        return (0.0, 0.0);
    }

    let distance = (dx * dx + dy * dy).sqrt();
    (dx / distance, dy / distance)
}

// Compute the next state of `dood`.
//
// `queens` must reflect every move already made this tick; the caller owns
// the ordering. `id` is only used to detect a queen chasing itself.
pub fn step<R: Rng + ?Sized>(
    dood: &Dood,
    id: DoodId,
    queens: &[Dood],
    params: &SimulationParams,
    viewport: Viewport,
    rng: &mut R,
) -> Dood {
    let constants = dood.species.constants(params);
    let mut next = *dood;

    // Chase target...
    let target = match dood.target {
        Some(t)
            if t < queens.len()
                && rng.gen::<f64>() >= constants.turn_probability
                && !id.is_target(t) =>
        {
            t
        }
        _ => rng.gen_range(0..queens.len()),
    };
    next.target = Some(target);

    let queen = &queens[target];
    let (vec_x, vec_y) = unit_vector(dood.x, dood.y, queen.x, queen.y);

    if vec_x == 0.0 && vec_y == 0.0 {
        next.speed_x += (rng.gen::<f64>() * 2.0 - 1.0) * constants.accel_modifier;
        next.speed_y += (rng.gen::<f64>() * 2.0 - 1.0) * constants.accel_modifier;
    } else {
        // One magnitude for both axes keeps the push along the chase direction
        let magnitude = rng.gen::<f64>() * constants.accel_modifier;
        next.speed_x += vec_x * magnitude;
        next.speed_y += vec_y * magnitude;
    }

    // Wall avoidance...
    let margin = params.margin;
    if dood.x < margin {
        next.speed_x += rng.gen::<f64>() * params.edge_push;
    }
    if dood.x >= viewport.width - margin {
        next.speed_x -= rng.gen::<f64>() * params.edge_push;
    }
    if dood.y < margin {
        next.speed_y += rng.gen::<f64>() * params.edge_push;
    }
    if dood.y >= viewport.height - margin {
        next.speed_y -= rng.gen::<f64>() * params.edge_push;
    }

    // Throttle speed...
    let speed = next.speed();
    if speed > constants.max_speed {
        let scale = constants.max_speed / speed;
        next.speed_x *= scale;
        next.speed_y *= scale;
    }

    next.x += next.speed_x;
    next.y += next.speed_y;
    next
}
