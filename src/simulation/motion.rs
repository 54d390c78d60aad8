//! Fixed-step motion and the reflective arena boundary.

use glam::Vec2;

use super::unit::Unit;

/// Moves a mobile unit by one frame of velocity, then applies the boundary rule.
/// Velocity is a per-frame displacement; it is not scaled by elapsed time.
pub fn integrate(unit: &mut Unit, arena: Vec2) {
    if !unit.stage.is_mobile() {
        return;
    }
    unit.position += unit.velocity;
    reflect_at_bounds(unit, arena);
}

/// Clamps the unit inside `[r, dim - r]` on each axis and points the
/// velocity component back inward. Speed is preserved.
pub fn reflect_at_bounds(unit: &mut Unit, arena: Vec2) {
    let r = unit.radius;
    let (x, vx) = reflect_axis(unit.position.x, unit.velocity.x, r, arena.x);
    let (y, vy) = reflect_axis(unit.position.y, unit.velocity.y, r, arena.y);
    unit.position = Vec2::new(x, y);
    unit.velocity = Vec2::new(vx, vy);
}

#[inline]
fn reflect_axis(pos: f32, vel: f32, radius: f32, extent: f32) -> (f32, f32) {
    if pos - radius <= 0.0 {
        (radius, vel.abs())
    } else if pos + radius >= extent {
        (extent - radius, -vel.abs())
    } else {
        (pos, vel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::simulation::unit::LifeStage;

    const ARENA: Vec2 = Vec2::new(200.0, 100.0);

    fn unit(stage: LifeStage, position: Vec2, velocity: Vec2) -> Unit {
        let config = SimulationConfig::new();
        Unit::new(stage, position, velocity, config.stage(stage))
    }

    #[test]
    fn free_unit_moves_by_velocity() {
        let mut u = unit(LifeStage::Juvenile, Vec2::new(50.0, 50.0), Vec2::new(2.0, -1.0));
        integrate(&mut u, ARENA);
        assert_eq!(u.position, Vec2::new(52.0, 49.0));
        assert_eq!(u.velocity, Vec2::new(2.0, -1.0));
    }

    #[test]
    fn eggs_do_not_move() {
        let mut u = unit(LifeStage::Egg, Vec2::new(50.0, 50.0), Vec2::new(2.0, 2.0));
        u.velocity = Vec2::new(3.0, 0.0);
        integrate(&mut u, ARENA);
        assert_eq!(u.position, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn left_wall_flips_velocity_once_and_clamps() {
        let mut u = unit(LifeStage::Adult, Vec2::new(11.0, 50.0), Vec2::new(-2.0, 0.0));
        integrate(&mut u, ARENA);
        assert_eq!(u.position.x, 10.0);
        assert_eq!(u.velocity.x, 2.0);

        // Next frame carries it back inward, no second flip
        integrate(&mut u, ARENA);
        assert_eq!(u.position.x, 12.0);
        assert_eq!(u.velocity.x, 2.0);
    }

    #[test]
    fn far_walls_reflect_inward_on_both_axes() {
        let mut u = unit(LifeStage::Juvenile, Vec2::new(189.0, 89.0), Vec2::new(3.0, 4.0));
        integrate(&mut u, ARENA);
        assert_eq!(u.position, Vec2::new(190.0, 90.0));
        assert_eq!(u.velocity, Vec2::new(-3.0, -4.0));
    }

    #[test]
    fn units_stay_in_bounds_over_many_frames() {
        let mut u = unit(LifeStage::Juvenile, Vec2::new(100.0, 50.0), Vec2::new(7.3, -5.9));
        for _ in 0..1_000 {
            integrate(&mut u, ARENA);
            assert!(u.position.x >= u.radius && u.position.x <= ARENA.x - u.radius);
            assert!(u.position.y >= u.radius && u.position.y <= ARENA.y - u.radius);
        }
    }
}
