use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

// --- Helper Functions ---

/// Velocity of the given speed along a uniformly random heading in [0, TAU).
pub fn random_velocity<R: Rng + ?Sized>(rng: &mut R, speed: f32) -> Vec2 {
    let angle = rng.gen_range(0.0..TAU);
    Vec2::from_angle(angle) * speed
}

/// Uniform position keeping a circle of `radius` fully inside the arena.
/// Degenerate arenas (smaller than the circle) collapse to the centre line.
pub fn random_position<R: Rng + ?Sized>(rng: &mut R, arena: Vec2, radius: f32) -> Vec2 {
    let x = random_coordinate(rng, arena.x, radius);
    let y = random_coordinate(rng, arena.y, radius);
    Vec2::new(x, y)
}

fn random_coordinate<R: Rng + ?Sized>(rng: &mut R, extent: f32, radius: f32) -> f32 {
    let (lo, hi) = (radius, extent - radius);
    if lo < hi {
        rng.gen_range(lo..=hi)
    } else {
        extent * 0.5
    }
}

/// Circle contact test; touching edges count as contact.
#[inline]
pub fn circles_touch(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) <= reach * reach
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_velocity_has_requested_speed() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let v = random_velocity(&mut rng, 2.0);
            assert!((v.length() - 2.0).abs() < 1e-5);
        }
    }

    #[test]
    fn random_position_stays_inside_arena() {
        let mut rng = StdRng::seed_from_u64(3);
        let arena = Vec2::new(100.0, 50.0);
        for _ in 0..500 {
            let p = random_position(&mut rng, arena, 10.0);
            assert!((10.0..=90.0).contains(&p.x));
            assert!((10.0..=40.0).contains(&p.y));
        }
    }

    #[test]
    fn random_position_in_tiny_arena_is_centred() {
        let mut rng = StdRng::seed_from_u64(3);
        let p = random_position(&mut rng, Vec2::new(8.0, 8.0), 10.0);
        assert_eq!(p, Vec2::new(4.0, 4.0));
    }

    #[test]
    fn touching_edges_count_as_contact() {
        assert!(circles_touch(Vec2::ZERO, 5.0, Vec2::new(10.0, 0.0), 5.0));
        assert!(!circles_touch(Vec2::ZERO, 5.0, Vec2::new(10.1, 0.0), 5.0));
    }
}
