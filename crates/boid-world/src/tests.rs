//! Unit tests for boid-world.

#[cfg(test)]
mod probe_tests {
    use boid_core::Vec3;

    use crate::{CollisionProbe, OpenSpace, Sphere, SphereField};

    fn wall_at_y10() -> SphereField {
        SphereField::new(vec![Sphere { center: Vec3::new(0.0, 10.0, 0.0), radius: 2.0 }])
    }

    #[test]
    fn open_space_never_obstructs() {
        assert!(!OpenSpace.is_obstructed(Vec3::ZERO, Vec3::Y, 1000.0));
    }

    #[test]
    fn ray_toward_sphere_hits() {
        let field = wall_at_y10();
        assert!(field.is_obstructed(Vec3::ZERO, Vec3::Y, 20.0));
    }

    #[test]
    fn short_probe_stops_before_sphere() {
        let field = wall_at_y10();
        // Sphere surface starts at y = 8; a 5-unit probe cannot reach it.
        assert!(!field.is_obstructed(Vec3::ZERO, Vec3::Y, 5.0));
    }

    #[test]
    fn ray_away_from_sphere_misses() {
        let field = wall_at_y10();
        assert!(!field.is_obstructed(Vec3::ZERO, -Vec3::Y, 20.0));
    }

    #[test]
    fn grazing_ray_misses() {
        let field = wall_at_y10();
        // Parallel ray offset 3 units on x; closest approach 3 > radius 2.
        assert!(!field.is_obstructed(Vec3::new(3.0, 0.0, 0.0), Vec3::Y, 20.0));
    }

    #[test]
    fn origin_inside_sphere_is_obstructed() {
        let field = wall_at_y10();
        assert!(field.is_obstructed(Vec3::new(0.0, 10.0, 0.0), Vec3::X, 0.5));
    }

    #[test]
    fn unnormalized_direction_is_handled() {
        let field = wall_at_y10();
        // Length of the direction vector must not act as a range multiplier.
        assert!(!field.is_obstructed(Vec3::ZERO, Vec3::new(0.0, 100.0, 0.0), 5.0));
        assert!(field.is_obstructed(Vec3::ZERO, Vec3::new(0.0, 100.0, 0.0), 20.0));
    }
}

#[cfg(test)]
mod occupancy_tests {
    use boid_core::CellPoint;

    use crate::{GridOccupancy, OccupancyEvaluator, WorldError};

    #[test]
    fn flags_match_blocked_set() {
        let grid = GridOccupancy::from_cells([CellPoint::new(1, 0, 0), CellPoint::new(0, 2, 0)]);
        let candidates = [
            CellPoint::new(0, 0, 0),
            CellPoint::new(1, 0, 0),
            CellPoint::new(0, 2, 0),
            CellPoint::new(5, 5, 5),
        ];
        let mut flags = [9_u32; 4];
        grid.evaluate(&candidates, &mut flags).unwrap();
        assert_eq!(flags, [0, 1, 1, 0]);
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let grid = GridOccupancy::new();
        let candidates = [CellPoint::ORIGIN; 3];
        let mut flags = [0_u32; 2];
        let err = grid.evaluate(&candidates, &mut flags).unwrap_err();
        assert!(matches!(err, WorldError::BatchLengthMismatch { candidates: 3, flags: 2 }));
    }

    #[test]
    fn occupy_and_release() {
        let mut grid = GridOccupancy::new();
        let cell = CellPoint::new(3, 3, 3);
        assert!(grid.occupy(cell));
        assert!(!grid.occupy(cell));
        assert!(grid.is_occupied(cell));
        assert!(grid.release(cell));
        assert!(!grid.is_occupied(cell));
    }

    #[test]
    fn large_batch_evaluates_every_slot() {
        let grid = GridOccupancy::from_cells((0..32).map(|i| CellPoint::new(i, 0, 0)));
        let candidates: Vec<CellPoint> = (0..64).map(|i| CellPoint::new(i, 0, 0)).collect();
        let mut flags = vec![0_u32; 64];
        grid.evaluate(&candidates, &mut flags).unwrap();
        assert!(flags[..32].iter().all(|&f| f == 1));
        assert!(flags[32..].iter().all(|&f| f == 0));
    }
}

#[cfg(test)]
mod track_tests {
    use boid_core::{Tick, Vec3};

    use crate::{FixedPoint, MovingPoint};

    #[test]
    fn fixed_point_ignores_tick() {
        let p = FixedPoint(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(p.position_at(Tick(0)), p.position_at(Tick(999)));
    }

    #[test]
    fn closure_as_moving_point() {
        let orbit = |t: Tick| Vec3::new(t.0 as f32, 0.0, 0.0);
        assert_eq!(orbit.position_at(Tick(4)), Vec3::new(4.0, 0.0, 0.0));
    }
}
