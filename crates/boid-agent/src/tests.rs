//! Unit tests for the direction planner.

use boid_core::{BoidId, BoidRng, CellPoint, Vec3};
use boid_world::{CollisionProbe, GridOccupancy, OccupancyEvaluator, OpenSpace, WorldResult};

use crate::{Boid, BoidConfig, BoidObserver, StepContext, StepOutcome};

// ── Test doubles ──────────────────────────────────────────────────────────────

/// A probe that reports every direction obstructed.
struct Walled;

impl CollisionProbe for Walled {
    fn is_obstructed(&self, _origin: Vec3, _direction: Vec3, _max_length: f32) -> bool {
        true
    }
}

/// An evaluator that reports every cell occupied.
struct Saturated;

impl OccupancyEvaluator for Saturated {
    fn evaluate(&self, _candidates: &[CellPoint], flags: &mut [u32]) -> WorldResult<()> {
        flags.fill(1);
        Ok(())
    }
}

/// Records every notification.
#[derive(Default)]
struct Recorder {
    calls: Vec<(BoidId, Vec3, Vec3)>,
}

impl BoidObserver for Recorder {
    fn boid_moved(&mut self, id: BoidId, from: Vec3, to: Vec3) {
        self.calls.push((id, from, to));
    }
}

fn rng() -> BoidRng {
    BoidRng::new(7, BoidId(0))
}

fn boid_at_origin() -> Boid {
    Boid::new(BoidId(0), Vec3::ZERO, BoidConfig::default()).unwrap()
}

// ── Config ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config_tests {
    use crate::BoidConfig;

    #[test]
    fn defaults_validate() {
        BoidConfig::default().validate().unwrap();
    }

    #[test]
    fn default_batch_size() {
        assert_eq!(BoidConfig::default().batch_size(), 64);
    }

    #[test]
    fn zero_speed_rejected() {
        let cfg = BoidConfig { speed: 0.0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_samples_rejected() {
        let cfg = BoidConfig { collision_samples: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn oscillating_behind_rejected() {
        // behind inside the reset radius would re-trigger reset immediately.
        let cfg = BoidConfig { behind: 1.0, reset_radius: 1.2, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn non_growing_search_step_rejected() {
        let cfg = BoidConfig { search_step: 1.0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn far_away_must_exceed_reset_radius() {
        let cfg = BoidConfig { far_away: 1.0, reset_radius: 1.2, ..Default::default() };
        assert!(cfg.validate().is_err());
    }
}

// ── Direction fan ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod fan_tests {
    use boid_core::Vec3;

    use crate::DirectionFan;

    fn desired() -> Vec3 {
        Vec3::new(1.0, 2.0, -0.5).normalize_or_zero()
    }

    #[test]
    fn first_candidate_is_desired_exactly() {
        let first = DirectionFan::new(desired(), 30).next().unwrap();
        assert_eq!(first, desired());
    }

    #[test]
    fn yields_exactly_count_candidates() {
        assert_eq!(DirectionFan::new(desired(), 30).count(), 30);
        assert_eq!(DirectionFan::new(desired(), 1).count(), 1);
    }

    #[test]
    fn all_candidates_unit_length() {
        for dir in DirectionFan::new(desired(), 30) {
            assert!((dir.length() - 1.0).abs() < 1e-5, "|{dir}| != 1");
        }
    }

    #[test]
    fn angular_offset_never_decreases() {
        let d = desired();
        let mut last = -1.0_f32;
        for dir in DirectionFan::new(d, 30) {
            let angle = d.dot(dir).clamp(-1.0, 1.0).acos();
            assert!(angle >= last - 1e-5, "offset shrank: {angle} < {last}");
            last = angle;
        }
        // The fan sweeps all the way to the reverse direction.
        assert!((last - std::f32::consts::PI).abs() < 1e-4);
    }

    #[test]
    fn deterministic_across_invocations() {
        let a: Vec<Vec3> = DirectionFan::new(desired(), 16).collect();
        let b: Vec<Vec3> = DirectionFan::new(desired(), 16).collect();
        assert_eq!(a, b);
    }
}

// ── Reset detection ───────────────────────────────────────────────────────────

#[cfg(test)]
mod reset_tests {
    use super::*;

    #[test]
    fn distant_target_does_not_reset() {
        // Squared distance 100 >= 1.44: cruise.
        let boid = boid_at_origin();
        assert!(!boid.needs_reset(Some(Vec3::new(0.0, 10.0, 0.0)), None));
    }

    #[test]
    fn arrival_triggers_reset() {
        // Squared distance 1 < 1.44: reset.
        let boid = boid_at_origin();
        assert!(boid.needs_reset(Some(Vec3::new(0.0, 1.0, 0.0)), None));
    }

    #[test]
    fn far_anchor_triggers_reset_independently() {
        // Target well outside the reset radius; anchor beyond far_away.
        let boid = boid_at_origin();
        assert!(boid.needs_reset(
            Some(Vec3::new(0.0, 30.0, 0.0)),
            Some(Vec3::new(100.0, 0.0, 0.0)),
        ));
    }

    #[test]
    fn nearby_anchor_alone_does_not_reset() {
        let boid = boid_at_origin();
        assert!(!boid.needs_reset(None, Some(Vec3::new(5.0, 0.0, 0.0))));
    }

    #[test]
    fn no_target_no_anchor_never_resets() {
        let boid = boid_at_origin();
        assert!(!boid.needs_reset(None, None));
    }
}

// ── Stepping ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod step_tests {
    use super::*;

    #[test]
    fn cruise_moves_one_speed_step() {
        let mut boid = boid_at_origin();
        let grid = GridOccupancy::new();
        let ctx = StepContext {
            flock_influence: Vec3::ZERO,
            target:          Some(Vec3::new(0.0, 10.0, 0.0)),
            anchor:          None,
            probe:           &OpenSpace,
            occupancy:       &grid,
        };
        let outcome = boid.step(&ctx, &mut rng(), None);
        assert_eq!(outcome, StepOutcome::Cruised);
        let step_len = boid.position.length();
        assert!((step_len - boid.config().speed).abs() < 1e-6);
    }

    #[test]
    fn unobstructed_desired_becomes_orientation() {
        let mut boid = boid_at_origin();
        let influence = Vec3::new(0.3, 0.0, 0.1);
        let target = Vec3::new(0.0, 10.0, 0.0);
        let cfg = boid.config().clone();

        // Reproduce the blend with the same operation order as the planner.
        let seek = (target - boid.position).normalize_or_zero();
        let desired = (influence + boid.up * cfg.stubbornness + seek * cfg.conscientiousness)
            .normalize_or_zero();

        let grid = GridOccupancy::new();
        let ctx = StepContext {
            flock_influence: influence,
            target:          Some(target),
            anchor:          None,
            probe:           &OpenSpace,
            occupancy:       &grid,
        };
        boid.step(&ctx, &mut rng(), None);
        assert_eq!(boid.up, desired);
    }

    #[test]
    fn no_target_no_anchor_blends_influence_and_stubbornness() {
        let mut boid = boid_at_origin();
        let influence = Vec3::new(1.0, 0.0, 0.0);
        let cfg = boid.config().clone();
        let desired = (influence + boid.up * cfg.stubbornness).normalize_or_zero();

        let grid = GridOccupancy::new();
        let ctx = StepContext {
            flock_influence: influence,
            target:          None,
            anchor:          None,
            probe:           &OpenSpace,
            occupancy:       &grid,
        };
        let outcome = boid.step(&ctx, &mut rng(), None);
        assert_eq!(outcome, StepOutcome::Cruised);
        assert_eq!(boid.up, desired);
        assert_eq!(boid.position, desired * cfg.speed);
    }

    #[test]
    fn arrival_reacquires_through_search() {
        let mut boid = boid_at_origin();
        let grid = GridOccupancy::new();
        let ctx = StepContext {
            flock_influence: Vec3::ZERO,
            target:          Some(Vec3::new(0.0, 1.0, 0.0)),
            anchor:          None,
            probe:           &OpenSpace,
            occupancy:       &grid,
        };
        let outcome = boid.step(&ctx, &mut rng(), None);
        assert_eq!(outcome, StepOutcome::Reacquired);
        // Landed on a lattice cell center somewhere in the scatter volume.
        assert_eq!(boid.position.x.fract().abs(), 0.5);
        assert!(boid.position.distance(Vec3::new(0.0, 1.0, 0.0)) <= 5.0 + 0.9);
    }

    #[test]
    fn reacquire_keeps_orientation() {
        let mut boid = boid_at_origin();
        let up_before = boid.up;
        let grid = GridOccupancy::new();
        let ctx = StepContext {
            flock_influence: Vec3::ZERO,
            target:          Some(Vec3::new(0.0, 1.0, 0.0)),
            anchor:          None,
            probe:           &OpenSpace,
            occupancy:       &grid,
        };
        boid.step(&ctx, &mut rng(), None);
        assert_eq!(boid.up, up_before);
    }

    #[test]
    fn fully_walled_boid_holds() {
        let mut boid = boid_at_origin();
        let grid = GridOccupancy::new();
        let ctx = StepContext {
            flock_influence: Vec3::ZERO,
            target:          Some(Vec3::new(0.0, 10.0, 0.0)),
            anchor:          None,
            probe:           &Walled,
            occupancy:       &grid,
        };
        let up_before = boid.up;
        let outcome = boid.step(&ctx, &mut rng(), None);
        assert_eq!(outcome, StepOutcome::Held);
        assert_eq!(boid.position, Vec3::ZERO);
        assert_eq!(boid.up, up_before);
    }

    #[test]
    fn exhausted_search_holds() {
        let config = BoidConfig { max_search_rounds: Some(2), ..Default::default() };
        let mut boid = Boid::new(BoidId(1), Vec3::ZERO, config).unwrap();
        let ctx = StepContext {
            flock_influence: Vec3::ZERO,
            target:          Some(Vec3::new(0.0, 1.0, 0.0)),
            anchor:          None,
            probe:           &OpenSpace,
            occupancy:       &Saturated,
        };
        let outcome = boid.step(&ctx, &mut rng(), None);
        assert_eq!(outcome, StepOutcome::Held);
        assert_eq!(boid.position, Vec3::ZERO);
    }

    #[test]
    fn observer_sees_intended_move_and_commit_matches() {
        let mut boid = boid_at_origin();
        let mut recorder = Recorder::default();
        let grid = GridOccupancy::new();
        let ctx = StepContext {
            flock_influence: Vec3::ZERO,
            target:          Some(Vec3::new(0.0, 10.0, 0.0)),
            anchor:          None,
            probe:           &OpenSpace,
            occupancy:       &grid,
        };
        boid.step(&ctx, &mut rng(), Some(&mut recorder));

        assert_eq!(recorder.calls.len(), 1);
        let (id, from, to) = recorder.calls[0];
        assert_eq!(id, BoidId(0));
        assert_eq!(from, Vec3::ZERO);
        assert_eq!(to, boid.position);
        assert_ne!(from, to);
    }

    #[test]
    fn held_tick_notifies_with_identical_endpoints() {
        let mut boid = boid_at_origin();
        let mut recorder = Recorder::default();
        let grid = GridOccupancy::new();
        let ctx = StepContext {
            flock_influence: Vec3::ZERO,
            target:          Some(Vec3::new(0.0, 10.0, 0.0)),
            anchor:          None,
            probe:           &Walled,
            occupancy:       &grid,
        };
        boid.step(&ctx, &mut rng(), Some(&mut recorder));

        assert_eq!(recorder.calls.len(), 1);
        let (_, from, to) = recorder.calls[0];
        assert_eq!(from, to);
    }
}
