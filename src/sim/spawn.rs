//! Obstacle movement, culling and spawning
//!
//! At most two obstacles exist at once. A second one only appears once the
//! first has travelled far enough in for the player to land between them.

use super::rng::SpawnRng;
use super::state::Obstacle;
use crate::Viewport;
use crate::consts::MAX_OBSTACLES;
use crate::tuning::Tuning;

/// Produce next tick's obstacles from the current ones
pub fn advance_obstacles(
    obstacles: &[Obstacle],
    speed_rate: f32,
    viewport: &Viewport,
    tuning: &Tuning,
    rng: &mut dyn SpawnRng,
) -> Vec<Obstacle> {
    let shift = tuning.obstacle_speed(speed_rate);

    let mut next: Vec<Obstacle> = obstacles
        .iter()
        .map(|o| Obstacle { x: o.x - shift, ..*o })
        .filter(Obstacle::is_visible)
        .collect();

    if should_spawn(&next, viewport, tuning, rng) {
        let obstacle = Obstacle::spawn(viewport);
        log::debug!("spawn obstacle #{} at x={}", next.len() + 1, obstacle.x);
        next.push(obstacle);
    }

    next
}

/// Spawn decision for the moved and culled list
///
/// Rolls are only drawn when a spawn is possible at all.
fn should_spawn(
    obstacles: &[Obstacle],
    viewport: &Viewport,
    tuning: &Tuning,
    rng: &mut dyn SpawnRng,
) -> bool {
    let modulus = match obstacles {
        [] => tuning.empty_spawn_modulus,
        [only] if viewport.w - only.x >= tuning.min_gap() => tuning.second_spawn_modulus,
        _ => return false,
    };
    debug_assert!(obstacles.len() < MAX_OBSTACLES);
    rng.next_in_range(0, tuning.spawn_roll_range) % modulus == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::SequenceRng;
    use proptest::prelude::*;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 400.0).unwrap()
    }

    fn at(x: f32) -> Obstacle {
        Obstacle {
            x,
            ..Obstacle::spawn(&viewport())
        }
    }

    #[test]
    fn test_obstacles_shift_by_capped_speed() {
        let tuning = Tuning::default();
        let mut never = SequenceRng::constant(1);
        let next = advance_obstacles(&[at(400.0)], 1.0, &viewport(), &tuning, &mut never);
        assert_eq!(next[0].x, 394.0);

        let next = advance_obstacles(&[at(400.0)], 50.0, &viewport(), &tuning, &mut never);
        assert_eq!(next[0].x, 380.0);
    }

    #[test]
    fn test_off_screen_obstacles_are_dropped() {
        let tuning = Tuning::default();
        let mut never = SequenceRng::constant(1);
        // -50 - 6 = -56, and -56 + 55 < 0
        let next = advance_obstacles(&[at(-50.0), at(300.0)], 1.0, &viewport(), &tuning, &mut never);
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].x, 294.0);
    }

    #[test]
    fn test_empty_list_spawns_on_roll_multiple_of_ten() {
        let tuning = Tuning::default();
        let mut hit = SequenceRng::constant(40);
        let next = advance_obstacles(&[], 1.0, &viewport(), &tuning, &mut hit);
        assert_eq!(next, vec![Obstacle::spawn(&viewport())]);

        let mut miss = SequenceRng::constant(41);
        let next = advance_obstacles(&[], 1.0, &viewport(), &tuning, &mut miss);
        assert!(next.is_empty());
    }

    #[test]
    fn test_second_obstacle_needs_gap_and_roll() {
        let tuning = Tuning::default();

        // Gap after the move: 800 - 494 = 306 < 360, no roll drawn
        let mut rng = SequenceRng::constant(0);
        let next = advance_obstacles(&[at(500.0)], 1.0, &viewport(), &tuning, &mut rng);
        assert_eq!(next.len(), 1);
        assert_eq!(rng.draws(), 0);

        // Gap 800 - 434 = 366 >= 360, roll 30 spawns
        let mut rng = SequenceRng::constant(30);
        let next = advance_obstacles(&[at(440.0)], 1.0, &viewport(), &tuning, &mut rng);
        assert_eq!(next.len(), 2);
        assert_eq!(next[1], Obstacle::spawn(&viewport()));

        // Roll 10 is a multiple of 10 but not of 30
        let mut rng = SequenceRng::constant(10);
        let next = advance_obstacles(&[at(440.0)], 1.0, &viewport(), &tuning, &mut rng);
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn test_never_more_than_two() {
        let tuning = Tuning::default();
        let mut always = SequenceRng::constant(0);
        let next = advance_obstacles(&[at(100.0), at(300.0)], 1.0, &viewport(), &tuning, &mut always);
        assert_eq!(next.len(), 2);
        assert_eq!(always.draws(), 0);
    }

    proptest! {
        #[test]
        fn obstacle_count_stays_bounded(rolls in proptest::collection::vec(0u32..100, 1..64), ticks in 1usize..600) {
            let tuning = Tuning::default();
            let mut rng = SequenceRng::new(rolls);
            let mut obstacles = Vec::new();
            for _ in 0..ticks {
                obstacles = advance_obstacles(&obstacles, 1.0, &viewport(), &tuning, &mut rng);
                prop_assert!(obstacles.len() <= MAX_OBSTACLES);
                prop_assert!(obstacles.iter().all(Obstacle::is_visible));
            }
        }
    }
}
