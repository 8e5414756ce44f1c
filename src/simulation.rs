//! Simulation plugin, score bookkeeping, and the shared random source.
//!
//! One `Update` pass is one tick. The plugin chains the core systems in tick
//! order (input, then bubble motion, then visual sync, then HUD); the particle
//! and audio plugins order themselves after the bubble systems registered
//! here, so a pop's burst and sound land in the same tick as the click.

use crate::constants::BONUS_COLOR_IX;
use crate::{bubble, hud, input};
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Messages ──────────────────────────────────────────────────────────────────

/// Fired once per successful pop; consumed by the particle burst spawner and
/// the pop sound system.
#[derive(Message, Debug, Clone, Copy)]
pub struct BubblePopped {
    /// World-space bubble center at the moment of the pop.
    pub center: Vec2,
    /// Palette index of the popped bubble.
    pub color: usize,
}

// ── Resources ─────────────────────────────────────────────────────────────────

/// Tracks the player's running score.
///
/// - `points`: the value the rules care about. +1 when the popped bubble wears
///   the bonus color, -1 otherwise. No floor; negative totals are expected.
/// - `popped` / `bonus_popped`: lifetime counters for the HUD readout.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct Score {
    pub points: i64,
    pub popped: u32,
    pub bonus_popped: u32,
}

impl Score {
    /// Apply one pop of palette entry `color` and return the delta applied.
    ///
    /// This is the only mutation path for `points`.
    pub fn apply_pop(&mut self, color: usize) -> i64 {
        let delta = if color == BONUS_COLOR_IX { 1 } else { -1 };
        self.points += delta;
        self.popped += 1;
        if delta > 0 {
            self.bonus_popped += 1;
        }
        delta
    }
}

/// Single random source behind every gameplay roll.
///
/// The app seeds it from entropy; tests construct it with [`SimRng::seeded`]
/// so spawn and burst scenarios are reproducible.
#[derive(Resource)]
pub struct SimRng(pub StdRng);

impl SimRng {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<BubblePopped>()
            .init_resource::<Score>()
            .insert_resource(SimRng::from_entropy())
            .add_systems(
                Update,
                (
                    input::pointer_press_system,
                    bubble::bubble_rise_system,
                    bubble::sync_bubble_visual_system,
                    hud::hud_score_display_system,
                )
                    .chain(),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonus_pop_scores_plus_one() {
        let mut score = Score::default();
        assert_eq!(score.apply_pop(BONUS_COLOR_IX), 1);
        assert_eq!(score.points, 1);
        assert_eq!(score.popped, 1);
        assert_eq!(score.bonus_popped, 1);
    }

    #[test]
    fn plain_pop_scores_minus_one() {
        let mut score = Score::default();
        assert_eq!(score.apply_pop(0), -1);
        assert_eq!(score.points, -1);
        assert_eq!(score.popped, 1);
        assert_eq!(score.bonus_popped, 0);
    }

    #[test]
    fn score_has_no_floor() {
        let mut score = Score::default();
        for _ in 0..5 {
            score.apply_pop(7);
        }
        assert_eq!(score.points, -5, "score must go negative freely");
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        use rand::Rng;
        let mut a = SimRng::seeded(42);
        let mut b = SimRng::seeded(42);
        for _ in 0..10 {
            assert_eq!(
                a.0.gen_range(0.0_f32..1.0),
                b.0.gen_range(0.0_f32..1.0),
                "same seed must yield the same stream"
            );
        }
    }
}
