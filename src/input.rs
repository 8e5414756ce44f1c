//! Pointer input: maps a left-press to the first bubble under the cursor.

use crate::bubble::{pop_bubble, Bubble, BubbleField};
use crate::config::GameConfig;
use crate::simulation::{BubblePopped, Score, SimRng};
use bevy::input::ButtonInput;
use bevy::prelude::*;

/// Pop the first bubble (in creation order) under a fresh left-press.
///
/// At most one bubble pops per press, even when circles overlap; a press over
/// empty background is a no-op. Presses are read through `just_pressed`, so a
/// held button never machine-guns the field.
pub fn pointer_press_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    field: Res<BubbleField>,
    mut bubbles: Query<(&mut Bubble, &mut Transform)>,
    mut score: ResMut<Score>,
    mut rng: ResMut<SimRng>,
    config: Res<GameConfig>,
    mut popped: MessageWriter<BubblePopped>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    // Convert from screen coordinates to world coordinates.
    let point = Vec2::new(
        cursor.x - window.width() / 2.0,
        -(cursor.y - window.height() / 2.0),
    );
    let viewport = Vec2::new(window.width(), window.height());

    for &entity in &field.0 {
        let Ok((mut bubble, mut transform)) = bubbles.get_mut(entity) else {
            continue;
        };
        if bubble.contains(transform.translation.truncate(), point) {
            let msg = pop_bubble(
                &mut bubble,
                &mut transform,
                viewport,
                &mut score,
                &mut rng.0,
                &config,
            );
            popped.write(msg);
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bubble::reset_bubble;
    use crate::constants;

    const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

    fn bubble_at(x: f32, y: f32, radius: f32, color: usize) -> (Bubble, Transform) {
        (
            Bubble {
                radius,
                color,
                alpha: 200.0,
                speed: 1.0,
                popping: false,
            },
            Transform::from_translation(Vec3::new(x, y, 0.0)),
        )
    }

    /// Replicates the scan the system performs: walk in field order, pop the
    /// first hit, stop.
    fn scan_and_pop(
        field: &mut [(Bubble, Transform)],
        point: Vec2,
        score: &mut Score,
    ) -> Option<usize> {
        let mut rng = SimRng::seeded(11).0;
        let config = GameConfig::default();
        for (ix, (bubble, transform)) in field.iter_mut().enumerate() {
            if bubble.contains(transform.translation.truncate(), point) {
                pop_bubble(bubble, transform, VIEWPORT, score, &mut rng, &config);
                return Some(ix);
            }
        }
        None
    }

    #[test]
    fn first_created_bubble_wins_on_overlap() {
        // Two bubbles sharing a center; creation order decides.
        let mut field = vec![
            bubble_at(0.0, 0.0, 40.0, 1),
            bubble_at(0.0, 0.0, 90.0, constants::BONUS_COLOR_IX),
        ];
        let mut score = Score::default();
        let hit = scan_and_pop(&mut field, Vec2::ZERO, &mut score);
        assert_eq!(hit, Some(0));
        assert_eq!(score.points, -1, "only the first bubble's color scored");
        assert_eq!(score.popped, 1, "exactly one pop per press");
    }

    #[test]
    fn miss_is_a_noop() {
        let mut field = vec![bubble_at(0.0, 0.0, 40.0, 1)];
        let mut score = Score::default();
        let hit = scan_and_pop(&mut field, Vec2::new(500.0, 0.0), &mut score);
        assert_eq!(hit, None);
        assert_eq!(score.points, 0);
        assert_eq!(score.popped, 0);
    }

    #[test]
    fn recycled_bubble_is_hit_testable_again() {
        let mut rng = SimRng::seeded(12).0;
        let config = GameConfig::default();
        let (mut bubble, mut transform) = bubble_at(0.0, 0.0, 40.0, 1);
        reset_bubble(&mut bubble, &mut transform, VIEWPORT, &mut rng, &config);
        // After a recycle the bubble sits below the window but responds to
        // hits at its new center as usual.
        let center = transform.translation.truncate();
        assert!(bubble.contains(center, center));
    }
}
