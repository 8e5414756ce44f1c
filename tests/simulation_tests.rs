//! Headless end-to-end tests for the pop pipeline.
//!
//! These tests use [`MinimalPlugins`] plus a manually spawned [`Window`]
//! component; no rendering, no audio, no real input devices. The registered
//! systems are the logic subset of the Update chain (input, rise, burst
//! spawn, particle update); the mesh/material systems need the render asset
//! stores and are covered by running the real app.
//!
//! Covered scenarios:
//! 1. Click on a bonus bubble: score +1, bubble recycled, burst spawned at
//!    the old center with in-range attributes.
//! 2. Click on a plain-color bubble: score -1.
//! 3. Click over empty background: nothing happens.
//! 4. Burst particles decay and are pruned in the tick they die; the
//!    collection is empty once every lifespan has elapsed.

use bevy::input::ButtonInput;
use bevy::prelude::*;

use bubblepop::bubble::{bubble_rise_system, Bubble, BubbleField};
use bubblepop::config::GameConfig;
use bubblepop::constants::BONUS_COLOR_IX;
use bubblepop::input::pointer_press_system;
use bubblepop::particle::{burst_spawn_system, particle_update_system, Particle};
use bubblepop::simulation::{BubblePopped, Score, SimRng};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a headless app with one bubble and the cursor parked at `cursor`
/// (screen coordinates, 1280x720 window), left button freshly pressed.
fn app_with_bubble(color: usize, cursor: Vec2) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_message::<BubblePopped>();
    app.insert_resource(GameConfig::default());
    app.insert_resource(SimRng::seeded(42));
    app.init_resource::<Score>();
    app.add_systems(
        Update,
        (
            pointer_press_system,
            bubble_rise_system,
            burst_spawn_system,
            particle_update_system,
        )
            .chain(),
    );

    let mut window = Window::default();
    window.set_cursor_position(Some(cursor));
    app.world_mut().spawn(window);

    let bubble = app
        .world_mut()
        .spawn((
            Bubble {
                radius: 50.0,
                color,
                alpha: 200.0,
                speed: 1.0,
                popping: false,
            },
            Transform::from_translation(Vec3::new(100.0, 100.0, 0.0)),
        ))
        .id();
    app.insert_resource(BubbleField(vec![bubble]));

    let mut buttons = ButtonInput::<MouseButton>::default();
    buttons.press(MouseButton::Left);
    app.insert_resource(buttons);
    app
}

/// Screen position over the bubble at world (100, 100) in a 1280x720 window.
fn cursor_over_bubble() -> Vec2 {
    Vec2::new(740.0, 260.0)
}

fn particle_count(app: &mut App) -> usize {
    let mut query = app.world_mut().query::<&Particle>();
    query.iter(app.world()).count()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// Clicking the bonus-colored bubble pops it: +1 point, a burst at the old
/// center, and the bubble recycled below the bottom edge.
#[test]
fn click_on_bonus_bubble_scores_and_bursts() {
    let mut app = app_with_bubble(BONUS_COLOR_IX, cursor_over_bubble());
    app.update();

    let score = *app.world().resource::<Score>();
    assert_eq!(score.points, 1, "bonus pop must score +1");
    assert_eq!(score.popped, 1);

    let n = particle_count(&mut app);
    assert!((10..24).contains(&n), "burst size out of range: {n}");

    // Particles spawned at the pop center, then advanced one frame by the
    // same tick's update; each sits one velocity step from (100, 100).
    let mut particles = app.world_mut().query::<(&Particle, &Transform)>();
    for (particle, transform) in particles.iter(app.world()) {
        let dist = transform.translation.truncate().distance(Vec2::new(100.0, 100.0));
        assert!(dist < 6.0, "particle strayed {dist} units on its first frame");
        assert!(particle.lifespan >= 29 && particle.lifespan < 60);
    }

    let mut bubbles = app.world_mut().query::<(&Bubble, &Transform)>();
    let (bubble, transform) = bubbles
        .iter(app.world())
        .next()
        .expect("bubble still exists");
    assert!(!bubble.popping, "popping is transient");
    assert!(
        transform.translation.y < -360.0,
        "bubble must be recycled below the bottom edge"
    );
}

/// A plain-color pop costs one point.
#[test]
fn click_on_plain_bubble_costs_a_point() {
    let mut app = app_with_bubble(0, cursor_over_bubble());
    app.update();
    assert_eq!(app.world().resource::<Score>().points, -1);
}

/// A press over empty background changes nothing.
#[test]
fn click_on_background_is_a_noop() {
    let mut app = app_with_bubble(BONUS_COLOR_IX, Vec2::new(5.0, 5.0));
    app.update();
    assert_eq!(app.world().resource::<Score>().points, 0);
    assert_eq!(particle_count(&mut app), 0);
}

/// Burst particles never outlive their lifespan: no dead particle survives
/// the tick it dies, and the collection drains completely within the maximum
/// lifespan.
#[test]
fn burst_decays_and_prunes_within_max_lifespan() {
    let mut app = app_with_bubble(BONUS_COLOR_IX, cursor_over_bubble());
    app.update();
    assert!(particle_count(&mut app) > 0, "pop must spawn a burst");

    // Drop just_pressed so later frames only age the burst.
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .clear();

    for frame in 0..70 {
        app.update();
        let mut query = app.world_mut().query::<&Particle>();
        for particle in query.iter(app.world()) {
            assert!(
                !particle.is_dead(),
                "dead particle survived past frame {frame}"
            );
        }
    }
    assert_eq!(
        particle_count(&mut app),
        0,
        "all particles must be pruned once every lifespan has elapsed"
    );
}
