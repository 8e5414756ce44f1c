//! Bubble entities: spawn, rise, hit-testing, pop, and visual sync.
//!
//! A bubble is an ECS entity with a [`Bubble`] component for the gameplay
//! attributes and a `Transform` for position. Visuals are retained: a shared
//! unit-circle mesh scaled by the radius, a per-bubble `ColorMaterial`
//! carrying the fill alpha, and a child highlight square that inherits the
//! parent scale. [`sync_bubble_visual_system`] pushes attribute changes
//! (spawn and recycle) back into the retained state.
//!
//! The core operations (`advance_bubble`, `reset_bubble`, `pop_bubble`) are
//! free functions over `(&mut Bubble, &mut Transform)` so the scenario tests
//! can drive them without a window.

use crate::config::GameConfig;
use crate::constants::{
    self, FALLBACK_HEIGHT, FALLBACK_WIDTH, HIGHLIGHT_OFFSET_RATIO, HIGHLIGHT_SIDE_RATIO,
};
use crate::graphics::ShapeAssets;
use crate::simulation::{BubblePopped, Score, SimRng};
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::Rng;

// ── Component ─────────────────────────────────────────────────────────────────

/// A pastel bubble rising through the field.
///
/// While `popping` is set the bubble neither moves nor hit-tests. The flag is
/// cleared again before [`pop_bubble`] returns, so no frame ever observes it;
/// the pop itself is represented on screen purely by the particle burst.
#[derive(Component, Debug, Clone)]
pub struct Bubble {
    /// Radius (world units).
    pub radius: f32,
    /// Palette index of the fill color.
    pub color: usize,
    /// Fill alpha in the 0-255 domain.
    pub alpha: f32,
    /// Rise speed (world units per frame).
    pub speed: f32,
    pub popping: bool,
}

impl Bubble {
    /// Whether `point` lies strictly inside the bubble drawn at `center`.
    /// Always false while the bubble is mid-pop. No side effects.
    pub fn contains(&self, center: Vec2, point: Vec2) -> bool {
        !self.popping && center.distance(point) < self.radius
    }
}

/// Bubble entities in creation order.
///
/// Hit scans walk this list rather than a query, so overlap resolution is
/// stable: the earliest-created bubble under the cursor wins.
#[derive(Resource, Default)]
pub struct BubbleField(pub Vec<Entity>);

// ── Core operations ───────────────────────────────────────────────────────────

/// Sample fresh radius/color/alpha/speed for `bubble`.
fn randomize_bubble(bubble: &mut Bubble, rng: &mut StdRng, config: &GameConfig) {
    bubble.radius = rng.gen_range(config.radius_min..config.radius_max);
    bubble.color = rng.gen_range(0..constants::PALETTE_LEN);
    bubble.alpha = rng.gen_range(config.alpha_min..config.alpha_max);
    bubble.speed = rng.gen_range(config.speed_min..config.speed_max);
}

/// Recycle a bubble: fresh random attributes, a new x anywhere across the
/// window, re-entering from just below the bottom edge. Clears `popping`.
pub fn reset_bubble(
    bubble: &mut Bubble,
    transform: &mut Transform,
    viewport: Vec2,
    rng: &mut StdRng,
    config: &GameConfig,
) {
    randomize_bubble(bubble, rng, config);
    transform.translation.x = rng.gen_range(-viewport.x / 2.0..viewport.x / 2.0);
    transform.translation.y = -viewport.y / 2.0 - bubble.radius;
    bubble.popping = false;
}

/// Advance one frame of rise; recycle the bubble once it has fully cleared
/// the top edge. No-op while popping.
pub fn advance_bubble(
    bubble: &mut Bubble,
    transform: &mut Transform,
    viewport: Vec2,
    rng: &mut StdRng,
    config: &GameConfig,
) {
    if bubble.popping {
        return;
    }
    transform.translation.y += bubble.speed;
    if transform.translation.y - bubble.radius > viewport.y / 2.0 {
        reset_bubble(bubble, transform, viewport, rng, config);
    }
}

/// Pop transition: score, burst/sound notification, immediate recycle.
///
/// Returns the [`BubblePopped`] message describing the pop; the caller hands
/// it to the message queue for the particle and audio systems. Popping is
/// entered and exited within this call.
pub fn pop_bubble(
    bubble: &mut Bubble,
    transform: &mut Transform,
    viewport: Vec2,
    score: &mut Score,
    rng: &mut StdRng,
    config: &GameConfig,
) -> BubblePopped {
    bubble.popping = true;
    score.apply_pop(bubble.color);
    let popped = BubblePopped {
        center: transform.translation.truncate(),
        color: bubble.color,
    };
    reset_bubble(bubble, transform, viewport, rng, config);
    popped
}

// ── Startup system ────────────────────────────────────────────────────────────

/// Spawn the fixed bubble field and record creation order in [`BubbleField`].
///
/// Initial positions sit in a one-window-height band below the bottom edge so
/// the field drifts in rather than materialising mid-screen.
pub fn spawn_bubble_field(
    mut commands: Commands,
    windows: Query<&Window>,
    shapes: Res<ShapeAssets>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut rng: ResMut<SimRng>,
    config: Res<GameConfig>,
) {
    let (width, height) = match windows.single() {
        Ok(window) => (window.width(), window.height()),
        Err(_) => (FALLBACK_WIDTH, FALLBACK_HEIGHT),
    };

    let mut field = BubbleField::default();
    for i in 0..config.bubble_count {
        let mut bubble = Bubble {
            radius: 0.0,
            color: 0,
            alpha: 0.0,
            speed: 0.0,
            popping: false,
        };
        randomize_bubble(&mut bubble, &mut rng.0, &config);
        let x = rng.0.gen_range(-width / 2.0..width / 2.0);
        let y = rng.0.gen_range(-height * 1.5..-height / 2.0);
        // Tiny per-bubble z step keeps draw order stable (creation order).
        let z = i as f32 * 1e-3;

        let material = materials.add(bubble_material(&bubble));
        let scale = bubble_scale(&bubble);
        let entity = commands
            .spawn((
                Mesh2d(shapes.circle.clone()),
                MeshMaterial2d(material),
                Transform {
                    translation: Vec3::new(x, y, z),
                    scale,
                    ..Default::default()
                },
                Visibility::default(),
                bubble,
            ))
            .with_children(|parent| {
                parent.spawn((
                    Mesh2d(shapes.square.clone()),
                    MeshMaterial2d(shapes.highlight.clone()),
                    highlight_transform(),
                ));
            })
            .id();
        field.0.push(entity);
    }
    commands.insert_resource(field);
}

// ── Update systems ────────────────────────────────────────────────────────────

/// Per-frame rise for every bubble, walked in field order.
pub fn bubble_rise_system(
    windows: Query<&Window>,
    field: Res<BubbleField>,
    mut bubbles: Query<(&mut Bubble, &mut Transform)>,
    mut rng: ResMut<SimRng>,
    config: Res<GameConfig>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let viewport = Vec2::new(window.width(), window.height());
    for &entity in &field.0 {
        if let Ok((mut bubble, mut transform)) = bubbles.get_mut(entity) {
            advance_bubble(&mut bubble, &mut transform, viewport, &mut rng.0, &config);
        }
    }
}

/// Push attribute changes (spawn and recycle) into the retained visuals.
///
/// Runs only over bubbles whose component changed this frame, so the
/// steady-state cost is zero.
pub fn sync_bubble_visual_system(
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(&Bubble, &MeshMaterial2d<ColorMaterial>, &mut Transform), Changed<Bubble>>,
) {
    for (bubble, material, mut transform) in query.iter_mut() {
        transform.scale = bubble_scale(bubble);
        if let Some(mat) = materials.get_mut(&material.0) {
            mat.color = fill_color(bubble);
        }
    }
}

// ── Visual helpers ────────────────────────────────────────────────────────────

fn fill_color(bubble: &Bubble) -> Color {
    constants::palette_color(bubble.color).with_alpha(bubble.alpha / 255.0)
}

fn bubble_material(bubble: &Bubble) -> ColorMaterial {
    ColorMaterial::from_color(fill_color(bubble))
}

/// The unit circle mesh carries radius through the transform scale; z stays
/// at 1 so the child highlight keeps its own depth offset.
fn bubble_scale(bubble: &Bubble) -> Vec3 {
    Vec3::new(bubble.radius, bubble.radius, 1.0)
}

/// Local transform of the highlight square. The parent scale carries the
/// radius, so offset and side are expressed as fractions of it.
fn highlight_transform() -> Transform {
    Transform {
        translation: Vec3::new(HIGHLIGHT_OFFSET_RATIO, HIGHLIGHT_OFFSET_RATIO, 0.1),
        scale: Vec3::new(HIGHLIGHT_SIDE_RATIO, HIGHLIGHT_SIDE_RATIO, 1.0),
        ..Default::default()
    }
}
