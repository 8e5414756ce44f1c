//! Burst particles: spawned on pop, frame-based decay, same-tick pruning.
//!
//! ## Design
//!
//! Particles are lightweight ECS entities with a [`Particle`] component that
//! stores per-frame state (velocity, lifespan, alpha). A three-system
//! pipeline handles them:
//!
//! | System                        | Purpose                                     |
//! |-------------------------------|---------------------------------------------|
//! | `burst_spawn_system`          | Turn each pop message into a particle burst |
//! | `attach_particle_mesh_system` | Attach `Mesh2d` to freshly-spawned particles |
//! | `particle_update_system`      | Move, age, and despawn expired particles    |
//! | `particle_fade_system`        | Write the computed alpha into each material |
//!
//! Spawning takes only `Commands`; the mesh attach runs one frame later over
//! `Added<Particle>`, which is imperceptible at 60 Hz. Each particle gets its
//! own `ColorMaterial` so its alpha can fade individually, while the mesh is
//! the shared unit circle from [`ShapeAssets`].

use crate::config::GameConfig;
use crate::constants;
use crate::graphics::ShapeAssets;
use crate::simulation::{BubblePopped, SimRng};
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::Rng;

/// Z layer for burst particles; above every bubble in the field.
const PARTICLE_Z: f32 = 0.9;

// ── Component ─────────────────────────────────────────────────────────────────

/// One burst fragment.
#[derive(Component, Debug, Clone)]
pub struct Particle {
    /// World-space velocity (units per frame).
    pub velocity: Vec2,
    /// Diameter (world units).
    pub size: f32,
    /// Palette index inherited from the popped bubble.
    pub color: usize,
    /// Frames left to live; at 0 the particle is dead.
    pub lifespan: i32,
    /// Lifespan at creation, the denominator of the alpha ramp.
    pub initial_lifespan: i32,
    /// Current alpha in the 0-255 domain, linear in the remaining lifespan.
    pub alpha: f32,
}

impl Particle {
    /// Age by one frame: count down, recompute alpha, then apply gravity and
    /// drag to the velocity, in that order. Callers translate by the pre-step
    /// velocity first, so one tick is translate-then-step.
    pub fn step(&mut self, gravity: f32, drag: f32) {
        self.lifespan -= 1;
        self.alpha = (255.0 * self.lifespan as f32 / self.initial_lifespan as f32)
            .clamp(0.0, 255.0);
        self.velocity.y -= gravity;
        self.velocity *= drag;
    }

    pub fn is_dead(&self) -> bool {
        self.lifespan <= 0
    }
}

// ── Burst generation ──────────────────────────────────────────────────────────

/// Generate the burst for one pop: a randomized count of particles sharing
/// the pop center and color, each with independently rolled size, direction,
/// speed, and lifespan.
pub fn burst_particles(
    center: Vec2,
    color: usize,
    rng: &mut StdRng,
    config: &GameConfig,
) -> Vec<(Particle, Transform)> {
    let count = rng.gen_range(config.burst_count_min..config.burst_count_max);
    (0..count)
        .map(|_| {
            let size = rng.gen_range(config.particle_size_min..config.particle_size_max);
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            let speed = rng.gen_range(config.particle_speed_min..config.particle_speed_max);
            let lifespan =
                rng.gen_range(config.particle_lifespan_min..config.particle_lifespan_max);
            let particle = Particle {
                velocity: Vec2::new(angle.cos(), angle.sin()) * speed,
                size,
                color,
                lifespan,
                initial_lifespan: lifespan,
                alpha: 255.0,
            };
            (
                particle,
                Transform::from_translation(center.extend(PARTICLE_Z)),
            )
        })
        .collect()
}

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct ParticlesPlugin;

impl Plugin for ParticlesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                burst_spawn_system,
                attach_particle_mesh_system,
                particle_update_system,
                particle_fade_system,
            )
                .chain()
                .after(crate::bubble::bubble_rise_system),
        );
    }
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Spawn a burst for every pop reported this frame.
pub fn burst_spawn_system(
    mut commands: Commands,
    mut events: MessageReader<BubblePopped>,
    mut rng: ResMut<SimRng>,
    config: Res<GameConfig>,
) {
    for event in events.read() {
        for (particle, transform) in burst_particles(event.center, event.color, &mut rng.0, &config)
        {
            commands.spawn((particle, transform, Visibility::default()));
        }
    }
}

/// Attach `Mesh2d` + a private `ColorMaterial` to every newly-spawned
/// [`Particle`].
///
/// Uses `Added<Particle>` so it only touches particles that appeared since
/// the last frame; zero overhead for the steady-state population.
pub fn attach_particle_mesh_system(
    mut commands: Commands,
    shapes: Res<ShapeAssets>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(Entity, &Particle, &mut Transform), Added<Particle>>,
) {
    for (entity, particle, mut transform) in query.iter_mut() {
        // Unit-radius mesh; scale by half the diameter.
        transform.scale = Vec3::splat(particle.size / 2.0);
        let material = materials.add(ColorMaterial::from_color(constants::palette_color(
            particle.color,
        )));
        commands
            .entity(entity)
            .insert((Mesh2d(shapes.circle.clone()), MeshMaterial2d(material)));
    }
}

/// Move, age, and prune every particle.
///
/// Each live particle is visited exactly once per tick, and the dead are
/// despawned in the tick they die, so the collection never carries a dead
/// particle across a frame boundary.
pub fn particle_update_system(
    mut commands: Commands,
    mut query: Query<(Entity, &mut Transform, &mut Particle)>,
    config: Res<GameConfig>,
) {
    for (entity, mut transform, mut particle) in query.iter_mut() {
        transform.translation.x += particle.velocity.x;
        transform.translation.y += particle.velocity.y;
        particle.step(config.particle_gravity, config.particle_drag);
        if particle.is_dead() {
            commands.entity(entity).despawn();
        }
    }
}

/// Write each particle's computed alpha into its material.
pub fn particle_fade_system(
    mut materials: ResMut<Assets<ColorMaterial>>,
    query: Query<(&Particle, &MeshMaterial2d<ColorMaterial>)>,
) {
    for (particle, material) in query.iter() {
        if let Some(mat) = materials.get_mut(&material.0) {
            mat.color =
                constants::palette_color(particle.color).with_alpha(particle.alpha / 255.0);
        }
    }
}
