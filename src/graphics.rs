//! Camera setup and the shared 2D shape meshes.
//!
//! Every bubble and particle renders from one of two unit meshes held in
//! [`ShapeAssets`], scaled per entity through its `Transform`. Building the
//! meshes once at startup avoids per-entity mesh allocation; only materials
//! are per-entity (each fill needs its own fadeable alpha).

use bevy::prelude::*;
use bevy_asset::RenderAssetUsages;
use bevy_mesh::{Indices, PrimitiveTopology};

use crate::constants::HIGHLIGHT_ALPHA;

/// Shared unit meshes plus the one material every bubble highlight reuses.
#[derive(Resource)]
pub struct ShapeAssets {
    /// Unit-radius filled circle.
    pub circle: Handle<Mesh>,
    /// Unit-side filled square, centered on the origin.
    pub square: Handle<Mesh>,
    /// Semi-transparent white shared by every highlight square.
    pub highlight: Handle<ColorMaterial>,
}

/// Setup camera for 2D rendering.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Create the shared circle/square meshes and the highlight material.
pub fn setup_shape_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let circle = meshes.add(circle_mesh(1.0, 48));
    let square = meshes.add(quad_mesh(1.0));
    let highlight = materials.add(ColorMaterial::from_color(Color::srgba(
        1.0,
        1.0,
        1.0,
        HIGHLIGHT_ALPHA / 255.0,
    )));
    commands.insert_resource(ShapeAssets {
        circle,
        square,
        highlight,
    });
}

// ── Mesh helpers ──────────────────────────────────────────────────────────────

/// Build a filled circle approximated by an `n`-sided regular polygon,
/// triangle-fanned from the centre vertex: `(0, i, i+1 mod n)`.
fn circle_mesh(radius: f32, sides: u32) -> Mesh {
    let n = sides as usize;
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(n + 1);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(n + 1);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(n + 1);

    // Centre vertex.
    positions.push([0.0, 0.0, 0.0]);
    normals.push([0.0, 0.0, 1.0]);
    uvs.push([0.5, 0.5]);

    for i in 0..n {
        let angle = std::f32::consts::TAU * i as f32 / n as f32;
        let (sin, cos) = angle.sin_cos();
        positions.push([radius * cos, radius * sin, 0.0]);
        normals.push([0.0, 0.0, 1.0]);
        uvs.push([cos * 0.5 + 0.5, sin * 0.5 + 0.5]);
    }

    let mut indices: Vec<u32> = Vec::with_capacity(n * 3);
    for i in 0..sides {
        indices.extend_from_slice(&[0, i + 1, (i + 1) % sides + 1]);
    }

    build_mesh(positions, normals, uvs, indices)
}

/// Axis-aligned filled square of the given side, centred on the origin.
fn quad_mesh(side: f32) -> Mesh {
    let h = side / 2.0;
    let positions = vec![[-h, -h, 0.0], [h, -h, 0.0], [h, h, 0.0], [-h, h, 0.0]];
    let normals = vec![[0.0, 0.0, 1.0]; 4];
    let uvs = vec![[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];
    build_mesh(positions, normals, uvs, vec![0, 1, 2, 0, 2, 3])
}

fn build_mesh(
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    indices: Vec<u32>,
) -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}
