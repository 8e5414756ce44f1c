//! Centralised gameplay constants and the fixed color palette.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place. [`crate::config::GameConfig`] mirrors the numeric
//! values and can override them at runtime from `assets/bubbles.toml`; this
//! module remains the authoritative default source.

use bevy::prelude::*;

// ── Window ────────────────────────────────────────────────────────────────────

/// Logical window size used when the host reports no primary window
/// (headless startup). Matches the default resolution requested in `main`.
pub const FALLBACK_WIDTH: f32 = 1280.0;
pub const FALLBACK_HEIGHT: f32 = 720.0;

// ── Bubble field ──────────────────────────────────────────────────────────────

/// Number of bubbles spawned at startup.
///
/// The field size is fixed for the process lifetime: popped or escaped
/// bubbles are recycled below the bottom edge, never removed.
pub const BUBBLE_COUNT: usize = 50;

/// Bubble radius range (world units), sampled uniformly on every recycle.
pub const BUBBLE_RADIUS_MIN: f32 = 25.0;
pub const BUBBLE_RADIUS_MAX: f32 = 100.0;

/// Bubble fill alpha range, in the 0-255 domain.
pub const BUBBLE_ALPHA_MIN: f32 = 100.0;
pub const BUBBLE_ALPHA_MAX: f32 = 255.0;

/// Rise speed range (world units per frame).
pub const BUBBLE_SPEED_MIN: f32 = 0.5;
pub const BUBBLE_SPEED_MAX: f32 = 3.5;

/// Side of the decorative highlight square as a fraction of the radius.
pub const HIGHLIGHT_SIDE_RATIO: f32 = 1.0 / 3.5;

/// Offset of the highlight square's center from the bubble center, as a
/// fraction of the radius, applied on +x and +y (toward the upper right).
pub const HIGHLIGHT_OFFSET_RATIO: f32 = 0.4;

/// Alpha of the highlight square (0-255 domain). The highlight ignores the
/// bubble's own alpha.
pub const HIGHLIGHT_ALPHA: f32 = 120.0;

// ── Particles ─────────────────────────────────────────────────────────────────

/// Burst size per pop: lower bound inclusive, upper bound exclusive.
pub const BURST_COUNT_MIN: u32 = 10;
pub const BURST_COUNT_MAX: u32 = 24;

/// Particle diameter range (world units).
pub const PARTICLE_SIZE_MIN: f32 = 5.0;
pub const PARTICLE_SIZE_MAX: f32 = 15.0;

/// Particle launch speed range (world units per frame). Direction is uniform
/// over the full circle.
pub const PARTICLE_SPEED_MIN: f32 = 2.0;
pub const PARTICLE_SPEED_MAX: f32 = 5.0;

/// Particle lifespan range in whole frames.
pub const PARTICLE_LIFESPAN_MIN: i32 = 30;
pub const PARTICLE_LIFESPAN_MAX: i32 = 60;

/// Downward acceleration added to a particle's vertical velocity each frame.
///
/// Higher values pull bursts into a visible arc; 0.05 reads as a gentle
/// settle over a typical 30-60 frame lifespan.
pub const PARTICLE_GRAVITY: f32 = 0.05;

/// Per-frame velocity retention factor applied to both axes.
///
/// Must stay in (0, 1]; at 0.98 a burst loses roughly half its launch speed
/// over 35 frames.
pub const PARTICLE_DRAG: f32 = 0.98;

// ── HUD ───────────────────────────────────────────────────────────────────────

/// Fixed identifier label drawn at the top-left corner.
pub const HUD_LABEL: &str = "414730142";

pub const HUD_FONT_SIZE: f32 = 32.0;

/// Distance (px) between the HUD text blocks and the window corners.
pub const HUD_MARGIN: f32 = 10.0;

// ── Audio ─────────────────────────────────────────────────────────────────────

/// Pop sound asset, relative to the assets root. A missing file is non-fatal:
/// the game simply runs silently.
pub const POP_SOUND_PATH: &str = "sounds/pop.ogg";

pub const POP_VOLUME: f32 = 0.5;

// ── Palette ───────────────────────────────────────────────────────────────────

pub const PALETTE_LEN: usize = 9;

/// Index into [`palette`] of the color worth +1 on pop (the mint green).
/// Popping any other color costs 1 point.
pub const BONUS_COLOR_IX: usize = 4;

/// The fixed nine-color pastel palette bubbles draw from.
pub fn palette() -> [Color; PALETTE_LEN] {
    [
        Color::srgb_u8(0xea, 0xe4, 0xe9),
        Color::srgb_u8(0xff, 0xf1, 0xe6),
        Color::srgb_u8(0xfd, 0xe2, 0xe4),
        Color::srgb_u8(0xfa, 0xd2, 0xe1),
        Color::srgb_u8(0xe2, 0xec, 0xe9), // bonus: mint green
        Color::srgb_u8(0xbe, 0xe1, 0xe6),
        Color::srgb_u8(0xf0, 0xef, 0xeb),
        Color::srgb_u8(0xdf, 0xe7, 0xfd),
        Color::srgb_u8(0xcd, 0xda, 0xfd),
    ]
}

/// Color of palette entry `ix`. Wraps, so any index is safe to pass.
pub fn palette_color(ix: usize) -> Color {
    palette()[ix % PALETTE_LEN]
}

/// Off-white canvas background, repainted every frame by the clear pass.
pub fn background_color() -> Color {
    Color::srgb_u8(0xf0, 0xf0, 0xf0)
}

/// Light gray shared by both HUD text blocks.
pub fn hud_text_color() -> Color {
    Color::srgb_u8(200, 200, 200)
}
