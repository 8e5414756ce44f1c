//! HUD overlay: the fixed identifier label and the live score readout.
//!
//! Both blocks are Bevy UI nodes spawned once at startup. The score text is
//! refreshed only when the [`Score`] resource changes; the label never does.

use crate::config::GameConfig;
use crate::constants;
use crate::simulation::Score;
use bevy::prelude::*;

// ── Component markers ─────────────────────────────────────────────────────────

/// Marker for the top-left identifier label node.
#[derive(Component)]
pub struct HudLabel;

/// Marker for the top-right score node.
#[derive(Component)]
pub struct HudScoreDisplay;

// ── Startup ───────────────────────────────────────────────────────────────────

/// Spawn both HUD text nodes.
pub fn setup_hud_overlay(mut commands: Commands, config: Res<GameConfig>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(constants::HUD_MARGIN),
                top: Val::Px(constants::HUD_MARGIN),
                ..default()
            },
            HudLabel,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(constants::HUD_LABEL),
                TextFont {
                    font_size: config.hud_font_size,
                    ..default()
                },
                TextColor(constants::hud_text_color()),
            ));
        });

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(constants::HUD_MARGIN),
                top: Val::Px(constants::HUD_MARGIN),
                ..default()
            },
            HudScoreDisplay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Score: 0"),
                TextFont {
                    font_size: config.hud_font_size,
                    ..default()
                },
                TextColor(constants::hud_text_color()),
            ));
        });
}

// ── Update ────────────────────────────────────────────────────────────────────

/// Refresh the score readout whenever the score resource changes.
pub fn hud_score_display_system(
    score: Res<Score>,
    parent_query: Query<&Children, With<HudScoreDisplay>>,
    mut text_query: Query<&mut Text>,
) {
    if !score.is_changed() {
        return;
    }
    for children in parent_query.iter() {
        for child in children.iter() {
            if let Ok(mut text) = text_query.get_mut(child) {
                *text = Text::new(format!(
                    "Score: {}  ({} popped)",
                    score.points, score.popped
                ));
            }
        }
    }
}
