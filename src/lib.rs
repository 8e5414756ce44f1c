//! Bubblepop: a click-to-pop bubble field.
//!
//! Rising pastel bubbles drift up the window; clicking one pops it into a
//! particle burst, plays a pop sound, and moves the score (+1 for the bonus
//! color, -1 for everything else).

pub mod audio;
pub mod bubble;
pub mod config;
pub mod constants;
pub mod error;
pub mod graphics;
pub mod hud;
pub mod input;
pub mod particle;
pub mod simulation;
