use std::fmt;

use crate::consts::{PARTICLE_AMOUNT, PARTICLE_SPEED, SPAWN_TARGETER};
use crate::model::Rgb;
use crate::params::ParticleType;

use super::mapping::Position;

/// A single particle spawn, derived from one visible pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnEntry {
    /// Source cell.
    pub column: u32,
    pub row: u32,
    /// Seconds after the skill starts.
    pub delay: f64,
    pub particle: ParticleType,
    pub size: f64,
    pub color: Rgb,
    pub position: Position,
}

impl fmt::Display for SpawnEntry {
    /// One list item of the `Skills` sequence, without trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  - effect:particles{{p={};a={};s={};size={};color={};fo={};so={};yo={};delay={}}} {}",
            self.particle,
            PARTICLE_AMOUNT,
            PARTICLE_SPEED,
            format_number(self.size),
            self.color,
            format_number(self.position.forward),
            format_number(self.position.side),
            format_number(self.position.vertical),
            format_number(self.delay),
            SPAWN_TARGETER,
        )
    }
}

/// Render a number for the script: shortest round-trip decimal, with a
/// trailing `.0` on integral values and no negative zero.
pub fn format_number(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
