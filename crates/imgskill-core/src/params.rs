use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_PARTICLE_SIZE, DEFAULT_SPACING, DEFAULT_SPAWN_INTERVAL};
use crate::error::{ImgSkillError, Result};

/// Orientation of the particle banner relative to the caster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Image columns run along the side axis; the banner faces forward.
    #[default]
    #[serde(alias = "HR", alias = "hr")]
    Horizontal,
    /// Image columns run along the forward axis; the banner faces sideways.
    #[serde(alias = "VT", alias = "vt")]
    Vertical,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "Horizontal"),
            Self::Vertical => write!(f, "Vertical"),
        }
    }
}

impl FromStr for Mode {
    type Err = ImgSkillError;

    /// Accepts the short form tags `HR`/`VT` as well as the full names.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hr" | "horizontal" => Ok(Self::Horizontal),
            "vt" | "vertical" => Ok(Self::Vertical),
            _ => Err(ImgSkillError::UnsupportedMode(s.to_string())),
        }
    }
}

/// Particle kinds the scripting host knows how to spawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleType {
    #[default]
    Flame,
    Reddust,
    Dust,
    SoulFireFlame,
    EndRod,
    Cloud,
    Smoke,
    Heart,
    Note,
    Crit,
    Enchant,
    Portal,
    Totem,
}

impl ParticleType {
    pub const ALL: [ParticleType; 13] = [
        Self::Flame,
        Self::Reddust,
        Self::Dust,
        Self::SoulFireFlame,
        Self::EndRod,
        Self::Cloud,
        Self::Smoke,
        Self::Heart,
        Self::Note,
        Self::Crit,
        Self::Enchant,
        Self::Portal,
        Self::Totem,
    ];

    /// Identifier written into the script.
    pub fn host_name(&self) -> &'static str {
        match self {
            Self::Flame => "flame",
            Self::Reddust => "reddust",
            Self::Dust => "dust",
            Self::SoulFireFlame => "soul_fire_flame",
            Self::EndRod => "end_rod",
            Self::Cloud => "cloud",
            Self::Smoke => "smoke",
            Self::Heart => "heart",
            Self::Note => "note",
            Self::Crit => "crit",
            Self::Enchant => "enchant",
            Self::Portal => "portal",
            Self::Totem => "totem",
        }
    }
}

impl fmt::Display for ParticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.host_name())
    }
}

impl FromStr for ParticleType {
    type Err = ImgSkillError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.host_name() == wanted)
            .ok_or_else(|| ImgSkillError::UnsupportedEffect(s.to_string()))
    }
}

/// How partially transparent pixels are treated.
///
/// Fully transparent pixels are always skipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpacityPolicy {
    /// Every visible pixel gets the configured particle size.
    #[default]
    Gate,
    /// Particle size is multiplied by `opacity / 255`.
    ScaleSize,
}

impl fmt::Display for OpacityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gate => write!(f, "Gate"),
            Self::ScaleSize => write!(f, "Scale Size"),
        }
    }
}

impl FromStr for OpacityPolicy {
    type Err = ImgSkillError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "gate" => Ok(Self::Gate),
            "scale_size" | "scale" => Ok(Self::ScaleSize),
            _ => Err(ImgSkillError::Validation {
                field: "opacity",
                value: s.to_string(),
                reason: "expected 'gate' or 'scale-size'",
            }),
        }
    }
}

/// Translation applied to every spawn position, relative to the caster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Offset {
    pub forward: f64,
    pub side: f64,
    pub vertical: f64,
}

impl Offset {
    pub const fn new(forward: f64, side: f64, vertical: f64) -> Self {
        Self {
            forward,
            side,
            vertical,
        }
    }
}

/// Everything the script generator needs besides the image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionParameters {
    pub mode: Mode,
    pub particle: ParticleType,
    /// Seconds between two consecutive spawns.
    pub spawn_interval: f64,
    pub particle_size: f64,
    /// Output units between adjacent pixels.
    pub spacing: f64,
    pub opacity: OpacityPolicy,
    pub origin: Offset,
}

impl Default for ConversionParameters {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            particle: ParticleType::default(),
            spawn_interval: DEFAULT_SPAWN_INTERVAL,
            particle_size: DEFAULT_PARTICLE_SIZE,
            spacing: DEFAULT_SPACING,
            opacity: OpacityPolicy::default(),
            origin: Offset::default(),
        }
    }
}

impl ConversionParameters {
    /// Check the numeric invariants. Enumerated fields are valid by construction.
    pub fn validate(&self) -> Result<()> {
        positive("spawn_interval", self.spawn_interval)?;
        positive("particle_size", self.particle_size)?;
        positive("spacing", self.spacing)?;
        finite("origin.forward", self.origin.forward)?;
        finite("origin.side", self.origin.side)?;
        finite("origin.vertical", self.origin.vertical)?;
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ImgSkillError::Validation {
            field,
            value: value.to_string(),
            reason: "must be a finite number",
        })
    }
}

fn positive(field: &'static str, value: f64) -> Result<()> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ImgSkillError::Validation {
            field,
            value: value.to_string(),
            reason: "must be greater than zero",
        })
    }
}
