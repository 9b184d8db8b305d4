/// File extension of generated skill documents.
pub const SCRIPT_EXTENSION: &str = "yml";

/// Key under the skill name holding the list of mechanic lines.
pub const SKILLS_KEY: &str = "Skills";

/// Targeter appended to every spawn line. Offsets are relative to the caster.
pub const SPAWN_TARGETER: &str = "@self";

/// Particles spawned per line.
pub const PARTICLE_AMOUNT: u32 = 1;

/// Particle speed. Zero keeps each particle on its pixel.
pub const PARTICLE_SPEED: u32 = 0;

/// Prefix of the generated name used when a source filename sanitizes to nothing.
pub const FALLBACK_NAME_PREFIX: &str = "image";

/// Default seconds between two consecutive spawns.
pub const DEFAULT_SPAWN_INTERVAL: f64 = 1.0;

/// Default particle size.
pub const DEFAULT_PARTICLE_SIZE: f64 = 1.0;

/// Default output units between adjacent pixels.
pub const DEFAULT_SPACING: f64 = 1.0;

/// Largest channel value, used to normalise opacity.
pub const MAX_OPACITY: u8 = 255;
