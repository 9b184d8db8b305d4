use std::borrow::Cow;
use std::iter::FusedIterator;
use std::slice;

use tracing::info;

use crate::consts::{MAX_OPACITY, SKILLS_KEY};
use crate::error::Result;
use crate::model::{ImageModel, PixelSample};
use crate::params::{ConversionParameters, OpacityPolicy};

use super::entry::SpawnEntry;
use super::mapping::map_position;

/// Lazy, single-pass sequence of spawn entries in row-major order.
///
/// Fully transparent pixels are skipped and do not consume a time slot.
pub struct SpawnEntries<'a> {
    samples: slice::Iter<'a, PixelSample>,
    params: &'a ConversionParameters,
    height: u32,
    emitted: usize,
}

impl<'a> SpawnEntries<'a> {
    fn new(image: &'a ImageModel, params: &'a ConversionParameters) -> Self {
        Self {
            samples: image.samples().iter(),
            params,
            height: image.height(),
            emitted: 0,
        }
    }

    fn entry_for(&self, sample: &PixelSample) -> SpawnEntry {
        let p = self.params;
        let size = match p.opacity {
            OpacityPolicy::Gate => p.particle_size,
            OpacityPolicy::ScaleSize => {
                p.particle_size * sample.opacity as f64 / MAX_OPACITY as f64
            }
        };

        SpawnEntry {
            column: sample.column,
            row: sample.row,
            delay: self.emitted as f64 * p.spawn_interval,
            particle: p.particle,
            size,
            color: sample.color,
            position: map_position(
                p.mode,
                &p.origin,
                p.spacing,
                sample.column,
                sample.row,
                self.height,
            ),
        }
    }
}

impl Iterator for SpawnEntries<'_> {
    type Item = SpawnEntry;

    fn next(&mut self) -> Option<SpawnEntry> {
        let sample = self.samples.by_ref().find(|s| s.is_visible())?;
        let entry = self.entry_for(sample);
        self.emitted += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.samples.len()))
    }
}

impl FusedIterator for SpawnEntries<'_> {}

/// Lazy, single-pass sequence of document lines: the skill header followed
/// by one line per visible pixel. Lines carry no trailing newline.
pub struct ScriptLines<'a> {
    header: std::array::IntoIter<String, 2>,
    entries: SpawnEntries<'a>,
}

impl Iterator for ScriptLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.header
            .next()
            .or_else(|| self.entries.next().map(|e| e.to_string()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.entries.size_hint();
        let head = self.header.len();
        (head, upper.map(|u| u + head))
    }
}

impl FusedIterator for ScriptLines<'_> {}

/// Structured spawn entries for `image`, after validating `params`.
pub fn spawn_entries<'a>(
    image: &'a ImageModel,
    params: &'a ConversionParameters,
) -> Result<SpawnEntries<'a>> {
    params.validate()?;
    Ok(SpawnEntries::new(image, params))
}

/// Script lines for `image`, after validating `params`.
///
/// Nothing is emitted when validation fails, so callers never see a partial
/// document.
pub fn generate<'a>(
    image: &'a ImageModel,
    params: &'a ConversionParameters,
) -> Result<ScriptLines<'a>> {
    let entries = spawn_entries(image, params)?;
    info!(
        name = image.name(),
        width = image.width(),
        height = image.height(),
        mode = %params.mode,
        particle = %params.particle,
        "Generating skill script"
    );

    let header = [
        format!("{}:", skill_key(image.name())),
        format!("  {SKILLS_KEY}:"),
    ];
    Ok(ScriptLines {
        header: header.into_iter(),
        entries,
    })
}

/// Names that a YAML 1.1 loader would read as null, a boolean or a number
/// are single-quoted so the key stays a string.
fn skill_key(name: &str) -> Cow<'_, str> {
    const RESERVED: [&str; 9] = ["null", "true", "false", "yes", "no", "on", "off", "y", "n"];

    let lower = name.to_ascii_lowercase();
    let numeric = name.starts_with(|c: char| c.is_ascii_digit());
    if numeric || RESERVED.contains(&lower.as_str()) {
        Cow::Owned(format!("'{name}'"))
    } else {
        Cow::Borrowed(name)
    }
}
