use std::path::Path;

use tracing::debug;

use crate::consts::FALLBACK_NAME_PREFIX;
use crate::error::{ImgSkillError, Result};
use crate::model::ImageModel;

/// Decode raw image bytes into an [`ImageModel`].
///
/// The format is sniffed from the bytes; `source_name` only names the model.
/// Images without an alpha channel come out fully opaque.
pub fn build(bytes: &[u8], source_name: &str) -> Result<ImageModel> {
    let name = model_name(source_name, bytes);

    let img = image::load_from_memory(bytes).map_err(|source| ImgSkillError::Decode {
        name: source_name.to_string(),
        source,
    })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    debug!(name = %name, width, height, "Decoded image");

    ImageModel::from_rgba(name, width, height, rgba.as_raw())
}

/// Read an image file and decode it, naming the model after the file.
pub fn load(path: &Path) -> Result<ImageModel> {
    let bytes = std::fs::read(path)?;
    build(&bytes, &path.to_string_lossy())
}

/// Sanitized model name for `source_name`, falling back to a name derived
/// from the content when nothing usable is left.
pub fn model_name(source_name: &str, bytes: &[u8]) -> String {
    let name = sanitize_name(source_name);
    if name.is_empty() {
        format!("{}_{:016x}", FALLBACK_NAME_PREFIX, fnv1a(bytes))
    } else {
        name
    }
}

/// Strip directories and the extension, then keep only `[A-Za-z0-9_-]`.
///
/// Whitespace becomes `_`; separators at either end are trimmed.
pub fn sanitize_name(source_name: &str) -> String {
    let base = source_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(source_name);
    let stem = match base.rfind('.') {
        Some(0) | None => base,
        Some(dot) => &base[..dot],
    };

    let cleaned: String = stem
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                Some(c)
            } else if c.is_whitespace() {
                Some('_')
            } else {
                None
            }
        })
        .collect();

    cleaned.trim_matches(['_', '-']).to_string()
}

fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    bytes
        .iter()
        .fold(OFFSET_BASIS, |hash, &b| (hash ^ b as u64).wrapping_mul(PRIME))
}
