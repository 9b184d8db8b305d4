use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImgSkillError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode image '{name}': {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid image dimensions: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Invalid parameter '{field}' = '{value}': {reason}")]
    Validation {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Unsupported mode: {0}")]
    UnsupportedMode(String),

    #[error("Unsupported particle type: {0}")]
    UnsupportedEffect(String),
}

impl ImgSkillError {
    /// True for failures caused by the image bytes themselves.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::EmptyImage { .. })
    }
}

pub type Result<T> = std::result::Result<T, ImgSkillError>;
