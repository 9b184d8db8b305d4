use tracing::info;

use crate::error::Result;
use crate::io::image_io;
use crate::model::ImageModel;
use crate::params::ConversionParameters;
use crate::script::{generate, ScriptLines};

/// A validated, decoded conversion ready to be rendered.
#[derive(Clone, Debug)]
pub struct Conversion {
    image: ImageModel,
    params: ConversionParameters,
}

impl Conversion {
    pub fn image(&self) -> &ImageModel {
        &self.image
    }

    /// Rename the skill, and with it the output file. See [`ImageModel::renamed`].
    pub fn renamed(self, name: &str) -> Self {
        Self {
            image: self.image.renamed(name),
            params: self.params,
        }
    }

    /// Suggested output filename, `<name>.yml`.
    pub fn filename(&self) -> String {
        self.image.output_filename()
    }

    /// A fresh pass over the document lines.
    pub fn lines(&self) -> Result<ScriptLines<'_>> {
        generate(&self.image, &self.params)
    }
}

/// Decode `bytes` and pair the result with `params`.
///
/// Parameters are validated before decoding, so a bad parameter set is
/// reported even when the image is also broken.
pub fn convert(
    bytes: &[u8],
    source_name: &str,
    params: &ConversionParameters,
) -> Result<Conversion> {
    params.validate()?;
    let image = image_io::build(bytes, source_name)?;
    info!(
        name = image.name(),
        visible = image.visible_count(),
        total = image.samples().len(),
        "Image ready for conversion"
    );
    Ok(Conversion {
        image,
        params: params.clone(),
    })
}
