use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::convert::Conversion;
use crate::error::Result;

/// Stream lines to `writer`, each terminated by `\n`. Returns the line count.
pub fn write_script<W, I>(writer: &mut W, lines: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = String>,
{
    let mut count = 0;
    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Write the document of `conversion` to `<dir>/<name>.yml`.
pub fn save_script(conversion: &Conversion, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(conversion.filename());
    let mut writer = BufWriter::new(File::create(&path)?);
    let lines = write_script(&mut writer, conversion.lines()?)?;
    info!(output = %path.display(), lines, "Skill script saved");
    Ok(path)
}
