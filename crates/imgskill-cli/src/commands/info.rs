use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use imgskill_core::io::image_io::load;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let model =
        load(&args.file).with_context(|| format!("Failed to load {}", args.file.display()))?;

    let total = model.samples().len();
    let visible = model.visible_count();

    println!("File:        {}", args.file.display());
    println!("Name:        {}", model.name());
    println!("Dimensions:  {}x{}", model.width(), model.height());
    println!(
        "Visible:     {} of {} pixels ({:.1}%)",
        visible,
        total,
        visible as f64 / total as f64 * 100.0
    );
    println!("Output:      {}", model.output_filename());

    Ok(())
}
