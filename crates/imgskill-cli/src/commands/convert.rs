use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use imgskill_core::{convert, Conversion};
use imgskill_core::io::script_writer::{save_script, write_script};
use imgskill_core::params::{ConversionParameters, Mode, OpacityPolicy, ParticleType};
use rayon::prelude::*;
use tracing::warn;

use crate::summary::{print_parameter_summary, print_results, ConversionReport};

#[derive(Args)]
pub struct ConvertArgs {
    /// Input image files (PNG, JPEG, GIF, BMP, WebP, ...)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Parameter file (TOML); flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Orientation: HR (horizontal) or VT (vertical)
    #[arg(long)]
    pub mode: Option<Mode>,

    /// Particle type (e.g. flame, reddust, end_rod)
    #[arg(long)]
    pub particle: Option<ParticleType>,

    /// Seconds between consecutive spawns
    #[arg(long)]
    pub interval: Option<f64>,

    /// Particle size
    #[arg(long)]
    pub size: Option<f64>,

    /// Base forward offset (X)
    #[arg(long, allow_negative_numbers = true)]
    pub forward: Option<f64>,

    /// Base side offset (Y)
    #[arg(long, allow_negative_numbers = true)]
    pub side: Option<f64>,

    /// Base vertical offset (Z)
    #[arg(long, allow_negative_numbers = true)]
    pub vertical: Option<f64>,

    /// Distance between adjacent pixels
    #[arg(long)]
    pub spacing: Option<f64>,

    /// Partial opacity handling: gate or scale-size
    #[arg(long)]
    pub opacity: Option<OpacityPolicy>,

    /// Directory receiving the generated .yml files
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Write the script of a single input to stdout
    #[arg(long)]
    pub stdout: bool,
}

pub fn run(args: &ConvertArgs) -> Result<()> {
    let params = resolve_params(args)?;

    if args.stdout {
        let [file] = args.files.as_slice() else {
            anyhow::bail!("--stdout accepts exactly one input file");
        };
        let bytes = read_input(file)?;
        let conversion = convert(&bytes, &file.to_string_lossy(), &params)
            .with_context(|| format!("Failed to convert {}", file.display()))?;
        let stdout = std::io::stdout();
        write_script(&mut stdout.lock(), conversion.lines()?)?;
        return Ok(());
    }

    print_parameter_summary(&params, &args.output_dir);

    let pb = ProgressBar::new(args.files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Converting");

    let reports = convert_batch(&args.files, &params, &args.output_dir, &pb);

    pb.finish_with_message("Done");
    print_results(&reports);

    let failed = reports.iter().filter(|r| r.outcome.is_err()).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} conversion(s) failed", reports.len());
    }
    Ok(())
}

/// Convert every file, then save them under names unique within the batch.
///
/// Inputs whose names collide keep their order: the first one gets the plain
/// name, later ones get `_2`, `_3`, ... appended.
fn convert_batch(
    files: &[PathBuf],
    params: &ConversionParameters,
    output_dir: &Path,
    pb: &ProgressBar,
) -> Vec<ConversionReport> {
    let converted: Vec<Result<Conversion>> = files
        .par_iter()
        .map(|file| {
            let bytes = read_input(file)?;
            convert(&bytes, &file.to_string_lossy(), params)
                .with_context(|| format!("Failed to convert {}", file.display()))
        })
        .collect();

    let mut taken = HashSet::new();
    let named: Vec<Result<Conversion>> = converted
        .into_iter()
        .map(|outcome| {
            outcome.map(|conversion| {
                let name = unique_name(conversion.image().name(), &mut taken);
                if name == conversion.image().name() {
                    conversion
                } else {
                    conversion.renamed(&name)
                }
            })
        })
        .collect();

    files
        .par_iter()
        .zip(named)
        .map(|(file, outcome)| {
            let outcome = outcome.and_then(|conversion| save_conversion(&conversion, output_dir));
            if let Err(ref e) = outcome {
                warn!(input = %file.display(), error = %e, "Conversion failed");
            }
            pb.inc(1);
            ConversionReport {
                input: file.clone(),
                outcome,
            }
        })
        .collect()
}

/// First free name among `base`, `base_2`, `base_3`, ... compared
/// case-insensitively, recorded in `taken`.
fn unique_name(base: &str, taken: &mut HashSet<String>) -> String {
    let mut name = base.to_string();
    let mut n = 2;
    while !taken.insert(name.to_ascii_lowercase()) {
        name = format!("{base}_{n}");
        n += 1;
    }
    name
}

/// Save one conversion, returning the output path and spawn count.
fn save_conversion(conversion: &Conversion, output_dir: &Path) -> Result<(PathBuf, usize)> {
    let spawns = conversion.image().visible_count();
    let path = save_script(conversion, output_dir)
        .with_context(|| format!("Failed to write into {}", output_dir.display()))?;
    Ok((path, spawns))
}

fn read_input(file: &Path) -> Result<Vec<u8>> {
    std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))
}

fn resolve_params(args: &ConvertArgs) -> Result<ConversionParameters> {
    let mut params = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid conversion config")?
    } else {
        ConversionParameters::default()
    };

    if let Some(mode) = args.mode {
        params.mode = mode;
    }
    if let Some(particle) = args.particle {
        params.particle = particle;
    }
    if let Some(interval) = args.interval {
        params.spawn_interval = interval;
    }
    if let Some(size) = args.size {
        params.particle_size = size;
    }
    if let Some(spacing) = args.spacing {
        params.spacing = spacing;
    }
    if let Some(opacity) = args.opacity {
        params.opacity = opacity;
    }
    if let Some(forward) = args.forward {
        params.origin.forward = forward;
    }
    if let Some(side) = args.side {
        params.origin.side = side;
    }
    if let Some(vertical) = args.vertical {
        params.origin.vertical = vertical;
    }

    params.validate().context("Invalid conversion parameters")?;
    Ok(params)
}
