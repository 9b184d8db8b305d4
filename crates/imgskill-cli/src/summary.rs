use std::path::{Path, PathBuf};

use console::Style;
use imgskill_core::params::ConversionParameters;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    error: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            error: Style::new().red(),
            path: Style::new().underlined(),
        }
    }
}

/// Outcome of converting one input file.
pub struct ConversionReport {
    pub input: PathBuf,
    /// Output path and number of spawn lines.
    pub outcome: anyhow::Result<(PathBuf, usize)>,
}

pub fn print_parameter_summary(params: &ConversionParameters, output_dir: &Path) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Image to Skill"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(14)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output_dir.display())
    );
    println!();

    println!("  {}", s.header.apply_to("Particles"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Mode"),
        s.method.apply_to(params.mode)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Type"),
        s.method.apply_to(params.particle)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(params.particle_size)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Interval"),
        s.value.apply_to(format!("{} s", params.spawn_interval))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Spacing"),
        s.value.apply_to(params.spacing)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Opacity"),
        s.method.apply_to(params.opacity)
    );
    println!();

    println!("  {}", s.header.apply_to("Origin"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Forward"),
        s.value.apply_to(params.origin.forward)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Side"),
        s.value.apply_to(params.origin.side)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Vertical"),
        s.value.apply_to(params.origin.vertical)
    );
    println!();
}

pub fn print_results(reports: &[ConversionReport]) {
    let s = Styles::new();

    println!();
    println!("  {}", s.header.apply_to("Results"));
    for report in reports {
        match &report.outcome {
            Ok((path, spawns)) => println!(
                "    {} {} {}",
                s.path.apply_to(report.input.display()),
                s.label.apply_to(format!("-> {} spawns ->", spawns)),
                s.method.apply_to(path.display())
            ),
            Err(e) => println!(
                "    {} {}",
                s.path.apply_to(report.input.display()),
                s.error.apply_to(format!("{e:#}"))
            ),
        }
    }
    println!();
}
