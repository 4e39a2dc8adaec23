use clap::{Parser, Subcommand, ValueEnum};
use cx_app::{
    AppResult, ChartView, ViewPreset, ViewState, format_concentration, load_non_empty,
    load_preset, render_view, save_preset, summarize_entries,
};
use cx_chart::{AxisScale, Domain, ScaleConfig, ScaleMode};
use std::path::{Path, PathBuf};
use tracing::{Level, warn};

#[derive(Parser)]
#[command(name = "cx-cli")]
#[command(about = "complexplot CLI - filter and chart complex concentrations", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the entries in a data file
    Entries {
        /// Path to the JSON data file
        data_path: PathBuf,
    },
    /// Show sequences and concentrations of one entry
    Inspect {
        /// Path to the JSON data file
        data_path: PathBuf,
        /// Entry number (1-based, clamped into range)
        #[arg(short, long, default_value_t = 1)]
        entry: usize,
    },
    /// Filter, aggregate and compute the chart domain for one entry
    Chart {
        /// Path to the JSON data file
        data_path: PathBuf,
        /// Entry number (1-based, clamped into range)
        #[arg(short, long, default_value_t = 1)]
        entry: usize,
        #[command(flatten)]
        view: ViewArgs,
        /// Load filter and scale settings from a YAML preset (flags override it)
        #[arg(long)]
        preset: Option<PathBuf>,
        /// Reject filters with unbalanced parentheses
        #[arg(long)]
        strict: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write filter and scale settings to a YAML preset
    SavePreset {
        /// Path of the preset file to write
        preset_path: PathBuf,
        #[command(flatten)]
        view: ViewArgs,
    },
}

#[derive(clap::Args)]
struct ViewArgs {
    /// Filter text, e.g. "(analyte);(r0)+(r1);(r2_p0)"
    #[arg(short, long)]
    filter: Option<String>,
    /// Scale mode (defaults to fixed when --min or --max is given)
    #[arg(long, value_enum)]
    scale: Option<ScaleArg>,
    /// Manual axis minimum (fixed scale only)
    #[arg(long, allow_hyphen_values = true)]
    min: Option<String>,
    /// Manual axis maximum (fixed scale only)
    #[arg(long, allow_hyphen_values = true)]
    max: Option<String>,
    /// Value axis type
    #[arg(long, value_enum)]
    axis: Option<AxisArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScaleArg {
    Fit,
    Fixed,
}

#[derive(Clone, Copy, ValueEnum)]
enum AxisArg {
    Linear,
    Log,
}

#[derive(Clone, Copy, PartialEq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

impl From<ScaleArg> for ScaleMode {
    fn from(arg: ScaleArg) -> Self {
        match arg {
            ScaleArg::Fit => ScaleMode::Fit,
            ScaleArg::Fixed => ScaleMode::Fixed,
        }
    }
}

impl From<AxisArg> for AxisScale {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Linear => AxisScale::Linear,
            AxisArg::Log => AxisScale::Log,
        }
    }
}

impl ViewArgs {
    /// Apply the flags that were given on top of `base`.
    fn apply(self, mut base: ViewPreset) -> ViewPreset {
        if let Some(filter) = self.filter {
            base.filter = filter;
        }
        let manual_given = self.min.is_some() || self.max.is_some();
        if let Some(min) = self.min {
            base.scale.manual_min = min;
        }
        if let Some(max) = self.max {
            base.scale.manual_max = max;
        }
        match self.scale {
            Some(mode) => base.scale.mode = mode.into(),
            None if manual_given => base.scale.mode = ScaleMode::Fixed,
            None => {}
        }
        if let Some(axis) = self.axis {
            base.scale.axis = axis.into();
        }
        base
    }
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Entries { data_path } => cmd_entries(&data_path),
        Commands::Inspect { data_path, entry } => cmd_inspect(&data_path, entry),
        Commands::Chart {
            data_path,
            entry,
            view,
            preset,
            strict,
            format,
            output,
        } => {
            let base = match preset {
                Some(path) => load_preset(&path)?,
                None => ViewPreset::default(),
            };
            let preset = view.apply(base);
            let mut state = ViewState {
                index: entry.saturating_sub(1),
                strict,
                ..Default::default()
            };
            preset.apply_to(&mut state);
            cmd_chart(&data_path, &state, format, output.as_deref())
        }
        Commands::SavePreset { preset_path, view } => {
            cmd_save_preset(&preset_path, &view.apply(ViewPreset::default()))
        }
    }
}

fn cmd_entries(data_path: &Path) -> AppResult<()> {
    let dataset = load_non_empty(data_path)?;
    let summaries = summarize_entries(&dataset);

    println!("Entries in {}:", data_path.display());
    for s in summaries {
        println!(
            "  {:>4}: {} sequences, {} inputs, {} complexes",
            s.position, s.sequence_count, s.input_count, s.complex_count
        );
    }
    Ok(())
}

fn cmd_inspect(data_path: &Path, entry: usize) -> AppResult<()> {
    let dataset = load_non_empty(data_path)?;
    let index = entry.saturating_sub(1).min(dataset.len() - 1);
    let Some(record) = dataset.get(index) else {
        return Err(cx_app::AppError::NoEntries);
    };

    println!("Entry {} / {}", index + 1, dataset.len());

    println!("\nSequences:");
    for (name, seq) in &record.sequences {
        println!("  {}: {}", name, seq);
    }

    println!("\nInput Concentrations:");
    for (name, conc) in &record.input_concentrations {
        println!("  {}: {}", name, format_concentration(*conc));
    }

    println!("\nComplex Concentrations:");
    for (name, conc) in &record.complex_concentrations {
        println!("  {}: {}", name, format_concentration(*conc));
    }
    Ok(())
}

fn warn_ignored_bounds(scale: &ScaleConfig) {
    if scale.mode != ScaleMode::Fixed {
        return;
    }
    for (what, text) in [("min", &scale.manual_min), ("max", &scale.manual_max)] {
        if text.trim().is_empty() {
            continue;
        }
        if let Err(err) = cx_core::parse_real(text, what) {
            warn!(%err, "manual {} ignored, using the automatic value", what);
        }
    }
}

fn cmd_chart(
    data_path: &Path,
    state: &ViewState,
    format: OutputFormat,
    output: Option<&Path>,
) -> AppResult<()> {
    let dataset = load_non_empty(data_path)?;
    warn_ignored_bounds(&state.scale);

    let view = render_view(&dataset, state)?;
    let rendered = match format {
        OutputFormat::Table => render_table(&view),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&view)
                .map_err(|e| cx_app::AppError::Output(e.to_string()))?;
            json.push('\n');
            json
        }
    };

    if let Some(path) = output {
        std::fs::write(path, rendered)?;
        println!(
            "✓ Wrote {} points for entry {} to {}",
            view.points.len(),
            view.entry,
            path.display()
        );
    } else {
        print!("{}", rendered);
    }
    Ok(())
}

/// Position of `value` inside `domain` as a 0..=1 fraction of the bar width.
fn bar_fraction(value: f64, domain: &Domain, axis: AxisScale) -> f64 {
    let (lo, hi, v) = match axis {
        AxisScale::Linear => (domain.min, domain.max, value),
        AxisScale::Log => {
            if value <= 0.0 || domain.min <= 0.0 {
                return 0.0;
            }
            (domain.min.log10(), domain.max.log10(), value.log10())
        }
    };
    let span = hi - lo;
    if span <= 0.0 || !span.is_finite() {
        return 0.0;
    }
    ((v - lo) / span).clamp(0.0, 1.0)
}

fn render_table(view: &ChartView) -> String {
    let mut out = format!("Entry {} / {}\n", view.entry, view.entry_count);
    if !view.filter.trim().is_empty() {
        out.push_str(&format!("Filter: {}\n", view.filter));
    }

    if view.points.is_empty() {
        out.push_str("No quantities match the filter\n");
    } else {
        let width = 28usize;
        let label_width = view
            .points
            .iter()
            .map(|p| p.label.chars().count())
            .max()
            .unwrap_or(0);
        for p in &view.points {
            let filled = (bar_fraction(p.value, &view.domain, view.axis) * width as f64).round()
                as usize;
            out.push_str(&format!(
                "  {:<lw$}  {:>10}  {}{}\n",
                p.label,
                format_concentration(p.value),
                "#".repeat(filled),
                "-".repeat(width.saturating_sub(filled)),
                lw = label_width
            ));
        }
    }

    out.push_str(&format!(
        "Domain: [{}, {}] ({})\n",
        format_concentration(view.domain.min),
        format_concentration(view.domain.max),
        view.axis.label().to_lowercase()
    ));
    out
}

fn cmd_save_preset(preset_path: &Path, preset: &ViewPreset) -> AppResult<()> {
    save_preset(preset_path, preset)?;
    println!("✓ Preset saved to {}", preset_path.display());
    Ok(())
}
