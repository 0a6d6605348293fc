use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "tessella", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Stitch a directory of tiles into a single atlas PNG.
    Stitch(StitchArgs),
    /// Convert TARGA sources into PNG intermediates without stitching.
    Convert(ConvertArgs),
}

#[derive(Parser, Debug)]
struct StitchArgs {
    /// Pipeline config JSON; replaces the individual flags below.
    #[arg(long, conflicts_with_all = ["dir", "out"])]
    config: Option<PathBuf>,

    /// Source directory scanned for tiles.
    #[arg(long, required_unless_present = "config")]
    dir: Option<PathBuf>,

    /// Output atlas path.
    #[arg(long, required_unless_present = "config")]
    out: Option<PathBuf>,

    /// Source format.
    #[arg(long, value_enum, default_value_t = FormatArg::Png)]
    format: FormatArg,

    /// Layout strategy.
    #[arg(long, value_enum, default_value_t = StrategyArg::FixedGrid)]
    strategy: StrategyArg,

    /// Fixed-grid column count.
    #[arg(long, default_value_t = 8)]
    columns: u32,

    /// Packed-grid padding in pixels.
    #[arg(long, default_value_t = 0)]
    padding: u32,

    /// Background color (#RRGGBB or #RRGGBBAA).
    #[arg(long, default_value = "#000000")]
    background: String,

    /// Scratch directory for TARGA intermediates.
    #[arg(long, default_value = "temp_images")]
    scratch_dir: PathBuf,

    /// Worker threads for per-file stages.
    #[arg(long)]
    threads: Option<usize>,

    /// Abort on the first undecodable file instead of excluding it.
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Fail instead of overwriting an existing output file.
    #[arg(long, default_value_t = false)]
    no_overwrite: bool,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Directory scanned for .tga files.
    #[arg(long)]
    dir: PathBuf,

    /// Directory receiving the converted .png files.
    #[arg(long, default_value = "temp_images")]
    scratch_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Png,
    Tga,
}

impl From<FormatArg> for tessella::SourceFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Png => Self::Png,
            FormatArg::Tga => Self::Tga,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    FixedGrid,
    PackedGrid,
}

impl From<StrategyArg> for tessella::LayoutStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::FixedGrid => Self::FixedGrid,
            StrategyArg::PackedGrid => Self::PackedGrid,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Stitch(args) => cmd_stitch(args),
        Command::Convert(args) => cmd_convert(args),
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_stitch(args: StitchArgs) -> anyhow::Result<()> {
    let config = match args.config {
        Some(path) => tessella::PipelineConfig::from_path(&path)?,
        None => {
            let source_dir = args.dir.context("--dir is required unless --config is given")?;
            let out_path = args.out.context("--out is required unless --config is given")?;
            tessella::PipelineConfig {
                source_dir,
                out_path,
                source_format: args.format.into(),
                background: tessella::Rgba8::from_hex(&args.background)?,
                strategy: args.strategy.into(),
                fixed_columns: args.columns,
                padding_px: args.padding,
                scratch_dir: Some(args.scratch_dir),
                decode_policy: if args.strict {
                    tessella::DecodePolicy::Fail
                } else {
                    tessella::DecodePolicy::Skip
                },
                threads: args.threads,
                overwrite: !args.no_overwrite,
            }
        }
    };

    let summary = tessella::run(&config)?;
    for skip in &summary.skipped {
        eprintln!("skipped {}: {}", skip.path.display(), skip.reason);
    }
    eprintln!(
        "stitched {} of {} tiles into a {}x{} atlas",
        summary.placed, summary.scanned, summary.canvas.width, summary.canvas.height
    );
    eprintln!("wrote {}", summary.out_path.display());
    Ok(())
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let sources = tessella::scan_dir(&args.dir, tessella::SourceFormat::Tga)?;
    if sources.is_empty() {
        anyhow::bail!("no .tga files found in '{}'", args.dir.display());
    }

    let (converted, skipped) = tessella::convert_all(&sources, &args.scratch_dir)?;
    for skip in &skipped {
        eprintln!("skipped {}: {}", skip.path.display(), skip.reason);
    }
    if converted.is_empty() {
        anyhow::bail!("no files were successfully converted");
    }

    eprintln!(
        "converted {} of {} files into {}",
        converted.len(),
        sources.len(),
        args.scratch_dir.display()
    );
    Ok(())
}
