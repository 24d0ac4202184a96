use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use deckgen::{BuildConfig, IconDescriptor, Theme, diagram};

#[derive(Parser, Debug)]
#[command(name = "deckgen", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate assets and write the full deck.
    Build(BuildArgs),
    /// Rasterize a single icon as a square PNG.
    Icon(IconArgs),
    /// Compose and rasterize one built-in diagram.
    Diagram(DiagramArgs),
    /// List the symbolic icon ids the rasterizer knows.
    Icons,
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// JSON build config. Missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output container path (overrides the config).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Worker threads (overrides the config).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct IconArgs {
    /// Symbolic glyph id, e.g. `qrCode`.
    #[arg(long)]
    id: String,

    /// Fill color as 6-digit hex, with or without `#`.
    #[arg(long, default_value = "002452")]
    color: String,

    /// Edge length in pixels.
    #[arg(long, default_value_t = 64, allow_negative_numbers = true)]
    size: i64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct DiagramArgs {
    /// Which built-in diagram to draw.
    #[arg(long, value_enum)]
    kind: DiagramKind,

    /// Output PNG path. A sidecar SVG, when requested, lands next to it.
    #[arg(long)]
    out: PathBuf,

    /// Pixel scale.
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Also write the vector document.
    #[arg(long)]
    svg: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DiagramKind {
    Architecture,
    ProcessFlow,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Build(args) => cmd_build(args),
        Command::Icon(args) => cmd_icon(args),
        Command::Diagram(args) => cmd_diagram(args),
        Command::Icons => {
            for id in deckgen::known_icon_ids() {
                println!("{id}");
            }
            Ok(())
        }
    }
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => BuildConfig::load(path)?,
        None => BuildConfig::default(),
    };
    if let Some(out) = args.out {
        config.output = out;
    }
    if args.threads.is_some() {
        config.threads = args.threads;
    }

    let report = deckgen::build(&config)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("serialize build report")?
    );
    Ok(())
}

/// Split `out` into the directory and file name the asset writers expect.
fn split_out(out: &std::path::Path) -> anyhow::Result<(PathBuf, String)> {
    let name = out
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("output path '{}' has no file name", out.display()))?
        .to_string();
    let dir = match out.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, name))
}

fn cmd_icon(args: IconArgs) -> anyhow::Result<()> {
    let (dir, name) = split_out(&args.out)?;
    let desc = IconDescriptor::new(args.id, &args.color, args.size, name)?;
    let asset = deckgen::rasterize_icon(&desc, &dir)?;
    eprintln!(
        "wrote {} ({}x{})",
        asset.path.display(),
        asset.width,
        asset.height
    );
    Ok(())
}

fn cmd_diagram(args: DiagramArgs) -> anyhow::Result<()> {
    let (dir, file) = split_out(&args.out)?;
    let name = file
        .strip_suffix(".png")
        .with_context(|| format!("diagram output '{}' must end in .png", args.out.display()))?;

    let theme = Theme::default();
    let spec = match args.kind {
        DiagramKind::Architecture => diagram::presets::architecture(),
        DiagramKind::ProcessFlow => diagram::presets::process_flow(&theme),
    }
    .with_scale(args.scale);

    let asset = diagram::render_diagram(&spec, &theme, &dir, name)?;
    eprintln!(
        "wrote {} ({}x{})",
        asset.path.display(),
        asset.width,
        asset.height
    );
    if args.svg {
        let path = diagram::write_svg_sidecar(&spec, &theme, &dir, name)?;
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}
