use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(name = "contribemblem", version)]
struct Cli {
    /// Log render stages at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single badge as a PNG.
    Render(RenderArgs),
    /// Render every badge listed in a manifest, in parallel.
    Batch(BatchArgs),
}

#[derive(Parser, Debug)]
struct FontArgs {
    /// Bold typeface (score and stat values).
    #[arg(long)]
    font_bold: PathBuf,

    /// Medium typeface (name and stat labels).
    #[arg(long)]
    font_medium: PathBuf,

    /// Theme and layout overrides (JSON).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Background artwork (JPEG or PNG).
    #[arg(long)]
    background: PathBuf,

    /// Stats JSON.
    #[arg(long)]
    stats: PathBuf,

    /// Display name; omitted from the badge when empty.
    #[arg(long, default_value = "")]
    name: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    fonts: FontArgs,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Manifest JSON: a list of `{background, stats | counters, name, out}` entries. Relative
    /// paths resolve against the manifest's directory.
    #[arg(long)]
    manifest: PathBuf,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,

    #[command(flatten)]
    fonts: FontArgs,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct ManifestEntry {
    background: PathBuf,
    #[serde(default)]
    stats: Option<PathBuf>,
    #[serde(default)]
    counters: Option<contribemblem::StatRecord>,
    #[serde(default)]
    name: Option<String>,
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Batch(args) => cmd_batch(args),
    }
}

fn load_shared(
    args: &FontArgs,
) -> anyhow::Result<(contribemblem::FontSources, contribemblem::BadgeConfig)> {
    let sources = contribemblem::FontSources::from_paths(&args.font_bold, &args.font_medium)?;
    let config = match &args.config {
        Some(p) => contribemblem::BadgeConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => contribemblem::BadgeConfig::default(),
    };
    Ok((sources, config))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (sources, config) = load_shared(&args.fonts)?;
    let stats = contribemblem::StatsFile::from_path(&args.stats)
        .with_context(|| format!("load stats '{}'", args.stats.display()))?
        .into_record(args.name);

    let job = contribemblem::BadgeJob {
        background: args.background,
        stats,
        out: args.out,
    };
    contribemblem::render_to_file(&job, &sources, &config)
        .with_context(|| format!("render badge '{}'", job.out.display()))?;

    eprintln!("wrote {}", job.out.display());
    Ok(())
}

fn read_manifest(path: &Path) -> anyhow::Result<Vec<contribemblem::BadgeJob>> {
    let f = File::open(path).with_context(|| format!("open manifest '{}'", path.display()))?;
    let entries: Vec<ManifestEntry> =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse manifest JSON")?;
    let root = path.parent().unwrap_or_else(|| Path::new("."));

    entries
        .into_iter()
        .enumerate()
        .map(|(i, e)| {
            let name = e.name.unwrap_or_default();
            let stats = match (e.stats, e.counters) {
                (Some(p), None) => {
                    let p = root.join(p);
                    contribemblem::StatsFile::from_path(&p)
                        .with_context(|| format!("entry {i}: load stats '{}'", p.display()))?
                        .into_record(name)
                }
                (None, Some(counters)) => contribemblem::StatRecord {
                    display_name: name,
                    ..counters
                },
                _ => anyhow::bail!("entry {i}: exactly one of 'stats' or 'counters' is required"),
            };
            Ok(contribemblem::BadgeJob {
                background: root.join(e.background),
                stats,
                out: root.join(e.out),
            })
        })
        .collect()
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let jobs = read_manifest(&args.manifest)?;
    let (sources, config) = load_shared(&args.fonts)?;

    let results = contribemblem::render_batch(&jobs, &sources, &config, args.threads)?;
    let mut failed = 0usize;
    for (job, res) in jobs.iter().zip(&results) {
        match res {
            Ok(()) => eprintln!("wrote {}", job.out.display()),
            Err(e) => {
                failed += 1;
                eprintln!("failed {}: {e}", job.out.display());
            }
        }
    }
    if failed > 0 {
        anyhow::bail!("{failed} of {} badges failed", jobs.len());
    }
    Ok(())
}
