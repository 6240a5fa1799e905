use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use chordstaff::{RenderConfig, RenderSession};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

fn main() -> chordstaff::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Render { payload, output } => run_render(&payload, output.as_deref(), config),
        Commands::Stream { out_dir } => run_stream(out_dir.as_deref(), config),
    }
}

fn load_config(path: Option<&Path>) -> chordstaff::Result<RenderConfig> {
    match path {
        Some(path) => {
            tracing::info!(?path, "loading config");
            RenderConfig::from_json_file(path)
        }
        None => Ok(RenderConfig::default()),
    }
}

fn run_render(payload: &Path, output: Option<&Path>, config: RenderConfig) -> chordstaff::Result<()> {
    let json = std::fs::read_to_string(payload)?;
    let mut session = RenderSession::svg(config);
    let report = session.on_update(&json);
    for err in &report.skipped {
        tracing::warn!(error = %err, "chord skipped");
    }
    tracing::info!(
        chords = report.chords_drawn,
        symbols = report.symbols_drawn,
        empty = report.empty,
        "rendered"
    );

    let svg = session.to_svg();
    match output {
        Some(path) => std::fs::write(path, svg)?,
        None => std::io::stdout().write_all(svg.as_bytes())?,
    }
    Ok(())
}

/// One payload per stdin line, one repaint per payload.
fn run_stream(out_dir: Option<&Path>, config: RenderConfig) -> chordstaff::Result<()> {
    if let Some(dir) = out_dir {
        std::fs::create_dir_all(dir)?;
    }

    let mut session = RenderSession::svg(config);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    for (n, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let report = session.on_update(&line);
        tracing::info!(update = n, chords = report.chords_drawn, empty = report.empty, "update rendered");

        let svg = session.to_svg();
        match out_dir {
            Some(dir) => {
                let path = dir.join(format!("render-{n:04}.svg"));
                std::fs::write(&path, svg)?;
            }
            None => {
                stdout.write_all(svg.as_bytes())?;
                stdout.flush()?;
            }
        }
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Render chord payloads onto a staff as SVG", long_about = None)]
struct Cli {
    /// JSON render configuration; defaults are used for missing fields.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a single payload file.
    Render {
        /// Path to the JSON payload.
        payload: PathBuf,
        /// Where to write the SVG; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Read newline-delimited payloads from stdin, repainting once per line.
    Stream {
        /// Write each render to DIR/render-NNNN.svg instead of stdout.
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}
