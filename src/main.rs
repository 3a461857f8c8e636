use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tag_extractor::{render_summary, ExtractorConfig, Result, TagSession};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tag-extractor", about = "Extract word-frequency tags from a text file")]
struct Cli {
    /// Text file to extract tags from
    #[arg(long)]
    text: PathBuf,

    /// Stop words file, one word per line
    #[arg(long)]
    stop_words: PathBuf,

    /// Also drop the bundled stop words for this language (e.g. en, de)
    #[arg(long)]
    language: Option<String>,

    /// Number of entries in the top tags listing
    #[arg(long)]
    top_n: Option<usize>,

    /// Lines between progress updates
    #[arg(long)]
    progress_interval: Option<usize>,

    /// Path to config file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save the full report to this file
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Don't draw the progress indicator
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tag_extractor=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<ExtractorConfig> {
    let mut config = match &cli.config {
        Some(path) => ExtractorConfig::from_json_file(path)?,
        None => ExtractorConfig::default(),
    };
    if let Some(top_n) = cli.top_n {
        config.top_n = top_n;
    }
    if let Some(interval) = cli.progress_interval {
        config.progress_interval = interval;
    }
    if let Some(language) = &cli.language {
        config.language = Some(language.clone());
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let top_n = config.top_n;

    let mut session = TagSession::new(config);
    session.select_text(cli.text.clone());
    session.select_stop_words(cli.stop_words.clone());

    let quiet = cli.quiet;
    let mut shown = None;
    let mut progress = |p: u8| {
        if quiet || shown == Some(p) {
            return;
        }
        shown = Some(p);
        eprint!("\rprogress: {p:>3}%");
        if p == 100 {
            eprintln!();
        }
        let _ = io::stderr().flush();
    };

    let extraction = session.extract(&mut progress)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let _ = write!(out, "{}", render_summary(&extraction.ranked, top_n));
    let _ = writeln!(
        out,
        "\nExtraction complete. Found {} unique tags (after stop-word filtering).",
        extraction.freq.len()
    );

    if let Some(path) = &cli.output {
        session.save(path)?;
        let _ = writeln!(out, "Saved successfully to: {}", path.display());
    }
    Ok(())
}
