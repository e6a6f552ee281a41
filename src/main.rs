use clap::Parser;
use color_eyre::Result;
use std::io::{self, Write};
use std::path::PathBuf;

use tally::clipboard::copy_to_clipboard;
use tally::config::{self, ConfigResult, OutputFormat};
use tally::export::{self, View};
use tally::input::InputReader;
use tally::{TextAnalyzer, TextReport, render};

/// Word, letter and character statistics for text
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Word, letter and character statistics for text, with reading time estimates"
)]
struct Args {
    /// Input text file (if not provided, reads from stdin)
    input: Option<PathBuf>,

    /// Which statistics to show and copy
    #[arg(long, value_enum, default_value_t = View::All)]
    view: View,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Number of most frequent words to list
    #[arg(long, value_name = "N")]
    top: Option<usize>,

    /// Copy a plain-text summary to the clipboard
    #[arg(long)]
    copy: bool,

    /// Read configuration from PATH instead of ~/.config/tally/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Writes to /tmp/tally-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    let args = Args::parse();

    let ConfigResult { config, warning } = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    if let Some(warning) = warning {
        eprintln!("Warning: {}", warning);
    }

    let mut options = config.analysis.analyzer_options();
    if let Some(top) = args.top {
        options.top_words = top;
    }

    let text = InputReader::read_text(args.input.as_deref(), config.analysis.max_input_chars)?;
    let report = TextAnalyzer::new(options).analyze(&text);

    let format = args.format.unwrap_or(config.output.format);
    write_report(&report, format, args.view)?;

    if args.copy {
        let summary = export::summary(&report, args.view);
        match copy_to_clipboard(&summary, config.clipboard.backend) {
            Ok(()) => eprintln!("Statistics copied to clipboard!"),
            Err(e) => eprintln!("Failed to copy statistics: {}", e),
        }
    }

    #[cfg(debug_assertions)]
    log::debug!("=== TALLY DEBUG SESSION ENDED ===");

    Ok(())
}

fn write_report(report: &TextReport, format: OutputFormat, view: View) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => render::write_text(&mut out, report, view)?,
        OutputFormat::Json => render::write_json(&mut out, report)?,
    }
    out.flush()
}

/// Route debug logging to a file; logging stays off if it cannot be opened
#[cfg(debug_assertions)]
fn init_debug_log() {
    let log_file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/tally-debug.log")
    {
        Ok(file) => file,
        Err(_) => return,
    };

    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .try_init();

    log::debug!("=== TALLY DEBUG SESSION STARTED ===");
}
