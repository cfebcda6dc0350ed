// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use eml_wordscan::utils::logging::{format_info, format_step, format_success, format_warning};
use eml_wordscan::config::DEFAULT_CONFIG_PATH;
use eml_wordscan::{
    Config, LogObserver, ProgressTracker, ScanObserver, ScanOrchestrator, WordListLoader,
};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "eml_wordscan")]
#[command(version = "0.1.0")]
#[command(about = "Scan .eml messages for co-occurring word-list terms", long_about = None)]
struct Cli {
    /// Settings file; `config/default.toml` is used when present
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a directory tree and write the reports (default)
    Scan(ScanArgs),

    /// Load the word list strictly and print the normalized groups
    Words {
        #[arg(short, long, value_name = "FILE")]
        word_list: Option<PathBuf>,
    },
}

#[derive(Args, Default)]
struct ScanArgs {
    /// Directory to walk for message files
    #[arg(short, long, value_name = "DIR")]
    root: Option<PathBuf>,

    #[arg(short, long, value_name = "FILE")]
    word_list: Option<PathBuf>,

    #[arg(long, value_name = "FILE")]
    combinations_report: Option<PathBuf>,

    #[arg(long, value_name = "FILE")]
    strings_report: Option<PathBuf>,

    #[arg(long, value_name = "FILE")]
    failures_report: Option<PathBuf>,

    /// Also export the full results as JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    #[arg(long)]
    no_progress: bool,

    #[arg(long, value_name = "NUM")]
    limit: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    eml_wordscan::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    let config = match cli.config.as_deref() {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Config::load(Some(path))
                .with_context(|| format!("Failed to load configuration {}", path.display()))?
        }
        None => {
            info!("Loading configuration from: {}", DEFAULT_CONFIG_PATH);
            Config::load(None).unwrap_or_else(|e| {
                warn!("Falling back to built-in defaults: {}", e);
                Config::default_config()
            })
        }
    };

    match cli.command.unwrap_or_else(|| Commands::Scan(ScanArgs::default())) {
        Commands::Scan(args) => cmd_scan(config, args, cli.color),
        Commands::Words { word_list } => cmd_words(&config, word_list),
    }
}

fn cmd_scan(mut config: Config, args: ScanArgs, color: bool) -> Result<()> {
    if let Some(root) = args.root {
        config.input.root = root;
    }
    if let Some(word_list) = args.word_list {
        config.wordlist.path = word_list;
    }
    if let Some(path) = args.combinations_report {
        config.report.combinations_path = path;
    }
    if let Some(path) = args.strings_report {
        config.report.strings_path = path;
    }
    if let Some(path) = args.failures_report {
        config.report.failures_path = Some(path);
    }
    if let Some(path) = args.json {
        config.report.json_path = Some(path);
    }
    config.validate().context("Invalid configuration")?;

    eprintln!(
        "{}",
        format_step(1, 2, &format!("Scanning {}", config.input.root.display()))
    );

    let observer: Box<dyn ScanObserver> = if args.no_progress {
        Box::new(LogObserver)
    } else {
        Box::new(ProgressTracker::with_color(color))
    };

    let orchestrator = ScanOrchestrator::new(config).with_limit(args.limit);
    let outcome = orchestrator
        .run(observer.as_ref())
        .context("Scan failed")?;

    let report = &orchestrator.config().report;
    eprintln!("{}", format_step(2, 2, "Reports"));
    eprintln!(
        "{}",
        format_success(&format!(
            "Le rapport a été généré : {}",
            report.combinations_path.display()
        ))
    );
    eprintln!(
        "{}",
        format_success(&format!(
            "Le rapport des mots trouvés a été généré : {}",
            report.strings_path.display()
        ))
    );

    if outcome.has_failures() {
        eprintln!(
            "{}",
            format_warning(&format!(
                "{} file(s) could not be fully processed",
                outcome.failures.len()
            ))
        );
    }

    Ok(())
}

fn cmd_words(config: &Config, word_list: Option<PathBuf>) -> Result<()> {
    let path = word_list.unwrap_or_else(|| config.wordlist.path.clone());
    let groups = WordListLoader::new(&config.wordlist)
        .load(&path)
        .with_context(|| format!("Failed to load word list {}", path.display()))?;

    eprintln!(
        "{}",
        format_info(&format!("{} word group(s) in {}", groups.len(), path.display()))
    );

    for (index, group) in groups.iter().enumerate() {
        println!("{:>3}  A={:?} | B={:?}", index + 1, group.a, group.b);
    }

    Ok(())
}
