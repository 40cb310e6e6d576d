//! CLI entry point for sprig

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use sprig::{
    OutputConfig, StreamingFormatter, StreamingWalker, TreeWalker, WalkerConfig, print_json,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sprig")]
#[command(about = "A tree command that skips well-known clutter folders")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Display the parent of PATH instead, and exclude "scripts"
    #[arg(short = 'p', long = "parent")]
    parent: bool,

    /// Exclude entries matching name or pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Start from an empty exclusion set instead of the built-in one
    #[arg(long = "no-default-excludes")]
    no_default_excludes: bool,

    /// Output the tree as JSON
    #[arg(long = "json")]
    json: bool,

    /// Append a "N directories, M files" report
    #[arg(short = 'r', long = "report", conflicts_with = "json")]
    report: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sprig={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose);

    let mut root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };
    if args.parent {
        root.push("..");
    }

    let mut config = if args.no_default_excludes {
        WalkerConfig::empty()
    } else {
        WalkerConfig::default()
    };
    if args.parent {
        config = config.with_exclude("scripts");
    }
    config.ignore_patterns = args.ignore.clone();

    tracing::debug!(root = %root.display(), ?config, "starting walk");

    let result = if args.json {
        let walker = TreeWalker::new(config);
        match walker.walk(&root) {
            Ok(tree) => print_json(&tree).map_err(Into::into),
            Err(e) => Err(e),
        }
    } else {
        let output_config = OutputConfig {
            use_color: should_use_color(args.color),
            show_report: args.report,
        };
        let mut formatter = StreamingFormatter::new(output_config);
        let walker = StreamingWalker::new(config);
        walker.walk_streaming(&root, &mut formatter)
    };

    if let Err(e) = result {
        eprintln!("sprig: {}", e);
        process::exit(1);
    }
}
