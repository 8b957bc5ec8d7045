//! CLI entry point for filetree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use filetree::{
    ErrorPolicy, RenderOptions, ScanConfig, TextFormatter, TreeStats, TreeWalker, count_files,
    flatten, print_flat_json, print_json, print_stats, print_stats_json,
};
use tracing::{debug, warn};

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
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "filetree")]
#[command(about = "Print a directory as an indented tree, a flat file list or JSON")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Spaces per nesting level
    #[arg(long = "indent", value_name = "N", default_value = "2")]
    indent: usize,

    /// Bullet printed before every path
    #[arg(long = "bullet", default_value = "- ", conflicts_with = "no_bullet")]
    bullet: String,

    /// Print paths without a bullet
    #[arg(long = "no-bullet")]
    no_bullet: bool,

    /// Show sizes next to files and directories
    #[arg(short = 's', long = "size")]
    size: bool,

    /// List files and other non-directory entries, one per line
    #[arg(long = "flat", conflicts_with_all = ["count", "stats"])]
    flat: bool,

    /// Print the number of files
    #[arg(long = "count", conflicts_with = "stats")]
    count: bool,

    /// Show tree statistics (entry counts, total size, extension breakdown)
    #[arg(long = "stats")]
    stats: bool,

    /// Output in JSON format
    #[arg(long = "json", conflicts_with = "count")]
    json: bool,

    /// Sort entries by name instead of directory-listing order
    #[arg(long = "sort")]
    sort: bool,

    /// Skip unreadable entries instead of failing
    #[arg(long = "skip-errors")]
    skip_errors: bool,

    /// Number of parallel workers (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    jobs: usize,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Diagnostics written to stderr
    #[arg(long = "log-level", default_value = "warn", value_enum)]
    log_level: LogLevel,
}

fn setup_tracing(level: LogLevel) {
    if let Some(level) = level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

fn main() {
    let args = Args::parse();
    setup_tracing(args.log_level);
    debug!("Parsed CLI arguments: {args:?}");

    let config = ScanConfig {
        sort_entries: args.sort,
        error_policy: if args.skip_errors {
            ErrorPolicy::Skip
        } else {
            ErrorPolicy::FailFast
        },
        parallel_workers: args.jobs,
    };

    let scan = match TreeWalker::new(config).walk(&args.path) {
        Ok(scan) => scan,
        Err(e) => {
            eprintln!("filetree: {}", snafu::Report::from_error(e));
            process::exit(1);
        }
    };
    if !scan.skipped.is_empty() {
        warn!("{} entries could not be read and were skipped", scan.skipped.len());
    }
    let root = scan.root;

    let result = if args.stats {
        let stats = TreeStats::collect(&root);
        if args.json {
            print_stats_json(&stats)
        } else {
            print_stats(&stats, should_use_color(args.color))
        }
    } else if args.count {
        println!("{}", count_files(&root));
        Ok(())
    } else if args.flat {
        let leaves = flatten(&root);
        if args.json {
            print_flat_json(&leaves)
        } else {
            for leaf in &leaves {
                println!("{}", leaf.path().display());
            }
            Ok(())
        }
    } else if args.json {
        print_json(&root)
    } else {
        let options = RenderOptions {
            indent_size: args.indent,
            bullet: if args.no_bullet {
                String::new()
            } else {
                args.bullet.clone()
            },
            show_size: args.size,
        };
        TextFormatter::new(options, should_use_color(args.color)).print(&root)
    };

    if let Err(e) = result {
        eprintln!("filetree: error writing output: {}", e);
        process::exit(1);
    }
}
