//! CLI entry point for treels

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing::debug;
use treels::{
    FilterBy, ListingConfig, ListingPrinter, OutputConfig, list_target, load_tree,
    logging::init_logging,
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

#[derive(Parser, Debug)]
#[command(name = "treels")]
#[command(about = "List information about the FILEs (the current directory by default).")]
#[command(version)]
struct Args {
    /// Directory to list, relative to the tree root
    directory: Option<String>,

    /// Do not ignore entries starting with .
    #[arg(short = 'A', long = "all")]
    all: bool,

    /// List subdirectories recursively
    #[arg(short = 'R', long = "recursive")]
    recursive: bool,

    /// Use a long listing format
    #[arg(short = 'l')]
    long: bool,

    /// Sort by time modified (oldest first)
    #[arg(short = 't', long = "sort-time")]
    sort_time: bool,

    /// Reverse the order of the output
    #[arg(short = 'r', long = "reverse")]
    reverse: bool,

    /// Filter the output based on type (file or dir)
    #[arg(long = "filter", value_name = "TYPE", value_parser = parse_filter)]
    filter: Option<FilterBy>,

    /// JSON document describing the tree
    #[arg(
        long = "tree",
        value_name = "FILE",
        env = "TREELS_TREE",
        default_value = "directory.json"
    )]
    tree: PathBuf,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

impl Args {
    fn target(&self) -> &str {
        self.directory.as_deref().unwrap_or("")
    }

    fn listing_config(&self) -> ListingConfig {
        ListingConfig {
            show_hidden: self.all,
            recursive: self.recursive,
            long_format: self.long,
            sort_by_time: self.sort_time,
            reverse: self.reverse,
            filter_by: self.filter,
        }
    }
}

fn parse_filter(s: &str) -> Result<FilterBy, String> {
    s.parse().map_err(|e: treels::InvalidFilter| e.to_string())
}

fn main() {
    init_logging();
    let args = Args::parse();
    debug!(?args, "parsed arguments");

    let root = load_tree(&args.tree).unwrap_or_else(|e| {
        eprintln!("treels: {}", e);
        process::exit(1);
    });

    let lines = list_target(&root, args.target(), &args.listing_config()).unwrap_or_else(|e| {
        eprintln!("treels: {}", e);
        process::exit(1);
    });

    let mut printer = ListingPrinter::new(OutputConfig {
        use_color: should_use_color(args.color),
    });
    if let Err(e) = printer.print_all(&lines) {
        eprintln!("treels: error writing output: {}", e);
        process::exit(1);
    }
}
