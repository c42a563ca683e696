//! # cbs
//!
//! Code base scanner: counts a source tree's non-empty lines of code per file
//! extension.
//!
//! ## Usage
//!
//! ```bash
//! # Scan the current directory
//! cbs
//!
//! # Scan a project, leaving out its build directory and text files
//! cbs project -e project/target -t txt
//!
//! # Skip extensionless files and expect some files to be unreadable
//! cbs project -n -r
//!
//! # Machine-readable output
//! cbs project --output json
//! ```
//!
//! Paths given to `-e` are compared with the paths cbs builds while walking,
//! which always start with the scanned path: to exclude `target` inside
//! `project`, pass `project/target`.

mod render;

use std::process::ExitCode;

use anyhow::{Context, Result};
use cbslib::{scan, ScanConfig};
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::EnvFilter;

use render::{render_report, Palette};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("cbs")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Code base scanner: counts non-empty lines of code per file extension")
        .arg(
            Arg::new("path")
                .help("Directory to scan (defaults to current directory)")
                .default_value("."),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .value_name("PATH")
                .action(ArgAction::Append)
                .help("Exclude a directory or file by its full path (can be specified multiple times)"),
        )
        .arg(
            Arg::new("type")
                .short('t')
                .long("type")
                .value_name("EXT")
                .action(ArgAction::Append)
                .help("Exclude files with this extension, without the dot (can be specified multiple times)"),
        )
        .arg(
            Arg::new("ignore-null")
                .short('n')
                .long("ignore-null")
                .action(ArgAction::SetTrue)
                .help("Ignore files without an extension"),
        )
        .arg(
            Arg::new("exclude-errors")
                .short('r')
                .long("exclude-errors")
                .action(ArgAction::SetTrue)
                .help("Expect unreadable files: log them quietly and omit the read-error warning"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log every scanning decision to stderr"),
        )
}

/// Strip the trailing separator from the scan root; `/` itself is kept.
fn normalize_root(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() && path.starts_with('/') {
        "/"
    } else if trimmed.is_empty() {
        path
    } else {
        trimmed
    }
}

/// Build the scan config from matches
fn build_config(matches: &ArgMatches) -> ScanConfig {
    let mut config = ScanConfig::new()
        .ignore_extensionless(matches.get_flag("ignore-null"))
        .ignore_read_errors(matches.get_flag("exclude-errors"));

    if let Some(paths) = matches.get_many::<String>("exclude") {
        for path in paths {
            config = config.ignore_path(normalize_root(path));
        }
    }

    if let Some(extensions) = matches.get_many::<String>("type") {
        for extension in extensions {
            config = config.ignore_extension(extension);
        }
    }

    config
}

fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("cbs=debug,cbslib=debug,warn")
        } else {
            EnvFilter::new("cbs=info,cbslib=warn,warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("path")
        .map(|s| normalize_root(s))
        .unwrap_or(".");
    let config = build_config(matches);

    let result = scan(path, &config).with_context(|| format!("Failed to scan '{}'", path))?;

    let output = matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or("text");

    if output == "json" {
        let json = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
        println!("{}", json);
    } else {
        print!("{}", render_report(path, &result, &config, &Palette::auto()));
    }

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    setup_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
