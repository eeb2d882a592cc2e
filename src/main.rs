//! vcs-update: A tool for updating every working copy below a directory
//! This tool scans for git and svn checkouts and runs the matching update command in each.

use anyhow::Result;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command as ClapCommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

use vcs_update::commands::handle_update_command;
use vcs_update::core::config::{VERBOSITY_DETAILS, VERBOSITY_QUIET};
use vcs_update::core::{get_scan_concurrency, get_update_concurrency, UpdateConfig};

fn build_cli() -> ClapCommand {
    ClapCommand::new("vcs-update")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Find git and svn working copies below a directory and update them")
        .arg(
            Arg::new("root")
                .value_name("ROOT")
                .help("Directory to scan")
                .default_value(".")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("include")
                .value_name("INCLUDE")
                .help("Only update repositories whose relative path contains this string")
                .num_args(1..)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .value_name("LEVEL")
                .help("Print more information, level is optional and a number up to 2")
                .num_args(0..=1)
                .require_equals(true)
                .default_missing_value("1")
                .value_parser(value_parser!(u8).range(0..=2)),
        )
        .arg(
            Arg::new("exclude")
                .short('x')
                .long("exclude")
                .value_name("STRING")
                .help("Exclude the repositories whose relative path contains this string")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("jobs")
                .short('j')
                .long("jobs")
                .value_name("N")
                .help("Number of repositories updated at the same time [default: 5]")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("scan-jobs")
                .long("scan-jobs")
                .value_name("N")
                .help("Number of directories read at the same time while scanning")
                .value_parser(value_parser!(usize)),
        )
}

fn config_from_matches(matches: &ArgMatches) -> UpdateConfig {
    let strings = |id: &str| -> Vec<String> {
        matches
            .get_many::<String>(id)
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    };

    UpdateConfig {
        root: matches
            .get_one::<PathBuf>("root")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(".")),
        includes: strings("include"),
        excludes: strings("exclude"),
        verbosity: matches
            .get_one::<u8>("verbose")
            .copied()
            .unwrap_or(VERBOSITY_QUIET),
        update_concurrency: get_update_concurrency(matches.get_one::<usize>("jobs").copied()),
        scan_concurrency: get_scan_concurrency(matches.get_one::<usize>("scan-jobs").copied()),
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        VERBOSITY_QUIET => Level::WARN,
        VERBOSITY_DETAILS => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let config = config_from_matches(&build_cli().get_matches());
    init_tracing(config.verbosity);

    let statistics = handle_update_command(&config).await?;
    if statistics.has_failures() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
