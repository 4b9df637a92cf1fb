use std::path::PathBuf;

use clap::{
    Arg, ArgMatches, Command, command, crate_authors, crate_description, crate_name, crate_version,
};

use crate::constants::{
    BINARY_NAME, DEFAULT_OUTPUT_PATH, DRY_RUN_HELP, LOG_FILE_HELP, OUTPUT_HELP, SOURCE_HELP,
    USAGE_ALTERNATIVE_SKIN, USAGE_SOURCE_SKIN, USAGE_TARGET_SKIN, VERBOSE_HELP,
};
use crate::logging::LogLevel;
use crate::workflow::InvertOptions;

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `source`: Skin folder or single file (optional, see [`usage_lines`])
/// - `output`: Destination root
/// - `dry`: Run without writing anything
/// - `verbose`: Increase verbosity level
/// - `log_file`: Also log to a file
pub fn build_command() -> Command {
    // the source is optional so a missing one gets our own usage text
    let arg_source = Arg::new("source")
        .help(SOURCE_HELP)
        .value_parser(clap::value_parser!(PathBuf));

    let arg_output = Arg::new("output")
        .short('o')
        .long("output")
        .help(OUTPUT_HELP)
        .value_parser(clap::value_parser!(PathBuf))
        .default_value(DEFAULT_OUTPUT_PATH);

    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(clap::ArgAction::SetTrue);

    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_source)
        .arg(arg_output)
        .arg(arg_dry)
        .arg(log_file)
        .arg(arg_verbose)
}

/// Parses the process arguments
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the run options, or `None` when no source was given
pub fn get_options(matches: &ArgMatches) -> Option<InvertOptions> {
    let source = matches.get_one::<PathBuf>("source")?.clone();
    let destination = matches
        .get_one::<PathBuf>("output")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));

    Some(InvertOptions {
        source,
        destination,
        dry_run: matches.get_flag("dry"),
    })
}

/// Gets the verbosity level from the number of `-v` flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    LogLevel::from_occurrences(matches.get_count("verbose"))
}

/// Gets the log file, if file logging was requested
pub fn get_log_file(matches: &ArgMatches) -> Option<PathBuf> {
    matches
        .get_one::<String>("log_file")
        .filter(|filename| !filename.is_empty())
        .map(PathBuf::from)
}

/// Usage text printed when no source is given
///
/// Shows how to generate the `palesun` LateNight skin from `palemoon`,
/// using the platform's path separator.
pub fn usage_lines() -> Vec<String> {
    let target: PathBuf = USAGE_TARGET_SKIN.iter().collect();
    let alternative: PathBuf = USAGE_ALTERNATIVE_SKIN.iter().collect();
    let source: PathBuf = USAGE_SOURCE_SKIN.iter().collect();

    vec![
        "tell me where to find the source skin".to_string(),
        "for example:".to_string(),
        format!("md {}", target.display()),
        format!("cd {}", target.display()),
        format!("cd {}", alternative.display()),
        format!("{BINARY_NAME} {}", source.display()),
    ]
}
