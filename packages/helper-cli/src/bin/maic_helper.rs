use clap::{Arg, ArgAction, Command};
use maic_helper::logging::{ConsoleLogger, LogLevel};
use maic_helper::{create_helper, HelperOptions};
use maic_helper_cli::preview::{expand_patterns, preview_files};
use std::path::PathBuf;
use std::process;

fn main() {
    let matches = Command::new("maic-helper")
        .version(maic_helper_cli::version())
        .about("Preview maic import rewriting")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("JSON helper options, e.g. { \"enabled\": true }"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .value_parser(clap::value_parser!(LogLevel))
                .help("debug, info, warn or error"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Shorthand for --log-level debug"),
        )
        .arg(
            Arg::new("emit-modules")
                .short('m')
                .long("emit-modules")
                .action(ArgAction::SetTrue)
                .help("Also print the generated module for every rewritten import"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the report as JSON"),
        )
        .arg(
            Arg::new("patterns")
                .value_name("PATTERN")
                .required(true)
                .num_args(1..)
                .help("Source files or glob patterns"),
        )
        .get_matches();

    let options = match matches.get_one::<String>("config") {
        Some(path) => HelperOptions::load(&PathBuf::from(path)).unwrap_or_else(|e| {
            eprintln!("Failed to load config {}: {}", path, e);
            process::exit(1);
        }),
        None => HelperOptions::default(),
    };

    let Some(mut helper) = create_helper(options) else {
        eprintln!("maic helper is disabled by configuration; nothing to do.");
        return;
    };

    let level = if matches.get_flag("verbose") {
        Some(LogLevel::Debug)
    } else {
        matches.get_one::<LogLevel>("log-level").copied()
    };
    if let Some(level) = level {
        helper = helper.with_logger(Box::new(ConsoleLogger::new(level)));
    }

    let patterns: Vec<String> = matches
        .get_many::<String>("patterns")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let paths = expand_patterns(&patterns).unwrap_or_else(|e| {
        eprintln!("{:#}", e);
        process::exit(1);
    });
    if paths.is_empty() {
        eprintln!("No files matched {}", patterns.join(", "));
        process::exit(1);
    }

    let report = match preview_files(&mut helper, &paths, matches.get_flag("emit-modules")) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{:#}", e);
            process::exit(1);
        }
    };

    if matches.get_flag("json") {
        match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize report: {}", e);
                process::exit(1);
            }
        }
    } else {
        print!("{}", report.render_text());
    }
}
