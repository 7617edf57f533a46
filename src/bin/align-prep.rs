//! Prepare plain-text files for region alignment.
//!
//! Usage:
//!   align-prep `<file>...`   - write `<file name>.out` into the working directory for each input
//!
//! Markers and the error policy come from `galign.toml` in the working
//! directory when present, otherwise from the built-in defaults.

use clap::{value_parser, Arg, Command};
use galign::config::{self, ErrorPolicy};
use std::path::PathBuf;

fn main() {
    galign::logging::init();

    let matches = Command::new("align-prep")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert text files to one token per line with paragraph and sentence markers")
        .arg_required_else_help(true)
        .arg(
            Arg::new("files")
                .help("Input text files, processed in order")
                .required(true)
                .num_args(1..)
                .allow_hyphen_values(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .get_matches();

    let files: Vec<PathBuf> = matches
        .get_many::<PathBuf>("files")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let config = config::load(None).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    match galign::prep::process(&files, &config.prep) {
        Ok(report) => {
            if config.prep.on_error == ErrorPolicy::Skip && !report.skipped.is_empty() {
                eprintln!(
                    "Processed {} of {} files; skipped:",
                    report.written.len(),
                    files.len()
                );
                for (path, err) in &report.skipped {
                    eprintln!("  {}: {}", path.display(), err);
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
