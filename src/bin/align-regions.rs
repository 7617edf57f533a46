//! Align two prepared token streams region by region.
//!
//! Usage:
//!   align-regions [-D `<hard>`] [-d `<soft>`] [-v | -V] [-c `<config>`] `<file1>` `<file2>`
//!
//! Writes `<file1>.al` and `<file2>.al` next to the inputs. Hard regions (`-D`)
//! are kept as they are; soft delimiters (`-d`) may be merged to line the two
//! files up.

use clap::{value_parser, Arg, ArgAction, Command};
use galign::align::{align_files, AlignOptions};
use galign::config;
use std::path::PathBuf;

fn main() {
    galign::logging::init();

    let matches = Command::new("align-regions")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Align two token streams with the Gale-Church length model")
        .arg_required_else_help(true)
        // -V is taken by --debug
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .long("version")
                .help("Print version")
                .action(ArgAction::Version),
        )
        .arg(
            Arg::new("file1")
                .help("First prepared file")
                .required(true)
                .index(1)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("file2")
                .help("Second prepared file")
                .required(true)
                .index(2)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("soft-delimiter")
                .long("soft-delimiter")
                .short('d')
                .help("Delimiter the aligner may merge across (default: '.End of Sentence')"),
        )
        .arg(
            Arg::new("hard-delimiter")
                .long("hard-delimiter")
                .short('D')
                .help("Delimiter both files must agree on (default: '.PARA')"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Write a '.Score <cost>' line before every aligned region")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .short('V')
                .help("Like --verbose, plus region counts and lengths")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults")
                .value_parser(value_parser!(PathBuf)),
        )
        .get_matches();

    let explicit = matches.get_one::<PathBuf>("config");
    let mut config = config::load(explicit.map(PathBuf::as_path))
        .unwrap_or_else(|e| {
            eprintln!("Configuration error: {}", e);
            std::process::exit(2);
        })
        .align;
    if let Some(soft) = matches.get_one::<String>("soft-delimiter") {
        config.soft_delimiter = soft.clone();
    }
    if let Some(hard) = matches.get_one::<String>("hard-delimiter") {
        config.hard_delimiter = hard.clone();
    }

    let debug = matches.get_flag("debug");
    let options = AlignOptions {
        verbose: matches.get_flag("verbose") || debug,
        debug,
    };

    let (Some(file1), Some(file2)) = (
        matches.get_one::<PathBuf>("file1"),
        matches.get_one::<PathBuf>("file2"),
    ) else {
        eprintln!("Error: two input files are required");
        std::process::exit(2);
    };

    if let Err(e) = align_files(file1, file2, &config, options) {
        eprintln!("align_regions: {}", e);
        std::process::exit(2);
    }
}
