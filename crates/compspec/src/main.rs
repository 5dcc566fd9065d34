//! Demo entry point
//!
//! Glue code around the factory: constructs example variants and logs them.
//! Without a subcommand it builds one PC and one Server specification; the
//! `construct` subcommand builds a single variant from caller-supplied values.

use clap::{Arg, ArgMatches, Command};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use compspec::ComputerKind;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Command::new("compspec")
        .version(compspec::VERSION)
        .about("Closed-variant computer specification factory")
        .subcommand(
            Command::new("construct")
                .about("Construct a single variant from a tag and three fields")
                .arg(Arg::new("tag").required(true).help("Variant tag (PC or Server)"))
                .arg(Arg::new("memory").required(true).help("Memory size label, e.g. \"2 GB\""))
                .arg(Arg::new("storage").required(true).help("Storage size label, e.g. \"500 GB\""))
                .arg(
                    Arg::new("processor")
                        .required(true)
                        .help("Processor speed label, e.g. \"2.4 GHz\""),
                ),
        );

    let code = match cli.get_matches().subcommand() {
        Some(("construct", sub)) => run_construct(sub),
        _ => run_demo(),
    };
    std::process::exit(code);
}

fn run_construct(matches: &ArgMatches) -> i32 {
    let tag = matches.get_one::<String>("tag").expect("required arg");
    let memory = matches.get_one::<String>("memory").expect("required arg");
    let storage = matches.get_one::<String>("storage").expect("required arg");
    let processor = matches.get_one::<String>("processor").expect("required arg");

    match compspec::construct(tag, memory.as_str(), storage.as_str(), processor.as_str()) {
        Ok(computer) => {
            info!(%computer, "constructed");
            0
        }
        Err(err) => {
            error!(%err, "construction failed");
            1
        }
    }
}

fn run_demo() -> i32 {
    let pc = compspec::construct_kind(ComputerKind::Pc, "2 GB", "500 GB", "2.4 GHz");
    let server = compspec::construct_kind(ComputerKind::Server, "16 GB", "1 TB", "2.9 GHz");
    info!(%pc, "constructed");
    info!(%server, "constructed");
    0
}
