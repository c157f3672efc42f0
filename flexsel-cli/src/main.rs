//! A command line interface to the flexibility asset selection solver.
//!

mod commands;

use crate::commands::generate::{get_generate_command, run_generate};
use crate::commands::select::{get_select_command, run_select};
use clap::Command;
use std::process;

fn main() {
    let matches = Command::new("Flexibility Asset Selection Solver")
        .version("0.1")
        .about("Selects a minimum cost set of flexibility assets to cover a demand-response target")
        .subcommand(get_select_command())
        .subcommand(get_generate_command())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("select", select_matches)) => run_select(select_matches),
        Some(("generate", generate_matches)) => run_generate(generate_matches),
        _ => {
            eprintln!("no subcommand was used. Use -h to print help information.");
            process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
