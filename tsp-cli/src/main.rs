//! A command line interface to the Traveling Salesman Problem solver race.

mod commands;
mod export;

use crate::commands::race::{get_race_command, run_race};
use crate::commands::solve::{get_solve_command, run_solve};
use clap::Command;
use std::process;

fn main() {
    let matches = Command::new("tsp")
        .version("0.1.0")
        .about("A command line interface to the Traveling Salesman Problem solver race")
        .subcommand(get_solve_command())
        .subcommand(get_race_command())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches),
        Some(("race", race_matches)) => run_race(race_matches),
        _ => {
            eprintln!("no subcommand was used, use -h to print help information");
            process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
