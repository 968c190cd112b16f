#[cfg(test)]
#[path = "../../tests/unit/commands_test.rs"]
mod commands_test;

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::fs::File;
use std::process;
use std::str::FromStr;
use std::sync::Arc;
use tsp_core::prelude::*;

pub mod race;
pub mod solve;

pub(crate) const CITIES_ARG_NAME: &str = "cities";
pub(crate) const SEED_ARG_NAME: &str = "seed";
pub(crate) const LOG_ARG_NAME: &str = "log";
pub(crate) const OUT_RESULT_ARG_NAME: &str = "out-result";

pub(crate) const ANTS_ARG_NAME: &str = "ants";
pub(crate) const ITERATIONS_ARG_NAME: &str = "iterations";
pub(crate) const ALPHA_ARG_NAME: &str = "alpha";
pub(crate) const BETA_ARG_NAME: &str = "beta";
pub(crate) const RHO_ARG_NAME: &str = "rho";
pub(crate) const DEPOSIT_ARG_NAME: &str = "deposit";

pub(crate) const POPULATION_SIZE_ARG_NAME: &str = "population-size";
pub(crate) const GENERATIONS_ARG_NAME: &str = "generations";
pub(crate) const MUTATION_RATE_ARG_NAME: &str = "mutation-rate";

pub(crate) const PATIENCE_ARG_NAME: &str = "patience";

/// Adds arguments shared by all subcommands.
pub(crate) fn add_common_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(CITIES_ARG_NAME)
                .help("amount of randomly generated cities")
                .short('c')
                .long(CITIES_ARG_NAME)
                .default_value("20"),
        )
        .arg(Arg::new(SEED_ARG_NAME).help("random seed for a reproducible run").long(SEED_ARG_NAME))
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("enables progress logging")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("a path to the file for a JSON result")
                .short('o')
                .long(OUT_RESULT_ARG_NAME),
        )
}

pub(crate) fn create_file(path: &str, description: &str) -> File {
    File::create(path).unwrap_or_else(|err| {
        eprintln!("cannot create {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

pub(crate) fn parse_float_value<T: FromStr<Err = std::num::ParseFloatError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> GenericResult<Option<T>> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>()
                .map_err(|err| GenericError::from(format!("cannot get float value, error: '{err}': '{arg_desc}'")))
                .map(Some)
        })
        .unwrap_or(Ok(None))
}

pub(crate) fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> GenericResult<Option<T>> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>()
                .map_err(|err| GenericError::from(format!("cannot get integer value, error: '{err}': '{arg_desc}'")))
                .map(Some)
        })
        .unwrap_or(Ok(None))
}

/// Creates an environment from common arguments: a seeded random source when requested.
pub(crate) fn create_environment(matches: &ArgMatches) -> GenericResult<Arc<Environment>> {
    let environment = parse_int_value::<u64>(matches, SEED_ARG_NAME, "random seed")?
        .map_or_else(Environment::default, Environment::new_with_seed);

    Ok(Arc::new(environment))
}

/// Generates a city set within the default bounds and builds its distance matrix.
pub(crate) fn create_matrix(matches: &ArgMatches, environment: &Environment) -> GenericResult<Arc<DistanceMatrix>> {
    let count = parse_int_value::<usize>(matches, CITIES_ARG_NAME, "cities count")?.unwrap_or(20);
    let cities = generate_cities(count, 1000., 1000., 50., environment.random.as_ref())?;

    Ok(Arc::new(DistanceMatrix::new(&cities)?))
}

pub(crate) fn get_telemetry_mode(matches: &ArgMatches, logger: InfoLogger) -> TelemetryMode {
    if matches.get_flag(LOG_ARG_NAME) {
        TelemetryMode::OnlyLogging { logger, log_best: 50 }
    } else {
        TelemetryMode::None
    }
}

/// Wraps a logger so that every message gets an engine prefix.
pub(crate) fn prefixed_logger(prefix: &str, logger: InfoLogger) -> InfoLogger {
    let prefix = prefix.to_string();

    Arc::new(move |msg: &str| (logger)(format!("{prefix} {msg}").as_str()))
}

pub(crate) fn create_aco_config(matches: &ArgMatches) -> GenericResult<AcoConfig> {
    let defaults = AcoConfig::default();

    Ok(AcoConfig {
        ants: parse_int_value(matches, ANTS_ARG_NAME, "ants count")?.unwrap_or(defaults.ants),
        iterations: parse_int_value(matches, ITERATIONS_ARG_NAME, "iterations count")?.unwrap_or(defaults.iterations),
        alpha: parse_float_value(matches, ALPHA_ARG_NAME, "pheromone importance")?.unwrap_or(defaults.alpha),
        beta: parse_float_value(matches, BETA_ARG_NAME, "distance importance")?.unwrap_or(defaults.beta),
        rho: parse_float_value(matches, RHO_ARG_NAME, "evaporation rate")?.unwrap_or(defaults.rho),
        q: parse_float_value(matches, DEPOSIT_ARG_NAME, "deposit constant")?.unwrap_or(defaults.q),
        patience: parse_int_value(matches, PATIENCE_ARG_NAME, "patience")?.unwrap_or(defaults.patience),
    })
}

pub(crate) fn create_ga_config(matches: &ArgMatches) -> GenericResult<GaConfig> {
    let defaults = GaConfig::default();

    Ok(GaConfig {
        population_size: parse_int_value(matches, POPULATION_SIZE_ARG_NAME, "population size")?
            .unwrap_or(defaults.population_size),
        generations: parse_int_value(matches, GENERATIONS_ARG_NAME, "generations count")?
            .unwrap_or(defaults.generations),
        mutation_rate: parse_float_value(matches, MUTATION_RATE_ARG_NAME, "mutation rate")?
            .unwrap_or(defaults.mutation_rate),
        patience: parse_int_value(matches, PATIENCE_ARG_NAME, "patience")?.unwrap_or(defaults.patience),
    })
}
