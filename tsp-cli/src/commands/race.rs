use super::*;
use crate::export::{create_engine_summary, write_history, write_result, RaceSummary, ACO_INDEX_LABEL, GA_INDEX_LABEL};
use std::io::BufWriter;

const BATCH_SIZE_ARG_NAME: &str = "batch-size";
const TOLERANCE_ARG_NAME: &str = "tolerance";
const GA_HISTORY_ARG_NAME: &str = "ga-history";
const ACO_HISTORY_ARG_NAME: &str = "aco-history";

/// Builds the `race` subcommand: the ant colony engine runs to its own termination while
/// the genetic engine keeps evolving until it catches up within the tolerance.
pub fn get_race_command() -> Command {
    add_common_args(Command::new("race").about("Races the genetic engine against the ant colony engine"))
        .arg(Arg::new(ANTS_ARG_NAME).help("amount of ants per iteration").long(ANTS_ARG_NAME))
        .arg(Arg::new(ITERATIONS_ARG_NAME).help("maximum amount of ant colony iterations").long(ITERATIONS_ARG_NAME))
        .arg(Arg::new(POPULATION_SIZE_ARG_NAME).help("amount of tours in the population").long(POPULATION_SIZE_ARG_NAME))
        .arg(Arg::new(BATCH_SIZE_ARG_NAME).help("amount of steps pulled per burst").long(BATCH_SIZE_ARG_NAME))
        .arg(Arg::new(TOLERANCE_ARG_NAME).help("catch-up distance tolerance").long(TOLERANCE_ARG_NAME))
        .arg(Arg::new(GA_HISTORY_ARG_NAME).help("a path to the file for a genetic CSV history log").long(GA_HISTORY_ARG_NAME))
        .arg(
            Arg::new(ACO_HISTORY_ARG_NAME)
                .help("a path to the file for an ant colony CSV history log")
                .long(ACO_HISTORY_ARG_NAME),
        )
}

/// Runs the `race` subcommand.
pub fn run_race(matches: &ArgMatches) -> GenericResult<()> {
    let environment = create_environment(matches)?;
    let matrix = create_matrix(matches, environment.as_ref())?;

    let defaults = AcoConfig::default();
    let iterations =
        parse_int_value(matches, ITERATIONS_ARG_NAME, "iterations count")?.unwrap_or(defaults.iterations);
    let aco_config = AcoConfig {
        ants: parse_int_value(matches, ANTS_ARG_NAME, "ants count")?.unwrap_or(defaults.ants),
        iterations,
        // the ant colony engine defines the race target, let it run its whole budget
        patience: iterations,
        ..defaults
    };

    // the genetic engine is effectively unbounded: the catch-up rule is its stop condition
    let ga_config = GaConfig {
        population_size: parse_int_value(matches, POPULATION_SIZE_ARG_NAME, "population size")?
            .unwrap_or_else(|| GaConfig::default().population_size),
        generations: 1_000_000,
        patience: 999_999,
        ..GaConfig::default()
    };

    let race_defaults = RaceConfig::default();
    let race_config = RaceConfig {
        batch_size: parse_int_value(matches, BATCH_SIZE_ARG_NAME, "batch size")?.unwrap_or(race_defaults.batch_size),
        tolerance: parse_float_value(matches, TOLERANCE_ARG_NAME, "tolerance")?.unwrap_or(race_defaults.tolerance),
    };

    let aco = AcoEngine::new(
        matrix.clone(),
        aco_config,
        get_telemetry_mode(matches, prefixed_logger("[aco]", environment.logger.clone())),
        environment.clone(),
    )?;
    let ga = GaEngine::new(
        matrix.clone(),
        ga_config,
        get_telemetry_mode(matches, prefixed_logger("[ga]", environment.logger.clone())),
        environment.clone(),
    )?;

    let timer = Timer::start();
    let report = Race::new(aco, ga, race_config.clone())?.run();

    println!(
        "[{}s] aco: best distance {:.4} after {} steps",
        timer.elapsed_secs(),
        report.aco.best_distance,
        report.aco.steps
    );
    println!(
        "[{}s] ga: best distance {:.4} after {} steps",
        timer.elapsed_secs(),
        report.ga.best_distance,
        report.ga.steps
    );

    if report.ga_caught_up {
        println!("ga caught up with aco within {} tolerance", race_config.tolerance);
    }

    if let Some(path) = matches.get_one::<String>(GA_HISTORY_ARG_NAME) {
        write_history(BufWriter::new(create_file(path, "ga history")), GA_INDEX_LABEL, &report.ga.history)?;
    }

    if let Some(path) = matches.get_one::<String>(ACO_HISTORY_ARG_NAME) {
        write_history(BufWriter::new(create_file(path, "aco history")), ACO_INDEX_LABEL, &report.aco.history)?;
    }

    if let Some(path) = matches.get_one::<String>(OUT_RESULT_ARG_NAME) {
        let summary = RaceSummary {
            tolerance: race_config.tolerance,
            ga_caught_up: report.ga_caught_up,
            aco: create_engine_summary(
                "aco",
                matrix.size(),
                report.aco.steps,
                report.aco.best_tour.as_ref(),
                report.aco.best_distance,
            ),
            ga: create_engine_summary(
                "ga",
                matrix.size(),
                report.ga.steps,
                report.ga.best_tour.as_ref(),
                report.ga.best_distance,
            ),
        };

        write_result(BufWriter::new(create_file(path, "result")), &summary)?;
    }

    Ok(())
}
