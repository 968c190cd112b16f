use super::*;
use crate::export::{create_engine_summary, write_history, write_result, ACO_INDEX_LABEL, GA_INDEX_LABEL};
use std::io::BufWriter;

const ALGORITHM_ARG_NAME: &str = "algorithm";
const HISTORY_ARG_NAME: &str = "history";

/// Builds the `solve` subcommand which runs a single engine to completion.
pub fn get_solve_command() -> Command {
    add_common_args(Command::new("solve").about("Solves a TSP instance with a single engine"))
        .arg(
            Arg::new(ALGORITHM_ARG_NAME)
                .help("an engine to run")
                .short('a')
                .long(ALGORITHM_ARG_NAME)
                .value_parser(["ga", "aco"])
                .default_value("ga"),
        )
        .arg(Arg::new(ANTS_ARG_NAME).help("amount of ants per iteration").long(ANTS_ARG_NAME))
        .arg(Arg::new(ITERATIONS_ARG_NAME).help("maximum amount of iterations").long(ITERATIONS_ARG_NAME))
        .arg(Arg::new(ALPHA_ARG_NAME).help("pheromone importance exponent").long(ALPHA_ARG_NAME))
        .arg(Arg::new(BETA_ARG_NAME).help("distance importance exponent").long(BETA_ARG_NAME))
        .arg(Arg::new(RHO_ARG_NAME).help("pheromone evaporation rate").long(RHO_ARG_NAME))
        .arg(Arg::new(DEPOSIT_ARG_NAME).help("pheromone deposit constant").long(DEPOSIT_ARG_NAME))
        .arg(Arg::new(POPULATION_SIZE_ARG_NAME).help("amount of tours in the population").long(POPULATION_SIZE_ARG_NAME))
        .arg(Arg::new(GENERATIONS_ARG_NAME).help("maximum amount of generations").long(GENERATIONS_ARG_NAME))
        .arg(Arg::new(MUTATION_RATE_ARG_NAME).help("probability to mutate a child tour").long(MUTATION_RATE_ARG_NAME))
        .arg(
            Arg::new(PATIENCE_ARG_NAME)
                .help("maximum consecutive non-improving steps before early termination")
                .long(PATIENCE_ARG_NAME),
        )
        .arg(Arg::new(HISTORY_ARG_NAME).help("a path to the file for a CSV history log").long(HISTORY_ARG_NAME))
}

/// Runs the `solve` subcommand.
pub fn run_solve(matches: &ArgMatches) -> GenericResult<()> {
    let environment = create_environment(matches)?;
    let matrix = create_matrix(matches, environment.as_ref())?;
    let telemetry_mode = get_telemetry_mode(matches, environment.logger.clone());
    let timer = Timer::start();

    let algorithm = matches.get_one::<String>(ALGORITHM_ARG_NAME).map(|value| value.as_str()).unwrap_or("ga");

    let (summary, history, index_label) = match algorithm {
        "aco" => {
            let config = create_aco_config(matches)?;
            let mut engine = AcoEngine::new(matrix.clone(), config, telemetry_mode, environment.clone())?;

            for _ in engine.by_ref() {}

            let best = engine.best();
            let summary = create_engine_summary(
                algorithm,
                matrix.size(),
                engine.history().len(),
                best.map(|(tour, _)| tour),
                best.map_or(Float::INFINITY, |(_, distance)| distance),
            );

            (summary, engine.history().to_vec(), ACO_INDEX_LABEL)
        }
        _ => {
            let config = create_ga_config(matches)?;
            let mut engine = GaEngine::new(matrix.clone(), config, telemetry_mode, environment.clone())?;

            for _ in engine.by_ref() {}

            let (tour, distance) = engine.best();
            let summary = create_engine_summary(algorithm, matrix.size(), engine.history().len(), Some(tour), distance);

            (summary, engine.history().to_vec(), GA_INDEX_LABEL)
        }
    };

    println!(
        "[{}s] {}: best distance {:.4} after {} steps",
        timer.elapsed_secs(),
        summary.algorithm,
        summary.best_distance,
        summary.steps
    );

    if let Some(path) = matches.get_one::<String>(HISTORY_ARG_NAME) {
        write_history(BufWriter::new(create_file(path, "history")), index_label, &history)?;
    }

    if let Some(path) = matches.get_one::<String>(OUT_RESULT_ARG_NAME) {
        write_result(BufWriter::new(create_file(path, "result")), &summary)?;
    }

    Ok(())
}
