use anyhow::{anyhow, Result};
use clap::{arg, value_parser, Arg, ArgAction, Command};
use hanoi_algorithms::towers_of_hanoi::get_algorithm;
use hanoi_challenges::towers_of_hanoi::{Challenge, Difficulty, Solution};
use hanoi_runtime::{
    benchmark::run_benchmarks,
    load::{load_config, load_settings, load_solution},
    CHALLENGE_ID,
};
use hanoi_structs::core::{BenchmarkSettings, OutputData};
use hanoi_utils::{compress_obj, jsonify};
use serde_json::{Map, Value};
use std::{fs, path::PathBuf, time::Instant};

fn cli() -> Command {
    Command::new("hanoi-runtime")
        .about("Solves, verifies and benchmarks Towers of Hanoi algorithms")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("benchmark")
                .about("Times each algorithm for 1 up to MAX_DISKS disks and saves the results as csv")
                .arg(
                    arg!([MAX_DISKS] "Largest number of disks to benchmark (default 6)")
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    Arg::new("algorithm")
                        .long("algorithm")
                        .help("(Optional) Algorithm to benchmark. Repeat to select several (default all)")
                        .action(ArgAction::Append)
                        .value_parser(value_parser!(String)),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .help("(Optional) Config json string or path to json file")
                        .value_parser(value_parser!(String)),
                )
                .arg(
                    Arg::new("output-dir")
                        .long("output-dir")
                        .help("(Optional) Directory for the csv files (default .)")
                        .value_parser(value_parser!(String)),
                )
                .arg(
                    Arg::new("precision")
                        .long("precision")
                        .help("(Optional) Decimal places kept for elapsed seconds (default 5)")
                        .value_parser(value_parser!(u32)),
                ),
        )
        .subcommand(
            Command::new("compute_solution")
                .about("Computes a solution")
                .arg(
                    arg!(<SETTINGS> "Settings json string or path to json file")
                        .value_parser(value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the output data will be saved to this file path (default json)")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--compress "If output file is set, the output data will be compressed as zlib")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("verify_solution")
                .about("Verifies a solution")
                .arg(
                    arg!(<SETTINGS> "Settings json string or path to json file")
                        .value_parser(value_parser!(String)),
                )
                .arg(
                    arg!(<SOLUTION> "Solution json string, path to json or zlib file, or '-' for stdin")
                        .value_parser(value_parser!(String)),
                ),
        )
}

fn setup_logs() {
    let mut builder = env_logger::Builder::new();
    builder.filter_module("hanoi_runtime", log::LevelFilter::Info);
    if let Ok(filters) = std::env::var("HANOI_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn main() {
    setup_logs();
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("benchmark", sub_m)) => benchmark(
            sub_m.get_one::<u32>("MAX_DISKS").copied(),
            sub_m
                .get_many::<String>("algorithm")
                .map(|ids| ids.cloned().collect()),
            sub_m.get_one::<String>("config").cloned(),
            sub_m.get_one::<String>("output-dir").cloned(),
            sub_m.get_one::<u32>("precision").copied(),
        ),
        Some(("compute_solution", sub_m)) => match sub_m.get_one::<String>("SETTINGS") {
            Some(settings) => compute_solution(
                settings,
                sub_m.get_one::<PathBuf>("output").cloned(),
                sub_m.get_flag("compress"),
            ),
            None => Err(anyhow!("SETTINGS is required")),
        },
        Some(("verify_solution", sub_m)) => match (
            sub_m.get_one::<String>("SETTINGS"),
            sub_m.get_one::<String>("SOLUTION"),
        ) {
            (Some(settings), Some(solution)) => verify_solution(settings, solution),
            _ => Err(anyhow!("SETTINGS and SOLUTION are required")),
        },
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

pub fn benchmark(
    max_disks: Option<u32>,
    algorithms: Option<Vec<String>>,
    config: Option<String>,
    output_dir: Option<String>,
    precision: Option<u32>,
) -> Result<()> {
    let mut config = load_config(config.as_deref())?;
    if max_disks.is_some() {
        config.max_disks = max_disks;
    }
    if algorithms.is_some() {
        config.algorithms = algorithms;
    }
    if output_dir.is_some() {
        config.output_dir = output_dir;
    }
    if precision.is_some() {
        config.precision = precision;
    }
    log::debug!("benchmark config: {}", jsonify(&config)?);

    run_benchmarks(&config)?;
    Ok(())
}

pub fn compute_solution(settings: &str, output_file: Option<PathBuf>, compress: bool) -> Result<()> {
    let settings = load_settings(settings)?;
    let challenge = generate_challenge(&settings)?;
    let solve_challenge = get_algorithm(&settings.algorithm_id)
        .ok_or_else(|| anyhow!("Unknown algorithm '{}'", settings.algorithm_id))?;

    let mut solution = Map::new();
    let mut num_moves = 0;
    let mut err_msg = Option::<String>::None;

    let start = Instant::now();
    let result = solve_challenge(&challenge);
    let time_elapsed = start.elapsed().as_secs_f64();
    match result {
        Ok(Some(s)) => {
            num_moves = s.num_moves;
            solution = match serde_json::to_value(&s)? {
                Value::Object(map) => map,
                _ => return Err(anyhow!("Solution did not serialize to a json object")),
            };
        }
        Ok(None) => {}
        Err(e) => err_msg = Some(e.to_string()),
    }

    let output_data = OutputData {
        algorithm_id: settings.algorithm_id.clone(),
        num_disks: challenge.difficulty.num_disks,
        num_moves,
        time_elapsed,
        solution,
    };
    if let Some(path) = output_file {
        if compress {
            fs::write(&path, compress_obj(&output_data)?)?;
        } else {
            fs::write(&path, jsonify(&output_data)?)?;
        }
        println!("output_data written to: {:?}", path);
    } else {
        println!("{}", jsonify(&output_data)?);
    }
    if let Some(err_msg) = err_msg {
        eprintln!("Runtime error: {}", err_msg);
        std::process::exit(86);
    } else if output_data.solution.is_empty() {
        eprintln!("No solution found");
        std::process::exit(85);
    }
    Ok(())
}

pub fn verify_solution(settings: &str, solution_path: &str) -> Result<()> {
    let settings = load_settings(settings)?;
    let solution = load_solution(solution_path)?;
    let challenge = generate_challenge(&settings)?;

    let err_msg = match Solution::try_from(solution) {
        Ok(solution) => match challenge.verify_solution(&solution) {
            Ok(_) => {
                println!("Solution is valid");
                None
            }
            Err(e) => Some(format!("Invalid solution: {}", e)),
        },
        Err(_) => Some(format!(
            "Invalid solution. Cannot convert to {}::Solution",
            CHALLENGE_ID
        )),
    };

    if let Some(err_msg) = err_msg {
        eprintln!("Verification error: {}", err_msg);
        std::process::exit(1);
    }
    Ok(())
}

fn generate_challenge(settings: &BenchmarkSettings) -> Result<Challenge> {
    if settings.challenge_id != CHALLENGE_ID {
        return Err(anyhow!(
            "Unsupported challenge '{}'. Expected '{}'",
            settings.challenge_id,
            CHALLENGE_ID
        ));
    }
    let difficulty: Difficulty = settings.difficulty.clone().into();
    Challenge::generate_instance(&difficulty)
}
