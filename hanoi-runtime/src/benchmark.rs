use anyhow::{anyhow, bail, Result};
use hanoi_algorithms::towers_of_hanoi::{get_algorithm, ALGORITHMS};
use hanoi_challenges::towers_of_hanoi::{Challenge, Difficulty, MAX_NUM_DISKS};
use hanoi_structs::{config::BenchmarkConfig, core::BenchmarkRecord};
use hanoi_utils::{format_table, write_csv};
use std::{
    path::{Path, PathBuf},
    time::Instant,
};

/// Decimal places beyond what an `f64` can hold are ignored.
pub const MAX_PRECISION: u32 = 15;

/// Solves a fresh puzzle for every disk count in `1..=max_disks` with one
/// algorithm, timing each solve.
///
/// Every solution is verified before it is recorded. `on_record` is called
/// with all records so far after each one is added.
pub fn run_benchmark<F>(
    algorithm_id: &str,
    max_disks: u32,
    precision: u32,
    mut on_record: F,
) -> Result<Vec<BenchmarkRecord>>
where
    F: FnMut(&[BenchmarkRecord]) -> Result<()>,
{
    if max_disks > MAX_NUM_DISKS {
        bail!(
            "Number of disks ({}) exceeds maximum ({})",
            max_disks,
            MAX_NUM_DISKS
        );
    }
    let solve_challenge =
        get_algorithm(algorithm_id).ok_or_else(|| anyhow!("Unknown algorithm '{}'", algorithm_id))?;

    let mut records = Vec::new();
    for num_disks in 1..=max_disks {
        let challenge = Challenge::generate_instance(&Difficulty { num_disks })?;
        if !challenge.is_valid() {
            return Err(anyhow!("Generated puzzle with {} disks is invalid", num_disks));
        }

        let start = Instant::now();
        let solution = solve_challenge(&challenge)?.ok_or_else(|| {
            anyhow!("{} found no solution for {} disks", algorithm_id, num_disks)
        })?;
        let time_elapsed = start.elapsed().as_secs_f64();

        challenge
            .verify_solution(&solution)
            .map_err(|e| anyhow!("{} with {} disks: {}", algorithm_id, num_disks, e))?;

        let record = BenchmarkRecord {
            num_disks,
            time_elapsed: round_to(time_elapsed, precision),
            num_moves: solution.num_moves,
        };
        log::info!(
            "{}: {} disks took {} (s) and {} moves",
            algorithm_id,
            record.num_disks,
            record.time_elapsed,
            record.num_moves
        );
        records.push(record);
        on_record(&records)?;
    }
    Ok(records)
}

/// Runs every configured algorithm. After each record the algorithm's CSV is
/// rewritten and its table reprinted.
pub fn run_benchmarks(config: &BenchmarkConfig) -> Result<Vec<(String, Vec<BenchmarkRecord>)>> {
    let algorithm_ids = resolve_algorithms(&config.algorithms())?;
    let output_dir = PathBuf::from(config.output_dir());

    let mut results = Vec::with_capacity(algorithm_ids.len());
    for algorithm_id in algorithm_ids {
        let path = csv_path(&output_dir, &algorithm_id);
        let heading = title(&algorithm_id);
        let records = run_benchmark(
            &algorithm_id,
            config.max_disks(),
            config.precision(),
            |records| {
                if let Err(e) = write_csv(&path, records) {
                    log::warn!("Failed to write {:?}: {}", path, e);
                }
                println!("{}\n{}\n", heading, render_records(records));
                Ok(())
            },
        )?;
        log::info!("{} results written to {:?}", algorithm_id, path);
        results.push((algorithm_id, records));
    }
    Ok(results)
}

/// Empty selects every registered algorithm. Unknown ids are rejected up front.
pub fn resolve_algorithms(requested: &[String]) -> Result<Vec<String>> {
    if requested.is_empty() {
        return Ok(ALGORITHMS.iter().map(|id| id.to_string()).collect());
    }
    for id in requested {
        if get_algorithm(id).is_none() {
            return Err(anyhow!(
                "Unknown algorithm '{}'. Expected one of: {}",
                id,
                ALGORITHMS.join(", ")
            ));
        }
    }
    Ok(requested.to_vec())
}

pub fn csv_path(output_dir: &Path, algorithm_id: &str) -> PathBuf {
    output_dir.join(format!("{}_toh.csv", algorithm_id))
}

pub fn render_records(records: &[BenchmarkRecord]) -> String {
    let rows: Vec<Vec<String>> = records.iter().map(BenchmarkRecord::to_row).collect();
    format_table(&BenchmarkRecord::HEADERS, &rows)
}

pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    (value * factor).round() / factor
}

fn title(algorithm_id: &str) -> String {
    let mut chars = algorithm_id.chars();
    match chars.next() {
        Some(first) => format!(
            "{}{} Towers of Hanoi Algorithm",
            first.to_uppercase(),
            chars.as_str()
        ),
        None => "Towers of Hanoi Algorithm".to_string(),
    }
}
