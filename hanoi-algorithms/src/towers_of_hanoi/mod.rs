use anyhow::Result;
use hanoi_challenges::towers_of_hanoi::{Challenge, Solution};

pub mod iterative;
pub mod recursive;

pub type SolveChallengeFn = fn(&Challenge) -> Result<Option<Solution>>;

/// Algorithm ids in the order the benchmark runs them.
pub const ALGORITHMS: [&str; 2] = ["recursive", "iterative"];

pub fn algorithm_exists(id: &str) -> bool {
    get_algorithm(id).is_some()
}

pub fn get_algorithm(id: &str) -> Option<SolveChallengeFn> {
    match id {
        "recursive" => Some(recursive::solve_challenge),
        "iterative" => Some(iterative::solve_challenge),
        _ => None,
    }
}
