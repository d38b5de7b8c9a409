//! Classic divide-and-conquer solver, as presented in Levitin's
//! "Introduction to the Design and Analysis of Algorithms".
use anyhow::Result;
use hanoi_challenges::towers_of_hanoi::{Challenge, Rod, Solution};

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    let num_disks = challenge.difficulty.num_disks;
    log::debug!("recursive: solving {} disks", num_disks);

    let mut source = challenge.source.clone();
    let mut destination = challenge.destination.clone();
    let mut auxiliary = challenge.auxiliary.clone();
    let num_moves = solve_recursive(num_disks, &mut source, &mut destination, &mut auxiliary);

    Ok(Some(Solution {
        num_moves,
        source,
        destination,
        auxiliary,
    }))
}

/// Moves the top `num_disks` disks from `source` to `destination` and returns
/// the number of disks physically moved.
///
/// Only the count is used to drive the recursion. If `num_disks` is larger
/// than the number of disks available, the middle move is skipped whenever
/// `source` is empty and is not counted.
pub fn solve_recursive(
    num_disks: u32,
    source: &mut Rod,
    destination: &mut Rod,
    auxiliary: &mut Rod,
) -> u64 {
    if num_disks == 0 {
        return 0;
    }
    let mut moves = solve_recursive(num_disks - 1, source, auxiliary, destination);
    if let Some(disk) = source.pop() {
        destination.push(disk);
        moves += 1;
    }
    moves + solve_recursive(num_disks - 1, auxiliary, destination, source)
}
