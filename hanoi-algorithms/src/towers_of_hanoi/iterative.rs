//! Nonrecursive solver after Mayer & Perkins, "Towers of Hanoi Revisited:
//! a Nonrecursive Surprise", SIGPLAN Notices 19(2), 1984.
//!
//! Move `i` (1-based) is chosen purely by `i % 3` from a fixed cycle of rod
//! pairs; [`move_disk`] decides the direction within each pair.
use anyhow::Result;
use hanoi_challenges::towers_of_hanoi::{min_moves, Challenge, Disk, Rod, Solution};

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    let num_disks = challenge.difficulty.num_disks;
    log::debug!("iterative: solving {} disks", num_disks);

    let mut source = challenge.source.clone();
    let mut destination = challenge.destination.clone();
    let mut auxiliary = challenge.auxiliary.clone();
    let num_moves = solve_iterative(num_disks, &mut source, &mut destination, &mut auxiliary);

    Ok(Some(Solution {
        num_moves,
        source,
        destination,
        auxiliary,
    }))
}

/// Performs `2^num_disks - 1` moves and returns that count.
///
/// The cycle (source, target), (source, spare), (spare, target) gathers the
/// tower on `target` when the disk count is odd and on `spare` when it is
/// even, so for even counts `destination` and `auxiliary` swap roles.
pub fn solve_iterative(
    num_disks: u32,
    source: &mut Rod,
    destination: &mut Rod,
    auxiliary: &mut Rod,
) -> u64 {
    let total_moves = min_moves(num_disks);
    // the cycle alone leaves an even tower on `auxiliary`
    let (target, spare) = if num_disks % 2 == 0 {
        (auxiliary, destination)
    } else {
        (destination, auxiliary)
    };

    for i in 1..=total_moves {
        match i % 3 {
            1 => move_disk(source, target),
            2 => move_disk(source, spare),
            _ => move_disk(spare, target),
        };
    }
    total_moves
}

/// Moves one disk between `a` and `b` in whichever direction is legal and
/// returns it.
///
/// An empty rod always receives. Otherwise the smaller top disk goes onto the
/// larger one; on equal tops the disk on `a` moves to `b`. Returns `None` if
/// both rods are empty.
pub fn move_disk(a: &mut Rod, b: &mut Rod) -> Option<Disk> {
    let (from, to) = match (a.top(), b.top()) {
        (None, None) => return None,
        (None, Some(_)) => (b, a),
        (Some(_), None) => (a, b),
        (Some(top_a), Some(top_b)) if top_a > top_b => (b, a),
        (Some(_), Some(_)) => (a, b),
    };
    let disk = from.pop()?;
    to.push(disk);
    Some(disk)
}
