use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::{from_value, Map, Value};

pub type Disk = u32;

/// Largest disk count whose minimal move count `2^n - 1` fits in a `u64`.
pub const MAX_NUM_DISKS: u32 = 63;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Difficulty {
    pub num_disks: u32,
}

impl From<Vec<i32>> for Difficulty {
    fn from(arr: Vec<i32>) -> Self {
        Self {
            num_disks: arr.first().copied().unwrap_or(0).max(0) as u32,
        }
    }
}

impl Into<Vec<i32>> for Difficulty {
    fn into(self) -> Vec<i32> {
        vec![self.num_disks as i32]
    }
}

/// One peg of the puzzle. The last disk is the topmost one.
///
/// `Rod` does not police the placement rule: pushing a larger disk onto a
/// smaller one is allowed, and [`is_valid_rod`] reports it afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Rod {
    disks: Vec<Disk>,
}

impl Rod {
    pub fn new() -> Self {
        Self { disks: Vec::new() }
    }

    /// Full tower of `num_disks` disks, largest at the bottom and disk 1 on top.
    pub fn with_disks(num_disks: u32) -> Self {
        Self {
            disks: (1..=num_disks).rev().collect(),
        }
    }

    pub fn top(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    pub fn pop(&mut self) -> Option<Disk> {
        self.disks.pop()
    }

    pub fn push(&mut self, disk: Disk) {
        self.disks.push(disk);
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Disks from bottom to top.
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    pub fn is_valid(&self) -> bool {
        is_valid_rod(self)
    }
}

impl From<Vec<Disk>> for Rod {
    fn from(disks: Vec<Disk>) -> Self {
        Self { disks }
    }
}

/// A rod is valid when no disk is strictly larger than the disk directly
/// beneath it. Equal neighbours pass.
pub fn is_valid_rod(rod: &Rod) -> bool {
    rod.disks.windows(2).all(|pair| pair[1] <= pair[0])
}

/// Minimal number of moves for `num_disks` disks, saturating at `u64::MAX`.
pub fn min_moves(num_disks: u32) -> u64 {
    1u64.checked_shl(num_disks).map_or(u64::MAX, |total| total - 1)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Solution {
    pub num_moves: u64,
    pub source: Rod,
    pub destination: Rod,
    pub auxiliary: Rod,
}

impl TryFrom<Map<String, Value>> for Solution {
    type Error = serde_json::Error;

    fn try_from(v: Map<String, Value>) -> Result<Self, Self::Error> {
        from_value(Value::Object(v))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Challenge {
    pub difficulty: Difficulty,
    pub source: Rod,
    pub destination: Rod,
    pub auxiliary: Rod,
}

impl Challenge {
    pub fn generate_instance(difficulty: &Difficulty) -> Result<Self> {
        if difficulty.num_disks > MAX_NUM_DISKS {
            return Err(anyhow!(
                "Number of disks ({}) exceeds maximum ({})",
                difficulty.num_disks,
                MAX_NUM_DISKS
            ));
        }
        log::debug!(
            "Generating towers_of_hanoi instance with {} disks",
            difficulty.num_disks
        );

        Ok(Self {
            difficulty: *difficulty,
            source: Rod::with_disks(difficulty.num_disks),
            destination: Rod::new(),
            auxiliary: Rod::new(),
        })
    }

    pub fn is_valid(&self) -> bool {
        self.source.is_valid() && self.destination.is_valid() && self.auxiliary.is_valid()
    }

    pub fn verify_solution(&self, solution: &Solution) -> Result<()> {
        for (name, rod) in [
            ("source", &solution.source),
            ("destination", &solution.destination),
            ("auxiliary", &solution.auxiliary),
        ] {
            if !rod.is_valid() {
                return Err(anyhow!(
                    "Rod '{}' has a larger disk on top of a smaller one: {:?}",
                    name,
                    rod.disks()
                ));
            }
        }
        if !solution.source.is_empty() || !solution.auxiliary.is_empty() {
            return Err(anyhow!(
                "Source and auxiliary rods must end empty (source: {}, auxiliary: {} disks left)",
                solution.source.len(),
                solution.auxiliary.len()
            ));
        }
        let expected = Rod::with_disks(self.difficulty.num_disks);
        if solution.destination != expected {
            return Err(anyhow!(
                "Destination rod should be {:?}, got {:?}",
                expected.disks(),
                solution.destination.disks()
            ));
        }
        let expected_moves = min_moves(self.difficulty.num_disks);
        if solution.num_moves != expected_moves {
            return Err(anyhow!(
                "Number of moves ({}) does not match minimum ({})",
                solution.num_moves,
                expected_moves
            ));
        }
        Ok(())
    }
}
