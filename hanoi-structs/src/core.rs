use crate::serializable_struct_with_getters;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type Solution = Map<String, Value>;

serializable_struct_with_getters! {
    BenchmarkSettings {
        challenge_id: String,
        algorithm_id: String,
        difficulty: Vec<i32>,
    }
}

serializable_struct_with_getters! {
    OutputData {
        algorithm_id: String,
        num_disks: u32,
        num_moves: u64,
        time_elapsed: f64,
        solution: Solution,
    }
}

serializable_struct_with_getters! {
    BenchmarkRecord {
        #[serde(rename = "Number of Disk(s)")]
        num_disks: u32,
        #[serde(rename = "Time Elapsed (s)")]
        time_elapsed: f64,
        #[serde(rename = "Move(s)")]
        num_moves: u64,
    }
}

impl BenchmarkRecord {
    pub const HEADERS: [&'static str; 3] = ["Number of Disk(s)", "Time Elapsed (s)", "Move(s)"];

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.num_disks.to_string(),
            self.time_elapsed.to_string(),
            self.num_moves.to_string(),
        ]
    }
}
