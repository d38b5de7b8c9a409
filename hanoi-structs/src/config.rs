use crate::serializable_struct_with_getters;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_DISKS: u32 = 6;
pub const DEFAULT_PRECISION: u32 = 5;

serializable_struct_with_getters! {
    BenchmarkConfig {
        max_disks: Option<u32> = DEFAULT_MAX_DISKS,
        // empty means every registered algorithm
        algorithms: Option<Vec<String>> = Vec::new(),
        output_dir: Option<String> = ".".to_string(),
        // decimal places kept for elapsed seconds
        precision: Option<u32> = DEFAULT_PRECISION,
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            max_disks: None,
            algorithms: None,
            output_dir: None,
            precision: None,
        }
    }
}
