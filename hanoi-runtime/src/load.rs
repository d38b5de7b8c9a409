use anyhow::{anyhow, Context, Result};
use hanoi_structs::{
    config::BenchmarkConfig,
    core::{BenchmarkSettings, Solution},
};
use hanoi_utils::{decompress_obj, dejsonify};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{fs, io::Read};

/// Parses `arg` as JSON, reading it from disk first when it names a `.json`
/// file.
pub fn load_json<T>(arg: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let json = if arg.ends_with(".json") {
        fs::read_to_string(arg).with_context(|| format!("Failed to read file: {}", arg))?
    } else {
        arg.to_string()
    };
    dejsonify::<T>(&json).with_context(|| format!("Failed to parse json: {}", arg))
}

pub fn load_settings(settings: &str) -> Result<BenchmarkSettings> {
    load_json(settings).context("Failed to load settings")
}

pub fn load_config(config: Option<&str>) -> Result<BenchmarkConfig> {
    match config {
        Some(config) => load_json(config).context("Failed to load config"),
        None => Ok(BenchmarkConfig::default()),
    }
}

/// Accepts a solution json string, a `.json` file, a `.zlib` file written by
/// `compute_solution --compress`, or `-` for stdin. Output data wrapping a
/// solution is unwrapped.
pub fn load_solution(solution: &str) -> Result<Solution> {
    let value: Value = if solution == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read solution from stdin")?;
        dejsonify(&buffer).context("Failed to parse solution")?
    } else if solution.ends_with(".zlib") {
        let bytes =
            fs::read(solution).with_context(|| format!("Failed to read file: {}", solution))?;
        decompress_obj(&bytes)?
    } else {
        load_json(solution)?
    };

    match value {
        Value::Object(mut map) => match map.remove("solution") {
            Some(Value::Object(inner)) => Ok(inner),
            Some(other) => {
                map.insert("solution".to_string(), other);
                Ok(map)
            }
            None => Ok(map),
        },
        _ => Err(anyhow!("Solution must be a json object")),
    }
}
