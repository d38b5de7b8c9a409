use hanoi_structs::{
    config::{BenchmarkConfig, DEFAULT_MAX_DISKS, DEFAULT_PRECISION},
    core::{BenchmarkRecord, BenchmarkSettings, OutputData},
};
use serde_json::json;

#[test]
fn test_benchmark_record_headers() {
    let record = BenchmarkRecord {
        num_disks: 3,
        time_elapsed: 0.00012,
        num_moves: 7,
    };
    let value = serde_json::to_value(&record).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    for header in BenchmarkRecord::HEADERS {
        assert!(keys.contains(&header), "missing {}", header);
    }
    assert_eq!(record.to_row(), vec!["3", "0.00012", "7"]);
}

#[test]
fn test_benchmark_settings_from_json() {
    let settings: BenchmarkSettings = serde_json::from_value(json!({
        "challenge_id": "towers_of_hanoi",
        "algorithm_id": "iterative",
        "difficulty": [5]
    }))
    .unwrap();
    assert_eq!(settings.algorithm_id, "iterative");
    assert_eq!(settings.difficulty, vec![5]);
}

#[test]
fn test_output_data_solution_is_object() {
    let output_data = OutputData {
        algorithm_id: "recursive".to_string(),
        num_disks: 1,
        num_moves: 1,
        time_elapsed: 0.0,
        solution: json!({"num_moves": 1}).as_object().unwrap().clone(),
    };
    let value = serde_json::to_value(&output_data).unwrap();
    assert_eq!(value["solution"]["num_moves"], 1);
}

#[test]
fn test_benchmark_config_defaults() {
    let config = BenchmarkConfig::default();
    assert_eq!(config.max_disks(), DEFAULT_MAX_DISKS);
    assert_eq!(config.precision(), DEFAULT_PRECISION);
    assert_eq!(config.output_dir(), ".");
    assert!(config.algorithms().is_empty());

    let config: BenchmarkConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, BenchmarkConfig::default());
    assert_eq!(serde_json::to_string(&config).unwrap(), "{}");
}

#[test]
fn test_benchmark_config_partial() {
    let config: BenchmarkConfig =
        serde_json::from_str(r#"{"max_disks": 12, "algorithms": ["iterative"]}"#).unwrap();
    assert_eq!(config.max_disks(), 12);
    assert_eq!(config.algorithms(), vec!["iterative".to_string()]);
    assert_eq!(config.precision(), DEFAULT_PRECISION);
}
