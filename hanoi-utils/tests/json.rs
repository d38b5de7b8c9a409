use hanoi_utils::{compress_obj, decompress_obj, dejsonify, jsonify};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Record {
    zeta: u32,
    alpha: Vec<u32>,
}

#[test]
fn test_jsonify_sorts_keys() {
    let record = Record {
        zeta: 1,
        alpha: vec![3, 2, 1],
    };
    assert_eq!(jsonify(&record).unwrap(), r#"{"alpha":[3,2,1],"zeta":1}"#);
}

#[test]
fn test_jsonify_sorts_nested_keys() {
    let value = json!({"b": {"y": 1, "x": 2}, "a": [{"d": 0, "c": 1}]});
    assert_eq!(
        jsonify(&value).unwrap(),
        r#"{"a":[{"c":1,"d":0}],"b":{"x":2,"y":1}}"#
    );
}

#[test]
fn test_dejsonify() {
    let record: Record = dejsonify(r#"{"zeta":7,"alpha":[]}"#).unwrap();
    assert_eq!(
        record,
        Record {
            zeta: 7,
            alpha: vec![]
        }
    );
    assert!(dejsonify::<Record>("not json").is_err());
}

#[test]
fn test_compress_obj() {
    let value = json!({"num_moves": 7, "destination": [3, 2, 1]});
    let compressed = compress_obj(&value).unwrap();
    let decompressed: Value = decompress_obj(&compressed).unwrap();
    assert_eq!(decompressed, value);
    assert!(decompress_obj::<Value>(b"garbage").is_err());
}
