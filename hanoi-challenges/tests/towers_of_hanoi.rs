use hanoi_challenges::towers_of_hanoi::*;

#[test]
fn test_is_valid_rod() {
    assert!(is_valid_rod(&Rod::new()));
    assert!(is_valid_rod(&Rod::from(vec![3, 2, 1])));
    assert!(!is_valid_rod(&Rod::from(vec![1, 2, 3])));
    assert!(!is_valid_rod(&Rod::from(vec![5, 4, 6, 1])));
    assert!(is_valid_rod(&Rod::from(vec![7])));
}

#[test]
fn test_is_valid_rod_allows_ties() {
    assert!(is_valid_rod(&Rod::from(vec![2, 2, 1])));
    assert!(is_valid_rod(&Rod::from(vec![4, 4, 4])));
}

#[test]
fn test_rod_push_pop_top() {
    let mut rod = Rod::new();
    assert_eq!(rod.top(), None);
    assert_eq!(rod.pop(), None);

    rod.push(3);
    rod.push(1);
    assert_eq!(rod.top(), Some(1));
    assert_eq!(rod.len(), 2);
    assert_eq!(rod.pop(), Some(1));
    assert_eq!(rod.top(), Some(3));
    assert_eq!(rod.disks(), &[3]);

    // no placement check on push
    rod.push(9);
    assert_eq!(rod.disks(), &[3, 9]);
    assert!(!rod.is_valid());
}

#[test]
fn test_rod_with_disks() {
    assert_eq!(Rod::with_disks(4).disks(), &[4, 3, 2, 1]);
    assert!(Rod::with_disks(0).is_empty());
    assert!(Rod::with_disks(10).is_valid());
}

#[test]
fn test_rod_serializes_as_array() {
    let rod = Rod::from(vec![3, 2, 1]);
    assert_eq!(serde_json::to_string(&rod).unwrap(), "[3,2,1]");
    let rod: Rod = serde_json::from_str("[5,4]").unwrap();
    assert_eq!(rod.top(), Some(4));
}

#[test]
fn test_min_moves() {
    assert_eq!(min_moves(0), 0);
    assert_eq!(min_moves(1), 1);
    assert_eq!(min_moves(3), 7);
    assert_eq!(min_moves(20), 1_048_575);
    assert_eq!(min_moves(63), (1u64 << 63) - 1);
    assert_eq!(min_moves(64), u64::MAX);
}

#[test]
fn test_difficulty_from_vec() {
    let difficulty: Difficulty = vec![5].into();
    assert_eq!(difficulty.num_disks, 5);
    let difficulty: Difficulty = vec![-2].into();
    assert_eq!(difficulty.num_disks, 0);
    let arr: Vec<i32> = Difficulty { num_disks: 8 }.into();
    assert_eq!(arr, vec![8]);
}

#[test]
fn test_generate_instance() {
    let challenge = Challenge::generate_instance(&Difficulty { num_disks: 3 }).unwrap();
    assert_eq!(challenge.source.disks(), &[3, 2, 1]);
    assert!(challenge.destination.is_empty());
    assert!(challenge.auxiliary.is_empty());
    assert!(challenge.is_valid());
}

#[test]
fn test_generate_instance_too_many_disks() {
    assert!(Challenge::generate_instance(&Difficulty { num_disks: 64 }).is_err());
    assert!(Challenge::generate_instance(&Difficulty { num_disks: 63 }).is_ok());
}

fn solved(num_disks: u32) -> Solution {
    Solution {
        num_moves: min_moves(num_disks),
        source: Rod::new(),
        destination: Rod::with_disks(num_disks),
        auxiliary: Rod::new(),
    }
}

#[test]
fn test_verify_solution() {
    let challenge = Challenge::generate_instance(&Difficulty { num_disks: 4 }).unwrap();
    assert!(challenge.verify_solution(&solved(4)).is_ok());

    let mut wrong_count = solved(4);
    wrong_count.num_moves = 14;
    assert!(challenge.verify_solution(&wrong_count).is_err());

    let mut on_auxiliary = solved(4);
    std::mem::swap(&mut on_auxiliary.destination, &mut on_auxiliary.auxiliary);
    assert!(challenge.verify_solution(&on_auxiliary).is_err());

    let mut invalid = solved(4);
    invalid.destination = Rod::from(vec![4, 3, 1, 2]);
    let err = challenge.verify_solution(&invalid).unwrap_err();
    assert!(err.to_string().contains("destination"));

    let mut missing_disk = solved(4);
    missing_disk.destination.pop();
    missing_disk.source.push(1);
    assert!(challenge.verify_solution(&missing_disk).is_err());
}

#[test]
fn test_verify_solution_zero_disks() {
    let challenge = Challenge::generate_instance(&Difficulty { num_disks: 0 }).unwrap();
    assert!(challenge.verify_solution(&solved(0)).is_ok());
}

#[test]
fn test_solution_try_from_map() {
    let value = serde_json::json!({
        "num_moves": 1,
        "source": [],
        "destination": [1],
        "auxiliary": []
    });
    let solution = Solution::try_from(value.as_object().unwrap().clone()).unwrap();
    assert_eq!(solution, solved(1));
}
