pub mod benchmark;
pub mod load;

pub const CHALLENGE_ID: &str = "towers_of_hanoi";
