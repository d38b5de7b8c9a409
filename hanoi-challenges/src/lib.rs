pub mod towers_of_hanoi;
