//! Unit tests for Shotboard.

mod hit_testing_tests;
mod snapshot_tests;
