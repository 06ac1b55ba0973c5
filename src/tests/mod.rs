mod config_tests;
mod sequence_tests;
pub mod test_utils;
