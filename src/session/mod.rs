pub mod quiz;
pub mod tally;
