pub mod random;
pub mod timer;
