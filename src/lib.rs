// Library target exists for criterion benchmarks and integration tests.
// The binary entry point is main.rs; it imports these modules via
// `ancients::alphabet::*` / `ancients::session::*`.
pub mod alphabet;
pub mod engine;
pub mod session;
