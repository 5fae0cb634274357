// Composition root.
//
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers.
// - Spawn background workers (year-end carryover).

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod workers;
