// Each module handles one CLI subcommand. main.rs parses arguments and
// dispatches to these handlers.

pub mod graph;
pub mod locations;
pub mod nearest;
pub mod route;
