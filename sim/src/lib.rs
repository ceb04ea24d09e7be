pub mod batch;
pub mod database;
pub mod runner;

pub use batch::{run_batch, AgentKind};
pub use database::Database;
pub use runner::{run_game, RunResult};
