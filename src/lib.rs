pub mod config;
pub mod game;
pub mod input;
pub mod output;
pub mod telemetry;
