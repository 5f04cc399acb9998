pub mod cli;
pub mod commands;
pub mod diagram;
pub mod scaling;
pub mod utils;
