#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod command_context;
pub mod commands;
pub mod configuration;
pub mod utils;

pub use command_context::CommandContext;
