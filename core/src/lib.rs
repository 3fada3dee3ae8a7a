pub mod config;
pub mod error;
pub mod invoker;
pub mod runner;
