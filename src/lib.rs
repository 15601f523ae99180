pub mod config;
pub mod difficulty;
pub mod error;
pub mod stats;
// cmd and reports belong to the binary (main.rs).
