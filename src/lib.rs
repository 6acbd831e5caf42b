// Core modules
pub mod config;
pub mod state;
pub mod types;
pub mod web;

// Re-exports
pub use state::AppState;
