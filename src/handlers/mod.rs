// Handler modules
pub mod analyze;
pub mod update;

// Re-export all handler functions
pub use analyze::handle_analyze;
pub use update::handle_update;
