pub mod config;
pub mod error;
pub mod registry;
pub mod search_index;
pub mod stats;
pub mod types;
