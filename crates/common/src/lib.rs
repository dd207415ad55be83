//! Cross-cutting helpers shared by the server, service and binary crates.

pub mod types;
pub mod utils;
pub mod env;
pub mod metrics;
