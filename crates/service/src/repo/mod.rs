//! Storage backends implementing every repository trait.

pub mod memory;
pub mod seaorm;

pub use memory::InMemoryCatalog;
pub use seaorm::SeaOrmCatalog;
