//! Service layer for GreenTrade Hub.
//! - Business operations (CRUD, analytics summary, global search) behind repository traits.
//! - `repo::seaorm` talks to PostgreSQL, `repo::memory` backs tests and local demos.
//! - Entity definitions and field validation live in the `models` crate.

pub mod errors;
pub mod repo;
pub mod suppliers;
pub mod products;
pub mod analytics;
pub mod search;
pub mod fixtures;
#[cfg(test)]
pub mod test_support;
