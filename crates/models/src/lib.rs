pub mod errors;
pub mod validation;
pub mod db;
pub mod supplier;
pub mod product;

#[cfg(test)]
mod tests;
