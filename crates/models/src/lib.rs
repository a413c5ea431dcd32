//! Entity store for the accounts service: SeaORM entities, audit stamping,
//! boundary validators and connection helpers.

pub mod errors;
pub mod db;
pub mod audit;
pub mod customer;
pub mod accounts;

#[cfg(test)]
mod tests;
