//! Service layer for the accounts microservice.
//! - Orchestrates customer/account use cases on top of the `models` entity store.
//! - Owns the DTOs exchanged with the HTTP layer and the mapping to entities.
//! - Reports business failures as [`errors::ServiceError`]; status codes are the caller's concern.

pub mod errors;
pub mod account;
#[cfg(test)]
pub mod test_support;

pub use account::AccountService;
