//! Customer + savings account use cases.

pub mod dto;
pub mod mapper;
pub mod service;

pub use dto::{AccountsDto, CustomerDetailsDto, CustomerDto};
pub use service::AccountService;
