#![cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use models::audit::AuditContext;
use sea_orm::DatabaseConnection;

use crate::account::{service::AccountNumberSource, AccountService, CustomerDto};

/// Fresh migrated in-memory database; every test gets its own.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_memory().await
}

pub async fn get_service() -> Result<AccountService, anyhow::Error> {
    Ok(AccountService::new(get_db().await?, AuditContext::new("TEST_ACTOR")))
}

/// Yields `numbers` in order, then repeats the last one.
pub fn fixed_numbers(numbers: Vec<i64>) -> AccountNumberSource {
    assert!(!numbers.is_empty(), "fixed_numbers needs at least one account number");
    let next = AtomicUsize::new(0);
    Arc::new(move || {
        let i = next.fetch_add(1, Ordering::SeqCst).min(numbers.len() - 1);
        numbers[i]
    })
}

pub fn customer_dto(name: &str, mobile: &str) -> CustomerDto {
    CustomerDto {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        mobile_number: mobile.to_string(),
    }
}
