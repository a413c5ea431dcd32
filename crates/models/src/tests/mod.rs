
/// Transaction handling and constraint tests
pub mod transaction_tests;


/// Pool options
pub mod db_tests;

use sea_orm::{DatabaseConnection, Set};

use crate::{audit::AuditContext, customer};

pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    crate::db::connect_memory().await
}

pub(crate) fn new_customer(name: &str, mobile: &str) -> customer::ActiveModel {
    customer::ActiveModel {
        name: Set(name.to_string()),
        email: Set(format!("{}@example.com", name.to_lowercase())),
        mobile_number: Set(mobile.to_string()),
        ..Default::default()
    }
}

pub(crate) fn ctx() -> AuditContext {
    AuditContext::new("TEST_ACTOR")
}
