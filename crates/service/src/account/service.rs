use std::sync::Arc;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::{debug, info, instrument, warn};

use models::{accounts, audit::AuditContext, customer};

use super::dto::{CustomerDetailsDto, CustomerDto};
use super::mapper;
use crate::errors::ServiceError;

/// How many fresh candidates are tried before giving up on a new account number.
pub const MAX_ACCOUNT_NUMBER_ATTEMPTS: usize = 10;

/// Source of candidate account numbers.
pub type AccountNumberSource = Arc<dyn Fn() -> i64 + Send + Sync>;

fn random_source() -> AccountNumberSource {
    Arc::new(|| accounts::random_account_number(&mut rand::thread_rng()))
}

/// Orchestrates the customer/account use cases over the entity store.
///
/// Every multi-row write runs inside one database transaction, so a failure
/// in the second write leaves nothing behind.
#[derive(Clone)]
pub struct AccountService {
    db: DatabaseConnection,
    audit: AuditContext,
    numbers: AccountNumberSource,
}

impl AccountService {
    pub fn new(db: DatabaseConnection, audit: AuditContext) -> Self {
        Self { db, audit, numbers: random_source() }
    }

    /// Replace the account number generator (deterministic numbers in tests).
    pub fn with_account_numbers(mut self, numbers: AccountNumberSource) -> Self {
        self.numbers = numbers;
        self
    }

    pub fn db(&self) -> &DatabaseConnection { &self.db }

    /// Register a customer and open a savings account for them.
    ///
    /// # Examples
    /// ```
    /// use models::audit::AuditContext;
    /// use service::account::{AccountService, CustomerDto};
    /// tokio_test::block_on(async {
    ///     let db = models::db::connect_memory().await.unwrap();
    ///     let svc = AccountService::new(db, AuditContext::default());
    ///     let input = CustomerDto { name: "Alice".into(), email: "alice@example.com".into(), mobile_number: "1234567890".into() };
    ///     svc.create_account(input).await.unwrap();
    ///     let view = svc.fetch_account("1234567890").await.unwrap();
    ///     assert_eq!(view.account.unwrap().account_type, "SAVINGS");
    /// });
    /// ```
    #[instrument(skip(self, input), fields(mobile_number = %input.mobile_number))]
    pub async fn create_account(&self, input: CustomerDto) -> Result<(), ServiceError> {
        if let Some(existing) = customer::find_by_mobile_number(&self.db, &input.mobile_number).await? {
            debug!(customer_id = existing.customer_id, "customer exists");
            return Err(ServiceError::AlreadyExists(input.mobile_number));
        }

        let audit = self.audit.clone();
        let numbers = Arc::clone(&self.numbers);
        let (saved, account) = self
            .db
            .transaction::<_, (customer::Model, accounts::Model), ServiceError>(|txn| {
                Box::pin(async move {
                    let saved = customer::insert(txn, mapper::new_customer(&input), &audit)
                        .await
                        .map_err(|e| ServiceError::duplicate_as_exists(e, &input.mobile_number))?;
                    let number = allocate_account_number(txn, &numbers).await?;
                    let account = accounts::insert(txn, accounts::new_savings(saved.customer_id, number), &audit).await?;
                    Ok((saved, account))
                })
            })
            .await?;

        info!(customer_id = saved.customer_id, account_number = account.account_number, "account_created");
        Ok(())
    }

    /// Combined customer/account view for a mobile number. Read-only.
    #[instrument(skip(self))]
    pub async fn fetch_account(&self, mobile_number: &str) -> Result<CustomerDetailsDto, ServiceError> {
        let found = customer::find_by_mobile_number(&self.db, mobile_number)
            .await?
            .ok_or_else(|| ServiceError::not_found("Customer", "mobileNumber", mobile_number))?;

        let customer_id = found.customer_id;
        let account = accounts::find_by_customer_id(&self.db, customer_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Account", "customerId", customer_id))?;

        Ok(CustomerDetailsDto {
            customer: Some(mapper::to_customer_dto(&found)),
            account: Some(mapper::to_accounts_dto(&account)),
        })
    }

    /// Overwrite the mutable account and customer fields.
    ///
    /// Returns `Ok(false)` without touching the store when the view carries
    /// no account block or an empty one.
    #[instrument(skip(self, details))]
    pub async fn update_account(&self, details: CustomerDetailsDto) -> Result<bool, ServiceError> {
        let Some(account_dto) = details.account.filter(|a| !a.is_empty()) else {
            debug!("no account details; nothing to update");
            return Ok(false);
        };
        let customer_dto = details.customer;

        let audit = self.audit.clone();
        let account_number = account_dto.account_number;
        self.db
            .transaction::<_, (), ServiceError>(|txn| {
                Box::pin(async move {
                    let stored = accounts::find_by_account_number(txn, account_dto.account_number)
                        .await?
                        .ok_or_else(|| ServiceError::not_found("Account", "AccountNumber", account_dto.account_number))?;
                    let mut am: accounts::ActiveModel = stored.into();
                    mapper::apply_accounts_dto(&account_dto, &mut am);
                    let saved = accounts::update(txn, am, &audit).await?;

                    let customer_id = saved.customer_id;
                    let owner = customer::find_by_id(txn, customer_id)
                        .await?
                        .ok_or_else(|| ServiceError::not_found("Customer", "CustomerID", customer_id))?;
                    match customer_dto {
                        Some(dto) => {
                            let mut am: customer::ActiveModel = owner.into();
                            mapper::apply_customer_dto(&dto, &mut am);
                            customer::update(txn, am, &audit)
                                .await
                                .map_err(|e| ServiceError::duplicate_as_exists(e, &dto.mobile_number))?;
                        }
                        None => warn!(customer_id, "no customer block; customer left unchanged"),
                    }
                    Ok(())
                })
            })
            .await?;

        info!(account_number, "account_updated");
        Ok(true)
    }

    /// Remove the customer and all of their accounts.
    #[instrument(skip(self))]
    pub async fn delete_account(&self, mobile_number: &str) -> Result<bool, ServiceError> {
        let found = customer::find_by_mobile_number(&self.db, mobile_number)
            .await?
            .ok_or_else(|| ServiceError::not_found("Customer", "mobileNumber", mobile_number))?;

        let customer_id = found.customer_id;
        let removed = self
            .db
            .transaction::<_, u64, ServiceError>(|txn| {
                Box::pin(async move {
                    let removed = accounts::delete_by_customer_id(txn, customer_id).await?;
                    customer::delete_by_id(txn, customer_id).await?;
                    Ok(removed)
                })
            })
            .await?;

        info!(customer_id, accounts_removed = removed, "account_deleted");
        Ok(true)
    }
}

/// Draw candidates until one is not taken.
async fn allocate_account_number(txn: &DatabaseTransaction, numbers: &AccountNumberSource) -> Result<i64, ServiceError> {
    for attempt in 1..=MAX_ACCOUNT_NUMBER_ATTEMPTS {
        let candidate = numbers();
        if !accounts::exists(txn, candidate).await? {
            return Ok(candidate);
        }
        warn!(candidate, attempt, "account number collision");
    }
    Err(ServiceError::AccountNumberUnavailable(MAX_ACCOUNT_NUMBER_ATTEMPTS))
}
