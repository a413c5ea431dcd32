use sea_orm::TransactionError;
use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Customer already registered with given mobileNumber {0}")]
    AlreadyExists(String),
    #[error("{entity} not found with the given input data {field} : '{value}'")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },
    #[error("could not allocate a free account number after {0} attempts")]
    AccountNumberUnavailable(usize),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, field: &'static str, value: impl ToString) -> Self {
        Self::NotFound { entity, field, value: value.to_string() }
    }

    /// A unique violation on the customer row means the mobile number is taken.
    pub(crate) fn duplicate_as_exists(e: ModelError, mobile: &str) -> Self {
        match e {
            ModelError::Duplicate(_) => Self::AlreadyExists(mobile.to_string()),
            other => Self::Model(other),
        }
    }
}

impl From<TransactionError<ServiceError>> for ServiceError {
    fn from(e: TransactionError<ServiceError>) -> Self {
        match e {
            TransactionError::Connection(db) => ServiceError::Db(db.to_string()),
            TransactionError::Transaction(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_field_and_value() {
        let e = ServiceError::not_found("Customer", "mobileNumber", "1234567890");
        assert_eq!(e.to_string(), "Customer not found with the given input data mobileNumber : '1234567890'");
        let e = ServiceError::not_found("Account", "customerId", 1);
        assert_eq!(e.to_string(), "Account not found with the given input data customerId : '1'");
    }

    #[test]
    fn duplicate_maps_to_already_exists() {
        let e = ServiceError::duplicate_as_exists(ModelError::Duplicate("customer.mobile_number".into()), "1234567890");
        assert_eq!(e.to_string(), "Customer already registered with given mobileNumber 1234567890");
        let e = ServiceError::duplicate_as_exists(ModelError::Db("boom".into()), "1234567890");
        assert!(matches!(e, ServiceError::Model(ModelError::Db(_))));
    }
}
