//! Field copies between DTOs and entity records. Audit columns and keys are
//! never touched here.

use sea_orm::Set;

use models::{accounts, customer};

use super::dto::{AccountsDto, CustomerDto};

pub fn to_customer_dto(m: &customer::Model) -> CustomerDto {
    CustomerDto {
        name: m.name.clone(),
        email: m.email.clone(),
        mobile_number: m.mobile_number.clone(),
    }
}

pub fn to_accounts_dto(m: &accounts::Model) -> AccountsDto {
    AccountsDto {
        account_number: m.account_number,
        account_type: m.account_type.clone(),
        branch_address: m.branch_address.clone(),
    }
}

pub fn new_customer(dto: &CustomerDto) -> customer::ActiveModel {
    let mut am = customer::ActiveModel::default();
    apply_customer_dto(dto, &mut am);
    am
}

pub fn apply_customer_dto(dto: &CustomerDto, am: &mut customer::ActiveModel) {
    am.name = Set(dto.name.clone());
    am.email = Set(dto.email.clone());
    am.mobile_number = Set(dto.mobile_number.clone());
}

/// Only type and branch are mutable; number and owner stay as stored.
pub fn apply_accounts_dto(dto: &AccountsDto, am: &mut accounts::ActiveModel) {
    am.account_type = Set(dto.account_type.clone());
    am.branch_address = Set(dto.branch_address.clone());
}
