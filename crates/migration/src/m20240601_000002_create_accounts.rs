//! Create `accounts` table with FK to `customer`.
//!
//! `account_number` is generated by the service, not by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(big_integer(Accounts::AccountNumber).primary_key())
                    .col(integer(Accounts::CustomerId).not_null())
                    .col(string_len(Accounts::AccountType, 100).not_null())
                    .col(string_len(Accounts::BranchAddress, 200).not_null())
                    .col(timestamp_with_time_zone(Accounts::CreatedAt).not_null())
                    .col(string_len(Accounts::CreatedBy, 20).not_null())
                    .col(
                        ColumnDef::new(Accounts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Accounts::UpdatedBy).string_len(20).null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_accounts_customer")
                            .from(Accounts::Table, Accounts::CustomerId)
                            .to(Customer::Table, Customer::CustomerId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Accounts::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Accounts { Table, AccountNumber, CustomerId, AccountType, BranchAddress, CreatedAt, CreatedBy, UpdatedAt, UpdatedBy }

#[derive(DeriveIden)]
enum Customer { Table, CustomerId }
