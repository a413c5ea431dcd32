//! Create `customer` table.
//!
//! One row per customer; `mobile_number` is the business key and carries a
//! unique constraint so concurrent registrations cannot both succeed.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(pk_auto(Customer::CustomerId))
                    .col(string_len(Customer::Name, 100).not_null())
                    .col(string_len(Customer::Email, 100).not_null())
                    .col(string_len(Customer::MobileNumber, 20).unique_key().not_null())
                    .col(timestamp_with_time_zone(Customer::CreatedAt).not_null())
                    .col(string_len(Customer::CreatedBy, 20).not_null())
                    .col(
                        ColumnDef::new(Customer::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Customer::UpdatedBy).string_len(20).null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Customer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Customer { Table, CustomerId, Name, Email, MobileNumber, CreatedAt, CreatedBy, UpdatedAt, UpdatedBy }
