//! Create `supplier` table.
//!
//! Root entity; products reference it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Supplier::Table)
                    .if_not_exists()
                    .col(uuid(Supplier::Id).primary_key())
                    .col(string_len(Supplier::Name, 255).not_null())
                    .col(string_len(Supplier::Email, 320).unique_key().not_null())
                    .col(string_len(Supplier::Country, 100).not_null())
                    .col(string_len_null(Supplier::ContactPerson, 255))
                    .col(string_len_null(Supplier::Phone, 20))
                    .col(timestamp_with_time_zone(Supplier::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Supplier::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Supplier { Table, Id, Name, Email, Country, ContactPerson, Phone, CreatedAt }
