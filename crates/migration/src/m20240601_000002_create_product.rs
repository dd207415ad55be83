//! Create `product` table.
//! Every product belongs to one supplier; suppliers with products cannot be deleted.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(uuid(Product::Id).primary_key())
                    .col(uuid(Product::SupplierId).not_null())
                    .col(string_len(Product::Name, 255).not_null())
                    .col(string_len(Product::Category, 32).not_null())
                    .col(double(Product::Price).not_null())
                    .col(integer(Product::StockQuantity).not_null().default(0))
                    .col(string_len(Product::CertificationStatus, 32).not_null())
                    .col(timestamp_with_time_zone_null(Product::CertificationExpiryDate))
                    .col(text_null(Product::Description))
                    .col(timestamp_with_time_zone(Product::CreatedAt).not_null())
                    .check(Expr::col(Product::Price).gt(0))
                    .check(Expr::col(Product::StockQuantity).gte(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_supplier")
                            .from(Product::Table, Product::SupplierId)
                            .to(Supplier::Table, Supplier::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Product::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Product {
    Table,
    Id,
    SupplierId,
    Name,
    Category,
    Price,
    StockQuantity,
    CertificationStatus,
    CertificationExpiryDate,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Supplier { Table, Id }
