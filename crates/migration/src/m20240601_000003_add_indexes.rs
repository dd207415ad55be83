use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Product: lookups by owning supplier
        manager
            .create_index(
                Index::create()
                    .name("idx_product_supplier")
                    .table(Product::Table)
                    .col(Product::SupplierId)
                    .to_owned(),
            )
            .await?;

        // Product: list filters and analytics group-bys
        manager
            .create_index(
                Index::create()
                    .name("idx_product_category")
                    .table(Product::Table)
                    .col(Product::Category)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_product_certification_status")
                    .table(Product::Table)
                    .col(Product::CertificationStatus)
                    .to_owned(),
            )
            .await?;

        // Listings are ordered newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_product_created_at")
                    .table(Product::Table)
                    .col(Product::CreatedAt)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_supplier_created_at")
                    .table(Supplier::Table)
                    .col(Supplier::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_product_supplier").table(Product::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_product_category").table(Product::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_product_certification_status").table(Product::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_product_created_at").table(Product::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_supplier_created_at").table(Supplier::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Product { Table, SupplierId, Category, CertificationStatus, CreatedAt }

#[derive(DeriveIden)]
enum Supplier { Table, CreatedAt }
