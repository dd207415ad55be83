use async_trait::async_trait;
use models::errors::ModelError;
use models::product::{self, Category, CertificationStatus};
use models::supplier;
use sea_orm::sea_query::{Expr, Func, IntoColumnRef, LikeExpr, SimpleExpr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, SqlErr,
};
use tracing::error;
use uuid::Uuid;

use crate::analytics::repository::AnalyticsRepository;
use crate::analytics::{CategoryCount, CertificationCount, ProductCount};
use crate::errors::ServiceError;
use crate::products::repository::ProductRepository;
use crate::products::{ProductFilter, ProductListItem, ProductWithSupplier};
use crate::search::repository::SearchRepository;
use crate::search::{ProductMatch, SearchTerm};
use crate::suppliers::repository::SupplierRepository;
use crate::suppliers::SupplierWithProducts;

/// PostgreSQL-backed catalogue.
#[derive(Clone)]
pub struct SeaOrmCatalog {
    pub db: DatabaseConnection,
}

impl SeaOrmCatalog {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Remove every product, then every supplier.
    pub async fn clear(&self) -> Result<(), ServiceError> {
        product::Entity::delete_many().exec(&self.db).await.map_err(classify)?;
        supplier::Entity::delete_many().exec(&self.db).await.map_err(classify)?;
        Ok(())
    }

    async fn supplier_of(&self, p: &product::Model) -> Result<supplier::Model, ServiceError> {
        supplier::Entity::find_by_id(p.supplier_id)
            .one(&self.db)
            .await
            .map_err(classify)?
            .ok_or_else(|| orphan(p.id))
    }
}

/// Map constraint violations onto the errors callers understand.
fn classify(e: DbErr) -> ServiceError {
    match e.sql_err() {
        // supplier.email is the only unique column besides primary keys
        Some(SqlErr::UniqueConstraintViolation(_)) => ServiceError::email_taken(),
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => ServiceError::supplier_not_found(),
        _ => {
            error!(error = %e, "query_failed");
            ServiceError::from_db(e)
        }
    }
}

fn classify_model(e: ModelError) -> ServiceError {
    match e {
        ModelError::Db(e) => classify(e),
        other => other.into(),
    }
}

fn orphan(product_id: Uuid) -> ServiceError {
    ServiceError::Db(format!("product {} references a missing supplier", product_id))
}

fn product_filter(filter: ProductFilter) -> Select<product::Entity> {
    let mut q = product::Entity::find();
    if let Some(c) = filter.category {
        q = q.filter(product::Column::Category.eq(c));
    }
    if let Some(s) = filter.certification_status {
        q = q.filter(product::Column::CertificationStatus.eq(s));
    }
    if let Some(id) = filter.supplier_id {
        q = q.filter(product::Column::SupplierId.eq(id));
    }
    q
}

/// `lower(<table>.name) LIKE <pattern> ESCAPE '\'`
fn name_like(column: impl IntoColumnRef, term: &SearchTerm) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column)))
        .like(LikeExpr::new(term.like_pattern()).escape('\\'))
}

#[derive(Debug, FromQueryResult)]
struct CategoryRow {
    category: Category,
    count: i64,
}

#[derive(Debug, FromQueryResult)]
struct CertificationRow {
    certification_status: CertificationStatus,
    count: i64,
}

#[async_trait]
impl SupplierRepository for SeaOrmCatalog {
    async fn insert(&self, input: supplier::NewSupplier) -> Result<supplier::Model, ServiceError> {
        supplier::create(&self.db, input).await.map_err(classify_model)
    }

    async fn list(&self) -> Result<Vec<supplier::Model>, ServiceError> {
        supplier::Entity::find()
            .order_by_desc(supplier::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(classify)
    }

    async fn get_with_products(&self, id: Uuid) -> Result<Option<SupplierWithProducts>, ServiceError> {
        let Some(s) = supplier::Entity::find_by_id(id).one(&self.db).await.map_err(classify)? else {
            return Ok(None);
        };
        let products = s
            .find_related(product::Entity)
            .order_by_desc(product::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(classify)?;
        Ok(Some(SupplierWithProducts { supplier: s, products }))
    }
}

#[async_trait]
impl ProductRepository for SeaOrmCatalog {
    async fn insert(&self, input: product::NewProduct) -> Result<ProductWithSupplier, ServiceError> {
        let p = product::create(&self.db, input).await.map_err(classify_model)?;
        let supplier = self.supplier_of(&p).await?;
        Ok(ProductWithSupplier { product: p, supplier })
    }

    async fn list(&self, filter: ProductFilter) -> Result<Vec<ProductListItem>, ServiceError> {
        let rows = product_filter(filter)
            .find_also_related(supplier::Entity)
            .order_by_desc(product::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(classify)?;
        rows.into_iter()
            .map(|(p, s)| match s {
                Some(s) => Ok(ProductListItem { product: p, supplier: s.into() }),
                None => Err(orphan(p.id)),
            })
            .collect()
    }

    async fn exists(&self, id: Uuid) -> Result<bool, ServiceError> {
        let n = product::Entity::find_by_id(id).count(&self.db).await.map_err(classify)?;
        Ok(n > 0)
    }

    async fn update(&self, id: Uuid, changes: product::ProductChanges) -> Result<Option<ProductWithSupplier>, ServiceError> {
        let Some(p) = product::update(&self.db, id, changes).await.map_err(classify_model)? else {
            return Ok(None);
        };
        let supplier = self.supplier_of(&p).await?;
        Ok(Some(ProductWithSupplier { product: p, supplier }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = product::Entity::delete_by_id(id).exec(&self.db).await.map_err(classify)?;
        Ok(res.rows_affected > 0)
    }
}

#[async_trait]
impl AnalyticsRepository for SeaOrmCatalog {
    async fn count_suppliers(&self) -> Result<u64, ServiceError> {
        supplier::Entity::find().count(&self.db).await.map_err(classify)
    }

    async fn count_products(&self, which: ProductCount) -> Result<u64, ServiceError> {
        let q = match which {
            ProductCount::All => product::Entity::find(),
            ProductCount::OutOfStock => product::Entity::find().filter(product::Column::StockQuantity.eq(0)),
            ProductCount::WithStatus(s) => product::Entity::find().filter(product::Column::CertificationStatus.eq(s)),
        };
        q.count(&self.db).await.map_err(classify)
    }

    async fn count_by_category(&self) -> Result<Vec<CategoryCount>, ServiceError> {
        let rows = product::Entity::find()
            .select_only()
            .column(product::Column::Category)
            .column_as(Expr::col(product::Column::Id).count(), "count")
            .group_by(product::Column::Category)
            .order_by_asc(product::Column::Category)
            .into_model::<CategoryRow>()
            .all(&self.db)
            .await
            .map_err(classify)?;
        Ok(rows
            .into_iter()
            .map(|r| CategoryCount { category: r.category, count: r.count.max(0) as u64 })
            .collect())
    }

    async fn count_by_certification(&self) -> Result<Vec<CertificationCount>, ServiceError> {
        let rows = product::Entity::find()
            .select_only()
            .column(product::Column::CertificationStatus)
            .column_as(Expr::col(product::Column::Id).count(), "count")
            .group_by(product::Column::CertificationStatus)
            .order_by_asc(product::Column::CertificationStatus)
            .into_model::<CertificationRow>()
            .all(&self.db)
            .await
            .map_err(classify)?;
        Ok(rows
            .into_iter()
            .map(|r| CertificationCount { status: r.certification_status, count: r.count.max(0) as u64 })
            .collect())
    }
}

#[async_trait]
impl SearchRepository for SeaOrmCatalog {
    async fn suppliers_matching(&self, term: &SearchTerm) -> Result<Vec<supplier::Model>, ServiceError> {
        supplier::Entity::find()
            .filter(name_like((supplier::Entity, supplier::Column::Name), term))
            .order_by_asc(supplier::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(classify)
    }

    async fn products_matching(&self, term: &SearchTerm) -> Result<Vec<ProductMatch>, ServiceError> {
        let rows = product::Entity::find()
            .filter(name_like((product::Entity, product::Column::Name), term))
            .find_also_related(supplier::Entity)
            .order_by_asc(product::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(classify)?;
        rows.into_iter()
            .map(|(p, s)| match s {
                Some(s) => Ok(ProductMatch { product: p, supplier_name: s.name }),
                None => Err(orphan(p.id)),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn new_supplier(name: &str) -> supplier::NewSupplier {
        supplier::NewSupplier {
            name: name.into(),
            email: format!("{}@example.com", Uuid::new_v4()),
            country: "Kenya".into(),
            contact_person: None,
            phone: None,
        }
    }

    fn new_product(supplier_id: Uuid, name: &str) -> product::NewProduct {
        product::NewProduct {
            supplier_id,
            name: name.into(),
            category: Category::Handmade,
            price: 10.0,
            stock_quantity: 0,
            certification_status: CertificationStatus::Pending,
            certification_expiry_date: None,
            description: None,
        }
    }

    #[tokio::test]
    async fn duplicate_email_maps_to_conflict() -> anyhow::Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };
        let catalog = SeaOrmCatalog::new(db);
        let first = SupplierRepository::insert(&catalog, new_supplier("Dup Test")).await?;
        let mut again = new_supplier("Dup Test");
        again.email = first.email.clone();
        let err = SupplierRepository::insert(&catalog, again).await.unwrap_err();
        assert_eq!(err.to_string(), "Email already exists");
        Ok(())
    }

    #[tokio::test]
    async fn unknown_supplier_maps_to_not_found() -> anyhow::Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };
        let catalog = SeaOrmCatalog::new(db);
        let err = ProductRepository::insert(&catalog, new_product(Uuid::new_v4(), "Orphan Basket"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Supplier not found");
        Ok(())
    }

    #[tokio::test]
    async fn search_is_case_insensitive_and_literal() -> anyhow::Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };
        let catalog = SeaOrmCatalog::new(db);
        let tag = Uuid::new_v4().simple().to_string();
        let s = SupplierRepository::insert(&catalog, new_supplier(&format!("Weavers {tag}"))).await?;
        ProductRepository::insert(&catalog, new_product(s.id, &format!("Basket {tag} 100% Jute"))).await?;

        let upper = SearchTerm::parse(Some(&tag.to_uppercase()))?;
        assert_eq!(catalog.suppliers_matching(&upper).await?.len(), 1);
        let products = catalog.products_matching(&upper).await?;
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].supplier_name, s.name);

        let literal = SearchTerm::parse(Some(&format!("{tag} 100%")))?;
        assert_eq!(catalog.products_matching(&literal).await?.len(), 1);
        let wildcard = SearchTerm::parse(Some(&format!("{tag}_100")))?;
        assert!(catalog.products_matching(&wildcard).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn group_by_rows_are_sorted_by_key() -> anyhow::Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };
        let catalog = SeaOrmCatalog::new(db);
        let s = SupplierRepository::insert(&catalog, new_supplier("Group Test")).await?;
        ProductRepository::insert(&catalog, new_product(s.id, "Group Test Rug")).await?;

        let cats = catalog.count_by_category().await?;
        assert!(cats.windows(2).all(|w| w[0].category.as_str() < w[1].category.as_str()));
        assert!(cats.iter().all(|c| c.count > 0));
        let certs = catalog.count_by_certification().await?;
        assert!(certs.windows(2).all(|w| w[0].status.as_str() < w[1].status.as_str()));
        assert!(catalog.count_products(ProductCount::OutOfStock).await? >= 1);
        Ok(())
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_rows() -> anyhow::Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };
        let catalog = SeaOrmCatalog::new(db);
        let missing = Uuid::new_v4();
        assert!(!catalog.exists(missing).await?);
        assert!(ProductRepository::update(&catalog, missing, Default::default()).await?.is_none());
        assert!(!ProductRepository::delete(&catalog, missing).await?);
        Ok(())
    }
}
