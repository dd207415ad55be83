//! Database-backed entity tests.
//!
//! Skipped when `SKIP_DB_TESTS` is set or no database is reachable.

use crate::db::connect;
use crate::errors::ModelError;
use crate::{product, supplier};
use migration::MigratorTrait;
use sea_orm::{DatabaseConnection, EntityTrait, ModelTrait};
use uuid::Uuid;

async fn setup_test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(db)
}

fn unique_supplier(tag: &str) -> supplier::NewSupplier {
    supplier::NewSupplier {
        name: format!("{tag} Supplier"),
        email: format!("{}_{}@example.com", tag, Uuid::new_v4()),
        country: "Kenya".into(),
        contact_person: None,
        phone: None,
    }
}

#[tokio::test]
async fn supplier_product_crud_and_relation() -> anyhow::Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let s = supplier::create(&db, unique_supplier("crud")).await?;
    let p = product::create(
        &db,
        product::NewProduct {
            supplier_id: s.id,
            name: "Bamboo Fiber Towels".into(),
            category: product::Category::SustainableGoods,
            price: 22.0,
            stock_quantity: 400,
            certification_status: product::CertificationStatus::Certified,
            certification_expiry_date: None,
            description: Some("Soft towels".into()),
        },
    )
    .await?;
    assert_eq!(p.category, product::Category::SustainableGoods);

    let owned = s.find_related(product::Entity).all(&db).await?;
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].id, p.id);

    let changes = product::ProductChanges { stock_quantity: Some(0), description: Some(None), ..Default::default() };
    let updated = product::update(&db, p.id, changes).await?.expect("product exists");
    assert_eq!(updated.stock_quantity, 0);
    assert_eq!(updated.description, None);

    let missing = product::update(&db, Uuid::new_v4(), product::ProductChanges::default()).await?;
    assert!(missing.is_none());

    product::Entity::delete_by_id(p.id).exec(&db).await?;
    supplier::Entity::delete_by_id(s.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn product_requires_existing_supplier() -> anyhow::Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let res = product::create(
        &db,
        product::NewProduct {
            supplier_id: Uuid::new_v4(),
            name: "Orphan".into(),
            category: product::Category::Handmade,
            price: 1.0,
            stock_quantity: 1,
            certification_status: product::CertificationStatus::Pending,
            certification_expiry_date: None,
            description: None,
        },
    )
    .await;
    match res {
        Err(ModelError::Db(e)) => assert!(matches!(e.sql_err(), Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_)))),
        other => panic!("expected FK violation, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn supplier_email_is_unique() -> anyhow::Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let first = supplier::create(&db, unique_supplier("dup")).await?;
    let mut again = unique_supplier("dup");
    again.email = first.email.clone();
    match supplier::create(&db, again).await {
        Err(ModelError::Db(e)) => assert!(matches!(e.sql_err(), Some(sea_orm::SqlErr::UniqueConstraintViolation(_)))),
        other => panic!("expected unique violation, got {other:?}"),
    }

    supplier::Entity::delete_by_id(first.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn supplier_with_products_cannot_be_deleted() -> anyhow::Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let s = supplier::create(&db, unique_supplier("restrict")).await?;
    let p = product::create(
        &db,
        product::NewProduct {
            supplier_id: s.id,
            name: "Jute Shopping Bags".into(),
            category: product::Category::SustainableGoods,
            price: 8.5,
            stock_quantity: 1000,
            certification_status: product::CertificationStatus::Certified,
            certification_expiry_date: None,
            description: None,
        },
    )
    .await?;

    assert!(supplier::Entity::delete_by_id(s.id).exec(&db).await.is_err());

    product::Entity::delete_by_id(p.id).exec(&db).await?;
    supplier::Entity::delete_by_id(s.id).exec(&db).await?;
    Ok(())
}
