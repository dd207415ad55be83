use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::analytics::repository::AnalyticsRepository;
use service::analytics::service::AnalyticsService;
use service::products::repository::ProductRepository;
use service::products::service::ProductService;
use service::repo::SeaOrmCatalog;
use service::search::repository::SearchRepository;
use service::search::service::SearchService;
use service::suppliers::repository::SupplierRepository;
use service::suppliers::service::SupplierService;

/// Services shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub suppliers: Arc<SupplierService>,
    pub products: Arc<ProductService>,
    pub analytics: Arc<AnalyticsService>,
    pub search: Arc<SearchService>,
}

impl AppState {
    /// Wire every service to one store implementing all repository traits.
    pub fn from_catalog<C>(catalog: Arc<C>) -> Self
    where
        C: SupplierRepository + ProductRepository + AnalyticsRepository + SearchRepository + 'static,
    {
        Self {
            suppliers: Arc::new(SupplierService::new(catalog.clone())),
            products: Arc::new(ProductService::new(catalog.clone())),
            analytics: Arc::new(AnalyticsService::new(catalog.clone())),
            search: Arc::new(SearchService::new(catalog)),
        }
    }

    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::from_catalog(Arc::new(SeaOrmCatalog::new(db)))
    }
}
