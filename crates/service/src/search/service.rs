use std::sync::Arc;

use common::metrics::{SEARCH_HITS, SEARCH_REQUESTS_TOTAL};
use tracing::{debug, instrument};

use super::repository::SearchRepository;
use super::{SearchHit, SearchTerm};
use crate::errors::ServiceError;

pub struct SearchService {
    repo: Arc<dyn SearchRepository>,
}

impl SearchService {
    pub fn new(repo: Arc<dyn SearchRepository>) -> Self { Self { repo } }

    /// Supplier hits first, then product hits. Unranked and unpaginated.
    #[instrument(skip(self, term), fields(q = %term.as_str()))]
    pub async fn search(&self, term: &SearchTerm) -> Result<Vec<SearchHit>, ServiceError> {
        SEARCH_REQUESTS_TOTAL.inc();
        let repo = self.repo.as_ref();
        let (suppliers, products) =
            tokio::try_join!(repo.suppliers_matching(term), repo.products_matching(term))?;

        let mut hits = Vec::with_capacity(suppliers.len() + products.len());
        hits.extend(suppliers.into_iter().map(SearchHit::from));
        hits.extend(products.into_iter().map(SearchHit::from));

        SEARCH_HITS.observe(hits.len() as f64);
        debug!(hits = hits.len(), "search_completed");
        Ok(hits)
    }
}
