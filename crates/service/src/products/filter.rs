use models::product::{Category, CertificationStatus, Model};
use uuid::Uuid;

/// Optional equality filters for product listings; all given filters must match.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProductFilter {
    pub category: Option<Category>,
    pub certification_status: Option<CertificationStatus>,
    pub supplier_id: Option<Uuid>,
}

impl ProductFilter {
    pub fn matches(&self, p: &Model) -> bool {
        self.category.map_or(true, |c| p.category == c)
            && self.certification_status.map_or(true, |s| p.certification_status == s)
            && self.supplier_id.map_or(true, |id| p.supplier_id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.certification_status.is_none() && self.supplier_id.is_none()
    }
}
