//! Global name search across suppliers and products.

pub mod repository;
pub mod service;

use models::product::{self, Category};
use models::supplier;
use serde::Serialize;
use uuid::Uuid;

use crate::errors::ServiceError;

pub const MISSING_QUERY: &str = "Search query parameter \"q\" is required";

/// A validated, non-empty search string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn parse(raw: Option<&str>) -> Result<Self, ServiceError> {
        match raw {
            Some(q) if !q.is_empty() => Ok(Self(q.to_string())),
            _ => Err(ServiceError::Validation(MISSING_QUERY.into())),
        }
    }

    pub fn as_str(&self) -> &str { &self.0 }

    /// Case-insensitive substring test.
    pub fn matches(&self, name: &str) -> bool {
        fold_case(name).contains(&fold_case(&self.0))
    }

    /// Lowercased `%term%` with `\`, `%` and `_` escaped by `\`.
    pub fn like_pattern(&self) -> String {
        let mut out = String::with_capacity(self.0.len() + 2);
        out.push('%');
        for ch in fold_case(&self.0).chars() {
            if matches!(ch, '\\' | '%' | '_') {
                out.push('\\');
            }
            out.push(ch);
        }
        out.push('%');
        out
    }
}

/// Per-character lowercasing, matching PostgreSQL `lower()`; no final-sigma rule.
fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// A product hit with the owning supplier's name.
#[derive(Clone, Debug)]
pub struct ProductMatch {
    pub product: product::Model,
    pub supplier_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SupplierInfo {
    pub country: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    pub category: Category,
    pub price: f64,
    pub supplier_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierHit {
    pub id: Uuid,
    pub name: String,
    pub additional_info: SupplierInfo,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductHit {
    pub id: Uuid,
    pub name: String,
    pub additional_info: ProductInfo,
}

/// One search result, tagged `"type": "supplier" | "product"`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchHit {
    Supplier(SupplierHit),
    Product(ProductHit),
}

impl SearchHit {
    pub fn name(&self) -> &str {
        match self {
            SearchHit::Supplier(h) => &h.name,
            SearchHit::Product(h) => &h.name,
        }
    }

    pub fn is_supplier(&self) -> bool { matches!(self, SearchHit::Supplier(_)) }
}

impl From<supplier::Model> for SearchHit {
    fn from(s: supplier::Model) -> Self {
        SearchHit::Supplier(SupplierHit {
            id: s.id,
            name: s.name,
            additional_info: SupplierInfo { country: s.country },
        })
    }
}

impl From<ProductMatch> for SearchHit {
    fn from(m: ProductMatch) -> Self {
        SearchHit::Product(ProductHit {
            id: m.product.id,
            name: m.product.name,
            additional_info: ProductInfo {
                category: m.product.category,
                price: m.product.price,
                supplier_name: m.supplier_name,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_or_empty_query_is_rejected() {
        for raw in [None, Some("")] {
            let err = SearchTerm::parse(raw).unwrap_err();
            assert_eq!(err.to_string(), MISSING_QUERY);
        }
        assert_eq!(SearchTerm::parse(Some("rice")).unwrap().as_str(), "rice");
    }

    #[test]
    fn matching_ignores_case() {
        let term = SearchTerm::parse(Some("OrGaNiC")).unwrap();
        assert!(term.matches("Organic Basmati Rice"));
        assert!(!term.matches("Jute Shopping Bags"));
    }

    #[test]
    fn folding_is_per_character() {
        let term = SearchTerm::parse(Some("οδοσ")).unwrap();
        assert!(term.matches("ΟΔΟΣ"));
        let upper = SearchTerm::parse(Some("ΟΔΟΣ")).unwrap();
        assert_eq!(upper.like_pattern(), "%οδοσ%");
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        let term = SearchTerm::parse(Some("100%_Cotton\\")).unwrap();
        assert_eq!(term.like_pattern(), "%100\\%\\_cotton\\\\%");
    }

    #[test]
    fn hits_serialize_with_type_tag() {
        let hit = SearchHit::Supplier(SupplierHit {
            id: Uuid::nil(),
            name: "Green Farms Co.".into(),
            additional_info: SupplierInfo { country: "India".into() },
        });
        assert_eq!(
            serde_json::to_value(&hit).unwrap(),
            json!({
                "type": "supplier",
                "id": Uuid::nil(),
                "name": "Green Farms Co.",
                "additionalInfo": { "country": "India" }
            })
        );

        let hit = SearchHit::Product(ProductHit {
            id: Uuid::nil(),
            name: "Jute Shopping Bags".into(),
            additional_info: ProductInfo {
                category: Category::SustainableGoods,
                price: 8.5,
                supplier_name: "EcoHandicrafts Ltd.".into(),
            },
        });
        let v = serde_json::to_value(&hit).unwrap();
        assert_eq!(v["type"], "product");
        assert_eq!(v["additionalInfo"]["category"], "SUSTAINABLE_GOODS");
        assert_eq!(v["additionalInfo"]["supplierName"], "EcoHandicrafts Ltd.");
        assert_eq!(v["additionalInfo"]["price"], 8.5);
    }
}
