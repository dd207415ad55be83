use std::fmt;
use std::str::FromStr;

use sea_orm::{entity::prelude::*, ConnectionTrait, Iterable, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ModelError;
use crate::supplier;
use crate::validation::Violations;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    #[sea_orm(string_value = "ORGANIC_FOOD")]
    OrganicFood,
    #[sea_orm(string_value = "HANDMADE")]
    Handmade,
    #[sea_orm(string_value = "SUSTAINABLE_GOODS")]
    SustainableGoods,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CertificationStatus {
    #[sea_orm(string_value = "CERTIFIED")]
    Certified,
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "NOT_CERTIFIED")]
    NotCertified,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::OrganicFood => "ORGANIC_FOOD",
            Category::Handmade => "HANDMADE",
            Category::SustainableGoods => "SUSTAINABLE_GOODS",
        }
    }
}

impl CertificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CertificationStatus::Certified => "CERTIFIED",
            CertificationStatus::Pending => "PENDING",
            CertificationStatus::NotCertified => "NOT_CERTIFIED",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl fmt::Display for CertificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ModelError::invalid("category", "must be one of ORGANIC_FOOD, HANDMADE, SUSTAINABLE_GOODS"))
    }
}

impl FromStr for CertificationStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CertificationStatus::iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ModelError::invalid("certificationStatus", "must be one of CERTIFIED, PENDING, NOT_CERTIFIED"))
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub supplier_id: Uuid,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub stock_quantity: i32,
    pub certification_status: CertificationStatus,
    pub certification_expiry_date: Option<DateTimeWithTimeZone>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Supplier,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Supplier => Entity::belongs_to(supplier::Entity)
                .from(Column::SupplierId)
                .to(supplier::Column::Id)
                .into(),
        }
    }
}

impl Related<supplier::Entity> for Entity {
    fn to() -> RelationDef { Relation::Supplier.def() }
}

impl ActiveModelBehavior for ActiveModel {}

fn validate_price(v: &mut Violations, price: f64) {
    if !price.is_finite() || price <= 0.0 {
        v.push("price", "Price must be positive");
    }
}

fn validate_stock(v: &mut Violations, stock: i32) {
    if stock < 0 {
        v.push("stockQuantity", "Stock quantity must be non-negative");
    }
}

/// Payload for creating a product.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub supplier_id: Uuid,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub stock_quantity: i32,
    pub certification_status: CertificationStatus,
    #[serde(default)]
    pub certification_expiry_date: Option<DateTimeWithTimeZone>,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewProduct {
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut v = Violations::new();
        v.required_len("name", "Name", &self.name, 255);
        validate_price(&mut v, self.price);
        validate_stock(&mut v, self.stock_quantity);
        v.optional_len("description", "Description", self.description.as_deref(), 5000);
        v.into_result()
    }

    pub fn into_model(self) -> Model {
        Model {
            id: Uuid::new_v4(),
            supplier_id: self.supplier_id,
            name: self.name,
            category: self.category,
            price: self.price,
            stock_quantity: self.stock_quantity,
            certification_status: self.certification_status,
            certification_expiry_date: self.certification_expiry_date,
            description: self.description,
            created_at: Utc::now().into(),
        }
    }
}

/// Distinguishes an absent key from an explicit `null`.
fn present<'de, T, D>(d: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(d).map(Some)
}

/// Field changes for a product; `None` leaves the stored value untouched.
///
/// The two nullable columns use `Option<Option<_>>`: `Some(None)` clears.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductChanges {
    #[serde(default)]
    pub supplier_id: Option<Uuid>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub stock_quantity: Option<i32>,
    #[serde(default)]
    pub certification_status: Option<CertificationStatus>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub certification_expiry_date: Option<Option<DateTimeWithTimeZone>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
}

impl ProductChanges {
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut v = Violations::new();
        if let Some(name) = &self.name {
            v.required_len("name", "Name", name, 255);
        }
        if let Some(price) = self.price {
            validate_price(&mut v, price);
        }
        if let Some(stock) = self.stock_quantity {
            validate_stock(&mut v, stock);
        }
        if let Some(Some(desc)) = &self.description {
            v.optional_len("description", "Description", Some(desc), 5000);
        }
        v.into_result()
    }

    /// Apply onto an in-memory row.
    pub fn apply_to(self, m: &mut Model) {
        if let Some(x) = self.supplier_id { m.supplier_id = x; }
        if let Some(x) = self.name { m.name = x; }
        if let Some(x) = self.category { m.category = x; }
        if let Some(x) = self.price { m.price = x; }
        if let Some(x) = self.stock_quantity { m.stock_quantity = x; }
        if let Some(x) = self.certification_status { m.certification_status = x; }
        if let Some(x) = self.certification_expiry_date { m.certification_expiry_date = x; }
        if let Some(x) = self.description { m.description = x; }
    }

    /// Apply onto an active model; untouched columns stay `Unchanged`.
    pub fn apply_active(self, am: &mut ActiveModel) {
        if let Some(x) = self.supplier_id { am.supplier_id = Set(x); }
        if let Some(x) = self.name { am.name = Set(x); }
        if let Some(x) = self.category { am.category = Set(x); }
        if let Some(x) = self.price { am.price = Set(x); }
        if let Some(x) = self.stock_quantity { am.stock_quantity = Set(x); }
        if let Some(x) = self.certification_status { am.certification_status = Set(x); }
        if let Some(x) = self.certification_expiry_date { am.certification_expiry_date = Set(x); }
        if let Some(x) = self.description { am.description = Set(x); }
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewProduct) -> Result<Model, ModelError> {
    input.validate()?;
    let m = input.into_model();
    let am = ActiveModel {
        id: Set(m.id),
        supplier_id: Set(m.supplier_id),
        name: Set(m.name),
        category: Set(m.category),
        price: Set(m.price),
        stock_quantity: Set(m.stock_quantity),
        certification_status: Set(m.certification_status),
        certification_expiry_date: Set(m.certification_expiry_date),
        description: Set(m.description),
        created_at: Set(m.created_at),
    };
    Ok(am.insert(db).await?)
}

/// Update a product; `Ok(None)` when no row has the id.
pub async fn update<C: ConnectionTrait>(db: &C, id: Uuid, changes: ProductChanges) -> Result<Option<Model>, ModelError> {
    changes.validate()?;
    let Some(found) = Entity::find_by_id(id).one(db).await? else { return Ok(None) };
    let mut am: ActiveModel = found.into();
    changes.apply_active(&mut am);
    Ok(Some(am.update(db).await?))
}
