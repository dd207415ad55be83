use sea_orm::{entity::prelude::*, Set, ConnectionTrait};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::product;
use crate::validation::Violations;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "supplier")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub country: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Product,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Product => Entity::has_many(product::Entity).into(),
        }
    }
}

impl Related<product::Entity> for Entity {
    fn to() -> RelationDef { Relation::Product.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Payload for registering a supplier.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSupplier {
    pub name: String,
    pub email: String,
    pub country: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl NewSupplier {
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut v = Violations::new();
        v.required_len("name", "Name", &self.name, 255);
        v.email("email", &self.email);
        v.required_len("country", "Country", &self.country, 100);
        v.optional_len("contactPerson", "Contact person", self.contact_person.as_deref(), 255);
        v.optional_len("phone", "Phone", self.phone.as_deref(), 20);
        v.into_result()
    }

    /// Build the stored row; the id and timestamp are assigned here.
    pub fn into_model(self) -> Model {
        Model {
            id: Uuid::new_v4(),
            name: self.name,
            email: self.email,
            country: self.country,
            contact_person: self.contact_person,
            phone: self.phone,
            created_at: Utc::now().into(),
        }
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewSupplier) -> Result<Model, ModelError> {
    input.validate()?;
    let m = input.into_model();
    let am = ActiveModel {
        id: Set(m.id),
        name: Set(m.name),
        email: Set(m.email),
        country: Set(m.country),
        contact_person: Set(m.contact_person),
        phone: Set(m.phone),
        created_at: Set(m.created_at),
    };
    Ok(am.insert(db).await?)
}
