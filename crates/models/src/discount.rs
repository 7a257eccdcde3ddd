use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::accommodation;

/// Percentage off an accommodation, valid between `start_date` and `end_date`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "discounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub accommodation_id: i32,
    pub discount_percentage: i32,
    pub start_date: Date,
    pub end_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Accommodation,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Accommodation => Entity::belongs_to(accommodation::Entity)
                .from(Column::AccommodationId)
                .to(accommodation::Column::Id)
                .into(),
        }
    }
}

impl Related<accommodation::Entity> for Entity {
    fn to() -> RelationDef { Relation::Accommodation.def() }
}

impl ActiveModelBehavior for ActiveModel {}
