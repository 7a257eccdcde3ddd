use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{booking, discount, host};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accommodations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub host_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub price_per_night: f64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Host,
    Booking,
    Discount,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Host => Entity::belongs_to(host::Entity)
                .from(Column::HostId)
                .to(host::Column::Id)
                .into(),
            Relation::Booking => Entity::has_many(booking::Entity).into(),
            Relation::Discount => Entity::has_many(discount::Entity).into(),
        }
    }
}

impl Related<host::Entity> for Entity {
    fn to() -> RelationDef { Relation::Host.def() }
}

impl Related<booking::Entity> for Entity {
    fn to() -> RelationDef { Relation::Booking.def() }
}

impl Related<discount::Entity> for Entity {
    fn to() -> RelationDef { Relation::Discount.def() }
}

impl ActiveModelBehavior for ActiveModel {}
