use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{accommodation, user};

/// A user acting as a listing owner.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hosts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Accommodation,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
            Relation::Accommodation => Entity::has_many(accommodation::Entity).into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl Related<accommodation::Entity> for Entity {
    fn to() -> RelationDef { Relation::Accommodation.def() }
}

impl ActiveModelBehavior for ActiveModel {}
