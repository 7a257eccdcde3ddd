use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{accommodation, guest};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum BookingStatus {
    #[sea_orm(string_value = "Confirmed")]
    Confirmed,
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "Cancelled")]
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Pending => "Pending",
            BookingStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guest_id: i32,
    pub accommodation_id: i32,
    pub status: BookingStatus,
    pub checkin_date: Date,
    pub checkout_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Guest,
    Accommodation,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Guest => Entity::belongs_to(guest::Entity)
                .from(Column::GuestId)
                .to(guest::Column::Id)
                .into(),
            Relation::Accommodation => Entity::belongs_to(accommodation::Entity)
                .from(Column::AccommodationId)
                .to(accommodation::Column::Id)
                .into(),
        }
    }
}

impl Related<guest::Entity> for Entity {
    fn to() -> RelationDef { Relation::Guest.def() }
}

impl Related<accommodation::Entity> for Entity {
    fn to() -> RelationDef { Relation::Accommodation.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ActiveEnum, Iterable};

    #[test]
    fn status_db_value_matches_display() {
        for status in BookingStatus::iter() {
            assert_eq!(status.to_value(), status.to_string());
        }
    }

    #[test]
    fn status_parses_from_db_value() {
        assert_eq!(BookingStatus::try_from_value(&"Pending".to_string()).unwrap(), BookingStatus::Pending);
        assert!(BookingStatus::try_from_value(&"Lost".to_string()).is_err());
    }
}
