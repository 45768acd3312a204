use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "trips")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub trip_name: String,
    pub start_date: Date,
    pub end_date: Date,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub date_created: DateTimeUtc,
    pub date_modified: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    User,
    #[sea_orm(has_many = "super::trip_dest_city::Entity")]
    TripDestCity,
    #[sea_orm(has_many = "super::trip_plan::Entity")]
    TripPlan,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::trip_dest_city::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TripDestCity.def()
    }
}

impl Related<super::trip_plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TripPlan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
