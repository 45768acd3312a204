use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "plan_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub plan_id: i32,
    pub plan_subtype: String,
    pub from_name: Option<String>,
    pub from_place_id: Option<String>,
    pub from_utc_offset_minutes: Option<i32>,
    pub to_name: Option<String>,
    pub to_place_id: Option<String>,
    pub to_utc_offset_minutes: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::trip_plan::Entity",
        from = "Column::PlanId",
        to = "super::trip_plan::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    TripPlan,
}

impl Related<super::trip_plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TripPlan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
