//! Plan detail factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a plan detail with the given subtype and no endpoints.
///
/// # Arguments
/// - `db` - Database connection
/// - `plan_id` - Plan owning the detail
/// - `plan_subtype` - Sub-event kind, e.g. `"Check in"` or `"Drop off"`
///
/// # Returns
/// - `Ok(entity::plan_detail::Model)` - Created plan detail
/// - `Err(DbErr)` - Database error during insert
pub async fn create_plan_detail(
    db: &DatabaseConnection,
    plan_id: i32,
    plan_subtype: &str,
) -> Result<entity::plan_detail::Model, DbErr> {
    entity::plan_detail::ActiveModel {
        plan_id: ActiveValue::Set(plan_id),
        plan_subtype: ActiveValue::Set(plan_subtype.to_string()),
        from_name: ActiveValue::Set(None),
        from_place_id: ActiveValue::Set(None),
        from_utc_offset_minutes: ActiveValue::Set(None),
        to_name: ActiveValue::Set(None),
        to_place_id: ActiveValue::Set(None),
        to_utc_offset_minutes: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
