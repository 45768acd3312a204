//! Plan detail fixtures.

use entity::plan_detail;

/// Creates a plan detail entity model for the given plan and subtype.
///
/// Endpoint fields are left empty.
pub fn entity(id: i32, plan_id: i32, plan_subtype: &str) -> plan_detail::Model {
    plan_detail::Model {
        id,
        plan_id,
        plan_subtype: plan_subtype.to_string(),
        from_name: None,
        from_place_id: None,
        from_utc_offset_minutes: None,
        to_name: None,
        to_place_id: None,
        to_utc_offset_minutes: None,
    }
}
