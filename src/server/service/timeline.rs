//! Orders a trip's plans into timeline entries.
//!
//! Every plan detail is one entry; a plan without details is a single entry of its own. Each
//! entry is placed on the timeline by its comparable instant: closing sub-events sit at the
//! plan's end, everything else at its start.

use chrono::{DateTime, Utc};

use crate::{
    model::plan::TimelineEntryDto,
    server::{
        model::plan::{Plan, PlanDetail},
        util::sanitize::{clean_optional, clean_text},
    },
};

/// Sub-event kinds anchored to the plan's end date.
pub const CLOSING_SUBTYPES: [&str; 2] = ["Check out", "Drop off"];

/// Instant used to place a plan, or one of its details, on the timeline.
///
/// A closing sub-event of a plan without an end date falls back to the start date.
pub fn comparable_instant(plan: &Plan, detail: Option<&PlanDetail>) -> DateTime<Utc> {
    let closing = detail.is_some_and(|d| CLOSING_SUBTYPES.contains(&d.plan_subtype.as_str()));

    if closing {
        plan.end_date.unwrap_or(plan.start_date)
    } else {
        plan.start_date
    }
}

/// A single sub-event on the timeline, borrowing from its plan.
#[derive(Debug, Clone, Copy)]
pub struct TimelineEntry<'a> {
    pub plan: &'a Plan,
    pub detail: Option<&'a PlanDetail>,
    pub comparable_date: DateTime<Utc>,
}

impl<'a> TimelineEntry<'a> {
    fn new(plan: &'a Plan, detail: Option<&'a PlanDetail>) -> Self {
        Self {
            plan,
            detail,
            comparable_date: comparable_instant(plan, detail),
        }
    }

    pub fn into_dto(self) -> TimelineEntryDto {
        let plan = self.plan;
        let detail = self.detail;

        TimelineEntryDto {
            id: plan.id,
            trip_id: plan.trip_id,
            plan_type: plan.plan_type.as_str().to_string(),
            plan_name: clean_text(&plan.plan_name),
            plan_place_id: plan.plan_place_id.clone(),
            start_date: plan.start_date,
            end_date: plan.end_date,
            description: clean_optional(plan.description.as_deref()),
            city_name: plan.city_name.clone(),
            utc_offset_minutes: plan.utc_offset_minutes,
            plan_detail_id: detail.map(|d| d.id),
            plan_subtype: detail.map(|d| d.plan_subtype.clone()),
            from_name: detail.and_then(|d| d.from_name.clone()),
            from_place_id: detail.and_then(|d| d.from_place_id.clone()),
            from_utc_offset_minutes: detail.and_then(|d| d.from_utc_offset_minutes),
            to_name: detail.and_then(|d| d.to_name.clone()),
            to_place_id: detail.and_then(|d| d.to_place_id.clone()),
            to_utc_offset_minutes: detail.and_then(|d| d.to_utc_offset_minutes),
            comparable_date: self.comparable_date,
        }
    }
}

/// Expands plans into sub-events and sorts them by comparable instant.
///
/// The sort is stable: entries with equal instants keep the order of `plans` and, within a
/// plan, the order of its details.
pub fn order_timeline(plans: &[Plan]) -> Vec<TimelineEntry<'_>> {
    let mut entries: Vec<TimelineEntry<'_>> = plans
        .iter()
        .flat_map(|plan| {
            let entries: Vec<TimelineEntry<'_>> = if plan.plan_details.is_empty() {
                vec![TimelineEntry::new(plan, None)]
            } else {
                plan.plan_details
                    .iter()
                    .map(|detail| TimelineEntry::new(plan, Some(detail)))
                    .collect()
            };
            entries
        })
        .collect();

    entries.sort_by_key(|entry| entry.comparable_date);

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::plan::PlanType;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2019, 4, day, hour, 0, 0).unwrap()
    }

    fn plan(id: i32, start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> Plan {
        Plan {
            id,
            trip_id: 1,
            plan_type: PlanType::Activity,
            plan_name: format!("Plan {}", id),
            plan_place_id: None,
            start_date: start,
            end_date: end,
            description: None,
            city_name: "Barcelona".to_string(),
            utc_offset_minutes: 120,
            date_created: at(1, 0),
            date_modified: None,
            plan_details: vec![],
        }
    }

    fn detail(id: i32, plan_id: i32, subtype: &str, from_name: &str) -> PlanDetail {
        PlanDetail {
            id,
            plan_id,
            plan_subtype: subtype.to_string(),
            from_name: Some(from_name.to_string()),
            from_place_id: None,
            from_utc_offset_minutes: None,
            to_name: None,
            to_place_id: None,
            to_utc_offset_minutes: None,
        }
    }

    #[test]
    fn plan_without_details_is_one_entry_at_start() {
        let plans = vec![plan(1, at(3, 10), Some(at(3, 12)))];

        let entries = order_timeline(&plans);

        assert_eq!(entries.len(), 1);
        assert!(entries[0].detail.is_none());
        assert_eq!(entries[0].comparable_date, at(3, 10));
    }

    #[test]
    fn closing_subtypes_use_end_date() {
        let lodging = plan(1, at(2, 15), Some(at(5, 11)));

        for subtype in ["Check out", "Drop off"] {
            let d = detail(1, 1, subtype, "Hotel");
            assert_eq!(comparable_instant(&lodging, Some(&d)), at(5, 11));
        }
        for subtype in ["Check in", "Pick up", "Depart"] {
            let d = detail(1, 1, subtype, "Hotel");
            assert_eq!(comparable_instant(&lodging, Some(&d)), at(2, 15));
        }
    }

    #[test]
    fn closing_subtype_without_end_falls_back_to_start() {
        let open_ended = plan(1, at(2, 15), None);
        let d = detail(1, 1, "Check out", "Hotel");

        assert_eq!(comparable_instant(&open_ended, Some(&d)), at(2, 15));
    }

    #[test]
    fn car_rental_spans_pick_up_and_drop_off() {
        let mut car = plan(1, at(5, 9), Some(at(9, 17)));
        car.plan_type = PlanType::CarRental;
        car.plan_details = vec![
            detail(1, 1, "Pick up", "ABC"),
            detail(2, 1, "Drop off", "DEF"),
        ];
        let museum = plan(2, at(7, 10), None);
        let plans = vec![car, museum];

        let entries = order_timeline(&plans);

        let placed: Vec<(Option<&str>, DateTime<Utc>)> = entries
            .iter()
            .map(|e| (e.detail.map(|d| d.plan_subtype.as_str()), e.comparable_date))
            .collect();
        assert_eq!(
            placed,
            vec![
                (Some("Pick up"), at(5, 9)),
                (None, at(7, 10)),
                (Some("Drop off"), at(9, 17)),
            ]
        );
    }

    #[test]
    fn ties_keep_input_order() {
        let plans = vec![
            plan(3, at(4, 8), None),
            plan(1, at(4, 8), None),
            plan(2, at(4, 8), None),
        ];

        let ids: Vec<i32> = order_timeline(&plans).iter().map(|e| e.plan.id).collect();

        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn dto_carries_detail_fields_and_sanitized_text() {
        let mut flight = plan(4, at(1, 6), Some(at(1, 9)));
        flight.plan_name = "BA <script>x()</script>123".to_string();
        flight.plan_details = vec![detail(8, 4, "Depart", "LHR")];
        let plans = vec![flight];

        let dto = order_timeline(&plans)[0].into_dto();

        assert_eq!(dto.plan_name, "BA 123");
        assert_eq!(dto.plan_detail_id, Some(8));
        assert_eq!(dto.from_name.as_deref(), Some("LHR"));
        assert_eq!(dto.comparable_date, at(1, 6));
    }
}
