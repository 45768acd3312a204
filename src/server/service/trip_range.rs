//! Keeps a trip's date range covering its plans.
//!
//! The range only ever grows. Trip dates are UTC calendar days, so plan timestamps are
//! truncated to their UTC day before comparing.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ConnectionTrait, DbErr};

use crate::server::data::trip::TripRepository;

/// Inclusive calendar range of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl TripRange {
    pub fn of(trip: &entity::trip::Model) -> Self {
        Self {
            start_date: trip.start_date,
            end_date: trip.end_date,
        }
    }

    /// Range widened to cover a plan, or `None` if the plan already lies inside.
    ///
    /// A plan without an end date ends where it starts.
    pub fn covering(
        &self,
        plan_start: DateTime<Utc>,
        plan_end: Option<DateTime<Utc>>,
    ) -> Option<TripRange> {
        let plan_start = plan_start.date_naive();
        let plan_end = plan_end.map_or(plan_start, |end| end.date_naive());

        let expanded = TripRange {
            start_date: if plan_start < self.start_date {
                plan_start
            } else {
                self.start_date
            },
            end_date: if plan_end > self.end_date {
                plan_end
            } else {
                self.end_date
            },
        };

        (expanded != *self).then_some(expanded)
    }
}

/// Outcome of a range synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSync {
    /// The trip was rewritten with this range.
    Expanded(TripRange),
    /// The plan was already covered; nothing was written.
    Unchanged,
    /// The plan's trip does not exist; nothing was written.
    TripMissing,
}

/// Widens the trip's stored range to cover a plan.
///
/// Writes only when the range actually grows, stamping `date_modified` in the same update.
///
/// # Arguments
/// - `db` - Connection or the transaction the plan was written in
/// - `trip_id` - Trip owning the plan
/// - `plan_start` - Plan start instant
/// - `plan_end` - Plan end instant, if any
///
/// # Returns
/// - `Ok(RangeSync)` - What happened to the trip
/// - `Err(DbErr)` - Database error during query or update
pub async fn sync_trip_range<C: ConnectionTrait>(
    db: &C,
    trip_id: i32,
    plan_start: DateTime<Utc>,
    plan_end: Option<DateTime<Utc>>,
) -> Result<RangeSync, DbErr> {
    let repo = TripRepository::new(db);

    let Some(trip) = repo.find_entity(trip_id).await? else {
        tracing::debug!("Trip {} not found while syncing its date range", trip_id);
        return Ok(RangeSync::TripMissing);
    };

    let Some(range) = TripRange::of(&trip).covering(plan_start, plan_end) else {
        return Ok(RangeSync::Unchanged);
    };

    repo.update_range(trip, range.start_date, range.end_date)
        .await?;

    tracing::debug!(
        "Expanded trip {} to {}..{}",
        trip_id,
        range.start_date,
        range.end_date
    );

    Ok(RangeSync::Expanded(range))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, m, d).unwrap()
    }

    fn at(m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2019, m, d, h, 0, 0).unwrap()
    }

    fn april() -> TripRange {
        TripRange {
            start_date: day(4, 1),
            end_date: day(4, 14),
        }
    }

    #[test]
    fn extends_end_to_cover_late_plan() {
        let covered = april().covering(at(4, 5, 9), Some(at(4, 20, 18)));

        assert_eq!(
            covered,
            Some(TripRange {
                start_date: day(4, 1),
                end_date: day(4, 20),
            })
        );
    }

    #[test]
    fn extends_start_to_cover_early_plan() {
        let covered = april().covering(at(3, 30, 22), Some(at(4, 2, 8)));

        assert_eq!(covered.map(|r| r.start_date), Some(day(3, 30)));
        assert_eq!(covered.map(|r| r.end_date), Some(day(4, 14)));
    }

    #[test]
    fn plan_inside_range_needs_nothing() {
        assert_eq!(april().covering(at(4, 3, 9), Some(at(4, 14, 23))), None);
        assert_eq!(april().covering(at(4, 1, 0), None), None);
    }

    #[test]
    fn open_ended_plan_uses_start_as_end() {
        let covered = april().covering(at(4, 16, 12), None);

        assert_eq!(
            covered,
            Some(TripRange {
                start_date: day(4, 1),
                end_date: day(4, 16),
            })
        );
    }
}
