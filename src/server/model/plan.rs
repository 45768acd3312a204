//! Plan domain models and parameters.
//!
//! A plan is an aggregate of the plan row and its plan details. Each detail is one sub-event
//! on the trip timeline; a plan without details contributes a single implicit sub-event.

use chrono::{DateTime, Utc};

use crate::{
    model::plan::{
        CreatePlanDto, NewPlanDetailDto, PlanDetailDto, PlanDto, UpdatePlanDto,
    },
    server::{
        error::AppError,
        util::{
            sanitize::{clean_optional, clean_text},
            validate::{require_any, require_fields, require_ordered, RequiredField},
        },
    },
};

/// Kind of plan. The set is open: unknown names are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanType {
    Flight,
    Lodging,
    Activity,
    Restaurant,
    CarRental,
    Other(String),
}

impl PlanType {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Flight" => Self::Flight,
            "Lodging" => Self::Lodging,
            "Activity" => Self::Activity,
            "Restaurant" => Self::Restaurant,
            "Car Rental" => Self::CarRental,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Flight => "Flight",
            Self::Lodging => "Lodging",
            Self::Activity => "Activity",
            Self::Restaurant => "Restaurant",
            Self::CarRental => "Car Rental",
            Self::Other(name) => name,
        }
    }
}

/// One sub-event of a plan, e.g. "Check in" or "Drop off".
#[derive(Debug, Clone, PartialEq)]
pub struct PlanDetail {
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

impl PlanDetail {
    pub fn from_entity(entity: entity::plan_detail::Model) -> Self {
        Self {
            id: entity.id,
            plan_id: entity.plan_id,
            plan_subtype: entity.plan_subtype,
            from_name: entity.from_name,
            from_place_id: entity.from_place_id,
            from_utc_offset_minutes: entity.from_utc_offset_minutes,
            to_name: entity.to_name,
            to_place_id: entity.to_place_id,
            to_utc_offset_minutes: entity.to_utc_offset_minutes,
        }
    }

    pub fn into_dto(self) -> PlanDetailDto {
        PlanDetailDto {
            id: self.id,
            plan_id: self.plan_id,
            plan_subtype: self.plan_subtype,
            from_name: self.from_name,
            from_place_id: self.from_place_id,
            from_utc_offset_minutes: self.from_utc_offset_minutes,
            to_name: self.to_name,
            to_place_id: self.to_place_id,
            to_utc_offset_minutes: self.to_utc_offset_minutes,
        }
    }
}

/// Scheduled plan with its details in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: i32,
    pub trip_id: i32,
    pub plan_type: PlanType,
    pub plan_name: String,
    pub plan_place_id: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub city_name: String,
    pub utc_offset_minutes: i32,
    pub date_created: DateTime<Utc>,
    pub date_modified: Option<DateTime<Utc>>,
    pub plan_details: Vec<PlanDetail>,
}

impl Plan {
    /// Converts a plan row and its detail rows to the domain model at the repository boundary.
    pub fn from_entity(
        entity: entity::trip_plan::Model,
        plan_details: Vec<entity::plan_detail::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            trip_id: entity.trip_id,
            plan_type: PlanType::from_name(&entity.plan_type),
            plan_name: entity.plan_name,
            plan_place_id: entity.plan_place_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            description: entity.description,
            city_name: entity.city_name,
            utc_offset_minutes: entity.utc_offset_minutes,
            date_created: entity.date_created,
            date_modified: entity.date_modified,
            plan_details: plan_details
                .into_iter()
                .map(PlanDetail::from_entity)
                .collect(),
        }
    }

    /// Converts the plan to a DTO, sanitizing free-text fields on the way out.
    pub fn into_dto(self) -> PlanDto {
        PlanDto {
            id: self.id,
            trip_id: self.trip_id,
            plan_type: self.plan_type.as_str().to_string(),
            plan_name: clean_text(&self.plan_name),
            plan_place_id: self.plan_place_id,
            start_date: self.start_date,
            end_date: self.end_date,
            description: clean_optional(self.description.as_deref()),
            city_name: self.city_name,
            utc_offset_minutes: self.utc_offset_minutes,
            date_created: self.date_created,
            date_modified: self.date_modified,
            plan_details: self
                .plan_details
                .into_iter()
                .map(PlanDetail::into_dto)
                .collect(),
        }
    }
}

/// Validated plan detail input.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanDetailParams {
    pub plan_subtype: String,
    pub from_name: Option<String>,
    pub from_place_id: Option<String>,
    pub from_utc_offset_minutes: Option<i32>,
    pub to_name: Option<String>,
    pub to_place_id: Option<String>,
    pub to_utc_offset_minutes: Option<i32>,
}

impl PlanDetailParams {
    fn from_dtos(dtos: Vec<NewPlanDetailDto>) -> Result<Vec<Self>, AppError> {
        dtos.into_iter().map(Self::from_dto).collect()
    }

    fn from_dto(dto: NewPlanDetailDto) -> Result<Self, AppError> {
        require_fields(
            &dto,
            &[RequiredField::new("plan_subtype", |d: &NewPlanDetailDto| {
                d.plan_subtype.as_deref().is_some_and(|v| !v.is_empty())
            })],
        )?;

        Ok(Self {
            plan_subtype: dto.plan_subtype.unwrap_or_default(),
            from_name: dto.from_name,
            from_place_id: dto.from_place_id,
            from_utc_offset_minutes: dto.from_utc_offset_minutes,
            to_name: dto.to_name,
            to_place_id: dto.to_place_id,
            to_utc_offset_minutes: dto.to_utc_offset_minutes,
        })
    }
}

/// Parameters for creating a plan with its details inside a trip.
#[derive(Debug, Clone)]
pub struct CreatePlanParams {
    pub trip_id: i32,
    pub plan_type: PlanType,
    pub plan_name: String,
    pub plan_place_id: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub city_name: String,
    pub utc_offset_minutes: i32,
    pub plan_details: Vec<PlanDetailParams>,
}

impl CreatePlanParams {
    /// Validates a creation body for the given trip.
    ///
    /// # Returns
    /// - `Ok(CreatePlanParams)` - Complete body, `end_date` absent or not before `start_date`
    /// - `Err(AppError::Validation)` - Missing field or reversed range
    pub fn from_dto(trip_id: i32, dto: CreatePlanDto) -> Result<Self, AppError> {
        require_fields(
            &dto,
            &[
                RequiredField::new("plan_type", |d: &CreatePlanDto| d.plan_type.is_some()),
                RequiredField::new("plan_name", |d: &CreatePlanDto| d.plan_name.is_some()),
                RequiredField::new("start_date", |d: &CreatePlanDto| d.start_date.is_some()),
                RequiredField::new("city_name", |d: &CreatePlanDto| d.city_name.is_some()),
                RequiredField::new("utc_offset_minutes", |d: &CreatePlanDto| {
                    d.utc_offset_minutes.is_some()
                }),
            ],
        )?;

        let start_date = dto.start_date.unwrap_or_default();
        if let Some(end_date) = &dto.end_date {
            require_ordered(&start_date, end_date)?;
        }

        Ok(Self {
            trip_id,
            plan_type: PlanType::from_name(&dto.plan_type.unwrap_or_default()),
            plan_name: dto.plan_name.unwrap_or_default(),
            plan_place_id: dto.plan_place_id,
            start_date,
            end_date: dto.end_date,
            description: dto.description,
            city_name: dto.city_name.unwrap_or_default(),
            utc_offset_minutes: dto.utc_offset_minutes.unwrap_or_default(),
            plan_details: PlanDetailParams::from_dtos(dto.plan_details.unwrap_or_default())?,
        })
    }
}

/// Parameters for updating a plan.
///
/// Only provided fields change. `plan_details`, if provided, replaces every existing detail.
#[derive(Debug, Clone)]
pub struct UpdatePlanParams {
    pub id: i32,
    pub trip_id: i32,
    pub plan_type: Option<PlanType>,
    pub plan_name: Option<String>,
    pub plan_place_id: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub city_name: Option<String>,
    pub utc_offset_minutes: Option<i32>,
    pub plan_details: Option<Vec<PlanDetailParams>>,
}

impl UpdatePlanParams {
    /// Validates an update body.
    ///
    /// Range ordering against the stored dates is checked by the service.
    pub fn from_dto(trip_id: i32, id: i32, dto: UpdatePlanDto) -> Result<Self, AppError> {
        require_any(
            &[
                "plan_type",
                "plan_name",
                "plan_place_id",
                "start_date",
                "end_date",
                "description",
                "city_name",
                "utc_offset_minutes",
                "plan_details",
            ],
            dto.plan_type.is_some()
                || dto.plan_name.is_some()
                || dto.plan_place_id.is_some()
                || dto.start_date.is_some()
                || dto.end_date.is_some()
                || dto.description.is_some()
                || dto.city_name.is_some()
                || dto.utc_offset_minutes.is_some()
                || dto.plan_details.is_some(),
        )?;

        Ok(Self {
            id,
            trip_id,
            plan_type: dto.plan_type.as_deref().map(PlanType::from_name),
            plan_name: dto.plan_name,
            plan_place_id: dto.plan_place_id,
            start_date: dto.start_date,
            end_date: dto.end_date,
            description: dto.description,
            city_name: dto.city_name,
            utc_offset_minutes: dto.utc_offset_minutes,
            plan_details: dto
                .plan_details
                .map(PlanDetailParams::from_dtos)
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_dto() -> CreatePlanDto {
        CreatePlanDto {
            plan_type: Some("Car Rental".to_string()),
            plan_name: Some("Hertz".to_string()),
            plan_place_id: None,
            start_date: Some(Utc.with_ymd_and_hms(2019, 4, 5, 9, 0, 0).unwrap()),
            end_date: Some(Utc.with_ymd_and_hms(2019, 4, 9, 17, 0, 0).unwrap()),
            description: None,
            city_name: Some("Florence".to_string()),
            utc_offset_minutes: Some(120),
            plan_details: Some(vec![
                NewPlanDetailDto {
                    plan_subtype: Some("Pick up".to_string()),
                    from_name: Some("ABC".to_string()),
                    ..Default::default()
                },
                NewPlanDetailDto {
                    plan_subtype: Some("Drop off".to_string()),
                    from_name: Some("DEF".to_string()),
                    ..Default::default()
                },
            ]),
        }
    }

    #[test]
    fn round_trips_known_and_unknown_plan_types() {
        assert_eq!(PlanType::from_name("Car Rental"), PlanType::CarRental);
        assert_eq!(PlanType::CarRental.as_str(), "Car Rental");
        assert_eq!(PlanType::from_name("Cruise").as_str(), "Cruise");
    }

    #[test]
    fn builds_params_with_details() {
        let params = CreatePlanParams::from_dto(2, create_dto()).unwrap();

        assert_eq!(params.trip_id, 2);
        assert_eq!(params.plan_type, PlanType::CarRental);
        assert_eq!(params.plan_details.len(), 2);
        assert_eq!(params.plan_details[1].plan_subtype, "Drop off");
    }

    #[test]
    fn allows_plan_without_end_or_details() {
        let dto = CreatePlanDto {
            end_date: None,
            plan_details: None,
            ..create_dto()
        };

        let params = CreatePlanParams::from_dto(2, dto).unwrap();

        assert!(params.end_date.is_none());
        assert!(params.plan_details.is_empty());
    }

    #[test]
    fn names_missing_plan_field() {
        let dto = CreatePlanDto {
            city_name: None,
            ..create_dto()
        };

        let result = CreatePlanParams::from_dto(2, dto);

        assert!(
            matches!(result, Err(AppError::Validation(msg)) if msg == "Missing 'city_name' in request body")
        );
    }

    #[test]
    fn names_missing_detail_subtype() {
        let dto = CreatePlanDto {
            plan_details: Some(vec![NewPlanDetailDto::default()]),
            ..create_dto()
        };

        let result = CreatePlanParams::from_dto(2, dto);

        assert!(
            matches!(result, Err(AppError::Validation(msg)) if msg == "Missing 'plan_subtype' in request body")
        );
    }

    #[test]
    fn rejects_end_before_start() {
        let dto = CreatePlanDto {
            end_date: Some(Utc.with_ymd_and_hms(2019, 4, 1, 0, 0, 0).unwrap()),
            ..create_dto()
        };

        assert!(CreatePlanParams::from_dto(2, dto).is_err());
    }

    #[test]
    fn rejects_empty_update() {
        let result = UpdatePlanParams::from_dto(1, 1, UpdatePlanDto::default());

        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
