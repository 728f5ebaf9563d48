//! Calendar endpoints
//!
//! - `GET /api/calendar/insight?date=YYYY-MM-DD`
//! - `GET /api/calendar/week?date=YYYY-MM-DD&auspicious=&challenging=&neutral=`
//! - `GET /api/calendar/month?year=&month=&auspicious=&challenging=&neutral=`
//!
//! A missing date means today (UTC).

use axum::{extract::Query, response::Json};
use chrono::{Datelike, NaiveDate, Utc};
use serde::Deserialize;

use super::error::ApiError;
use crate::calendar::{
    daily_insight, month_overview, week_view, DailyInsight, EnergyLayers, MonthOverview, WeekDay,
};

#[derive(Debug, Default, Deserialize)]
pub struct CalendarQuery {
    pub date: Option<String>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub auspicious: Option<bool>,
    pub challenging: Option<bool>,
    pub neutral: Option<bool>,
}

impl CalendarQuery {
    fn date(&self) -> Result<NaiveDate, ApiError> {
        match self.date.as_deref() {
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|e| ApiError::BadQuery(format!("invalid date '{}': {}", raw, e))),
            None => Ok(Utc::now().date_naive()),
        }
    }

    fn layers(&self) -> EnergyLayers {
        EnergyLayers {
            auspicious: self.auspicious.unwrap_or(true),
            challenging: self.challenging.unwrap_or(true),
            neutral: self.neutral.unwrap_or(true),
        }
    }
}

/// GET /api/calendar/insight
pub async fn insight(Query(query): Query<CalendarQuery>) -> Result<Json<DailyInsight>, ApiError> {
    Ok(Json(daily_insight(query.date()?)))
}

/// GET /api/calendar/week
pub async fn week(Query(query): Query<CalendarQuery>) -> Result<Json<Vec<WeekDay>>, ApiError> {
    Ok(Json(week_view(query.date()?, query.layers())?))
}

/// GET /api/calendar/month
pub async fn month(Query(query): Query<CalendarQuery>) -> Result<Json<MonthOverview>, ApiError> {
    let today = Utc::now().date_naive();
    let year = query.year.unwrap_or_else(|| today.year());
    let month = query.month.unwrap_or_else(|| today.month());
    Ok(Json(month_overview(year, month, query.layers())?))
}
