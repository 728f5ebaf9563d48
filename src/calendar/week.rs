//! Week strip and month overview.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::insight::{EnergyClass, AUSPICIOUS_DAYS, CHALLENGING_DAYS};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("invalid month {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },
    #[error("week of {date} is outside the supported date range")]
    DateOutOfRange { date: NaiveDate },
}

/// Which energy overlays the dashboard has switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnergyLayers {
    pub auspicious: bool,
    pub challenging: bool,
    pub neutral: bool,
}

impl Default for EnergyLayers {
    fn default() -> Self {
        Self {
            auspicious: true,
            challenging: true,
            neutral: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekDay {
    pub date: NaiveDate,
    /// "Sun", "Mon", ...
    pub weekday: String,
    pub day_of_month: u32,
    pub energy: EnergyClass,
    /// "Favorable", "Caution" or "Balanced", honouring the enabled layers
    pub label: String,
    pub is_selected: bool,
}

fn label(class: EnergyClass, layers: EnergyLayers) -> &'static str {
    match class {
        EnergyClass::Auspicious if layers.auspicious => "Favorable",
        EnergyClass::Challenging if layers.challenging => "Caution",
        _ => "Balanced",
    }
}

/// The Sunday-to-Saturday week containing `selected`.
///
/// Fails when that week runs past the first or last representable date.
pub fn week_view(
    selected: NaiveDate,
    layers: EnergyLayers,
) -> Result<Vec<WeekDay>, CalendarError> {
    let out_of_range = CalendarError::DateOutOfRange { date: selected };
    let back = Duration::days(i64::from(selected.weekday().num_days_from_sunday()));
    let start = selected
        .checked_sub_signed(back)
        .ok_or_else(|| out_of_range.clone())?;

    (0..7)
        .map(|offset| -> Result<WeekDay, CalendarError> {
            let date = start
                .checked_add_signed(Duration::days(offset))
                .ok_or_else(|| out_of_range.clone())?;
            let energy = EnergyClass::of_date(date);
            Ok(WeekDay {
                date,
                weekday: date.format("%a").to_string(),
                day_of_month: date.day(),
                energy,
                label: label(energy, layers).to_string(),
                is_selected: date == selected,
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyCounts {
    pub auspicious: u32,
    pub challenging: u32,
    pub neutral: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthOverview {
    pub year: i32,
    pub month: u32,
    pub days_in_month: u32,
    /// Highlighted dates; empty when the layer is off
    pub auspicious_dates: Vec<NaiveDate>,
    pub challenging_dates: Vec<NaiveDate>,
    pub counts: EnergyCounts,
}

fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(CalendarError::InvalidMonth { year, month })?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(CalendarError::InvalidMonth { year, month })?;
    Ok((next - first).num_days() as u32)
}

pub fn month_overview(
    year: i32,
    month: u32,
    layers: EnergyLayers,
) -> Result<MonthOverview, CalendarError> {
    let days = days_in_month(year, month)?;
    let dates_for = |table: &[u32]| -> Vec<NaiveDate> {
        table
            .iter()
            .filter_map(|&d| NaiveDate::from_ymd_opt(year, month, d))
            .collect()
    };

    let auspicious = dates_for(&AUSPICIOUS_DAYS);
    let challenging = dates_for(&CHALLENGING_DAYS);
    let counts = EnergyCounts {
        auspicious: auspicious.len() as u32,
        challenging: challenging.len() as u32,
        neutral: days - auspicious.len() as u32 - challenging.len() as u32,
    };

    Ok(MonthOverview {
        year,
        month,
        days_in_month: days,
        auspicious_dates: if layers.auspicious { auspicious } else { Vec::new() },
        challenging_dates: if layers.challenging { challenging } else { Vec::new() },
        counts,
    })
}
