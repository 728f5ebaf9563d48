//! Dashboard calendar
//!
//! Static, day-of-month keyed tables. Nothing here is computed from the sky.

pub mod insight;
pub mod week;

pub use insight::{daily_insight, DailyInsight, EnergyClass, AUSPICIOUS_DAYS, CHALLENGING_DAYS};
pub use week::{
    month_overview, week_view, CalendarError, EnergyCounts, EnergyLayers, MonthOverview, WeekDay,
};
