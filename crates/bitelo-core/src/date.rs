use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Day, month and year as read from a host clock.
///
/// `month_index` is zero-based (January = 0), the way the clock reports it.
/// No calendar validation is done; the values are displayed as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    pub day: u32,
    pub month_index: u32,
    pub year: i32,
}

impl CalendarDate {
    pub fn new(day: u32, month_index: u32, year: i32) -> Self {
        Self {
            day,
            month_index,
            year,
        }
    }

    pub fn from_datelike<D: Datelike>(date: &D) -> Self {
        let derived = Self::new(date.day(), date.month0(), date.year());
        tracing::debug!(
            day = derived.day,
            month_index = derived.month_index,
            year = derived.year,
            "Derived calendar date"
        );
        derived
    }

    /// Month as it should be shown for the given display mode.
    ///
    /// Widened so an out-of-range index still displays instead of overflowing.
    pub fn display_month(&self, display: MonthDisplay) -> u64 {
        let index = u64::from(self.month_index);
        match display {
            MonthDisplay::ZeroBased => index,
            MonthDisplay::OneBased => index + 1,
        }
    }

    /// `day/month/year`, e.g. `5/3/2024`.
    pub fn format(&self, display: MonthDisplay) -> String {
        format!("{}/{}/{}", self.day, self.display_month(display), self.year)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthDisplay {
    /// Show the raw month index (April = 3).
    #[default]
    ZeroBased,
    /// Calendar convention (April = 4).
    OneBased,
}

impl MonthDisplay {
    pub fn label(&self) -> &'static str {
        match self {
            MonthDisplay::ZeroBased => "Zero-based",
            MonthDisplay::OneBased => "One-based",
        }
    }
}

/// When the heading entry reads the clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePolicy {
    /// Read once when the entry is mounted; later renders reuse that value.
    #[default]
    FreezeAtMount,
    /// Read inside the render closure each time the tree is built.
    RecomputeOnRender,
}

impl DatePolicy {
    pub fn label(&self) -> &'static str {
        match self {
            DatePolicy::FreezeAtMount => "Freeze at mount",
            DatePolicy::RecomputeOnRender => "Recompute on render",
        }
    }
}
